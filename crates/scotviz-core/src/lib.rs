pub mod columns;
pub mod config;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod pivot;
pub mod player;
pub mod profiles;
pub mod schema;
pub mod unify;
