//! Time-index state behind the external slider and play/pause button. The
//! periodic trigger lives in the UI layer; this struct only answers "what is
//! the next time value".

/// Interval the external timer is expected to fire on while playing.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    start: f64,
    end: f64,
    step: f64,
    current: f64,
    playing: bool,
    tick_interval_ms: u64,
}

impl Player {
    pub fn new(bounds: (f64, f64), step: f64) -> Self {
        Self {
            start: bounds.0,
            end: bounds.1,
            step,
            current: bounds.0,
            playing: false,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }

    /// Slider with unit step over the schema's declared time bounds.
    pub fn from_schema(schema: &crate::schema::PlotSchema) -> Self {
        Self::new(schema.slider_bounds(), 1.0)
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Interval the external timer should fire `tick` on while playing.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn with_tick_interval_ms(mut self, interval: u64) -> Self {
        self.tick_interval_ms = interval;
        self
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flips play/pause and reports the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Advances one step, wrapping to the start once past the end.
    pub fn advance(&mut self) -> f64 {
        let next = self.current + self.step;
        self.current = if next > self.end { self.start } else { next };
        self.current
    }

    /// Slider drag: clamps into bounds.
    pub fn seek(&mut self, value: f64) {
        self.current = value.clamp(self.start, self.end);
    }

    /// One timer firing. Advances only while playing.
    pub fn tick(&mut self) -> Option<f64> {
        if self.playing {
            Some(self.advance())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn advance_wraps_past_the_end() {
        let mut player = Player::new((2008.0, 2010.0), 1.0);
        player.seek(2010.0);
        assert_eq!(player.advance(), 2008.0);
    }

    #[test]
    fn advance_steps_inside_bounds() {
        let mut player = Player::new((2008.0, 2010.0), 1.0);
        assert_eq!(player.advance(), 2009.0);
        assert_eq!(player.advance(), 2010.0);
        assert_eq!(player.advance(), 2008.0);
    }

    #[test]
    fn tick_is_inert_while_paused() {
        let mut player = Player::new((2008.0, 2010.0), 1.0);
        assert_eq!(player.tick(), None);
        player.play();
        assert_eq!(player.tick(), Some(2009.0));
        player.pause();
        assert_eq!(player.tick(), None);
        assert_eq!(player.current(), 2009.0);
    }

    #[test]
    fn timer_interval_defaults_to_the_dashboard_cadence() {
        let player = Player::new((2008.0, 2010.0), 1.0);
        assert_eq!(player.tick_interval_ms(), super::DEFAULT_TICK_INTERVAL_MS);
        let slow = player.with_tick_interval_ms(500);
        assert_eq!(slow.tick_interval_ms(), 500);
    }

    #[test]
    fn seek_clamps_to_bounds() {
        let mut player = Player::new((2008.0, 2010.0), 1.0);
        player.seek(1999.0);
        assert_eq!(player.current(), 2008.0);
        player.seek(2525.0);
        assert_eq!(player.current(), 2010.0);
    }
}
