use bevy::prelude::*;

/// Global settings for the stat systems added by [`crate::plugin`].
#[derive(Resource, Clone, Debug)]
pub struct StatsConfig {
    /// Tick every `StatRegistry` once per frame in the `StatsTick` schedule.
    pub auto_tick: bool,
    /// Log every registry's stats each frame, regardless of its own `print_stats` flag.
    pub print_stats: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            auto_tick: true,
            print_stats: false,
        }
    }
}

impl StatsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_tick(mut self, enabled: bool) -> Self {
        self.auto_tick = enabled;
        self
    }

    pub fn with_print_stats(mut self, enabled: bool) -> Self {
        self.print_stats = enabled;
        self
    }
}
