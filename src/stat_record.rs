use crate::stat_definitions::StatDefinition;

/// A single bounded, time-varying stat such as health or stamina.
///
/// `StatRecord` keeps two values:
/// - the *base* value, which only reflects permanent changes, and
/// - the *current* value, which is what gameplay reads and which may be pushed around
///   by temporary effects, per-tick drift or direct writes.
///
/// Both are clamped to `[min_value, max_value]`, but independently: writing one never
/// touches the other. All fields are private so no write can skip the clamp.
///
/// # Clamping
///
/// Clamping is `value.max(min).min(max)` and never panics:
/// - if `min > max` the result is `max`,
/// - a NaN value clamps to `min` (then to `max`),
/// - a NaN bound is ignored.
///
/// Keeping the bounds sane is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRecord {
    base_value: f32,
    current_value: f32,
    min_value: f32,
    max_value: f32,
    change_per_tick: f32,
}

impl Default for StatRecord {
    fn default() -> Self {
        Self {
            base_value: 0.0,
            current_value: 0.0,
            min_value: 0.0,
            max_value: 100.0,
            change_per_tick: 0.0,
        }
    }
}

#[inline]
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    // `f32::clamp` panics on inverted or NaN bounds.
    value.max(min).min(max)
}

impl StatRecord {
    /// Creates a stat whose current value starts at the (clamped) base value.
    ///
    /// # Arguments
    ///
    /// * `base_value`: The permanent value of the stat.
    /// * `min_value`: Lower bound for both base and current value.
    /// * `max_value`: Upper bound for both base and current value.
    /// * `change_per_tick`: Signed amount added to the current value on every tick.
    pub fn new(base_value: f32, min_value: f32, max_value: f32, change_per_tick: f32) -> Self {
        let mut record = Self {
            base_value,
            current_value: base_value,
            min_value,
            max_value,
            change_per_tick,
        };
        record.set_base_value(base_value);
        record.reset_stat();
        record
    }

    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    /// Clamps `value` to the stat's bounds, stores it and returns what was stored.
    ///
    /// Every other operation that changes the current value goes through here.
    pub fn set_current_value(&mut self, value: f32) -> f32 {
        self.current_value = clamp(value, self.min_value, self.max_value);
        self.current_value
    }

    pub fn add_current_value(&mut self, delta: f32) -> f32 {
        self.set_current_value(self.current_value + delta)
    }

    pub fn base_value(&self) -> f32 {
        self.base_value
    }

    /// Clamps and stores the permanent base value. The current value is left alone.
    pub fn set_base_value(&mut self, value: f32) -> f32 {
        self.base_value = clamp(value, self.min_value, self.max_value);
        self.base_value
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    /// Stores a new lower bound and re-clamps the current value against it.
    ///
    /// The current value can move even though no new value was passed in. The base
    /// value is not re-clamped.
    pub fn set_min_value(&mut self, value: f32) -> f32 {
        self.min_value = value;
        self.set_current_value(self.current_value);
        self.min_value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Stores a new upper bound and re-clamps the current value against it.
    pub fn set_max_value(&mut self, value: f32) -> f32 {
        self.max_value = value;
        self.set_current_value(self.current_value);
        self.max_value
    }

    pub fn change_per_tick(&self) -> f32 {
        self.change_per_tick
    }

    pub fn set_change_per_tick_value(&mut self, value: f32) -> f32 {
        self.change_per_tick = value;
        self.change_per_tick
    }

    /// Returns true if the stat drifts on every tick.
    pub fn is_changing_per_tick(&self) -> bool {
        self.change_per_tick != 0.0
    }

    /// Applies one tick of drift. Repeated calls compound.
    pub fn tick_update(&mut self) {
        if self.is_changing_per_tick() {
            self.add_current_value(self.change_per_tick);
        }
    }

    /// Puts the current value back to the base value.
    pub fn reset_stat(&mut self) -> f32 {
        self.set_current_value(self.base_value)
    }
}

impl From<&StatDefinition> for StatRecord {
    fn from(definition: &StatDefinition) -> Self {
        Self::new(
            definition.base,
            definition.min,
            definition.max,
            definition.change_per_tick,
        )
    }
}

impl From<StatDefinition> for StatRecord {
    fn from(definition: StatDefinition) -> Self {
        Self::from(&definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_row_defaults() {
        let stat = StatRecord::default();
        assert_eq!(stat.base_value(), 0.0);
        assert_eq!(stat.current_value(), 0.0);
        assert_eq!(stat.min_value(), 0.0);
        assert_eq!(stat.max_value(), 100.0);
        assert!(!stat.is_changing_per_tick());
    }

    #[test]
    fn test_new_starts_at_base() {
        let stat = StatRecord::new(50.0, 0.0, 100.0, 5.0);
        assert_eq!(stat.current_value(), 50.0);
        assert_eq!(stat.change_per_tick(), 5.0);

        // Out-of-range base is clamped on construction too
        let stat = StatRecord::new(150.0, 0.0, 100.0, 0.0);
        assert_eq!(stat.base_value(), 100.0);
        assert_eq!(stat.current_value(), 100.0);
    }

    #[test]
    fn test_set_current_value_clamps() {
        let mut stat = StatRecord::new(50.0, 0.0, 100.0, 0.0);

        assert_eq!(stat.set_current_value(42.5), 42.5);
        assert_eq!(stat.set_current_value(-10.0), 0.0);
        assert_eq!(stat.current_value(), 0.0);
        assert_eq!(stat.set_current_value(1000.0), 100.0);
        assert_eq!(stat.current_value(), 100.0);
    }

    #[test]
    fn test_add_saturates_at_max() {
        let mut stat = StatRecord::new(100.0, 0.0, 100.0, 0.0);
        assert_eq!(stat.add_current_value(25.0), 100.0);

        stat.set_current_value(10.0);
        assert_eq!(stat.add_current_value(-25.0), 0.0);
    }

    #[test]
    fn test_base_is_independent_of_current() {
        let mut stat = StatRecord::new(50.0, 0.0, 100.0, 0.0);
        stat.set_current_value(20.0);

        assert_eq!(stat.set_base_value(250.0), 100.0);
        assert_eq!(stat.current_value(), 20.0);

        assert_eq!(stat.reset_stat(), 100.0);
        assert_eq!(stat.current_value(), 100.0);
    }

    #[test]
    fn test_bound_changes_reclamp_current() {
        let mut stat = StatRecord::new(55.0, 0.0, 100.0, 0.0);

        assert_eq!(stat.set_max_value(50.0), 50.0);
        assert_eq!(stat.current_value(), 50.0);

        assert_eq!(stat.set_min_value(60.0), 60.0);
        // Inverted range resolves to max
        assert_eq!(stat.current_value(), 50.0);

        stat.set_max_value(80.0);
        assert_eq!(stat.current_value(), 60.0);
    }

    #[test]
    fn test_bound_changes_leave_base_alone() {
        let mut stat = StatRecord::new(90.0, 0.0, 100.0, 0.0);
        stat.set_max_value(50.0);
        assert_eq!(stat.base_value(), 90.0);

        // Reset goes through the clamp, so current still honours the new bound
        assert_eq!(stat.reset_stat(), 50.0);
    }

    #[test]
    fn test_inverted_range_never_panics() {
        let mut stat = StatRecord::new(10.0, 0.0, 100.0, 0.0);
        stat.set_max_value(-5.0);
        assert_eq!(stat.current_value(), -5.0);
        assert_eq!(stat.set_current_value(1000.0), -5.0);
        assert_eq!(stat.set_current_value(-1000.0), -5.0);
    }

    #[test]
    fn test_nan_handling() {
        let mut stat = StatRecord::new(10.0, 0.0, 100.0, 0.0);
        assert_eq!(stat.set_current_value(f32::NAN), 0.0);

        stat.set_max_value(f32::NAN);
        assert_eq!(stat.set_current_value(500.0), 500.0);
    }

    #[test]
    fn test_tick_update_compounds_and_saturates() {
        let mut stat = StatRecord::new(50.0, 0.0, 100.0, 5.0);
        for _ in 0..3 {
            stat.tick_update();
        }
        assert_eq!(stat.current_value(), 65.0);

        for _ in 0..100 {
            stat.tick_update();
        }
        assert_eq!(stat.current_value(), 100.0);

        stat.set_change_per_tick_value(-30.0);
        for _ in 0..10 {
            stat.tick_update();
        }
        assert_eq!(stat.current_value(), 0.0);
    }

    #[test]
    fn test_static_stat_does_not_tick() {
        let mut stat = StatRecord::new(50.0, 0.0, 100.0, 0.0);
        stat.set_current_value(30.0);
        stat.tick_update();
        assert_eq!(stat.current_value(), 30.0);

        assert_eq!(stat.set_change_per_tick_value(1.5), 1.5);
        assert!(stat.is_changing_per_tick());
    }

    #[test]
    fn test_from_definition() {
        let definition = StatDefinition::new(50.0, 0.0, 100.0, 5.0);
        let stat = StatRecord::from(definition);
        assert_eq!(stat, StatRecord::new(50.0, 0.0, 100.0, 5.0));
    }
}
