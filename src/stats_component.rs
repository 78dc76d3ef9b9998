use std::collections::HashMap;
use bevy::prelude::*;
use log::{debug, warn};
use super::prelude::*;
use crate::change_listeners::{ChangeListeners, ListenerId};
use crate::LOG_TARGET;

/// The named stats of a single actor.
///
/// `StatRegistry` owns one `StatRecord` per stat name. It is populated once through
/// [`StatRegistry::initialize`], driven once per frame through [`StatRegistry::tick`], and
/// otherwise read and written by name. Looking up a name that was never initialized
/// yields [`StatError::StatNotFound`] rather than a default.
///
/// Only [`StatRegistry::set_current_value`] notifies listeners. Drift from `tick`,
/// `add_current_value` and resets change the current value silently; systems that need
/// to react to those should poll.
///
/// The registry does no locking of its own. Inside Bevy, the scheduler hands out
/// exclusive access; elsewhere, wrap the whole registry in a lock if it is shared.
#[derive(Component, Debug, Default)]
pub struct StatRegistry {
    stats: HashMap<String, StatRecord>,
    listeners: ChangeListeners,
    print_stats: bool,
}

impl StatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every stat with those described by `source`.
    ///
    /// Each stat starts with its current value equal to its base value. If `source`
    /// repeats a name, the last row wins. Listeners are kept.
    ///
    /// # Returns
    ///
    /// The number of stats registered, or [`StatError::Configuration`] if `source` was
    /// empty. In that case the registry is left empty but remains usable.
    pub fn initialize<I, S>(&mut self, source: I) -> StatResult<usize>
    where
        I: IntoIterator<Item = (S, StatDefinition)>,
        S: Into<String>,
    {
        self.stats.clear();

        for (name, definition) in source {
            self.stats.insert(name.into(), StatRecord::from(definition));
        }

        if self.stats.is_empty() {
            warn!(target: LOG_TARGET, "stat table is empty, no stats registered");
            return Err(StatError::Configuration {
                details: "stat table is empty".to_string(),
            });
        }

        debug!(target: LOG_TARGET, "registered {} stats", self.stats.len());
        Ok(self.stats.len())
    }

    /// Looks up a stat by name.
    pub fn get_stat(&self, name: &str) -> Option<&StatRecord> {
        self.stats.get(name)
    }

    fn record(&self, name: &str) -> StatResult<&StatRecord> {
        self.stats.get(name).ok_or_else(|| StatError::not_found(name))
    }

    fn record_mut(&mut self, name: &str) -> StatResult<&mut StatRecord> {
        self.stats.get_mut(name).ok_or_else(|| StatError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stats.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterates over `(name, current value)` for every stat, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.stats.iter().map(|(name, stat)| (name.as_str(), stat.current_value()))
    }

    // Current value

    pub fn current_value(&self, name: &str) -> StatResult<f32> {
        Ok(self.record(name)?.current_value())
    }

    /// Sets the current value of a stat, clamped to its bounds, and notifies every
    /// listener with the stored value before returning it.
    ///
    /// # Arguments
    ///
    /// * `name`: The stat to write.
    /// * `value`: The requested value; the stored value may differ after clamping.
    pub fn set_current_value(&mut self, name: &str, value: f32) -> StatResult<f32> {
        let new_value = self.record_mut(name)?.set_current_value(value);
        self.listeners.notify(name, new_value);
        Ok(new_value)
    }

    /// Adds `delta` to the current value. Does not notify listeners.
    pub fn add_current_value(&mut self, name: &str, delta: f32) -> StatResult<f32> {
        Ok(self.record_mut(name)?.add_current_value(delta))
    }

    // Base value

    pub fn base_value(&self, name: &str) -> StatResult<f32> {
        Ok(self.record(name)?.base_value())
    }

    /// Sets the clamped base value. The current value is not updated until the stat is
    /// reset.
    pub fn set_base_value(&mut self, name: &str, value: f32) -> StatResult<f32> {
        Ok(self.record_mut(name)?.set_base_value(value))
    }

    // Change per tick

    pub fn change_per_tick(&self, name: &str) -> StatResult<f32> {
        Ok(self.record(name)?.change_per_tick())
    }

    pub fn is_changing_per_tick(&self, name: &str) -> StatResult<bool> {
        Ok(self.record(name)?.is_changing_per_tick())
    }

    pub fn set_change_per_tick_value(&mut self, name: &str, value: f32) -> StatResult<f32> {
        Ok(self.record_mut(name)?.set_change_per_tick_value(value))
    }

    // Min / Max

    pub fn min_value(&self, name: &str) -> StatResult<f32> {
        Ok(self.record(name)?.min_value())
    }

    /// Sets the lower bound; the current value is re-clamped immediately.
    pub fn set_min_value(&mut self, name: &str, value: f32) -> StatResult<f32> {
        Ok(self.record_mut(name)?.set_min_value(value))
    }

    pub fn max_value(&self, name: &str) -> StatResult<f32> {
        Ok(self.record(name)?.max_value())
    }

    /// Sets the upper bound; the current value is re-clamped immediately.
    pub fn set_max_value(&mut self, name: &str, value: f32) -> StatResult<f32> {
        Ok(self.record_mut(name)?.set_max_value(value))
    }

    // Reset

    pub fn reset_stat(&mut self, name: &str) -> StatResult<f32> {
        Ok(self.record_mut(name)?.reset_stat())
    }

    pub fn reset_all(&mut self) {
        for stat in self.stats.values_mut() {
            stat.reset_stat();
        }
    }

    /// Applies one tick of drift to every stat.
    pub fn tick(&mut self) {
        for stat in self.stats.values_mut() {
            stat.tick_update();
        }
    }

    // Listeners

    /// Registers a callback that receives `(name, new value)` after every successful
    /// [`StatRegistry::set_current_value`].
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&str, f32) + Send + Sync + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // Debug output

    pub fn print_stats(&self) -> bool {
        self.print_stats
    }

    /// Enables logging of every stat each frame by the `print_stats` system.
    pub fn set_print_stats(&mut self, enabled: bool) -> &mut Self {
        self.print_stats = enabled;
        self
    }
}
