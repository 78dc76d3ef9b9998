use bevy::prelude::*;

pub mod change_listeners;
pub mod config;
pub mod initializer;
pub mod prelude;
pub mod schedule;
pub mod stat_definitions;
pub mod stat_error;
pub mod stat_events;
pub mod stat_record;
pub mod stats_component;
mod systems;

/// Log target for everything this crate reports.
pub(crate) const LOG_TARGET: &str = "stats";

/// Adds the stat systems, observers and the `StatsTick` schedule to an app.
///
/// ```
/// # use bevy::prelude::*;
/// let mut app = App::new();
/// app.add_plugins(MinimalPlugins).add_plugins(bevy_simple_stats::plugin);
/// ```
pub fn plugin(app: &mut App) {
    schedule::plugin(app);
    systems::register_stat_systems(app);
    stat_events::register_stat_triggers(app);
}
