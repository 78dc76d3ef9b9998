use bevy::prelude::*;
use log::info;
use super::prelude::*;
use crate::LOG_TARGET;

/// The per-frame driver: ticks every registry once.
pub(crate) fn tick_stats(
    mut stats_query: Query<&mut StatRegistry>,
    config: Res<StatsConfig>,
) {
    if !config.auto_tick {
        return;
    }

    for mut stats in stats_query.iter_mut() {
        stats.tick();
    }
}

/// Logs `name : value` for every stat of every registry that asked for it.
pub(crate) fn print_stats(
    stats_query: Query<(Entity, &StatRegistry)>,
    config: Res<StatsConfig>,
) {
    for (entity, stats) in stats_query.iter() {
        if !(config.print_stats || stats.print_stats()) {
            continue;
        }
        for (name, value) in stats.iter() {
            info!(target: LOG_TARGET, "{:?} {} : {}", entity, name, value);
        }
    }
}

pub(crate) fn register_stat_systems(app: &mut App) {
    app.init_resource::<StatsConfig>()
        .add_systems(StatsTick, (tick_stats, print_stats).chain());
}
