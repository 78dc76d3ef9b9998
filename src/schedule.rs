use bevy::{app::MainScheduleOrder, ecs::schedule::ScheduleLabel, prelude::*};

/// Inserts `StatsTick` right after `PreUpdate`, so by `Update` every registry has
/// already drifted for this frame.
///
/// If a system ticks or writes stats as part of the frame's driver work, it belongs in
/// `StatsTick`.
pub fn plugin(app: &mut App) {
    app.init_schedule(StatsTick)
        .world_mut()
        .resource_mut::<MainScheduleOrder>()
        .insert_after(PreUpdate, StatsTick);
}

/// Custom Bevy schedule label for the per-frame stat driver.
///
/// This schedule runs after `PreUpdate` and before `Update`. It holds `tick_stats`
/// followed by `print_stats`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsTick;
