use bevy::app::App;
use bevy::prelude::{Commands, Event, Query, Trigger};
use log::warn;
use crate::prelude::StatRegistry;
use crate::initializer::apply_stats_initializer;
use crate::LOG_TARGET;

/// Request to set a stat's current value on the targeted entity.
///
/// Trigger it with `commands.trigger_targets(SetStatCurrentValue::new("Health", 10.0), entity)`.
/// The write goes through `StatRegistry::set_current_value`, so the registry's own
/// listeners fire, and a [`StatChanged`] is then triggered on the same entity.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SetStatCurrentValue {
    pub name: String,
    pub value: f32,
}

impl SetStatCurrentValue {
    pub fn new(name: &str, value: f32) -> Self {
        Self { name: name.to_string(), value }
    }
}

/// Triggered on an entity after a [`SetStatCurrentValue`] was applied to it, carrying the
/// clamped value that was stored.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct StatChanged {
    pub name: String,
    pub value: f32,
}

pub fn on_set_current_value(
    trigger: Trigger<SetStatCurrentValue>,
    mut stat_query: Query<&mut StatRegistry>,
    mut commands: Commands,
) {
    let entity = trigger.target();
    let Ok(mut stats) = stat_query.get_mut(entity) else {
        warn!(target: LOG_TARGET, "entity {:?} has no StatRegistry, ignoring write to '{}'", entity, trigger.name);
        return;
    };

    match stats.set_current_value(&trigger.name, trigger.value) {
        Ok(value) => {
            commands.trigger_targets(StatChanged { name: trigger.name.clone(), value }, entity);
        }
        Err(err) => warn!(target: LOG_TARGET, "entity {:?}: {}", entity, err),
    }
}

pub fn register_stat_triggers(app: &mut App) {
    app.add_observer(apply_stats_initializer)
        .add_observer(on_set_current_value);
}
