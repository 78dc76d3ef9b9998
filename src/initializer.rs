use bevy::prelude::*;
use log::warn;
use crate::prelude::{StatRegistry, StatTable};
use crate::LOG_TARGET;

/// A component used to initialize an entity's `StatRegistry` from a `StatTable`
/// when this component is added to an entity.
///
/// Upon being added, an observer (`apply_stats_initializer`) calls
/// `StatRegistry::initialize` with the table and then removes the `StatsInitializer`,
/// so initialization happens once. Adding another `StatsInitializer` later re-initializes
/// the whole registry.
///
/// # Example
///
/// ```
/// # use bevy::prelude::*;
/// # use bevy_simple_stats::prelude::*;
/// # fn system(mut commands: Commands) {
/// let table = StatTable::new()
///     .with("Health", StatDefinition::new(100.0, 0.0, 100.0, 0.0))
///     .with("Stamina", StatDefinition::new(50.0, 0.0, 100.0, 5.0));
///
/// commands.spawn(StatsInitializer::new(table));
/// # }
/// ```
#[derive(Component, Debug, Clone)]
#[require(StatRegistry)]
pub struct StatsInitializer {
    /// The rows the registry is initialized from.
    pub table: StatTable,
    /// Enables the registry's per-frame debug output.
    pub print_stats: bool,
}

impl StatsInitializer {
    pub fn new(table: StatTable) -> Self {
        Self { table, print_stats: false }
    }

    pub fn with_print_stats(mut self, enabled: bool) -> Self {
        self.print_stats = enabled;
        self
    }
}

/// An observer that initializes the entity's `StatRegistry` from its `StatsInitializer`
/// when the initializer is added, then removes the initializer.
pub(crate) fn apply_stats_initializer(
    trigger: Trigger<OnAdd, StatsInitializer>,
    mut query: Query<(&StatsInitializer, &mut StatRegistry)>,
    mut commands: Commands,
) {
    let entity = trigger.target();
    let Ok((initializer, mut stats)) = query.get_mut(entity) else {
        return;
    };

    // An empty table is logged by the registry and leaves it empty.
    if let Err(err) = stats.initialize(&initializer.table) {
        warn!(target: LOG_TARGET, "entity {:?}: {}", entity, err);
    }
    stats.set_print_stats(initializer.print_stats);

    commands.entity(entity).remove::<StatsInitializer>();
}
