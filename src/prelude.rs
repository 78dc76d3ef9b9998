pub use crate::change_listeners::{ListenerId, StatListener};
pub use crate::config::StatsConfig;
pub use crate::initializer::StatsInitializer;
pub use crate::schedule::StatsTick;
pub use crate::stat_definitions::{StatDefinition, StatTable};
pub use crate::stat_error::{StatError, StatResult};
pub use crate::stat_events::{SetStatCurrentValue, StatChanged};
pub use crate::stat_record::StatRecord;
pub use crate::stats_component::StatRegistry;
