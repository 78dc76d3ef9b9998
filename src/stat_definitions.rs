use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// One row of a stat table: the initial parameters of a single stat.
///
/// Missing fields take the same defaults as `StatRecord::default()`, so a row like
/// `{ "base": 50.0, "change_per_tick": 5.0 }` describes a 0..100 stat that regenerates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatDefinition {
    pub base: f32,
    pub min: f32,
    pub max: f32,
    pub change_per_tick: f32,
}

impl Default for StatDefinition {
    fn default() -> Self {
        Self {
            base: 0.0,
            min: 0.0,
            max: 100.0,
            change_per_tick: 0.0,
        }
    }
}

impl StatDefinition {
    pub fn new(base: f32, min: f32, max: f32, change_per_tick: f32) -> Self {
        Self { base, min, max, change_per_tick }
    }
}

/// The table a `StatRegistry` is initialized from, keyed by stat name.
///
/// Where the table comes from (a RON/JSON asset, a database, code) is up to the caller;
/// it deserializes from any map-shaped serde format.
///
/// # Example
///
/// ```
/// # use bevy_simple_stats::prelude::*;
/// let table = StatTable::new()
///     .with("Health", StatDefinition::new(100.0, 0.0, 100.0, 0.0))
///     .with("Stamina", StatDefinition::new(50.0, 0.0, 100.0, 5.0));
///
/// let mut stats = StatRegistry::new();
/// assert_eq!(stats.initialize(table), Ok(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatTable(HashMap<String, StatDefinition>);

impl StatTable {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builder form of `insert`.
    pub fn with(mut self, name: &str, definition: StatDefinition) -> Self {
        self.insert(name, definition);
        self
    }

    /// Adds or replaces the row for `name`.
    pub fn insert(&mut self, name: &str, definition: StatDefinition) -> &mut Self {
        self.0.insert(name.to_string(), definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&StatDefinition> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatDefinition)> {
        self.0.iter().map(|(name, definition)| (name.as_str(), definition))
    }
}

impl IntoIterator for StatTable {
    type Item = (String, StatDefinition);
    type IntoIter = std::collections::hash_map::IntoIter<String, StatDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StatTable {
    type Item = (&'a str, StatDefinition);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, StatDefinition)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter().map(|(name, definition)| (name.as_str(), *definition)))
    }
}

impl<S: Into<String>> FromIterator<(S, StatDefinition)> for StatTable {
    fn from_iter<I: IntoIterator<Item = (S, StatDefinition)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, definition)| (name.into(), definition)).collect())
    }
}
