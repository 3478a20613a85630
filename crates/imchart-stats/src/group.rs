//! Order-preserving grouping
//!
//! Keys keep the order of their first appearance, which is also the order
//! categorical scales use for their domains.

use std::collections::HashMap;
use std::hash::Hash;

use crate::summary::FiveNumberSummary;

/// Values partitioned by key, keys in first-appearance order
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    keys: Vec<K>,
    members: Vec<Vec<V>>,
    index: HashMap<K, usize>,
}

impl<K, V> Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            members: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a value to its key's group, creating the group on first sight
    pub fn push(&mut self, key: K, value: V) {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.keys.len();
                self.index.insert(key.clone(), slot);
                self.keys.push(key);
                self.members.push(Vec::new());
                slot
            }
        };
        self.members[slot].push(value);
    }

    /// Keys in first-appearance order
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&slot| self.members[slot].as_slice())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate `(key, values)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.keys
            .iter()
            .zip(self.members.iter().map(|m| m.as_slice()))
    }
}

impl<K> Groups<K, f64>
where
    K: Eq + Hash + Clone,
{
    /// Five-number summary per group; groups with no finite value are skipped
    pub fn summarize(&self) -> Vec<(K, FiveNumberSummary)> {
        self.iter()
            .filter_map(|(k, values)| {
                FiveNumberSummary::from_data(values).map(|s| (k.clone(), s))
            })
            .collect()
    }

    /// Mean per group
    pub fn means(&self) -> Vec<(K, f64)> {
        self.iter()
            .filter_map(|(k, values)| mean(values).map(|m| (k.clone(), m)))
            .collect()
    }
}

impl<K, V> Default for Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Partition items by `key`, collecting `value` for each
pub fn group_by<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> V,
) -> Groups<K, V>
where
    K: Eq + Hash + Clone,
{
    let mut groups = Groups::new();
    for item in items {
        groups.push(key(&item), value(&item));
    }
    groups
}

/// Distinct values in first-appearance order
pub fn unique_in_order<K>(items: impl IntoIterator<Item = K>) -> Vec<K>
where
    K: Eq + Hash + Clone,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
