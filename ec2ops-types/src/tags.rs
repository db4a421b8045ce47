// SPDX-License-Identifier: GPL-3.0-only

//! Tag mappings and the reconciliation arithmetic
//!
//! A `TagSet` is the key/value mapping attached to (or desired for) a load
//! balancer. The two diff operations, [`TagSet::additions`] and
//! [`TagSet::exact_matches`], are the whole decision logic of the tag
//! reconciler; everything else is transport.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One tag in the vendor's native list-of-pairs form, used in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPair {
    pub key: String,
    pub value: String,
}

impl TagPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Mapping from tag key to tag value; keys unique, iteration order sorted.
///
/// Serialized as a JSON object. The BTreeMap keeps every derived sequence
/// (response tags, keys sent to remove) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeMap<String, String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// True when `key` is mapped to exactly `value`.
    pub fn contains_pair(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Tag keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Pairs of `desired` missing from `self` or mapped to a different value.
    ///
    /// This is the present-mode add set: empty means every desired pair is
    /// already attached with an equal value.
    pub fn additions(&self, desired: &TagSet) -> TagSet {
        TagSet(
            desired
                .0
                .iter()
                .filter(|(key, value)| self.get(key) != Some(value.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Pairs of `desired` present in `self` with equal key AND value.
    ///
    /// This is the absent-mode remove set. Equality is on the full pair: a
    /// desired pair whose value differs from the attached value for that key
    /// is never eligible for removal, even though only keys are sent to the
    /// remove call.
    pub fn exact_matches(&self, desired: &TagSet) -> TagSet {
        TagSet(
            desired
                .0
                .iter()
                .filter(|(key, value)| self.contains_pair(key, value))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// The set as a sorted list of pairs, the wire shape of response tags.
    pub fn to_pairs(&self) -> Vec<TagPair> {
        self.0
            .iter()
            .map(|(key, value)| TagPair::new(key.clone(), value.clone()))
            .collect()
    }
}

impl From<BTreeMap<String, String>> for TagSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl IntoIterator for TagSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> TagSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn additions_empty_when_desired_is_subset() {
        let current = tags(&[("Environment", "Prod"), ("Team", "Infra")]);
        let desired = tags(&[("Environment", "Prod")]);

        assert!(current.additions(&desired).is_empty());
    }

    #[test]
    fn additions_includes_missing_key() {
        let current = tags(&[("Environment", "Prod")]);
        let desired = tags(&[("Environment", "Prod"), ("Team", "Infra")]);

        let to_add = current.additions(&desired);
        assert_eq!(to_add, tags(&[("Team", "Infra")]));
    }

    #[test]
    fn additions_includes_changed_value() {
        let current = tags(&[("Environment", "Test")]);
        let desired = tags(&[("Environment", "Prod")]);

        let to_add = current.additions(&desired);
        assert_eq!(to_add, tags(&[("Environment", "Prod")]));
    }

    #[test]
    fn exact_matches_requires_equal_value() {
        let current = tags(&[("LoadTest", "passed")]);
        let desired = tags(&[("LoadTest", "failed")]);

        assert!(current.exact_matches(&desired).is_empty());
    }

    #[test]
    fn exact_matches_selects_only_matching_pairs() {
        let current = tags(&[("Environment", "Prod"), ("Team", "Infra")]);
        let desired = tags(&[("Environment", "Prod"), ("Team", "Web")]);

        let to_remove = current.exact_matches(&desired);
        assert_eq!(to_remove, tags(&[("Environment", "Prod")]));
    }

    #[test]
    fn to_pairs_is_sorted_by_key() {
        let set = tags(&[("b", "2"), ("a", "1"), ("c", "3")]);
        let keys: Vec<_> = set.to_pairs().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn serializes_as_json_object() {
        let set = tags(&[("Environment", "Prod")]);
        let json = serde_json::to_string(&set).expect("serialize tag set");
        assert_eq!(json, r#"{"Environment":"Prod"}"#);

        let parsed: TagSet = serde_json::from_str(&json).expect("deserialize tag set");
        assert_eq!(parsed, set);
    }
}
