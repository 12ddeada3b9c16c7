//! Answer set collected by the wizard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::QuestionId;

/// Mapping from question id to the recorded integer value.
///
/// Presence is explicit: a question answered with `0` is stored as `Some(0)`,
/// an untouched question is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, i64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: QuestionId) -> Option<i64> {
        self.0.get(&id).copied()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains_key(&id)
    }

    /// Insert or overwrite an answer, returning the previous value.
    pub fn insert(&mut self, id: QuestionId, value: i64) -> Option<i64> {
        self.0.insert(id, value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i64)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }
}

impl FromIterator<(QuestionId, i64)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(QuestionId, i64); N]> for AnswerSet {
    fn from(pairs: [(QuestionId, i64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
