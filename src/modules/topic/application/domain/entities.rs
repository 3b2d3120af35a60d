use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identity of a topic. Persisted topics always have a positive id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(i32);

impl TopicId {
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Whether this id could belong to a persisted topic at all.
    pub fn is_assignable(&self) -> bool {
        self.0 > 0
    }
}

impl From<i32> for TopicId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<TopicId> for i32 {
    fn from(id: TopicId) -> Self {
        id.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discussion thread container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_conversions() {
        let id = TopicId::from(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_only_positive_ids_are_assignable() {
        assert!(TopicId::from(1).is_assignable());
        assert!(!TopicId::from(0).is_assignable());
        assert!(!TopicId::from(-1).is_assignable());
        assert!(!TopicId::from(i32::MIN).is_assignable());
    }
}
