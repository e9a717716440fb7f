//! Per-user journey progress.
//!
//! A [`User`] records how many steps of each topic have been completed. The
//! counts are monotonic and deliberately unbounded: a count that reaches the
//! topic's step total is the completion signal, consumed through the
//! [`JourneyStage`] state rather than compared at every call site.

use crate::knowledge::{KnowledgeBase, Topic};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for users, scoped to one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a user stands within one topic's journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyStage {
    /// The zero-based index of the next step to deliver.
    InProgress(usize),
    /// Every step has been delivered; only the closing message remains.
    Completed,
}

impl JourneyStage {
    /// Derive the stage from a completed-step count and the journey length.
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if completed >= total {
            JourneyStage::Completed
        } else {
            JourneyStage::InProgress(completed)
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, JourneyStage::Completed)
    }
}

/// One row of a progress overview, for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyProgress {
    pub topic: String,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub is_complete: bool,
}

/// A user and their per-topic progress. Created once per session, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    /// Completed step count per topic name.
    progress: HashMap<String, usize>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            progress: HashMap::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Completed steps for a topic; zero when never touched.
    pub fn completed_steps(&self, topic_name: &str) -> usize {
        self.progress.get(topic_name).copied().unwrap_or(0)
    }

    /// Record that one more step of the topic has been completed.
    ///
    /// No upper bound check: completing the last step pushes the count to
    /// the topic's step total, which [`JourneyStage`] reads as `Completed`.
    pub fn advance(&mut self, topic_name: &str) {
        *self.progress.entry(topic_name.to_string()).or_insert(0) += 1;
    }

    /// Stage of the user's journey through the given topic.
    pub fn stage(&self, topic: &Topic) -> JourneyStage {
        JourneyStage::from_counts(self.completed_steps(&topic.name), topic.total_steps())
    }

    /// Topics the user has touched, with their completed-step counts.
    pub fn journeys(&self) -> impl Iterator<Item = (&str, usize)> {
        self.progress.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Progress across every topic in the base, in base order. Displayed
    /// counts are clamped to the journey length.
    pub fn summary(&self, knowledge: &KnowledgeBase) -> Vec<JourneyProgress> {
        knowledge
            .topics()
            .iter()
            .map(|topic| {
                let completed = self.completed_steps(&topic.name);
                let total = topic.total_steps();
                JourneyProgress {
                    topic: topic.name.clone(),
                    completed_steps: completed.min(total),
                    total_steps: total,
                    is_complete: completed >= total,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Step;

    #[test]
    fn test_untouched_topic_reports_zero() {
        let user = User::new("Ana");
        assert_eq!(user.completed_steps("produtividade"), 0);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut user = User::new("Ana");
        for expected in 1..=5 {
            user.advance("foco");
            assert_eq!(user.completed_steps("foco"), expected);
        }
    }

    #[test]
    fn test_advance_is_per_topic() {
        let mut user = User::new("Ana");
        user.advance("foco");
        user.advance("escrita");
        user.advance("foco");
        assert_eq!(user.completed_steps("foco"), 2);
        assert_eq!(user.completed_steps("escrita"), 1);
    }

    #[test]
    fn test_stage_from_counts() {
        assert_eq!(JourneyStage::from_counts(0, 3), JourneyStage::InProgress(0));
        assert_eq!(JourneyStage::from_counts(2, 3), JourneyStage::InProgress(2));
        assert_eq!(JourneyStage::from_counts(3, 3), JourneyStage::Completed);
        // Counts past the end still read as completed.
        assert_eq!(JourneyStage::from_counts(4, 3), JourneyStage::Completed);
    }

    #[test]
    fn test_stage_for_topic() {
        let topic = Topic::new(
            "foco",
            vec![Step::new("a", "b"), Step::new("c", "d")],
            "end",
        );
        let mut user = User::new("Ana");
        assert_eq!(user.stage(&topic), JourneyStage::InProgress(0));

        user.advance("foco");
        assert_eq!(user.stage(&topic), JourneyStage::InProgress(1));

        user.advance("foco");
        assert!(user.stage(&topic).is_completed());
    }

    #[test]
    fn test_summary_follows_base_order_and_clamps() {
        let base = KnowledgeBase::new(vec![
            Topic::new("a", vec![Step::new("x", "y")], "end"),
            Topic::new("b", vec![Step::new("x", "y"), Step::new("x", "y")], "end"),
        ])
        .unwrap();

        let mut user = User::new("Ana");
        user.advance("a");
        // Completion leaves the raw count at the step total; the summary
        // clamps anything beyond it.
        user.advance("a");

        let summary = user.summary(&base);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].topic, "a");
        assert_eq!(summary[0].completed_steps, 1);
        assert!(summary[0].is_complete);
        assert_eq!(summary[1].topic, "b");
        assert_eq!(summary[1].completed_steps, 0);
        assert!(!summary[1].is_complete);
    }
}
