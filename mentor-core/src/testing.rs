//! Testing utilities for mentoring dialogues.
//!
//! This module provides tools for integration testing:
//! - `TestHarness` for scripted conversation scenarios
//! - Assertion helpers for verifying engine and progress state

use crate::engine::{Reply, ReplyKind};
use crate::knowledge::KnowledgeBase;
use crate::session::{MentorSession, SessionConfig};
use std::sync::Arc;

/// Test harness for running conversation scenarios.
pub struct TestHarness {
    /// The session under test.
    pub session: MentorSession,
}

impl TestHarness {
    /// Create a harness over the built-in catalog.
    pub fn new() -> Self {
        let session = MentorSession::new(SessionConfig::new("Teste"))
            .expect("built-in catalog session always constructs");
        Self { session }
    }

    /// Create a harness over a custom knowledge base.
    pub fn with_knowledge_base(knowledge: KnowledgeBase) -> Self {
        let config = SessionConfig::new("Teste").with_knowledge_base(Arc::new(knowledge));
        let session =
            MentorSession::new(config).expect("prebuilt-base session always constructs");
        Self { session }
    }

    /// Send one line of input and get the reply.
    pub fn input(&mut self, line: &str) -> Reply {
        self.session.process_turn(line)
    }

    /// Canonical name of the topic currently in focus.
    pub fn active_topic(&self) -> Option<&str> {
        self.session.active_topic()
    }

    /// Completed steps for a topic.
    pub fn completed_steps(&self, topic: &str) -> usize {
        self.session.completed_steps(topic)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that a reply rendered the given step (zero-based index).
#[track_caller]
pub fn assert_step(reply: &Reply, topic: &str, index: usize, total: usize) {
    assert_eq!(
        reply.kind,
        ReplyKind::Step {
            topic: topic.to_string(),
            index,
            total,
        },
        "Expected step {}/{total} of '{topic}', got {:?}",
        index + 1,
        reply.kind
    );
}

/// Assert that a reply rendered the given topic's closing message.
#[track_caller]
pub fn assert_completed(reply: &Reply, topic: &str) {
    assert_eq!(
        reply.kind,
        ReplyKind::Completed {
            topic: topic.to_string(),
        },
        "Expected completion of '{topic}', got {:?}",
        reply.kind
    );
}

/// Assert that a reply asked the user to pick a topic.
#[track_caller]
pub fn assert_choose_topic(reply: &Reply) {
    assert_eq!(
        reply.kind,
        ReplyKind::ChooseTopic,
        "Expected the choose-a-topic prompt, got {:?}",
        reply.kind
    );
}

/// Assert the topic currently in focus.
#[track_caller]
pub fn assert_active_topic(harness: &TestHarness, expected: Option<&str>) {
    assert_eq!(
        harness.active_topic(),
        expected,
        "Expected active topic {expected:?}"
    );
}

/// Assert a topic's recorded completed-step count.
#[track_caller]
pub fn assert_progress(harness: &TestHarness, topic: &str, expected: usize) {
    let actual = harness.completed_steps(topic);
    assert_eq!(
        actual, expected,
        "Expected {expected} completed steps for '{topic}', got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_basic_exchange() {
        let mut harness = TestHarness::new();

        let reply = harness.input("produtividade");
        assert_step(&reply, "produtividade", 0, 3);
        assert_active_topic(&harness, Some("produtividade"));
        assert_progress(&harness, "produtividade", 0);
    }

    #[test]
    fn test_harness_reports_choose_topic() {
        let mut harness = TestHarness::new();
        let reply = harness.input("nada disso");
        assert_choose_topic(&reply);
        assert_active_topic(&harness, None);
    }

    #[test]
    fn test_harness_custom_base() {
        use crate::knowledge::{Step, Topic};

        let base = KnowledgeBase::new(vec![Topic::new(
            "xadrez",
            vec![Step::new("Controle o centro.", "Faz sentido?")],
            "Boa partida!",
        )])
        .unwrap();

        let mut harness = TestHarness::with_knowledge_base(base);
        let reply = harness.input("xadrez");
        assert_step(&reply, "xadrez", 0, 1);

        let reply = harness.input("sim");
        assert_completed(&reply, "xadrez");
    }
}
