//! MentorSession - the primary public API for mentoring dialogues.
//!
//! Wraps the knowledge base handle, the user's progress, and the dialogue
//! engine into a single, easy-to-use API. One session serves one user and
//! owns its own read-only knowledge base handle; nothing is shared across
//! sessions and nothing survives them.

use crate::catalog::default_knowledge_base;
use crate::engine::{Mentor, Reply};
use crate::knowledge::{KnowledgeBase, KnowledgeError};
use crate::progress::{JourneyProgress, User};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors from session construction.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),
}

/// Configuration for creating a new mentoring session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Display name for the user.
    pub user_name: String,

    /// Knowledge base handle; the built-in catalog when absent.
    pub knowledge: Option<Arc<KnowledgeBase>>,

    /// JSON catalog file to load instead of the built-in catalog. Takes
    /// precedence over `knowledge`.
    pub catalog_file: Option<PathBuf>,

    /// Continuation phrase override.
    pub continue_phrases: Option<Vec<String>>,
}

impl SessionConfig {
    /// Create a new session config with the user's display name.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// Use a pre-built knowledge base.
    pub fn with_knowledge_base(mut self, knowledge: Arc<KnowledgeBase>) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Load the knowledge base from a JSON catalog file.
    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_file = Some(path.into());
        self
    }

    /// Replace the continuation phrase set.
    pub fn with_continue_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.continue_phrases = Some(phrases.into_iter().map(Into::into).collect());
        self
    }
}

/// An entry in the session transcript.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// What the user typed (trimmed).
    pub user_input: String,
    /// The reply produced for it.
    pub reply: Reply,
    /// Turn number, starting at 1.
    pub turn: usize,
}

/// A mentoring session.
///
/// This is the main entry point for mentoring dialogues. It manages:
/// - The knowledge base of journeys
/// - The user's per-topic progress
/// - The dialogue engine and its active topic
pub struct MentorSession {
    mentor: Mentor,
    user: User,
    transcript: Vec<TranscriptEntry>,
}

impl MentorSession {
    /// Create a new session with the given configuration.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let knowledge = match (&config.catalog_file, config.knowledge) {
            (Some(path), _) => Arc::new(KnowledgeBase::load_json(path)?),
            (None, Some(knowledge)) => knowledge,
            (None, None) => default_knowledge_base(),
        };

        let mut mentor = Mentor::new(knowledge);
        if let Some(phrases) = config.continue_phrases {
            mentor = mentor.with_continue_phrases(phrases);
        }

        let user = User::new(config.user_name);
        debug!(
            user = %user.name(),
            topics = mentor.knowledge().len(),
            "session started"
        );

        Ok(Self {
            mentor,
            user,
            transcript: Vec::new(),
        })
    }

    /// The greeting for session start, listing available topics.
    pub fn greet(&self) -> String {
        self.mentor.greet(&self.user)
    }

    /// Process one line of user input and get the reply.
    ///
    /// This is the single entry point the shell calls once per non-exit
    /// line. It never fails; unknown input becomes conversational text.
    pub fn process_turn(&mut self, line: &str) -> Reply {
        let reply = self.mentor.respond(line, &mut self.user);

        self.transcript.push(TranscriptEntry {
            user_input: line.trim().to_string(),
            reply: reply.clone(),
            turn: self.transcript.len() + 1,
        });

        reply
    }

    // ========================================================================
    // Session State Queries
    // ========================================================================

    /// The user this session serves.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The user's display name.
    pub fn user_name(&self) -> &str {
        self.user.name()
    }

    /// Canonical name of the topic currently in focus.
    pub fn active_topic(&self) -> Option<&str> {
        self.mentor.active_topic()
    }

    /// Completed steps for a topic; zero when never touched.
    pub fn completed_steps(&self, topic_name: &str) -> usize {
        self.user.completed_steps(topic_name)
    }

    /// Progress across every topic in the base, in base order.
    pub fn progress_summary(&self) -> Vec<JourneyProgress> {
        self.user.summary(self.mentor.knowledge())
    }

    /// The knowledge base this session reads from.
    pub fn knowledge(&self) -> &KnowledgeBase {
        self.mentor.knowledge()
    }

    /// The transcript of all turns so far.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Number of turns processed.
    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    /// The most recent reply, if any.
    pub fn last_reply(&self) -> Option<&Reply> {
        self.transcript.last().map(|entry| &entry.reply)
    }
}
