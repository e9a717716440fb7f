//! Mentoring dialogue engine with scripted learning journeys.
//!
//! This crate provides:
//! - A validated, immutable knowledge base of mentoring topics
//! - Per-user journey progress tracking
//! - A deterministic turn-by-turn dialogue engine
//! - A session API tying the three together
//!
//! # Quick Start
//!
//! ```
//! use mentor_core::{MentorSession, SessionConfig, SessionError};
//!
//! fn main() -> Result<(), SessionError> {
//!     let mut session = MentorSession::new(SessionConfig::new("Ana"))?;
//!     println!("{}", session.greet());
//!
//!     let reply = session.process_turn("produtividade");
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod knowledge;
pub mod progress;
pub mod session;
pub mod testing;

// Primary public API
pub use catalog::default_knowledge_base;
pub use engine::{Mentor, Reply, ReplyKind, DEFAULT_CONTINUE_PHRASES};
pub use knowledge::{KnowledgeBase, KnowledgeError, Step, Topic};
pub use progress::{JourneyProgress, JourneyStage, User, UserId};
pub use session::{MentorSession, SessionConfig, SessionError, TranscriptEntry};
pub use testing::TestHarness;
