//! Knowledge base of mentoring journeys.
//!
//! Contains the typed model for topics and steps, the lookup rules that
//! resolve free-text input to a topic, and the JSON catalog format for
//! loading a knowledge base from disk.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors from knowledge base construction and catalog loading.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Topic '{0}' has no steps")]
    EmptyTopic(String),

    #[error("Duplicate topic name: {0}")]
    DuplicateTopic(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// One unit of advice within a journey, plus the follow-up question that
/// invites the user to reflect before moving on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The advice delivered for this step.
    pub advice: String,
    /// The follow-up question shown after the advice.
    pub prompt: String,
}

impl Step {
    pub fn new(advice: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            advice: advice.into(),
            prompt: prompt.into(),
        }
    }
}

/// A named learning journey: an ordered sequence of steps plus a closing
/// message delivered once the last step is behind the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Canonical name, unique within a knowledge base. Lowercased when the
    /// base is constructed.
    pub name: String,
    /// Alternate strings that resolve to this topic, matched by exact
    /// equality after lowercasing (not substring containment).
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Ordered steps of the journey. Never empty in a validated base.
    pub steps: Vec<Step>,
    /// Message shown when the journey is complete.
    pub closing: String,
}

impl Topic {
    /// Create a topic with no synonyms.
    pub fn new(name: impl Into<String>, steps: Vec<Step>, closing: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synonyms: Vec::new(),
            steps,
            closing: closing.into(),
        }
    }

    /// Set the synonym list.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Number of steps in the journey.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Step at the given zero-based index, if any.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}

/// Current catalog file version.
const CATALOG_VERSION: u32 = 1;

/// On-disk catalog format: a versioned list of topics.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: u32,
    topics: Vec<Topic>,
}

/// An ordered, immutable collection of topics.
///
/// Construction validates the invariants the engine relies on: every topic
/// has at least one step and no two topics share a canonical name. Names and
/// synonyms are lowercased so matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
}

impl KnowledgeBase {
    /// Build a validated knowledge base from a list of topics.
    pub fn new(topics: Vec<Topic>) -> Result<Self, KnowledgeError> {
        let mut topics = topics;
        let mut seen = HashSet::new();

        for topic in &mut topics {
            topic.name = topic.name.trim().to_lowercase();
            for synonym in &mut topic.synonyms {
                *synonym = synonym.trim().to_lowercase();
            }

            if topic.steps.is_empty() {
                return Err(KnowledgeError::EmptyTopic(topic.name.clone()));
            }
            if !seen.insert(topic.name.clone()) {
                return Err(KnowledgeError::DuplicateTopic(topic.name.clone()));
            }
        }

        Ok(Self { topics })
    }

    /// Load a knowledge base from a JSON catalog file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path)?;
        let catalog: CatalogFile = serde_json::from_str(&content)?;

        if catalog.version != CATALOG_VERSION {
            return Err(KnowledgeError::VersionMismatch {
                expected: CATALOG_VERSION,
                found: catalog.version,
            });
        }

        Self::new(catalog.topics)
    }

    /// Write the catalog to a JSON file in the format `load_json` reads.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), KnowledgeError> {
        let catalog = CatalogFile {
            version: CATALOG_VERSION,
            topics: self.topics.clone(),
        };
        let content = serde_json::to_string_pretty(&catalog)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve free-text input to a topic.
    ///
    /// The input is lowercased and compared against each topic in base
    /// order: first the canonical name, then each synonym, both by exact
    /// equality. The first matching topic wins.
    pub fn find_topic(&self, input: &str) -> Option<&Topic> {
        let input = input.trim().to_lowercase();
        self.topics
            .iter()
            .find(|t| t.name == input || t.synonyms.iter().any(|s| *s == input))
    }

    /// Look up a topic by its canonical name.
    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Canonical topic names in base order, for the greeting.
    pub fn topic_names(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.name.as_str()).collect()
    }

    /// The topics in base order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Number of topics in the base.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
