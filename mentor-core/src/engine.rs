//! The dialogue engine: one input line in, one reply out.
//!
//! Implements the turn algorithm over {no active topic, in topic}:
//! continuation phrases advance the active journey, topic words switch
//! focus, and anything else re-renders the current step or asks the user
//! to pick a topic. The engine is pure local computation; all reading and
//! printing belongs to the shell.

use crate::knowledge::KnowledgeBase;
use crate::progress::{JourneyStage, User};
use std::sync::Arc;
use tracing::debug;

/// Phrases that signal the user wants the next step, matched by substring
/// containment against the lowercased input.
pub const DEFAULT_CONTINUE_PHRASES: &[&str] = &["próximo", "continue", "sim", "ok", "pode ser"];

/// Fixed reply when no topic is active and the input matched nothing.
const CHOOSE_TOPIC_PROMPT: &str = "Por favor, escolha um dos tópicos de foco para começarmos.";

/// What a reply represents, so shells and tests can branch without parsing
/// the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKind {
    /// No topic is active; the user was asked to pick one.
    ChooseTopic,
    /// A step of the active journey was rendered (index is zero-based).
    Step {
        topic: String,
        index: usize,
        total: usize,
    },
    /// The journey's closing message was rendered and focus was cleared.
    Completed { topic: String },
}

/// A rendered reply plus its structured meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The text to show the user.
    pub text: String,
    /// What this turn resolved to.
    pub kind: ReplyKind,
}

impl Reply {
    fn choose_topic() -> Self {
        Self {
            text: CHOOSE_TOPIC_PROMPT.to_string(),
            kind: ReplyKind::ChooseTopic,
        }
    }
}

/// The mentoring dialogue engine.
///
/// Holds a read-only knowledge base handle, the configured continuation
/// phrases, and the single piece of mutable conversation state: the
/// currently active topic. User progress lives on the [`User`] passed into
/// [`Mentor::respond`].
pub struct Mentor {
    knowledge: Arc<KnowledgeBase>,
    active_topic: Option<String>,
    continue_phrases: Vec<String>,
}

impl Mentor {
    /// Create an engine over the given knowledge base with the default
    /// continuation phrases.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            active_topic: None,
            continue_phrases: DEFAULT_CONTINUE_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Replace the continuation phrase set.
    pub fn with_continue_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.continue_phrases = phrases
            .into_iter()
            .map(|p| p.into().to_lowercase())
            .collect();
        self
    }

    /// The greeting for session start, listing topics in base order.
    pub fn greet(&self, user: &User) -> String {
        let topics = self.knowledge.topic_names().join(", ");
        format!(
            "Olá, {}! É um prazer tê-lo aqui.\n\
             Estou pronto para iniciarmos uma jornada de desenvolvimento.\n\
             Podemos focar em: **{}**.\n\
             Qual área você gostaria de aprimorar hoje?",
            user.name(),
            topics
        )
    }

    /// Whether the input asks to advance to the next step.
    pub fn is_continuation(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        self.continue_phrases
            .iter()
            .any(|phrase| input.contains(phrase.as_str()))
    }

    /// Canonical name of the topic currently in focus.
    pub fn active_topic(&self) -> Option<&str> {
        self.active_topic.as_deref()
    }

    /// The knowledge base this engine reads from.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Process one line of user input.
    ///
    /// Continuation takes priority over topic switching: an input that both
    /// contains a continuation phrase and names a topic advances the active
    /// journey. Switching to a previously started topic resumes from its
    /// recorded step. Rendering a step never mutates progress; advancing
    /// only happens on the following continuation turn.
    pub fn respond(&mut self, input: &str, user: &mut User) -> Reply {
        let input = input.trim().to_lowercase();

        match self.active_topic.clone() {
            Some(name) if self.is_continuation(&input) => {
                user.advance(&name);
                debug!(topic = %name, steps = user.completed_steps(&name), "continuation");
            }
            _ => {
                if let Some(topic) = self.knowledge.find_topic(&input) {
                    let name = topic.name.clone();
                    debug!(topic = %name, "topic switch");
                    self.active_topic = Some(name);
                }
                // Anything else is a no-op: the active topic, if any, stays
                // in focus and its current step is re-rendered below.
            }
        }

        let Some(name) = self.active_topic.clone() else {
            debug!("no active topic");
            return Reply::choose_topic();
        };

        // The active topic always comes from the base.
        let Some(topic) = self.knowledge.get(&name) else {
            self.active_topic = None;
            return Reply::choose_topic();
        };

        match user.stage(topic) {
            JourneyStage::InProgress(index) => {
                // InProgress always points inside the step sequence.
                let step = &topic.steps[index];
                let total = topic.total_steps();
                let text = format!(
                    "Certo, vamos falar sobre **{}** (Passo {}/{}).\n\n\
                     👉 {}\n\n\
                     🤔 {}\n   \
                     (Digite 'próximo' para avançar)",
                    topic.name.to_uppercase(),
                    index + 1,
                    total,
                    step.advice,
                    step.prompt
                );
                debug!(topic = %topic.name, step = index + 1, total, "step rendered");
                Reply {
                    text,
                    kind: ReplyKind::Step {
                        topic: topic.name.clone(),
                        index,
                        total,
                    },
                }
            }
            JourneyStage::Completed => {
                let text = format!(
                    "✨ **PARABÉNS, {}!** ✨\n{}\n\n\
                     Que tal escolhermos um novo tópico para desenvolver?",
                    user.name().to_uppercase(),
                    topic.closing
                );
                let kind = ReplyKind::Completed {
                    topic: topic.name.clone(),
                };
                debug!(topic = %topic.name, "journey complete, focus cleared");
                self.active_topic = None;
                Reply { text, kind }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{Step, Topic};

    fn two_step_base() -> Arc<KnowledgeBase> {
        Arc::new(
            KnowledgeBase::new(vec![Topic::new(
                "foco",
                vec![
                    Step::new("Primeiro conselho.", "Primeira pergunta?"),
                    Step::new("Segundo conselho.", "Segunda pergunta?"),
                ],
                "Jornada encerrada.",
            )
            .with_synonyms(["concentração"])])
            .unwrap(),
        )
    }

    #[test]
    fn test_is_continuation_matches_substrings() {
        let mentor = Mentor::new(two_step_base());
        assert!(mentor.is_continuation("sim"));
        assert!(mentor.is_continuation("Sim, pode ser!"));
        assert!(mentor.is_continuation("ok então"));
        assert!(!mentor.is_continuation("talvez"));
    }

    #[test]
    fn test_custom_continue_phrases() {
        let mentor = Mentor::new(two_step_base()).with_continue_phrases(["Avançar"]);
        assert!(mentor.is_continuation("quero avançar agora"));
        assert!(!mentor.is_continuation("sim"));
    }

    #[test]
    fn test_greet_lists_topics() {
        let mentor = Mentor::new(two_step_base());
        let user = User::new("Ana");
        let greeting = mentor.greet(&user);
        assert!(greeting.contains("Ana"));
        assert!(greeting.contains("**foco**"));
    }

    #[test]
    fn test_no_active_topic_prompts_for_choice() {
        let mut mentor = Mentor::new(two_step_base());
        let mut user = User::new("Ana");
        let reply = mentor.respond("xyzabc", &mut user);
        assert_eq!(reply.kind, ReplyKind::ChooseTopic);
        assert_eq!(mentor.active_topic(), None);
        assert_eq!(user.completed_steps("foco"), 0);
    }

    #[test]
    fn test_continuation_without_active_topic_prompts_for_choice() {
        let mut mentor = Mentor::new(two_step_base());
        let mut user = User::new("Ana");
        let reply = mentor.respond("sim", &mut user);
        assert_eq!(reply.kind, ReplyKind::ChooseTopic);
        assert_eq!(user.completed_steps("foco"), 0);
    }

    #[test]
    fn test_topic_selection_renders_first_step() {
        let mut mentor = Mentor::new(two_step_base());
        let mut user = User::new("Ana");
        let reply = mentor.respond("foco", &mut user);
        assert_eq!(
            reply.kind,
            ReplyKind::Step {
                topic: "foco".to_string(),
                index: 0,
                total: 2,
            }
        );
        assert!(reply.text.contains("**FOCO**"));
        assert!(reply.text.contains("Passo 1/2"));
        assert!(reply.text.contains("Primeiro conselho."));
        // Rendering does not advance progress.
        assert_eq!(user.completed_steps("foco"), 0);
    }

    #[test]
    fn test_continuation_advances_active_topic() {
        let mut mentor = Mentor::new(two_step_base());
        let mut user = User::new("Ana");
        mentor.respond("foco", &mut user);

        let reply = mentor.respond("sim", &mut user);
        assert_eq!(user.completed_steps("foco"), 1);
        assert!(matches!(reply.kind, ReplyKind::Step { index: 1, .. }));
    }

    #[test]
    fn test_unrecognized_input_is_a_noop_rerender() {
        let mut mentor = Mentor::new(two_step_base());
        let mut user = User::new("Ana");
        let first = mentor.respond("foco", &mut user);
        let second = mentor.respond("hmm, não sei", &mut user);
        assert_eq!(first, second);
        assert_eq!(mentor.active_topic(), Some("foco"));
        assert_eq!(user.completed_steps("foco"), 0);
    }

    #[test]
    fn test_completion_renders_closing_and_clears_focus() {
        let mut mentor = Mentor::new(two_step_base());
        let mut user = User::new("Ana");
        mentor.respond("foco", &mut user);
        mentor.respond("sim", &mut user);

        let reply = mentor.respond("ok", &mut user);
        assert_eq!(
            reply.kind,
            ReplyKind::Completed {
                topic: "foco".to_string(),
            }
        );
        assert!(reply.text.contains("PARABÉNS, ANA"));
        assert!(reply.text.contains("Jornada encerrada."));
        assert_eq!(mentor.active_topic(), None);
        // The record is left past the end on purpose.
        assert_eq!(user.completed_steps("foco"), 2);
    }

    #[test]
    fn test_continuation_takes_priority_over_topic_switch() {
        // "sim" is both a continuation phrase and a synonym here; with a
        // topic active it must advance, not re-select.
        let base = Arc::new(
            KnowledgeBase::new(vec![
                Topic::new(
                    "foco",
                    vec![Step::new("a", "b"), Step::new("c", "d")],
                    "fim",
                ),
                Topic::new("decisão", vec![Step::new("x", "y")], "fim").with_synonyms(["sim"]),
            ])
            .unwrap(),
        );
        let mut mentor = Mentor::new(base);
        let mut user = User::new("Ana");
        mentor.respond("foco", &mut user);

        mentor.respond("sim", &mut user);
        assert_eq!(mentor.active_topic(), Some("foco"));
        assert_eq!(user.completed_steps("foco"), 1);
        assert_eq!(user.completed_steps("decisão"), 0);
    }
}
