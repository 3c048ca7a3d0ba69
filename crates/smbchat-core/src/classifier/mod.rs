//! Keyword answer classifier.
//!
//! Decides whether the retrieval engine's answer is passed through, replaced
//! by a canned business response, or augmented with links. Rules run in a
//! fixed order:
//!
//! 1. Uncertainty phrase in the *answer* -> "no information, contact us".
//! 2. Pricing keyword in the *question* -> pricing policy. Runs after rule 1
//!    and overwrites its result.
//! 3. Services keyword in the question -> answer + services link.
//! 4. Social keyword in the question -> answer + email/social links.
//! 5. "email" in the answer -> short email pointer.
//! 6. Otherwise the answer is passed through.
//!
//! Rules 3-5 only run when neither rule 1 nor rule 2 produced a response.
//! Before any rule runs the answer is capped at `max_response_words`.

mod canned;
pub mod html;
pub mod truncate;

use smbchat_types::config::{ChatbotConfig, KeywordConfig, LinkConfig};

use self::html::{escape_text, AnswerHtml};
use self::truncate::truncate_words;

/// Which rule produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerCategory {
    Uncertain,
    Pricing,
    Services,
    Social,
    Email,
    PassThrough,
    Farewell,
}

/// Classifier output: the winning rule plus the answer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAnswer {
    pub category: AnswerCategory,
    label: String,
    body: AnswerHtml,
}

impl ClassifiedAnswer {
    /// Body without the speaker label, HTML-safe.
    pub fn body_html(&self) -> String {
        self.body.render()
    }

    /// Body with model text left unescaped, for the transcript file.
    pub fn body_text(&self) -> String {
        self.body.render_unescaped()
    }

    /// Full bot line (`"{label}: {body}"`), HTML-safe.
    pub fn render(&self) -> String {
        format!("{}: {}", escape_text(&self.label), self.body.render())
    }
}

/// Lowercased keyword set for case-insensitive substring matching.
#[derive(Debug, Clone)]
struct KeywordSet(Vec<String>);

impl KeywordSet {
    fn new(words: &[String]) -> Self {
        Self(
            words
                .iter()
                .map(|w| w.to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    fn matches(&self, lowered_text: &str) -> bool {
        self.0.iter().any(|k| lowered_text.contains(k.as_str()))
    }
}

/// Applies the ordered keyword rules. Pure: holds only configuration.
#[derive(Debug, Clone)]
pub struct AnswerClassifier {
    label: String,
    max_words: usize,
    uncertainty: KeywordSet,
    pricing: KeywordSet,
    services: KeywordSet,
    social: KeywordSet,
    links: LinkConfig,
}

impl AnswerClassifier {
    pub fn new(
        label: impl Into<String>,
        max_words: usize,
        keywords: &KeywordConfig,
        links: LinkConfig,
    ) -> Self {
        Self {
            label: label.into(),
            max_words,
            uncertainty: KeywordSet::new(&keywords.uncertainty),
            pricing: KeywordSet::new(&keywords.pricing),
            services: KeywordSet::new(&keywords.services),
            social: KeywordSet::new(&keywords.social),
            links,
        }
    }

    pub fn from_config(config: &ChatbotConfig) -> Self {
        Self::new(
            config.bot_label.clone(),
            config.max_response_words,
            &config.keywords,
            config.links.clone(),
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Classify `raw_answer` given the visitor's `user_input`.
    pub fn classify(&self, user_input: &str, raw_answer: &str) -> ClassifiedAnswer {
        let answer = truncate_words(raw_answer, self.max_words);
        let input_lc = user_input.to_lowercase();
        let answer_lc = answer.to_lowercase();

        let mut result: Option<(AnswerCategory, AnswerHtml)> = None;

        if self.uncertainty.matches(&answer_lc) {
            result = Some((AnswerCategory::Uncertain, canned::no_information(&self.links)));
        }

        // Unconditionally replaces an uncertainty response. Kept as-is; see DESIGN.md.
        if self.pricing.matches(&input_lc) {
            result = Some((AnswerCategory::Pricing, canned::pricing_policy(&self.links)));
        } else if result.is_none() {
            result = if self.services.matches(&input_lc) {
                Some((
                    AnswerCategory::Services,
                    canned::with_services_link(&answer, &self.links),
                ))
            } else if self.social.matches(&input_lc) {
                Some((
                    AnswerCategory::Social,
                    canned::with_social_links(&answer, &self.label, &self.links),
                ))
            } else if answer_lc.contains("email") {
                Some((AnswerCategory::Email, canned::email_contact(&self.links)))
            } else {
                None
            };
        }

        let (category, body) = result.unwrap_or_else(|| {
            (
                AnswerCategory::PassThrough,
                AnswerHtml::new().raw(answer.to_string()),
            )
        });

        tracing::debug!(?category, "answer classified");

        ClassifiedAnswer {
            category,
            label: self.label.clone(),
            body,
        }
    }

    /// Closing line sent when a visitor ends the conversation.
    pub fn farewell(&self) -> ClassifiedAnswer {
        ClassifiedAnswer {
            category: AnswerCategory::Farewell,
            label: self.label.clone(),
            body: canned::farewell(),
        }
    }
}
