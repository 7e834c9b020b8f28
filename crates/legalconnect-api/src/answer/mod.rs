//! Turning a legal question into a structured answer.
//!
//! [`AnswerSource`] is the seam for live generators; [`fallback`] is the
//! offline library used when no source is configured or the source fails.

pub mod fallback;
pub mod openai;

use futures_util::future::BoxFuture;
use serde::Deserialize;
use thiserror::Error;

use legalconnect_types::api::{
    ConstitutionalArticle, LegalResponse, RecommendedLawyer, SupremeCourtCase,
};
use legalconnect_types::models::Language;

pub use openai::{LlmConfig, OpenAiAnswerSource};

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("request to answer service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("answer service returned status {0}")]
    Status(u16),

    #[error("answer service returned no content")]
    EmptyReply,

    #[error("answer is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Answer content before lawyer recommendations are attached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAnswer {
    pub definition: String,
    pub explanation: String,
    #[serde(default)]
    pub constitutional_articles: Vec<ConstitutionalArticle>,
    #[serde(default)]
    pub supreme_court_cases: Vec<SupremeCourtCase>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    /// Area of law used to pick lawyers from the directory.
    #[serde(default)]
    pub specialization: Option<String>,
}

impl GeneratedAnswer {
    pub fn into_response(
        self,
        recommended_lawyers: Vec<RecommendedLawyer>,
        used_fallback: bool,
    ) -> LegalResponse {
        LegalResponse {
            definition: self.definition,
            explanation: self.explanation,
            constitutional_articles: self.constitutional_articles,
            supreme_court_cases: self.supreme_court_cases,
            recommended_lawyers,
            follow_up_questions: self.follow_up_questions,
            used_fallback,
        }
    }
}

pub type AnswerFuture<'a> = BoxFuture<'a, Result<GeneratedAnswer, AnswerError>>;

/// Object-safe so the chat service can hold `Arc<dyn AnswerSource>`.
pub trait AnswerSource: Send + Sync {
    fn name(&self) -> &str;

    fn generate<'a>(&'a self, question: &'a str, language: Language) -> AnswerFuture<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_answer_tolerates_missing_lists() {
        let answer: GeneratedAnswer = serde_json::from_str(
            r#"{"definition":"Bail is conditional release.","explanation":"..."}"#,
        )
        .unwrap();
        assert!(answer.constitutional_articles.is_empty());
        assert!(answer.specialization.is_none());

        let response = answer.into_response(vec![], false);
        assert_eq!(response.definition, "Bail is conditional release.");
        assert!(!response.used_fallback);
    }
}
