//! Answer sources shared by the service and router tests.

use legalconnect_types::models::Language;

use crate::answer::{AnswerError, AnswerFuture, AnswerSource, GeneratedAnswer};

/// Always returns the same answer.
pub(crate) struct StaticSource(pub GeneratedAnswer);

impl AnswerSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn generate<'a>(&'a self, _question: &'a str, _language: Language) -> AnswerFuture<'a> {
        let answer = self.0.clone();
        Box::pin(async move { Ok::<_, AnswerError>(answer) })
    }
}

/// Simulates an unreachable answer service.
pub(crate) struct DownSource;

impl AnswerSource for DownSource {
    fn name(&self) -> &str {
        "down"
    }

    fn generate<'a>(&'a self, _question: &'a str, _language: Language) -> AnswerFuture<'a> {
        Box::pin(async { Err::<GeneratedAnswer, _>(AnswerError::Status(503)) })
    }
}

pub(crate) fn cyber_answer() -> GeneratedAnswer {
    GeneratedAnswer {
        definition: "Live definition".into(),
        explanation: "Live explanation".into(),
        follow_up_questions: vec!["What is PECA?".into()],
        specialization: Some("cyber".into()),
        ..Default::default()
    }
}
