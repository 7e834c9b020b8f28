use std::sync::Arc;

use tracing::{info, warn};

use legalconnect_db::{Storage, StorageError};
use legalconnect_types::api::{LegalResponse, RecommendedLawyer};
use legalconnect_types::models::{Language, NewChatMessage};

use crate::answer::{AnswerSource, GeneratedAnswer, fallback};

/// Lawyers attached to a single answer.
const MAX_RECOMMENDED_LAWYERS: usize = 3;

/// Answers questions and records them in chat history.
pub struct ChatService<S: Storage> {
    store: Arc<S>,
    source: Option<Arc<dyn AnswerSource>>,
}

impl<S: Storage> ChatService<S> {
    /// With `source == None` every answer comes from the offline library.
    pub fn new(store: Arc<S>, source: Option<Arc<dyn AnswerSource>>) -> Self {
        Self { store, source }
    }

    pub async fn answer(
        &self,
        question: &str,
        language: Language,
    ) -> Result<LegalResponse, StorageError> {
        let (generated, used_fallback) = self.generate(question, language).await;

        let recommended = match generated.specialization.as_deref() {
            Some(area) if !area.trim().is_empty() => self.recommend_lawyers(area.trim()).await?,
            _ => vec![],
        };
        let response = generated.into_response(recommended, used_fallback);

        let stored = self
            .store
            .create_chat_message(NewChatMessage {
                question: question.to_string(),
                response: response.clone(),
                language: Some(language),
                used_fallback: Some(used_fallback),
            })
            .await?;

        info!(message_id = stored.id, %language, used_fallback, "Answered legal question");
        Ok(response)
    }

    async fn generate(&self, question: &str, language: Language) -> (GeneratedAnswer, bool) {
        let Some(source) = &self.source else {
            return (fallback::answer(question, language), true);
        };

        match source.generate(question, language).await {
            Ok(answer) => (answer, false),
            Err(e) => {
                warn!(source = source.name(), "Answer source failed, using offline answer: {}", e);
                (fallback::answer(question, language), true)
            }
        }
    }

    async fn recommend_lawyers(&self, area: &str) -> Result<Vec<RecommendedLawyer>, StorageError> {
        let lawyers = self.store.get_lawyers_by_specialization(area).await?;
        Ok(lawyers
            .into_iter()
            .take(MAX_RECOMMENDED_LAWYERS)
            .map(|l| RecommendedLawyer {
                name: l.name,
                area: l.specialization,
                region: l.region,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DownSource, StaticSource, cyber_answer};
    use legalconnect_db::{DEFAULT_HISTORY_LIMIT, MemStorage};

    #[tokio::test]
    async fn live_answer_is_recorded_without_fallback() {
        let store = Arc::new(MemStorage::new());
        let service = ChatService::new(store.clone(), Some(Arc::new(StaticSource(cyber_answer()))));

        let resp = service.answer("Someone hacked my account", Language::En).await.unwrap();
        assert_eq!(resp.definition, "Live definition");
        assert!(!resp.used_fallback);
        assert_eq!(resp.recommended_lawyers.len(), 1);
        assert_eq!(resp.recommended_lawyers[0].name, "Advocate Nighat Dad");
        assert_eq!(resp.recommended_lawyers[0].area, "Cyber Law");

        let history = store.get_chat_history(DEFAULT_HISTORY_LIMIT).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].question, "Someone hacked my account");
        assert_eq!(history[0].response, resp);
        assert!(!history[0].used_fallback);
    }

    #[tokio::test]
    async fn failing_source_falls_back() {
        let store = Arc::new(MemStorage::new());
        let service = ChatService::new(store.clone(), Some(Arc::new(DownSource)));

        let resp = service
            .answer("Can police arrest without a warrant?", Language::Ur)
            .await
            .unwrap();
        assert!(resp.used_fallback);
        assert_eq!(resp.recommended_lawyers[0].name, "Ahmed Ali Khan");

        let history = store.get_chat_history(1).await.unwrap();
        assert!(history[0].used_fallback);
        assert_eq!(history[0].language, Language::Ur);
    }

    #[tokio::test]
    async fn no_source_uses_offline_library() {
        let store = Arc::new(MemStorage::new());
        let service = ChatService::new(store, None);

        let resp = service
            .answer("What does the Constitution say about women's rights?", Language::En)
            .await
            .unwrap();
        assert!(resp.used_fallback);
        let names: Vec<&str> = resp.recommended_lawyers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Barrister Ali Zafar", "Justice (R) Nasira Javed Iqbal"]);
    }

    #[tokio::test]
    async fn recommendations_are_capped() {
        let store = Arc::new(MemStorage::new());
        let answer = GeneratedAnswer {
            specialization: Some("law".into()),
            ..cyber_answer()
        };
        let service = ChatService::new(store, Some(Arc::new(StaticSource(answer))));

        let resp = service.answer("General question", Language::En).await.unwrap();
        assert_eq!(resp.recommended_lawyers.len(), MAX_RECOMMENDED_LAWYERS);
    }
}
