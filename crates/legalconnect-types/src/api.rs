use serde::{Deserialize, Serialize};

use crate::models::Language;

// -- Chat --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub language: Language,
}

/// Structured answer rendered by the chat widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalResponse {
    pub definition: String,
    pub explanation: String,
    pub constitutional_articles: Vec<ConstitutionalArticle>,
    pub supreme_court_cases: Vec<SupremeCourtCase>,
    pub recommended_lawyers: Vec<RecommendedLawyer>,
    pub follow_up_questions: Vec<String>,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstitutionalArticle {
    pub article: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupremeCourtCase {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedLawyer {
    pub name: String,
    pub area: String,
    pub region: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

// -- Lawyers --

#[derive(Debug, Deserialize)]
pub struct LawyerQuery {
    pub specialization: Option<String>,
}

// -- Errors --

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_defaults_to_english() {
        let req: ChatRequest = serde_json::from_str(r#"{"question":"What is bail?"}"#).unwrap();
        assert_eq!(req.language, Language::En);

        let req: ChatRequest =
            serde_json::from_str(r#"{"question":"ضمانت کیا ہے؟","language":"ur"}"#).unwrap();
        assert_eq!(req.language, Language::Ur);
    }

    #[test]
    fn legal_response_uses_widget_field_names() {
        let resp = LegalResponse {
            definition: "d".into(),
            used_fallback: true,
            follow_up_questions: vec!["next?".into()],
            ..Default::default()
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["usedFallback"], true);
        assert!(json["constitutionalArticles"].is_array());
        assert!(json["supremeCourtCases"].is_array());
        assert!(json["recommendedLawyers"].is_array());
        assert_eq!(json["followUpQuestions"][0], "next?");
    }
}
