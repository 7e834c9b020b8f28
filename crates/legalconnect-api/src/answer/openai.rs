use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use legalconnect_types::models::Language;

use super::{AnswerError, AnswerFuture, AnswerSource, GeneratedAnswer};

const SYSTEM_PROMPT: &str = "You are a legal information assistant for Pakistani law. \
Answer the user's question with general legal information, not legal advice. \
Cite articles of the Constitution of Pakistan 1973 and Supreme Court of Pakistan \
judgments only when you are confident they are relevant. \
Reply with a single JSON object with these keys: \
\"definition\" (string), \"explanation\" (string), \
\"constitutionalArticles\" (array of {\"article\", \"title\", \"summary\"}, all strings), \
\"supremeCourtCases\" (array of {\"title\", \"summary\"}, all strings), \
\"followUpQuestions\" (array of strings), \
\"specialization\" (one of \"Criminal Law\", \"Constitutional Law\", \"Family Law\", \
\"Women's Rights\", \"Cyber Law\", \"Digital Rights\", \"Human Rights\").";

/// Connection settings for an OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

pub struct OpenAiAnswerSource {
    client: reqwest::Client,
    config: LlmConfig,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiAnswerSource {
    pub fn new(config: LlmConfig) -> Result<Self, AnswerError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    async fn complete(&self, question: &str, language: Language) -> Result<GeneratedAnswer, AnswerError> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "system", "content": language_instruction(language) },
                { "role": "user", "content": question },
            ],
            "response_format": { "type": "json_object" },
        });

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AnswerError::Status(status.as_u16()));
        }

        let completion: CompletionResponse = resp.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(AnswerError::EmptyReply)?;

        debug!(model = %self.config.model, bytes = content.len(), "Received answer");
        parse_answer(&content)
    }
}

impl AnswerSource for OpenAiAnswerSource {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn generate<'a>(&'a self, question: &'a str, language: Language) -> AnswerFuture<'a> {
        Box::pin(self.complete(question, language))
    }
}

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::En => "Write every string value in English.",
        Language::Ur => "Write every string value in Urdu, using Urdu script.",
    }
}

/// Parse the model reply, tolerating a surrounding ```json fence.
fn parse_answer(content: &str) -> Result<GeneratedAnswer, AnswerError> {
    let trimmed = content.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed);

    Ok(serde_json::from_str(unfenced.trim())?)
}
