use std::time::Duration;

use anyhow::{Context, Result};

use legalconnect_api::answer::LlmConfig;

const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_MODEL: &str = "gpt-4o";

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` when no API key is set; chat then answers from the offline library.
    pub llm: Option<LlmConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("LEGALCONNECT_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("LEGALCONNECT_PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .context("LEGALCONNECT_PORT must be a port number")?;

        let llm = match lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
            Some(api_key) => {
                let timeout_secs: u64 = lookup("LEGALCONNECT_LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".into())
                    .parse()
                    .context("LEGALCONNECT_LLM_TIMEOUT_SECS must be a whole number of seconds")?;
                Some(LlmConfig {
                    base_url: lookup("LEGALCONNECT_LLM_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.into()),
                    api_key,
                    model: lookup("LEGALCONNECT_LLM_MODEL")
                        .unwrap_or_else(|| DEFAULT_LLM_MODEL.into()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Self { host, port, llm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_api_key() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 5000);
        assert!(cfg.llm.is_none());
    }

    #[test]
    fn api_key_enables_live_answers() {
        let cfg = config(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("LEGALCONNECT_LLM_MODEL", "gpt-4o-mini"),
            ("LEGALCONNECT_LLM_TIMEOUT_SECS", "10"),
        ])
        .unwrap();
        let llm = cfg.llm.unwrap();
        assert_eq!(llm.api_key, "sk-test");
        assert_eq!(llm.model, "gpt-4o-mini");
        assert_eq!(llm.base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(llm.timeout, Duration::from_secs(10));
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let cfg = config(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(cfg.llm.is_none());
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("LEGALCONNECT_PORT", "http")]).is_err());
        assert!(config(&[("OPENAI_API_KEY", "sk"), ("LEGALCONNECT_LLM_TIMEOUT_SECS", "soon")]).is_err());
    }
}
