use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::LegalResponse;

/// Language a question was asked in and an answer should be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ur,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ur => "ur",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -- Users --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

// -- Chat history --

/// A question and the answer that was returned for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub question: String,
    pub response: LegalResponse,
    pub language: Language,
    pub used_fallback: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert form for [`ChatMessage`]. `id` and `created_at` are assigned by the store;
/// `language` and `used_fallback` fall back to `en` / `false` when absent.
#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub question: String,
    pub response: LegalResponse,
    pub language: Option<Language>,
    pub used_fallback: Option<bool>,
}

// -- Lawyers --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: u64,
    pub name: String,
    pub specialization: String,
    pub region: String,
    pub contact: String,
    /// Years in practice.
    pub experience: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLawyer {
    pub name: String,
    pub specialization: String,
    pub region: String,
    pub contact: String,
    pub experience: u32,
}

impl NewLawyer {
    pub fn into_lawyer(self, id: u64) -> Lawyer {
        Lawyer {
            id,
            name: self.name,
            specialization: self.specialization,
            region: self.region,
            contact: self.contact,
            experience: self.experience,
        }
    }
}
