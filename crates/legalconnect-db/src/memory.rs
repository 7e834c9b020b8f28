use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::Utc;
use legalconnect_types::models::{
    ChatMessage, Lawyer, NewChatMessage, NewLawyer, NewUser, User,
};
use tracing::{debug, info};

use crate::seed::seed_lawyers;
use crate::{Storage, StorageError};

/// Volatile store backed by in-process maps. Contents are lost on restart.
///
/// One mutex guards every table and counter, so each call observes a
/// consistent snapshot and ids stay strictly increasing per record kind.
pub struct MemStorage {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<u64, User>,
    chat_messages: BTreeMap<u64, ChatMessage>,
    lawyers: BTreeMap<u64, Lawyer>,
    next_user_id: u64,
    next_chat_id: u64,
    next_lawyer_id: u64,
}

impl Tables {
    fn new() -> Self {
        Self {
            next_user_id: 1,
            next_chat_id: 1,
            next_lawyer_id: 1,
            ..Default::default()
        }
    }

    fn insert_lawyer(&mut self, lawyer: NewLawyer) -> Lawyer {
        let id = self.next_lawyer_id;
        self.next_lawyer_id += 1;
        let lawyer = lawyer.into_lawyer(id);
        self.lawyers.insert(id, lawyer.clone());
        lawyer
    }
}

impl MemStorage {
    /// Create a store holding only the seed lawyer roster.
    pub fn new() -> Self {
        let mut tables = Tables::new();
        for lawyer in seed_lawyers() {
            tables.insert_lawyer(lawyer);
        }
        info!("Seeded {} lawyers", tables.lawyers.len());

        Self {
            tables: Mutex::new(tables),
        }
    }

    fn with_tables<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Tables) -> T,
    {
        let mut tables = self.tables.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(f(&mut tables))
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    async fn get_user(&self, id: u64) -> Result<Option<User>, StorageError> {
        self.with_tables(|t| t.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        self.with_tables(|t| t.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        self.with_tables(|t| {
            if t.users.values().any(|u| u.username == user.username) {
                return Err(StorageError::UsernameTaken(user.username));
            }

            let id = t.next_user_id;
            t.next_user_id += 1;
            let user = User {
                id,
                username: user.username,
                password: user.password,
            };
            t.users.insert(id, user.clone());
            debug!(user_id = id, "Created user");
            Ok(user)
        })?
    }

    async fn create_chat_message(
        &self,
        message: NewChatMessage,
    ) -> Result<ChatMessage, StorageError> {
        self.with_tables(|t| {
            let id = t.next_chat_id;
            t.next_chat_id += 1;
            let message = ChatMessage {
                id,
                question: message.question,
                response: message.response,
                language: message.language.unwrap_or_default(),
                used_fallback: message.used_fallback.unwrap_or(false),
                created_at: Utc::now(),
            };
            t.chat_messages.insert(id, message.clone());
            message
        })
    }

    async fn get_chat_history(&self, limit: usize) -> Result<Vec<ChatMessage>, StorageError> {
        self.with_tables(|t| {
            let mut messages: Vec<ChatMessage> = t.chat_messages.values().cloned().collect();
            messages.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            });
            messages.truncate(limit);
            messages
        })
    }

    async fn get_lawyers(&self) -> Result<Vec<Lawyer>, StorageError> {
        self.with_tables(|t| t.lawyers.values().cloned().collect())
    }

    async fn get_lawyers_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Lawyer>, StorageError> {
        let needle = specialization.to_lowercase();
        self.with_tables(|t| {
            t.lawyers
                .values()
                .filter(|l| l.specialization.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        })
    }

    async fn create_lawyer(&self, lawyer: NewLawyer) -> Result<Lawyer, StorageError> {
        self.with_tables(|t| t.insert_lawyer(lawyer))
    }
}
