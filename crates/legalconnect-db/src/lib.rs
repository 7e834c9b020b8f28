//! Storage layer for users, chat history and the lawyer directory.
//!
//! [`Storage`] is the only access path to stored records. Handlers depend on
//! the trait; [`MemStorage`] is the in-process implementation.

pub mod memory;
pub mod seed;

use std::future::Future;

use legalconnect_types::models::{
    ChatMessage, Lawyer, NewChatMessage, NewLawyer, NewUser, User,
};
use thiserror::Error;

pub use memory::MemStorage;

/// Number of messages returned by history queries that don't ask for a limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Repository interface over the three record kinds.
///
/// Lookups that find nothing return `Ok(None)`; errors are reserved for
/// conditions the caller cannot treat as a normal outcome.
pub trait Storage: Send + Sync {
    fn get_user(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Option<User>, StorageError>> + Send;

    /// Exact, case-sensitive username match.
    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, StorageError>> + Send;

    fn create_user(
        &self,
        user: NewUser,
    ) -> impl Future<Output = Result<User, StorageError>> + Send;

    /// Store a chat message, stamping its id and creation time.
    fn create_chat_message(
        &self,
        message: NewChatMessage,
    ) -> impl Future<Output = Result<ChatMessage, StorageError>> + Send;

    /// At most `limit` messages, newest first. Messages created in the same
    /// instant come back in reverse insertion order.
    fn get_chat_history(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, StorageError>> + Send;

    fn get_lawyers(&self) -> impl Future<Output = Result<Vec<Lawyer>, StorageError>> + Send;

    /// Case-insensitive substring match against `specialization`.
    fn get_lawyers_by_specialization(
        &self,
        specialization: &str,
    ) -> impl Future<Output = Result<Vec<Lawyer>, StorageError>> + Send;

    fn create_lawyer(
        &self,
        lawyer: NewLawyer,
    ) -> impl Future<Output = Result<Lawyer, StorageError>> + Send;
}
