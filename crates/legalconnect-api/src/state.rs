use std::sync::Arc;

use legalconnect_db::MemStorage;

use crate::service::ChatService;

pub type AppState = Arc<AppStateInner>;

/// Request-scoped context handed to every handler. Built once in `main`.
pub struct AppStateInner {
    pub store: Arc<MemStorage>,
    pub chat: ChatService<MemStorage>,
}

impl AppStateInner {
    pub fn new(store: Arc<MemStorage>, chat: ChatService<MemStorage>) -> AppState {
        Arc::new(Self { store, chat })
    }
}
