pub mod answer;
pub mod chat;
pub mod error;
pub mod lawyers;
pub mod routes;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
