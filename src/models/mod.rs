pub mod types;

pub use types::{ChatRequest, ChatResponse, ChatTurn, ResponseStatus};
