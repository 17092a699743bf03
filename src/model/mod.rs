pub mod types;
pub mod validation;

pub use types::ChatRequest;
pub use validation::parse_chat_request;
