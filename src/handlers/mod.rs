pub mod chat;

pub use chat::handle_chat_completions;
