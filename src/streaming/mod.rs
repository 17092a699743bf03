pub mod reply;
pub mod response;
pub mod sse;

pub use reply::stream_reply;
