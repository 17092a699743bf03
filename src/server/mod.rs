pub mod app;
pub mod cors;
pub mod rejection;
pub mod routes;

pub use app::ChatServer;
pub use rejection::handle_rejection;
