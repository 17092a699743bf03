pub mod request;
pub mod response;

pub use request::collect_body;
pub use response::json_response;
