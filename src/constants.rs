/// Served endpoint
pub const CHAT_COMPLETIONS_PATH: &str = "/v2/chat/completions";

/// Request defaults
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_STREAM: bool = false;

/// Reply composition
pub const REPLY_PREFIX: &str = "reply : ";
pub const ERROR_PREFIX: &str = "Error : ";

/// Response headers
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const CONTENT_TYPE_SSE: &str = "text/event-stream";
pub const HEADER_CACHE_CONTROL: &str = "no-cache";
pub const HEADER_CONNECTION: &str = "keep-alive";

/// CORS policy: every origin, method and header, credentials allowed
pub const CORS_ALLOW_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
pub const CORS_ALLOW_CREDENTIALS: &str = "true";
pub const CORS_MAX_AGE_SECONDS: u32 = 600;
pub const CORS_PREFLIGHT_BODY: &str = "OK";

/// Error messages
pub const ERROR_VALIDATION_FAILED: &str = "request validation failed";
pub const ERROR_NOT_FOUND: &str = "endpoint not found";
pub const ERROR_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const ERROR_PAYLOAD_TOO_LARGE: &str = "request body too large";
pub const ERROR_BODY_READ: &str = "failed to read request body";
pub const ERROR_STREAM_BUILD: &str = "failed to create SSE streaming response";

/// SSE framing
pub const SSE_DATA_PREFIX: &str = "data: ";
pub const SSE_DONE_MESSAGE: &str = "[DONE]";
pub const SSE_MESSAGE_BOUNDARY: &str = "\n\n";

/// Events queued between the reply task and the response body
pub const STREAM_CHANNEL_CAPACITY: usize = 1;

/// Logging prefixes
pub const LOG_PREFIX_WARNING: &str = "⚠️";
pub const LOG_PREFIX_CONN: &str = "↔️";

/// Maximum accepted JSON body size (bytes)
pub const MAX_JSON_BODY_SIZE_BYTES: u64 = 16 * 1024 * 1024;
