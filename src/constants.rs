// API Constants
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const INGEST_PATH: &str = "/ingest";
pub const QUERY_PATH: &str = "/query";

/// Result count requested from the backend on every query.
pub const TOP_K: u32 = 5;

// UI Constants
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const EMPTY_TRANSCRIPT_HINT: &str = "Ask me anything from your indexed docs…";
pub const THINKING_LABEL: &str = "Thinking…";
