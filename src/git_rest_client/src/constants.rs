pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

pub const LOG_FILE_NAME: &str = "git_rest_client.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Outcome string the backend reports for a successful user or cron call.
pub const SUCCESS_OUTCOME: &str = "success";
