use crate::config::Config;
use crate::constants::DEFAULT_BACKEND_URL;

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
