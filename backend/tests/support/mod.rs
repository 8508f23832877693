//! Helpers shared by the integration tests.

use std::collections::HashSet;
use std::sync::Mutex;

// Environment variables are process-global; tests touching them take turns.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with the given variables set (`Some`) or removed (`None`),
/// restoring the previous values afterwards, even if `f` panics.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

/// Every variable the configuration loader reads.
pub const CONFIG_VARS: [&str; 10] = [
    "HOST",
    "PORT",
    "GNEWS_API_KEY",
    "GNEWS_BASE_URL",
    "GOOGLE_AI_API_KEY",
    "GEMINI_BASE_URL",
    "GEMINI_MODEL",
    "PREDICTION_API_URL",
    "HTTP_TIMEOUT_SECS",
    "SMARTSHIP_CONFIG",
];

/// `changes` on top of a clean slate for every config variable.
pub fn clean_config_env<'a>(changes: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut all: Vec<(&str, Option<&str>)> = CONFIG_VARS
        .iter()
        .filter(|k| !changes.iter().any(|(c, _)| c == *k))
        .map(|k| (*k, None))
        .collect();
    all.extend_from_slice(changes);
    all
}

struct EnvRestore {
    previous: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let previous = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (key, value) in changes {
            set_or_remove(key, *value);
        }
        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            set_or_remove(&key, value.as_deref());
        }
    }
}

fn set_or_remove(key: &str, value: Option<&str>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}
