use super::{Context, DataSource};
use std::collections::HashMap;

/// In-memory settings store; serves as both context and data source.
#[derive(Clone, Default)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }
}

impl DataSource for Settings {
    fn setting(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

impl Context for Settings {
    fn data_source(&self) -> &dyn DataSource {
        self
    }
}

// values may hold the client secret
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Settings").field("keys", &keys).finish()
    }
}
