use std::collections::HashMap;

/// Variable bindings for a single run. Starts empty.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    data: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    /// Define `name`, replacing any earlier value.
    pub fn set(&mut self, name: &str, value: &str) {
        self.data.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
