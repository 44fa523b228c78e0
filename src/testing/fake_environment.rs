use std::collections::HashMap;

use crate::ports::Environment;

/// Environment with a fixed set of variables.
#[derive(Debug, Default, Clone)]
pub struct FakeEnvironment {
    vars: HashMap<String, String>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
