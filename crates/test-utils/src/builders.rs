#![allow(dead_code)]

use serde_json::{json, Map, Value};

/// Builder for a raw project config value.
///
/// Starts from the smallest valid project without tasks; add at least one
/// task before building unless the test is about the empty-task error.
pub struct ProjectConfigBuilder {
    config: Map<String, Value>,
    tasks: Vec<Value>,
}

impl ProjectConfigBuilder {
    pub fn new() -> Self {
        let mut config = Map::new();
        config.insert("direction".into(), json!("push"));
        config.insert("source_root".into(), json!("/src/"));
        config.insert("dest_root".into(), json!("user@host:/dst/"));
        config.insert("generated_crontab_comment_mark".into(), json!("rsyncgen"));
        Self {
            config,
            tasks: Vec::new(),
        }
    }

    /// Set any key, recognised or not.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.config.insert(key.to_string(), value);
        self
    }

    /// Remove a key, e.g. to test a missing required key.
    pub fn without(mut self, key: &str) -> Self {
        self.config.remove(key);
        self
    }

    pub fn direction(self, direction: &str) -> Self {
        self.set("direction", json!(direction))
    }

    pub fn ssh_port(self, port: i64) -> Self {
        self.set("ssh_port", json!(port))
    }

    pub fn log_dir_name(self, name: &str) -> Self {
        self.set("log_dir_name", json!(name))
    }

    pub fn global_exclude(self, pattern: &str) -> Self {
        self.push_to("global_exclude", pattern)
    }

    pub fn global_arg(self, arg: &str) -> Self {
        self.push_to("global_args", arg)
    }

    pub fn with_task(mut self, task: Value) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(mut self) -> Value {
        if !self.config.contains_key("tasks") {
            self.config.insert("tasks".into(), Value::Array(self.tasks));
        }
        Value::Object(self.config)
    }

    fn push_to(mut self, key: &str, item: &str) -> Self {
        let list = self
            .config
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = list {
            items.push(json!(item));
        }
        self
    }
}

impl Default for ProjectConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single raw task value.
pub struct TaskConfigBuilder {
    task: Map<String, Value>,
}

impl TaskConfigBuilder {
    /// A task syncing `path` to the same relative path on the other side.
    pub fn new(name: &str, path: &str) -> Self {
        let mut task = Map::new();
        task.insert("name".into(), json!(name));
        task.insert("source_path".into(), json!(path));
        task.insert("dest_path".into(), json!(path));
        Self { task }
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.task.insert(key.to_string(), value);
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.task.remove(key);
        self
    }

    pub fn exclude(self, pattern: &str) -> Self {
        self.push_to("exclude", pattern)
    }

    pub fn arg(self, arg: &str) -> Self {
        self.push_to("args", arg)
    }

    pub fn schedule(self, schedule: &str) -> Self {
        self.set("schedule", json!(schedule))
    }

    pub fn build(self) -> Value {
        Value::Object(self.task)
    }

    fn push_to(mut self, key: &str, item: &str) -> Self {
        let list = self
            .task
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = list {
            items.push(json!(item));
        }
        self
    }
}
