//! Structured logging with sensitive-field redaction.

use serde_json::Value;

use crate::config::{DeploymentConfig, LogLevel};

/// Logger trait for structured logging.
///
/// Implementations can integrate with various backends; the shell ships a
/// tracing-backed implementation and tests substitute recording loggers.
pub trait Logger: Send + Sync {
    /// Log a debug message with structured context.
    fn debug(&self, message: &str, fields: Value);

    /// Log an info message with structured context.
    fn info(&self, message: &str, fields: Value);

    /// Log a warning message with structured context.
    fn warn(&self, message: &str, fields: Value);

    /// Log an error message with structured context.
    fn error(&self, message: &str, fields: Value);
}

/// Install the process-wide tracing subscriber.
///
/// Called exactly once from the program entry point. `RUST_LOG` overrides
/// the configured level; the default is informational. Repeated calls are
/// no-ops so tests can bootstrap freely.
pub fn init_tracing(config: &DeploymentConfig) {
    let default_directive = match config.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Structured logger implementation backed by the tracing crate.
pub struct StructuredLogger {
    name: String,
    level: LogLevel,
}

impl StructuredLogger {
    /// Create a new structured logger with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: LogLevel::Info,
        }
    }

    /// Set the minimum log level for this logger.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level_value(level) <= level_value(self.level)
    }

    /// Redact sensitive fields from log data.
    fn redact_sensitive_fields(&self, mut fields: Value) -> Value {
        if let Some(obj) = fields.as_object_mut() {
            let sensitive_keys = [
                "access_token",
                "accessToken",
                "token",
                "api_key",
                "apiKey",
                "secret",
                "password",
                "credential",
                "authorization",
                "auth",
            ];

            for key in &sensitive_keys {
                if obj.contains_key(*key) {
                    obj.insert(key.to_string(), Value::String("***REDACTED***".to_string()));
                }
            }

            for (_, value) in obj.iter_mut() {
                if value.is_object() {
                    *value = self.redact_sensitive_fields(value.clone());
                }
            }
        }

        fields
    }
}

fn level_value(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
        LogLevel::Trace => 4,
    }
}

impl Logger for StructuredLogger {
    fn debug(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Debug) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::debug!(
            target: "vertex_story",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }

    fn info(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Info) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::info!(
            target: "vertex_story",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }

    fn warn(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Warn) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::warn!(
            target: "vertex_story",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }

    fn error(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Error) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::error!(
            target: "vertex_story",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }
}
