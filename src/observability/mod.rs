//! Observability for the demo shell.
//!
//! Two concerns, both owned by the entry point rather than installed as
//! import-time side effects:
//!
//! - a process-wide local tracing subscriber ([`init_tracing`]), and
//! - a remote Cloud Logging sink ([`CloudLoggingSink`]) that ships
//!   structured records at informational level and above.

mod cloud;
mod logging;

pub use cloud::{CloudLoggingSink, LogEntry, MonitoredResource, Severity};
pub use logging::{init_tracing, Logger, StructuredLogger};
