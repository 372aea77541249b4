//! HTTP transport layer.
//!
//! Both remote surfaces the shell talks to — Vertex AI and Cloud Logging —
//! go through the [`HttpTransport`] trait so tests can substitute a
//! recording mock for the real `reqwest` client.

mod http;
mod error;
mod request;
mod response;
mod reqwest;

pub mod endpoints;

pub use self::reqwest::ReqwestTransport;
pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use request::RequestBuilder;
pub use response::ResponseParser;
