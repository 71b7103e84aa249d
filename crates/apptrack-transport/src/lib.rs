//! # apptrack-transport
//!
//! HTTP transport handed to the tracking engine when the host asks for custom
//! request headers. Requests pass through an ordered interceptor chain before
//! being sent; collector cookies live in a jar bound to host storage.

pub mod config;
pub mod cookie_jar;
pub mod http_transport;
pub mod interceptor;

pub use config::HttpTransportConfig;
pub use cookie_jar::PersistentCookieJar;
pub use http_transport::{HttpTransport, HttpTransportBuilder};
pub use interceptor::{HeaderInjector, RequestInterceptor};
