//! Capabilities the surrounding host supplies to the API client.
//!
//! The client never reaches for globals: settings, the HTTP transport and the
//! logger are passed in, which keeps the client runnable under the CLI, inside
//! another service, or against scripted doubles in tests.

pub mod http;
pub mod log;
pub mod settings;

pub use self::http::{HttpClient, HttpResponse, ReqwestClient};
pub use self::log::{Logger, TracingLogger};
pub use self::settings::Settings;

/// Settings key holding the directory (tenant) id.
pub const TENANT_ID: &str = "tenant-id";
/// Settings key holding the application (client) id.
pub const CLIENT_ID: &str = "client-id";
/// Settings key holding the client secret.
pub const CLIENT_SECRET: &str = "client-secret";
/// Settings key holding the function app name.
pub const FUNCTION_NAME: &str = "function-name";

/// Read-only key/value settings of the integration.
pub trait DataSource {
    fn setting(&self, name: &str) -> Option<String>;
}

/// Per-invocation context handed to every API operation.
pub trait Context {
    fn data_source(&self) -> &dyn DataSource;
}
