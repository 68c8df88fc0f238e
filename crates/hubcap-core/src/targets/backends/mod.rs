//! Target backend implementations.

mod browserstack;
mod local;

pub use browserstack::BrowserStackBackend;
pub use local::LocalBackend;
