mod client;
mod config;
mod errors;
mod project;
mod request;
mod transport;
pub mod types;
pub use self::client::JiraClient;
pub use self::config::JiraConfig;
pub use self::errors::Error;
pub use self::project::{ProjectClient, VersionOrderBy, VersionPage};
pub use self::request::{CallOptions, HttpMethod, RequestDescriptor, RequestOptionsBuilder};
pub use self::transport::Transport;
