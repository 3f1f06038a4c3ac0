//! jira-auth Application - Adapter contract, ports and the JIRA adapter
//!
//! This crate defines the application layer with:
//! - The authentication adapter contract (`AuthAdapter`)
//! - Port traits for the remote RPC client
//! - The JIRA authentication adapter and fault classification

pub mod auth;
pub mod error;
pub mod ports;

pub use auth::{AuthAdapter, FaultKind, JiraAuthAdapter, RemoteFault};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{RemoteClient, RemoteClientError, RemoteClientFactory};
