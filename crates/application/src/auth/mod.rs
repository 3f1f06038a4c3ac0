//! Authentication adapters.
//!
//! This module provides:
//! - The `AuthAdapter` capability contract
//! - Classification of remote faults
//! - The JIRA-backed adapter

mod adapter;
mod fault;
mod jira;

pub use adapter::AuthAdapter;
pub use fault::{FaultKind, RemoteFault};
pub use jira::JiraAuthAdapter;
