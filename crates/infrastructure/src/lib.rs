//! jira-auth Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod settings;
pub mod soap;

pub use adapters::{SoapJiraClient, SoapJiraClientFactory};
pub use settings::{SettingsError, load_settings};
