//! Infrastructure adapters

mod soap_client;

pub use soap_client::{SoapJiraClient, SoapJiraClientFactory};
