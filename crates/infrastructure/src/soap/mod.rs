//! SOAP message handling for the JIRA RPC service.
//!
//! This module provides:
//! - The `login` request envelope
//! - Extraction of the login token or fault from a response body

mod envelope;

pub use envelope::{LoginResponse, login_envelope, parse_login_response};
