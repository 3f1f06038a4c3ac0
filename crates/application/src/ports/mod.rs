//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod remote_client;

pub use remote_client::{RemoteClient, RemoteClientError, RemoteClientFactory};
