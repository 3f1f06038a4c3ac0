//! Authentication domain types

mod types;

pub use types::{AuthResult, Identity, IdentityAttributes};
