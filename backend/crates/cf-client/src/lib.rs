//! HTTP adapters for the hosted backend.
//!
//! One [`BaasClient`] holds the base URL, the project's anon key and the
//! access token of the signed-in user. The identity, persistence and storage
//! adapters share it, so a sign-in immediately authorizes table and storage
//! calls.

pub mod baas_client;
pub mod error;
pub mod rest_identity;
pub mod rest_persistence;
pub mod rest_storage;

pub use baas_client::{BaasClient, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result as ClientResult};
pub use rest_identity::RestIdentityAdapter;
pub use rest_persistence::RestPersistenceAdapter;
pub use rest_storage::RestStorageAdapter;

#[cfg(test)]
mod tests;
