pub mod authorization;
pub mod backfill;
pub mod error;
pub mod identity_adapter;
pub mod memory_identity;
pub mod owner_workspace;
pub mod profile_resolver;
pub mod route_guard;
pub mod session;
pub mod session_store;

pub use authorization::require_role;
pub use backfill::{SeedAccount, SeedOutcome, SeedReport, TestProjectSeeder};
pub use error::{AuthError, Result};
pub use identity_adapter::{IdentityAdapter, IdentityError, IdentityResult};
pub use memory_identity::MemoryIdentityProvider;
pub use owner_workspace::{ImageUpload, OwnerWorkspace};
pub use profile_resolver::ProfileResolver;
pub use route_guard::{GuardDecision, LANDING_PATH, Route, RouteGuard};
pub use session::{Session, SessionState};
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
