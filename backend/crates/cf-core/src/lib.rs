pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::collection::{Collection, CollectionDraft, CollectionStatus};
pub use models::identity::{Identity, UserMetadata};
pub use models::profile::Profile;
pub use models::project::{Project, ProjectDraft, ProjectSection, ProjectUpdate};
pub use models::project_status::ProjectStatus;
pub use models::role::Role;
pub use validation::password::{PasswordRule, validate_password};

#[cfg(test)]
mod tests;
