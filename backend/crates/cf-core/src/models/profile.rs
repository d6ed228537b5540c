//! Application-level role record, bound 1:1 to an identity.

use crate::{Identity, Role};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Always equal to the owning identity's id
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Profile {
    pub fn for_identity(identity: &Identity, role: Role) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            role,
        }
    }
}
