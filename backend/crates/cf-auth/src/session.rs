use cf_core::{Identity, Role, UserMetadata};

/// The authenticated identity together with the role its profile grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub role: Role,
}

impl Session {
    pub fn new(identity: Identity, role: Role) -> Self {
        Self { identity, role }
    }

    pub fn metadata(&self) -> &UserMetadata {
        &self.identity.metadata
    }
}

/// Observable state of the session machine.
///
/// `Unknown` only exists until the first restore completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn role(&self) -> Option<Role> {
        self.session().map(|session| session.role)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}
