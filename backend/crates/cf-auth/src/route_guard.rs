//! Navigation decisions for role-scoped screens.
//!
//! Nothing here is cached: every navigation evaluates against the state at
//! that moment.

use crate::SessionState;

use cf_core::Role;

pub const LANDING_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

pub struct RouteGuard;

impl RouteGuard {
    /// Signed-out visitors go to the landing page. A signed-in account with
    /// the other role goes to its own dashboard, never to a forbidden page.
    pub fn evaluate(state: &SessionState, required: Role) -> GuardDecision {
        match state.role() {
            None => GuardDecision::Redirect(LANDING_PATH),
            Some(role) if role == required => GuardDecision::Render,
            Some(role) => GuardDecision::Redirect(role.dashboard_path()),
        }
    }

    /// Resolve a navigation to `path` against the route table.
    pub fn navigate(state: &SessionState, path: &str) -> GuardDecision {
        match Route::parse(path) {
            None => GuardDecision::Redirect(LANDING_PATH),
            Some(Route::Dashboard) => GuardDecision::Redirect(
                state
                    .role()
                    .map(|role| role.dashboard_path())
                    .unwrap_or(LANDING_PATH),
            ),
            Some(route) => match route.required_role() {
                Some(required) => Self::evaluate(state, required),
                None => GuardDecision::Render,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    ProjectDetails(String),
    Marketplace,
    /// Bare `/dashboard`, forwarded to the role's own dashboard
    Dashboard,
    InvestorDashboard,
    ProjectDashboard,
    ProjectPublicPage,
    ProjectCollections,
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Home,
            ["projects"] => Self::Projects,
            ["projects", id] => Self::ProjectDetails((*id).to_string()),
            ["marketplace"] => Self::Marketplace,
            ["dashboard"] => Self::Dashboard,
            ["dashboard", "investor"] => Self::InvestorDashboard,
            ["dashboard", "project"] => Self::ProjectDashboard,
            ["dashboard", "project", "public"] => Self::ProjectPublicPage,
            ["dashboard", "project", "nft"] => Self::ProjectCollections,
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Projects => "/projects".to_string(),
            Self::ProjectDetails(id) => format!("/projects/{id}"),
            Self::Marketplace => "/marketplace".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::InvestorDashboard => "/dashboard/investor".to_string(),
            Self::ProjectDashboard => "/dashboard/project".to_string(),
            Self::ProjectPublicPage => "/dashboard/project/public".to_string(),
            Self::ProjectCollections => "/dashboard/project/nft".to_string(),
        }
    }

    /// `None` for public routes.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::InvestorDashboard => Some(Role::Investor),
            Self::ProjectDashboard | Self::ProjectPublicPage | Self::ProjectCollections => {
                Some(Role::Project)
            }
            _ => None,
        }
    }
}
