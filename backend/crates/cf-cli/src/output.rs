//! Plain-text rendering of sessions, listings and collections.

use cf_auth::{GuardDecision, Session, SessionState};
use cf_core::{Collection, Project};

pub fn session_line(session: &Session) -> String {
    let name = session
        .metadata()
        .name
        .as_deref()
        .map(|name| format!(" [{name}]"))
        .unwrap_or_default();
    format!("{} ({}){name}", session.identity.email, session.role)
}

pub fn state_line(state: &SessionState) -> String {
    match state {
        SessionState::Unknown => "session not restored yet".to_string(),
        SessionState::Anonymous => "signed out".to_string(),
        SessionState::Authenticated(session) => format!("signed in as {}", session_line(session)),
    }
}

pub fn navigation_line(requested: &str, decision: GuardDecision) -> String {
    match decision {
        GuardDecision::Render => format!("at {requested}"),
        GuardDecision::Redirect(to) => format!("at {to} (redirected from {requested})"),
    }
}

pub fn project_line(project: &Project) -> String {
    format!(
        "{id}  {title} | {location} | target {target:.0} | min {min:.0} | {apy}% APY | {duration} months | {progress}% | {status}",
        id = project.id,
        title = project.title,
        location = project.location,
        target = project.target_amount,
        min = project.min_investment,
        apy = project.apy,
        duration = project.duration,
        progress = project.progress,
        status = project.status.as_str(),
    )
}

pub fn collection_line(collection: &Collection) -> String {
    format!(
        "{id}  {name} | price {price} | {sold}/{supply} sold | {apy}% APY | {status}{image}",
        id = collection.id,
        name = collection.name,
        price = collection.price,
        sold = collection.sold,
        supply = collection.supply,
        apy = collection.apy,
        status = collection.status.as_str(),
        image = collection
            .image_url
            .as_deref()
            .map(|url| format!(" | image {url}"))
            .unwrap_or_default(),
    )
}
