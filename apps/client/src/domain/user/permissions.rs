//! Capability checks over `(author, viewer)`.

use super::entity::{CurrentUser, SessionContext, UserSummary};

/// The viewer wrote the entity. Usernames are unique, and the session
/// endpoint does not always return an id, so the username decides.
pub fn is_author(author: &UserSummary, viewer: Option<&CurrentUser>) -> bool {
    viewer.is_some_and(|v| v.username == author.username)
}

pub fn can_edit(author: &UserSummary, session: &SessionContext) -> bool {
    is_author(author, session.viewer())
}

pub fn can_delete(author: &UserSummary, session: &SessionContext) -> bool {
    is_author(author, session.viewer()) || session.is_admin()
}

pub fn can_report(session: &SessionContext) -> bool {
    session.viewer().is_some()
}

pub fn can_moderate(session: &SessionContext) -> bool {
    session.is_admin()
}

/// Follow controls are hidden on the viewer's own profile and for
/// anonymous visitors.
pub fn can_follow(profile_owner: &UserSummary, session: &SessionContext) -> bool {
    session.viewer().is_some() && !is_author(profile_owner, session.viewer())
}
