//! Role-gated navigation.
//!
//! Decisions made here only steer the UI. Every request is still authorized
//! by the backend.

use crate::user::{Role, Session};

/// Privileged capability a dashboard can require.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Privilege {
    Moderator,
    Admin,
}

impl Privilege {
    pub fn role(self) -> Role {
        match self {
            Privilege::Moderator => Role::Moderator,
            Privilege::Admin => Role::Admin,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Privileges {
    pub moderator: bool,
    pub admin: bool,
}

impl Privileges {
    pub fn from_roles(roles: &[Role]) -> Self {
        Self {
            moderator: roles.contains(&Privilege::Moderator.role()),
            admin: roles.contains(&Privilege::Admin.role()),
        }
    }

    pub fn contains(self, privilege: Privilege) -> bool {
        match privilege {
            Privilege::Moderator => self.moderator,
            Privilege::Admin => self.admin,
        }
    }

    pub fn any(self) -> bool {
        self.moderator || self.admin
    }
}

/// Observable authentication state of the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Persisted session not read yet (server render, first client frame).
    Unresolved,
    Anonymous,
    Regular,
    Privileged(Privileges),
}

impl Access {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            None => Access::Anonymous,
            Some(s) => {
                let privileges = Privileges::from_roles(&s.roles);
                if privileges.any() {
                    Access::Privileged(privileges)
                } else {
                    Access::Regular
                }
            }
        }
    }

    pub fn is_signed_in(self) -> bool {
        matches!(self, Access::Regular | Access::Privileged(_))
    }

    pub fn has(self, privilege: Privilege) -> bool {
        match self {
            Access::Privileged(p) => p.contains(privilege),
            _ => false,
        }
    }

    /// Moderators and admins may verify pending documents.
    pub fn can_verify(self) -> bool {
        matches!(self, Access::Privileged(p) if p.any())
    }
}

/// What a route expects from the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Public,
    /// Login and registration: signed-in visitors are sent to their documents.
    GuestOnly,
    SignedIn,
    Privilege(Privilege),
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const DOCUMENTS_PATH: &str = "/documents";

impl Requirement {
    /// Requirement of an application path. Unknown paths are public (404 page).
    pub fn for_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());
        match segments.next() {
            Some("login") | Some("register") => Requirement::GuestOnly,
            Some("documents") => Requirement::SignedIn,
            Some("admin") => Requirement::Privilege(Privilege::Admin),
            Some("moderator") => Requirement::Privilege(Privilege::Moderator),
            _ => Requirement::Public,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Access state unknown yet; render a placeholder and decide later.
    Pending,
    Redirect(&'static str),
}

pub fn decide(requirement: Requirement, access: Access) -> GuardDecision {
    if requirement == Requirement::Public {
        return GuardDecision::Allow;
    }
    if access == Access::Unresolved {
        return GuardDecision::Pending;
    }

    match requirement {
        Requirement::Public => GuardDecision::Allow,
        Requirement::GuestOnly => {
            if access.is_signed_in() {
                GuardDecision::Redirect(DOCUMENTS_PATH)
            } else {
                GuardDecision::Allow
            }
        }
        Requirement::SignedIn => {
            if access.is_signed_in() {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(LOGIN_PATH)
            }
        }
        Requirement::Privilege(privilege) => {
            if !access.is_signed_in() {
                GuardDecision::Redirect(LOGIN_PATH)
            } else if access.has(privilege) {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(HOME_PATH)
            }
        }
    }
}
