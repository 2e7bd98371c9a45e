//! Permission policy
//!
//! Resolves the capability set of the caller and provides the guard
//! functions every service operation runs before touching a repository.

use snippets_core::entities::{Snippet, User};
use snippets_core::{Capabilities, UserScope};
use tracing::debug;

use super::error::{ServiceError, ServiceResult};

/// The resolved caller of a request
#[derive(Debug, Clone, Default)]
pub enum Actor {
    #[default]
    Anonymous,
    User(User),
}

impl Actor {
    /// Capabilities granted to this caller
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Anonymous => Capabilities::ANONYMOUS,
            Self::User(user) => Capabilities::for_user(user),
        }
    }

    /// The authenticated user, if any
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::User(user) => Some(user),
        }
    }

    /// ID recorded in audit entries
    pub fn id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }

    pub fn is_staff(&self) -> bool {
        self.capabilities().is_admin()
    }
}

impl From<User> for Actor {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

/// Stateless guard functions over [`Actor`]
pub struct PermissionPolicy;

impl PermissionPolicy {
    /// Fail unless the actor holds every capability in `required`
    pub fn require(actor: &Actor, required: Capabilities) -> ServiceResult<()> {
        let granted = actor.capabilities();
        if granted.contains(required) {
            return Ok(());
        }
        debug!(granted = %granted, required = %required, "Capability check failed");
        if actor.user().is_none() {
            return Err(ServiceError::unauthenticated());
        }
        let missing = required.difference(granted).list().join(", ");
        Err(ServiceError::permission_denied(missing))
    }

    /// Fail unless the caller is an authenticated, active user; return it
    pub fn require_authenticated(actor: &Actor) -> ServiceResult<&User> {
        Self::require(actor, Capabilities::AUTHENTICATED)?;
        actor.user().ok_or_else(ServiceError::unauthenticated)
    }

    /// Fail unless the caller is staff; return it
    pub fn require_staff(actor: &Actor) -> ServiceResult<&User> {
        Self::require(actor, Capabilities::STAFF)?;
        actor.user().ok_or_else(ServiceError::unauthenticated)
    }

    /// Fail unless the caller owns `snippet`
    pub fn require_snippet_owner<'a>(actor: &'a Actor, snippet: &Snippet) -> ServiceResult<&'a User> {
        let user = Self::require_authenticated(actor)?;
        if !snippet.is_owned_by(user.id) {
            debug!(snippet_id = snippet.id, user_id = user.id, "Not the snippet owner");
            return Err(snippets_core::DomainError::NotSnippetOwner.into());
        }
        Ok(user)
    }

    /// Visibility of user rows for a request
    ///
    /// Deleted rows are visible only to staff that asked for them.
    pub fn user_scope(actor: &Actor, include_deleted: bool) -> UserScope {
        if include_deleted && actor.is_staff() {
            UserScope::IncludeDeleted
        } else {
            UserScope::ActiveOnly
        }
    }
}
