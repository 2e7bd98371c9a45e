//! User entity - a soft-deletable account

use chrono::{DateTime, Utc};

use crate::error::DomainError;

pub const MAX_USERNAME_LENGTH: usize = 150;

/// Check a username: 1-150 characters, letters, digits and `@.+-_`
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() {
        return Err(DomainError::InvalidUsername("username may not be blank".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(DomainError::InvalidUsername(format!(
            "username may have at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if let Some(bad) = username
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')))
    {
        return Err(DomainError::InvalidUsername(format!(
            "character {bad:?} is not allowed; use letters, digits and @/./+/-/_"
        )));
    }
    Ok(())
}

/// User account
///
/// Rows are never removed: destroying a user sets `is_deleted` and stamps
/// `deleted_at`. `id` is 0 until the repository assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
}

/// Partial update of a user; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl User {
    /// Create an unsaved, active, non-staff user
    pub fn new(username: String, email: Option<String>) -> Self {
        Self {
            id: 0,
            username,
            email: email.unwrap_or_default(),
            is_staff: false,
            is_active: true,
            is_deleted: false,
            deleted_at: None,
            date_joined: Utc::now(),
        }
    }

    /// Whether the account may log in or authenticate a request
    #[inline]
    pub fn can_authenticate(&self) -> bool {
        self.is_active && !self.is_deleted
    }

    /// Mark the user deleted
    ///
    /// Fails with `UserAlreadyDeleted` when the flag is already set.
    pub fn soft_delete(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        if self.is_deleted {
            return Err(DomainError::UserAlreadyDeleted(self.id));
        }
        self.is_deleted = true;
        self.deleted_at = Some(at);
        Ok(())
    }

    /// Clear the deletion flag and timestamp
    pub fn restore(&mut self) {
        self.is_deleted = false;
        self.deleted_at = None;
    }

    /// Apply a partial update
    ///
    /// `is_deleted = false` restores a deleted user. `is_deleted = true` on an
    /// active user is rejected: deletion only happens through `soft_delete`.
    pub fn apply_changes(&mut self, changes: UserChanges) -> Result<(), DomainError> {
        if let Some(ref username) = changes.username {
            validate_username(username)?;
        }
        match changes.is_deleted {
            Some(true) if !self.is_deleted => {
                return Err(DomainError::IllegalUserTransition(
                    "users can only be deleted through destroy".to_string(),
                ));
            }
            Some(false) if self.is_deleted => self.restore(),
            _ => {}
        }

        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(is_staff) = changes.is_staff {
            self.is_staff = is_staff;
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }
}
