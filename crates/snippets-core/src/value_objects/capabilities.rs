//! Capability bitflags granted to the caller of a request
//!
//! Every request resolves to a capability set; guard functions in the service
//! layer check the set instead of inspecting user flags directly.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::entities::User;

bitflags! {
    /// Request capabilities
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Read snippets and (when authenticated) users
        const READ  = 1 << 0;
        /// Create snippets and modify owned ones
        const WRITE = 1 << 1;
        /// Manage users and read the audit log
        const ADMIN = 1 << 2;

        /// Granted to unauthenticated callers
        const ANONYMOUS = Self::READ.bits();
        /// Granted to active, non-staff users
        const AUTHENTICATED = Self::READ.bits() | Self::WRITE.bits();
        /// Granted to staff users
        const STAFF = Self::READ.bits() | Self::WRITE.bits() | Self::ADMIN.bits();
    }
}

impl Capabilities {
    /// Resolve the capability set of a user account
    ///
    /// Accounts that cannot authenticate fall back to anonymous capabilities.
    pub fn for_user(user: &User) -> Self {
        if !user.can_authenticate() {
            return Self::ANONYMOUS;
        }
        if user.is_staff {
            Self::STAFF
        } else {
            Self::AUTHENTICATED
        }
    }

    #[inline]
    pub fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    #[inline]
    pub fn can_write(self) -> bool {
        self.contains(Self::WRITE)
    }

    #[inline]
    pub fn is_admin(self) -> bool {
        self.contains(Self::ADMIN)
    }

    /// Names of the individual capabilities that are set
    pub fn list(self) -> Vec<&'static str> {
        let mut result = Vec::with_capacity(3);
        if self.contains(Self::READ) {
            result.push("read");
        }
        if self.contains(Self::WRITE) {
            result.push("write");
        }
        if self.contains(Self::ADMIN) {
            result.push("admin");
        }
        result
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ANONYMOUS
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list().join(","))
    }
}

// Serialized as a list of names: ["read", "write"]
impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.list())
    }
}
