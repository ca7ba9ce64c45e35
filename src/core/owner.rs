//! Owner and group lookup for long listings.
//!
//! Real uid/gid resolution is not done. The default resolver reports the
//! current login name for both columns; a fixed pair can be configured instead.

use crate::core::fm::FileRecord;

/// Resolves the owner and group columns of a long listing.
pub trait OwnerResolver {
    fn owner_and_group(&self, record: &FileRecord) -> (String, String);
}

/// Reports the user running gls as both owner and group.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    name: String,
}

impl CurrentUser {
    pub fn new() -> Self {
        let raw = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_default();
        Self {
            name: login_name(&raw),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnerResolver for CurrentUser {
    fn owner_and_group(&self, _record: &FileRecord) -> (String, String) {
        (self.name.clone(), self.name.clone())
    }
}

/// Fixed placeholder owner and group, e.g. `("user", "group")`.
#[derive(Debug, Clone)]
pub struct FixedOwner {
    user: String,
    group: String,
}

impl FixedOwner {
    pub fn new(user: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            group: group.into(),
        }
    }
}

impl OwnerResolver for FixedOwner {
    fn owner_and_group(&self, _record: &FileRecord) -> (String, String) {
        (self.user.clone(), self.group.clone())
    }
}

/// Strips a `DOMAIN\` prefix from account names. Empty names become `"unknown"`.
fn login_name(raw: &str) -> String {
    let name = raw.rsplit('\\').next().unwrap_or(raw).trim();
    if name.is_empty() {
        "unknown".to_string()
    } else {
        name.to_string()
    }
}
