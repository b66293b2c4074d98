//! Host platform entities as seen by network commands.
//!
//! Everything here is a transient copy of state owned by the platform.

use std::fmt;

/// Platform user id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

/// Platform site (blog) id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: SiteId,
    pub domain: String,
    pub path: String,
}

impl Site {
    pub fn new(id: u64, domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: SiteId(id),
            domain: domain.into(),
            path: path.into(),
        }
    }

    /// `domain + path` with trailing slashes and backslashes removed, for display.
    pub fn display_url(&self) -> String {
        format!("{}{}", self.domain, self.path)
            .trim_end_matches(['/', '\\'])
            .to_string()
    }
}

impl From<wp_cli_client::SiteRecord> for Site {
    fn from(record: wp_cli_client::SiteRecord) -> Self {
        Site::new(record.blog_id, record.domain, record.path)
    }
}

impl From<wp_cli_client::UserRecord> for User {
    fn from(record: wp_cli_client::UserRecord) -> Self {
        User {
            id: UserId(record.id),
            email: record.user_email,
            login: record.user_login,
        }
    }
}
