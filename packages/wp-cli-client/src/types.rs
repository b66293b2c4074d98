use serde::{Deserialize, Deserializer};

/// A row of `wp site list --fields=blog_id,domain,path --format=json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteRecord {
    #[serde(deserialize_with = "numeric_id")]
    pub blog_id: u64,
    pub domain: String,
    pub path: String,
}

impl SiteRecord {
    /// Value for WP-CLI's `--url` flag when targeting this site.
    pub fn url(&self) -> String {
        format!("{}{}", self.domain, self.path)
    }
}

/// Output of `wp user get <user> --fields=ID,user_email,user_login --format=json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "ID", deserialize_with = "numeric_id")]
    pub id: u64,
    pub user_email: String,
    pub user_login: String,
}

/// WP-CLI renders ids straight from the database, so they arrive as either
/// JSON numbers or numeric strings depending on the command.
fn numeric_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumericId {
        Number(u64),
        Text(String),
    }

    match NumericId::deserialize(deserializer)? {
        NumericId::Number(n) => Ok(n),
        NumericId::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
