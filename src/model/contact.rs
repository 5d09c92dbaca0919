use chrono::Local;
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Group a contact lands in when none is given. It is always listed as an
/// available group, even when no contact currently uses it.
pub const DEFAULT_GROUP: &str = "General";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One person's stored record. The seven string fields are exactly what is
/// persisted; `id` exists only for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip, default = "Id::generate")]
    pub id: Id<Contact>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub group: String,
    pub created_date: String,
    pub last_modified: String,
}

impl Contact {
    /// Builds a contact with both timestamps stamped to now. Performs no
    /// validation; mutating paths validate before calling in.
    pub fn create(
        name: String,
        phone: String,
        email: String,
        address: String,
        group: Option<String>,
    ) -> Self {
        let now = now_stamp();
        Self {
            id: Id::generate(),
            name,
            phone,
            email,
            address,
            group: group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
            created_date: now.clone(),
            last_modified: now,
        }
    }

    /// Restamps `last_modified` to now. `created_date` never changes.
    pub fn touch(&mut self) {
        self.last_modified = now_stamp();
    }
}

/// Current local time as a `YYYY-MM-DD HH:MM:SS` string, the format the
/// contacts file stores.
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
