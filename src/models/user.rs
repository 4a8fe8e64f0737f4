use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user as returned by the API. Every field is optional so
/// that the unauthenticated placeholder is simply `JsonUser::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonUser {
    pub uuid: Option<Uuid>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
    pub locked: Option<bool>,
}

impl JsonUser {
    /// Best label for the navbar: name, then email.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}
