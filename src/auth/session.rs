use actix_session::Session;

use crate::errors::AppError;

/// Member type written by the entry page.
pub const USER_TYPE: &str = "userType";
pub const USER_EMAIL: &str = "userEmail";
pub const USER_NAME: &str = "userName";

/// Every key the entry page writes and logout clears.
pub const MARKER_KEYS: [&str; 3] = [USER_TYPE, USER_EMAIL, USER_NAME];

/// The only member type allowed onto the dashboard.
pub const VISITOR_ROLE: &str = "user";

/// String-valued key/value storage for the session markers.
///
/// Reads never fail: a value that cannot be decoded counts as absent.
pub trait MarkerStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn clear(&self, key: &str);
}

impl MarkerStore for Session {
    fn read(&self, key: &str) -> Option<String> {
        self.get::<String>(key).unwrap_or(None)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.insert(key, value)
            .map_err(|e| AppError::Session(format!("Failed to store {key}: {e}")))
    }

    fn clear(&self, key: &str) {
        self.remove(key);
    }
}

/// Snapshot of the markers taken when the dashboard mounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub role: Option<String>,
    pub email: Option<String>,
}

impl SessionContext {
    pub fn load(store: &impl MarkerStore) -> Self {
        Self {
            role: store.read(USER_TYPE),
            email: store.read(USER_EMAIL),
        }
    }

    pub fn is_visitor(&self) -> bool {
        self.role.as_deref() == Some(VISITOR_ROLE)
    }
}

/// Markers written by the entry page on behalf of the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMarker {
    pub user_type: String,
    pub email: String,
    pub name: String,
}

impl SessionMarker {
    pub fn store(&self, store: &impl MarkerStore) -> Result<(), AppError> {
        store.write(USER_TYPE, &self.user_type)?;
        store.write(USER_EMAIL, &self.email)?;
        store.write(USER_NAME, &self.name)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn load_reads_role_and_email() {
        let store = MemoryStore::with(&[(USER_TYPE, "user"), (USER_EMAIL, "ana@academia.co")]);
        let ctx = SessionContext::load(&store);
        assert_eq!(ctx.role.as_deref(), Some("user"));
        assert_eq!(ctx.email.as_deref(), Some("ana@academia.co"));
        assert!(ctx.is_visitor());
    }

    #[test]
    fn empty_store_gives_empty_context() {
        let ctx = SessionContext::load(&MemoryStore::default());
        assert_eq!(ctx, SessionContext::default());
        assert!(!ctx.is_visitor());
    }

    #[test]
    fn role_match_is_exact() {
        for role in ["User", "user ", "admin", ""] {
            let store = MemoryStore::with(&[(USER_TYPE, role)]);
            assert!(!SessionContext::load(&store).is_visitor(), "{role:?} should not match");
        }
    }

    #[test]
    fn marker_store_writes_all_keys() {
        let store = MemoryStore::default();
        let marker = SessionMarker {
            user_type: "user".into(),
            email: "ana@academia.co".into(),
            name: "Ana".into(),
        };
        marker.store(&store).unwrap();
        assert_eq!(store.read(USER_TYPE).as_deref(), Some("user"));
        assert_eq!(store.read(USER_EMAIL).as_deref(), Some("ana@academia.co"));
        assert_eq!(store.read(USER_NAME).as_deref(), Some("Ana"));
    }
}
