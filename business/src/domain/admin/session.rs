use std::sync::atomic::{AtomicBool, Ordering};

/// The fixed credential pair the guard compares against.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Gate for the management endpoints.
///
/// A single in-memory flag set by an exact credential match. Explicitly not
/// a security boundary: no hashing, no expiry, no server-side session
/// store. It exists to keep the admin views out of casual reach, nothing
/// more.
pub struct AdminSession {
    credentials: AdminCredentials,
    authenticated: AtomicBool,
}

impl AdminSession {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials,
            authenticated: AtomicBool::new(false),
        }
    }

    /// Sets the flag and returns true only when both values match the
    /// configured pair exactly; otherwise the flag is left untouched.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = username == self.credentials.username && password == self.credentials.password;
        if ok {
            self.authenticated.store(true, Ordering::SeqCst);
        }
        ok
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}
