use std::env;

use business::domain::admin::session::AdminCredentials;

/// Credentials for the admin panel guard
///
/// Environment variables:
/// - ADMIN_USERNAME: admin login (default: "admin")
/// - ADMIN_PASSWORD: admin password (default: "beauty2024")
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "beauty2024".to_string());

        Self { username, password }
    }

    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
