use secrecy::{ExposeSecret, SecretString};

use crate::config::optional_env;
use crate::error::ConfigError;

/// The single demo account accepted by the login endpoint.
///
/// This is a stand-in for a real user store, not an authentication system.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub password: SecretString,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            user_id: "1".to_string(),
            user_name: "John Student".to_string(),
            email: "demo@eduai.com".to_string(),
            password: SecretString::from("demo123".to_string()),
        }
    }
}

impl DemoConfig {
    /// Message returned with a rejected login.
    ///
    /// Spells out the stock demo pair only while it is the one in effect; a
    /// configured account is named by email and its password stays private.
    pub fn login_failure_message(&self) -> String {
        let defaults = Self::default();
        if self.email == defaults.email
            && self.password.expose_secret() == defaults.password.expose_secret()
        {
            format!(
                "Invalid credentials. Use {} / {}",
                self.email,
                self.password.expose_secret()
            )
        } else {
            format!("Invalid credentials. Use the demo account {}", self.email)
        }
    }

    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            user_id: optional_env("DEMO_USER_ID")?.unwrap_or(defaults.user_id),
            user_name: optional_env("DEMO_USER_NAME")?.unwrap_or(defaults.user_name),
            email: optional_env("DEMO_USER_EMAIL")?.unwrap_or(defaults.email),
            password: optional_env("DEMO_USER_PASSWORD")?
                .map(SecretString::from)
                .unwrap_or(defaults.password),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    #[test]
    fn defaults_match_published_demo_account() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        // SAFETY: Under ENV_MUTEX.
        unsafe {
            std::env::remove_var("DEMO_USER_ID");
            std::env::remove_var("DEMO_USER_NAME");
            std::env::remove_var("DEMO_USER_EMAIL");
            std::env::remove_var("DEMO_USER_PASSWORD");
        }

        let config = DemoConfig::resolve().expect("should resolve");
        assert_eq!(config.email, "demo@eduai.com");
        assert_eq!(config.password.expose_secret(), "demo123");
        assert_eq!(config.user_id, "1");
    }

    #[test]
    fn default_account_hint_names_stock_pair() {
        assert_eq!(
            DemoConfig::default().login_failure_message(),
            "Invalid credentials. Use demo@eduai.com / demo123"
        );
    }

    #[test]
    fn configured_account_hint_hides_password() {
        let config = DemoConfig {
            email: "ada@example.com".to_string(),
            password: SecretString::from("hunter2".to_string()),
            ..DemoConfig::default()
        };
        let message = config.login_failure_message();
        assert!(message.starts_with("Invalid credentials"));
        assert!(message.contains("ada@example.com"));
        assert!(!message.contains("hunter2"));
        assert!(!message.contains("demo123"));
    }

    #[test]
    fn changed_password_alone_hides_it() {
        let config = DemoConfig {
            password: SecretString::from("rotated".to_string()),
            ..DemoConfig::default()
        };
        let message = config.login_failure_message();
        assert_eq!(message, "Invalid credentials. Use the demo account demo@eduai.com");
    }
}
