use serde::Deserialize;
use sha2::Sha256;

use crate::config::UserConfig;

/// Static roles. Bestuur only gets the member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Role {
    Administrator,
    Bestuur,
}

/// Hex digest of a password, derived with pbkdf2 hmac sha256. The
/// username doubles as salt so equal passwords hash differently.
pub fn hash_password(username: &str, password: &str) -> String {
    let mut key = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), username.as_bytes(), 1000, &mut key);
    hex::encode(key)
}

/// One account with its password hash.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
}

/// The configured accounts, hashed once at startup.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    accounts: Vec<Account>,
}

impl Credentials {
    pub fn from_users(users: &[UserConfig]) -> Self {
        let accounts = users
            .iter()
            .map(|user| Account {
                username: user.username.clone(),
                name: user.name.clone(),
                password_hash: hash_password(&user.username, &user.password),
                role: user.role,
            })
            .collect();
        Credentials { accounts }
    }

    /// Check a login attempt against the account list.
    pub fn authenticate(&self, username: &str, password: &str) -> AuthState {
        let hash = hash_password(username, password);
        let account = self
            .accounts
            .iter()
            .find(|a| a.username == username && a.password_hash == hash);
        match account {
            Some(account) => AuthState::Authenticated(Session {
                username: account.username.clone(),
                name: account.name.clone(),
                role: account.role,
            }),
            None => AuthState::Failed,
        }
    }
}

/// Login state, exactly one of: never tried, rejected, or active.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    NotAuthenticated,
    Failed,
    Authenticated(Session),
}

/// Explicit session context handed to the menu after login and
/// dropped again at logout.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<UserConfig> {
        vec![
            UserConfig {
                username: "an".to_string(),
                name: "An Aerts".to_string(),
                password: "geheim".to_string(),
                role: Role::Administrator,
            },
            UserConfig {
                username: "bart".to_string(),
                name: "Bart Berg".to_string(),
                password: "geheim".to_string(),
                role: Role::Bestuur,
            },
        ]
    }

    #[test]
    fn test_hash_password_is_deterministic() {
        let first = hash_password("an", "geheim");
        let second = hash_password("an", "geheim");
        assert_eq!(first, second);
        // 32 key bytes, hex encoded.
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_hash_password_is_salted_by_username() {
        assert_ne!(hash_password("an", "geheim"), hash_password("bart", "geheim"));
    }

    #[test]
    fn test_authenticate_known_user() {
        let credentials = Credentials::from_users(&users());
        match credentials.authenticate("bart", "geheim") {
            AuthState::Authenticated(session) => {
                assert_eq!(session.username, "bart");
                assert_eq!(session.name, "Bart Berg");
                assert_eq!(session.role, Role::Bestuur);
            }
            state => panic!("expected a session, got {:?}", state),
        }
    }

    #[test]
    fn test_authenticate_rejects_bad_password() {
        let credentials = Credentials::from_users(&users());
        assert_eq!(credentials.authenticate("an", "fout"), AuthState::Failed);
    }

    #[test]
    fn test_authenticate_rejects_unknown_user() {
        let credentials = Credentials::from_users(&users());
        assert_eq!(credentials.authenticate("chris", "geheim"), AuthState::Failed);
    }
}
