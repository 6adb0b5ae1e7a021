use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{HeroError, HeroResult};
use crate::validation;

/// A registered user. Only the argon2 hash of the password is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

impl Account {
    pub fn create(username: &str, password: &str) -> HeroResult<Self> {
        Ok(Self {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            registered_at: Utc::now(),
        })
    }

    pub fn verify(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

/// The logged-in user, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub since: DateTime<Utc>,
}

pub trait ReadOnlyAccountsManager {
    fn has_username(&self, username: &str) -> bool;

    /// Accounts ordered by username.
    fn account_list(&self) -> Vec<&Account>;

    fn session(&self) -> Option<&Session>;

    fn current_user(&self) -> Option<&str> {
        self.session().map(|s| s.username.as_str())
    }

    fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }
}

/// Credential store plus the single login session.
#[derive(Debug, Clone, Default)]
pub struct AccountsManager {
    accounts: BTreeMap<String, Account>,
    session: Option<Session>,
}

impl AccountsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a manager from stored accounts. No session is restored.
    pub fn from_accounts(accounts: Vec<Account>) -> HeroResult<Self> {
        let mut manager = Self::new();
        for account in accounts {
            manager.insert(account)?;
        }
        Ok(manager)
    }

    pub fn register(&mut self, username: &str, password: &str) -> HeroResult<()> {
        validation::username(username)?;
        validation::password(password)?;
        if self.has_username(username) {
            return Err(HeroError::DuplicateUsername {
                username: username.to_string(),
            });
        }
        let account = Account::create(username, password)?;
        self.insert(account)
    }

    pub fn login(&mut self, username: &str, password: &str) -> HeroResult<()> {
        if self.session.is_some() {
            return Err(HeroError::MultipleLogin);
        }
        let account = self.accounts.get(username).ok_or(HeroError::InvalidUsername)?;
        if !account.verify(password) {
            return Err(HeroError::InvalidPassword);
        }
        self.session = Some(Session {
            username: account.username.clone(),
            since: Utc::now(),
        });
        Ok(())
    }

    pub fn logout(&mut self) -> HeroResult<Session> {
        self.session.take().ok_or(HeroError::UserLogout)
    }

    fn insert(&mut self, account: Account) -> HeroResult<()> {
        if self.accounts.contains_key(&account.username) {
            return Err(HeroError::DuplicateUsername {
                username: account.username,
            });
        }
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }
}

impl ReadOnlyAccountsManager for AccountsManager {
    fn has_username(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    fn account_list(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }

    fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

fn hash_password(password: &str) -> HeroResult<String> {
    let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())?;
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}
