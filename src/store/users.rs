//! Registered users.

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{seed_users, User};

/// Flat list of registered users.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Store holding the fixed seed users.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Add a user. Usernames compare case-sensitively; the password is not
    /// validated.
    pub fn register(&mut self, username: &str, password: &str) -> StoreResult<&User> {
        if self.contains(username) {
            return Err(StoreError::UserExists);
        }
        self.users.push(User::new(username, password));
        Ok(&self.users[self.users.len() - 1])
    }

    pub fn login(&self, username: &str, password: &str) -> StoreResult<&User> {
        self.users
            .iter()
            .find(|u| u.matches(username, password))
            .ok_or(StoreError::InvalidCredentials)
    }
}
