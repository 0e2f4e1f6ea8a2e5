//! Identity provider interface.
//!
//! The portal delegates credential handling to an external identity
//! provider; the core only ever consumes an opaque authenticated-user id
//! plus a role flag. This module defines that seam and an in-memory
//! implementation for tests and local runs. Real credential verification is
//! explicitly out of scope.

use crate::error::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Portal role attached to an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
}

/// What the core sees of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub role: Role,
}

/// An opaque session handle returned by `authenticate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: AuthenticatedUser,
}

/// Profile details captured at registration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterProfile {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub phone_number: Option<String>,
}

/// The credential/identity operations the portal needs.
pub trait IdentityProvider: Send + Sync {
    /// Register a new user; returns the new user id.
    fn register(&self, email: &str, password: &str, profile: RegisterProfile)
        -> TriageResult<String>;

    /// Exchange credentials for a session.
    fn authenticate(&self, email: &str, password: &str) -> TriageResult<Session>;

    /// Invalidate a session.
    fn sign_out(&self, session: &Session) -> TriageResult<()>;
}

struct StoredUser {
    id: String,
    password: String,
    role: Role,
}

/// In-memory identity provider for tests and local runs.
#[derive(Default)]
pub struct InMemoryIdentity {
    users: Mutex<HashMap<String, StoredUser>>,
    sessions: Mutex<HashMap<String, AuthenticatedUser>>,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityProvider for InMemoryIdentity {
    fn register(
        &self,
        email: &str,
        password: &str,
        profile: RegisterProfile,
    ) -> TriageResult<String> {
        let mut users = self.users.lock().expect("identity lock poisoned");
        if users.contains_key(email) {
            return Err(TriageError::DuplicateEmail(email.to_owned()));
        }

        let id = uuid::Uuid::new_v4().simple().to_string();
        users.insert(
            email.to_owned(),
            StoredUser {
                id: id.clone(),
                password: password.to_owned(),
                role: profile.role,
            },
        );
        Ok(id)
    }

    fn authenticate(&self, email: &str, password: &str) -> TriageResult<Session> {
        let users = self.users.lock().expect("identity lock poisoned");
        let user = users
            .get(email)
            .filter(|user| user.password == password)
            .ok_or(TriageError::InvalidCredentials)?;

        let authenticated = AuthenticatedUser {
            id: user.id.clone(),
            role: user.role,
        };
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.sessions
            .lock()
            .expect("identity lock poisoned")
            .insert(token.clone(), authenticated.clone());

        Ok(Session {
            token,
            user: authenticated,
        })
    }

    fn sign_out(&self, session: &Session) -> TriageResult<()> {
        let mut sessions = self.sessions.lock().expect("identity lock poisoned");
        sessions
            .remove(&session.token)
            .map(|_| ())
            .ok_or(TriageError::SessionNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_profile() -> RegisterProfile {
        RegisterProfile {
            first_name: "Ama".to_owned(),
            last_name: "Shikongo".to_owned(),
            role: Role::Patient,
            phone_number: None,
        }
    }

    #[test]
    fn register_then_authenticate() {
        let identity = InMemoryIdentity::new();
        let id = identity
            .register("ama@example.com", "hunter2", patient_profile())
            .expect("register");

        let session = identity
            .authenticate("ama@example.com", "hunter2")
            .expect("authenticate");
        assert_eq!(session.user.id, id);
        assert_eq!(session.user.role, Role::Patient);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let identity = InMemoryIdentity::new();
        identity
            .register("ama@example.com", "hunter2", patient_profile())
            .expect("register");
        let err = identity
            .register("ama@example.com", "other", patient_profile())
            .expect_err("duplicate email");
        assert!(matches!(err, TriageError::DuplicateEmail(_)));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let identity = InMemoryIdentity::new();
        identity
            .register("ama@example.com", "hunter2", patient_profile())
            .expect("register");
        let err = identity
            .authenticate("ama@example.com", "wrong")
            .expect_err("wrong password");
        assert!(matches!(err, TriageError::InvalidCredentials));
    }

    #[test]
    fn sign_out_invalidates_the_session() {
        let identity = InMemoryIdentity::new();
        identity
            .register("ama@example.com", "hunter2", patient_profile())
            .expect("register");
        let session = identity
            .authenticate("ama@example.com", "hunter2")
            .expect("authenticate");

        identity.sign_out(&session).expect("sign out");
        let err = identity.sign_out(&session).expect_err("already signed out");
        assert!(matches!(err, TriageError::SessionNotFound));
    }
}
