// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    client::{Client, Query},
    error::Result,
    session::{Token, User},
};

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// A successful login or registration: the issued credential and the
/// identity it belongs to.
#[derive(Deserialize)]
pub struct AuthResponse {
    pub token: Token,
    pub user: User,
}

#[derive(Deserialize)]
struct ProfileEnvelope {
    user: User,
}

/// How the session store reaches the backend's auth endpoints. A trait so
/// the store can be exercised without a network on the other end.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;
    async fn register(&self, registration: Registration) -> Result<AuthResponse>;
    async fn profile(&self) -> Result<User>;
}

/// The HTTP [`Authenticator`].
pub struct Auth {
    client: Client,
}

impl Auth {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Authenticator for Auth {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        self.client.post("auth/login", Some(&body)).await
    }

    async fn register(&self, registration: Registration) -> Result<AuthResponse> {
        self.client.post("auth/register", Some(&registration)).await
    }

    async fn profile(&self) -> Result<User> {
        let envelope: ProfileEnvelope = self.client.get("auth/profile", Query::new()).await?;
        Ok(envelope.user)
    }
}
