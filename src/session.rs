// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use secrecy::{ExposeSecret, Zeroize};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::metadata;

/// Raw bearer credential material. Only ever handled through [`Token`].
#[derive(Clone, Deserialize, Serialize)]
pub(crate) struct Raw(String);

impl secrecy::CloneableSecret for Raw {}

impl secrecy::SerializableSecret for Raw {}

impl Zeroize for Raw {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// An opaque bearer credential issued by the backend.
///
/// The wrapped string is never logged or printed; it only leaves the type
/// to be attached to an `Authorization` header or written to the persisted
/// pair. An empty token is not a valid credential.
#[derive(Clone, Deserialize, Serialize)]
pub struct Token(secrecy::Secret<Raw>);

impl Token {
    pub(crate) fn expose(&self) -> &str {
        &self.0.expose_secret().0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token([REDACTED])")
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(secrecy::Secret::new(Raw(value)))
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.expose()
            .as_bytes()
            .ct_eq(other.expose().as_bytes())
            .unwrap_u8()
            == 1_u8
    }
}

impl Eq for Token {}

/// Identity shape returned by the backend's auth endpoints.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

/// The session's view of the authenticated user.
///
/// Extends the wire identity with display fields the backend does not
/// send: `first_name`/`last_name` come from splitting `name` on its first
/// space, and `bio` is synthesized as `"{role} at {department}"`, falling
/// back to the organization name when no department is set.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl Profile {
    /// Shallow merge: `Some` fields of the update win, `None` fields leave
    /// the profile untouched.
    pub(crate) fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            first_name,
            last_name,
            email,
            phone,
            bio,
            avatar,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(avatar) = avatar {
            self.avatar = Some(avatar);
        }
    }
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        let (first_name, last_name) = split_name(&user.name);
        let bio = format!(
            "{} at {}",
            user.role,
            user.department
                .as_deref()
                .unwrap_or(metadata::DEFAULT_ORGANIZATION)
        );

        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            first_name,
            last_name,
            bio,
            department: user.department,
            phone: None,
            avatar: user.avatar,
            last_login: user.last_login,
        }
    }
}

fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, last)) => (first.to_owned(), last.to_owned()),
        None => (name.to_owned(), String::new()),
    }
}

/// A partial profile edit, shaped like the original profile form's payload.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// The pair persisted between runs: the bearer token and the identity
/// snapshot it belongs to. The two are always written and cleared
/// together; storage backends treat half a pair as invalid.
#[derive(Clone, Deserialize, Serialize)]
pub struct Data {
    token: Token,
    profile: Profile,
}

impl Data {
    pub const fn new(token: Token, profile: Profile) -> Self {
        Self { token, profile }
    }

    pub const fn token(&self) -> &Token {
        &self.token
    }

    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The same credential bound to a fresh identity snapshot.
    pub(crate) fn with_profile(&self, profile: Profile) -> Self {
        Self {
            token: self.token.clone(),
            profile,
        }
    }
}
