// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use log::warn;

use crate::{
    error::Result,
    metadata,
    session::{self, Profile, Token},
};

use super::Storage;

const TOKEN_FILE: &str = "token";
const PROFILE_FILE: &str = "profile.json";

/// Durable storage under the platform data directory: the bearer token in
/// one file, the identity snapshot in a second. The pair invariant is
/// enforced on read: if exactly one of the two exists, both are removed
/// and the pair is reported absent.
pub struct File {
    token_path: PathBuf,
    profile_path: PathBuf,
}

impl File {
    pub fn new() -> Option<Self> {
        metadata::PROJECT_DIRS
            .as_ref()
            .map(|dirs| Self::at(dirs.data_dir()))
    }

    /// Keep the pair under an explicit directory instead of the platform
    /// data directory.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            token_path: dir.as_ref().join(TOKEN_FILE),
            profile_path: dir.as_ref().join(PROFILE_FILE),
        }
    }

    fn read_token(&self) -> Result<Option<Token>> {
        match fs::read_to_string(&self.token_path) {
            Ok(raw) => Ok(Some(Token::from(raw))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn read_profile(&self) -> Result<Option<Profile>> {
        match fs::File::open(&self.profile_path) {
            Ok(fp) => Ok(Some(serde_json::from_reader::<fs::File, Profile>(fp)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl Storage for File {
    async fn get(&mut self) -> Result<Option<session::Data>> {
        match (self.read_token()?, self.read_profile()?) {
            (Some(token), Some(profile)) => Ok(Some(session::Data::new(token, profile))),
            (None, None) => Ok(None),
            _ => {
                // Half a pair is invalid: never hand out a token with no
                // identity, or an identity with no token.
                warn!("Purging a partially written credential pair");
                self.clear().await?;
                Ok(None)
            }
        }
    }

    async fn update(&mut self, data: &session::Data) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.token_path, data.token().expose())?;
        let file = fs::File::create(&self.profile_path)?;
        serde_json::to_writer(file, data.profile())?;
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        Self::remove(&self.token_path)?;
        Self::remove(&self.profile_path)
    }
}
