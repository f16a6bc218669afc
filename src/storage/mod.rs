// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod file;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::lock::Mutex;

use crate::{error::Result, session};

pub use file::File;
pub use memory::Memory;

/// A place to keep the persisted credential pair between runs.
///
/// Implementations must treat the token and the identity snapshot as a
/// unit: both are written by `update` and removed by `clear`, and a
/// half-written pair is purged on read rather than handed out.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&mut self) -> Result<Option<session::Data>>;
    async fn update(&mut self, data: &session::Data) -> Result<()>;
    async fn clear(&mut self) -> Result<()>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for Box<T> {
    async fn get(&mut self) -> Result<Option<session::Data>> {
        (**self).get().await
    }

    async fn update(&mut self, data: &session::Data) -> Result<()> {
        (**self).update(data).await
    }

    async fn clear(&mut self) -> Result<()> {
        (**self).clear().await
    }
}

/// Handle through which the HTTP client and the session store see the same
/// persisted credentials.
pub type Shared = Arc<Mutex<Box<dyn Storage>>>;

pub fn shared<S: Storage + 'static>(storage: S) -> Shared {
    let boxed: Box<dyn Storage> = Box::new(storage);
    Arc::new(Mutex::new(boxed))
}
