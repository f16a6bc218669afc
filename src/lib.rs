// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! Typed asynchronous client for the BizDash analytics backend.
//!
//! The crate has three layers: [`SessionStore`] is the single authority
//! for "who is logged in" (credential persistence, startup hydration,
//! login/logout/profile edits); [`Client`] executes requests against the
//! backend, attaching the stored bearer credential and normalizing
//! failure responses into displayable messages; and the [`api`] modules
//! are thin typed façades over the individual domain endpoints.
//!
//! ```no_run
//! use bizdash::{
//!     api::{auth::Auth, dashboard::Dashboard},
//!     storage::{self, Memory},
//!     Client, SessionStore,
//! };
//!
//! # async fn run() -> bizdash::Result<()> {
//! let storage = match storage::File::new() {
//!     Some(file) => storage::shared(file),
//!     None => storage::shared(Memory::new()),
//! };
//! let client = Client::new(storage.clone());
//! let store = SessionStore::new(Box::new(Auth::new(client.clone())), storage);
//!
//! store.initialize().await;
//! if !store.is_authenticated().await {
//!     let _ = store.login("jo@example.com", "hunter2").await?;
//! }
//!
//! for kpi in Dashboard::new(&client).kpis().await? {
//!     println!("{}: {}", kpi.title, kpi.value);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

pub mod api;
pub mod client;
pub mod error;
mod metadata;
pub mod session;
pub mod storage;
mod store;

pub use client::{Client, Query};
pub use error::{Error, Result};
pub use store::SessionStore;
