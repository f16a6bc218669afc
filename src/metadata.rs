// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use url::Url;

pub(crate) static CLIENT_TYPE_ID: Lazy<String> =
    Lazy::new(|| option_env!("CARGO_PKG_NAME").unwrap_or("bizdash").to_owned());

/// Organization name substituted into a synthesized bio when the backend
/// reports no department for an identity.
pub(crate) const DEFAULT_ORGANIZATION: &str = "BizDash";

/// The backend the client talks to unless a caller overrides it. The
/// trailing slash matters: endpoint paths are joined relative to it.
pub(crate) static DEFAULT_BASE_URL: Lazy<Url> = Lazy::new(|| {
    // LINT: Parsing a literal that is known to be a valid URL.
    #[allow(clippy::unwrap_used)]
    let url = Url::parse("https://render-backend-bizdash.onrender.com/api/").unwrap();
    url
});

pub(crate) static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("com", DEFAULT_ORGANIZATION, &CLIENT_TYPE_ID));
