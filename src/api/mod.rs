// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! Thin, stateless façades over the backend's domain endpoints.
//!
//! Each module centralizes the endpoint paths and typed response shapes
//! for one domain; none of them hold state or add behavior beyond
//! assembling the request and forwarding the client's result.

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod reports;
pub mod sales;
pub mod users;
