// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::{
    client::{Client, Query},
    error::Result,
};

/// Filters for the user directory listing. Undefined fields are omitted
/// from the query string.
#[derive(Clone, Debug, Default)]
pub struct UserFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl UserFilters {
    fn query(&self) -> Query {
        let mut query = Query::new();
        query.push("page", &self.page);
        query.push("limit", &self.limit);
        query.push("role", &self.role);
        query.push("department", &self.department);
        query.push("status", &self.status);
        query
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoleCount {
    pub role: String,
    pub count: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub month: String,
    pub new_users: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub total_users: u64,
    pub new_users: u64,
    pub users_by_role: Vec<RoleCount>,
    pub users_by_department: Vec<DepartmentCount>,
    pub user_growth: Vec<GrowthPoint>,
}

#[derive(Deserialize)]
struct MetricsEnvelope {
    metrics: UserMetrics,
}

/// Read-only façade over the `/users` endpoints.
pub struct Users<'client> {
    client: &'client Client,
}

impl<'client> Users<'client> {
    pub const fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// The user directory page. The backend does not document a row shape
    /// for this listing, so it is passed through untyped.
    pub async fn list(&self, filters: &UserFilters) -> Result<serde_json::Value> {
        self.client.get("users", filters.query()).await
    }

    pub async fn metrics(&self) -> Result<UserMetrics> {
        let envelope: MetricsEnvelope = self.client.get("users/metrics", Query::new()).await?;
        Ok(envelope.metrics)
    }
}
