// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    client::{Client, Query},
    error::Result,
};

/// Filters for the generated-reports listing. Undefined fields are
/// omitted from the query string.
#[derive(Clone, Debug, Default)]
pub struct ReportFilters {
    pub status: Option<String>,
    pub kind: Option<String>,
    pub limit: Option<u32>,
}

impl ReportFilters {
    fn query(&self) -> Query {
        let mut query = Query::new();
        query.push("status", &self.status);
        query.push("type", &self.kind);
        query.push("limit", &self.limit);
        query
    }
}

/// Payload for `POST /reports/generate`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub metrics: Vec<String>,
    pub estimated_time: String,
}

#[derive(Deserialize)]
struct TemplatesEnvelope {
    templates: Vec<ReportTemplate>,
}

/// Façade over the `/reports` endpoints.
pub struct Reports<'client> {
    client: &'client Client,
}

impl<'client> Reports<'client> {
    pub const fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Previously generated reports, untyped as the backend does not
    /// document a row shape for the listing.
    pub async fn list(&self, filters: &ReportFilters) -> Result<serde_json::Value> {
        self.client.get("reports", filters.query()).await
    }

    /// Kicks off generation of a new report. The response shape depends on
    /// the requested format and is passed through untyped.
    pub async fn generate(&self, request: &GenerateReport) -> Result<serde_json::Value> {
        self.client.post("reports/generate", Some(request)).await
    }

    pub async fn templates(&self) -> Result<Vec<ReportTemplate>> {
        let envelope: TemplatesEnvelope =
            self.client.get("reports/templates", Query::new()).await?;
        Ok(envelope.templates)
    }
}
