// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::{
    client::{Client, Query},
    error::Result,
};

/// Filters for the product listing. Undefined fields are omitted from the
/// query string.
#[derive(Clone, Debug, Default)]
pub struct InventoryFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub low_stock: Option<bool>,
    pub search: Option<String>,
}

impl InventoryFilters {
    fn query(&self) -> Query {
        let mut query = Query::new();
        query.push("page", &self.page);
        query.push("limit", &self.limit);
        query.push("category", &self.category);
        query.push("status", &self.status);
        query.push("lowStock", &self.low_stock);
        query.push("search", &self.search);
        query
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: u64,
    pub value: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAnalytics {
    pub total_products: u64,
    pub low_stock_products: u64,
    pub out_of_stock_products: u64,
    pub total_inventory_value: f64,
    pub products_by_category: Vec<CategoryBreakdown>,
    pub top_products_by_value: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct AnalyticsEnvelope {
    analytics: InventoryAnalytics,
}

/// Read-only façade over the `/inventory` endpoints.
pub struct Inventory<'client> {
    client: &'client Client,
}

impl<'client> Inventory<'client> {
    pub const fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// The product listing page, untyped as the backend does not document
    /// a row shape for it.
    pub async fn products(&self, filters: &InventoryFilters) -> Result<serde_json::Value> {
        self.client.get("inventory", filters.query()).await
    }

    pub async fn analytics(&self) -> Result<InventoryAnalytics> {
        let envelope: AnalyticsEnvelope =
            self.client.get("inventory/analytics", Query::new()).await?;
        Ok(envelope.analytics)
    }
}
