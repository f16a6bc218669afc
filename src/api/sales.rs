// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::{
    client::{Client, Query},
    error::Result,
};

/// Filters for the paginated sales listing. Undefined fields are omitted
/// from the query string.
#[derive(Clone, Debug, Default)]
pub struct SalesFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SalesFilters {
    fn query(&self) -> Query {
        let mut query = Query::new();
        query.push("page", &self.page);
        query.push("limit", &self.limit);
        query.push("category", &self.category);
        query.push("region", &self.region);
        query.push("status", &self.status);
        query.push("startDate", &self.start_date);
        query.push("endDate", &self.end_date);
        query
    }
}

/// A date window for the regional breakdown.
#[derive(Clone, Debug, Default)]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRange {
    fn query(&self) -> Query {
        let mut query = Query::new();
        query.push("startDate", &self.start_date);
        query.push("endDate", &self.end_date);
        query
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub avg_order_value: f64,
}

/// One page of the sales listing. The row shape is backend-defined and
/// passed through untyped.
#[derive(Clone, Debug, Deserialize)]
pub struct SalesPage {
    pub sales: Vec<serde_json::Value>,
    pub pagination: Pagination,
    pub summary: SalesSummary,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegionSales {
    pub region: String,
    pub revenue: f64,
    pub orders: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub total_revenue: f64,
    pub total_quantity: u64,
    pub average_price: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionEnvelope {
    sales_by_region: Vec<RegionSales>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPerformanceEnvelope {
    product_performance: Vec<ProductPerformance>,
}

/// Read-only façade over the `/sales` endpoints.
pub struct Sales<'client> {
    client: &'client Client,
}

impl<'client> Sales<'client> {
    pub const fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &SalesFilters) -> Result<SalesPage> {
        self.client.get("sales", filters.query()).await
    }

    pub async fn by_region(&self, range: &DateRange) -> Result<Vec<RegionSales>> {
        let envelope: RegionEnvelope = self.client.get("sales/by-region", range.query()).await?;
        Ok(envelope.sales_by_region)
    }

    /// Top products by revenue. The backend's default window is the top
    /// ten; pass a limit to widen or narrow it.
    pub async fn product_performance(&self, limit: Option<u32>) -> Result<Vec<ProductPerformance>> {
        let mut query = Query::new();
        query.push("limit", &Some(limit.unwrap_or(10)));

        let envelope: ProductPerformanceEnvelope = self
            .client
            .get("sales/product-performance", query)
            .await?;
        Ok(envelope.product_performance)
    }
}
