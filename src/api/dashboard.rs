// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::{
    client::{Client, Query},
    error::Result,
};

/// A single headline metric card.
#[derive(Clone, Debug, Deserialize)]
pub struct Kpi {
    pub id: String,
    pub title: String,
    pub value: String,
    pub change: f64,
    pub trend: Trend,
    pub icon: String,
    pub color: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    pub revenue: f64,
    pub orders: i64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: String,
    pub action: String,
    #[serde(default)]
    pub amount: Option<f64>,
    pub time: String,
    #[serde(default)]
    pub sales_rep: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TopPerformer {
    pub id: String,
    pub name: String,
    pub rank: i64,
    pub revenue: f64,
    pub orders: i64,
    pub change: f64,
}

#[derive(Deserialize)]
struct KpisEnvelope {
    kpis: Vec<Kpi>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RevenueChartEnvelope {
    chart_data: Vec<RevenuePoint>,
}

#[derive(Deserialize)]
struct ActivityEnvelope {
    activities: Vec<Activity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopPerformersEnvelope {
    top_performers: Vec<TopPerformer>,
}

/// Read-only façade over the `/dashboard` endpoints.
pub struct Dashboard<'client> {
    client: &'client Client,
}

impl<'client> Dashboard<'client> {
    pub const fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn kpis(&self) -> Result<Vec<Kpi>> {
        let envelope: KpisEnvelope = self.client.get("dashboard/kpis", Query::new()).await?;
        Ok(envelope.kpis)
    }

    pub async fn revenue_chart(&self) -> Result<Vec<RevenuePoint>> {
        let envelope: RevenueChartEnvelope = self
            .client
            .get("dashboard/revenue-chart", Query::new())
            .await?;
        Ok(envelope.chart_data)
    }

    pub async fn activity(&self) -> Result<Vec<Activity>> {
        let envelope: ActivityEnvelope =
            self.client.get("dashboard/activity", Query::new()).await?;
        Ok(envelope.activities)
    }

    pub async fn top_performers(&self) -> Result<Vec<TopPerformer>> {
        let envelope: TopPerformersEnvelope = self
            .client
            .get("dashboard/top-performers", Query::new())
            .await?;
        Ok(envelope.top_performers)
    }
}
