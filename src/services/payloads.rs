//! Wire types for the analysis backend.
//!
//! The backend is duck-typed; every field here is optional at the boundary
//! and absent values render as "N/A" instead of failing the screen.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// /api/analyze
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub embeddings: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub statistics: Option<EmbeddingStats>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EmbeddingStats {
    #[serde(default)]
    pub mean: Vec<f64>,
    #[serde(default)]
    pub std: Vec<f64>,
}

// ---------------------------------------------------------------------------
// /api/analyze-timeseries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesRequest {
    pub data: serde_json::Value,
    pub window_size: u32,
    pub forecast_steps: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TimeSeriesResponse {
    #[serde(default)]
    pub bottlenecks: Option<Vec<Bottleneck>>,
    #[serde(default)]
    pub anomalies: Option<Vec<SeriesAnomaly>>,
    #[serde(default)]
    pub recommendations: Option<Vec<SeriesRecommendation>>,
    #[serde(default)]
    pub statistics: Option<SeriesStats>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Bottleneck {
    pub step: String,
    #[serde(default)]
    pub impact: f64,
    #[serde(default)]
    pub delay: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeriesAnomaly {
    pub step: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeriesRecommendation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SeriesStats {
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub std: Option<f64>,
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub seasonality: Option<bool>,
}

// ---------------------------------------------------------------------------
// /api/analyze-supply-chain and /api/monitor-supply-chain
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SupplyChainResponse {
    #[serde(default)]
    pub metrics: Option<SupplyChainMetrics>,
    #[serde(default)]
    pub anomalies: Option<AnomalySummary>,
    #[serde(default)]
    pub recommendations: Option<Vec<SupplyChainRecommendation>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SupplyChainMetrics {
    #[serde(default)]
    pub total_products: Option<u64>,
    #[serde(default)]
    pub total_locations: Option<u64>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnomalySummary {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SupplyChainRecommendation {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Fixed sample metrics the monitoring call reports after a successful
/// analysis, matching the values the dashboard has always sent.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorRequest {
    pub metrics: MonitorMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitorMetrics {
    pub cost_of_goods: f64,
    pub average_inventory: f64,
    pub fulfilled_orders: u64,
    pub total_orders: u64,
    pub total_lead_time: f64,
}

impl MonitorMetrics {
    pub fn sample() -> Self {
        Self {
            cost_of_goods: 1_000_000.0,
            average_inventory: 250_000.0,
            fulfilled_orders: 950,
            total_orders: 1_000,
            total_lead_time: 5_000.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MonitorResponse {
    #[serde(default)]
    pub kpis: Option<SupplyChainKpis>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SupplyChainKpis {
    #[serde(default)]
    pub inventory_turnover: Option<f64>,
    #[serde(default)]
    pub order_fulfillment_rate: Option<f64>,
    #[serde(default)]
    pub supply_chain_velocity: Option<f64>,
}

// ---------------------------------------------------------------------------
// /api/ingest-data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PreprocessingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_missing: Option<MissingValueStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize: Option<NormalizeMethod>,
    pub remove_duplicates: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MissingValueStrategy {
    pub strategy: String,
}

impl MissingValueStrategy {
    pub fn mean() -> Self {
        Self { strategy: "mean".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizeMethod {
    pub method: String,
}

impl NormalizeMethod {
    pub fn minmax() -> Self {
        Self { method: "minmax".to_string() }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct IngestResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub summary: Option<IngestSummary>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct IngestSummary {
    #[serde(default)]
    pub original_rows: Option<u64>,
    #[serde(default)]
    pub processed_rows: Option<u64>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub numeric_columns: Vec<String>,
    #[serde(default)]
    pub categorical_columns: Vec<String>,
    #[serde(default)]
    pub missing_values: HashMap<String, u64>,
}

// ---------------------------------------------------------------------------
// /api/process-model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessStep {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProcessModelPayload {
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Formats an optional number with a fixed number of decimals, or "N/A".
pub fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "N/A".to_string(),
    }
}

/// Formats an optional count, or "N/A".
pub fn fmt_opt_count(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

/// Formats an optional string, or "N/A".
pub fn fmt_opt_str(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_response_decodes_with_all_fields_missing() {
        let parsed: AnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.embeddings.is_none());
        assert!(parsed.statistics.is_none());
    }

    #[test]
    fn analyze_response_decodes_statistics() {
        let body = r#"{"embeddings":[[0.5,-0.5]],"statistics":{"mean":[1.0,2.0,3.0],"std":[0.1,0.2,0.3]}}"#;
        let parsed: AnalyzeResponse = serde_json::from_str(body).unwrap();
        let stats = parsed.statistics.unwrap();
        assert_eq!(stats.mean, vec![1.0, 2.0, 3.0]);
        assert_eq!(stats.std, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn timeseries_request_uses_camel_case_keys() {
        let req = TimeSeriesRequest {
            data: serde_json::json!([{"step": "a"}]),
            window_size: 5,
            forecast_steps: 3,
        };
        let wire = serde_json::to_value(&req).unwrap();
        assert!(wire.get("windowSize").is_some());
        assert!(wire.get("forecastSteps").is_some());
        assert!(wire.get("window_size").is_none());
    }

    #[test]
    fn supply_chain_recommendation_reads_type_field() {
        let body = r#"{"recommendations":[{"type":"inventory","description":"restock","priority":"high"}]}"#;
        let parsed: SupplyChainResponse = serde_json::from_str(body).unwrap();
        let recs = parsed.recommendations.unwrap();
        assert_eq!(recs[0].kind.as_deref(), Some("inventory"));
        assert_eq!(recs[0].priority.as_deref(), Some("high"));
    }

    #[test]
    fn preprocessing_options_omit_unset_steps() {
        let opts = PreprocessingOptions {
            handle_missing: Some(MissingValueStrategy::mean()),
            normalize: None,
            remove_duplicates: true,
        };
        let wire = serde_json::to_value(&opts).unwrap();
        assert_eq!(wire["handle_missing"]["strategy"], "mean");
        assert!(wire.get("normalize").is_none());
        assert_eq!(wire["remove_duplicates"], true);
    }

    #[test]
    fn na_formatting() {
        assert_eq!(fmt_opt(Some(1.23456), 4), "1.2346");
        assert_eq!(fmt_opt(None, 4), "N/A");
        assert_eq!(fmt_opt_count(None), "N/A");
        assert_eq!(fmt_opt_str(Some("")), "N/A");
        assert_eq!(fmt_opt_str(Some("ok")), "ok");
    }
}
