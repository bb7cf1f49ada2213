//! Exercises the live analysis backend from the command line.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use cruscotto::config::ClientConfig;
use cruscotto::services::api_client::ApiClient;
use cruscotto::services::payloads::{MonitorMetrics, TimeSeriesRequest};

#[derive(Debug, Parser)]
#[command(name = "cruscotto-probe", about = "Probe the analysis backend endpoints")]
struct Args {
    /// Backend base URL; falls back to API_BASE_URL or the default.
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    timeout_ms: u64,

    /// Text sent to /api/analyze.
    #[arg(long, default_value = "The casting line is running ahead of schedule.")]
    text: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();
    let args = Args::parse();

    let config = ClientConfig::from_env();
    let base_url = args.base_url.unwrap_or(config.api_base_url);
    println!("Using backend {}", base_url);

    let api = ApiClient::new(base_url, Duration::from_millis(args.timeout_ms));

    match api.analyze_text(&args.text).await {
        Ok(response) => {
            let dims = response
                .embeddings
                .as_ref()
                .and_then(|e| e.first())
                .map(|v| v.len())
                .unwrap_or(0);
            println!("ANALYZE -> {} embedding dimensions", dims);
        }
        Err(e) => println!("ANALYZE -> error: {}", e),
    }

    let series = TimeSeriesRequest {
        data: serde_json::json!([
            {"timestamp": "2024-03-01T08:00:00", "step": "casting", "delay": 2.5},
            {"timestamp": "2024-03-01T11:00:00", "step": "rolling", "delay": 1.0},
            {"timestamp": "2024-03-01T15:00:00", "step": "coating", "delay": 4.0}
        ]),
        window_size: 5,
        forecast_steps: 3,
    };
    match api.analyze_timeseries(&series).await {
        Ok(response) => {
            let bottlenecks = response.bottlenecks.map(|b| b.len()).unwrap_or(0);
            println!("TIMESERIES -> {} bottlenecks", bottlenecks);
        }
        Err(e) => println!("TIMESERIES -> error: {}", e),
    }

    match api.monitor_supply_chain(MonitorMetrics::sample()).await {
        Ok(response) => {
            let kpis = response.kpis.unwrap_or_default();
            println!(
                "MONITOR -> turnover {:?}, fulfillment {:?}, velocity {:?}",
                kpis.inventory_turnover, kpis.order_fulfillment_rate, kpis.supply_chain_velocity
            );
        }
        Err(e) => println!("MONITOR -> error: {}", e),
    }

    let model = api
        .fetch_process_model()
        .await
        .context("process model fetch failed")?;
    println!("PROCESS MODEL -> {} steps", model.steps.len());
    for step in &model.steps {
        println!("  [{}] {}", step.id, step.text);
    }

    Ok(())
}
