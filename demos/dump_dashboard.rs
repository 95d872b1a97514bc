// Print the aggregated dashboard JSON for a telemetry database.
//
// Usage: cargo run --example dump_dashboard -- [DB_PATH] [TABLE]
//   DB_PATH  default: ./data/fabrica.db
//   TABLE    default: dados_monitoramento

use factory_dashboard::models::DashboardState;
use factory_dashboard::telemetry_repo::TelemetryRepo;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("./data/fabrica.db");
    let table = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("dados_monitoramento");

    let repo = TelemetryRepo::connect(path, 1, table).await?;
    match repo.load_dashboard().await? {
        DashboardState::Ready(dashboard) => {
            println!("{}", serde_json::to_string_pretty(&dashboard)?)
        }
        DashboardState::Initializing => eprintln!("table {} does not exist yet", table),
    }
    repo.close().await;
    Ok(())
}
