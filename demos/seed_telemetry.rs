// Fill a telemetry database with simulated CNC machines.
//
// Each machine follows the shop-floor state model: an operator starts and
// stops cycles or trips a fault while running, a technician clears faults
// (or waits for parts first). Parts are completed while RUNNING.
//
// Usage: cargo run --example seed_telemetry -- [DB_PATH] [MACHINES] [TICKS]
//   DB_PATH   default: ./data/fabrica.db
//   MACHINES  default: 3
//   TICKS     default: 600 (one sample per machine per simulated second)

use chrono::{Duration, Utc};
use factory_dashboard::models::Sample;
use factory_dashboard::telemetry_repo::TelemetryRepo;
use std::env;

const ALARM_CODES: [&str; 3] = ["E101", "E205", "F303"];

struct CncMachine {
    id: String,
    status: &'static str,
    production_total: i64,
    position_x: f64,
    alarms: Vec<&'static str>,
}

impl CncMachine {
    fn new(id: String) -> Self {
        Self {
            id,
            status: "IDLE",
            production_total: 0,
            position_x: 0.0,
            alarms: Vec::new(),
        }
    }

    fn operator(&mut self, action: usize, alarm: &'static str) {
        match (action % 3, self.status) {
            (0, "IDLE") => self.status = "RUNNING",
            (1, "RUNNING") => self.status = "IDLE",
            (2, "RUNNING") => {
                if !self.alarms.contains(&alarm) {
                    self.alarms.push(alarm);
                }
                self.status = "ALARM";
            }
            _ => {}
        }
    }

    fn technician(&mut self, visit: usize) {
        match self.status {
            "WAITING_FOR_REPAIR" => self.status = "ALARM",
            // Every fifth repair attempt needs parts first.
            "ALARM" if visit % 5 == 4 => self.status = "WAITING_FOR_REPAIR",
            "ALARM" => {
                self.alarms.clear();
                self.status = "IDLE";
            }
            _ => {}
        }
    }

    fn step(&mut self, tick: usize) {
        if self.status == "RUNNING" {
            self.position_x += ((tick % 11) as f64 - 5.0) / 10.0;
            if tick % 37 == 0 {
                self.production_total += 1;
            }
        }
    }

    fn sample(&self, at: chrono::DateTime<Utc>) -> Sample {
        Sample {
            machine_id: self.id.clone(),
            timestamp: at,
            status: self.status.to_string(),
            production_total: self.production_total,
            position_x: self.position_x,
            active_alarms: (!self.alarms.is_empty()).then(|| self.alarms.join(",")),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("./data/fabrica.db");
    let machines: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3);
    let ticks: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(600);

    let repo = TelemetryRepo::connect(path, 1, "dados_monitoramento").await?;
    repo.create_table().await?;

    let start = Utc::now() - Duration::seconds(ticks as i64);
    let mut fleet: Vec<CncMachine> = (1..=machines)
        .map(|i| CncMachine::new(format!("cnc_simulador_{}", i)))
        .collect();

    let mut batch = Vec::with_capacity(machines * ticks);
    for tick in 0..ticks {
        let at = start + Duration::seconds(tick as i64);
        for (i, m) in fleet.iter_mut().enumerate() {
            if (tick + i * 7) % 23 == 0 {
                m.operator(tick / 23 + i, ALARM_CODES[(tick + i) % ALARM_CODES.len()]);
            }
            if (tick + i * 11) % 47 == 0 {
                m.technician(tick / 47);
            }
            m.step(tick);
            batch.push(m.sample(at));
        }
    }
    repo.insert_samples(&batch).await?;
    println!("inserted {} samples for {} machines into {}", batch.len(), machines, path);
    repo.close().await;
    Ok(())
}
