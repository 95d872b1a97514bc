// Domain models: telemetry samples and the aggregated dashboard

mod dashboard;
mod sample;

pub use dashboard::{Dashboard, DashboardState, MachineHistory};
pub use sample::Sample;
