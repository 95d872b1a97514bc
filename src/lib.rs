// Library for tests to access modules

pub mod config;
pub mod history;
pub mod models;
pub mod render;
pub mod routes;
pub mod telemetry_repo;
pub mod version;
