pub mod configuration;
pub mod cors;
pub mod db;
pub mod health;
pub mod routes;
pub mod startup;
pub mod telemetry;
