pub mod aggregate;
pub mod api;
pub mod cli;
pub mod db;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod normalize;
