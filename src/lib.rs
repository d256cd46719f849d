pub mod config;
pub mod db;
pub mod models;
pub mod setup;
pub mod utils;
