pub mod config;
pub mod generator;
pub mod prompt;
pub mod routes;
pub mod sections;
