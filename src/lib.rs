pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod indices;
pub mod report;
pub mod sample;
pub mod series;
