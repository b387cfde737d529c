//! Application shell for the fixtures calendar generator.
//!
//! Everything the domain core keeps out of scope lives here: CLI arguments,
//! environment configuration, data-file discovery, YAML loading, coloured
//! table rendering and writing the finished .ics bytes.

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod generate;
pub mod table;
