//! # mmsplain-core
//!
//! Conversion services built on `mmsplain-wsp`.
//!
//! This crate provides:
//! - Engine configuration
//! - Code tables loaded from metadata JSON files
//! - The conversion engine (PDU file to plain text)
//! - Plain-text file and directory writers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
mod error;
pub mod metadata;
pub mod output;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::Engine;
pub use error::{Error, Result};
pub use metadata::{MetaEntry, load_dir};
pub use output::{HEADER_FILE, part_file_name, write_directory, write_plain_file};
