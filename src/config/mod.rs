//! Configuration module for Robots-Checker
//!
//! This module handles loading, parsing, and validating TOML configuration files
//! for the HTTP collaborator that fetches robots.txt. Every field has a default, so
//! a missing file section (or no file at all) is valid.
//!
//! # Example
//!
//! ```no_run
//! use robots_checker::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robots-checker.toml")).unwrap();
//! println!("Redirects: {:?}", config.client.redirect_policy);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, RedirectPolicy};

// Re-export parser functions
pub use parser::{load_config, parse_config};
