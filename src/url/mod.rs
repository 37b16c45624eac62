//! URL handling module for Robots-Checker
//!
//! This module turns a caller-supplied URL into the robots.txt location for its
//! site and the request path that robots rules are matched against, and brings
//! paths and robots patterns into the same percent-encoded form.

mod escape;
mod target;

pub use escape::escape_path;
pub use target::RobotsTarget;
