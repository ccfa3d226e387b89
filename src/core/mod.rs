//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Page record and search hit models
//! - Rendering functions for different output formats
//! - Path normalization utilities
//! - Common text utilities (excerpts, escaping, file reading)

pub mod model;
pub mod pages;
pub mod paths;
pub mod render;
pub mod util;
