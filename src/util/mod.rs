//! Utility modules for syscallgen
//!
//! This module contains utility functions used by syscallgen.

pub mod logging;

pub use logging::init_logging;
