//! High-level runtime engine settings
//!
//! Selects how a built `Scenario` is driven: the interactive viewer or
//! the fixed-tick console runner

use crate::configuration::config::RunModeConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: RunModeConfig, // visual or headless
}
