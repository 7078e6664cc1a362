use std::path::PathBuf;

// Re-export types from the core library
pub use ruler_core::{RulerLayout, RulerSpec};

/// Commands sent from UI to worker
#[derive(Debug, PartialEq)]
pub enum RulerCommand {
    /// Compute geometry and layout for a new ruler
    BuildRuler {
        spec: RulerSpec,
    },
    LoadConfig {
        path: PathBuf,
    },
    SaveConfig {
        spec: RulerSpec,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum RulerUpdate {
    /// A build has been picked up by the worker
    Building {
        spec: RulerSpec,
    },
    RulerBuilt {
        spec: RulerSpec,
        layout: RulerLayout,
    },
    /// The requested ruler could not be built
    BuildFailed {
        spec: RulerSpec,
        message: String,
    },
    ConfigLoaded {
        spec: RulerSpec,
    },
    ConfigSaved {
        path: PathBuf,
    },
    /// A settings file could not be read or written
    Error {
        message: String,
    },
}
