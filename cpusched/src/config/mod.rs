//! Workload file loading.
//!
//! A workload file describes the processes to simulate and, optionally, the
//! policy and quantum to use.  Command-line flags override the file.
//!
//! The expected YAML structure is:
//! ```yaml
//! algorithm: RR
//! quantum: 2
//! processes:
//!   - { arrival: 0, burst: 4, priority: 1 }
//!   - { arrival: 1, burst: 3 }
//!   - arrival: 2
//!     burst: 2
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::process::{ProcessTable, DEFAULT_PRIORITY};
use crate::scheduler::ValidationError;

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkloadFile {
    algorithm: Option<String>,
    quantum: Option<i64>,
    #[serde(default)]
    processes: Vec<ProcessEntry>,
}

/// Per-process fields as they appear in the YAML file.
///
/// Values stay signed here so that a negative arrival or burst is reported
/// by [`ProcessTable::from_lists`] with the process id, not as a YAML type
/// error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcessEntry {
    arrival: i64,
    burst: i64,
    priority: Option<i64>,
}

// ── Public data structures ────────────────────────────────────────────────────

/// A parsed, not yet validated workload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Policy name as written in the file; parsed later so the CLI can
    /// override it.
    pub algorithm: Option<String>,
    pub quantum: Option<i64>,
    pub arrivals: Vec<i64>,
    pub bursts: Vec<i64>,
    /// `None` when no entry sets a priority.  When only some do, the rest
    /// get [`DEFAULT_PRIORITY`].
    pub priorities: Option<Vec<i64>>,
}

impl WorkloadConfig {
    /// Read and parse the workload file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid.  Value checks happen in
    /// [`to_table`](Self::to_table).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading workload from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open workload file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))
    }

    /// Parse a workload from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: WorkloadFile = serde_yaml::from_str(content)?;

        if file.processes.is_empty() {
            warn!("Workload file lists no processes");
        }

        let any_priority = file.processes.iter().any(|p| p.priority.is_some());
        let priorities = any_priority.then(|| {
            file.processes
                .iter()
                .map(|p| p.priority.unwrap_or(DEFAULT_PRIORITY as i64))
                .collect()
        });

        let config = Self {
            algorithm: file.algorithm,
            quantum: file.quantum,
            arrivals: file.processes.iter().map(|p| p.arrival).collect(),
            bursts: file.processes.iter().map(|p| p.burst).collect(),
            priorities,
        };

        debug!(
            algorithm = ?config.algorithm,
            quantum = ?config.quantum,
            processes = config.arrivals.len(),
            "workload parsed"
        );

        Ok(config)
    }

    /// Validate the process entries into a [`ProcessTable`].
    pub fn to_table(&self) -> Result<ProcessTable, ValidationError> {
        ProcessTable::from_lists(&self.arrivals, &self.bursts, self.priorities.as_deref())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
