use serde::{Deserialize, Serialize};

/// Top-level configuration that mirrors the YAML configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search parameters of the link-guided solver
    #[serde(default)]
    pub solver: SolverConfig,
    /// Parameters of the seeded local-search loop
    #[serde(default)]
    pub run: RunConfig,
    /// Shape of the synthetic instance used by the binary
    #[serde(default)]
    pub synth: SynthParams,
}

impl Config {
    /// Validate every section of the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.solver.validate()?;
        self.run.validate()?;
        self.synth.validate()?;
        Ok(())
    }
}

/// Largest accepted `max_segments`; a path then holds up to `usize::MAX` nodes
pub const MAX_SEGMENTS: usize = usize::MAX - 2;

/// Solver configuration.
///
/// `max_segments` bounds the number of intermediate waypoints per demand, so
/// a path holds at most `max_segments + 2` nodes. `alpha` biases edge
/// selection towards congested edges (weight `utilization^alpha`) and `beta`
/// biases demand selection towards large demands (weight `bandwidth^beta`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_max_segments")]
    pub max_segments: usize,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_segments > MAX_SEGMENTS {
            return Err(ValidationError::InvalidSolver(format!(
                "max_segments must be at most {}, got {}",
                MAX_SEGMENTS, self.max_segments
            )));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ValidationError::InvalidSolver(format!(
                "alpha must be a finite non-negative number, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(ValidationError::InvalidSolver(format!(
                "beta must be a finite non-negative number, got {}",
                self.beta
            )));
        }
        Ok(())
    }

    /// Maximum number of nodes on a path, endpoints included
    pub fn max_path_nodes(&self) -> usize {
        self.max_segments.saturating_add(2)
    }
}

/// Local-search loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Total number of select/search/apply iterations
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Number of leading iterations that target the most utilized edge.
    ///
    /// Iterations `0..warmup_iterations` (exclusive bound) use the most
    /// utilized edge; later ones draw the edge by utilization weight.
    #[serde(default = "default_warmup_iterations")]
    pub warmup_iterations: usize,
    /// Seed of the random draws fed to the solver
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.warmup_iterations > self.iterations {
            return Err(ValidationError::InvalidRun(format!(
                "warmup_iterations ({}) cannot exceed iterations ({})",
                self.warmup_iterations, self.iterations
            )));
        }
        Ok(())
    }
}

/// Synthetic instance parameters.
///
/// Capacities and traffic are expressed in caller units; they are scaled
/// to the engine's fixed-point units when the instance is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthParams {
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    /// Extra random directed edges on top of the bidirectional ring
    #[serde(default = "default_chords")]
    pub chords: usize,
    #[serde(default = "default_demands")]
    pub demands: usize,
    #[serde(default = "default_min_capacity")]
    pub min_capacity: i64,
    #[serde(default = "default_max_capacity")]
    pub max_capacity: i64,
    #[serde(default = "default_max_traffic")]
    pub max_traffic: i64,
    #[serde(default = "default_max_cost")]
    pub max_cost: u32,
}

impl SynthParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nodes < 2 {
            return Err(ValidationError::InvalidSynth(format!(
                "at least 2 nodes are required, got {}",
                self.nodes
            )));
        }
        if self.min_capacity <= 0 || self.max_capacity < self.min_capacity {
            return Err(ValidationError::InvalidSynth(format!(
                "capacity range [{}, {}] is empty or not positive",
                self.min_capacity, self.max_capacity
            )));
        }
        if self.max_traffic <= 0 {
            return Err(ValidationError::InvalidSynth(
                "max_traffic must be positive".to_string(),
            ));
        }
        if self.max_cost == 0 {
            return Err(ValidationError::InvalidSynth(
                "max_cost must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid solver configuration: {0}")]
    InvalidSolver(String),
    #[error("Invalid run configuration: {0}")]
    InvalidRun(String),
    #[error("Invalid synthetic instance configuration: {0}")]
    InvalidSynth(String),
}

fn default_max_segments() -> usize {
    2
}

fn default_alpha() -> f64 {
    8.0
}

fn default_beta() -> f64 {
    4.0
}

fn default_iterations() -> usize {
    10_000
}

fn default_warmup_iterations() -> usize {
    1_000
}

fn default_seed() -> u64 {
    42
}

fn default_nodes() -> usize {
    100
}

fn default_chords() -> usize {
    200
}

fn default_demands() -> usize {
    500
}

fn default_min_capacity() -> i64 {
    1_000
}

fn default_max_capacity() -> i64 {
    10_000
}

fn default_max_traffic() -> i64 {
    200
}

fn default_max_cost() -> u32 {
    10
}

/// Default implementations
impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_segments: default_max_segments(),
            alpha: default_alpha(),
            beta: default_beta(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            warmup_iterations: default_warmup_iterations(),
            seed: default_seed(),
        }
    }
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            chords: default_chords(),
            demands: default_demands(),
            min_capacity: default_min_capacity(),
            max_capacity: default_max_capacity(),
            max_traffic: default_max_traffic(),
            max_cost: default_max_cost(),
        }
    }
}
