//! Solve configuration.
//!
//! Options can be built in code or loaded from:
//! 1. A configuration file (YAML or JSON, chosen by extension)
//! 2. Environment variables (with `QISING_` prefix)
//!
//! Precedence (highest to lowest): environment, file, defaults.
//!
//! ```yaml
//! steps: 2
//! seed: 7
//! samples: 1000
//! bias_indexing: logical
//! reserved_qubit: 3
//! mixer:
//!   kind: one_hot
//!   include_final_move: false
//! optimizer:
//!   method: Nelder-Mead
//!   options: { ftol: 0.01, xtol: 0.01, disp: false }
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use qising_core::{BiasIndexing, IsingProblem, OneHotMixer, ReservedQubitShift};

use crate::error::{QaoaError, QaoaResult};

/// Progress callback invoked with the current parameter vector.
pub type DisplayCallback = Arc<dyn Fn(&[f64]) + Send + Sync>;

/// Classical optimizer settings handed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Optimization algorithm name.
    #[serde(default = "default_method")]
    pub method: String,
    /// Algorithm options.
    #[serde(default)]
    pub options: OptimizerOptions,
}

/// Tolerances and verbosity for the classical optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerOptions {
    /// Absolute tolerance on the objective.
    #[serde(default = "default_tolerance", alias = "ftol")]
    pub function_tolerance: f64,
    /// Absolute tolerance on the parameters.
    #[serde(default = "default_tolerance", alias = "xtol")]
    pub parameter_tolerance: f64,
    /// Print convergence messages.
    #[serde(default, alias = "disp")]
    pub verbose: bool,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            function_tolerance: default_tolerance(),
            parameter_tolerance: default_tolerance(),
            verbose: false,
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            options: OptimizerOptions::default(),
        }
    }
}

/// Settings for expectation-value evaluation.
#[derive(Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Called with the current parameters after each evaluation.
    #[serde(skip)]
    pub display: Option<DisplayCallback>,
    /// Keep every evaluated parameter vector.
    #[serde(default = "default_true")]
    pub return_all: bool,
    /// Shots per expectation estimate; `None` for the exact expectation.
    #[serde(default)]
    pub samples: Option<u64>,
}

impl EvaluationConfig {
    /// Progress logging, all evaluations kept, `samples` shots.
    pub fn with_samples(samples: Option<u64>) -> Self {
        Self {
            display: Some(progress_logger()),
            return_all: true,
            samples,
        }
    }

    /// Replace the progress callback.
    #[must_use]
    pub fn with_display(mut self, display: impl Fn(&[f64]) + Send + Sync + 'static) -> Self {
        self.display = Some(Arc::new(display));
        self
    }

    /// Drop the progress callback.
    #[must_use]
    pub fn without_display(mut self) -> Self {
        self.display = None;
        self
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::with_samples(None)
    }
}

impl fmt::Debug for EvaluationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationConfig")
            .field("display", &self.display.as_ref().map(|_| "<callback>"))
            .field("return_all", &self.return_all)
            .field("samples", &self.samples)
            .finish()
    }
}

/// Default progress callback: log the parameter vector.
pub fn progress_logger() -> DisplayCallback {
    Arc::new(|params: &[f64]| info!(?params, "QAOA parameters"))
}

/// Which driver Hamiltonian mixes the QAOA state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MixerKind {
    /// −Σ X over every qubit.
    #[default]
    TransverseField,
    /// One-hot XY mixer over four-way move blocks.
    OneHot {
        /// Also mix the final move block.
        #[serde(default)]
        include_final_move: bool,
    },
}

impl MixerKind {
    /// The one-hot generator for this kind, if any.
    pub fn one_hot(&self) -> Option<OneHotMixer> {
        match *self {
            MixerKind::TransverseField => None,
            MixerKind::OneHot { include_final_move } => {
                Some(OneHotMixer::new().with_final_move(include_final_move))
            }
        }
    }
}

/// Options for [`solve_klocal_ising`](crate::solve::solve_klocal_ising).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOptions {
    /// QAOA steps; 0 selects the default of 2 × len(h).
    #[serde(default)]
    pub steps: usize,
    /// Report optimizer progress.
    #[serde(default = "default_true")]
    pub verbose: bool,
    /// Seed for angle initialisation and the backend.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Shots per expectation estimate when no evaluation config is given.
    #[serde(default)]
    pub samples: Option<u64>,
    /// Initial β angles, one per step.
    #[serde(default)]
    pub initial_betas: Option<Vec<f64>>,
    /// Initial γ angles, one per step.
    #[serde(default)]
    pub initial_gammas: Option<Vec<f64>>,
    /// Classical optimizer settings; defaults to Nelder-Mead.
    #[serde(default)]
    pub optimizer: Option<OptimizerConfig>,
    /// Evaluation settings; defaults are derived from `samples`.
    #[serde(default)]
    pub evaluation: Option<EvaluationConfig>,
    /// Bias lookup mode for the compiler.
    #[serde(default)]
    pub bias_indexing: BiasIndexing,
    /// Physical qubit to skip, or `None` to place variable i on qubit i.
    #[serde(default = "default_reserved_qubit")]
    pub reserved_qubit: Option<usize>,
    /// Driver Hamiltonian.
    #[serde(default)]
    pub mixer: MixerKind,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            steps: 0,
            verbose: true,
            seed: None,
            samples: None,
            initial_betas: None,
            initial_gammas: None,
            optimizer: None,
            evaluation: None,
            bias_indexing: BiasIndexing::default(),
            reserved_qubit: default_reserved_qubit(),
            mixer: MixerKind::default(),
        }
    }
}

impl SolveOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of QAOA steps.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Enable or disable progress reporting.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the shot count.
    #[must_use]
    pub fn with_samples(mut self, samples: u64) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Set initial angles.
    #[must_use]
    pub fn with_initial_angles(mut self, betas: Vec<f64>, gammas: Vec<f64>) -> Self {
        self.initial_betas = Some(betas);
        self.initial_gammas = Some(gammas);
        self
    }

    /// Set the optimizer configuration.
    #[must_use]
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    /// Set the evaluation configuration.
    #[must_use]
    pub fn with_evaluation(mut self, evaluation: EvaluationConfig) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    /// Set the bias lookup mode.
    #[must_use]
    pub fn with_bias_indexing(mut self, bias_indexing: BiasIndexing) -> Self {
        self.bias_indexing = bias_indexing;
        self
    }

    /// Set or clear the reserved physical qubit.
    #[must_use]
    pub fn with_reserved_qubit(mut self, reserved: Option<usize>) -> Self {
        self.reserved_qubit = reserved;
        self
    }

    /// Set the mixer.
    #[must_use]
    pub fn with_mixer(mut self, mixer: MixerKind) -> Self {
        self.mixer = mixer;
        self
    }

    /// Load options from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> QaoaResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let options: SolveOptions = if is_json {
            serde_json::from_str(&contents).map_err(|e| QaoaError::Config(e.to_string()))?
        } else {
            serde_yaml_ng::from_str(&contents).map_err(|e| QaoaError::Config(e.to_string()))?
        };

        options.validate()?;
        Ok(options)
    }

    /// Load options: file if given, else defaults, then environment overrides.
    pub fn load(config_file: Option<&Path>) -> QaoaResult<Self> {
        let options = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let options = options.merge_env();
        options.validate()?;
        Ok(options)
    }

    /// Apply `QISING_*` environment variables that are set and parse.
    pub fn merge_env(mut self) -> Self {
        if let Some(v) = env_parse("QISING_STEPS") {
            self.steps = v;
        }
        if let Some(v) = env_parse("QISING_SEED") {
            self.seed = Some(v);
        }
        if let Some(v) = env_parse("QISING_SAMPLES") {
            self.samples = Some(v);
        }
        if let Some(v) = env_parse("QISING_VERBOSE") {
            self.verbose = v;
        }
        if let Some(v) = env_parse("QISING_BIAS_INDEXING") {
            self.bias_indexing = v;
        }
        if let Ok(v) = std::env::var("QISING_RESERVED_QUBIT") {
            if v.eq_ignore_ascii_case("none") {
                self.reserved_qubit = None;
            } else if let Ok(q) = v.parse() {
                self.reserved_qubit = Some(q);
            }
        }
        self
    }

    /// Check option consistency.
    pub fn validate(&self) -> QaoaResult<()> {
        match (&self.initial_betas, &self.initial_gammas) {
            (Some(b), Some(g)) if b.len() != g.len() => {
                return Err(QaoaError::Config(format!(
                    "initial_betas has {} entries but initial_gammas has {}",
                    b.len(),
                    g.len()
                )));
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(QaoaError::Config(
                    "initial_betas and initial_gammas must be given together".to_string(),
                ));
            }
            _ => {}
        }

        if self.samples == Some(0) {
            return Err(QaoaError::Config(
                "samples must be greater than 0; omit it for exact expectations".to_string(),
            ));
        }

        if let Some(ref optimizer) = self.optimizer {
            if optimizer.method.trim().is_empty() {
                return Err(QaoaError::Config(
                    "optimizer method must not be empty".to_string(),
                ));
            }
            let opts = &optimizer.options;
            if opts.function_tolerance <= 0.0 || opts.parameter_tolerance <= 0.0 {
                return Err(QaoaError::Config(
                    "optimizer tolerances must be positive".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Step count for `problem`: the configured value, or 2 × len(h) when
    /// it is 0 (2 × the number of variables for a problem without biases).
    pub fn resolve_steps(&self, problem: &IsingProblem) -> usize {
        if self.steps != 0 {
            return self.steps;
        }
        if problem.biases.is_empty() {
            2 * problem.num_variables()
        } else {
            2 * problem.biases.len()
        }
    }

    /// Optimizer configuration to hand to the backend.
    pub fn resolve_optimizer(&self) -> OptimizerConfig {
        self.optimizer.clone().unwrap_or_default()
    }

    /// Evaluation configuration to hand to the backend. The progress
    /// callback is dropped when `verbose` is off.
    pub fn resolve_evaluation(&self) -> EvaluationConfig {
        let evaluation = self
            .evaluation
            .clone()
            .unwrap_or_else(|| EvaluationConfig::with_samples(self.samples));
        if self.verbose {
            evaluation
        } else {
            evaluation.without_display()
        }
    }

    /// Remap policy for the compiler.
    pub fn remap(&self) -> Box<dyn qising_core::QubitRemap> {
        match self.reserved_qubit {
            Some(q) => Box::new(ReservedQubitShift::new(q)),
            None => Box::new(qising_core::IdentityRemap),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn default_method() -> String {
    "Nelder-Mead".to_string()
}

fn default_tolerance() -> f64 {
    1.0e-2
}

fn default_true() -> bool {
    true
}

fn default_reserved_qubit() -> Option<usize> {
    Some(ReservedQubitShift::DEFAULT_RESERVED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qising_core::{Biases, Couplings};

    #[test]
    fn test_defaults() {
        let opts = SolveOptions::default();
        assert!(opts.verbose);
        assert_eq!(opts.reserved_qubit, Some(3));
        assert_eq!(opts.mixer, MixerKind::TransverseField);

        let optimizer = opts.resolve_optimizer();
        assert_eq!(optimizer.method, "Nelder-Mead");
        assert_eq!(optimizer.options.function_tolerance, 1.0e-2);
        assert_eq!(optimizer.options.parameter_tolerance, 1.0e-2);
        assert!(!optimizer.options.verbose);
    }

    #[test]
    fn test_default_evaluation_follows_verbosity() {
        let eval = SolveOptions::new().with_samples(100).resolve_evaluation();
        assert!(eval.display.is_some());
        assert!(eval.return_all);
        assert_eq!(eval.samples, Some(100));

        let quiet = SolveOptions::new().with_verbose(false).resolve_evaluation();
        assert!(quiet.display.is_none());
    }

    #[test]
    fn test_custom_evaluation_loses_display_when_quiet() {
        let eval = EvaluationConfig::with_samples(Some(5)).with_display(|_| {});
        let opts = SolveOptions::new()
            .with_verbose(false)
            .with_evaluation(eval);
        let resolved = opts.resolve_evaluation();
        assert!(resolved.display.is_none());
        assert_eq!(resolved.samples, Some(5));
    }

    #[test]
    fn test_resolve_steps() {
        let with_h = IsingProblem::new(Biases::from(vec![1.0; 4]), Couplings::empty());
        assert_eq!(SolveOptions::new().resolve_steps(&with_h), 8);
        assert_eq!(SolveOptions::new().with_steps(1).resolve_steps(&with_h), 1);

        let no_h = IsingProblem::new(
            Biases::empty(),
            Couplings::from_raw([(vec![0, 2], 1.0)]).unwrap(),
        );
        assert_eq!(SolveOptions::new().resolve_steps(&no_h), 6);
    }

    #[test]
    fn test_validate_rejects_lonely_angles() {
        let mut opts = SolveOptions::new();
        opts.initial_betas = Some(vec![0.1]);
        assert!(matches!(opts.validate(), Err(QaoaError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        let mut opts = SolveOptions::new();
        opts.samples = Some(0);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
steps: 2
seed: 11
bias_indexing: physical
reserved_qubit: null
mixer:
  kind: one_hot
  include_final_move: true
optimizer:
  method: COBYLA
  options:
    ftol: 0.001
";
        let opts: SolveOptions = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(opts.steps, 2);
        assert_eq!(opts.seed, Some(11));
        assert_eq!(opts.bias_indexing, BiasIndexing::Physical);
        assert_eq!(opts.reserved_qubit, None);
        assert_eq!(
            opts.mixer,
            MixerKind::OneHot {
                include_final_move: true
            }
        );
        let optimizer = opts.optimizer.unwrap();
        assert_eq!(optimizer.method, "COBYLA");
        assert_eq!(optimizer.options.function_tolerance, 0.001);
        assert_eq!(optimizer.options.parameter_tolerance, 1.0e-2);
        assert!(opts.verbose);
    }

    #[test]
    fn test_missing_reserved_qubit_keeps_default() {
        let opts: SolveOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.reserved_qubit, Some(3));
    }
}
