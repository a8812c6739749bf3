use std::fmt;
use std::str::FromStr;

/// Errors reported by the LCSk engine.
///
/// Only configuration problems are reported here. Broken internal invariants
/// panic instead, since the sweep cannot be resumed from them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LcskError {
    #[error("block length k must be at least 1")]
    InvalidK,
    #[error("mode {0} is not implemented")]
    Unsupported(Mode),
    #[error("unknown mode `{0}`, expected one of LCSKPP, MS, MSA")]
    UnknownMode(String),
}

/// How many engine passes are run over the match set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// A single pass, one optimal chain.
    #[default]
    SingleStart,
    /// Repeated passes over halved match sets, merging every chain found.
    MultistartLogarithmic,
    /// Heuristic restarts. Accepted by the configuration but rejected at run time.
    MultistartAggressive,
}

impl Mode {
    /// The spelling used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::SingleStart => "LCSKPP",
            Mode::MultistartLogarithmic => "MS",
            Mode::MultistartAggressive => "MSA",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = LcskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Mode::SingleStart,
            Mode::MultistartLogarithmic,
            Mode::MultistartAggressive,
        ]
        .into_iter()
        .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| LcskError::UnknownMode(s.to_string()))
    }
}

/// Parameters of one LCSk/LCSk++ computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcskParams {
    /// Length of an exact match block.
    pub k: usize,
    /// LCSk++ scoring when true, plain LCSk otherwise.
    pub lcsk_plus: bool,
    /// Also match against the second sequence reversed.
    pub reverse: bool,
    pub mode: Mode,
    /// Number of runs in [`Mode::MultistartAggressive`], ignored elsewhere.
    pub aggressive_runs: usize,
}

impl Default for LcskParams {
    fn default() -> Self {
        LcskParams {
            k: 3,
            lcsk_plus: true,
            reverse: false,
            mode: Mode::SingleStart,
            aggressive_runs: 3,
        }
    }
}

impl LcskParams {
    pub fn new(k: usize) -> Self {
        LcskParams {
            k,
            ..Default::default()
        }
    }

    /// Rejects configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), LcskError> {
        if self.k == 0 {
            return Err(LcskError::InvalidK);
        }
        if self.mode == Mode::MultistartAggressive {
            return Err(LcskError::Unsupported(self.mode));
        }
        Ok(())
    }
}
