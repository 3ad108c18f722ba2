use std::fmt;

/// Errors raised at the simulator boundary.
///
/// Numeric oddities (negative revenue, zero denominators, extreme levers) are
/// never errors; only malformed requests are.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Monte Carlo requested with a non-positive iteration count
    InvalidIterations(usize),
    /// Unrecognised scenario preset or lever name
    UnknownScenario(String),
    /// An operation needed a base scenario but none was set
    EmptyDataset,
    /// A named scenario was not found in the simulator's registry
    ScenarioNotFound(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidIterations(n) => {
                write!(f, "monte carlo iterations must be positive (got {n})")
            }
            SimulationError::UnknownScenario(name) => write!(f, "unknown scenario '{name}'"),
            SimulationError::EmptyDataset => write!(f, "no base scenario has been set"),
            SimulationError::ScenarioNotFound(name) => {
                write!(f, "scenario '{name}' has not been stored")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
