/// Convenience result type used across shapevm.
pub type VmResult<T> = Result<T, VmError>;

/// Top-level error taxonomy for fatal conditions.
///
/// Recovered conditions (skipped lines, unmatched `end`, canvas mismatch) are not errors; they are
/// reported as [`crate::Diagnostic`] values and the run continues.
#[derive(thiserror::Error, Debug)]
pub enum VmError {
    /// Resource exhaustion while tokenizing or building the program.
    #[error("parse failure at line {line}: {message}")]
    Parse {
        /// 1-based script line being parsed.
        line: usize,
        /// Human-readable cause.
        message: String,
    },

    /// Resource exhaustion while constructing a scene component.
    #[error("allocation failure: {0}")]
    Allocation(String),

    /// Resource exhaustion while wiring a component into the scene graph.
    #[error("attach failure at line {line}: {message}")]
    Attach {
        /// 1-based script line of the offending instruction.
        line: usize,
        /// Human-readable cause.
        message: String,
    },

    /// The output artifact could not be produced.
    #[error("emit failure: {0}")]
    Emit(String),

    /// Invalid session configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VmError {
    /// Build a [`VmError::Parse`] value.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Build a [`VmError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`VmError::Attach`] value.
    pub fn attach(line: usize, msg: impl Into<String>) -> Self {
        Self::Attach {
            line,
            message: msg.into(),
        }
    }

    /// Build a [`VmError::Emit`] value.
    pub fn emit(msg: impl Into<String>) -> Self {
        Self::Emit(msg.into())
    }

    /// Build a [`VmError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Script line this error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } | Self::Attach { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
