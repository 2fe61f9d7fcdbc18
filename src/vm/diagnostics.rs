use std::fmt;

use serde::Serialize;

use crate::foundation::core::Canvas;

/// A recovered, non-fatal condition observed while executing a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Too few parameters; the instruction was skipped.
    MalformedInstruction {
        /// 1-based script line.
        line: usize,
        /// Keyword as written.
        keyword: String,
        /// Parameters required, keyword included.
        expected: usize,
        /// Parameters present, keyword included.
        found: usize,
    },
    /// `end` with no open group; ignored.
    UnmatchedGroupEnd {
        /// 1-based script line.
        line: usize,
    },
    /// `canvas` asked for dimensions other than the session's; the buffer is unchanged.
    CanvasMismatch {
        /// 1-based script line.
        line: usize,
        /// Width requested by the script.
        requested_width: i32,
        /// Height requested by the script.
        requested_height: i32,
        /// Dimensions actually in use.
        actual: Canvas,
    },
    /// Group still open when the program ended.
    UnclosedGroup {
        /// Group name.
        name: String,
        /// Nesting depth, 1 for the outermost open group.
        depth: usize,
    },
}

impl Diagnostic {
    /// Whether the condition is surfaced as a warning (as opposed to a silent skip).
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::MalformedInstruction { .. })
    }

    /// Script line the condition refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedInstruction { line, .. }
            | Self::UnmatchedGroupEnd { line }
            | Self::CanvasMismatch { line, .. } => Some(*line),
            Self::UnclosedGroup { .. } => None,
        }
    }

    pub(crate) fn log(&self) {
        if self.is_warning() {
            tracing::warn!("{self}");
        } else {
            tracing::debug!("{self}");
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInstruction {
                line,
                keyword,
                expected,
                found,
            } => write!(
                f,
                "line {line}: skipping '{keyword}' (needs {expected} parameters, found {found})"
            ),
            Self::UnmatchedGroupEnd { line } => write!(f, "line {line}: unmatched group end"),
            Self::CanvasMismatch {
                line,
                requested_width,
                requested_height,
                actual,
            } => write!(
                f,
                "line {line}: canvas {requested_width}x{requested_height} ignored, \
                 keeping {}x{}",
                actual.width, actual.height
            ),
            Self::UnclosedGroup { name, depth } => {
                write!(f, "group '{name}' (depth {depth}) was never closed")
            }
        }
    }
}
