use std::collections::TryReserveError;

use serde::Serialize;

/// Instruction kinds recognized by the script language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionKind {
    /// `canvas <width> <height>`
    Canvas,
    /// `circle <name> <cx> <cy> <radius> <color>`
    Circle,
    /// `rectangle|rect <name> <x> <y> <width> <height> <color>`
    Rectangle,
    /// `triangle <name> <x1> <y1> <x2> <y2> <x3> <y3> <color>`
    Triangle,
    /// `group <name>`
    GroupStart,
    /// `end`
    GroupEnd,
    /// `render`
    Render,
}

impl InstructionKind {
    /// Resolve a line's leading keyword. Unknown keywords yield `None`.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "canvas" => Self::Canvas,
            "circle" => Self::Circle,
            "rectangle" | "rect" => Self::Rectangle,
            "triangle" => Self::Triangle,
            "group" => Self::GroupStart,
            "end" => Self::GroupEnd,
            "render" => Self::Render,
            _ => return None,
        })
    }

    /// Fewest parameters (keyword included) needed for the instruction to take effect.
    pub fn min_params(self) -> usize {
        match self {
            Self::Canvas => 3,
            Self::Circle => 6,
            Self::Rectangle => 7,
            Self::Triangle => 9,
            Self::GroupStart => 2,
            Self::GroupEnd | Self::Render => 1,
        }
    }
}

/// One parsed script line.
///
/// `params` holds every token verbatim, keyword at index 0. Coercion happens at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Instruction kind selected by the keyword.
    pub kind: InstructionKind,
    /// Raw tokens of the line.
    pub params: Vec<String>,
    /// 1-based source line.
    pub line: usize,
}

impl Instruction {
    /// Token at `idx`, if present.
    pub fn param(&self, idx: usize) -> Option<&str> {
        self.params.get(idx).map(String::as_str)
    }

    /// Keyword as written in the script (`rect` stays `rect`).
    pub fn keyword(&self) -> &str {
        self.param(0).unwrap_or_default()
    }
}

/// Ordered, append-only instruction sequence. Program order is execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Return `true` when the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Iterate instructions in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub(crate) fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.instructions.truncate(len);
    }

    pub(crate) fn try_push(&mut self, ins: Instruction) -> Result<(), TryReserveError> {
        self.instructions.try_reserve(1)?;
        self.instructions.push(ins);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
