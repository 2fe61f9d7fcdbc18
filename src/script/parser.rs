use crate::foundation::error::{VmError, VmResult};
use crate::script::ast::{Instruction, InstructionKind, Program};
use crate::script::lexer::{LineTokens, MAX_TOKENS, lex_lines};

/// Parse script text into a [`Program`].
///
/// Lines whose first token is not a known keyword produce no instruction. The only failure is
/// resource exhaustion while building the program.
#[tracing::instrument(skip(src), fields(bytes = src.len()))]
pub fn parse_script(src: &str) -> VmResult<Program> {
    let mut program = Program::new();

    for lt in lex_lines(src) {
        let Some(kind) = InstructionKind::from_keyword(lt.tokens[0]) else {
            tracing::debug!(line = lt.line, keyword = lt.tokens[0], "skipping unknown keyword");
            continue;
        };
        if lt.truncated {
            tracing::debug!(line = lt.line, max = MAX_TOKENS, "extra tokens dropped");
        }

        let ins = build_instruction(kind, &lt)?;
        program
            .try_push(ins)
            .map_err(|e| VmError::parse(lt.line, format!("append instruction: {e}")))?;
    }

    tracing::debug!(instructions = program.len(), "parsed script");
    Ok(program)
}

fn build_instruction(kind: InstructionKind, lt: &LineTokens<'_>) -> VmResult<Instruction> {
    let mut params: Vec<String> = Vec::new();
    params
        .try_reserve_exact(lt.tokens.len())
        .map_err(|e| VmError::parse(lt.line, format!("reserve parameters: {e}")))?;

    for tok in &lt.tokens {
        let mut s = String::new();
        s.try_reserve_exact(tok.len())
            .map_err(|e| VmError::parse(lt.line, format!("copy parameter '{tok}': {e}")))?;
        s.push_str(tok);
        params.push(s);
    }

    Ok(Instruction {
        kind,
        params,
        line: lt.line,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/script/parser.rs"]
mod tests;
