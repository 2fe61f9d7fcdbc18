/// Longest line, in bytes, the lexer looks at. Longer lines are cut at a char boundary.
pub const MAX_LINE_LEN: usize = 255;
/// Most tokens kept per line. Extra tokens are dropped.
pub const MAX_TOKENS: usize = 20;

/// One non-empty script line split into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineTokens<'a> {
    /// 1-based line number in the script.
    pub(crate) line: usize,
    pub(crate) tokens: Vec<&'a str>,
    /// Whether tokens past [`MAX_TOKENS`] were dropped.
    pub(crate) truncated: bool,
}

/// Return `true` for blank lines and lines starting with `#` or `//`.
pub(crate) fn is_trivia(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}

fn clip_line(line: &str) -> &str {
    if line.len() <= MAX_LINE_LEN {
        return line;
    }
    let mut end = MAX_LINE_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// Split one raw line into whitespace-separated tokens.
///
/// Comments and blank lines produce no tokens. There is no quoting or escaping.
pub(crate) fn tokenize_line(line: &str) -> (Vec<&str>, bool) {
    let line = clip_line(line);
    if is_trivia(line) {
        return (Vec::new(), false);
    }
    let mut it = line.split_whitespace();
    let tokens: Vec<&str> = it.by_ref().take(MAX_TOKENS).collect();
    let truncated = it.next().is_some();
    (tokens, truncated)
}

/// Tokenize a whole script, skipping lines that yield no tokens.
pub(crate) fn lex_lines(src: &str) -> impl Iterator<Item = LineTokens<'_>> {
    src.lines().enumerate().filter_map(|(idx, raw)| {
        let (tokens, truncated) = tokenize_line(raw);
        if tokens.is_empty() {
            return None;
        }
        Some(LineTokens {
            line: idx + 1,
            tokens,
            truncated,
        })
    })
}

#[cfg(test)]
#[path = "../../tests/unit/script/lexer.rs"]
mod tests;
