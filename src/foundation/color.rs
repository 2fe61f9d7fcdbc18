use crate::foundation::core::{Color, parse_int_lenient};

/// Named colors accepted by the script language.
pub const NAMED_COLORS: [(&str, Color); 8] = [
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("white", Color::rgb(255, 255, 255)),
    ("black", Color::rgb(0, 0, 0)),
];

/// Look up an exact (case-sensitive) color name.
pub fn named_color(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

/// Parse a color token: a name from [`NAMED_COLORS`] or an `r,g,b` triple.
///
/// Parsing never fails. The triple is scanned left to right and scanning stops at the first
/// component or separator that does not match, leaving that component and the rest at `0`.
/// Every component is clamped into `[0, 255]` independently.
pub fn parse_color(text: &str) -> Color {
    if let Some(c) = named_color(text) {
        return c;
    }

    let mut ch = [0i64; 3];
    let mut rest = text;
    for (i, slot) in ch.iter_mut().enumerate() {
        if i > 0 {
            match rest.strip_prefix(',') {
                Some(r) => rest = r,
                None => break,
            }
        }
        let Some((v, r)) = scan_int(rest) else {
            break;
        };
        *slot = i64::from(v);
        rest = r;
    }
    Color::clamped(ch[0], ch[1], ch[2])
}

/// Read one optionally signed decimal integer after optional leading whitespace.
///
/// Returns the value and the remaining text, or `None` when no digit follows.
fn scan_int(text: &str) -> Option<(i32, &str)> {
    let trimmed = text.trim_start();
    let sign = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let end = sign + digits;
    Some((parse_int_lenient(&trimmed[..end]), &trimmed[end..]))
}
