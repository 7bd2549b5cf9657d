//! Tokenizer for the `model(v1, v2, ...)` function syntax.
//!
//! Every color model's canonical text form is a keyword followed by a
//! parenthesized, comma-separated list of numbers. Whitespace is allowed
//! around the keyword, the parentheses, and each component. Components marked
//! as percentages may carry a single trailing `%`; on other components a `%`
//! is a syntax error.

/// Whether a component may carry a trailing `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Number,
    Percent,
}

/// Parses `input` as `keyword(c0, c1, ...)` with exactly `N` components.
///
/// The keyword is matched case-insensitively. Returns `None` on any syntax
/// problem, a non-numeric or non-finite component, or a component count
/// other than `N`. Range checking is left to the caller.
pub(crate) fn parse_function<const N: usize>(
    input: &str,
    keyword: &str,
    units: [Unit; N],
) -> Option<[f64; N]> {
    let s = input.trim();
    let open = s.find('(')?;
    if !s[..open].trim().eq_ignore_ascii_case(keyword) {
        return None;
    }
    let body = s[open + 1..].strip_suffix(')')?;

    let mut out = [0.0; N];
    let mut parts = body.split(',');
    for (slot, unit) in out.iter_mut().zip(units) {
        *slot = parse_component(parts.next()?, unit)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

fn parse_component(raw: &str, unit: Unit) -> Option<f64> {
    let mut token = raw.trim();
    if unit == Unit::Percent {
        if let Some(stripped) = token.strip_suffix('%') {
            token = stripped.trim_end();
        }
    }
    // `f64::from_str` accepts "inf" and "NaN"; only plain decimals are colors.
    if token.is_empty()
        || !token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+'))
    {
        return None;
    }
    let value: f64 = token.parse().ok()?;
    value.is_finite().then_some(value)
}
