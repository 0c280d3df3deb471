/// Resolves a register token: `r0`..`r9`/`ra`..`rf` (case-insensitive),
/// or one of the named aliases. Returns `None` for anything else - the
/// caller decides how that failure is reported.
pub fn parse_register(token: &str) -> Option<u8> {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "pc" => return Some(15),
        "out0" | "output0" => return Some(13),
        "out1" | "output1" => return Some(14),
        "in" | "input" => return Some(6),
        _ => {}
    }

    let mut chars = lower.chars();
    if chars.next()? != 'r' {
        return None;
    }
    let digit = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    digit.to_digit(16).map(|d| d as u8)
}

/// Parses a numeric literal: `x`/`X` prefix selects hex, `b`/`B` selects
/// binary, anything else is plain decimal. Returned as a signed value so
/// callers can reject negatives uniformly during range checking.
pub fn parse_literal(token: &str) -> Option<i64> {
    let mut chars = token.chars();
    match chars.next()? {
        'x' | 'X' => i64::from_str_radix(chars.as_str(), 16).ok(),
        'b' | 'B' => Some(parse_binary(chars.as_str())),
        _ => token.parse::<i64>().ok(),
    }
}

fn parse_binary(digits: &str) -> i64 {
    let mut value: i64 = 0;
    for c in digits.chars() {
        value <<= 1;
        if c == '1' {
            value |= 1;
        }
    }
    value
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolves_decimal_and_hex_register_forms() {
        assert_eq!(parse_register("r0"), Some(0));
        assert_eq!(parse_register("R9"), Some(9));
        assert_eq!(parse_register("ra"), Some(10));
        assert_eq!(parse_register("RF"), Some(15));
    }

    #[test]
    fn resolves_aliases_case_insensitively() {
        assert_eq!(parse_register("PC"), Some(15));
        assert_eq!(parse_register("Out0"), Some(13));
        assert_eq!(parse_register("output1"), Some(14));
        assert_eq!(parse_register("IN"), Some(6));
        assert_eq!(parse_register("input"), Some(6));
    }

    #[test]
    fn rejects_malformed_register_tokens() {
        assert_eq!(parse_register("r"), None);
        assert_eq!(parse_register("r10"), None);
        assert_eq!(parse_register("x0"), None);
    }

    #[test]
    fn parses_hex_binary_and_decimal_literals() {
        assert_eq!(parse_literal("x0A"), Some(10));
        assert_eq!(parse_literal("X0a"), Some(10));
        assert_eq!(parse_literal("b1010"), Some(10));
        assert_eq!(parse_literal("10"), Some(10));
    }

    #[test]
    fn negative_decimal_literals_parse_but_are_rejected_by_range_checks() {
        assert_eq!(parse_literal("-1"), Some(-1));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(parse_literal("xZZ"), None);
        assert_eq!(parse_literal("five"), None);
    }
}
