use edu16::constants::{LINE_MAX_CONTENT_BYTES, MAX_TOKENS};

/// Splits one source line into at most `MAX_TOKENS` tokens, delimited by
/// space, tab or comma. A token starting with `#` - the first or any
/// later one - truncates acquisition at that point, matching the lexer's
/// line-comment contract.
///
/// Returns an empty vector for a blank line, a whitespace-only line, or a
/// line whose first token is a comment.
pub fn tokenize(line: &str) -> Vec<String> {
    let content = truncate_to_content_limit(line);

    let mut tokens = Vec::with_capacity(MAX_TOKENS);
    for raw in content.split(|c| c == ' ' || c == '\t' || c == ',') {
        if raw.is_empty() {
            continue;
        }
        if raw.starts_with('#') {
            break;
        }
        tokens.push(raw.to_string());
        if tokens.len() >= MAX_TOKENS {
            break;
        }
    }
    tokens
}

fn truncate_to_content_limit(line: &str) -> &str {
    let trimmed = line.trim_end_matches(|c| c == '\r' || c == '\n');
    if trimmed.len() <= LINE_MAX_CONTENT_BYTES {
        return trimmed;
    }
    let mut end = LINE_MAX_CONTENT_BYTES;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    &trimmed[..end]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_on_space_tab_and_comma() {
        assert_eq!(tokenize("add r0, r1\tr2"), vec!["add", "r0", "r1", "r2"]);
    }

    #[test]
    fn blank_line_yields_no_tokens() {
        assert!(tokenize("   \r\n").is_empty());
    }

    #[test]
    fn leading_hash_is_a_whole_line_comment() {
        assert!(tokenize("# a comment").is_empty());
    }

    #[test]
    fn mid_line_hash_truncates_remaining_tokens() {
        assert_eq!(tokenize("add r0 r1 # r2"), vec!["add", "r0", "r1"]);
    }

    #[test]
    fn caps_at_five_tokens() {
        assert_eq!(tokenize("a b c d e f g").len(), MAX_TOKENS);
    }

    #[test]
    fn content_past_63_bytes_is_discarded() {
        let line = format!("mov r0 r1 {}", "x".repeat(100));
        let tokens = tokenize(&line);
        assert!(line.len() > LINE_MAX_CONTENT_BYTES);
        assert!(tokens.iter().all(|t| t.len() < 100));
    }
}
