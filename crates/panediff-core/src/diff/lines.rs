//! Line and word tokenization.

/// Split a document into lines.
///
/// Splits on `\n`. A final empty field (the document ended with a newline)
/// is dropped, so `"a\nb\n"` has two lines, not three. Interior empty lines
/// are kept and the empty document has no lines. `\r` is ordinary content.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Split a document into lines that keep their `\n` terminator.
///
/// Yields exactly as many tokens as [`split_lines`]; only the last token can
/// lack a terminator. Concatenating the tokens gives back `text`.
pub fn line_tokens(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Strip a single trailing `\n` from a line token.
pub(crate) fn strip_terminator(token: &str) -> &str {
    token.strip_suffix('\n').unwrap_or(token)
}

/// Split a line into word tokens.
///
/// Tokens alternate between maximal runs of non-whitespace and maximal runs
/// of whitespace, so every character belongs to exactly one token and
/// concatenating the tokens gives back `line`.
pub fn word_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in line.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(&line[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty_document() {
        assert!(split_lines("").is_empty());
        assert!(line_tokens("").is_empty());
    }

    #[test]
    fn test_split_drops_single_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_keeps_interior_and_extra_trailing_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_leaves_carriage_returns() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a\r", "b\r"]);
    }

    #[test]
    fn test_line_tokens_match_split_lines() {
        for text in ["", "\n", "a", "a\n", "a\n\n", "\n\na", "x\ny\nz"] {
            let tokens = line_tokens(text);
            let stripped: Vec<&str> = tokens.iter().map(|t| strip_terminator(t)).collect();
            assert_eq!(stripped, split_lines(text), "input {:?}", text);
            assert_eq!(tokens.concat(), text);
        }
    }

    #[test]
    fn test_word_tokens_alternate() {
        assert_eq!(word_tokens("hello world"), vec!["hello", " ", "world"]);
        assert_eq!(
            word_tokens("  lead  and trail\t"),
            vec!["  ", "lead", "  ", "and", " ", "trail", "\t"]
        );
        assert!(word_tokens("").is_empty());
    }

    #[test]
    fn test_word_tokens_multibyte() {
        let line = "héllo\u{3000}wörld";
        let tokens = word_tokens(line);
        assert_eq!(tokens, vec!["héllo", "\u{3000}", "wörld"]);
        assert_eq!(tokens.concat(), line);
    }

    #[test]
    fn test_word_tokens_punctuation_stays_in_word() {
        assert_eq!(word_tokens("fn(a, b)"), vec!["fn(a,", " ", "b)"]);
    }
}
