//! Comment removal for JSON-with-comments manifests.
//!
//! Rush manifests allow `//` line comments and `/* */` block comments. This
//! module strips them with a small tokenizer that tracks whether it is inside a
//! double-quoted string, so comment markers inside string values (URLs, globs)
//! survive untouched.

/// Tokenizer state while scanning manifest text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any string literal.
    Code,
    /// Inside a double-quoted string.
    Str,
    /// Inside a string, immediately after a backslash.
    Escape,
}

/// Remove `//` and `/* */` comments from JSON-with-comments text.
///
/// - Line comments are dropped up to (not including) the newline.
/// - Block comments are replaced by a single space so adjacent tokens stay apart.
///   An unterminated block comment swallows the rest of the input.
/// - Newlines outside comments are preserved, keeping parse error line numbers
///   meaningful.
///
/// Stripping is idempotent: stripping already-stripped text returns it unchanged.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match state {
            State::Escape => {
                out.push(c);
                state = State::Str;
            }
            State::Str => {
                out.push(c);
                match c {
                    '\\' => state = State::Escape,
                    '"' => state = State::Code,
                    _ => {}
                }
            }
            State::Code => match (c, chars.peek().map(|&(_, next)| next)) {
                ('"', _) => {
                    out.push(c);
                    state = State::Str;
                }
                ('/', Some('/')) => {
                    while chars.next_if(|&(_, ch)| ch != '\n').is_some() {}
                }
                ('/', Some('*')) => {
                    let body_start = i + 2;
                    match input[body_start..].find("*/") {
                        Some(end) => {
                            let resume = body_start + end + 2;
                            while chars.next_if(|&(j, _)| j < resume).is_some() {}
                            out.push(' ');
                        }
                        None => break,
                    }
                }
                _ => out.push(c),
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_strips_line_comment() {
        let input = "{\n  // projects below\n  \"a\": 1 // trailing\n}";
        check!(strip_comments(input) == "{\n  \n  \"a\": 1 \n}");
    }

    #[test]
    fn test_block_comment_becomes_space() {
        let input = "{\"a\":/* one\n two */1}";
        check!(strip_comments(input) == "{\"a\": 1}");
    }

    #[test]
    fn test_markers_inside_strings_are_kept() {
        let input = r#"{"url": "https://example.com/*x*/", "glob": "a//b"}"#;
        check!(strip_comments(input) == input);
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let input = r#"{"s": "say \"// hi\""} // gone"#;
        check!(strip_comments(input) == r#"{"s": "say \"// hi\""} "#);
    }

    #[test]
    fn test_unterminated_block_comment_drops_rest() {
        check!(strip_comments("[1, /* never closed 2]") == "[1, ");
    }

    #[test]
    fn test_line_comment_marker_inside_block_comment() {
        check!(strip_comments("1 /* a // b */ 2") == "1   2");
    }

    #[test]
    fn test_idempotent() {
        let input = "{\n /* header */ \"x\": \"//y\", // c\n \"z\": [1,/**/2]\n}\n";
        let once = strip_comments(input);
        check!(strip_comments(&once) == once);
    }

    #[test]
    fn test_preserves_multibyte_text() {
        let input = "{\"name\": \"文档\" /* 注释 */}";
        check!(strip_comments(input) == "{\"name\": \"文档\"  }");
    }
}
