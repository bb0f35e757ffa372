//! Shell-like tokenizer for config files
//!
//! Config files carry the same flag grammar as the command line: words are
//! separated by whitespace, single and double quotes group words, a `#`
//! between words starts a comment running to end of line, and a backslash
//! escapes the next character outside single quotes.

/// A quoted word was still open at end of input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct UnterminatedQuote;

pub(crate) fn tokenize(input: &str) -> Result<Vec<String>, UnterminatedQuote> {
    #[derive(PartialEq)]
    enum State {
        Normal,
        Single,
        Double,
    }

    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut state = State::Normal;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Normal => match c {
                c if c.is_whitespace() => {
                    if in_word {
                        tokens.push(std::mem::take(&mut word));
                        in_word = false;
                    }
                }
                '#' if !in_word => {
                    for c in chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        word.push(escaped);
                        in_word = true;
                    }
                }
                _ => {
                    word.push(c);
                    in_word = true;
                }
            },
            State::Single => match c {
                '\'' => state = State::Normal,
                _ => word.push(c),
            },
            State::Double => match c {
                '"' => state = State::Normal,
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        word.push(escaped);
                    }
                }
                _ => word.push(c),
            },
        }
    }

    if state != State::Normal {
        return Err(UnterminatedQuote);
    }
    if in_word {
        tokens.push(word);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        tokenize(input).unwrap()
    }

    #[test]
    fn test_whitespace_split() {
        assert_eq!(words("--pal  --turbo\n-s 2"), ["--pal", "--turbo", "-s", "2"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(words("").is_empty());
        assert!(words("   \n\t ").is_empty());
    }

    #[test]
    fn test_quotes_group_words() {
        assert_eq!(
            words("--hacks-file \"my roms/snesadvance.dat\""),
            ["--hacks-file", "my roms/snesadvance.dat"]
        );
        assert_eq!(words("'a b' c"), ["a b", "c"]);
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        assert_eq!(words("--conf='my file'"), ["--conf=my file"]);
    }

    #[test]
    fn test_comments_run_to_end_of_line() {
        assert_eq!(words("--pal # force PAL\n--turbo"), ["--pal", "--turbo"]);
    }

    #[test]
    fn test_hash_inside_word_is_literal() {
        assert_eq!(words("file#1.smc"), ["file#1.smc"]);
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(words(r"a\ b"), ["a b"]);
        assert_eq!(words(r#""a \"b\"""#), [r#"a "b""#]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(tokenize("'oops"), Err(UnterminatedQuote));
        assert_eq!(tokenize("\"oops"), Err(UnterminatedQuote));
    }
}
