//! Line-level lexical conventions shared by the extractor and dispatcher.

/// Keyword that opens a function definition.
pub const FUNC_KEYWORD: &str = "func";

/// Keyword that starts a print statement.
pub const PRINT_KEYWORD: &str = "print";

/// Suffix that marks a zero-argument call statement.
pub const CALL_SUFFIX: &str = "();";

/// An identifier is a non-empty run of letters.
///
/// Agrees with the expression scanner, which accepts any Unicode alphabetic
/// character.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Strip `keyword` from the start of `line` when it stands as a whole word.
///
/// `print x` and `print(x)` match `print`; `printer = 1` does not.
pub fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    match rest.chars().next() {
        Some(c) if c.is_alphabetic() => None,
        _ => Some(rest),
    }
}

/// Net change in brace depth contributed by one line.
///
/// Counts every literal `{` and `}`. This is a line-granularity heuristic,
/// not a lexer: braces are never part of any other token in this language.
pub fn brace_delta(line: &str) -> i64 {
    line.bytes().fold(0, |depth, b| match b {
        b'{' => depth + 1,
        b'}' => depth - 1,
        _ => depth,
    })
}
