//! Block extraction: splitting source text into top-level statements and
//! function definitions.
//!
//! The extractor is a two-state machine over trimmed lines. While idle,
//! empty lines are skipped, a line starting with `func` begins capturing a
//! definition, and any other line is yielded as a statement. While
//! capturing, every line is appended to the definition and the brace depth
//! is updated; when it returns to zero the definition is finished.
//!
//! Items are produced lazily, so a caller that registers each definition as
//! it arrives sees definitions and statements in source order.

use crate::errors::{
    invalid_function_body, invalid_function_declaration, unclosed_function_definition, ExecError,
};
use crate::syntax::{brace_delta, is_identifier, strip_keyword, FUNC_KEYWORD};

/// A complete function definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    /// Text strictly between the first `{` and the last `}`, trimmed.
    pub body: String,
    /// 1-based line of the header.
    pub line: usize,
}

/// One unit of source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block<'src> {
    /// A trimmed, non-empty line outside any function definition.
    Statement { line: usize, text: &'src str },
    Function(FunctionDef),
}

/// A definition being accumulated.
#[derive(Debug)]
struct Capture {
    start_line: usize,
    text: String,
    depth: i64,
}

impl Capture {
    fn new(start_line: usize) -> Self {
        Self {
            start_line,
            text: String::new(),
            depth: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
        self.depth += brace_delta(line);
    }

    /// First line of the definition.
    fn header(&self) -> &str {
        self.text.lines().next().unwrap_or_default()
    }

    /// Split the accumulated text into name and body.
    fn finish(self) -> Result<FunctionDef, ExecError> {
        self.split()
            .map_err(|err| err.in_statement(self.start_line, self.header()))
    }

    fn split(&self) -> Result<FunctionDef, ExecError> {
        let header = self.header();
        let Some(after_keyword) = strip_keyword(&self.text, FUNC_KEYWORD) else {
            return Err(invalid_function_declaration(header));
        };
        let Some(paren) = after_keyword.find('(') else {
            return Err(invalid_function_declaration(header));
        };
        let name = after_keyword[..paren].trim();
        if !is_identifier(name) {
            return Err(invalid_function_declaration(header));
        }

        let rest = &after_keyword[paren..];
        let body = match (rest.find('{'), rest.rfind('}')) {
            (Some(open), Some(close)) if open < close => rest[open + 1..close].trim(),
            _ => return Err(invalid_function_body(name)),
        };

        Ok(FunctionDef {
            name: name.to_string(),
            body: body.to_string(),
            line: self.start_line,
        })
    }

    fn unclosed(&self) -> ExecError {
        unclosed_function_definition(self.start_line).in_statement(self.start_line, self.header())
    }
}

/// Iterator over the [`Block`]s of a source text.
///
/// After an error the iterator is exhausted.
pub struct Blocks<'src> {
    lines: std::iter::Enumerate<std::str::Lines<'src>>,
    /// `None` while idle, `Some` while capturing a function definition.
    capture: Option<Capture>,
    done: bool,
}

impl<'src> Blocks<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lines: source.lines().enumerate(),
            capture: None,
            done: false,
        }
    }

    fn fail(&mut self, err: ExecError) -> Option<Result<Block<'src>, ExecError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<'src> Iterator for Blocks<'src> {
    type Item = Result<Block<'src>, ExecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let Some((index, raw)) = self.lines.next() else {
                self.done = true;
                return self
                    .capture
                    .take()
                    .map(|capture| Err(capture.unclosed()));
            };
            let line = raw.trim();
            let number = index + 1;

            if self.capture.is_none() {
                if line.is_empty() {
                    continue;
                }
                if strip_keyword(line, FUNC_KEYWORD).is_none() {
                    return Some(Ok(Block::Statement { line: number, text: line }));
                }
                self.capture = Some(Capture::new(number));
            }

            if let Some(capture) = self.capture.as_mut() {
                capture.push_line(line);
                if capture.depth == 0 {
                    let finished = self.capture.take().map(Capture::finish)?;
                    return match finished {
                        Ok(def) => Some(Ok(Block::Function(def))),
                        Err(err) => self.fail(err),
                    };
                }
            }
        }
    }
}
