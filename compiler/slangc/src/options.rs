//! Command-line option parsing shared by `run`, `eval` and `repl`.

/// Parsed flags and positional arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub positional: Vec<String>,
    pub max_call_depth: Option<usize>,
    /// Seed variables in command-line order.
    pub variables: Vec<(String, i64)>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("--max-depth expects a positive integer, got '{0}'")]
    InvalidDepth(String),
    #[error("--var expects <name>=<int> with a letters-only name, got '{0}'")]
    InvalidVar(String),
}

pub fn parse_options(args: &[String]) -> Result<Options, OptionsError> {
    let mut options = Options::default();
    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let limit = depth
                .parse::<usize>()
                .ok()
                .filter(|&limit| limit > 0)
                .ok_or_else(|| OptionsError::InvalidDepth(depth.to_string()))?;
            options.max_call_depth = Some(limit);
        } else if let Some(binding) = arg.strip_prefix("--var=") {
            options.variables.push(parse_binding(binding)?);
        } else if arg.starts_with("--") {
            return Err(OptionsError::UnknownFlag(arg.clone()));
        } else {
            options.positional.push(arg.clone());
        }
    }
    Ok(options)
}

fn parse_binding(binding: &str) -> Result<(String, i64), OptionsError> {
    let invalid = || OptionsError::InvalidVar(binding.to_string());
    let (name, value) = binding.split_once('=').ok_or_else(invalid)?;
    if !slang_eval::syntax::is_identifier(name) {
        return Err(invalid());
    }
    let value = value.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
