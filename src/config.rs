use anyhow::{bail, Context, Result};

pub const INPUT_ENV: &str = "HEAPSORT_INPUT";

/// Sequences the demo prints when nothing is supplied.
pub const BUILTIN_EXAMPLES: [&[i64]; 4] = [
    &[4, 10, 3, 5, 1],
    &[1, 2, 98, 4, 5],
    &[5, 4, 3, 2, 1],
    &[2, 2, 2, 1, 3, 3, 0, 5, 5],
];

#[derive(Debug, PartialEq)]
pub struct Config {
    pub sequences: Vec<Vec<i64>>,
}

impl Config {
    /// Command line first, then `HEAPSORT_INPUT`, then the built-in examples.
    pub fn load(args: &[String]) -> Result<Self> {
        if args.len() > 1 {
            return Self::from_args(args);
        }
        if let Some(config) = Self::from_env()? {
            return Ok(config);
        }
        Ok(Self::builtin())
    }

    /// `args[0]` is the program name. Without values the built-in examples are used.
    pub fn from_args(args: &[String]) -> Result<Self> {
        if args.len() < 2 {
            return Ok(Self::builtin());
        }
        let sequence = args[1..]
            .iter()
            .map(|arg| parse_value(arg))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sequences: vec![sequence] })
    }

    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(INPUT_ENV) {
            Ok(input) => Self::from_input(&input)
                .with_context(|| format!("invalid {}", INPUT_ENV))
                .map(Some),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(err).with_context(|| format!("unable to read {}", INPUT_ENV)),
        }
    }

    /// Integers separated by commas and/or whitespace.
    pub fn from_input(input: &str) -> Result<Self> {
        let sequence = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_value)
            .collect::<Result<Vec<_>>>()?;
        if sequence.is_empty() {
            bail!("no values given");
        }
        Ok(Self { sequences: vec![sequence] })
    }

    pub fn builtin() -> Self {
        Self {
            sequences: BUILTIN_EXAMPLES.iter().map(|seq| seq.to_vec()).collect(),
        }
    }
}

fn parse_value(token: &str) -> Result<i64> {
    token
        .trim()
        .parse::<i64>()
        .with_context(|| format!("'{}' is not an integer", token))
}
