//! Command-line arguments of the headless runner.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::MAX_LEVEL;

pub const USAGE: &str = "\
usage: shelf-match [--config FILE] [--level N] [--seed N] [--levels N] [--json] [--verbose]

  --config FILE   TOML file with game tunables
  --level N       level to start at (1..=5, default 1)
  --seed N        random seed, overrides the config file
  --levels N      number of levels to play (default 1)
  --json          print a board snapshot as JSON after each level
  --verbose       debug logging (RUST_LOG takes precedence)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub level: u8,
    pub seed: Option<u32>,
    pub levels: u32,
    pub json: bool,
    pub verbose: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config: None,
            level: 1,
            seed: None,
            levels: 1,
            json: false,
            verbose: false,
        }
    }
}

/// Parse runner arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_run_args(args: &[String]) -> Result<Option<RunArgs>> {
    let mut parsed = RunArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let v = value(args, i, "--config")?;
                parsed.config = Some(PathBuf::from(v));
            }
            "--level" => {
                i += 1;
                let v = value(args, i, "--level")?;
                let level = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --level value: {}", v))?;
                if !(1..=MAX_LEVEL).contains(&level) {
                    return Err(anyhow!("--level must be within 1..={}, got {}", MAX_LEVEL, level));
                }
                parsed.level = level;
            }
            "--seed" => {
                i += 1;
                let v = value(args, i, "--seed")?;
                parsed.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--levels" => {
                i += 1;
                let v = value(args, i, "--levels")?;
                parsed.levels = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --levels value: {}", v))?;
            }
            "--json" => parsed.json = true,
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" => return Ok(None),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(parsed))
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_run_args(&[]).unwrap().unwrap();
        assert_eq!(parsed, RunArgs::default());
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse_run_args(&args(&[
            "--config", "game.toml", "--level", "3", "--seed", "42", "--levels", "4", "--json",
            "--verbose",
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(parsed.config, Some(PathBuf::from("game.toml")));
        assert_eq!(parsed.level, 3);
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.levels, 4);
        assert!(parsed.json);
        assert!(parsed.verbose);
    }

    #[test]
    fn test_help() {
        assert!(parse_run_args(&args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_run_args(&args(&["--level"])).is_err());
        assert!(parse_run_args(&args(&["--level", "0"])).is_err());
        assert!(parse_run_args(&args(&["--level", "6"])).is_err());
        assert!(parse_run_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_run_args(&args(&["--bogus"])).is_err());
    }
}
