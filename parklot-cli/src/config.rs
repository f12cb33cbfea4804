//! Configuration resolution from CLI args

use crate::cli::{Args, DEFAULT_CAPACITY, MAX_CAPACITY};
use crate::error::CliError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--capacity` is absent
pub const CAPACITY_ENV: &str = "PARKLOT_CAPACITY";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Number of spots in the lot
    pub capacity: usize,
    /// Menu input file (None = stdin)
    pub script: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
    /// Debug logging
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args, resolving capacity and the script path
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let capacity = resolve_capacity(args.capacity, std::env::var(CAPACITY_ENV).ok())?;
        let script = args.script.as_deref().map(expand_tilde);

        Ok(Config {
            capacity,
            script,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Open the menu input source: the script file if set, stdin otherwise
    pub fn open_input(&self) -> Result<Box<dyn BufRead>, CliError> {
        match &self.script {
            Some(path) => {
                let file = File::open(path).map_err(|source| CliError::Script {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(std::io::stdin().lock())),
        }
    }
}

/// Pick the capacity: CLI flag, then environment, then the default
///
/// The flag is range-checked by clap; the environment value is checked here.
fn resolve_capacity(from_args: Option<u16>, from_env: Option<String>) -> Result<usize, CliError> {
    if let Some(capacity) = from_args {
        return Ok(capacity.into());
    }

    let Some(raw) = from_env else {
        return Ok(DEFAULT_CAPACITY.into());
    };

    let capacity: u16 = raw.trim().parse().map_err(|_| {
        CliError::Config(format!("{} must be a number, got {:?}", CAPACITY_ENV, raw))
    })?;
    if !(1..=MAX_CAPACITY).contains(&capacity) {
        return Err(CliError::Config(format!(
            "{} must be between 1 and {}, got {}",
            CAPACITY_ENV, MAX_CAPACITY, capacity
        )));
    }
    Ok(capacity.into())
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_capacity_precedence() {
        assert_eq!(resolve_capacity(Some(4), Some("12".into())).unwrap(), 4);
        assert_eq!(resolve_capacity(None, Some(" 12 ".into())).unwrap(), 12);
        assert_eq!(
            resolve_capacity(None, None).unwrap(),
            DEFAULT_CAPACITY as usize
        );
    }

    #[test]
    fn test_env_capacity_validated() {
        assert!(matches!(
            resolve_capacity(None, Some("lots".into())),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            resolve_capacity(None, Some("0".into())),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            resolve_capacity(None, Some("5000".into())),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_expand_tilde() {
        let plain = Path::new("/tmp/script.txt");
        assert_eq!(expand_tilde(plain), plain.to_path_buf());

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/menu.txt")), home.join("menu.txt"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }

    #[test]
    fn test_open_script_input() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3").unwrap();
        writeln!(file, "5").unwrap();

        let config = Config {
            capacity: 2,
            script: Some(file.path().to_path_buf()),
            quiet: true,
            verbose: false,
        };
        let lines: Vec<String> = config
            .open_input()
            .unwrap()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["3", "5"]);
    }

    #[test]
    fn test_missing_script_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let config = Config {
            capacity: 2,
            script: Some(path.clone()),
            quiet: false,
            verbose: false,
        };

        match config.open_input() {
            Err(CliError::Script { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("Expected Script error, got {other}"),
            Ok(_) => panic!("Expected Script error, got input"),
        }
    }
}
