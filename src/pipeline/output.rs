//! Report sink selection and writing.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Where a rendered report goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// A path selects a file sink; no path means stdout.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to an interactive terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Color is on unless the flag or the `NO_COLOR` convention disables it.
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Send a rendered report to its sink.
///
/// # Errors
///
/// Returns an error when a file sink cannot be written.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => println!("{content}"),
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing report to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {:?}", path);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_selection() {
        assert!(matches!(
            OutputTarget::from_option(None),
            OutputTarget::Stdout
        ));

        let path = PathBuf::from("/tmp/report.json");
        match OutputTarget::from_option(Some(path.clone())) {
            OutputTarget::File(p) => assert_eq!(p, path),
            OutputTarget::Stdout => panic!("Expected File variant"),
        }
    }

    #[test]
    fn test_file_target_is_not_terminal() {
        let target = OutputTarget::File(PathBuf::from("/tmp/report.json"));
        assert!(!target.is_terminal());
    }

    #[test]
    fn test_color_flag_wins() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_color_follows_no_color_env() {
        let expected = std::env::var("NO_COLOR").is_err();
        assert_eq!(should_use_color(false), expected);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let target = OutputTarget::File(path.clone());

        write_output("report body", &target, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "report body");
    }
}
