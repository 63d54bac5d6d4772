//! Command-line argument parsing for the termfolio binary.

use std::path::PathBuf;


/// Parsed command-line options.
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    /// YAML file overriding the built-in portfolio content.
    pub content: Option<PathBuf>,
    /// Override for the CV document path.
    pub cv: Option<PathBuf>,
    /// Built-in theme name.
    pub theme: Option<String>,
    /// Log destination; logging is off without it.
    pub log_file: Option<PathBuf>,
    pub show_help: bool,
    pub show_version: bool,
}


/// Parse CLI arguments (without the program name).
pub fn parse_args(args: &[&str]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "--content" => {
                i += 1;
                parsed.content = Some(PathBuf::from(take_arg(args, i, "--content")?));
            }
            "--cv" => {
                i += 1;
                parsed.cv = Some(PathBuf::from(take_arg(args, i, "--cv")?));
            }
            "--theme" => {
                i += 1;
                parsed.theme = Some(take_arg(args, i, "--theme")?);
            }
            "--log-file" => {
                i += 1;
                parsed.log_file = Some(PathBuf::from(take_arg(args, i, "--log-file")?));
            }
            "help" | "--help" | "-h" => parsed.show_help = true,
            "version" | "--version" | "-V" => parsed.show_version = true,
            other => {
                return Err(format!(
                    "Unknown argument: '{}'. Run 'termfolio help' for usage.",
                    other
                ))
            }
        }
        i += 1;
    }
    Ok(parsed)
}

/// Fetch the value following a flag, or report which flag is missing one.
fn take_arg(args: &[&str], i: usize, flag: &str) -> Result<String, String> {
    args.get(i)
        .map(|s| s.to_string())
        .ok_or_else(|| format!("Missing value for {}", flag))
}

/// Usage text for `termfolio help`.
pub fn usage() -> String {
    "\
termfolio — a portfolio you talk to like a shell

Usage: termfolio [options]

Options:
  --content <file.yaml>   Load portfolio content from a YAML file
  --cv <path>             Override the CV document path
  --theme <dark|light>    Pick a built-in color theme (default: dark)
  --log-file <path>       Append tracing output to a file
  -h, --help              Show this help
  -V, --version           Show the version

Inside the terminal, type 'help' to list the available commands."
        .to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_all_defaults() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed, CliArgs::default());
    }

    #[test]
    fn flags_with_values() {
        let parsed =
            parse_args(&["--content", "x.yaml", "--theme", "light", "--cv", "cv.pdf"]).unwrap();
        assert_eq!(parsed.content, Some(PathBuf::from("x.yaml")));
        assert_eq!(parsed.theme.as_deref(), Some("light"));
        assert_eq!(parsed.cv, Some(PathBuf::from("cv.pdf")));
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse_args(&["--content"]).unwrap_err();
        assert!(err.contains("--content"));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let err = parse_args(&["--bogus"]).unwrap_err();
        assert!(err.contains("--bogus"));
    }

    #[test]
    fn help_and_version_spellings() {
        assert!(parse_args(&["help"]).unwrap().show_help);
        assert!(parse_args(&["-h"]).unwrap().show_help);
        assert!(parse_args(&["version"]).unwrap().show_version);
        assert!(parse_args(&["-V"]).unwrap().show_version);
    }

    #[test]
    fn log_file_flag() {
        let parsed = parse_args(&["--log-file", "/tmp/t.log"]).unwrap();
        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/t.log")));
    }
}
