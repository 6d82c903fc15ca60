//! CLI argument parsing for coverkit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Coverkit: assemble cover letters and résumé summaries from template schemas.
///
/// Schemas live in a formats directory as YAML or JSON fragment trees.
/// Contact details come from an environment file. Documents are printed to
/// the console or written as PDFs into the output directory.
#[derive(Parser, Debug)]
#[command(name = "coverkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for formats, environment file and output (default: current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Configuration file (default: <DIR>/coverkit.yaml if present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for coverkit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a document.
    ///
    /// Values not passed as flags are asked for interactively unless
    /// `--no-input` is set.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Scaffold the default formats, example environment file and configuration.
    ///
    /// Existing files are left alone unless `--force` is given.
    Init(InitArgs),

    /// List the role abbreviations the normalizer understands.
    Roles,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Document type: cover letter, long, medium or short.
    #[arg(value_name = "TYPE", num_args = 0..)]
    pub doc_type: Vec<String>,

    /// Company the document is addressed to.
    #[arg(long)]
    pub company: Option<String>,

    /// Hiring manager named in the salutation.
    #[arg(long)]
    pub hiring_manager: Option<String>,

    /// Role applied for; abbreviations such as `sse` are expanded.
    #[arg(long)]
    pub role: Option<String>,

    /// Where the position was found.
    #[arg(long)]
    pub platform: Option<String>,

    /// Whether the company is a startup (yes/no).
    #[arg(long, value_name = "ANSWER")]
    pub startup: Option<String>,

    /// Text printed between body blocks.
    #[arg(long)]
    pub separator: Option<String>,

    /// Write a PDF into the output directory.
    #[arg(long, conflicts_with = "console")]
    pub pdf: bool,

    /// Print the document to the console.
    #[arg(long)]
    pub console: bool,

    /// Never prompt; unset values take their defaults.
    #[arg(long)]
    pub no_input: bool,

    /// Date to stamp the document with (default: today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

impl GenerateArgs {
    /// The requested output destination, if one was given as a flag.
    pub fn destination_flag(&self) -> Option<bool> {
        if self.pdf {
            Some(true)
        } else if self.console {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the `init` command.
#[derive(Parser, Debug, Default)]
pub struct InitArgs {
    /// Overwrite files that already exist.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["coverkit", "init"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert!(!args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::try_parse_from(["coverkit", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Command::Init(InitArgs { force: true })));
    }

    #[test]
    fn parse_roles() {
        let cli = Cli::try_parse_from(["coverkit", "roles"]).unwrap();
        assert!(matches!(cli.command, Command::Roles));
    }

    #[test]
    fn parse_generate_minimal() {
        let cli = Cli::try_parse_from(["coverkit", "generate"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert!(args.doc_type.is_empty());
            assert_eq!(args.company, None);
            assert_eq!(args.destination_flag(), None);
            assert!(!args.no_input);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_multi_word_type() {
        let cli = Cli::try_parse_from(["coverkit", "generate", "cover", "letter"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.doc_type, vec!["cover", "letter"]);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "coverkit",
            "--dir",
            "/tmp/jobs",
            "-vv",
            "generate",
            "long",
            "--company",
            "Acme Corporation",
            "--role",
            "sse",
            "--startup",
            "yes",
            "--separator",
            "***",
            "--pdf",
            "--no-input",
            "--date",
            "2024-03-01",
        ])
        .unwrap();

        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/jobs")));
        assert_eq!(cli.verbose, 2);
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.doc_type, vec!["long"]);
            assert_eq!(args.company.as_deref(), Some("Acme Corporation"));
            assert_eq!(args.role.as_deref(), Some("sse"));
            assert_eq!(args.startup.as_deref(), Some("yes"));
            assert_eq!(args.separator.as_deref(), Some("***"));
            assert_eq!(args.destination_flag(), Some(true));
            assert!(args.no_input);
            assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_console_flag() {
        let cli = Cli::try_parse_from(["coverkit", "generate", "--console"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.destination_flag(), Some(false));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn pdf_and_console_conflict() {
        let result = Cli::try_parse_from(["coverkit", "generate", "--pdf", "--console"]);
        assert!(result.is_err());
    }

    #[test]
    fn bad_date_is_rejected() {
        let result = Cli::try_parse_from(["coverkit", "generate", "--date", "03/01/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["coverkit", "roles", "--dir", "work"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("work")));
    }
}
