use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Security Guardrails - tailored security recommendations for your project
#[derive(Parser, Debug)]
#[command(name = "guardrails")]
#[command(about = "Pick your project type, stack and data to get tailored security guardrails")]
#[command(version)]
pub struct Cli {
    /// Load the catalog from a JSON file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file (the interactive wizard logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive wizard
    Wizard {
        /// Start browsing the guardrails of a saved profile
        #[arg(short, long, value_name = "PATH")]
        profile: Option<PathBuf>,

        /// Save the configuration to this file when the wizard completes
        #[arg(long, value_name = "PATH")]
        save_profile: Option<PathBuf>,
    },
    /// Print a catalog table
    List {
        #[arg(value_enum)]
        table: CatalogTable,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the guardrails for a configuration without the TUI
    Recommend {
        /// Project type id (e.g. website, api)
        #[arg(short = 't', long, value_name = "ID")]
        project_type: String,

        /// Technology id; repeat for several
        #[arg(long = "tech", value_name = "ID")]
        technologies: Vec<String>,

        /// Data category id; repeat for several
        #[arg(long = "data", value_name = "ID")]
        data_types: Vec<String>,

        /// Start from the project type's defaults and toggle the given ids
        #[arg(long)]
        defaults: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate a profile file against the catalog
    Validate {
        /// Path to profile file to validate
        profile: PathBuf,
    },
    /// Send feedback about the recommendations
    Feedback {
        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Optional message
        #[arg(short, long)]
        message: Option<String>,
    },
}

/// Catalog tables printable by `list`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogTable {
    Projects,
    Technologies,
    Data,
    Guardrails,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to the wizard)
        let cli = Cli::try_parse_from(["guardrails"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_wizard_with_profile() {
        let cli = Cli::try_parse_from([
            "guardrails",
            "wizard",
            "--profile",
            "/path/to/profile.json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Wizard { profile, save_profile }) => {
                assert_eq!(profile.unwrap().to_str().unwrap(), "/path/to/profile.json");
                assert!(save_profile.is_none());
            }
            _ => panic!("Expected Wizard command"),
        }
    }

    #[test]
    fn test_cli_recommend_repeated_ids() {
        let cli = Cli::try_parse_from([
            "guardrails",
            "recommend",
            "--project-type",
            "api",
            "--tech",
            "nodejs",
            "--tech",
            "mysql",
            "--data",
            "user_accounts",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Recommend {
                project_type,
                technologies,
                data_types,
                defaults,
                json,
            }) => {
                assert_eq!(project_type, "api");
                assert_eq!(technologies, vec!["nodejs", "mysql"]);
                assert_eq!(data_types, vec!["user_accounts"]);
                assert!(!defaults);
                assert!(json);
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_cli_recommend_requires_project_type() {
        assert!(Cli::try_parse_from(["guardrails", "recommend"]).is_err());
    }

    #[test]
    fn test_cli_list_table() {
        let cli = Cli::try_parse_from(["guardrails", "list", "data"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                table: CatalogTable::Data,
                json: false
            })
        ));
        assert!(Cli::try_parse_from(["guardrails", "list", "packages"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "guardrails",
            "validate",
            "profile.json",
            "--catalog",
            "catalog.json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.catalog.unwrap().to_str().unwrap(), "catalog.json");
    }

    #[test]
    fn test_cli_feedback() {
        let cli =
            Cli::try_parse_from(["guardrails", "feedback", "--rating", "4", "-m", "nice"]).unwrap();
        match cli.command {
            Some(Commands::Feedback { rating, message }) => {
                assert_eq!(rating, 4);
                assert_eq!(message.as_deref(), Some("nice"));
            }
            _ => panic!("Expected Feedback command"),
        }
    }
}
