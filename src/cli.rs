use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "rpgme",
    about = "RPG character builder - seeds, URL parameters and share links",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/rpgme/logs/rpgme.log\n\nEdits are written as name=value, e.g. hair=7 hat=ninja fire=true"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to rpgme.yaml config file")]
    pub config: Option<PathBuf>,

    /// Page URL to load the character from (defaults to page_url in config)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the character described by the page URL
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Apply edits and print the rewritten page URL
    Set {
        /// Edits as name=value
        #[arg(required = true)]
        edits: Vec<String>,
    },

    /// Build a share link, copying it to the clipboard
    Share {
        /// Edits to apply before sharing
        edits: Vec<String>,

        /// Print the link instead of copying it
        #[arg(long)]
        no_clipboard: bool,
    },

    /// Encode or decode seeds
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },

    /// Read edits from stdin, one per line
    Edit {
        /// Print the link instead of copying it on `share`
        #[arg(long)]
        no_clipboard: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum SeedAction {
    /// Encode numeric traits (unspecified traits use defaults)
    Encode {
        /// Traits as name=value
        traits: Vec<String>,
    },

    /// Decode a seed into its numeric traits
    Decode {
        seed: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (e.g., page_url)
        key: String,
    },
}
