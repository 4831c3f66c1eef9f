use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "rpgme Configuration".bold());
            println!();

            println!("  log_level: {}", config.log_level.as_filter());
            println!("  page_url: {}", config.page_url);
            println!();

            println!("{}:", "clipboard".cyan());
            println!("  enabled: {}", config.clipboard.enabled);
            for cmd in &config.clipboard.commands {
                println!("  - {} {}", cmd.program, cmd.args.join(" "));
            }
            println!();
            println!("  config dir: {}", Config::rpgme_dir().display());
        }
    }

    Ok(())
}

fn get(key: &str, config: &Config) -> Result<()> {
    let value = match key {
        "page_url" | "page-url" => Some(config.page_url.clone()),
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "clipboard.enabled" => Some(config.clipboard.enabled.to_string()),
        _ => None,
    };

    match value {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            std::process::exit(1);
        }
    }

    Ok(())
}
