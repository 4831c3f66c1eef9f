use colored::*;
use eyre::{Context, Result};
use indexmap::IndexMap;

use crate::character::{self, CharacterConfig, NumericTrait, TraitName};
use crate::cli::{OutputFormat, SeedAction};

pub fn run(action: SeedAction) -> Result<()> {
    match action {
        SeedAction::Encode { traits } => encode(&traits),
        SeedAction::Decode { seed, format } => decode(&seed, OutputFormat::resolve(format)),
    }
}

fn encode(traits: &[String]) -> Result<()> {
    let mut config = CharacterConfig::default();

    for edit in traits {
        let event = super::parse_edit(edit)?;
        let Some(TraitName::Numeric(t)) = TraitName::parse(&event.name) else {
            eyre::bail!("{} is not part of the seed", event.name);
        };
        let crate::state::EditValue::Text(raw) = &event.value else {
            eyre::bail!("{} expects a number", event.name);
        };
        let value = raw
            .trim()
            .parse::<i64>()
            .context(format!("Invalid number {:?} for {}", raw, event.name))?;
        config.set_numeric(t, t.coerce(value));
    }

    println!("{}", character::seed::encode(&config));
    Ok(())
}

fn decode(seed: &str, format: OutputFormat) -> Result<()> {
    let traits = character::seed::decode(seed).context(format!("Invalid seed {:?}", seed))?;

    let values: IndexMap<&str, u8> = NumericTrait::SEED_ORDER
        .iter()
        .zip(traits.0)
        .map(|(t, v)| (t.as_str(), v))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&values)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&values)?),
        OutputFormat::Text => {
            println!("{} {}", "Seed".bold(), seed);
            for (name, value) in &values {
                println!("  {:<12} {}", name.cyan(), value);
            }
        }
    }
    Ok(())
}
