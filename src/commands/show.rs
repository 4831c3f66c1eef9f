use eyre::Result;

use super::render;
use crate::cli::OutputFormat;
use crate::config::Config;

pub fn run(url: Option<&str>, format: OutputFormat, config: &Config) -> Result<()> {
    let state = super::open_state(url, config, true)?;
    render(state.config(), format)
}
