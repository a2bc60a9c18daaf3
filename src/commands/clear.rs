use crate::config::Config;
use crate::error::Result;

/// Forget saved filter selections.
pub fn cmd_clear(config: &Config) -> Result<()> {
    config.filter_store().clear()?;
    println!("Cleared saved filters");
    Ok(())
}
