use std::path::Path;

use anyhow::{Result, bail};
use gradebook_core::FormConfig;

use crate::cli::Preset;

pub fn run(output: &Path, preset: Preset, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    preset_config(preset).save(output)?;
    println!("Wrote {:?} preset to {}", preset, output.display());
    Ok(())
}

pub fn preset_config(preset: Preset) -> FormConfig {
    match preset {
        Preset::Student => FormConfig::student(),
        Preset::Fixed => FormConfig::fixed_student(),
        Preset::Class => FormConfig::class(),
    }
}
