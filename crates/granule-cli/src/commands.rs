//! CLI command implementations.

use granule_config::{validate as run_validation, SceneConfig, ValidateOptions};

/// Validate (and optionally repair) a scene config file.
pub fn validate(
    config_path: &str,
    strict: bool,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Granule Validator");
    println!("─────────────────");
    println!("Config: {config_path}");
    println!();

    let json = std::fs::read_to_string(config_path)?;
    let cfg = SceneConfig::from_json_str(&json)?;

    let opts = ValidateOptions {
        auto_fit: !strict,
        ..ValidateOptions::default()
    };

    let valid = run_validation(cfg, &opts).map_err(|e| format!("Rejected: {e}"))?;

    println!("✅ Config is valid.");
    println!("  Steps:        {}", valid.steps);
    println!("  Bodies:       {}", valid.mpm_bodies.len());
    println!("  Statics:      {}", valid.static_objects.len());
    println!(
        "  Domain:       [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
        valid.mpm_options.lower_bound.x,
        valid.mpm_options.lower_bound.y,
        valid.mpm_options.lower_bound.z,
        valid.mpm_options.upper_bound.x,
        valid.mpm_options.upper_bound.y,
        valid.mpm_options.upper_bound.z,
    );
    println!("  Grid density: {}", valid.mpm_options.grid_density);

    if let Some(path) = output_path {
        std::fs::write(path, valid.to_json_string()?)?;
        println!();
        println!("Repaired config written to: {path}");
    }

    Ok(())
}

/// Print a default scene config as JSON.
pub fn defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = SceneConfig::default();
    println!("{}", cfg.to_json_string()?);
    Ok(())
}
