use std::path::Path;

use crate::application::config::AppConfig;

/// Prints the effective configuration as TOML, or only its file path.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn run_config(config: &AppConfig, config_path: &Path, path_only: bool) -> anyhow::Result<()> {
    if path_only {
        println!("{}", config_path.display());
        return Ok(());
    }
    println!("# {}", config_path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_path_only() {
        let config = AppConfig::default();
        assert!(run_config(&config, Path::new("/tmp/hostcheck.toml"), true).is_ok());
    }

    #[test]
    fn prints_full_config() {
        let config = AppConfig::default();
        assert!(run_config(&config, Path::new("/tmp/hostcheck.toml"), false).is_ok());
    }
}
