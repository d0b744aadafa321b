use crate::config::Config;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path).wrap_err_with(|| {
        format!("Failed to open configuration file '{}'", config_path.display())
    })?;

    let config: Config = serde_yaml::from_reader(file).wrap_err_with(|| {
        format!("Failed to parse configuration file '{}'", config_path.display())
    })?;

    config.validate()?;

    Ok(config)
}

/// CLI arguments that override YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub nodes: Option<usize>,
    pub demands: Option<usize>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
}

/// Apply CLI overrides to a configuration
pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) -> Result<()> {
    if let Some(nodes) = overrides.nodes {
        info!("Overriding synthetic node count: {}", nodes);
        config.synth.nodes = nodes;
    }

    if let Some(demands) = overrides.demands {
        info!("Overriding synthetic demand count: {}", demands);
        config.synth.demands = demands;
    }

    if let Some(iterations) = overrides.iterations {
        info!("Overriding iteration count: {}", iterations);
        config.run.iterations = iterations;
        config.run.warmup_iterations = config.run.warmup_iterations.min(iterations);
    }

    if let Some(seed) = overrides.seed {
        info!("Overriding seed: {}", seed);
        config.run.seed = seed;
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
solver:
  max_segments: 3
run:
  iterations: 200
  warmup_iterations: 20
  seed: 7
synth:
  nodes: 30
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.solver.max_segments, 3);
        assert_eq!(config.run.seed, 7);
        assert_eq!(config.synth.nodes, 30);
        assert_eq!(config.synth.demands, 500);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "run:\n  iterations: 5\n  warmup_iterations: 10\n").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/srte.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to open configuration file"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let overrides = CliOverrides {
            nodes: Some(20),
            iterations: Some(100),
            seed: Some(3),
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides).unwrap();

        assert_eq!(config.synth.nodes, 20);
        assert_eq!(config.run.iterations, 100);
        assert_eq!(config.run.warmup_iterations, 100);
        assert_eq!(config.run.seed, 3);
        assert_eq!(config.synth.demands, 500);

        let overrides = CliOverrides { nodes: Some(1), ..Default::default() };
        assert!(apply_overrides(&mut config, &overrides).is_err());
    }
}
