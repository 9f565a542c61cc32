use fable_pricing::{LibraryPricingSettings, PricingConfig};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Initial fee schedules seeded into the settings store at startup
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PricingSection {
    pub service: Option<PricingConfig>,
    pub library: Option<LibraryPricingSettings>,
}

/// `FABLE_SERVER__PORT=9000` sets `server.port`
fn environment() -> config::Environment {
    config::Environment::with_prefix("FABLE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::layered(Path::new("config"), &run_mode, environment())
    }

    /// default, then `run_mode`, then local overrides from `dir`, then the environment
    fn layered(
        dir: &Path,
        run_mode: &str,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&file(run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&file("local")).required(false))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::fs;
    use std::path::PathBuf;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    fn config_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = env::temp_dir().join(format!("fable-config-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            fs::write(dir.join(file), contents).unwrap();
        }
        dir
    }

    fn vars(pairs: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    const DEFAULT: &str = r#"
        [server]
        port = 8080

        [pricing.service]
        company_percentage = 1.2
        fixed_fee = 50.0
    "#;

    #[test]
    fn test_pricing_section_is_optional() {
        let config = parse("[server]\nport = 8080\n");

        assert_eq!(config.server.port, 8080);
        assert!(config.pricing.service.is_none());
        assert!(config.pricing.library.is_none());
    }

    #[test]
    fn test_pricing_section_parses_both_schedules() {
        let config = parse(
            r#"
            [server]
            port = 9000

            [pricing.service]
            company_percentage = 1.2
            fixed_fee = 50.0

            [pricing.library]
            company_percentage = 1.1
            fixed_fee = 5.0
            "#,
        );

        assert_eq!(config.pricing.service, Some(PricingConfig::new(1.2, 50.0)));
        assert_eq!(config.pricing.library, Some(LibraryPricingSettings::new(1.1, 5.0)));
    }

    #[test]
    fn test_run_mode_and_local_files_override_default() {
        let dir = config_dir(
            "layers",
            &[
                ("default.toml", DEFAULT),
                ("staging.toml", "[server]\nport = 8081\n"),
                ("local.toml", "[pricing.service]\nfixed_fee = 10.0\n"),
            ],
        );

        let config = Config::layered(&dir, "staging", vars(&[])).unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.pricing.service, Some(PricingConfig::new(1.2, 10.0)));

        let config = Config::layered(&dir, "production", vars(&[])).unwrap();
        assert_eq!(config.server.port, 8080);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_environment_overrides_files() {
        let dir = config_dir(
            "env",
            &[("default.toml", DEFAULT), ("local.toml", "[server]\nport = 8082\n")],
        );

        let config = Config::layered(
            &dir,
            "development",
            vars(&[
                ("FABLE_SERVER__PORT", "9000"),
                ("FABLE_PRICING__SERVICE__COMPANY_PERCENTAGE", "1.5"),
                ("FABLE_PRICING__LIBRARY__COMPANY_PERCENTAGE", "1.1"),
                ("FABLE_PRICING__LIBRARY__FIXED_FEE", "5"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.pricing.service, Some(PricingConfig::new(1.5, 50.0)));
        assert_eq!(config.pricing.library, Some(LibraryPricingSettings::new(1.1, 5.0)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_default_file_is_an_error() {
        let dir = config_dir("missing", &[]);

        assert!(Config::layered(&dir, "development", vars(&[])).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
