use serde::Deserialize;


#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub logging_config: String,
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging_config: "warn,judge_plan_backend=info,judge_plan_reports=info".into(),
            output_format: OutputFormat::Text,
        }
    }
}

pub const CONFIG_ENV_VAR: &str = "JUDGE_PLAN_CONFIG";

pub(crate) fn parse_config(data: &str) -> Result<Config, anyhow::Error> {
    Ok(serde_yaml::from_str::<Config>(data)?)
}

fn read_config_inner() -> Result<Config, anyhow::Error> {
    let config_path = std::env::var(CONFIG_ENV_VAR)?;
    let config = std::fs::read_to_string(config_path)?;
    parse_config(&config)
}

pub fn read_config() -> Config {
    if std::env::var_os(CONFIG_ENV_VAR).is_none() {
        return Config::default();
    }

    match read_config_inner() {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up from the config
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_full_config() -> Result<(), anyhow::Error> {
        let config = parse_config("logging_config: debug\noutput_format: json\n")?;
        assert_eq!(config.logging_config, "debug");
        assert_eq!(config.output_format, OutputFormat::Json);
        Ok(())
    }

    #[test]
    fn test_missing_fields_use_defaults() -> Result<(), anyhow::Error> {
        let config = parse_config("output_format: json\n")?;
        assert_eq!(config.logging_config, Config::default().logging_config);
        Ok(())
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(parse_config("output_format: pdf\n").is_err());
    }
}
