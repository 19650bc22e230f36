//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::KhioneConfig;
use crate::domain::errors::KhioneError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into KhioneConfig
/// 4. Applies environment variable overrides (KHIONE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing or substitution
/// fails, or the configuration is invalid.
///
/// # Examples
///
/// ```no_run
/// use khione::config::loader::load_config;
///
/// let config = load_config("khione.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<KhioneConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(KhioneError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        KhioneError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: KhioneConfig = toml::from_str(&contents)
        .map_err(|e| KhioneError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration, falling back to built-in defaults when the file is absent
///
/// Environment overrides and validation still apply to the defaults.
///
/// # Errors
///
/// Returns an error if an existing file is invalid or the overrides produce
/// an invalid configuration.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<KhioneConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = KhioneConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut KhioneConfig) -> Result<()> {
    apply_env_overrides(config);

    config.validate().map_err(|e| {
        KhioneError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = placeholder_pattern();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        // Placeholders in comments are left alone
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(KhioneError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using KHIONE_* prefix
///
/// Environment variables follow the pattern: KHIONE_<SECTION>_<KEY>
fn apply_env_overrides(config: &mut KhioneConfig) {
    if let Ok(val) = std::env::var("KHIONE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("KHIONE_BACKEND_BASE_URL") {
        config.backend.base_url = val;
    }
    if let Ok(val) = std::env::var("KHIONE_BACKEND_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.backend.timeout_seconds = timeout;
        }
    }

    if let Ok(val) = std::env::var("KHIONE_ASSETS_BASE_URL") {
        config.assets.base_url = val;
    }

    if let Ok(val) = std::env::var("KHIONE_OUTPUT_DIRECTORY") {
        config.output.directory = val;
    }

    if let Ok(val) = std::env::var("KHIONE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("KHIONE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
