use super::types::{Config, ConfigError, GLOBAL_KEYS};

/// Accept `snake_case` and `kebab-case` spellings of the same key.
fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('_', "-")
}

/// Parses glossort.toml / .glossort.toml content.
///
/// Unknown tables and keys are reported with `log::warn!` and dropped so a
/// newer config file keeps working with an older binary.
pub(super) fn parse_glossort_toml(content: &str, display_path: &str) -> Result<Config, ConfigError> {
    let doc: toml::Table = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("{display_path}: Failed to parse TOML: {e}")))?;

    let mut cleaned = toml::Table::new();
    for (section, value) in doc {
        if section != "global" {
            log::warn!("[WARN] Unknown section [{section}] in {display_path}");
            continue;
        }
        let toml::Value::Table(global_table) = value else {
            return Err(ConfigError::ParseError(format!(
                "{display_path}: [global] must be a table"
            )));
        };

        let mut global = toml::Table::new();
        for (key, value) in global_table {
            let norm_key = normalize_key(&key);
            if GLOBAL_KEYS.contains(&norm_key.as_str()) {
                global.insert(norm_key, value);
            } else {
                log::warn!("[WARN] Unknown key in [global] section of {display_path}: {key}");
            }
        }
        cleaned.insert("global".to_string(), toml::Value::Table(global));
    }

    let config: Config = toml::Value::Table(cleaned)
        .try_into()
        .map_err(|e| ConfigError::ParseError(format!("{display_path}: {e}")))?;
    config.validate(display_path)?;
    Ok(config)
}
