//! Environment-backed settings

/// Converter program, overridable with `TFJS_CONVERTER`
pub const DEFAULT_CONVERTER: &str = "tensorflowjs_converter";

/// Python interpreter for the metadata reader, overridable with `TFJS_PYTHON`
pub const DEFAULT_PYTHON: &str = "python3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub converter: String,
    pub python: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            converter: DEFAULT_CONVERTER.to_string(),
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank values keep the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            converter: value("TFJS_CONVERTER", DEFAULT_CONVERTER),
            python: value("TFJS_PYTHON", DEFAULT_PYTHON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let settings = Settings::from_lookup(|key| match key {
            "TFJS_CONVERTER" => Some("/opt/bin/tensorflowjs_converter".to_string()),
            "TFJS_PYTHON" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(settings.converter, "/opt/bin/tensorflowjs_converter");
        assert_eq!(settings.python, DEFAULT_PYTHON);
    }
}
