//! KDL configuration parser

use std::path::Path;

use evdev::Key;

use crate::error::ConfigError;
use crate::model::*;

/// Load a configuration file, expanding a leading `~` in the path
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let path = shellexpand::tilde(path).into_owned();
    parse_config(Path::new(&path))
}

/// Parse a configuration file from the given path
pub fn parse_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse configuration from a string
pub fn parse_config_str(content: &str) -> Result<Config, ConfigError> {
    let doc: kdl::KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        // kdl carries its own miette version, so rebuild the span by hand
        let offset = e.span.offset();
        let len = e.span.len();
        let span = miette::SourceSpan::from((offset, len));
        ConfigError::ParseError {
            src: content.to_string(),
            span,
            source: e,
        }
    })?;

    let mut config = Config::default();

    for node in doc.nodes() {
        match node.name().value() {
            "global" => {
                config.global = parse_global(node)?;
            }
            "kill-view" => {
                config.kill_view = parse_kill_view(node)?;
            }
            name => {
                tracing::warn!("Unknown top-level config node: {}", name);
            }
        }
    }

    Ok(config)
}

fn parse_global(node: &kdl::KdlNode) -> Result<GlobalConfig, ConfigError> {
    let mut global = GlobalConfig::default();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "log-level" => {
                    let val = string_arg(child)?;
                    global.log_level = val
                        .parse()
                        .map_err(|e| ConfigError::Invalid { message: e })?;
                }
                name => {
                    tracing::warn!("Unknown global config option: {}", name);
                }
            }
        }
    }

    Ok(global)
}

fn parse_kill_view(node: &kdl::KdlNode) -> Result<KillViewConfig, ConfigError> {
    let mut kill_view = KillViewConfig::default();

    let Some(children) = node.children() else {
        return Ok(kill_view);
    };

    for child in children.nodes() {
        match child.name().value() {
            "grab-name" => kill_view.grab_name = string_arg(child)?.to_string(),
            "cursor" => kill_view.cursor = string_arg(child)?.to_string(),
            "default-cursor" => kill_view.default_cursor = string_arg(child)?.to_string(),
            "select-button" => {
                let entry = first_arg(child)?;
                kill_view.select_button = match entry.value().as_i64() {
                    Some(code) => u32::try_from(code).map_err(|_| ConfigError::Invalid {
                        message: format!("select-button code out of range: {}", code),
                    })?,
                    None => parse_button(string_arg(child)?)?,
                };
            }
            "close-view" => {
                kill_view.close_view =
                    first_arg(child)?
                        .value()
                        .as_bool()
                        .ok_or_else(|| ConfigError::Invalid {
                            message: "close-view expects a boolean".to_string(),
                        })?;
            }
            name => {
                tracing::warn!("Unknown kill-view config option: {}", name);
            }
        }
    }

    Ok(kill_view)
}

/// Map a pointer button name to its Linux input event code
///
/// Accepts the short names `left`, `right`, `middle`, `side` and `extra`,
/// or the matching `BTN_*` constant names.
pub fn parse_button(name: &str) -> Result<u32, ConfigError> {
    let key = match name.to_lowercase().as_str() {
        "left" | "btn_left" => Key::BTN_LEFT,
        "right" | "btn_right" => Key::BTN_RIGHT,
        "middle" | "btn_middle" => Key::BTN_MIDDLE,
        "side" | "btn_side" => Key::BTN_SIDE,
        "extra" | "btn_extra" => Key::BTN_EXTRA,
        _ => {
            return Err(ConfigError::Invalid {
                message: format!("Unknown pointer button: {}", name),
            })
        }
    };

    Ok(u32::from(key.code()))
}

fn first_arg(node: &kdl::KdlNode) -> Result<&kdl::KdlEntry, ConfigError> {
    node.entries().first().ok_or_else(|| ConfigError::Invalid {
        message: format!("{} expects a value", node.name().value()),
    })
}

fn string_arg(node: &kdl::KdlNode) -> Result<&str, ConfigError> {
    first_arg(node)?
        .value()
        .as_string()
        .ok_or_else(|| ConfigError::Invalid {
            message: format!("{} expects a string", node.name().value()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = r#"
            global {
                log-level "debug"
            }

            kill-view {
                grab-name "picker"
                cursor "crosshair"
                default-cursor "left_ptr"
                select-button "right"
                close-view false
            }
        "#;

        let result = parse_config_str(config).unwrap();
        assert_eq!(result.global.log_level, LogLevel::Debug);
        assert_eq!(result.kill_view.grab_name, "picker");
        assert_eq!(result.kill_view.cursor, "crosshair");
        assert_eq!(result.kill_view.default_cursor, "left_ptr");
        assert_eq!(result.kill_view.select_button, 0x111);
        assert!(!result.kill_view.close_view);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let result = parse_config_str("").unwrap();
        assert_eq!(result, Config::default());
        assert_eq!(result.kill_view.cursor, "pirate");
        assert_eq!(result.kill_view.select_button, 0x110);
        assert!(result.kill_view.close_view);
    }

    #[test]
    fn test_select_button_accepts_raw_code() {
        let config = r#"
            kill-view {
                select-button 274
            }
        "#;

        let result = parse_config_str(config).unwrap();
        assert_eq!(result.kill_view.select_button, 274);
    }

    #[test]
    fn test_unknown_log_level_is_invalid() {
        let config = r#"
            global {
                log-level "loud"
            }
        "#;

        match parse_config_str(config) {
            Err(ConfigError::Invalid { message }) => assert!(message.contains("loud")),
            other => panic!("Expected Invalid error, got: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_button_is_invalid() {
        let config = r#"
            kill-view {
                select-button "thumb"
            }
        "#;

        match parse_config_str(config) {
            Err(ConfigError::Invalid { message }) => assert!(message.contains("thumb")),
            other => panic!("Expected Invalid error, got: {:?}", other),
        }
    }

    #[test]
    fn test_close_view_requires_boolean() {
        let config = r#"
            kill-view {
                close-view "yes"
            }
        "#;

        assert!(matches!(
            parse_config_str(config),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = r#"
            kill-view {
                sparkles "on"
            }
            window-rules {
            }
        "#;

        let result = parse_config_str(config).unwrap();
        assert_eq!(result.kill_view, KillViewConfig::default());
    }

    #[test]
    fn test_malformed_kdl_reports_parse_error() {
        let result = parse_config_str("kill-view {");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_parse_button_names() {
        assert_eq!(parse_button("left").unwrap(), 0x110);
        assert_eq!(parse_button("BTN_MIDDLE").unwrap(), 0x112);
        assert_eq!(parse_button("Extra").unwrap(), 0x114);
    }

    #[test]
    fn test_parse_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kill-view {{\n    cursor \"skull\"\n}}").unwrap();

        let result = parse_config(file.path()).unwrap();
        assert_eq!(result.kill_view.cursor, "skull");
    }

    #[test]
    fn test_load_config_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.kdl");

        let result = load_config(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
