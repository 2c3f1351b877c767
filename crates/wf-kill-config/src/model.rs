//! Configuration data model

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub global: GlobalConfig,
    pub kill_view: KillViewConfig,
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Default name of the per-output grab
pub const DEFAULT_GRAB_NAME: &str = "wf-kill";

/// Cursor shown while the pointer is grabbed
pub const DEFAULT_SELECT_CURSOR: &str = "pirate";

/// Cursor restored once the grab ends
pub const DEFAULT_CURSOR: &str = "default";

/// Settings for the view picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillViewConfig {
    /// Name the grab is registered under on each output
    pub grab_name: String,
    /// Cursor shown while waiting for a click
    pub cursor: String,
    /// Cursor restored after the grab is released
    pub default_cursor: String,
    /// Linux input event code of the button that selects a view.
    /// Any other button cancels.
    pub select_button: u32,
    /// Ask the selected view to close after reporting its pid
    pub close_view: bool,
}

impl Default for KillViewConfig {
    fn default() -> Self {
        Self {
            grab_name: DEFAULT_GRAB_NAME.to_string(),
            cursor: DEFAULT_SELECT_CURSOR.to_string(),
            default_cursor: DEFAULT_CURSOR.to_string(),
            select_button: u32::from(evdev::Key::BTN_LEFT.code()),
            close_view: true,
        }
    }
}
