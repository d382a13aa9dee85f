//! TOML Configuration File Support
//!
//! Centralized configuration for the editor, loaded from
//! `~/.config/canvas-editor/editor.toml`.
//!
//! # Configuration Priority
//!
//! Values are applied with the following priority (highest first):
//! 1. CLI arguments (via [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [connection]
//! host = "127.0.0.1"
//! port = 5005
//! connect_timeout_ms = 5000
//!
//! [grid]
//! char_width = 8
//! line_pitch = 18
//! max_line_width = 60
//!
//! [animation]
//! tick_interval_ms = 50
//! lifetime_ticks = 60
//!
//! [theme]
//! background = "#1e1e2e"
//! header_label = "Canvas Editor"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::HexColor;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Where the rendering service lives and how to start talking to it
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionConfig {
    /// Host name or address of the canvas server
    pub host: String,
    /// TCP port of the canvas server
    pub port: u16,
    /// How long to wait for the TCP connect
    pub connect_timeout: Duration,
    /// Delay before the first frame is sent
    pub initial_render_delay: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5005,
            connect_timeout: Duration::from_millis(5000),
            initial_render_delay: Duration::from_millis(100),
        }
    }
}

impl ConnectionConfig {
    /// `host:port` string for connecting
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Fixed character grid used for layout and hit testing
///
/// All values are pixels except `max_line_width`, which counts characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    /// Width of one character cell
    pub char_width: u32,
    /// Height of one character cell
    pub char_height: u32,
    /// Vertical distance between line tops; may exceed `char_height`
    pub line_pitch: u32,
    /// Gap between the canvas edge and the text area
    pub padding: u32,
    /// Height of the header band above the text area
    pub header_height: u32,
    /// Auto-wrap threshold in characters
    pub max_line_width: usize,
    /// Canvas width; animations leaving it are dropped
    pub canvas_width: u32,
    /// Canvas height, used for the background fill
    pub canvas_height: u32,
    /// Width of the text cursor bar
    pub cursor_width: u32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            char_width: 8,
            char_height: 14,
            line_pitch: 18,
            padding: 26,
            header_height: 40,
            max_line_width: 60,
            canvas_width: 800,
            canvas_height: 600,
            cursor_width: 2,
        }
    }
}

impl GridGeometry {
    /// Top pixel of the first text line
    #[must_use]
    pub fn text_top(&self) -> i64 {
        i64::from(self.header_height) + i64::from(self.padding)
    }

    /// Pixel position of the top-left corner of a character cell
    #[must_use]
    pub fn cell_origin(&self, line: usize, col: usize) -> (i64, i64) {
        let x = i64::from(self.padding) + to_i64(col) * i64::from(self.char_width);
        let y = self.text_top() + to_i64(line) * i64::from(self.line_pitch);
        (x, y)
    }

    /// Inverse of [`cell_origin`](Self::cell_origin)
    ///
    /// Returns signed `(line, col)`. Division truncates toward zero, so a
    /// point within one pitch above the first line still lands on line 0;
    /// points further up or left produce negative values.
    #[must_use]
    pub fn point_to_cell(&self, px: i32, py: i32) -> (i64, i64) {
        let line = (i64::from(py) - self.text_top()) / i64::from(self.line_pitch.max(1));
        let col = (i64::from(px) - i64::from(self.padding)) / i64::from(self.char_width.max(1));
        (line, col)
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Motion constants for trigger-word animations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Wall-clock interval between ticks
    pub tick_interval: Duration,
    /// Horizontal pixels advanced per tick
    pub velocity_x: f64,
    /// Radians added to the bounce phase per tick
    pub phase_step: f64,
    /// Vertical bounce amplitude in pixels
    pub amplitude: f64,
    /// Ticks an animation lives for
    pub lifetime_ticks: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            velocity_x: 4.0,
            phase_step: 0.3,
            amplitude: 6.0,
            lifetime_ticks: 60,
        }
    }
}

/// Colors and header text for the rendered frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Canvas fill
    pub background: HexColor,
    /// Document text
    pub text: HexColor,
    /// Header label
    pub header: HexColor,
    /// Cursor bar
    pub cursor: HexColor,
    /// Animated glyphs
    pub sprite: HexColor,
    /// Text shown in the header band
    pub header_label: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: HexColor::from_rgb(0x1e, 0x1e, 0x2e),
            text: HexColor::from_rgb(0xcd, 0xd6, 0xf4),
            header: HexColor::from_rgb(0xf5, 0xc2, 0xe7),
            cursor: HexColor::from_rgb(0xf3, 0x8b, 0xa8),
            sprite: HexColor::from_rgb(0xf9, 0xe2, 0xaf),
            header_label: "Canvas Editor".to_string(),
        }
    }
}

/// Centralized configuration for the editor
///
/// Use [`load_config`] to load with proper priority handling.
#[derive(Clone, Debug, Default)]
pub struct EditorConfig {
    /// Canvas server connection
    pub connection: ConnectionConfig,
    /// Grid layout
    pub grid: GridGeometry,
    /// Animation motion
    pub animation: AnimationConfig,
    /// Colors and labels
    pub theme: Theme,
    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,
    source: Option<ConfigSource>,
}

impl EditorConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the highest-priority source that contributed a value
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source.unwrap_or(ConfigSource::Default)
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = Some(source);
    }

    /// Check invariants the rest of the editor relies on
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if grid.char_width == 0 || grid.char_height == 0 {
            return Err(ConfigError::ValidationError(
                "grid.char_width and grid.char_height must be positive".to_string(),
            ));
        }
        if grid.line_pitch == 0 {
            return Err(ConfigError::ValidationError(
                "grid.line_pitch must be positive".to_string(),
            ));
        }
        if grid.max_line_width == 0 {
            return Err(ConfigError::ValidationError(
                "grid.max_line_width must be positive".to_string(),
            ));
        }
        if self.animation.tick_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "animation.tick_interval_ms must be positive".to_string(),
            ));
        }
        if !(self.animation.velocity_x.is_finite() && self.animation.velocity_x > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "animation.velocity_x must be a positive number, got {}",
                self.animation.velocity_x
            )));
        }
        if self.animation.lifetime_ticks == 0 {
            return Err(ConfigError::ValidationError(
                "animation.lifetime_ticks must be positive".to_string(),
            ));
        }
        if self.connection.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "connection.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Connection section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionToml {
    /// Canvas server host
    pub host: Option<String>,
    /// Canvas server port
    pub port: Option<u16>,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: Option<u64>,
    /// Delay before the first frame in milliseconds
    pub initial_render_delay_ms: Option<u64>,
}

/// Grid section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridToml {
    /// Character cell width
    pub char_width: Option<u32>,
    /// Character cell height
    pub char_height: Option<u32>,
    /// Distance between line tops
    pub line_pitch: Option<u32>,
    /// Edge padding
    pub padding: Option<u32>,
    /// Header band height
    pub header_height: Option<u32>,
    /// Auto-wrap threshold in characters
    pub max_line_width: Option<usize>,
    /// Canvas width
    pub canvas_width: Option<u32>,
    /// Canvas height
    pub canvas_height: Option<u32>,
    /// Cursor bar width
    pub cursor_width: Option<u32>,
}

/// Animation section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationToml {
    /// Tick interval in milliseconds
    pub tick_interval_ms: Option<u64>,
    /// Horizontal speed in pixels per tick
    pub velocity_x: Option<f64>,
    /// Bounce phase increment per tick
    pub phase_step: Option<f64>,
    /// Bounce amplitude in pixels
    pub amplitude: Option<f64>,
    /// Lifetime in ticks
    pub lifetime_ticks: Option<u32>,
}

/// Theme section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeToml {
    /// Background color
    pub background: Option<HexColor>,
    /// Text color
    pub text: Option<HexColor>,
    /// Header label color
    pub header: Option<HexColor>,
    /// Cursor color
    pub cursor: Option<HexColor>,
    /// Animated glyph color
    pub sprite: Option<HexColor>,
    /// Header label text
    pub header_label: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorToml {
    /// Connection section
    pub connection: ConnectionToml,
    /// Grid section
    pub grid: GridToml,
    /// Animation section
    pub animation: AnimationToml,
    /// Theme section
    pub theme: ThemeToml,
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/canvas-editor/editor.toml` or the platform
/// equivalent.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("canvas-editor").join("editor.toml"))
}

/// Load configuration from the default path and the process environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed,
/// or if the merged values fail validation. A missing file is not an error.
pub fn load_config() -> Result<EditorConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path and the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the merged values fail validation.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<EditorConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration using `env` to look up environment variables
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<EditorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EditorConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: EditorToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.set_source(ConfigSource::File);

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut EditorConfig, toml: &EditorToml) {
    let connection = &toml.connection;
    if let Some(ref host) = connection.host {
        config.connection.host.clone_from(host);
    }
    if let Some(port) = connection.port {
        config.connection.port = port;
    }
    if let Some(ms) = connection.connect_timeout_ms {
        config.connection.connect_timeout = Duration::from_millis(ms);
    }
    if let Some(ms) = connection.initial_render_delay_ms {
        config.connection.initial_render_delay = Duration::from_millis(ms);
    }

    let grid = &toml.grid;
    let target = &mut config.grid;
    if let Some(v) = grid.char_width {
        target.char_width = v;
    }
    if let Some(v) = grid.char_height {
        target.char_height = v;
    }
    if let Some(v) = grid.line_pitch {
        target.line_pitch = v;
    }
    if let Some(v) = grid.padding {
        target.padding = v;
    }
    if let Some(v) = grid.header_height {
        target.header_height = v;
    }
    if let Some(v) = grid.max_line_width {
        target.max_line_width = v;
    }
    if let Some(v) = grid.canvas_width {
        target.canvas_width = v;
    }
    if let Some(v) = grid.canvas_height {
        target.canvas_height = v;
    }
    if let Some(v) = grid.cursor_width {
        target.cursor_width = v;
    }

    let animation = &toml.animation;
    if let Some(ms) = animation.tick_interval_ms {
        config.animation.tick_interval = Duration::from_millis(ms);
    }
    if let Some(v) = animation.velocity_x {
        config.animation.velocity_x = v;
    }
    if let Some(v) = animation.phase_step {
        config.animation.phase_step = v;
    }
    if let Some(v) = animation.amplitude {
        config.animation.amplitude = v;
    }
    if let Some(v) = animation.lifetime_ticks {
        config.animation.lifetime_ticks = v;
    }

    let theme = &toml.theme;
    if let Some(ref c) = theme.background {
        config.theme.background = c.clone();
    }
    if let Some(ref c) = theme.text {
        config.theme.text = c.clone();
    }
    if let Some(ref c) = theme.header {
        config.theme.header = c.clone();
    }
    if let Some(ref c) = theme.cursor {
        config.theme.cursor = c.clone();
    }
    if let Some(ref c) = theme.sprite {
        config.theme.sprite = c.clone();
    }
    if let Some(ref label) = theme.header_label {
        config.theme.header_label.clone_from(label);
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config<F>(config: &mut EditorConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = env("CANVAS_EDITOR_HOST") {
        config.connection.host = host;
        config.set_source(ConfigSource::Env);
    }
    if let Some(port) = env("CANVAS_EDITOR_PORT").and_then(|v| v.parse::<u16>().ok()) {
        config.connection.port = port;
        config.set_source(ConfigSource::Env);
    }
    if let Some(ms) = env("CANVAS_EDITOR_CONNECT_TIMEOUT").and_then(|v| v.parse::<u64>().ok()) {
        config.connection.connect_timeout = Duration::from_millis(ms);
        config.set_source(ConfigSource::Env);
    }
    if let Some(width) = env("CANVAS_EDITOR_MAX_LINE_WIDTH").and_then(|v| v.parse::<usize>().ok())
    {
        config.grid.max_line_width = width;
        config.set_source(ConfigSource::Env);
    }
    if let Some(ms) = env("CANVAS_EDITOR_TICK_MS").and_then(|v| v.parse::<u64>().ok()) {
        config.animation.tick_interval = Duration::from_millis(ms);
        config.set_source(ConfigSource::Env);
    }
}

// =============================================================================
// CLI Overrides
// =============================================================================

/// Overrides supplied on the command line
///
/// Applied last, after file and environment.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Canvas server host
    pub host: Option<String>,
    /// Canvas server port
    pub port: Option<u16>,
    /// Auto-wrap threshold
    pub max_line_width: Option<usize>,
    /// Animation tick interval in milliseconds
    pub tick_interval_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the host
    #[must_use]
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Override the port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Override the wrap width
    #[must_use]
    pub fn with_max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = Some(width);
        self
    }

    /// Override the tick interval
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = Some(ms);
        self
    }

    /// Apply these overrides to a loaded configuration
    pub fn apply(&self, config: &mut EditorConfig) {
        let mut applied = false;
        if let Some(ref host) = self.host {
            config.connection.host.clone_from(host);
            applied = true;
        }
        if let Some(port) = self.port {
            config.connection.port = port;
            applied = true;
        }
        if let Some(width) = self.max_line_width {
            config.grid.max_line_width = width;
            applied = true;
        }
        if let Some(ms) = self.tick_interval_ms {
            config.animation.tick_interval = Duration::from_millis(ms);
            applied = true;
        }
        if applied {
            config.set_source(ConfigSource::Cli);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EditorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert_eq!(config.connection.address(), "127.0.0.1:5005");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            load_config_with_env(Some(PathBuf::from("/nonexistent/editor.toml")), no_env).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.config_file_path.is_none());
        assert_eq!(config.grid, GridGeometry::default());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_toml(
            r##"
[connection]
host = "canvas.local"
port = 6000

[grid]
max_line_width = 40
line_pitch = 20

[animation]
tick_interval_ms = 33
lifetime_ticks = 10

[theme]
background = "#FFFFFF"
header_label = "Notes"
"##,
        );

        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.connection.address(), "canvas.local:6000");
        assert_eq!(config.grid.max_line_width, 40);
        assert_eq!(config.grid.line_pitch, 20);
        assert_eq!(config.grid.char_width, 8);
        assert_eq!(config.animation.tick_interval, Duration::from_millis(33));
        assert_eq!(config.animation.lifetime_ticks, 10);
        assert_eq!(config.theme.background.as_str(), "#ffffff");
        assert_eq!(config.theme.header_label, "Notes");
        assert_eq!(config.source(), ConfigSource::File);
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_invalid_color_in_file_is_parse_error() {
        let file = write_toml("[theme]\ncursor = \"blue\"\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_pitch_fails_validation() {
        let file = write_toml("[grid]\nline_pitch = 0\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_toml("[connection]\nport = 6000\n[grid]\nmax_line_width = 40\n");
        let env: HashMap<&str, &str> = [
            ("CANVAS_EDITOR_PORT", "7000"),
            ("CANVAS_EDITOR_MAX_LINE_WIDTH", "10"),
        ]
        .into_iter()
        .collect();

        let config = load_config_with_env(Some(file.path().to_path_buf()), |key| {
            env.get(key).map(ToString::to_string)
        })
        .unwrap();

        assert_eq!(config.connection.port, 7000);
        assert_eq!(config.grid.max_line_width, 10);
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_unparseable_env_is_ignored() {
        let config = load_config_with_env(None, |key| {
            (key == "CANVAS_EDITOR_PORT").then(|| "not-a-port".to_string())
        })
        .unwrap();
        assert_eq!(config.connection.port, 5005);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = load_config_with_env(None, |key| {
            (key == "CANVAS_EDITOR_HOST").then(|| "env-host".to_string())
        })
        .unwrap();
        assert_eq!(config.source(), ConfigSource::Env);

        ConfigOverrides::new()
            .with_host("cli-host".to_string())
            .with_tick_interval_ms(20)
            .apply(&mut config);

        assert_eq!(config.connection.host, "cli-host");
        assert_eq!(config.animation.tick_interval, Duration::from_millis(20));
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = EditorConfig::default();
        ConfigOverrides::new().apply(&mut config);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_point_to_cell_truncates_toward_zero() {
        let grid = GridGeometry::default();
        assert_eq!(grid.point_to_cell(34, 58), (0, 1));
        assert_eq!(grid.point_to_cell(0, 0), (-3, -3));
        assert_eq!(grid.point_to_cell(100, 30), (-2, 9));
        assert_eq!(grid.point_to_cell(26, 66), (0, 0));
    }

    #[test]
    fn test_cell_origin() {
        let grid = GridGeometry::default();
        assert_eq!(grid.cell_origin(0, 0), (26, 66));
        assert_eq!(grid.cell_origin(2, 3), (50, 102));
    }

    #[test]
    fn test_config_error_display() {
        let read_err = ConfigError::ReadError {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{read_err}");
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("Failed to read"));
    }
}
