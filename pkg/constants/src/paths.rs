//! Filesystem path constants.

// ─── secretsctl ───────────────────────────────────────────────────────────

/// Config file name under the user config directory (`~/.config/secretsctl/`).
pub const CLI_CONFIG_DIR: &str = "secretsctl";
pub const CLI_CONFIG_FILE: &str = "config.yaml";

/// Log file name used by `secretsctl panel`, created in the temp directory.
pub const PANEL_LOG_FILE: &str = "secretsctl-panel.log";

// ─── secrets-ui ───────────────────────────────────────────────────────────

/// Default config file path for the web UI server.
pub const DEFAULT_UI_CONFIG: &str = "/etc/secrets-ui/config.yaml";

/// Environment variable overriding [`DEFAULT_UI_CONFIG`].
pub const UI_CONFIG_ENV: &str = "SECRETS_UI_CONFIG";
