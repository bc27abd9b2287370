//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# charjump configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[labels]
# Symbols used to build jump labels (at least two distinct symbols).
charset = "abcdefghijklmnopqrstuvwxyz"
# Idle timeout for label entry in ms. 0 waits until the prompt closes.
# timeout_ms = 0         # 0-60000

[search]
# Pause after the last keystroke before matches are frozen.
timeout_ms = 800         # 1-60000

[jump]
# Keep the selection anchor and move only the active end.
# extend_selection = false

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
