/// Default values and file locations shared by the config loader and the CLI
pub mod defaults {
    pub const DEFAULT_LANGUAGE: &str = "zh";
    pub const CONFIG_FILE_NAME: &str = "polyprompt.toml";
    pub const CONFIG_DIR: &str = ".polyprompt";
    pub const PREFERENCE_FILE_NAME: &str = "language.toml";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const DEFAULT_NAME_COUNT: usize = 1;
}

/// Constants used while building prompts
pub mod prompts {
    /// Number of syntax-fix rounds the module generator attempts before giving up
    pub const MAX_FIX_ATTEMPTS: u32 = 3;

    /// Separator emitted after every present section
    pub const SECTION_SEPARATOR: &str = "\n\n";

    /// Fence language for JavaScript blocks embedded in prompts
    pub const JS_FENCE: &str = "```javascript";
    pub const JSON_FENCE: &str = "```json";
    pub const FENCE_END: &str = "```";
}

/// Log level names accepted in `[logging] level`
pub mod logging {
    pub const ALLOWED_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
}
