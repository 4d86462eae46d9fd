//! # polyprompt - Localized prompt composer
//!
//! Command-line front end for `polyprompt-core`. It resolves the output language from
//! `--lang`, the saved preference or `polyprompt.toml`, composes the requested prompt
//! and prints it to stdout. Logs go to stderr so the output can be piped directly into
//! an AI request.
//!
//! ```bash
//! polyprompt --lang en user-message "dark mode toggle" --category THEME
//! polyprompt code-fix --code @broken.js --issue "1:9:Unexpected token ';'" --attempt 2
//! polyprompt name -n 5 --seed 42
//! ```

pub mod cli;
