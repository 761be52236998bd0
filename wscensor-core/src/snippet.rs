//! Generates a `git filter-repo --file-info-callback` body that runs every
//! committed copy of the workspace file through `wscensor censor`.
//!
//! The ban lists are baked into the callback as command-line arguments, so the
//! rewrite does not depend on whichever config file happens to be discoverable
//! while filter-repo runs.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::config::{CensorConfig, DEFAULT_ID_BYTES};
use crate::errors::CensorError;

/// Path of the workspace file inside a vault.
pub const DEFAULT_TARGET: &str = ".obsidian/workspace.json";

static CALLBACK_TEMPLATE: &str = r#"import subprocess

target = {target | unescaped}.encode()
if filename != target and not filename.endswith(b"/" + target):
    return (filename, mode, blob_id)
contents = value.get_contents_by_identifier(blob_id)
censored = subprocess.run(
    [{argv | unescaped}],
    input=contents,
    stdout=subprocess.PIPE,
    check=True,
).stdout
return (filename, mode, value.insert_file_with_contents(censored))
"#;

/// Where the callback looks and what it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Path of the file to censor, relative to the repository or a vault in it.
    pub target: String,
    /// The `wscensor` executable the callback invokes.
    pub binary: String,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            binary: "wscensor".to_string(),
        }
    }
}

#[derive(Serialize)]
struct CallbackContext {
    target: String,
    argv: String,
}

/// The argument vector the callback runs, binary first.
pub fn censor_command_args(config: &CensorConfig, binary: &str) -> Vec<String> {
    let mut args = vec![
        binary.to_string(),
        "--quiet".to_string(),
        "--no-config".to_string(),
    ];
    // `--flag=value` keeps patterns that start with '-' from being read as flags.
    args.extend(config.file_patterns.iter().map(|p| format!("--pattern={}", p)));
    args.extend(config.banned_words.iter().map(|w| format!("--word={}", w)));
    if config.id_bytes != DEFAULT_ID_BYTES {
        args.push(format!("--id-bytes={}", config.id_bytes));
    }
    args.push("censor".to_string());
    args
}

/// Renders the callback body.
pub fn render_filter_callback(
    config: &CensorConfig,
    options: &SnippetOptions,
) -> Result<String, CensorError> {
    let argv = censor_command_args(config, &options.binary)
        .iter()
        .map(|arg| python_str(arg))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");
    let context = CallbackContext {
        target: python_str(&options.target)?,
        argv,
    };

    let mut tt = TinyTemplate::new();
    tt.add_template("callback", CALLBACK_TEMPLATE)
        .map_err(|e| CensorError::Template(e.to_string()))?;
    tt.render("callback", &context)
        .map_err(|e| CensorError::Template(e.to_string()))
}

/// A JSON string literal is also a valid Python `str` literal.
fn python_str(s: &str) -> Result<String, CensorError> {
    Ok(serde_json::to_string(s)?)
}
