use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::Result;
use crate::error::FormatError;
use crate::options::FormatOptions;

/// Name handed to the formatter for stdin input; only its extension matters.
const STDIN_FILEPATH: &str = "changeset.md";

/// A prettier-compatible executable installed in the project.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: PathBuf,
    working_dir: PathBuf,
}

impl ExternalFormatter {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Pipes `source` through the executable. Options are passed as flags and
    /// the executable's own config lookup is disabled, so the resolved
    /// configuration is the only one applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started, exits unsuccessfully
    /// or writes output that is not UTF-8.
    pub async fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        let args = command_args(options);
        debug!(program = %self.program.display(), ?args, "running external formatter");

        let mut child = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        let writer = child.stdin.take().map(|mut stdin| {
            let input = source.as_bytes().to_vec();
            tokio::spawn(async move {
                stdin.write_all(&input).await?;
                stdin.shutdown().await
            })
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| self.spawn_error(source))?;

        let written = match writer {
            Some(writer) => writer.await.unwrap_or_else(|join| Err(std::io::Error::other(join))),
            None => Ok(()),
        };

        // Exit status takes precedence over a broken stdin pipe.
        if !output.status.success() {
            return Err(FormatError::ExternalFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(|source| self.spawn_error(source))?;

        String::from_utf8(output.stdout).map_err(|source| FormatError::ExternalOutput {
            program: self.program.clone(),
            source,
        })
    }

    fn spawn_error(&self, source: std::io::Error) -> FormatError {
        FormatError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

fn kebab_case(key: &str) -> String {
    let mut flag = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            flag.push('-');
            flag.push(c.to_ascii_lowercase());
        } else {
            flag.push(c);
        }
    }
    flag
}

fn push_option(args: &mut Vec<String>, key: &str, value: &serde_json::Value) {
    let flag = kebab_case(key);
    match value {
        serde_json::Value::Bool(true) => args.push(format!("--{flag}")),
        serde_json::Value::Bool(false) => args.push(format!("--no-{flag}")),
        serde_json::Value::Number(n) => {
            args.push(format!("--{flag}"));
            args.push(n.to_string());
        }
        serde_json::Value::String(s) => {
            args.push(format!("--{flag}"));
            args.push(s.clone());
        }
        // overrides, plugin lists and the like have no flag form
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {}
    }
}

pub(crate) fn command_args(options: &FormatOptions) -> Vec<String> {
    let mut args = vec![
        "--stdin-filepath".to_string(),
        STDIN_FILEPATH.to_string(),
        "--parser".to_string(),
        options.parser.clone(),
        "--no-config".to_string(),
    ];

    let config = &options.config;
    if let Some(width) = config.print_width {
        push_option(&mut args, "printWidth", &width.into());
    }
    if let Some(width) = config.tab_width {
        push_option(&mut args, "tabWidth", &width.into());
    }
    if let Some(use_tabs) = config.use_tabs {
        push_option(&mut args, "useTabs", &use_tabs.into());
    }
    if let Some(prose_wrap) = config.prose_wrap {
        push_option(&mut args, "proseWrap", &prose_wrap.as_str().into());
    }
    if let Some(end_of_line) = config.end_of_line {
        push_option(&mut args, "endOfLine", &end_of_line.as_str().into());
    }
    for (key, value) in &config.extra {
        if key.starts_with('$') {
            continue;
        }
        push_option(&mut args, key, value);
    }

    args
}
