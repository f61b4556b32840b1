use serde::{Deserialize, Serialize};

use crate::config::FormatterConfig;

pub const MARKDOWN_PARSER: &str = "markdown";
pub const DEFAULT_PRINT_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProseWrap {
    Always,
    Never,
    #[default]
    Preserve,
}

impl ProseWrap {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Preserve => "preserve",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    Auto,
}

impl EndOfLine {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
            Self::Cr => "cr",
            Self::Auto => "auto",
        }
    }
}

/// Resolved configuration plus the parser the document must be formatted
/// with. The parser always wins over a `parser` key in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub parser: String,
    pub config: FormatterConfig,
}

impl FormatOptions {
    #[must_use]
    pub fn with_parser(mut config: FormatterConfig, parser: &str) -> Self {
        config.extra.shift_remove("parser");
        Self {
            parser: parser.to_string(),
            config,
        }
    }

    #[must_use]
    pub fn markdown(config: FormatterConfig) -> Self {
        Self::with_parser(config, MARKDOWN_PARSER)
    }

    #[must_use]
    pub fn print_width(&self) -> usize {
        self.config.print_width.unwrap_or(DEFAULT_PRINT_WIDTH)
    }

    #[must_use]
    pub fn prose_wrap(&self) -> ProseWrap {
        self.config.prose_wrap.unwrap_or_default()
    }

    #[must_use]
    pub fn end_of_line(&self) -> EndOfLine {
        self.config.end_of_line.unwrap_or_default()
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::markdown(FormatterConfig::default())
    }
}
