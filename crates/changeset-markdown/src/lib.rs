mod bundled;
mod config;
mod error;
mod external;
mod options;
mod render;
mod resolve;

pub use bundled::{MarkdownFormatter, format_markdown};
pub use config::{CONFIG_FILE_NAMES, FormatterConfig, find_config, resolve_config};
pub use error::FormatError;
pub use external::ExternalFormatter;
pub use options::{DEFAULT_PRINT_WIDTH, EndOfLine, FormatOptions, MARKDOWN_PARSER, ProseWrap};
pub use render::{
    CHANGE_RECORDS_HEADING, FRONT_MATTER_DELIMITER, NO_CHANGE_PLACEHOLDER, render_changeset,
    render_history,
};
pub use resolve::{FORMATTER_BINARY, Located, ResolvedFormatter, locate_formatter, resolve_formatter};

pub type Result<T> = std::result::Result<T, FormatError>;
