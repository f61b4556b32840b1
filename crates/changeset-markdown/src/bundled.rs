use crate::Result;
use crate::options::{EndOfLine, FormatOptions, ProseWrap};
use crate::render::FRONT_MATTER_DELIMITER;

/// Formatter compiled into the binary, used when the project has no formatter
/// of its own installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// # Errors
    ///
    /// Never fails; the signature matches the external formatter.
    #[allow(clippy::unused_async)]
    pub async fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        Ok(format_markdown(source, options))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Block {
    Paragraph(Vec<String>),
    List(Vec<String>),
    Heading(String),
    Code(Vec<String>),
}

/// Normalizes a markdown document with front matter.
#[must_use]
pub fn format_markdown(source: &str, options: &FormatOptions) -> String {
    let line_ending = line_ending_for(options.end_of_line(), source);
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");

    let (front_matter, body) = split_front_matter(&normalized);

    let mut lines: Vec<String> = Vec::new();
    if let Some(front_matter) = front_matter {
        lines.push(FRONT_MATTER_DELIMITER.to_string());
        lines.extend(front_matter.iter().map(|line| line.trim_end().to_string()));
        lines.push(FRONT_MATTER_DELIMITER.to_string());
    }

    let blocks = parse_blocks(body);
    for block in &blocks {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        render_block(block, options, &mut lines);
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut output = lines.join(line_ending);
    output.push_str(line_ending);
    output
}

fn line_ending_for(end_of_line: EndOfLine, source: &str) -> &'static str {
    match end_of_line {
        EndOfLine::Lf => "\n",
        EndOfLine::Crlf => "\r\n",
        EndOfLine::Cr => "\r",
        EndOfLine::Auto => match source.find(['\r', '\n']) {
            Some(pos) if source[pos..].starts_with("\r\n") => "\r\n",
            Some(pos) if source[pos..].starts_with('\r') => "\r",
            _ => "\n",
        },
    }
}

fn split_front_matter(content: &str) -> (Option<Vec<&str>>, Vec<&str>) {
    let lines: Vec<&str> = content.split('\n').collect();

    if lines.first().map(|line| line.trim_end()) != Some(FRONT_MATTER_DELIMITER) {
        return (None, lines);
    }

    match lines
        .iter()
        .skip(1)
        .position(|line| line.trim_end() == FRONT_MATTER_DELIMITER)
    {
        Some(offset) => {
            let closing = offset + 1;
            (
                Some(lines[1..closing].to_vec()),
                lines[closing + 1..].to_vec(),
            )
        }
        None => (None, lines),
    }
}

fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// `standalone` is true only for a line with blank lines on both sides; a
/// marker run anywhere else is a list item, not a thematic break.
fn list_item(line: &str, standalone: bool) -> Option<String> {
    let indent = &line[..line.len() - line.trim_start().len()];
    let rest = line.trim_start();
    let mut chars = rest.chars();
    let marker = chars.next()?;
    if !matches!(marker, '-' | '*' | '+') {
        return None;
    }
    let content = chars.as_str();
    if !(content.is_empty() || content.starts_with(' ') || content.starts_with('\t')) {
        return None;
    }
    if standalone && is_thematic_break(rest, marker) {
        return None;
    }
    Some(format!("{indent}- {}", content.trim()).trim_end().to_string())
}

/// Three or more of the same marker, optionally separated by whitespace.
fn is_thematic_break(line: &str, marker: char) -> bool {
    let mut count = 0;
    for c in line.chars() {
        if c == marker {
            count += 1;
        } else if !c.is_whitespace() {
            return false;
        }
    }
    count >= 3
}

fn parse_blocks(lines: Vec<&str>) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;
    let mut iter = lines.into_iter().peekable();

    while let Some(raw) = iter.next() {
        let line = raw.trim_end();

        if line.is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        if is_fence(line) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            let fence = line.trim_start().chars().take(3).collect::<String>();
            let mut code = vec![line.to_string()];
            for inner in iter.by_ref() {
                let inner = inner.trim_end();
                code.push(inner.to_string());
                if inner.trim_start().starts_with(&fence) {
                    break;
                }
            }
            blocks.push(Block::Code(code));
            continue;
        }

        let standalone =
            current.is_none() && iter.peek().is_none_or(|next| next.trim().is_empty());
        if let Some(item) = list_item(line, standalone) {
            match &mut current {
                Some(Block::List(items)) => items.push(item),
                _ => {
                    if let Some(block) = current.take() {
                        blocks.push(block);
                    }
                    current = Some(Block::List(vec![item]));
                }
            }
            continue;
        }

        if line.trim_start().starts_with('#') {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            blocks.push(Block::Heading(line.trim().to_string()));
            continue;
        }

        match &mut current {
            Some(Block::List(items)) => items.push(format!("  {}", line.trim())),
            Some(Block::Paragraph(text)) => text.push(line.trim().to_string()),
            Some(Block::Code(code)) => code.push(line.to_string()),
            Some(Block::Heading(_)) | None => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(if indent_width(line) >= 4 {
                    Block::Code(vec![line.to_string()])
                } else {
                    Block::Paragraph(vec![line.trim().to_string()])
                });
            }
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

fn render_block(block: &Block, options: &FormatOptions, out: &mut Vec<String>) {
    match block {
        Block::Paragraph(text) => match options.prose_wrap() {
            ProseWrap::Preserve => out.extend(text.iter().cloned()),
            ProseWrap::Never => out.push(text.join(" ")),
            ProseWrap::Always => out.extend(wrap_words(&text.join(" "), options.print_width())),
        },
        Block::List(items) => out.extend(items.iter().cloned()),
        Block::Heading(heading) => out.push(heading.clone()),
        Block::Code(code) => out.extend(code.iter().cloned()),
    }
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
