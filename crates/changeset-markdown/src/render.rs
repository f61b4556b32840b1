use changeset_core::PackageRelease;

pub const FRONT_MATTER_DELIMITER: &str = "---";
pub const CHANGE_RECORDS_HEADING: &str = "Change records";
pub const NO_CHANGE_PLACEHOLDER: &str = "No change";

/// One `- <message>` line per commit, in the order given.
#[must_use]
pub fn render_history<I, S>(messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .map(|message| format!("- {}", message.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Unformatted changeset text for a single release.
///
/// The package identifier is always quoted: scoped names start with `@`,
/// which is reserved in YAML and would break the front matter otherwise.
#[must_use]
pub fn render_changeset(release: &PackageRelease, history: &str) -> String {
    let heading = if history.is_empty() {
        NO_CHANGE_PLACEHOLDER
    } else {
        CHANGE_RECORDS_HEADING
    };

    let mut output = String::new();
    output.push_str(FRONT_MATTER_DELIMITER);
    output.push('\n');
    output.push_str(&quote(&release.name));
    output.push_str(": ");
    output.push_str(release.bump_type.as_str());
    output.push('\n');
    output.push_str(FRONT_MATTER_DELIMITER);
    output.push_str("\n\n");
    output.push_str(heading);
    output.push('\n');
    output.push_str(history);
    output.push('\n');
    output
}

/// JSON string literal, which is also a valid YAML double-quoted scalar.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}
