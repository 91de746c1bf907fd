//! Markdown rendering of a document outline.

use crate::model::{HeadingLevel, ParseResult};

/// Render the title as `#` and outline entries as `##`/`###` headings,
/// each suffixed with its page number.
pub fn to_markdown(result: &ParseResult) -> String {
    let mut output = String::new();

    if result.has_title() {
        output.push_str("# ");
        output.push_str(&result.title);
        output.push_str("\n\n");
    }

    for entry in &result.outline {
        let marker = match entry.level {
            HeadingLevel::H1 => "##",
            HeadingLevel::H2 => "###",
        };
        output.push_str(&format!("{} {} (p. {})\n", marker, entry.text, entry.page));
    }

    output.trim_end().to_string()
}
