//! Named text predicates used by the noise classifier.
//!
//! Each bank is an ordered list; callers ask for the first predicate that
//! matches so diagnostics can report which rule fired.

use std::sync::OnceLock;

use regex::Regex;

/// A named test over a fragment's text.
#[derive(Clone, Copy)]
pub struct TextPredicate {
    /// Rule name, for diagnostics
    pub name: &'static str,
    matcher: fn(&str) -> bool,
}

impl TextPredicate {
    /// Whether the text satisfies this predicate.
    pub fn matches(&self, text: &str) -> bool {
        (self.matcher)(text)
    }
}

impl std::fmt::Debug for TextPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPredicate")
            .field("name", &self.name)
            .finish()
    }
}

/// Page numbers, short dates, copyright lines and similar boilerplate.
pub const HEADER_FOOTER: &[TextPredicate] = &[
    TextPredicate {
        name: "page_number",
        matcher: is_page_number,
    },
    TextPredicate {
        name: "short_date",
        matcher: is_short_date,
    },
    TextPredicate {
        name: "copyright",
        matcher: is_copyright,
    },
    TextPredicate {
        name: "confidential",
        matcher: is_confidential,
    },
    TextPredicate {
        name: "rule_line",
        matcher: is_rule_line,
    },
    TextPredicate {
        name: "numeric_marker",
        matcher: is_numeric_marker,
    },
];

/// Version, revision and document-ID stamps.
pub const VERSION_INFO: &[TextPredicate] = &[
    TextPredicate {
        name: "version_tag",
        matcher: is_version_tag,
    },
    TextPredicate {
        name: "revision",
        matcher: is_revision,
    },
    TextPredicate {
        name: "document_id",
        matcher: is_document_id,
    },
    TextPredicate {
        name: "date_stamp",
        matcher: is_date_stamp,
    },
];

/// Table-of-contents lines.
pub const TOC_LINE: &[TextPredicate] = &[
    TextPredicate {
        name: "dot_leaders",
        matcher: has_dot_leaders,
    },
    TextPredicate {
        name: "trailing_page_number",
        matcher: has_trailing_page_number,
    },
];

/// Column headings of revision-history tables.
pub const REVISION_TABLE_KEYWORDS: &[&str] =
    &["version", "date", "remarks", "identifier", "reference"];

/// Words that legitimately precede a number in a heading ("Appendix 3").
const ENUMERATORS: &[&str] = &[
    "chapter", "section", "part", "appendix", "phase", "step", "figure", "table", "volume",
    "annex",
];

/// First predicate in `bank` matching `text`.
pub fn first_match(bank: &'static [TextPredicate], text: &str) -> Option<&'static TextPredicate> {
    bank.iter().find(|p| p.matches(text))
}

/// Whether any predicate in `bank` matches `text`.
pub fn any_match(bank: &[TextPredicate], text: &str) -> bool {
    bank.iter().any(|p| p.matches(text))
}

/// Whether the whole text is a revision-table column keyword.
pub fn is_revision_keyword(text: &str) -> bool {
    let lower = text.trim().trim_end_matches(':').to_lowercase();
    REVISION_TABLE_KEYWORDS.contains(&lower.as_str())
}

/// Lowercase the text and replace digits with `#`, so "Page 3" and
/// "Page 14" compare equal.
pub fn mask_digits(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_digit() { '#' } else { c })
        .collect()
}

fn is_page_number(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(
        &RE,
        r"(?i)^(?:page\s+)?[-–—]?\s*\d{1,4}\s*[-–—]?(?:\s*(?:of|/)\s*\d{1,4})?$",
        text,
    )
}

fn is_short_date(text: &str) -> bool {
    static NUMERIC: OnceLock<Option<Regex>> = OnceLock::new();
    static ISO: OnceLock<Option<Regex>> = OnceLock::new();
    static NAMED: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(&NUMERIC, r"^\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}$", text)
        || regex_matches(&ISO, r"^\d{4}-\d{1,2}-\d{1,2}$", text)
        || regex_matches(
            &NAMED,
            r"(?i)^(?:\d{1,2}\s+)?(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(?:\d{1,2},?\s+)?\d{4}$",
            text,
        )
}

fn is_copyright(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(
        &RE,
        r"(?i)©|\(c\)\s*\d{4}|\bcopyright\b|all rights reserved|™|®",
        text,
    )
}

fn is_confidential(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(&RE, r"(?i)\bconfidential\b", text)
}

fn is_rule_line(text: &str) -> bool {
    let compact: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3 && compact.iter().all(|c| ".-_=*~".contains(*c))
}

/// Short runs of digits and separators: split-off section numbers like
/// "3.1" or "2 - 3".
fn is_numeric_marker(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    text.trim().chars().count() <= 10 && regex_matches(&RE, r"^[\d\s\-/.]+$", text)
}

fn is_version_tag(text: &str) -> bool {
    static TAG: OnceLock<Option<Regex>> = OnceLock::new();
    static WORD: OnceLock<Option<Regex>> = OnceLock::new();
    static TRIPLE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(&TAG, r"(?i)^v\.?\s?\d+(?:\.\d+)+", text)
        || regex_matches(&WORD, r"(?i)^version\s*:?\s*\d+(?:\.\d+)*", text)
        || regex_matches(&TRIPLE, r"^\d+\.\d+\.\d+$", text)
}

fn is_revision(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(&RE, r"(?i)^rev(?:ision|\.)?\s*:?\s*\d+", text)
}

fn is_document_id(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(&RE, r"(?i)^doc(?:ument)?\.?\s*(?:no\b|id\b|number\b|#)", text)
}

fn is_date_stamp(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(
        &RE,
        r"(?i)^(?:date|created|updated|last\s+modified|revised)\s*:",
        text,
    )
}

fn has_dot_leaders(text: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    regex_matches(&RE, r"(?:\.\s?){4,}|(?:-\s?){4,}|[·_]{4,}|…{2,}", text)
}

fn has_trailing_page_number(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return false;
    }

    let last = tokens[tokens.len() - 1];
    if last.len() > 4 || !last.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let before = tokens[tokens.len() - 2]
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if ENUMERATORS.contains(&before.as_str()) {
        return false;
    }

    !has_terminal_punctuation(text)
}

/// Sentence-ending `.`, `!` or `?`: followed by whitespace or end of text
/// and not part of a section number like "1." or "2.3".
fn has_terminal_punctuation(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        if !matches!(c, '.' | '!' | '?') {
            return false;
        }
        let at_boundary = chars.get(i + 1).map_or(true, |n| n.is_whitespace());
        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        at_boundary && !(c == '.' && after_digit)
    })
}

fn regex_matches(cell: &'static OnceLock<Option<Regex>>, pattern: &str, text: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(text.trim()))
}
