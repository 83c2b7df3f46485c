// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.
//!
//! Parsing is total: any input yields a [`CommitMessage`]. A header that
//! does not match the conventional grammar leaves [`CommitMessage::fields`]
//! empty, and the rule engine reports it; parsing itself never rejects.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Header grammar: `type(scope)!?: subject`, scope optional.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>[A-Za-z]+)(?:\((?P<scope>[^()]*)\))?(?P<bang>!)?: (?P<subject>.*)$")
            .unwrap();

    /// A git trailer line: `Token: value` or `Token #value`.
    static ref TRAILER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[- ]CHANGE|[A-Za-z][A-Za-z0-9-]*)(?:: | #).+$").unwrap();
}

/// Parsed fields of a conventional commit header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    /// Commit type (feat, fix, ...).
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject text after `: `.
    pub subject: String,
    /// Whether the header carries the `!` breaking marker.
    pub bang: bool,
}

/// A blank-line separated part below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The lines of this part. Interior blank lines of a multi-paragraph
    /// body are preserved.
    pub lines: Vec<String>,
    /// 1-based line number of the first line within the raw message.
    pub start_line: usize,
    /// Blank lines between this part and the preceding one.
    pub leading_blanks: usize,
}

/// A structured commit message.
#[derive(Debug, Clone)]
pub struct CommitMessage {
    /// The raw message text.
    pub raw: String,
    /// The header (first line).
    pub header: String,
    /// Header fields, when the header matches the conventional grammar.
    pub fields: Option<HeaderFields>,
    /// Optional body.
    pub body: Option<Block>,
    /// Optional footer (trailers, breaking-change notes).
    pub footer: Option<Block>,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(raw: &str) -> Self {
        let lines: Vec<&str> = raw.lines().collect();
        let header = lines.first().copied().unwrap_or("").to_string();

        let fields = HEADER_REGEX.captures(&header).map(|captures| HeaderFields {
            commit_type: captures["type"].to_string(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            subject: captures["subject"].to_string(),
            bang: captures.name("bang").is_some(),
        });

        let (body, footer) = split_parts(&lines);

        Self {
            raw: raw.to_string(),
            header,
            fields,
            body,
            footer,
        }
    }

    /// Header length in characters (not bytes).
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }

    /// Whether the commit is marked breaking, either via the `!` header
    /// marker or a `BREAKING CHANGE:` footer.
    pub fn is_breaking(&self) -> bool {
        if self.fields.as_ref().is_some_and(|f| f.bang) {
            return true;
        }
        self.footer.as_ref().is_some_and(|f| {
            f.lines
                .iter()
                .any(|l| l.starts_with("BREAKING CHANGE") || l.starts_with("BREAKING-CHANGE"))
        })
    }
}

/// Split the lines below the header into body and footer blocks.
fn split_parts(lines: &[&str]) -> (Option<Block>, Option<Block>) {
    // Last non-blank line; nothing below the header otherwise.
    let Some(end) = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .filter(|&end| end >= 1)
    else {
        return (None, None);
    };

    // First non-blank line after the header.
    let first = match lines[1..=end].iter().position(|l| !l.trim().is_empty()) {
        Some(offset) => 1 + offset,
        None => return (None, None),
    };
    let leading_blanks = first - 1;

    // Start of the trailing paragraph.
    let mut para_start = end;
    while para_start > first && !lines[para_start - 1].trim().is_empty() {
        para_start -= 1;
    }

    let make_block = |from: usize, to: usize, blanks: usize| Block {
        lines: lines[from..=to].iter().map(|l| l.to_string()).collect(),
        start_line: from + 1,
        leading_blanks: blanks,
    };

    if para_start > first && is_trailer_block(&lines[para_start..=end]) {
        // Body followed by a trailer footer.
        let mut body_end = para_start - 1;
        let mut gap = 0;
        while body_end > first && lines[body_end].trim().is_empty() {
            body_end -= 1;
            gap += 1;
        }
        let body = make_block(first, body_end, leading_blanks);
        let footer = make_block(para_start, end, gap);
        (Some(body), Some(footer))
    } else if para_start == first && is_trailer_block(&lines[first..=end]) {
        // A single trailer paragraph directly below the header.
        (None, Some(make_block(first, end, leading_blanks)))
    } else {
        // A trailer run glued to the tail still counts as a footer so the
        // missing blank line can be reported.
        let mut foot_start = end + 1;
        while foot_start > first + 1 && TRAILER_REGEX.is_match(lines[foot_start - 1]) {
            foot_start -= 1;
        }
        if foot_start <= end && !lines[foot_start - 1].trim().is_empty() {
            let body = make_block(first, foot_start - 1, leading_blanks);
            let footer = make_block(foot_start, end, 0);
            (Some(body), Some(footer))
        } else {
            // Everything is body, interior blank lines included.
            (Some(make_block(first, end, leading_blanks)), None)
        }
    }
}

/// Check whether every line of a paragraph is a git trailer or an indented
/// continuation of one.
fn is_trailer_block(lines: &[&str]) -> bool {
    let Some(head) = lines.first() else {
        return false;
    };
    if !TRAILER_REGEX.is_match(head) {
        return false;
    }
    lines[1..]
        .iter()
        .all(|l| TRAILER_REGEX.is_match(l) || l.starts_with(' ') || l.starts_with('\t'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_only() {
        let msg = CommitMessage::parse("feat(orders): add delivery eta endpoint");
        let fields = msg.fields.unwrap();
        assert_eq!(fields.commit_type, "feat");
        assert_eq!(fields.scope, Some("orders".to_string()));
        assert_eq!(fields.subject, "add delivery eta endpoint");
        assert!(!fields.bang);
        assert!(msg.body.is_none());
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_without_scope() {
        let msg = CommitMessage::parse("fix: handle empty cart");
        let fields = msg.fields.unwrap();
        assert_eq!(fields.commit_type, "fix");
        assert_eq!(fields.scope, None);
    }

    #[test]
    fn test_parse_unconventional_header() {
        let msg = CommitMessage::parse("Fix Bug In Payments.");
        assert!(msg.fields.is_none());
        assert_eq!(msg.header, "Fix Bug In Payments.");
    }

    #[test]
    fn test_parse_bang_marker() {
        let msg = CommitMessage::parse("feat(api)!: drop v1 endpoints");
        assert!(msg.fields.as_ref().unwrap().bang);
        assert!(msg.is_breaking());
    }

    #[test]
    fn test_parse_body() {
        let msg = CommitMessage::parse("fix: handle empty cart\n\nGuard the total computation.");
        let body = msg.body.unwrap();
        assert_eq!(body.lines, vec!["Guard the total computation."]);
        assert_eq!(body.start_line, 3);
        assert_eq!(body.leading_blanks, 1);
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_body_and_footer() {
        let msg = CommitMessage::parse(
            "fix: handle empty cart\n\nGuard the total computation.\n\nFixes: #42",
        );
        let body = msg.body.unwrap();
        assert_eq!(body.lines, vec!["Guard the total computation."]);
        let footer = msg.footer.unwrap();
        assert_eq!(footer.lines, vec!["Fixes: #42"]);
        assert_eq!(footer.start_line, 5);
        assert_eq!(footer.leading_blanks, 1);
    }

    #[test]
    fn test_parse_footer_without_body() {
        let msg = CommitMessage::parse("revert: undo cart rewrite\n\nRefs: #7");
        assert!(msg.body.is_none());
        let footer = msg.footer.unwrap();
        assert_eq!(footer.lines, vec!["Refs: #7"]);
        assert_eq!(footer.leading_blanks, 1);
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let msg = CommitMessage::parse(
            "fix: rename totals field\n\nBREAKING CHANGE: field renamed from X to Y",
        );
        assert!(msg.is_breaking());
        assert!(msg.footer.is_some());
    }

    #[test]
    fn test_parse_glued_footer() {
        let msg = CommitMessage::parse("fix: handle empty cart\n\nGuard the total.\nFixes: #42");
        let body = msg.body.unwrap();
        assert_eq!(body.lines, vec!["Guard the total."]);
        let footer = msg.footer.unwrap();
        assert_eq!(footer.lines, vec!["Fixes: #42"]);
        assert_eq!(footer.leading_blanks, 0);
    }

    #[test]
    fn test_parse_body_without_blank_line() {
        let msg = CommitMessage::parse("fix: handle empty cart\nno separator here");
        let body = msg.body.unwrap();
        assert_eq!(body.leading_blanks, 0);
        assert_eq!(body.start_line, 2);
    }

    #[test]
    fn test_parse_multi_paragraph_body() {
        let msg =
            CommitMessage::parse("fix: handle empty cart\n\nFirst paragraph.\n\nSecond paragraph.");
        let body = msg.body.unwrap();
        assert_eq!(
            body.lines,
            vec!["First paragraph.", "", "Second paragraph."]
        );
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_empty_message() {
        let msg = CommitMessage::parse("");
        assert!(msg.fields.is_none());
        assert_eq!(msg.header, "");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_empty_subject() {
        let msg = CommitMessage::parse("feat(core): ");
        let fields = msg.fields.unwrap();
        assert_eq!(fields.subject, "");
    }

    #[test]
    fn test_header_len_counts_chars() {
        let msg = CommitMessage::parse("feat: café");
        assert_eq!(msg.header_len(), 10);
    }

    #[test]
    fn test_multiline_trailer_footer() {
        let msg = CommitMessage::parse(
            "feat: new api\n\nBody text.\n\nBREAKING CHANGE: the response format\n  changed entirely",
        );
        let footer = msg.footer.as_ref().unwrap();
        assert_eq!(footer.lines.len(), 2);
        assert!(msg.is_breaking());
    }
}
