//! Parsing of free-form generated outline text.
//!
//! Generated outlines are unreliable: markdown decoration, mixed bullet
//! characters and conversational filler all show up. The parser normalizes
//! these and never fails. Text without any `Slide N:` / `Section N:` marker
//! yields no items.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::OutlineItem;

/// A line that starts a new section, e.g. `Slide 3: Results`.
static SECTION_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(Slide|Section)\s*(\d+)\s*:\s*(.+)$").unwrap()
});

/// Markdown decoration removed from every line before classification.
const DECORATION_CHARS: &[char] = &['#', '*', '>', '`'];

/// Filler the generator tends to append, e.g. "Would you like me to expand...".
const FOLLOW_UP_PHRASE: &str = "Would you like";

/// What a single cleaned line means to the parser.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Nothing worth keeping.
    Skip,
    /// Start of a new section with the given title.
    Marker(&'a str),
    /// Body content, already formatted.
    Body(String),
}

/// Parser turning generated text into ordered outline items.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineParser;

impl OutlineParser {
    /// Create a new outline parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse generated text into outline items, in the order they appear.
    pub fn parse(&self, text: &str) -> Vec<OutlineItem> {
        let mut items = Vec::new();
        let mut current_title: Option<String> = None;
        let mut current_body: Vec<String> = Vec::new();

        for raw in split_lines(text) {
            let line = clean_line(raw);
            match classify(&line) {
                Line::Skip => {}
                Line::Marker(title) => {
                    if let Some(finished) = current_title.take() {
                        items.push(OutlineItem::new(finished, current_body.join("\n")));
                    }
                    current_title = Some(title.to_string());
                    current_body.clear();
                }
                Line::Body(content) => current_body.push(content),
            }
        }

        if let Some(finished) = current_title {
            items.push(OutlineItem::new(finished, current_body.join("\n")));
        }

        log::debug!("Parsed {} outline items", items.len());
        items
    }
}

/// Parse generated text into outline items.
pub fn parse_outline(text: &str) -> Vec<OutlineItem> {
    OutlineParser::new().parse(text)
}

/// Split on every line boundary: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. The empty piece left inside `\r\n` is a blank line, which the
/// parser skips anyway.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_boundary)
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Remove markdown decoration and trailing whitespace.
fn clean_line(line: &str) -> String {
    let mut cleaned: String = line
        .chars()
        .filter(|c| !DECORATION_CHARS.contains(c))
        .collect();
    cleaned.truncate(cleaned.trim_end().len());
    cleaned
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || line.contains(FOLLOW_UP_PHRASE) {
        return Line::Skip;
    }

    if let Some(caps) = SECTION_MARKER_REGEX.captures(line) {
        let title = caps.get(3).map_or("", |m| m.as_str()).trim();
        return Line::Marker(title);
    }

    let trimmed = line.trim();

    // Bullet characters are only stripped from the start of the line, so an
    // indented "  - sub" keeps its dash as part of the text.
    if trimmed.starts_with('-') {
        let text = line.trim_start_matches('-').trim();
        return bullet("• ", text);
    }

    if trimmed.starts_with(['•', '*']) || line.starts_with(char::is_whitespace) {
        let text = line.trim_start_matches(['•', '*']).trim();
        return bullet("- ", text);
    }

    if trimmed.is_empty() {
        Line::Skip
    } else {
        Line::Body(trimmed.to_string())
    }
}

fn bullet(prefix: &str, text: &str) -> Line<'static> {
    if text.is_empty() {
        Line::Skip
    } else {
        Line::Body(format!("{}{}", prefix, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str) -> OutlineItem {
        OutlineItem::new(title, description)
    }

    #[test]
    fn test_canonical_outline() {
        let text = "Slide 1: Introduction\n\
                    - point one\n\
                    - point two\n\
                    Slide 2: Conclusion\n\
                    Some closing remark.\n";

        assert_eq!(
            parse_outline(text),
            vec![
                item("Introduction", "• point one\n• point two"),
                item("Conclusion", "Some closing remark."),
            ]
        );
    }

    #[test]
    fn test_empty_and_markerless_input() {
        assert!(parse_outline("").is_empty());
        assert!(parse_outline("\n").is_empty());
        assert!(parse_outline("Just some chat.\n- a bullet\n  indented").is_empty());
    }

    #[test]
    fn test_marker_case_insensitive() {
        let items = parse_outline("section 1: X\nbody\nSLIDE 2: Y");
        assert_eq!(items, vec![item("X", "body"), item("Y", "")]);
    }

    #[test]
    fn test_marker_spacing_variants() {
        let items = parse_outline("  Slide3 :   Spaced Out  \nSection 4:Tight");
        assert_eq!(items, vec![item("Spaced Out", ""), item("Tight", "")]);
    }

    #[test]
    fn test_marker_needs_a_number() {
        let items = parse_outline("Slide 1: Real\nSlide: not a marker");
        assert_eq!(items, vec![item("Real", "Slide: not a marker")]);
    }

    #[test]
    fn test_follow_up_filler_is_dropped() {
        let text = "Slide 1: Intro\n- fact\nWould you like me to continue?\nSlide 2: End\n\
                    Let me know. Would you like more slides?";
        let items = parse_outline(text);
        assert_eq!(items, vec![item("Intro", "• fact"), item("End", "")]);
        assert!(items.iter().all(|i| !i.description.contains("Would you like")));
    }

    #[test]
    fn test_markdown_decoration_is_stripped() {
        // "> quoted" leaves a leading space behind, which reads as indentation.
        let text = "## **Slide 1: The `Big` Idea**\n> quoted line\n**bold claim**";
        assert_eq!(
            parse_outline(text),
            vec![item("The Big Idea", "- quoted line\nbold claim")]
        );
    }

    #[test]
    fn test_bullet_styles() {
        let text = "Section 1: Bullets\n\
                    - dash\n\
                    -- double dash\n\
                    • round\n\
                    \x20   indented\n\
                    \tTabbed\n\
                    \x20 - nested\n\
                    plain";
        assert_eq!(
            parse_outline(text),
            vec![item(
                "Bullets",
                "• dash\n• double dash\n- round\n- indented\n- Tabbed\n• - nested\nplain"
            )]
        );
    }

    #[test]
    fn test_indented_bullets_keep_their_marker() {
        let items = parse_outline("Slide 1: T\n  - sub point\n  • round sub\n\t-- tabbed");
        assert_eq!(
            items,
            vec![item("T", "• - sub point\n- • round sub\n• -- tabbed")]
        );
    }

    #[test]
    fn test_star_bullet_loses_star_in_cleanup() {
        // `*` is markdown decoration, so "* item" reaches the classifier as " item".
        let items = parse_outline("Slide 1: T\n* item");
        assert_eq!(items, vec![item("T", "- item")]);
    }

    #[test]
    fn test_empty_bullets_are_skipped() {
        let items = parse_outline("Slide 1: T\n-\n- \n•\n---");
        assert_eq!(items, vec![item("T", "")]);
    }

    #[test]
    fn test_consecutive_markers_give_empty_description() {
        let items = parse_outline("Slide 1: A\nSlide 2: B\nSlide 3: C\n- c");
        assert_eq!(
            items,
            vec![item("A", ""), item("B", ""), item("C", "• c")]
        );
    }

    #[test]
    fn test_preamble_before_first_marker_is_dropped() {
        let items = parse_outline("Here is your outline:\n\nSlide 1: Start\ntext");
        assert_eq!(items, vec![item("Start", "text")]);
    }

    #[test]
    fn test_crlf_and_lone_cr_line_endings() {
        let items = parse_outline("Slide 1: A\r\n- x\r\nSlide 2: B\ry");
        assert_eq!(items, vec![item("A", "• x"), item("B", "y")]);
    }

    #[test]
    fn test_other_line_boundaries() {
        let text = "Slide 1: A\x0b- x\x0cy\u{85}Slide 2: B\u{2028}z\u{2029}w\x1cv\x1du\x1et";
        assert_eq!(
            parse_outline(text),
            vec![item("A", "• x\ny"), item("B", "z\nw\nv\nu\nt")]
        );
    }

    #[test]
    fn test_numbers_are_not_used_for_ordering() {
        let items = parse_outline("Slide 5: Five\nSlide 2: Two");
        assert_eq!(items, vec![item("Five", ""), item("Two", "")]);
    }

    #[test]
    fn test_deterministic() {
        let text = "Slide 1: A\n- x\n  y\nSlide 2: B\nz";
        assert_eq!(parse_outline(text), parse_outline(text));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), Line::Skip);
        assert_eq!(classify("Slide 9: Nine"), Line::Marker("Nine"));
        assert_eq!(classify("- a"), Line::Body("• a".to_string()));
        assert_eq!(classify("• a"), Line::Body("- a".to_string()));
        assert_eq!(classify("  a"), Line::Body("- a".to_string()));
        assert_eq!(classify("  - a"), Line::Body("• - a".to_string()));
        assert_eq!(classify("  • a"), Line::Body("- • a".to_string()));
        assert_eq!(classify("a"), Line::Body("a".to_string()));
    }
}
