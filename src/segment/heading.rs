//! Main-title extraction and per-paragraph sub-heading assignment.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::model::ParagraphRecord;

/// Word tokens for synthesized fallback headings.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word pattern"));

/// Knobs for the sub-heading assignment heuristic.
#[derive(Debug, Clone)]
pub struct HeadingOptions {
    /// Length, in characters, of the snippet used to relocate a
    /// paragraph in the full text.
    pub snippet_length: usize,

    /// How many characters before the located paragraph to inspect for
    /// a heading candidate.
    pub lookback_window: usize,

    /// Maximum word count for an accepted heading candidate.
    pub max_heading_words: usize,

    /// Word count of the synthesized fallback heading.
    pub fallback_heading_words: usize,
}

impl Default for HeadingOptions {
    fn default() -> Self {
        Self {
            snippet_length: 60,
            lookback_window: 400,
            max_heading_words: 10,
            fallback_heading_words: 8,
        }
    }
}

/// Extract the document's main title from its opening lines.
///
/// Takes at most the first `line_limit` lines, accumulating trimmed
/// lines until the first blank one, and joins them with single spaces.
/// Titles in this genre sit in the first few lines before a blank line
/// introduces the letterhead or address block; this is a positional
/// heuristic, not layout analysis.
pub fn extract_main_heading(full_text: &str, line_limit: usize) -> String {
    let mut heading_lines = Vec::new();
    for line in full_text.lines().take(line_limit) {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        heading_lines.push(line);
    }
    heading_lines.join(" ")
}

/// Populate `heading` on every paragraph record, in place.
///
/// Each paragraph is located back in the full text via the first
/// occurrence of its opening snippet, and the last non-empty line in
/// the window immediately before that occurrence becomes the heading
/// candidate; it is accepted only if short and unpunctuated. Otherwise
/// a heading is synthesized from the paragraph's own opening words.
///
/// Known limitation, preserved deliberately: the snippet search finds
/// the *first* occurrence in the document, which may not be the
/// paragraph's own occurrence when its opening text repeats earlier.
pub fn assign_headings(
    full_text: &str,
    paragraphs: &mut [ParagraphRecord],
    options: &HeadingOptions,
) {
    for p in paragraphs.iter_mut() {
        let snippet: String = p.text.chars().take(options.snippet_length).collect();
        let snippet = snippet.trim();
        if snippet.is_empty() {
            p.heading = String::new();
            continue;
        }

        let candidate = full_text
            .find(snippet)
            .and_then(|pos| preceding_line(full_text, pos, options.lookback_window))
            .filter(|cand| is_heading_like(cand, options.max_heading_words));

        p.heading = match candidate {
            Some(cand) => {
                trace!("accepted heading candidate for para {}: {:?}", p.number, cand);
                cand
            }
            None => synthesize_heading(&p.text, options.fallback_heading_words),
        };
    }
}

/// Last non-empty trimmed line within the window before `pos`.
fn preceding_line(full_text: &str, pos: usize, lookback: usize) -> Option<String> {
    let prefix = &full_text[..pos];
    // Window is measured in characters; find the byte offset of the
    // character `lookback` places before the match.
    let start = prefix
        .char_indices()
        .rev()
        .nth(lookback.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let context = if lookback == 0 { "" } else { &prefix[start..] };

    context
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .map(str::to_string)
}

/// Headers are short and unpunctuated; body continuation lines are
/// longer or end mid-sentence-terminated.
fn is_heading_like(candidate: &str, max_words: usize) -> bool {
    candidate.split_whitespace().count() <= max_words && !candidate.ends_with('.')
}

/// Fallback heading: the paragraph's first `word_limit` word tokens,
/// with an ellipsis marker iff more tokens exist.
fn synthesize_heading(text: &str, word_limit: usize) -> String {
    let words: Vec<&str> = WORD.find_iter(text).map(|m| m.as_str()).collect();
    let mut heading = words[..words.len().min(word_limit)].join(" ");
    if words.len() > word_limit {
        heading.push_str("...");
    }
    heading
}
