//! Inline formatting runs and the tokenizer that produces them.
//!
//! A cleaned paragraph of wikitext is broken into a flat sequence of
//! [`TextRun`]s, one per styled span. Only the three inline markers that
//! actually matter for article prose are recognised:
//! - bold, `'''text'''`
//! - italic, `''text''`
//! - internal links, `[[target]]` / `[[target|label]]`
//!
//! Everything else passes through as plain text. Link runs only keep the
//! display text; the link target is of no use to a text renderer.

use lazy_regex::regex;
use serde::Serialize;
use std::fmt;

/// How a run of text should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Plain,
    Bold,
    Italic,
    Link,
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunKind::Plain => write!(f, "plain"),
            RunKind::Bold => write!(f, "bold"),
            RunKind::Italic => write!(f, "italic"),
            RunKind::Link => write!(f, "link"),
        }
    }
}

/// A classified span of paragraph text. Runs are owned by the paragraph that
/// produced them and are never mutated after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub kind: RunKind,
    pub content: String,
}

impl TextRun {
    pub fn new<S: Into<String>>(kind: RunKind, content: S) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn plain<S: Into<String>>(content: S) -> Self {
        Self::new(RunKind::Plain, content)
    }

    pub fn bold<S: Into<String>>(content: S) -> Self {
        Self::new(RunKind::Bold, content)
    }

    pub fn italic<S: Into<String>>(content: S) -> Self {
        Self::new(RunKind::Italic, content)
    }

    pub fn link<S: Into<String>>(content: S) -> Self {
        Self::new(RunKind::Link, content)
    }
}

/// A marker match candidate: span of the full match plus the run it yields.
struct Candidate {
    start: usize,
    end: usize,
    kind: RunKind,
    content: String,
}

/// Find the earliest-starting inline marker at or after `cursor`.
///
/// Patterns are tried in a fixed order (bold, italic, link) and a candidate
/// only replaces the current nearest one when it starts strictly earlier, so
/// a `'''` opener is never claimed by the two-quote pattern and ties resolve
/// the same way every time.
fn nearest_marker(text: &str, cursor: usize) -> Option<Candidate> {
    let mut nearest: Option<Candidate> = None;
    let mut consider = |start: usize, end: usize, kind: RunKind, content: &str| {
        if nearest.as_ref().is_none_or(|n| start < n.start) {
            nearest = Some(Candidate {
                start,
                end,
                kind,
                content: content.to_string(),
            });
        }
    };

    if let Some(caps) = regex!(r"'''(.*?)'''").captures_at(text, cursor) {
        let whole = caps.get(0).unwrap();
        consider(whole.start(), whole.end(), RunKind::Bold, &caps[1]);
    }
    if let Some(caps) = regex!(r"''(.*?)''").captures_at(text, cursor) {
        let whole = caps.get(0).unwrap();
        consider(whole.start(), whole.end(), RunKind::Italic, &caps[1]);
    }
    if let Some(caps) = regex!(r"\[\[([^\]|]*)\|?([^\]]*)\]\]").captures_at(text, cursor) {
        let whole = caps.get(0).unwrap();
        // label if one was given, else the target itself
        let content = if caps[2].is_empty() { &caps[1] } else { &caps[2] };
        consider(whole.start(), whole.end(), RunKind::Link, content);
    }

    nearest
}

/// Break `text` into an ordered sequence of runs.
///
/// Single pass, left to right. Each step finds the earliest-starting marker at
/// or after the cursor, emits any plain gap before it, emits the styled run,
/// and jumps past the full matched span. Unterminated markers never match and
/// fall out as literal plain text. The cursor strictly advances every
/// iteration, so the scan always terminates.
pub fn tokenize(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut cursor = 0;

    while cursor < text.len() {
        match nearest_marker(text, cursor) {
            Some(found) => {
                if found.start > cursor {
                    runs.push(TextRun::plain(&text[cursor..found.start]));
                }
                runs.push(TextRun::new(found.kind, found.content));
                cursor = found.end;
            }
            None => {
                runs.push(TextRun::plain(&text[cursor..]));
                break;
            }
        }
    }

    runs
}
