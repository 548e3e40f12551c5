//! Splits raw article markup into cleaned, tokenized paragraphs.

use lazy_regex::regex_replace_all;
use serde::Serialize;

use crate::wikitext::runs::{TextRun, tokenize};

/// An ordered sequence of runs making up one paragraph of prose. Paragraphs
/// produced by [`segment_paragraphs`] always contain at least one run; blocks
/// that clean down to nothing are dropped rather than emitted empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }
}

/// Knock the block-level noise out of one paragraph block: citation
/// templates first (so their name does not survive the generic strip), then
/// remaining templates, then HTML-like tags, then whitespace normalisation.
fn clean_block(block: &str) -> String {
    let text = regex_replace_all!(r"\{\{cite.*?\}\}", block, "");
    let text = regex_replace_all!(r"\{\{.*?\}\}", &text, "");
    let text = regex_replace_all!(r"<.*?>", &text, "");
    let text = text.replace('\n', " ");
    let text = regex_replace_all!(r"\s+", &text, " ");
    text.trim().to_string()
}

/// Split the full raw markup into paragraphs, in reading order.
///
/// Blocks are separated by blank lines. A block is skipped when it is empty
/// or when its trimmed content opens with `{{`, since those are template or
/// metadata blocks (the infobox, the short description marker) rather than
/// prose. Surviving blocks are cleaned and tokenized; a block that was pure
/// markup noise tokenizes to nothing and is dropped as well.
pub fn segment_paragraphs(markup: &str) -> Vec<Paragraph> {
    markup
        .split("\n\n")
        .filter(|block| {
            let trimmed = block.trim();
            !trimmed.is_empty() && !trimmed.starts_with("{{")
        })
        .filter_map(|block| {
            let runs = tokenize(&clean_block(block));
            if runs.is_empty() {
                None
            } else {
                Some(Paragraph::new(runs))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wikitext::runs::TextRun;

    #[test]
    fn template_blocks_are_filtered_out() {
        let markup = "{{Infobox software\n|name = Foo\n}}\n\nHello world.\n\n{{stray template}}";
        let paragraphs = segment_paragraphs(markup);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].runs, vec![TextRun::plain("Hello world.")]);
    }

    #[test]
    fn indented_template_block_is_still_filtered() {
        let markup = "  {{Short description|x}}\n\nProse survives.";
        let paragraphs = segment_paragraphs(markup);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].runs, vec![TextRun::plain("Prose survives.")]);
    }

    #[test]
    fn citations_and_tags_are_stripped() {
        let markup = "Widely used.<ref>{{cite web|url=x}}</ref> Still maintained.";
        let paragraphs = segment_paragraphs(markup);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(
            paragraphs[0].runs,
            vec![TextRun::plain("Widely used. Still maintained.")]
        );
    }

    #[test]
    fn newlines_inside_a_block_collapse_to_spaces() {
        let markup = "First line\nsecond line\nthird   line.";
        let paragraphs = segment_paragraphs(markup);
        assert_eq!(
            paragraphs[0].runs,
            vec![TextRun::plain("First line second line third line.")]
        );
    }

    #[test]
    fn block_of_pure_noise_is_dropped() {
        let markup = "Real text.\n\n<div>\n\nMore text.";
        let paragraphs = segment_paragraphs(markup);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].runs, vec![TextRun::plain("Real text.")]);
        assert_eq!(paragraphs[1].runs, vec![TextRun::plain("More text.")]);
    }

    #[test]
    fn block_order_is_reading_order() {
        let markup = "Alpha.\n\nBeta.\n\nGamma.";
        let texts: Vec<String> = segment_paragraphs(markup)
            .iter()
            .map(|p| p.runs[0].content.clone())
            .collect();
        assert_eq!(texts, vec!["Alpha.", "Beta.", "Gamma."]);
    }

    #[test]
    fn formatting_survives_cleaning() {
        let markup = "The ''editor'' was written by '''someone'''.";
        let paragraphs = segment_paragraphs(markup);
        assert_eq!(
            paragraphs[0].runs,
            vec![
                TextRun::plain("The "),
                TextRun::italic("editor"),
                TextRun::plain(" was written by "),
                TextRun::bold("someone"),
                TextRun::plain("."),
            ]
        );
    }

    #[test]
    fn no_markers_means_whole_input_is_prose() {
        let markup = "One block only, no markup.";
        let paragraphs = segment_paragraphs(markup);
        assert_eq!(paragraphs.len(), 1);
    }
}
