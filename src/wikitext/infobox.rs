//! Bounded pattern extraction for the infobox table and the short
//! description.
//!
//! Both extractors fail soft: an article without the construct yields an
//! empty map or an empty string, never an error. Only the first
//! `{{Infobox software` block is considered; articles carrying a different
//! infobox type (or several) simply produce nothing, which the renderer
//! treats the same as no infobox at all.

use lazy_regex::{regex_captures, regex_replace_all};
use std::collections::HashMap;

/// Remove fully-formed nested `{{...}}` template spans.
fn strip_templates(raw: &str) -> String {
    regex_replace_all!(r"\{\{.*?\}\}", raw, "").into_owned()
}

/// Field value cleaning: strip nested template spans, collapse
/// `[[target|label]]` down to the displayed text, drop trailing
/// `|`-delimited template parameters, and trim.
fn clean_field_value(raw: &str) -> String {
    let value = strip_templates(raw);
    let value = regex_replace_all!(
        r"\[\[([^\]|]*)\|?([^\]]*)\]\]",
        &value,
        |_, target: &str, label: &str| {
            if label.is_empty() {
                target.to_string()
            } else {
                label.to_string()
            }
        }
    );
    let value = value.as_ref();
    let value = match value.find('|') {
        Some(pipe) => &value[..pipe],
        None => value,
    };
    value.trim().to_string()
}

/// Pull the flat key/value table out of the first `{{Infobox software` block.
///
/// The block runs from the marker to the first `}}` after it. Each line
/// containing a `=` is split at the first `=` (anything after a later `=`
/// belongs to the value); lines where either side trims to nothing are
/// skipped. Field names lose their leading `|`. A key appearing twice keeps
/// the later value.
pub fn extract_infobox(markup: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    let Some((_, body)) = regex_captures!(r"(?s)\{\{Infobox software(.*?)\}\}", markup) else {
        return fields;
    };

    for line in body.lines() {
        let Some((raw_key, raw_value)) = line.split_once('=') else {
            continue;
        };
        let key = raw_key.trim();
        let value = raw_value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        let key = key.strip_prefix('|').unwrap_or(key);
        fields.insert(key.to_string(), clean_field_value(value));
    }

    fields
}

/// Capture the text of the first `{{Short description|...}}` marker, with any
/// nested template spans removed. Returns the empty string when the article
/// has no such marker.
pub fn extract_description(markup: &str) -> String {
    match regex_captures!(r"\{\{Short description\|(.*?)\}\}", markup) {
        Some((_, text)) => strip_templates(text).trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infobox_fields_round_trip() {
        let markup = "{{Infobox software\n|name = Foo\n|developer = [[Bar|Baz]]\n}}";
        let fields = extract_infobox(markup);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("name").map(String::as_str), Some("Foo"));
        assert_eq!(fields.get("developer").map(String::as_str), Some("Baz"));
    }

    #[test]
    fn no_infobox_is_empty() {
        assert!(extract_infobox("Just some prose, nothing else.").is_empty());
    }

    #[test]
    fn other_infobox_types_are_ignored() {
        let markup = "{{Infobox person\n|name = Someone\n}}";
        assert!(extract_infobox(markup).is_empty());
    }

    #[test]
    fn value_keeps_text_after_second_equals() {
        let markup = "{{Infobox software\n|website = a=b\n}}";
        let fields = extract_infobox(markup);
        assert_eq!(fields.get("website").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn duplicate_key_keeps_last_value() {
        let markup = "{{Infobox software\n|name = First\n|name = Second\n}}";
        let fields = extract_infobox(markup);
        assert_eq!(fields.get("name").map(String::as_str), Some("Second"));
    }

    #[test]
    fn value_truncates_trailing_template_parameters() {
        let markup = "{{Infobox software\n|written = Rust | extra = dropped\n}}";
        let fields = extract_infobox(markup);
        // everything after the surviving pipe is a template parameter, not value text
        assert_eq!(fields.get("written").map(String::as_str), Some("Rust"));
    }

    #[test]
    fn unlabelled_link_keeps_target() {
        let markup = "{{Infobox software\n|language = [[Rust]]\n}}";
        let fields = extract_infobox(markup);
        assert_eq!(fields.get("language").map(String::as_str), Some("Rust"));
    }

    #[test]
    fn lines_without_equals_are_skipped() {
        let markup = "{{Infobox software\n|name = Foo\njust a stray line\n}}";
        let fields = extract_infobox(markup);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn description_basic() {
        let markup = "{{Short description|A test framework}}\n\nSome prose.";
        assert_eq!(extract_description(markup), "A test framework");
    }

    #[test]
    fn description_missing_is_empty() {
        assert_eq!(extract_description("No markers here."), "");
    }

    #[test]
    fn description_capture_stops_at_first_close() {
        let markup = "{{Short description|Text editor}}\n{{Short description|Other}}";
        assert_eq!(extract_description(markup), "Text editor");
    }

    #[test]
    fn description_keeps_pipes_in_text() {
        let markup = "{{Short description|Either this | or that}}";
        assert_eq!(extract_description(markup), "Either this | or that");
    }

    #[test]
    fn second_infobox_block_is_ignored() {
        let markup =
            "{{Infobox software\n|name = First\n}}\n\n{{Infobox software\n|name = Second\n}}";
        let fields = extract_infobox(markup);
        assert_eq!(fields.get("name").map(String::as_str), Some("First"));
    }
}
