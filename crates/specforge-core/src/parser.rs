use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Non-greedy so each opening tag pairs with the next closing tag.
/// Nested blocks are not supported; an inner `<think>` is ordinary text.
static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<think>(.*?)</think>").unwrap());

/// Separator between consecutive thinking segments in display order.
const THINKING_SEPARATOR: &str = "\n\n---\n\n";

/// A model reply split into its reasoning and the final document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResponse {
    pub cleaned_response: String,
    pub thinking: String,
}

/// Split a raw model reply into thinking segments and the cleaned document.
///
/// `<think>...</think>` blocks are matched case-insensitively and may span
/// multiple lines. Block interiors are trimmed and joined in document order;
/// the cleaned response is the input with every block removed, then trimmed.
/// An opening tag with no matching close is left untouched.
pub fn parse_response(raw: &str) -> ParsedResponse {
    let thinking = THINK_BLOCK
        .captures_iter(raw)
        .map(|caps| caps[1].trim().to_string())
        .collect::<Vec<_>>()
        .join(THINKING_SEPARATOR);

    let cleaned_response = THINK_BLOCK.replace_all(raw, "").trim().to_string();

    ParsedResponse {
        cleaned_response,
        thinking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tags_passes_through_trimmed() {
        let parsed = parse_response("  plain reply, no reasoning \n");
        assert_eq!(parsed.cleaned_response, "plain reply, no reasoning");
        assert_eq!(parsed.thinking, "");
    }

    #[test]
    fn empty_input_yields_empty_outputs() {
        let parsed = parse_response("");
        assert_eq!(parsed.cleaned_response, "");
        assert_eq!(parsed.thinking, "");
    }

    #[test]
    fn single_block_is_extracted() {
        let parsed = parse_response("A<think>B</think>C");
        assert_eq!(parsed.cleaned_response, "AC");
        assert_eq!(parsed.thinking, "B");
    }

    #[test]
    fn block_interior_is_trimmed() {
        let parsed = parse_response("<think>\n  weighing options  \n</think>Done.");
        assert_eq!(parsed.thinking, "weighing options");
        assert_eq!(parsed.cleaned_response, "Done.");
    }

    #[test]
    fn multiple_blocks_join_with_separator() {
        let parsed = parse_response("<think>X</think>mid<think>Y</think>");
        assert_eq!(parsed.thinking, "X\n\n---\n\nY");
        assert_eq!(parsed.cleaned_response, "mid");
    }

    #[test]
    fn tags_match_case_insensitively() {
        let parsed = parse_response("<THINK>upper</Think>body");
        assert_eq!(parsed.thinking, "upper");
        assert_eq!(parsed.cleaned_response, "body");
    }

    #[test]
    fn multiline_block_body() {
        let raw = "<think>step one\nstep two\n\nstep three</think>## Result";
        let parsed = parse_response(raw);
        assert_eq!(parsed.thinking, "step one\nstep two\n\nstep three");
        assert_eq!(parsed.cleaned_response, "## Result");
    }

    #[test]
    fn unmatched_opening_tag_is_left_alone() {
        let raw = "before <think>never closed";
        let parsed = parse_response(raw);
        assert_eq!(parsed.cleaned_response, raw);
        assert_eq!(parsed.thinking, "");
    }

    #[test]
    fn empty_block_contributes_empty_segment() {
        let parsed = parse_response("<think></think>doc<think>real</think>");
        assert_eq!(parsed.thinking, "\n\n---\n\nreal");
        assert_eq!(parsed.cleaned_response, "doc");
    }

    #[test]
    fn text_outside_blocks_is_preserved_exactly() {
        let parsed = parse_response("keep  double  spaces<think>x</think> and\ttabs");
        assert_eq!(parsed.cleaned_response, "keep  double  spaces and\ttabs");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let raw = "<think>a</think>body<THINK>b</THINK>tail";
        let once = parse_response(raw);
        let twice = parse_response(&once.cleaned_response);
        assert_eq!(twice.thinking, "");
        assert_eq!(twice.cleaned_response, once.cleaned_response);
    }

    #[test]
    fn realistic_reply() {
        let raw = "<think>considering options</think>## Overview\nThis spec...";
        let parsed = parse_response(raw);
        assert_eq!(parsed.cleaned_response, "## Overview\nThis spec...");
        assert_eq!(parsed.thinking, "considering options");
    }
}
