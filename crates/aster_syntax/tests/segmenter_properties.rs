//! Property tests for the literal segmenter.

use aster_syntax::{DelimiterPair, Segmenter};
use proptest::prelude::*;

fn zh_segmenter() -> Segmenter {
    Segmenter::new([DelimiterPair::ascii(), DelimiterPair::new("「", "」")])
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[「」\"\\\\ab 的。\n]{0,48}"
}

proptest! {
    /// Property: segments are ordered, contiguous and cover the whole text
    #[test]
    fn segments_tile_the_text(text in text_strategy()) {
        let segments = zh_segmenter().segments(&text);
        let mut expected_start = 0;
        for segment in &segments {
            prop_assert_eq!(segment.range.start, expected_start);
            prop_assert!(segment.range.end > segment.range.start);
            expected_start = segment.range.end;
        }
        prop_assert_eq!(expected_start, text.len());
    }

    /// Property: an identity transform reproduces the input
    #[test]
    fn identity_transform_is_lossless(text in text_strategy()) {
        let segmenter = zh_segmenter();
        prop_assert_eq!(segmenter.transform_outside_literals(&text, str::to_string), text);
    }

    /// Property: code spans never change under quote normalization
    #[test]
    fn quote_normalization_keeps_code(text in text_strategy()) {
        let segmenter = zh_segmenter();
        let code = |s: &str| -> String {
            segmenter
                .segments(s)
                .into_iter()
                .filter(|seg| !seg.is_literal())
                .map(|seg| s[seg.range].to_string())
                .collect()
        };
        let normalized = segmenter.canonicalize_quotes(&text, "\"", "\"");
        prop_assert_eq!(code(&normalized), code(&text));
    }

    /// Property: rewriting code spans leaves every literal untouched
    #[test]
    fn literals_survive_code_rewrites(text in text_strategy()) {
        let segmenter = zh_segmenter();
        let literals = |s: &str| -> Vec<String> {
            segmenter
                .segments(s)
                .into_iter()
                .filter(|seg| seg.is_literal())
                .map(|seg| s[seg.range].to_string())
                .collect()
        };
        let rewritten = segmenter.transform_outside_literals(&text, |span| span.replace('的', "."));
        prop_assert_eq!(literals(&rewritten), literals(&text));
    }
}
