//! Literal segmenter.
//!
//! Splits text into contiguous [`Segment`]s tagged as code or string literal, for several delimiter pairs at once,
//! and offers the two rewrite primitives every stage is built on:
//!
//! - [`Segmenter::transform_outside_literals`]: apply a function to each code span.
//! - [`Segmenter::replace_outside_literals`] / [`Segmenter::replace_outside_literals_with`]: regex replacement over
//!   the whole text, never rewriting inside a literal.
//!
//! ## Rules
//! - A literal opens at a delimiter that is not inside another literal and closes at the next matching closer.
//!   Literals do not nest.
//! - Inside a literal, `\` escapes the next character, so `"a\"b"` is one literal.
//! - An unterminated literal runs to the end of the text.
//! - When two delimiter styles could open at one position, the pair declared first wins.
//!
//! Segmentation never fails: malformed input is classified as well as it can be.

use std::ops::Range;

use aster_core::Lexicon;
use aster_core::lang::punctuation::{self, PunctuationRole};
use regex::{Captures, Regex};

/// An opening and closing string delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    pub open: String,
    pub close: String,
}

impl DelimiterPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The canonical ASCII `"` pair.
    pub fn ascii() -> Self {
        Self::new(
            punctuation::as_str(PunctuationRole::StringQuoteOpen),
            punctuation::as_str(PunctuationRole::StringQuoteClose),
        )
    }
}

/// Classification of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Code,
    Literal {
        /// Index of the opening pair in [`Segmenter::pairs`].
        pair: usize,
        /// `false` when the literal ran to the end of the text without a closer.
        terminated: bool,
    },
}

/// A byte range of the input and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub range: Range<usize>,
}

impl Segment {
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, SegmentKind::Literal { .. })
    }
}

/// Literal-aware scanner over a fixed, ordered set of delimiter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmenter {
    pairs: Vec<DelimiterPair>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            pairs: vec![DelimiterPair::ascii()],
        }
    }
}

impl Segmenter {
    /// Build a segmenter over `pairs`.
    ///
    /// ## Notes
    /// - The ASCII `"` pair is always present; it is prepended when `pairs` lacks it.
    /// - Pairs with an empty opener or closer are ignored.
    pub fn new(pairs: impl IntoIterator<Item = DelimiterPair>) -> Self {
        let mut segmenter = Self::default();
        let ascii = DelimiterPair::ascii();
        let mut pairs: Vec<DelimiterPair> = pairs
            .into_iter()
            .filter(|p| !p.open.is_empty() && !p.close.is_empty())
            .collect();
        if pairs.contains(&ascii) {
            segmenter.pairs.clear();
        }
        segmenter.pairs.append(&mut pairs);
        segmenter.pairs.dedup();
        segmenter
    }

    /// The ASCII pair followed by the lexicon's own string delimiters.
    pub fn for_lexicon(lexicon: &Lexicon) -> Self {
        let (open, close) = lexicon.string_delimiters();
        Self::new([DelimiterPair::ascii(), DelimiterPair::new(open, close)])
    }

    pub fn pairs(&self) -> &[DelimiterPair] {
        &self.pairs
    }

    /// Classify `text` into ordered, contiguous segments.
    ///
    /// ## Returns
    /// - Segments covering every byte of `text`; empty input yields no segments.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut code_start = 0;
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            let opened = self.pairs.iter().enumerate().find(|(_, p)| rest.starts_with(p.open.as_str()));

            let Some((index, pair)) = opened else {
                pos += rest.chars().next().map_or(1, char::len_utf8);
                continue;
            };

            if code_start < pos {
                segments.push(Segment {
                    kind: SegmentKind::Code,
                    range: code_start..pos,
                });
            }
            let (end, terminated) = find_closer(text, pos + pair.open.len(), &pair.close);
            segments.push(Segment {
                kind: SegmentKind::Literal {
                    pair: index,
                    terminated,
                },
                range: pos..end,
            });
            pos = end;
            code_start = end;
        }

        if code_start < text.len() {
            segments.push(Segment {
                kind: SegmentKind::Code,
                range: code_start..text.len(),
            });
        }
        segments
    }

    /// Apply `f` to every code span and splice the results with the literal spans, in order.
    ///
    /// ## Notes
    /// - Literal spans are copied byte for byte.
    /// - `f` sees one span at a time; use [`Segmenter::replace_outside_literals`] for rules that need line
    ///   anchors or look at neighbouring characters.
    pub fn transform_outside_literals(&self, text: &str, mut f: impl FnMut(&str) -> String) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in self.segments(text) {
            let span = &text[segment.range];
            if matches!(segment.kind, SegmentKind::Code) {
                out.push_str(&f(span));
            } else {
                out.push_str(span);
            }
        }
        out
    }

    /// Replace every match of `pattern` that lies entirely outside literals.
    ///
    /// `replacement` supports the `regex` crate's `$1` / `${name}` expansion syntax.
    pub fn replace_outside_literals(&self, text: &str, pattern: &Regex, replacement: &str) -> String {
        self.replace_outside_literals_with(text, pattern, |caps| {
            let mut dst = String::new();
            caps.expand(replacement, &mut dst);
            dst
        })
    }

    /// Like [`Segmenter::replace_outside_literals`], computing each replacement with `f`.
    ///
    /// ## Notes
    /// - The pattern runs over the whole text, so `^` and `$` (in multi-line mode) are real line anchors and a
    ///   closure may inspect characters around the match.
    /// - A match that starts inside a literal is rejected and the search resumes after that literal.
    /// - A match that starts in code but runs into a literal is retried on the text up to the literal's opener, so
    ///   greedy patterns such as `备注.*` still rewrite the code before it. Assertions in that retry first see the
    ///   opener itself; only when the retried match would consume it is the opener treated as the end of the text.
    pub fn replace_outside_literals_with(
        &self,
        text: &str,
        pattern: &Regex,
        mut f: impl FnMut(&Captures<'_>) -> String,
    ) -> String {
        let literals: Vec<Range<usize>> = self
            .segments(text)
            .into_iter()
            .filter(Segment::is_literal)
            .map(|s| s.range)
            .collect();

        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut at = 0;

        while at <= text.len() {
            let Some(caps) = pattern.captures_at(text, at) else {
                break;
            };
            let Some(m) = caps.get(0) else {
                break;
            };

            let caps = if overlaps_any(m.range(), &literals) {
                let Some(literal) = literals.iter().find(|lit| lit.end > m.start()) else {
                    break;
                };
                let confined = if m.start() < literal.start {
                    confined_captures(text, pattern, at, literal.start)
                } else {
                    None
                };
                let Some(confined) = confined else {
                    at = literal.end;
                    continue;
                };
                confined
            } else {
                caps
            };
            let Some(m) = caps.get(0) else {
                break;
            };

            out.push_str(&text[copied..m.start()]);
            out.push_str(&f(&caps));
            copied = m.end();
            at = if m.is_empty() { next_boundary(text, m.end()) } else { m.end() };
        }

        out.push_str(&text[copied..]);
        out
    }

    /// Rewrite every literal's delimiters to `open` / `close`, leaving code untouched.
    ///
    /// ## Notes
    /// - Literals already using `open` / `close` are copied verbatim.
    /// - In a converted literal, a bare `close` inside the body is backslash-escaped so the literal still ends
    ///   where it did; every other body byte is kept.
    /// - An unterminated literal stays unterminated.
    pub fn canonicalize_quotes(&self, text: &str, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in self.segments(text) {
            let span = &text[segment.range.clone()];
            let SegmentKind::Literal { pair, terminated } = segment.kind else {
                out.push_str(span);
                continue;
            };
            let Some(delims) = self.pairs.get(pair) else {
                out.push_str(span);
                continue;
            };
            if delims.open == open && delims.close == close {
                out.push_str(span);
                continue;
            }

            let body_end = if terminated { span.len() - delims.close.len() } else { span.len() };
            let body = &span[delims.open.len()..body_end];

            out.push_str(open);
            push_escaped(&mut out, body, close);
            if terminated {
                out.push_str(close);
            }
        }
        out
    }
}

/// Find the end of a literal whose body starts at `from`.
///
/// Returns the byte offset just past the closer and `true`, or `text.len()` and `false` when unterminated.
fn find_closer(text: &str, from: usize, close: &str) -> (usize, bool) {
    let mut chars = text[from..].char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if text[from + offset..].starts_with(close) {
            return (from + offset + close.len(), true);
        }
    }
    (text.len(), false)
}

/// Copy `body` into `out`, escaping unescaped occurrences of `close`.
fn push_escaped(out: &mut String, body: &str, close: &str) {
    let mut chars = body.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            out.push(c);
            if let Some((_, escaped)) = chars.next() {
                out.push(escaped);
            }
            continue;
        }
        if body[offset..].starts_with(close) {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Search from `at` for a match that ends by `cut`, the start of a literal.
fn confined_captures<'t>(text: &'t str, pattern: &Regex, at: usize, cut: usize) -> Option<Captures<'t>> {
    let window = next_boundary(text, cut).min(text.len());
    let caps = pattern.captures_at(&text[..window], at)?;
    if caps.get(0)?.end() <= cut {
        return Some(caps);
    }
    pattern.captures_at(&text[..cut], at)
}

fn overlaps_any(m: Range<usize>, literals: &[Range<usize>]) -> bool {
    literals.iter().any(|lit| {
        if m.is_empty() {
            lit.start < m.start && m.start < lit.end
        } else {
            m.start < lit.end && lit.start < m.end
        }
    })
}

/// Byte offset of the character after the one starting at `i` (or `i + 1` at the end of the text).
fn next_boundary(text: &str, i: usize) -> usize {
    i + text[i..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zh() -> Segmenter {
        Segmenter::new([DelimiterPair::ascii(), DelimiterPair::new("「", "」")])
    }

    fn kinds(segmenter: &Segmenter, text: &str) -> Vec<(bool, String)> {
        segmenter
            .segments(text)
            .into_iter()
            .map(|s| (s.is_literal(), text[s.range].to_string()))
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(zh().segments("").is_empty());
    }

    #[test]
    fn test_mixed_delimiters() {
        let text = "返回 \"a\" 和 「b」。";
        assert_eq!(
            kinds(&zh(), text),
            vec![
                (false, "返回 ".to_string()),
                (true, "\"a\"".to_string()),
                (false, " 和 ".to_string()),
                (true, "「b」".to_string()),
                (false, "。".to_string()),
            ]
        );
    }

    #[test]
    fn test_literals_do_not_nest() {
        // The ASCII quote inside the bracket literal is plain content.
        let text = "「say \"hi」 x";
        assert_eq!(
            kinds(&zh(), text),
            vec![(true, "「say \"hi」".to_string()), (false, " x".to_string())]
        );
    }

    #[test]
    fn test_unterminated_literal_runs_to_end() {
        let segments = zh().segments("令 x 为 「未结束。");
        let last = segments.last().unwrap();
        assert_eq!(
            last.kind,
            SegmentKind::Literal {
                pair: 1,
                terminated: false
            }
        );
        assert_eq!(last.range.end, "令 x 为 「未结束。".len());
    }

    #[test]
    fn test_escaped_quote_stays_inside_literal() {
        let text = r#""a\"b" c"#;
        assert_eq!(
            kinds(&zh(), text),
            vec![(true, r#""a\"b""#.to_string()), (false, " c".to_string())]
        );
    }

    #[test]
    fn test_ascii_pair_is_prepended() {
        let segmenter = Segmenter::new([DelimiterPair::new("«", "»")]);
        assert_eq!(segmenter.pairs()[0], DelimiterPair::ascii());
        assert_eq!(segmenter.pairs().len(), 2);
        assert_eq!(Segmenter::new([DelimiterPair::ascii()]).pairs().len(), 1);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // Both pairs open with `<`; the first declared wins.
        let segmenter = Segmenter::new([DelimiterPair::new("<", ">"), DelimiterPair::new("<<", ">>")]);
        let segments = segmenter.segments("<<a>>");
        assert_eq!(
            segments[0].kind,
            SegmentKind::Literal {
                pair: 1,
                terminated: true
            }
        );
        assert_eq!(&"<<a>>"[segments[0].range.clone()], "<<a>");
    }

    #[test]
    fn test_transform_outside_literals_skips_literals() {
        let out = zh().transform_outside_literals("的「的」\"的\"的", |s| s.replace('的', "."));
        assert_eq!(out, ".「的」\"的\".");
    }

    #[test]
    fn test_replace_rejects_matches_touching_literals() {
        let re = Regex::new("a b").unwrap();
        let out = zh().replace_outside_literals("a b \"a b\" a「 b」", &re, "X");
        assert_eq!(out, "X \"a b\" a「 b」");
    }

    #[test]
    fn test_greedy_match_stops_at_literal() {
        let re = Regex::new("备注.*").unwrap();
        let out = zh().replace_outside_literals("令 x 为 1 备注 见 「文档」", &re, "");
        assert_eq!(out, "令 x 为 1 「文档」");

        let out = zh().replace_outside_literals("备注 \"a\" 备注 b", &re, "");
        assert_eq!(out, "\"a\" ");
    }

    #[test]
    fn test_match_inside_literal_skips_whole_literal() {
        let re = Regex::new("b").unwrap();
        assert_eq!(zh().replace_outside_literals("「abc」b", &re, "X"), "「abc」X");
    }

    #[test]
    fn test_replace_uses_real_line_anchors() {
        let re = Regex::new(r"(?m)^x$").unwrap();
        // The first line ends at a literal, so `x` there is not alone on its line.
        let out = zh().replace_outside_literals("x\"q\"\nx\n「x」", &re, "Y");
        assert_eq!(out, "x\"q\"\nY\n「x」");
    }

    #[test]
    fn test_replace_with_expansion() {
        let re = Regex::new(r"(\w+)=(\w+)").unwrap();
        let out = zh().replace_outside_literals("a=b \"c=d\"", &re, "$2=$1");
        assert_eq!(out, "b=a \"c=d\"");
    }

    #[test]
    fn test_canonicalize_quotes() {
        let segmenter = zh();
        assert_eq!(
            segmenter.canonicalize_quotes("len(「hello」)", "\"", "\""),
            "len(\"hello\")"
        );
        assert_eq!(segmenter.canonicalize_quotes("\"已是\"", "\"", "\""), "\"已是\"");
        assert_eq!(
            segmenter.canonicalize_quotes("「say \"hi\"」", "\"", "\""),
            r#""say \"hi\"""#
        );
        assert_eq!(segmenter.canonicalize_quotes("「open", "\"", "\""), "\"open");
    }
}
