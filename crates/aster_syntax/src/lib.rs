//! Literal-aware canonicalization of localized Aster rule sources.
//!
//! Authors write rules in a locale's surface syntax (Simplified Chinese keywords and punctuation). This crate
//! rewrites that text into the canonical English-keyword, ASCII-punctuation IR the downstream parser reads,
//! without ever touching string literal contents.
//!
//! ## Module Structure
//!
//! - `segmenter` - literal / code classification and literal-safe rewrite primitives
//! - `keywords` - identifier-boundary-safe keyword substitution
//! - `stages` - the built-in rewrite stages and user pattern stages
//! - `stage` - the stage contract and the name → factory registry
//! - `pipeline` - the orchestrator ([`Canonicalizer`])
//! - `locale` - locale plugins and [`LocaleSet`]
//!
//! ## Examples
//! ```rust
//! use aster_syntax::{CanonicalizationConfig, LocaleSet};
//!
//! let locales = LocaleSet::builtin().unwrap();
//! let zh = locales.canonicalizer("zh-CN", CanonicalizationConfig::default()).unwrap();
//! assert_eq!(zh.canonicalize("结果为 x + y"), "Return x + y");
//! ```

pub mod config;
pub mod ident;
pub mod keywords;
pub mod locale;
pub mod pipeline;
pub mod segmenter;
pub mod stage;
pub mod stages;

pub use config::CanonicalizationConfig;
pub use keywords::KeywordStage;
pub use locale::{EnUsPlugin, LocalePlugin, LocaleSet, ZhCnPlugin};
pub use pipeline::{Canonicalizer, CanonicalizerBuilder, StageTrace};
pub use segmenter::{DelimiterPair, Segment, SegmentKind, Segmenter};
pub use stage::{RewriteStage, StageContext, StageFactory, StageRegistry};

/// Locale used when none is requested.
pub const DEFAULT_LOCALE: &str = aster_core::lexicon::builtin::ZH_CN;
