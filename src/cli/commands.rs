//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use aster_core::{Direction, Lexicon};
use aster_syntax::{
    CanonicalizationConfig, Canonicalizer, DEFAULT_LOCALE, LocaleSet, SegmentKind, Segmenter,
};

use super::{CliError, CliResult, ExitCode, LocaleArgs};
use crate::rules::RuleFile;

/// Maximum source file size (100 MB) to prevent memory exhaustion
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Arguments of `aster canon`.
#[derive(Debug, Clone, Default)]
pub struct CanonOptions {
    pub file: Option<PathBuf>,
    pub locale: LocaleArgs,
    pub rules: Option<PathBuf>,
    pub skip: Vec<String>,
    pub keep_quotes: bool,
    pub trace: bool,
    pub output: Option<PathBuf>,
}

impl CanonOptions {
    /// The canonicalization config these options describe.
    pub fn config(&self) -> CanonicalizationConfig {
        self.skip
            .iter()
            .fold(CanonicalizationConfig::new(), |config, name| config.with_disabled_stage(name.as_str()))
            .with_normalize_quotes(!self.keep_quotes)
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Read a source file with size validation.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed (doesn't exist, permission denied, etc.)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
/// - The file contents cannot be read as UTF-8
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => read_source(path),
        None => read_capped(io::stdin().lock(), MAX_SOURCE_SIZE),
    }
}

/// Read all of `reader`, failing once it yields more than `limit` bytes.
fn read_capped(reader: impl Read, limit: u64) -> CliResult<String> {
    let mut source = String::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_string(&mut source)
        .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
    if source.len() as u64 > limit {
        return Err(CliError::failure(format!(
            "stdin input is too large (max {} bytes)",
            limit
        )));
    }
    Ok(source)
}

/// The built-in locales, plus `lexicon` when given.
pub fn load_locales(lexicon: Option<&Path>) -> CliResult<LocaleSet> {
    let mut locales = LocaleSet::builtin()?;
    if let Some(path) = lexicon {
        let registered = locales.register_lexicon(Lexicon::from_json_file(path)?)?;
        tracing::debug!(locale = registered.id(), path = %path.display(), "registered lexicon");
    }
    Ok(locales)
}

/// Build the pipeline for `locale`, with the pattern stages of `rules` when given.
pub fn build_pipeline(
    locales: &LocaleSet,
    locale: Option<&str>,
    rules: Option<&Path>,
    config: CanonicalizationConfig,
) -> CliResult<Canonicalizer> {
    let id = locale.unwrap_or(DEFAULT_LOCALE);
    let mut builder = Canonicalizer::builder(locales.lexicons().get_or_err(id)?).with_config(config);
    if let Some(path) = rules {
        builder = RuleFile::from_json_file(path)?.apply(builder)?;
    }
    Ok(builder.build(locales.stages())?)
}

fn warn_unterminated(segmenter: &Segmenter, source: &str, origin: &str) {
    for segment in segmenter.segments(source) {
        if let SegmentKind::Literal { terminated: false, .. } = segment.kind {
            tracing::warn!(origin, offset = segment.range.start, "string literal runs to end of input");
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Canonicalize a file (or stdin) and write the result.
pub fn canonicalize_file(options: &CanonOptions) -> CliResult<ExitCode> {
    let locales = load_locales(options.locale.lexicon.as_deref())?;
    let pipeline = build_pipeline(
        &locales,
        options.locale.locale.as_deref(),
        options.rules.as_deref(),
        options.config(),
    )?;

    let source = read_input(options.file.as_deref())?;
    let origin = options
        .file
        .as_ref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    warn_unterminated(pipeline.segmenter(), &source, &origin);

    if options.trace {
        for step in pipeline.canonicalize_traced(&source) {
            println!("== {} ==", step.stage);
            println!("{}", step.output);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let canonical = pipeline.canonicalize(&source);
    match &options.output {
        Some(path) => {
            fs::write(path, &canonical)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;
            tracing::info!(output = %path.display(), "wrote canonical source");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(canonical.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::failure(format!("Error writing stdout: {}", e)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// List registered lexicons.
pub fn list_locales(lexicon: Option<&Path>) -> CliResult<ExitCode> {
    let locales = load_locales(lexicon)?;
    for lexicon in locales.lexicons().iter() {
        let direction = match lexicon.direction() {
            Direction::Ltr => "LTR",
            Direction::Rtl => "RTL",
        };
        println!("{}\t{}\t{}", lexicon.id(), direction, lexicon.name());
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the resolved pipeline order of a locale.
pub fn list_stages(locale: &LocaleArgs, rules: Option<&Path>) -> CliResult<ExitCode> {
    let locales = load_locales(locale.lexicon.as_deref())?;
    let pipeline = build_pipeline(
        &locales,
        locale.locale.as_deref(),
        rules,
        CanonicalizationConfig::default(),
    )?;
    for (i, name) in pipeline.stage_names().enumerate() {
        println!("{:>2}. {}", i + 1, name);
    }
    Ok(ExitCode::SUCCESS)
}

/// Validate a JSON lexicon.
pub fn check_lexicon(file: &Path) -> CliResult<ExitCode> {
    let lexicon = Lexicon::from_json_file(file)?;
    println!(
        "{}: lexicon `{}` ({}) is valid, {} stage(s)",
        file.display(),
        lexicon.id(),
        lexicon.name(),
        lexicon.stages().len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Print a registered lexicon as JSON.
pub fn export_lexicon(id: &str) -> CliResult<ExitCode> {
    let locales = load_locales(None)?;
    let lexicon = locales.lexicons().get_or_err(id)?;
    println!("{}", lexicon.to_json_pretty()?);
    Ok(ExitCode::SUCCESS)
}

/// Print literal / code segments (debug).
pub fn print_segments(file: &Path, locale: Option<&str>) -> CliResult<ExitCode> {
    let locales = load_locales(None)?;
    let lexicon = locales.lexicons().get_or_err(locale.unwrap_or(DEFAULT_LOCALE))?;
    let segmenter = Segmenter::for_lexicon(&lexicon);
    let source = read_source(file)?;

    for segment in segmenter.segments(&source) {
        let kind = match segment.kind {
            SegmentKind::Code => "code",
            SegmentKind::Literal { terminated: true, .. } => "literal",
            SegmentKind::Literal { terminated: false, .. } => "literal (unterminated)",
        };
        println!(
            "{:>6}..{:<6} {:<22} {:?}",
            segment.range.start,
            segment.range.end,
            kind,
            &source[segment.range.clone()]
        );
    }
    Ok(ExitCode::SUCCESS)
}
