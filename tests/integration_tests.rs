//! Integration tests for lexicon resources, rules files and the `aster` binary

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use aster::rules::RuleFile;
use aster::{CanonicalizationConfig, Canonicalizer, ConfigError, Lexicon, LocaleSet};

const ZH_TW: &str = "tests/fixtures/lexicons/zh-TW.json";
const MISSING_KEYWORD: &str = "tests/fixtures/lexicons/missing_keyword.json";
const DOMAIN_RULES: &str = "tests/fixtures/rules/domain.json";

/// Run the `aster` binary with `args`, feeding `stdin`.
fn aster(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_aster"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn aster");
    // Commands that fail early or never read stdin may close the pipe first.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("failed to wait for aster")
}

#[test]
fn test_json_lexicon_loads_and_canonicalizes() {
    let lexicon = Lexicon::from_json_file(Path::new(ZH_TW)).unwrap();
    assert_eq!(lexicon.id(), "zh-TW");
    assert_eq!(lexicon.stages().len(), 3);

    let mut locales = LocaleSet::builtin().unwrap();
    locales.register_lexicon(lexicon).unwrap();
    let pipeline = locales
        .canonicalizer("zh-TW", CanonicalizationConfig::default())
        .unwrap();

    assert_eq!(
        pipeline.canonicalize("模組 測試。\n返回 用戶的名字。"),
        "Module 測試.\nReturn 用戶.名字."
    );
    assert_eq!(pipeline.canonicalize("若 真：\n  返回 「若」。"), "If true:\n  Return \"若\".");
}

#[test]
fn test_json_lexicon_round_trips_through_export() {
    let lexicon = Lexicon::from_json_file(Path::new(ZH_TW)).unwrap();
    let exported = lexicon.to_json_pretty().unwrap();
    assert_eq!(Lexicon::from_json_str("exported", &exported).unwrap(), lexicon);
}

#[test]
fn test_incomplete_lexicon_is_rejected() {
    let err = Lexicon::from_json_file(Path::new(MISSING_KEYWORD)).unwrap_err();
    assert!(
        matches!(err, ConfigError::MissingKeyword { ref locale, kind } if locale == "broken" && kind == "IMPORT"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_rules_file_adds_pattern_stages() {
    let locales = LocaleSet::builtin().unwrap();
    let rules = RuleFile::from_json_file(Path::new(DOMAIN_RULES)).unwrap();
    let builder = Canonicalizer::builder(locales.lexicons().get_or_err("zh-CN").unwrap());
    let pipeline = rules.apply(builder).unwrap().build(locales.stages()).unwrap();

    let names: Vec<&str> = pipeline.stage_names().collect();
    assert_eq!(names[names.len() - 3..], ["domain-policy", "currency", "keywords"]);
    assert_eq!(pipeline.canonicalize("返回 保单 的 金额。"), "Return Policy.金额.");
}

#[test]
fn test_cli_canonicalizes_stdin() {
    let output = aster(&["canon"], "规则 greet(name: Text)：\n  返回 「你好，」。");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Rule greet given name: Text:\n  Return \"你好，\"."
    );
}

#[test]
fn test_cli_keep_quotes_and_skip() {
    let output = aster(
        &["canon", "--keep-quotes", "--skip", "chinese-possessive"],
        "返回 用户的名字 和 「值」。",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Return 用户的名字 和 「值」.");
}

#[test]
fn test_cli_with_json_lexicon() {
    let output = aster(&["canon", "--lexicon", ZH_TW, "--locale", "zh-TW"], "返回 真。");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Return true.");
}

#[test]
fn test_cli_unknown_locale_fails() {
    let output = aster(&["canon", "--locale", "xx-XX"], "返回 1。");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("xx-XX"));
}

#[test]
fn test_cli_unknown_skip_fails() {
    let output = aster(&["canon", "--skip", "chinese-typo"], "返回 1。");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("chinese-typo"));
}

#[test]
fn test_cli_stages_lists_pipeline() {
    let output = aster(&["stages", "--rules", DOMAIN_RULES], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_once(". ").map(|(_, name)| name))
        .collect();
    assert_eq!(names.first(), Some(&"chinese-punctuation"));
    assert_eq!(names.last(), Some(&"keywords"));
    assert!(names.contains(&"domain-policy"));
}

#[test]
fn test_cli_locales_and_check_lexicon() {
    let output = aster(&["locales"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("en-US\t")));
    assert!(stdout.lines().any(|l| l.starts_with("zh-CN\t")));

    let output = aster(&["check-lexicon", ZH_TW], "");
    assert!(output.status.success());

    let output = aster(&["check-lexicon", MISSING_KEYWORD], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("IMPORT"));
}

#[test]
fn test_cli_export_lexicon_is_loadable() {
    let output = aster(&["export-lexicon", "zh-CN"], "");
    assert!(output.status.success());
    let lexicon = Lexicon::from_json_str("stdout", &String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(lexicon.id(), "zh-CN");
}
