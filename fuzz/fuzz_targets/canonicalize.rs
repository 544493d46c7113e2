#![no_main]

use std::sync::LazyLock;

use aster::{CanonicalizationConfig, Canonicalizer, LocaleSet};
use libfuzzer_sys::fuzz_target;

static ZH_CN: LazyLock<Canonicalizer> = LazyLock::new(|| {
    LocaleSet::builtin()
        .and_then(|locales| locales.canonicalizer("zh-CN", CanonicalizationConfig::default()))
        .expect("zh-CN pipeline")
});

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let once = ZH_CN.canonicalize(s);
        // Feed the output back in; canonical text is valid input too
        let _ = ZH_CN.canonicalize(&once);
    }
});
