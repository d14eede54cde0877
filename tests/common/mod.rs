// Shared helpers for the integration tests

use std::sync::Once;

use holc::{LexerConfig, SyntaxError, SyntaxTree, Token};

static INIT: Once = Once::new();

/// Install a test logger once per test binary.
pub fn setup_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

#[allow(dead_code)]
pub fn lex(source: &str) -> Vec<Token> {
    setup_logging();
    holc::analyze(source)
}

#[allow(dead_code)]
pub fn parse(source: &str) -> Result<SyntaxTree, SyntaxError> {
    setup_logging();
    holc::parse_source(source, &LexerConfig::default())
}

#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}
