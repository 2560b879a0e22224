//! Generated lexers for the JavaScript family and for JSON.
//!
//! Each language module bundles its generated tables, its token kind enum and
//! a shared [`Grammar`](tm_lexer_core::Grammar) singleton, and exposes a
//! `lexer(source, errors)` constructor on top of the core runtime:
//!
//! - [`js`]: four lexer modes for the regular expression and template literal
//!   ambiguities, plus a [`js::Tokenizer`] that picks the mode itself.
//! - [`json`]: a single mode and lazily decoded scalar values.
//!
//! Libraries never install a tracing subscriber; binaries and tests may call
//! [`init_tracing`].

pub mod js;
pub mod json;

use std::sync::Once;

pub use tm_lexer_core::{
    ErrorHandler, IgnoreErrors, LexError, LexErrorKind, Span, Token, TokenKind, UnknownState,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and nothing after the first call.
///
/// ```text
/// RUST_LOG=tm_lexer_core=trace cargo test -p tm_lexer
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
