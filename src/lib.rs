// Design patterns from a JavaScript primer, rewritten in Rust.

use std::sync::Once;

pub mod config;
pub mod error;
pub mod p1_module_pattern;
pub mod p2_revealing_module;
pub mod p3_prototype;
pub mod p4_singleton;

pub use config::{Config, ConfigError, LogConfig, PrinterConfig};
pub use error::PatternError;
pub use p4_singleton::{printer, Registry};

pub mod examples {
    //! # Pattern Quick Reference
    //!
    //! ## Pattern 1: Module Pattern
    //! - Private state and helpers behind one public method (`HtmlChanger`)
    //!
    //! ## Pattern 2: Revealing Module
    //! - Private functions exposed under new names (`Exposer`)
    //!
    //! ## Pattern 3: Prototype
    //! - Shared methods on a plain struct, copies via `Clone` (`Person`)
    //!
    //! ## Pattern 4: Singleton
    //! - Initialize-once `Registry<T>` and the process-wide `printer::instance`
    //!
    //! Run all of them with:
    //! ```bash
    //! cargo run --bin patterns [config.toml]
    //! ```
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Safe to call multiple times; only the first call installs a subscriber.
/// `RUST_LOG` overrides `default_filter` when set.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
