// Pattern 4: Singleton - lazily constructed, process-lifetime instance
// Demonstrates an initialize-once registry and a printer kept behind it.

use std::convert::Infallible;
use std::sync::{Mutex, OnceLock, PoisonError};

// ============================================================================
// Registry: a slot that is either empty or holds exactly one instance
// ============================================================================

/// Lazily constructs and caches exactly one `T`.
///
/// The slot starts empty. The first successful accessor call stores the
/// instance and every later call returns a reference to that same value.
/// There is no way to reset or replace it.
///
/// `new` is `const`, so a registry can live in a `static` or be owned and
/// passed around explicitly.
pub struct Registry<T> {
    slot: OnceLock<T>,
    // Serializes construction attempts; `slot` alone cannot express a
    // fallible initializer that leaves the slot empty on error.
    construct: Mutex<()>,
}

impl<T> Registry<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            construct: Mutex::new(()),
        }
    }

    /// Returns the instance if it has been constructed. Never constructs.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_constructed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the instance, running `init` first if the slot is empty.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// Returns the instance, running `init` first if the slot is empty.
    ///
    /// If `init` fails the error is returned and the slot stays empty, so a
    /// later call retries construction. Concurrent first callers are
    /// serialized: at most one of them runs `init` at a time, and once one
    /// succeeds the others receive its instance.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(instance) = self.slot.get() {
            return Ok(instance);
        }

        // A panicking initializer poisons the lock but never fills the slot.
        let _guard = self
            .construct
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(instance) = self.slot.get() {
            return Ok(instance);
        }

        let instance = init()?;
        Ok(self.slot.get_or_init(|| instance))
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("slot", &self.slot.get()).finish()
    }
}

// ============================================================================
// Printer: the single process-wide resource
// ============================================================================

pub mod printer {
    use super::Registry;
    use crate::config::PrinterConfig;
    use crate::error::PatternError;
    use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
    use tracing::{debug, info, warn};

    static PRINTER: Registry<Printer> = Registry::new();
    static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    /// A stand-in for a hardware printer.
    ///
    /// Handed out by shared reference, so its state is kept in atomics.
    /// Only [`instance`] and [`instance_with`] can build one:
    ///
    /// ```compile_fail
    /// use js_patterns::printer::Printer;
    /// use js_patterns::PrinterConfig;
    ///
    /// let second = Printer::connect(&PrinterConfig::default());
    /// ```
    #[derive(Debug)]
    pub struct Printer {
        model: String,
        paper_loaded: bool,
        powered: AtomicBool,
        pages: AtomicU64,
    }

    impl Printer {
        /// Construction step. Fails if the configured device is offline.
        pub(super) fn connect(config: &PrinterConfig) -> Result<Printer, PatternError> {
            if !config.online {
                warn!(model = %config.model, "printer is offline");
                return Err(PatternError::construction_failed(
                    format!("printer '{}'", config.model),
                    "device is offline",
                ));
            }

            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            debug!(model = %config.model, "printer connected");

            Ok(Printer {
                model: config.model.clone(),
                paper_loaded: config.paper_loaded,
                powered: AtomicBool::new(false),
                pages: AtomicU64::new(0),
            })
        }

        /// Warm up and check for paper. Calling it again is a no-op.
        pub fn turn_on(&self) {
            if self.powered.swap(true, Ordering::SeqCst) {
                debug!(model = %self.model, "printer already on");
                return;
            }
            if !self.paper_loaded {
                warn!(model = %self.model, "no paper loaded");
            }
            info!(model = %self.model, "printer warmed up");
        }

        pub fn print(&self, document: &str) {
            let page = self.pages.fetch_add(1, Ordering::SeqCst) + 1;
            if !self.is_on() {
                debug!(model = %self.model, "printing while powered down");
            }
            info!(model = %self.model, page, document, "printed");
        }

        pub fn model(&self) -> &str {
            &self.model
        }

        pub fn is_on(&self) -> bool {
            self.powered.load(Ordering::SeqCst)
        }

        pub fn pages_printed(&self) -> u64 {
            self.pages.load(Ordering::SeqCst)
        }
    }

    /// The process-wide printer, built from `PrinterConfig::default()` on
    /// first use.
    pub fn instance() -> Result<&'static Printer, PatternError> {
        PRINTER.get_or_try_init(|| Printer::connect(&PrinterConfig::default()))
    }

    /// Like [`instance`], but constructs from `config` if no printer exists
    /// yet. Once constructed, `config` is ignored.
    pub fn instance_with(config: &PrinterConfig) -> Result<&'static Printer, PatternError> {
        PRINTER.get_or_try_init(|| Printer::connect(config))
    }

    /// Number of printers successfully constructed in this process.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Tests
// ============================================================================
