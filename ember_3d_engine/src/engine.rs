/// Ember3D Engine - global facade for engine-wide state
///
/// The engine itself owns very little: cameras, meshes and scenes are plain
/// values owned by the application. What is global is the logger and its
/// severity filter, plus the initialized flag used by the application's
/// setup/teardown sequence. All of it lives in `OnceLock` + `RwLock` statics.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::error::{Error, Result};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

/// Default severity threshold
const DEFAULT_MIN_SEVERITY: LogSeverity = LogSeverity::Info;

/// Internal state structure
struct EngineState {
    initialized: RwLock<bool>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            initialized: RwLock::new(false),
        }
    }
}

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn min_severity_lock() -> &'static RwLock<LogSeverity> {
    MIN_SEVERITY.get_or_init(|| RwLock::new(DEFAULT_MIN_SEVERITY))
}

// ===== PUBLIC API =====

/// Main engine facade
///
/// # Example
///
/// ```no_run
/// use ember_3d_engine::ember3d::Engine;
///
/// Engine::initialize()?;
/// // ... build cameras, meshes and scenes, run the frame loop ...
/// Engine::shutdown();
/// # Ok::<(), ember_3d_engine::ember3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Initialize the engine
    ///
    /// Idempotent: calling it again on an initialized engine succeeds.
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if the state lock is poisoned.
    pub fn initialize() -> Result<()> {
        let state = ENGINE_STATE.get_or_init(EngineState::new);
        let mut initialized = state.initialized.write()
            .map_err(|_| {
                let error = Error::InitializationFailed("Engine state lock poisoned".to_string());
                crate::engine_error!("ember3d::Engine", "{}", error);
                error
            })?;

        if !*initialized {
            *initialized = true;
            crate::engine_info!("ember3d::Engine", "Engine initialized");
        }
        Ok(())
    }

    /// Shutdown the engine
    ///
    /// Safe to call multiple times. `initialize()` may be called again afterwards.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut initialized) = state.initialized.write() {
                if *initialized {
                    *initialized = false;
                    crate::engine_info!("ember3d::Engine", "Engine shut down");
                }
            }
        }
    }

    /// Whether `initialize()` has been called (and not undone by `shutdown()`)
    pub fn is_initialized() -> bool {
        ENGINE_STATE.get()
            .and_then(|state| state.initialized.read().ok().map(|flag| *flag))
            .unwrap_or(false)
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ember_3d_engine::ember3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop every entry whose severity is below `severity`
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = min_severity_lock().write() {
            *lock = severity;
        }
    }

    /// Current severity threshold (defaults to Info)
    pub fn min_severity() -> LogSeverity {
        min_severity_lock().read()
            .map(|lock| *lock)
            .unwrap_or(DEFAULT_MIN_SEVERITY)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! and engine_err! to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if entry.severity < Self::min_severity() {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
