// cli/constants.rs — program identity, display level and display macros.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "lz4g";
pub const AUTHOR: &str = "the lz4-gradual authors";
pub const LZ4_EXTENSION: &str = ".lz4";

// ── Size multiplier constants ─────────────────────────────────────────────────
pub const KB: u64 = 1 << 10;
pub const MB: u64 = 1 << 20;

// ── Threading-mode label ──────────────────────────────────────────────────────
#[cfg(feature = "multithread")]
pub const IO_MT: &str = "multithread";
#[cfg(not(feature = "multithread"))]
pub const IO_MT: &str = "single-thread";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (downgradable); 3 = non-downgradable; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout
//   display!(...)         → stderr
//   displaylevel!(l, ...) → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output; active in debug builds only.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}
