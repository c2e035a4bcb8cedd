// prefs.rs — runtime preferences for stream and file decoding.
//
// Compile-time defaults live in `crate::config`; `Prefs` is the value the CLI
// fills in from its flags and hands to the io layer.

use crate::config::{
    IN_CHUNK_DEFAULT, MAX_PREFIX_LENGTH, NB_WORKERS_DEFAULT, NB_WORKERS_MAX, OUT_CHUNK_DEFAULT,
    WINDOW_CAPACITY_DEFAULT,
};

// ---------------------------------------------------------------------------
// Default worker-count calculation
// ---------------------------------------------------------------------------

/// Returns the default number of decode workers for multi-file runs.
///
/// When the `multithread` feature is enabled, uses the physical core count
/// and spares a fraction of it. Without the feature, always returns 1.
pub fn default_nb_workers() -> usize {
    #[cfg(feature = "multithread")]
    {
        let nb_cores = num_cpus::get_physical();
        let spared = 1 + (nb_cores >> 3);
        if nb_cores <= spared {
            1
        } else {
            nb_cores - spared
        }
    }
    #[cfg(not(feature = "multithread"))]
    {
        1
    }
}

// ---------------------------------------------------------------------------
// Preferences struct
// ---------------------------------------------------------------------------

/// Tunable parameters for [`decode_stream`](super::decode_stream) and the
/// file-level helpers.
#[derive(Clone, Debug)]
pub struct Prefs {
    /// Prefix window capacity of each decoder, at most 64 KiB. Default: 64 KiB.
    pub window_capacity: usize,
    /// Maximum compressed bytes pulled from the source per step. Default: 64 KiB.
    pub in_chunk: usize,
    /// Output buffer size handed to the decoder per call. Default: 256 KiB.
    pub out_chunk: usize,
    /// Dictionary the decoder window is seeded with.
    pub dictionary: Option<Vec<u8>>,
    /// Worker threads for multi-file decoding; 0 = auto-detect.
    pub nb_workers: usize,
    /// Overwrite existing destination files. Default: false.
    pub overwrite: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            window_capacity: WINDOW_CAPACITY_DEFAULT,
            in_chunk: IN_CHUNK_DEFAULT,
            out_chunk: OUT_CHUNK_DEFAULT,
            dictionary: None,
            nb_workers: NB_WORKERS_DEFAULT,
            overwrite: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Preference setters
// ---------------------------------------------------------------------------

impl Prefs {
    /// Creates a new `Prefs` with all defaults applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window capacity, clamped to [1, 64 KiB]. Returns the stored value.
    pub fn set_window_capacity(&mut self, capacity: usize) -> usize {
        self.window_capacity = capacity.clamp(1, MAX_PREFIX_LENGTH);
        self.window_capacity
    }

    /// Sets the input chunk size (at least 1). Returns the stored value.
    pub fn set_in_chunk(&mut self, size: usize) -> usize {
        self.in_chunk = size.max(1);
        self.in_chunk
    }

    /// Sets the output chunk size (at least 1). Returns the stored value.
    pub fn set_out_chunk(&mut self, size: usize) -> usize {
        self.out_chunk = size.max(1);
        self.out_chunk
    }

    /// Sets the worker count, clamped to `NB_WORKERS_MAX`; 0 keeps auto-detect.
    pub fn set_nb_workers(&mut self, nb_workers: usize) -> usize {
        self.nb_workers = nb_workers.min(NB_WORKERS_MAX);
        self.nb_workers
    }

    /// Replaces the dictionary. Returns true if a dictionary is now active.
    pub fn set_dictionary(&mut self, dict: Option<Vec<u8>>) -> bool {
        self.dictionary = dict;
        self.dictionary.is_some()
    }

    /// Enables or disables destination-file overwrite. Returns the new value.
    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        yes
    }

    /// Worker count to actually use: the explicit value, or the default.
    pub fn effective_nb_workers(&self) -> usize {
        if self.nb_workers == 0 {
            default_nb_workers()
        } else {
            self.nb_workers
        }
    }
}
