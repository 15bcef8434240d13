//! Crate-internal logging macros.
//!
//! Messages go to `defmt` when the `defmt` feature is enabled, otherwise to
//! `tracing` on `std` builds. Without either backend they compile to nothing.

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "defmt")))]
        tracing::info!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "defmt")))]
        tracing::debug!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use info;
