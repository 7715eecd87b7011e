//! Logging macros
//!
//! Library code logs through these macros. On the target they forward to
//! `defmt` (RTT transport); on the host they forward to the `log` facade.
//! With neither backend enabled the arguments are type-checked and dropped.
//!
//! Format strings must stay within the subset both backends accept: plain
//! `{}` placeholders over values implementing `Display` and `defmt::Format`.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::trace!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "embedded")))]
        ::log::trace!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "embedded")))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::debug!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "embedded")))]
        ::log::debug!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "embedded")))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::info!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "embedded")))]
        ::log::info!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "embedded")))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::warn!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "embedded")))]
        ::log::warn!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "embedded")))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::error!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "embedded")))]
        ::log::error!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "embedded")))]
        let _ = ::core::format_args!($($arg)*);
    }};
}
