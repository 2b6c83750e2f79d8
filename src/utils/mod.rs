#[macro_use]
pub mod macros;
#[cfg(feature = "logger")]
pub mod logger;
