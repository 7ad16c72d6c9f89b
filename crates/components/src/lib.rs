//! Home-automation components
//!
//! Concrete components written against the [`platform`] capability traits.
//!
//! # Components
//!
//! - [`dew_point`] - dew point derived from a temperature and a relative
//!   humidity sensor (Magnus-Tetens approximation)
//! - [`ac101`] - X-Powers AC101 audio codec, configured over I²C
//!
//! # Dependency Injection
//!
//! Nothing is looked up by name. The integration layer resolves its sensors
//! and bus handles and passes them in directly:
//!
//! ```rust,ignore
//! let mut codec = Ac101::new(i2c, delay);
//! codec.initialize(CodecConfig::default())?;
//!
//! let mut dew_point = DewPointSensor::new(DewPointConfig::default());
//! dew_point.push(SensorReading::temperature(21.5, now_ms));
//! dew_point.push(SensorReading::humidity(48.0, now_ms));
//! let state = dew_point.poll();
//! ```
//!
//! # Features
//!
//! - `defmt` - log through defmt (hardware builds)
//! - `tracing` - log through tracing (host builds)
//! - `serde` - deserialize component configuration
//! - `std` - standard library support

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)]
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

// Must come first: the log macros are textually scoped.
#[macro_use]
mod fmt;

pub mod ac101;
pub mod dew_point;

// Re-export key types
pub use ac101::{Ac101, CodecError, CodecMode, RegisterMap};
pub use dew_point::{
    DewPointCalculator, DewPointConfig, DewPointResult, DewPointSensor, MagnusCoefficients,
    UnavailableReason,
};
