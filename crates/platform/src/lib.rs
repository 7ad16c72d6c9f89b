//! Hardware Abstraction Layer (HAL) for the home-automation components
//!
//! This crate provides the trait-based capability sets and value types that
//! the concrete components (the `components` crate) are written against, so
//! that they can be developed and tested without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Integration Layer (host framework / firmware main loop)
//!         ↓
//! Components (dew_point, ac101)
//!         ↓
//! Platform HAL (this crate - traits + newtypes)
//!         ↓
//! embedded-hal (I2C transport, delay source)
//! ```
//!
//! # Capabilities
//!
//! - [`Computable`] - pure, stateless derivations (dew point)
//! - [`StatefulDriver`] - drivers with an explicit state machine (AC101 codec)
//! - [`AudioDac`] - volume / mute control of an audio DAC
//!
//! # Features
//!
//! - `std`: Enable standard library support and host-side [`mocks`]
//! - `serde`: Deserialize component configuration
//! - `defmt`: Enable `defmt::Format` derives
//!
//! # Example
//!
//! ```
//! use platform::{CodecConfig, DriverState};
//!
//! let config = CodecConfig::default();
//! assert_eq!(config.sample_rate, 16_000);
//! assert_eq!(config.address, 0x1A);
//! assert_eq!(DriverState::default(), DriverState::Uninitialized);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
// Pedantic lints suppressed for this hardware HAL crate:
#![allow(clippy::doc_markdown)] // hex addresses and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod audio_types;
pub mod codec;
pub mod config;
pub mod sensor;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main capability traits
pub use codec::{AudioDac, CodecConfig, DriverState, StatefulDriver};
pub use sensor::{Computable, InvalidInputError, Quantity, SensorReading};

// Re-export newtypes
pub use audio_types::{BitsPerSample, I2cAddr, OutOfRangeError, VolumePercent};
