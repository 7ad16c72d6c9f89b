//! X-Powers AC101 audio codec
//!
//! The AC101 is a low-power stereo codec with an I²C control port and an I²S
//! audio interface. This module only drives the control port: it brings the
//! chip out of reset, applies the requested sample rate and word length, and
//! controls the output paths.
//!
//! ```rust,ignore
//! use components::Ac101;
//! use platform::{CodecConfig, StatefulDriver};
//!
//! let mut codec = Ac101::new(i2c, delay);
//! codec.initialize(CodecConfig::new(44_100, 16))?;
//! codec.set_mode(CodecMode::Dac)?;
//! ```

mod driver;
mod register_map;
pub mod registers;

pub use driver::{Ac101, CodecError, CodecMode, DEFAULT_VOLUME, INITIAL_MODE};
pub use register_map::RegisterMap;
pub use registers::{Register, SampleRate};
