//! Audio codec abstraction
//!
//! Two capability sets live here:
//!
//! - [`StatefulDriver`]: a driver that is brought into a known configuration
//!   through an explicit state machine (`Uninitialized → Configuring → Ready`,
//!   with `Faulted` on transport failure).
//! - [`AudioDac`]: output level control shared by every DAC component.
//!
//! Neither trait says anything about the bus underneath; concrete drivers take
//! their transport (an `embedded_hal::i2c::I2c`) by value at construction.

use crate::config::{AC101_DEFAULT_ADDRESS, DEFAULT_BITS_PER_SAMPLE, DEFAULT_SAMPLE_RATE_HZ};
use crate::VolumePercent;

/// Codec configuration as it arrives from static configuration.
///
/// Fields are kept as raw numbers so that a configuration document can be
/// deserialised without knowing which rates a particular chip supports; the
/// driver validates them in `initialize` / `reconfigure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct CodecConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8, 16, 24 or 32).
    pub bits_per_sample: u8,
    /// 7-bit I²C device address.
    pub address: u8,
}

impl CodecConfig {
    /// Configuration with the given rate and depth at the default address.
    #[must_use]
    pub const fn new(sample_rate: u32, bits_per_sample: u8) -> Self {
        Self {
            sample_rate,
            bits_per_sample,
            address: AC101_DEFAULT_ADDRESS,
        }
    }

    /// Same configuration at a different device address.
    #[must_use]
    pub const fn with_address(self, address: u8) -> Self {
        Self { address, ..self }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ, DEFAULT_BITS_PER_SAMPLE)
    }
}

/// Lifecycle of a [`StatefulDriver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed, nothing written to the device yet.
    #[default]
    Uninitialized,
    /// A register sequence is being written.
    Configuring,
    /// Device mirrors the requested configuration.
    Ready,
    /// A transport write failed; device state is unknown until re-initialised.
    Faulted,
}

impl DriverState {
    /// Short human-readable name, for log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Configuring => "configuring",
            Self::Ready => "ready",
            Self::Faulted => "faulted",
        }
    }
}

/// Driver with an explicit configuration state machine.
///
/// Callers must serialise `initialize` / `reconfigure`; implementations take
/// `&mut self` and hold no interior locking.
pub trait StatefulDriver {
    /// Configuration applied by `initialize` / `reconfigure`.
    type Config;
    /// Error type
    type Error: core::fmt::Debug;

    /// Current lifecycle state.
    fn state(&self) -> DriverState;

    /// Bring the device from any state to `Ready` with `config`.
    ///
    /// This is the only way out of `Faulted`.
    fn initialize(&mut self, config: Self::Config) -> Result<(), Self::Error>;

    /// Re-apply the configuration-dependent part of `initialize`.
    ///
    /// Only valid in `Ready`.
    fn reconfigure(&mut self, config: Self::Config) -> Result<(), Self::Error>;

    /// Returns `true` once the device mirrors its configuration.
    fn is_ready(&self) -> bool {
        self.state() == DriverState::Ready
    }
}

/// Output level control of an audio DAC.
pub trait AudioDac {
    /// Error type
    type Error: core::fmt::Debug;

    /// Set the output volume.
    fn set_volume(&mut self, volume: VolumePercent) -> Result<(), Self::Error>;

    /// Current output volume (the level restored by un-muting).
    fn volume(&self) -> VolumePercent;

    /// Mute or un-mute the outputs without forgetting the volume.
    fn set_mute(&mut self, muted: bool) -> Result<(), Self::Error>;

    /// Returns `true` while muted.
    fn is_muted(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_component_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.sample_rate, 16_000);
        assert_eq!(config.bits_per_sample, 16);
        assert_eq!(config.address, 0x1A);
    }

    #[test]
    fn with_address_keeps_audio_format() {
        let config = CodecConfig::new(48_000, 24).with_address(0x1B);
        assert_eq!(config.sample_rate, 48_000);
        assert_eq!(config.bits_per_sample, 24);
        assert_eq!(config.address, 0x1B);
    }

    #[test]
    fn driver_state_starts_uninitialized() {
        assert_eq!(DriverState::default(), DriverState::Uninitialized);
        assert_eq!(DriverState::Faulted.as_str(), "faulted");
    }
}
