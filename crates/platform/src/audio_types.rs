//! Audio domain newtypes for compile-time safety.
//!
//! These zero-cost abstractions prevent common errors:
//! - `VolumePercent`: clamps 0–100, prevents register overflow
//! - `BitsPerSample`: only the four word lengths an I²S codec can be asked for
//! - `I2cAddr`: 7-bit address outside the I²C reserved ranges

use thiserror_no_std::Error;

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("value {value} outside valid range {min}..={max}")]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

// ── VolumePercent ────────────────────────────────────────────────────────────

/// Volume as a percentage, clamped to 0–100.
///
/// Wraps a `u8` with the invariant `0 <= value <= 100`.
/// Construct with [`VolumePercent::new`] (clamping) or
/// [`VolumePercent::try_new`] (fallible, strict).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct VolumePercent(u8);

impl VolumePercent {
    /// Silence.
    pub const MIN: Self = Self(0);

    /// Full scale.
    pub const MAX: Self = Self(100);

    /// Create a `VolumePercent`, clamping values above 100 to 100.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Create a `VolumePercent`, returning an error if `value > 100`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value > 100`.
    pub fn try_new(value: u8) -> Result<Self, OutOfRangeError> {
        if value > 100 {
            Err(OutOfRangeError {
                value: u32::from(value),
                min: 0,
                max: 100,
            })
        } else {
            Ok(Self(value))
        }
    }

    /// Return the inner volume value (0–100).
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Scale the percentage onto a `0..=full_scale` register field.
    ///
    /// Rounds to nearest, so 100 % always lands exactly on `full_scale`.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // max: 100 * 255 + 50 < u16::MAX
    pub fn to_steps(self, full_scale: u8) -> u8 {
        let scaled = (u16::from(self.0) * u16::from(full_scale) + 50) / 100;
        // scaled <= full_scale by construction
        scaled as u8
    }

    /// Inverse of [`to_steps`](Self::to_steps): map a register field back to a percentage.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)] // full_scale > 0 checked; max 255 * 100 fits u16
    pub fn from_steps(steps: u8, full_scale: u8) -> Self {
        if full_scale == 0 {
            return Self::MIN;
        }
        let steps = steps.min(full_scale);
        let half = u16::from(full_scale) / 2;
        let pct = (u16::from(steps) * 100 + half) / u16::from(full_scale);
        Self::new(pct as u8)
    }
}

// ── BitsPerSample ────────────────────────────────────────────────────────────

/// I²S word length requested from a codec.
///
/// Only the four lengths a host I²S peripheral can be configured for are
/// representable; anything else is rejected at configuration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BitsPerSample {
    /// 8-bit samples.
    Bits8 = 8,
    /// 16-bit samples (CD quality, default).
    #[default]
    Bits16 = 16,
    /// 24-bit samples.
    Bits24 = 24,
    /// 32-bit samples.
    Bits32 = 32,
}

impl BitsPerSample {
    /// All supported word lengths, shortest first.
    pub const ALL: [Self; 4] = [Self::Bits8, Self::Bits16, Self::Bits24, Self::Bits32];

    /// Word length in bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BitsPerSample {
    type Error = OutOfRangeError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Self::Bits8),
            16 => Ok(Self::Bits16),
            24 => Ok(Self::Bits24),
            32 => Ok(Self::Bits32),
            other => Err(OutOfRangeError {
                value: u32::from(other),
                min: 8,
                max: 32,
            }),
        }
    }
}

// ── I2cAddr ──────────────────────────────────────────────────────────────────

/// I2C 7-bit device address.
///
/// ## Reserved I2C addresses (I2C specification):
/// - 0x00–0x07: reserved (general call, CBUS, etc.)
/// - 0x78–0x7F: reserved (10-bit address prefix, device ID, etc.)
///
/// ## Usage:
/// ```rust
/// use platform::audio_types::I2cAddr;
///
/// // AC101 codec, fixed in silicon
/// let codec = I2cAddr::try_new(0x1A).unwrap();
/// assert_eq!(codec.get(), 0x1A);
/// assert!(I2cAddr::try_new(0x7C).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct I2cAddr(u8);

impl I2cAddr {
    /// Create an I2C address without checking reserved ranges.
    ///
    /// Prefer [`try_new`][Self::try_new] for addresses that come from
    /// configuration. Use this only when the address is a known hardware-fixed
    /// constant.
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    /// Create an I2C address, rejecting I2C-reserved ranges.
    ///
    /// Reserved: 0x00–0x07 (general call etc.) and 0x78–0xFF (10-bit prefix,
    /// and anything that does not fit in 7 bits).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `addr <= 0x07` or `addr >= 0x78`.
    pub fn try_new(addr: u8) -> Result<Self, OutOfRangeError> {
        if addr <= 0x07 || addr >= 0x78 {
            Err(OutOfRangeError {
                value: u32::from(addr),
                min: 0x08,
                max: 0x77,
            })
        } else {
            Ok(Self(addr))
        }
    }

    /// Return the 7-bit I2C address.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bits_per_sample_round_trips_supported_lengths() {
        for bits in BitsPerSample::ALL {
            assert_eq!(BitsPerSample::try_from(bits.bits()).unwrap(), bits);
        }
    }

    #[test]
    fn bits_per_sample_rejects_twenty_bits() {
        let err = BitsPerSample::try_from(20).unwrap_err();
        assert_eq!(err.value, 20);
    }

    #[test]
    fn bits_per_sample_default_is_sixteen() {
        assert_eq!(BitsPerSample::default(), BitsPerSample::Bits16);
    }

    #[test]
    fn volume_steps_hit_both_ends() {
        assert_eq!(VolumePercent::MAX.to_steps(63), 63);
        assert_eq!(VolumePercent::MIN.to_steps(63), 0);
        assert_eq!(VolumePercent::new(50).to_steps(31), 16);
    }

    #[test]
    fn volume_from_steps_inverts_to_steps_at_ends() {
        assert_eq!(VolumePercent::from_steps(63, 63), VolumePercent::MAX);
        assert_eq!(VolumePercent::from_steps(0, 63), VolumePercent::MIN);
        assert_eq!(VolumePercent::from_steps(5, 0), VolumePercent::MIN);
    }

    #[test]
    fn i2c_addr_rejects_reserved_ranges() {
        assert!(I2cAddr::try_new(0x00).is_err());
        assert!(I2cAddr::try_new(0x07).is_err());
        assert!(I2cAddr::try_new(0x78).is_err());
        assert!(I2cAddr::try_new(0xFF).is_err());
        assert_eq!(I2cAddr::try_new(0x08).unwrap().get(), 0x08);
        assert_eq!(I2cAddr::try_new(0x77).unwrap().get(), 0x77);
    }
}
