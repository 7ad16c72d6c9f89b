//! Sensor readings and derived-value capability
//!
//! A [`SensorReading`] is an immutable, timestamped scalar produced by some
//! upstream sensor. Derived sensors (dew point, …) consume the latest reading
//! of each input and implement [`Computable`] for the pure part of their work.

use thiserror_no_std::Error;

use crate::config::{TEMPERATURE_MAX_C, TEMPERATURE_MIN_C};

/// Physical quantity carried by a [`SensorReading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    /// Air temperature in °C.
    Temperature,
    /// Relative humidity in % (0–100).
    RelativeHumidity,
}

/// A timestamped scalar reading.
///
/// A `NaN` value means the producing sensor has no valid state; consumers
/// treat it the same as "no reading yet".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// What was measured.
    pub quantity: Quantity,
    /// Measured value, in the unit implied by `quantity`.
    pub value: f32,
    /// Milliseconds since boot when the value was produced.
    pub timestamp_ms: u64,
}

impl SensorReading {
    /// Temperature reading in °C.
    pub const fn temperature(celsius: f32, timestamp_ms: u64) -> Self {
        Self {
            quantity: Quantity::Temperature,
            value: celsius,
            timestamp_ms,
        }
    }

    /// Relative humidity reading in %.
    pub const fn humidity(percent: f32, timestamp_ms: u64) -> Self {
        Self {
            quantity: Quantity::RelativeHumidity,
            value: percent,
            timestamp_ms,
        }
    }

    /// Returns `true` if the producer had a state (value is not `NaN`).
    pub fn has_state(&self) -> bool {
        !self.value.is_nan()
    }
}

/// A sensor value outside its physically meaningful range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidInputError {
    /// Temperature outside [`TEMPERATURE_MIN_C`]..=[`TEMPERATURE_MAX_C`] or `NaN`.
    #[error("temperature {0} °C outside -90..=60 °C")]
    Temperature(f32),
    /// Relative humidity outside (0, 100] % or `NaN`.
    #[error("relative humidity {0} % outside (0, 100] %")]
    Humidity(f32),
}

impl InvalidInputError {
    /// Which input was rejected.
    pub const fn quantity(&self) -> Quantity {
        match self {
            Self::Temperature(_) => Quantity::Temperature,
            Self::Humidity(_) => Quantity::RelativeHumidity,
        }
    }
}

/// Check a temperature against the plausible range.
///
/// # Errors
///
/// [`InvalidInputError::Temperature`] when out of range or `NaN`.
pub fn validate_temperature(celsius: f32) -> Result<f32, InvalidInputError> {
    if (TEMPERATURE_MIN_C..=TEMPERATURE_MAX_C).contains(&celsius) {
        Ok(celsius)
    } else {
        Err(InvalidInputError::Temperature(celsius))
    }
}

/// Check a relative humidity against (0, 100].
///
/// # Errors
///
/// [`InvalidInputError::Humidity`] when out of range or `NaN`.
pub fn validate_humidity(percent: f32) -> Result<f32, InvalidInputError> {
    if percent > 0.0 && percent <= 100.0 {
        Ok(percent)
    } else {
        Err(InvalidInputError::Humidity(percent))
    }
}

/// Pure, stateless derivation of one value from its inputs.
///
/// Implementations hold only immutable parameters, so `compute` is
/// deterministic and safe to call from any number of callers at once.
pub trait Computable {
    /// Input tuple.
    type Input;
    /// Derived value.
    type Output;
    /// Error type
    type Error: core::fmt::Debug;

    /// Derive the output from `input`.
    fn compute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
