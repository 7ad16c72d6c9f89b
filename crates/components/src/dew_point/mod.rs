//! Dew point from temperature and relative humidity
//!
//! Uses the Magnus-Tetens approximation:
//!
//! ```text
//! γ(T, RH) = ln(RH / 100) + a·T / (b + T)
//! Td       = b·γ / (a − γ)
//! ```
//!
//! with T in °C and RH in %. The constants `a` and `b` are part of the
//! contract: different published sets give results that diverge by several
//! tenths of a degree at the extremes. The default is a = 17.62,
//! b = 243.12 °C ([`MagnusCoefficients::SONNTAG_1990`]).

mod sensor;

pub use sensor::{DewPointResult, DewPointSensor, UnavailableReason};

use platform::sensor::{validate_humidity, validate_temperature};
use platform::{Computable, InvalidInputError};

/// Magnus formula constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MagnusCoefficients {
    /// Dimensionless `a`.
    pub a: f32,
    /// `b` in °C.
    pub b: f32,
}

impl MagnusCoefficients {
    /// Sonntag (1990): a = 17.62, b = 243.12 °C. Valid −45..60 °C over water.
    pub const SONNTAG_1990: Self = Self { a: 17.62, b: 243.12 };

    /// Alduchov & Eskridge (1996): a = 17.625, b = 243.04 °C.
    pub const ALDUCHOV_ESKRIDGE: Self = Self {
        a: 17.625,
        b: 243.04,
    };

    /// Bolton (1980): a = 17.67, b = 243.5 °C.
    pub const BOLTON_1980: Self = Self { a: 17.67, b: 243.5 };
}

impl Default for MagnusCoefficients {
    fn default() -> Self {
        Self::SONNTAG_1990
    }
}

/// Dew point component configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct DewPointConfig {
    /// Magnus constant set.
    pub coefficients: MagnusCoefficients,
}

/// Stateless dew point calculator.
///
/// Holds only its (immutable) constants, so one instance can be shared by
/// any number of callers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DewPointCalculator {
    coefficients: MagnusCoefficients,
}

impl DewPointCalculator {
    /// Calculator using `coefficients`.
    pub const fn new(coefficients: MagnusCoefficients) -> Self {
        Self { coefficients }
    }

    /// Calculator configured from a [`DewPointConfig`].
    pub const fn from_config(config: &DewPointConfig) -> Self {
        Self::new(config.coefficients)
    }

    /// Constants in use.
    pub const fn coefficients(&self) -> MagnusCoefficients {
        self.coefficients
    }

    /// Dew point in °C.
    ///
    /// Temperature must lie in -90..=60 °C and relative humidity in
    /// (0, 100] %. Temperature is checked first.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError`] naming the first rejected input.
    pub fn compute(
        &self,
        temperature_celsius: f32,
        relative_humidity_percent: f32,
    ) -> Result<f32, InvalidInputError> {
        let t = validate_temperature(temperature_celsius)?;
        let rh = validate_humidity(relative_humidity_percent)?;
        let MagnusCoefficients { a, b } = self.coefficients;

        let gamma = libm::logf(rh / 100.0) + (a * t) / (b + t);
        let dew_point = (b * gamma) / (a - gamma);

        // Mathematically Td <= T; clamp away the last-ulp rounding at saturation.
        Ok(dew_point.min(t))
    }
}

impl Computable for DewPointCalculator {
    type Input = (f32, f32);
    type Output = f32;
    type Error = InvalidInputError;

    fn compute(&self, (temperature, humidity): (f32, f32)) -> Result<f32, InvalidInputError> {
        DewPointCalculator::compute(self, temperature, humidity)
    }
}

/// Dew point in °C with the default constants.
///
/// # Errors
///
/// See [`DewPointCalculator::compute`].
pub fn dew_point(
    temperature_celsius: f32,
    relative_humidity_percent: f32,
) -> Result<f32, InvalidInputError> {
    DewPointCalculator::default().compute(temperature_celsius, relative_humidity_percent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn twenty_degrees_half_saturated() {
        let td = dew_point(20.0, 50.0).unwrap();
        assert!(close(td, 9.26, 0.05), "got {td}");
    }

    #[test]
    fn saturation_returns_temperature() {
        for t in [-40.0, -5.0, 0.0, 12.5, 35.0, 60.0] {
            let td = dew_point(t, 100.0).unwrap();
            assert!(close(td, t, 0.01), "T={t} Td={td}");
        }
    }

    #[test]
    fn temperature_checked_before_humidity() {
        assert_eq!(
            dew_point(75.0, 0.0),
            Err(InvalidInputError::Temperature(75.0))
        );
    }

    #[test]
    fn humidity_out_of_range_is_rejected() {
        assert_eq!(dew_point(-10.0, 0.0), Err(InvalidInputError::Humidity(0.0)));
        assert_eq!(
            dew_point(-10.0, 101.0),
            Err(InvalidInputError::Humidity(101.0))
        );
        assert!(dew_point(10.0, f32::NAN).is_err());
    }

    #[test]
    fn constant_sets_differ_slightly() {
        let sonntag = DewPointCalculator::new(MagnusCoefficients::SONNTAG_1990)
            .compute(30.0, 40.0)
            .unwrap();
        let bolton = DewPointCalculator::new(MagnusCoefficients::BOLTON_1980)
            .compute(30.0, 40.0)
            .unwrap();
        assert!(sonntag != bolton);
        assert!(close(sonntag, bolton, 0.2));
    }

    #[test]
    fn computable_matches_inherent_call() {
        let calc = DewPointCalculator::default();
        assert_eq!(
            Computable::compute(&calc, (18.0, 65.0)),
            calc.compute(18.0, 65.0)
        );
    }

    #[test]
    fn default_config_uses_sonntag_constants() {
        let calc = DewPointCalculator::from_config(&DewPointConfig::default());
        assert_eq!(calc.coefficients(), MagnusCoefficients::SONNTAG_1990);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserialises_custom_constants() {
        let config: DewPointConfig =
            serde_json::from_str(r#"{"coefficients":{"a":17.67,"b":243.5}}"#).unwrap();
        assert_eq!(config.coefficients, MagnusCoefficients::BOLTON_1980);

        let empty: DewPointConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DewPointConfig::default());
    }
}
