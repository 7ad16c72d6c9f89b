//! Dew point sensor component
//!
//! Keeps the latest temperature and humidity reading and republishes a dew
//! point whenever either input changes. Readings are pushed in by the
//! integration layer; nothing is looked up by name.

use platform::config::{DEW_POINT_ACCURACY_DECIMALS, UNIT_CELSIUS};
use platform::{InvalidInputError, Quantity, SensorReading};

use super::{DewPointCalculator, DewPointConfig};

/// Why no dew point could be published.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnavailableReason {
    /// Neither input has a valid state.
    NoReadings,
    /// Temperature has no valid state.
    NoTemperature,
    /// Humidity has no valid state.
    NoHumidity,
    /// Both inputs present but outside their plausible range.
    Invalid(InvalidInputError),
}

impl UnavailableReason {
    /// Short description for logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoReadings => "no valid temperature or humidity",
            Self::NoTemperature => "no valid temperature",
            Self::NoHumidity => "no valid humidity",
            Self::Invalid(InvalidInputError::Temperature(_)) => "temperature out of range",
            Self::Invalid(InvalidInputError::Humidity(_)) => "humidity out of range",
        }
    }
}

/// Published dew point state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DewPointResult {
    /// Dew point computed from the latest reading pair.
    Available {
        /// Dew point in °C.
        celsius: f32,
        /// Timestamp of the newer of the two input readings.
        timestamp_ms: u64,
    },
    /// No dew point can be derived right now.
    Unavailable(UnavailableReason),
}

impl DewPointResult {
    /// Dew point in °C, if available.
    pub const fn celsius(&self) -> Option<f32> {
        match self {
            Self::Available { celsius, .. } => Some(*celsius),
            Self::Unavailable(_) => None,
        }
    }

    /// Returns `true` for [`DewPointResult::Available`].
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Derived dew point sensor.
#[derive(Debug, Clone)]
pub struct DewPointSensor {
    calculator: DewPointCalculator,
    temperature: Option<SensorReading>,
    humidity: Option<SensorReading>,
    pending: bool,
    state: Option<DewPointResult>,
    warning: bool,
}

impl DewPointSensor {
    /// New sensor with no inputs yet.
    pub const fn new(config: DewPointConfig) -> Self {
        Self {
            calculator: DewPointCalculator::from_config(&config),
            temperature: None,
            humidity: None,
            pending: false,
            state: None,
            warning: false,
        }
    }

    /// Accept a reading of either input.
    pub fn push(&mut self, reading: SensorReading) {
        match reading.quantity {
            Quantity::Temperature => self.temperature = Some(reading),
            Quantity::RelativeHumidity => self.humidity = Some(reading),
        }
        self.pending = true;
    }

    /// Accept a temperature in °C.
    pub fn update_temperature(&mut self, celsius: f32, timestamp_ms: u64) {
        self.push(SensorReading::temperature(celsius, timestamp_ms));
    }

    /// Accept a relative humidity in %.
    pub fn update_humidity(&mut self, percent: f32, timestamp_ms: u64) {
        self.push(SensorReading::humidity(percent, timestamp_ms));
    }

    /// Recompute if an input changed since the last poll.
    ///
    /// Returns the newly published state, or `None` when nothing changed.
    pub fn poll(&mut self) -> Option<DewPointResult> {
        if !self.pending {
            return None;
        }
        self.pending = false;

        let result = self.evaluate();
        match result {
            DewPointResult::Available { celsius, .. } => {
                debug!("Publishing dew point {} C", celsius);
                self.warning = false;
            }
            DewPointResult::Unavailable(reason) => {
                warn!("Unable to calculate dew point: {}", reason.as_str());
                self.warning = true;
            }
        }
        self.state = Some(result);
        Some(result)
    }

    /// Last published state (`None` before the first poll with input).
    pub fn state(&self) -> Option<DewPointResult> {
        self.state
    }

    /// Returns `true` while the last published state was unavailable.
    pub fn has_warning(&self) -> bool {
        self.warning
    }

    /// Unit of the published value.
    pub const fn unit_of_measurement(&self) -> &'static str {
        UNIT_CELSIUS
    }

    /// Decimals the published value is meaningful to.
    pub const fn accuracy_decimals(&self) -> u8 {
        DEW_POINT_ACCURACY_DECIMALS
    }

    fn evaluate(&self) -> DewPointResult {
        let temperature = self.temperature.filter(SensorReading::has_state);
        let humidity = self.humidity.filter(SensorReading::has_state);

        match (temperature, humidity) {
            (None, None) => DewPointResult::Unavailable(UnavailableReason::NoReadings),
            (None, Some(_)) => DewPointResult::Unavailable(UnavailableReason::NoTemperature),
            (Some(_), None) => DewPointResult::Unavailable(UnavailableReason::NoHumidity),
            (Some(t), Some(rh)) => match self.calculator.compute(t.value, rh.value) {
                Ok(celsius) => DewPointResult::Available {
                    celsius,
                    timestamp_ms: t.timestamp_ms.max(rh.timestamp_ms),
                },
                Err(e) => DewPointResult::Unavailable(UnavailableReason::Invalid(e)),
            },
        }
    }
}

impl Default for DewPointSensor {
    fn default() -> Self {
        Self::new(DewPointConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishes_celsius_to_one_decimal() {
        let sensor = DewPointSensor::default();
        assert_eq!(sensor.unit_of_measurement(), "°C");
        assert_eq!(sensor.accuracy_decimals(), 1);
    }

    #[test]
    fn nothing_to_publish_without_input() {
        let mut sensor = DewPointSensor::default();
        assert_eq!(sensor.poll(), None);
        assert_eq!(sensor.state(), None);
        assert!(!sensor.has_warning());
    }

    #[test]
    fn unavailable_until_both_inputs_arrive() {
        let mut sensor = DewPointSensor::default();
        sensor.update_temperature(20.0, 1_000);
        assert_eq!(
            sensor.poll(),
            Some(DewPointResult::Unavailable(UnavailableReason::NoHumidity))
        );
        assert!(sensor.has_warning());

        sensor.update_humidity(50.0, 1_500);
        let result = sensor.poll();
        assert!(result.is_some_and(|r| r.is_available()));
        assert!(!sensor.has_warning());
        if let Some(DewPointResult::Available { celsius, timestamp_ms }) = result {
            assert!((celsius - 9.26).abs() < 0.05);
            assert_eq!(timestamp_ms, 1_500);
        }
    }

    #[test]
    fn poll_only_publishes_after_new_reading() {
        let mut sensor = DewPointSensor::default();
        sensor.update_temperature(20.0, 0);
        sensor.update_humidity(50.0, 0);
        assert!(sensor.poll().is_some());
        assert_eq!(sensor.poll(), None);
        assert!(sensor.state().is_some_and(|r| r.is_available()));
    }

    #[test]
    fn nan_reading_counts_as_missing() {
        let mut sensor = DewPointSensor::default();
        sensor.update_temperature(f32::NAN, 0);
        sensor.update_humidity(40.0, 0);
        assert_eq!(
            sensor.poll(),
            Some(DewPointResult::Unavailable(UnavailableReason::NoTemperature))
        );

        sensor.update_humidity(f32::NAN, 10);
        assert_eq!(
            sensor.poll(),
            Some(DewPointResult::Unavailable(UnavailableReason::NoReadings))
        );
    }

    #[test]
    fn out_of_range_input_is_reported_not_fatal() {
        let mut sensor = DewPointSensor::default();
        sensor.update_temperature(25.0, 0);
        sensor.update_humidity(120.0, 0);
        assert_eq!(
            sensor.poll(),
            Some(DewPointResult::Unavailable(UnavailableReason::Invalid(
                InvalidInputError::Humidity(120.0)
            )))
        );

        sensor.update_humidity(60.0, 5);
        assert!(sensor.poll().is_some_and(|r| r.celsius().is_some()));
        assert!(!sensor.has_warning());
    }
}
