//! Component configuration defaults
//!
//! Central default values used across the components. Configuration
//! documents only need to name what differs from these.

/// 7-bit I²C address of the AC101 codec (fixed in silicon).
pub const AC101_DEFAULT_ADDRESS: u8 = 0x1A;

/// Default codec sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 16_000;

/// Default codec word length in bits.
pub const DEFAULT_BITS_PER_SAMPLE: u8 = 16;

/// Lowest temperature accepted by derived-sensor calculations (°C).
pub const TEMPERATURE_MIN_C: f32 = -90.0;

/// Highest temperature accepted by derived-sensor calculations (°C).
pub const TEMPERATURE_MAX_C: f32 = 60.0;

/// Number of decimals a dew point state is meaningful to.
pub const DEW_POINT_ACCURACY_DECIMALS: u8 = 1;

/// Unit of every temperature published by the components.
pub const UNIT_CELSIUS: &str = "°C";
