//! AC101 codec driver
//!
//! Communicates with the chip via I²C. Uses the blocking
//! `embedded_hal::i2c::I2c` trait so it is HAL-agnostic; the delay source for
//! reset and amplifier settle times is injected the same way.
//!
//! The audio stream itself is delivered over I²S by the host peripheral;
//! that path does not go through this driver.
//!
//! # State machine
//!
//! ```text
//! Uninitialized ──initialize──▶ Configuring ──▶ Ready ──reconfigure──▶ Configuring ──▶ Ready
//!                                    │                                      │
//!                                    └──── transport error ──▶ Faulted ◀────┘
//! Faulted ──initialize──▶ Configuring ──▶ Ready
//! ```
//!
//! Configuration is validated before the first write, so an unsupported
//! sample rate or bit depth never touches the bus and leaves the state as it
//! was. A failed write aborts the remaining sequence immediately.
//!
//! `initialize` finishes by powering [`INITIAL_MODE`] with both outputs at
//! their held level ([`DEFAULT_VOLUME`] on a fresh driver), so the output
//! registers always match what the volume getters report.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use platform::{
    AudioDac, BitsPerSample, CodecConfig, DriverState, I2cAddr, StatefulDriver, VolumePercent,
};
use thiserror_no_std::Error;

use super::registers::{
    i2s1_clock_control, Register, SampleRate, DIGITAL_ENABLE, HPOUT_ENABLED, HPOUT_VOLUME_MASK,
    HPOUT_VOLUME_SHIFT, LINE_ADC_APC, LINE_ADC_SRC, MODULES_ENABLED, OMIXER_DAC_ENABLED,
    OMIXER_SETTLE_MS, POWER_UP_SEQUENCE, RESET_SETTLE_MS, SPKOUT_ENABLED, SPKOUT_SETTLE_MS,
    SPKOUT_VOLUME_MASK, VOLUME_FULL_SCALE,
};
use super::RegisterMap;

/// Output level both amplifiers are brought up at, on the 0..=63 scale.
pub const DEFAULT_VOLUME: u8 = 30;

/// Signal paths `initialize` powers once the audio format is set.
pub const INITIAL_MODE: CodecMode = CodecMode::AdcDac;

/// Errors returned by the AC101 driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError<E> {
    /// Requested sample rate is not in the AC101 rate table.
    #[error("unsupported sample rate {0} Hz")]
    UnsupportedSampleRate(u32),
    /// Requested bits per sample is not 8, 16, 24 or 32.
    #[error("unsupported bit depth {0}")]
    UnsupportedBitDepth(u8),
    /// Configured I²C address is reserved or not 7-bit.
    #[error("invalid I2C address {0:#04x}")]
    InvalidAddress(u8),
    /// `reconfigure` asked for a different device than the one initialised.
    #[error("reconfigure cannot move the codec from {current:#04x} to {requested:#04x}")]
    AddressChanged {
        /// Address the controller was initialised with.
        current: u8,
        /// Address in the rejected configuration.
        requested: u8,
    },
    /// Operation needs `Ready`; the codec is uninitialised or faulted.
    #[error("codec not initialized")]
    NotInitialized,
    /// An I²C write failed. The controller is now `Faulted`.
    #[error("I2C write of {value:#06x} to register {register:#04x} failed: {error:?}")]
    Transport {
        /// Register address of the failed write.
        register: u8,
        /// Value that was being written.
        value: u16,
        /// Transport error, unchanged.
        error: E,
    },
}

/// Operating mode (which signal paths are powered and routed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecMode {
    /// Microphone / ADC path only.
    Adc,
    /// Playback / DAC path only.
    Dac,
    /// Both ADC and DAC paths.
    #[default]
    AdcDac,
    /// Line input routed through ADC and DAC.
    Line,
}

impl CodecMode {
    /// Short human-readable name, for log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adc => "adc",
            Self::Dac => "dac",
            Self::AdcDac => "adc+dac",
            Self::Line => "line",
        }
    }

    const fn uses_adc(self) -> bool {
        matches!(self, Self::Adc | Self::AdcDac | Self::Line)
    }

    const fn uses_dac(self) -> bool {
        matches!(self, Self::Dac | Self::AdcDac | Self::Line)
    }
}

/// Validated audio format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AudioFormat {
    rate: SampleRate,
    bits: BitsPerSample,
}

impl AudioFormat {
    fn from_config<E>(config: &CodecConfig) -> Result<Self, CodecError<E>> {
        let Some(rate) = SampleRate::from_hz(config.sample_rate) else {
            return Err(CodecError::UnsupportedSampleRate(config.sample_rate));
        };
        let Ok(bits) = BitsPerSample::try_from(config.bits_per_sample) else {
            return Err(CodecError::UnsupportedBitDepth(config.bits_per_sample));
        };
        Ok(Self { rate, bits })
    }
}

/// AC101 audio codec controller.
///
/// Owns its transport and delay source exclusively; callers serialise access
/// through `&mut self`.
pub struct Ac101<I, D> {
    i2c: I,
    delay: D,
    address: I2cAddr,
    state: DriverState,
    config: Option<CodecConfig>,
    registers: RegisterMap,
    mode: Option<CodecMode>,
    speaker_volume: u8,
    headphone_volume: u8,
    muted: bool,
}

impl<I: I2c, D: DelayNs> Ac101<I, D> {
    /// Create an uninitialised driver. Nothing is written until
    /// [`initialize`](StatefulDriver::initialize).
    pub fn new(i2c: I, delay: D) -> Self {
        Self {
            i2c,
            delay,
            address: I2cAddr::new(platform::config::AC101_DEFAULT_ADDRESS),
            state: DriverState::Uninitialized,
            config: None,
            registers: RegisterMap::new(),
            mode: None,
            speaker_volume: DEFAULT_VOLUME,
            headphone_volume: DEFAULT_VOLUME,
            muted: false,
        }
    }

    /// Give back the transport and delay source.
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    /// Software mirror of every register written since the last reset.
    pub fn register_map(&self) -> &RegisterMap {
        &self.registers
    }

    /// Configuration last applied successfully.
    pub fn config(&self) -> Option<&CodecConfig> {
        self.config.as_ref()
    }

    /// I²C address the driver talks to.
    pub fn address(&self) -> u8 {
        self.address.get()
    }

    /// Signal paths last powered (`None` until `initialize` gets that far).
    pub fn mode(&self) -> Option<CodecMode> {
        self.mode
    }

    /// Speaker level, 0..=63 (hardware resolution is 2 steps).
    pub fn speaker_volume(&self) -> u8 {
        self.speaker_volume
    }

    /// Headphone level, 0..=63.
    pub fn headphone_volume(&self) -> u8 {
        self.headphone_volume
    }

    /// Power and route the signal paths for `mode`, then bring both outputs
    /// to their current level.
    pub fn set_mode(&mut self, mode: CodecMode) -> Result<(), CodecError<I::Error>> {
        self.require_ready()?;
        self.apply_mode(mode)
    }

    fn apply_mode(&mut self, mode: CodecMode) -> Result<(), CodecError<I::Error>> {
        debug!("AC101 mode {}", mode.as_str());

        if mode == CodecMode::Line {
            self.write_reg(Register::AdcSrc, LINE_ADC_SRC)?;
            self.write_reg(Register::AdcDigCtrl, DIGITAL_ENABLE)?;
            self.write_reg(Register::AdcApcCtrl, LINE_ADC_APC)?;
        }

        if mode.uses_adc() {
            self.write_reg(Register::ModClkEna, MODULES_ENABLED)?;
            self.write_reg(Register::ModRstCtrl, MODULES_ENABLED)?;
        }

        if mode.uses_dac() {
            self.write_reg(Register::OmixerDacaCtrl, OMIXER_DAC_ENABLED)?;
            self.delay.delay_ms(OMIXER_SETTLE_MS);
            self.write_reg(Register::HpoutCtrl, HPOUT_ENABLED)?;
            self.write_headphone_level(self.effective(self.headphone_volume))?;

            self.write_reg(Register::SpkoutCtrl, SPKOUT_ENABLED)?;
            self.delay.delay_ms(SPKOUT_SETTLE_MS);
            self.write_speaker_level(self.effective(self.speaker_volume))?;
        }
        self.mode = Some(mode);
        Ok(())
    }

    /// Set the speaker level, 0..=63 (clamped).
    pub fn set_speaker_volume(&mut self, level: u8) -> Result<(), CodecError<I::Error>> {
        self.require_ready()?;
        self.speaker_volume = level.min(VOLUME_FULL_SCALE);
        self.write_speaker_level(self.effective(self.speaker_volume))
    }

    /// Set the headphone level, 0..=63 (clamped).
    pub fn set_headphone_volume(&mut self, level: u8) -> Result<(), CodecError<I::Error>> {
        self.require_ready()?;
        self.headphone_volume = level.min(VOLUME_FULL_SCALE);
        self.write_headphone_level(self.effective(self.headphone_volume))
    }

    fn require_ready(&self) -> Result<(), CodecError<I::Error>> {
        if self.state == DriverState::Ready {
            Ok(())
        } else {
            debug!("AC101 rejected request while {}", self.state.as_str());
            Err(CodecError::NotInitialized)
        }
    }

    /// Level actually written: zero while muted.
    fn effective(&self, level: u8) -> u8 {
        if self.muted {
            0
        } else {
            level
        }
    }

    /// Speaker field is 5 bits; the 0..=63 scale is halved.
    #[allow(clippy::arithmetic_side_effects)] // masked shifts on u16
    fn write_speaker_level(&mut self, level: u8) -> Result<(), CodecError<I::Error>> {
        let field = u16::from(level / 2) & SPKOUT_VOLUME_MASK;
        let base = self.registers.get(Register::SpkoutCtrl).unwrap_or(0);
        self.write_reg(Register::SpkoutCtrl, (base & !SPKOUT_VOLUME_MASK) | field)
    }

    #[allow(clippy::arithmetic_side_effects)] // masked shifts on u16
    fn write_headphone_level(&mut self, level: u8) -> Result<(), CodecError<I::Error>> {
        let field = (u16::from(level) & HPOUT_VOLUME_MASK) << HPOUT_VOLUME_SHIFT;
        let base = self.registers.get(Register::HpoutCtrl).unwrap_or(0);
        let cleared = base & !(HPOUT_VOLUME_MASK << HPOUT_VOLUME_SHIFT);
        self.write_reg(Register::HpoutCtrl, cleared | field)
    }

    /// Write a single 16-bit register over I²C and mirror it.
    ///
    /// On failure the controller moves to `Faulted` and the error carries the
    /// register and value.
    fn write_reg(&mut self, register: Register, value: u16) -> Result<(), CodecError<I::Error>> {
        let [hi, lo] = value.to_be_bytes();
        match self.i2c.write(self.address.get(), &[register.addr(), hi, lo]) {
            Ok(()) => {
                self.registers.set(register, value);
                Ok(())
            }
            Err(error) => {
                warn!(
                    "AC101 write {:#x} to register {:#x} failed, codec faulted",
                    value,
                    register.addr()
                );
                self.state = DriverState::Faulted;
                Err(CodecError::Transport {
                    register: register.addr(),
                    value,
                    error,
                })
            }
        }
    }

    fn power_up(&mut self) -> Result<(), CodecError<I::Error>> {
        for (register, value) in POWER_UP_SEQUENCE {
            self.write_reg(register, value)?;
            if register == Register::ChipAudioRs {
                self.delay.delay_ms(RESET_SETTLE_MS);
            }
        }
        Ok(())
    }

    /// Sample-rate register, then word size (in I2S1LCK_CTRL).
    fn apply_format(&mut self, format: AudioFormat) -> Result<(), CodecError<I::Error>> {
        self.write_reg(Register::I2sSrCtrl, format.rate.register_value())?;
        self.write_reg(Register::I2s1LckCtrl, i2s1_clock_control(format.bits))
    }
}

impl<I: I2c, D: DelayNs> StatefulDriver for Ac101<I, D> {
    type Config = CodecConfig;
    type Error = CodecError<I::Error>;

    fn state(&self) -> DriverState {
        self.state
    }

    fn initialize(&mut self, config: CodecConfig) -> Result<(), Self::Error> {
        let format = AudioFormat::from_config::<I::Error>(&config)?;
        let Ok(address) = I2cAddr::try_new(config.address) else {
            return Err(CodecError::InvalidAddress(config.address));
        };

        info!(
            "Initialising AC101 at {:#x}: {} Hz, {} bit",
            address.get(),
            format.rate.hz(),
            format.bits.bits()
        );

        self.address = address;
        self.state = DriverState::Configuring;
        self.config = None;
        self.mode = None;
        self.registers.clear();

        self.power_up()?;
        self.apply_format(format)?;
        self.apply_mode(INITIAL_MODE)?;

        self.config = Some(config);
        self.state = DriverState::Ready;
        info!("AC101 initialisation complete");
        Ok(())
    }

    fn reconfigure(&mut self, config: CodecConfig) -> Result<(), Self::Error> {
        self.require_ready()?;
        let format = AudioFormat::from_config::<I::Error>(&config)?;
        if config.address != self.address.get() {
            return Err(CodecError::AddressChanged {
                current: self.address.get(),
                requested: config.address,
            });
        }

        info!(
            "Reconfiguring AC101: {} Hz, {} bit",
            format.rate.hz(),
            format.bits.bits()
        );

        self.state = DriverState::Configuring;
        self.apply_format(format)?;

        self.config = Some(config);
        self.state = DriverState::Ready;
        Ok(())
    }
}

impl<I: I2c, D: DelayNs> AudioDac for Ac101<I, D> {
    type Error = CodecError<I::Error>;

    /// Both outputs follow the same percentage.
    fn set_volume(&mut self, volume: VolumePercent) -> Result<(), Self::Error> {
        self.require_ready()?;
        let level = volume.to_steps(VOLUME_FULL_SCALE);
        self.speaker_volume = level;
        self.headphone_volume = level;
        let effective = self.effective(level);
        self.write_headphone_level(effective)?;
        self.write_speaker_level(effective)
    }

    fn volume(&self) -> VolumePercent {
        VolumePercent::from_steps(self.headphone_volume, VOLUME_FULL_SCALE)
    }

    fn set_mute(&mut self, muted: bool) -> Result<(), Self::Error> {
        self.require_ready()?;
        self.muted = muted;
        self.write_headphone_level(self.effective(self.headphone_volume))?;
        self.write_speaker_level(self.effective(self.speaker_volume))
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x1A;

    fn write(register: Register, value: u16) -> I2cTransaction {
        let [hi, lo] = value.to_be_bytes();
        I2cTransaction::write(ADDR, vec![register.addr(), hi, lo])
    }

    fn power_up_transactions() -> Vec<I2cTransaction> {
        POWER_UP_SEQUENCE
            .iter()
            .map(|(register, value)| write(*register, *value))
            .collect()
    }

    /// ADC+DAC bring-up at the default level of 30: headphone bits 9:4 and
    /// speaker bits 4:0 (30 / 2) patched into the enable values.
    fn initial_mode_transactions() -> Vec<I2cTransaction> {
        vec![
            write(Register::ModClkEna, MODULES_ENABLED),
            write(Register::ModRstCtrl, MODULES_ENABLED),
            write(Register::OmixerDacaCtrl, OMIXER_DAC_ENABLED),
            write(Register::HpoutCtrl, HPOUT_ENABLED),
            write(Register::HpoutCtrl, 0xF9E0),
            write(Register::SpkoutCtrl, SPKOUT_ENABLED),
            write(Register::SpkoutCtrl, 0xEAAF),
        ]
    }

    fn ready_codec(extra: &[I2cTransaction]) -> Ac101<I2cMock, NoopDelay> {
        let mut expectations = power_up_transactions();
        expectations.push(write(Register::I2sSrCtrl, 0x3000));
        expectations.push(write(Register::I2s1LckCtrl, 0x8850));
        expectations.extend(initial_mode_transactions());
        expectations.extend_from_slice(extra);
        let mut codec = Ac101::new(I2cMock::new(&expectations), NoopDelay::new());
        codec.initialize(CodecConfig::default()).unwrap();
        codec
    }

    fn finish(codec: Ac101<I2cMock, NoopDelay>) {
        let (mut i2c, _) = codec.release();
        i2c.done();
    }

    #[test]
    fn initialize_writes_power_up_then_rate_then_depth() {
        let codec = ready_codec(&[]);
        assert_eq!(codec.state(), DriverState::Ready);
        assert_eq!(codec.register_map().get(Register::I2sSrCtrl), Some(0x3000));
        assert_eq!(codec.register_map().get(Register::I2s1LckCtrl), Some(0x8850));
        assert_eq!(codec.config(), Some(&CodecConfig::default()));
        assert_eq!(codec.mode(), Some(INITIAL_MODE));
        finish(codec);
    }

    #[test]
    fn reported_levels_match_what_initialize_wrote() {
        let codec = ready_codec(&[]);
        let map = codec.register_map();
        let headphone = map
            .get(Register::HpoutCtrl)
            .map(|v| (v >> HPOUT_VOLUME_SHIFT) & HPOUT_VOLUME_MASK);
        let speaker = map.get(Register::SpkoutCtrl).map(|v| v & SPKOUT_VOLUME_MASK);
        assert_eq!(headphone, Some(u16::from(codec.headphone_volume())));
        assert_eq!(speaker, Some(u16::from(codec.speaker_volume() / 2)));
        assert_eq!(
            codec.volume(),
            VolumePercent::from_steps(DEFAULT_VOLUME, VOLUME_FULL_SCALE)
        );
        finish(codec);
    }

    #[test]
    fn unsupported_sample_rate_issues_no_writes() {
        let mut codec = Ac101::new(I2cMock::new(&[]), NoopDelay::new());
        let err = codec.initialize(CodecConfig::new(12_345, 16)).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedSampleRate(12_345));
        assert_eq!(codec.state(), DriverState::Uninitialized);
        assert!(codec.register_map().is_empty());
        finish(codec);
    }

    #[test]
    fn unsupported_bit_depth_issues_no_writes() {
        let mut codec = Ac101::new(I2cMock::new(&[]), NoopDelay::new());
        let err = codec.initialize(CodecConfig::new(48_000, 20)).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedBitDepth(20));
        finish(codec);
    }

    #[test]
    fn reserved_address_is_rejected_before_writing() {
        let mut codec = Ac101::new(I2cMock::new(&[]), NoopDelay::new());
        let err = codec
            .initialize(CodecConfig::default().with_address(0x03))
            .unwrap_err();
        assert_eq!(err, CodecError::InvalidAddress(0x03));
        finish(codec);
    }

    #[test]
    fn third_write_failure_faults_and_aborts_sequence() {
        let mut expectations: Vec<_> = power_up_transactions().into_iter().take(3).collect();
        if let Some(last) = expectations.pop() {
            expectations.push(last.with_error(ErrorKind::Other));
        }
        let mut codec = Ac101::new(I2cMock::new(&expectations), NoopDelay::new());

        let err = codec.initialize(CodecConfig::default()).unwrap_err();
        assert_eq!(
            err,
            CodecError::Transport {
                register: Register::PllCtrl1.addr(),
                value: 0x014F,
                error: ErrorKind::Other,
            }
        );
        assert_eq!(codec.state(), DriverState::Faulted);
        assert_eq!(codec.register_map().len(), 2);
        assert_eq!(
            codec.reconfigure(CodecConfig::default()),
            Err(CodecError::NotInitialized)
        );
        finish(codec);
    }

    #[test]
    fn reconfigure_rewrites_only_format_registers() {
        let codec_extra = [
            write(Register::I2sSrCtrl, 0x8000),
            write(Register::I2s1LckCtrl, 0x84B0),
        ];
        let mut codec = ready_codec(&codec_extra);
        codec.reconfigure(CodecConfig::new(48_000, 24)).unwrap();
        assert_eq!(codec.state(), DriverState::Ready);
        assert_eq!(codec.config().map(|c| c.sample_rate), Some(48_000));
        finish(codec);
    }

    #[test]
    fn reconfigure_write_failure_faults_before_depth_write() {
        let extra = [write(Register::I2sSrCtrl, 0x8000).with_error(ErrorKind::Other)];
        let mut codec = ready_codec(&extra);
        assert_eq!(
            codec.reconfigure(CodecConfig::new(48_000, 16)),
            Err(CodecError::Transport {
                register: Register::I2sSrCtrl.addr(),
                value: 0x8000,
                error: ErrorKind::Other,
            })
        );
        assert_eq!(codec.state(), DriverState::Faulted);
        // Config of the last successful apply is kept
        assert_eq!(codec.config().map(|c| c.sample_rate), Some(16_000));
        assert_eq!(
            codec.reconfigure(CodecConfig::new(48_000, 16)),
            Err(CodecError::NotInitialized)
        );
        finish(codec);
    }

    #[test]
    fn reconfigure_before_initialize_is_rejected() {
        let mut codec = Ac101::new(I2cMock::new(&[]), NoopDelay::new());
        assert_eq!(
            codec.reconfigure(CodecConfig::default()),
            Err(CodecError::NotInitialized)
        );
        finish(codec);
    }

    #[test]
    fn reconfigure_rejects_unsupported_rate_and_stays_ready() {
        let mut codec = ready_codec(&[]);
        assert_eq!(
            codec.reconfigure(CodecConfig::new(44_000, 16)),
            Err(CodecError::UnsupportedSampleRate(44_000))
        );
        assert_eq!(codec.state(), DriverState::Ready);
        finish(codec);
    }

    #[test]
    fn reconfigure_cannot_change_address() {
        let mut codec = ready_codec(&[]);
        assert_eq!(
            codec.reconfigure(CodecConfig::default().with_address(0x1B)),
            Err(CodecError::AddressChanged {
                current: 0x1A,
                requested: 0x1B
            })
        );
        finish(codec);
    }

    #[test]
    fn mode_names_for_logs() {
        assert_eq!(CodecMode::Adc.as_str(), "adc");
        assert_eq!(CodecMode::Dac.as_str(), "dac");
        assert_eq!(INITIAL_MODE.as_str(), "adc+dac");
        assert_eq!(CodecMode::Line.as_str(), "line");
    }

    #[test]
    fn dac_mode_enables_outputs_at_current_level() {
        // Headphone: 0xFBC0 with bits 9:4 = 30; speaker: 0xEABD with bits 4:0 = 15.
        let extra = [
            write(Register::OmixerDacaCtrl, OMIXER_DAC_ENABLED),
            write(Register::HpoutCtrl, HPOUT_ENABLED),
            write(Register::HpoutCtrl, 0xF9E0),
            write(Register::SpkoutCtrl, SPKOUT_ENABLED),
            write(Register::SpkoutCtrl, 0xEAAF),
        ];
        let mut codec = ready_codec(&extra);
        codec.set_mode(CodecMode::Dac).unwrap();
        assert_eq!(codec.headphone_volume(), DEFAULT_VOLUME);
        assert_eq!(codec.mode(), Some(CodecMode::Dac));
        finish(codec);
    }

    #[test]
    fn mute_zeroes_levels_and_unmute_restores_them() {
        let extra = [
            // mute: both volume fields cleared, enable bits kept
            write(Register::HpoutCtrl, 0xF800),
            write(Register::SpkoutCtrl, 0xEAA0),
            // unmute
            write(Register::HpoutCtrl, 0xF9E0),
            write(Register::SpkoutCtrl, 0xEAAF),
        ];
        let mut codec = ready_codec(&extra);
        codec.set_mute(true).unwrap();
        assert!(codec.is_muted());
        codec.set_mute(false).unwrap();
        assert!(!codec.is_muted());
        finish(codec);
    }

    #[test]
    fn volume_percent_drives_both_outputs() {
        let extra = [
            write(Register::HpoutCtrl, 0xFBF0),
            write(Register::SpkoutCtrl, 0xEABF),
        ];
        let mut codec = ready_codec(&extra);
        codec.set_volume(VolumePercent::MAX).unwrap();
        assert_eq!(codec.volume(), VolumePercent::MAX);
        assert_eq!(codec.speaker_volume(), 63);
        finish(codec);
    }

    #[test]
    fn volume_change_needs_ready_codec() {
        let mut codec = Ac101::new(I2cMock::new(&[]), NoopDelay::new());
        assert_eq!(codec.set_speaker_volume(10), Err(CodecError::NotInitialized));
        assert_eq!(
            codec.set_mode(CodecMode::Dac),
            Err(CodecError::NotInitialized)
        );
        finish(codec);
    }

    #[test]
    fn runtime_write_failure_faults_codec() {
        let extra = [write(Register::HpoutCtrl, 0xF940).with_error(ErrorKind::Other)];
        let mut codec = ready_codec(&extra);
        assert!(matches!(
            codec.set_headphone_volume(20),
            Err(CodecError::Transport { .. })
        ));
        assert_eq!(codec.state(), DriverState::Faulted);
        finish(codec);
    }
}
