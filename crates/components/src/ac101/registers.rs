//! AC101 register map and encoding tables
//!
//! Source: X-Powers AC101 datasheet and the esp-adf AC101 reference driver.
//!
//! # Key I²C Constraints
//!
//! ## 16-bit registers
//! Every register is 16 bits wide. A write is one I²C transaction of three
//! bytes: register address, value high byte, value low byte.
//!
//! ## Write-only control
//! The driver never reads the chip back. Read-modify-write of shared
//! registers (output volume fields, I2S1LCK_CTRL) is done against the
//! software mirror in [`RegisterMap`](super::RegisterMap).
//!
//! ## Reset settle time
//! Writing [`CHIP_RESET_VALUE`] to `CHIP_AUDIO_RS` resets every register.
//! The chip needs [`RESET_SETTLE_MS`] before the next write is reliable.

use platform::BitsPerSample;

// ---------------------------------------------------------------------------
// Register addresses
// ---------------------------------------------------------------------------

/// AC101 register addresses.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Register {
    /// Chip reset / ID. Write [`CHIP_RESET_VALUE`] to reset.
    ChipAudioRs = 0x00,
    /// PLL control 1: M divider, PLL enable.
    PllCtrl1 = 0x01,
    /// PLL control 2: N multiplier, PLL post-divider.
    PllCtrl2 = 0x02,
    /// System clock source selection.
    SysclkCtrl = 0x03,
    /// Module clock enables.
    ModClkEna = 0x04,
    /// Module resets (active low).
    ModRstCtrl = 0x05,
    /// I²S sample-rate selection, bits 15:12.
    I2sSrCtrl = 0x06,
    /// AIF1 clock, word size and format control.
    I2s1LckCtrl = 0x10,
    /// AIF1 ADC timeslot enable.
    I2s1SdoutCtrl = 0x11,
    /// AIF1 DAC timeslot enable.
    I2s1SdinCtrl = 0x12,
    /// AIF1 ADC mixer source select.
    I2s1MxrSrc = 0x13,
    I2s1VolCtrl1 = 0x14,
    I2s1VolCtrl2 = 0x15,
    I2s1VolCtrl3 = 0x16,
    I2s1VolCtrl4 = 0x17,
    I2s1MxrGain = 0x18,
    /// ADC digital enable.
    AdcDigCtrl = 0x40,
    AdcVolCtrl = 0x41,
    HmicCtrl1 = 0x44,
    HmicCtrl2 = 0x45,
    HmicStatus = 0x46,
    /// DAC digital enable.
    DacDigCtrl = 0x48,
    DacVolCtrl = 0x49,
    /// DAC mixer source select.
    DacMxrSrc = 0x4C,
    DacMxrGain = 0x4D,
    /// ADC analog power control.
    AdcApcCtrl = 0x50,
    /// ADC input source select.
    AdcSrc = 0x51,
    /// ADC input boost.
    AdcSrcbstCtrl = 0x52,
    /// Output mixer / analog DAC enable.
    OmixerDacaCtrl = 0x53,
    /// Output mixer source select.
    OmixerSr = 0x54,
    OmixerBst1Ctrl = 0x55,
    /// Headphone output; volume in bits 9:4.
    HpoutCtrl = 0x56,
    /// Speaker output; volume in bits 4:0.
    SpkoutCtrl = 0x58,
    DacDapCtrl = 0xA0,
    DacDapHhpfc = 0xA1,
    DacDapLhpfc = 0xA2,
    DacDapLhavc = 0xA3,
    DacDapLlavc = 0xA4,
    DacDapRhavc = 0xA5,
    DacDapRlavc = 0xA6,
    DacDapHgdec = 0xA7,
    DacDapLgdec = 0xA8,
    DacDapHgatc = 0xA9,
    DacDapLgatc = 0xAA,
    DacDapHethd = 0xAB,
    DacDapLethd = 0xAC,
    DacDapHgkpa = 0xAD,
    DacDapLgkpa = 0xAE,
    DacDapHgopa = 0xAF,
    DacDapLgopa = 0xB0,
    DacDapOpt = 0xB1,
    DacDapEna = 0xB5,
}

impl Register {
    /// Every register, in address order.
    pub const ALL: [Self; 52] = [
        Self::ChipAudioRs,
        Self::PllCtrl1,
        Self::PllCtrl2,
        Self::SysclkCtrl,
        Self::ModClkEna,
        Self::ModRstCtrl,
        Self::I2sSrCtrl,
        Self::I2s1LckCtrl,
        Self::I2s1SdoutCtrl,
        Self::I2s1SdinCtrl,
        Self::I2s1MxrSrc,
        Self::I2s1VolCtrl1,
        Self::I2s1VolCtrl2,
        Self::I2s1VolCtrl3,
        Self::I2s1VolCtrl4,
        Self::I2s1MxrGain,
        Self::AdcDigCtrl,
        Self::AdcVolCtrl,
        Self::HmicCtrl1,
        Self::HmicCtrl2,
        Self::HmicStatus,
        Self::DacDigCtrl,
        Self::DacVolCtrl,
        Self::DacMxrSrc,
        Self::DacMxrGain,
        Self::AdcApcCtrl,
        Self::AdcSrc,
        Self::AdcSrcbstCtrl,
        Self::OmixerDacaCtrl,
        Self::OmixerSr,
        Self::OmixerBst1Ctrl,
        Self::HpoutCtrl,
        Self::SpkoutCtrl,
        Self::DacDapCtrl,
        Self::DacDapHhpfc,
        Self::DacDapLhpfc,
        Self::DacDapLhavc,
        Self::DacDapLlavc,
        Self::DacDapRhavc,
        Self::DacDapRlavc,
        Self::DacDapHgdec,
        Self::DacDapLgdec,
        Self::DacDapHgatc,
        Self::DacDapLgatc,
        Self::DacDapHethd,
        Self::DacDapLethd,
        Self::DacDapHgkpa,
        Self::DacDapLgkpa,
        Self::DacDapHgopa,
        Self::DacDapLgopa,
        Self::DacDapOpt,
        Self::DacDapEna,
    ];

    /// Register address byte.
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Look a register up by address.
    #[must_use]
    pub fn from_addr(addr: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.addr() == addr)
    }
}

// ---------------------------------------------------------------------------
// Power-up sequence
// ---------------------------------------------------------------------------

/// Value written to `CHIP_AUDIO_RS` to reset all registers.
pub const CHIP_RESET_VALUE: u16 = 0x0123;

/// Settle time after the reset write.
pub const RESET_SETTLE_MS: u32 = 100;

/// Manufacturer power-up sequence, written in order by `initialize`.
///
/// Reset, PLL from a 256·44.1 kHz MCLK, system clock, module clocks,
/// AIF1 slot routing, then the ADC and DAC analog paths.
pub const POWER_UP_SEQUENCE: [(Register, u16); 18] = [
    (Register::ChipAudioRs, CHIP_RESET_VALUE),
    (Register::SpkoutCtrl, 0xE880),
    // PLL
    (Register::PllCtrl1, 0x014F),
    (Register::PllCtrl2, 0x8600),
    // Clocking system
    (Register::SysclkCtrl, 0x8B08),
    (Register::ModClkEna, MODULES_ENABLED),
    (Register::ModRstCtrl, MODULES_ENABLED),
    // AIF1 routing
    (Register::I2s1SdoutCtrl, 0xC000),
    (Register::I2s1SdinCtrl, 0xC000),
    (Register::I2s1MxrSrc, 0x2200),
    // ADC path
    (Register::AdcSrcbstCtrl, 0xCCC4),
    (Register::AdcSrc, 0x2020),
    (Register::AdcDigCtrl, DIGITAL_ENABLE),
    (Register::AdcApcCtrl, 0xBBC3),
    // DAC path
    (Register::DacMxrSrc, 0xCC00),
    (Register::DacDigCtrl, DIGITAL_ENABLE),
    (Register::OmixerSr, 0x0081),
    (Register::OmixerDacaCtrl, 0xF080),
];

/// `MOD_CLK_ENA` / `MOD_RST_CTRL`: AIF1, ADC digital and DAC digital modules on.
pub const MODULES_ENABLED: u16 = 0x800C;

/// `ADC_DIG_CTRL` / `DAC_DIG_CTRL`: digital block enable.
pub const DIGITAL_ENABLE: u16 = 0x8000;

// ---------------------------------------------------------------------------
// Sample rate
// ---------------------------------------------------------------------------

/// Sample rates the AC101 supports, with their `I2S_SR_CTRL` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleRate {
    /// 8 kHz
    Hz8000,
    /// 11.025 kHz
    Hz11025,
    /// 12 kHz
    Hz12000,
    /// 16 kHz
    Hz16000,
    /// 22.05 kHz
    Hz22050,
    /// 24 kHz
    Hz24000,
    /// 32 kHz
    Hz32000,
    /// 44.1 kHz
    Hz44100,
    /// 48 kHz
    Hz48000,
    /// 96 kHz
    Hz96000,
    /// 192 kHz
    Hz192000,
}

/// `(rate in Hz, I2S_SR_CTRL value)` lookup table.
pub const SAMPLE_RATE_TABLE: [(SampleRate, u32, u16); 11] = [
    (SampleRate::Hz8000, 8_000, 0x0000),
    (SampleRate::Hz11025, 11_025, 0x1000),
    (SampleRate::Hz12000, 12_000, 0x2000),
    (SampleRate::Hz16000, 16_000, 0x3000),
    (SampleRate::Hz22050, 22_050, 0x4000),
    (SampleRate::Hz24000, 24_000, 0x5000),
    (SampleRate::Hz32000, 32_000, 0x6000),
    (SampleRate::Hz44100, 44_100, 0x7000),
    (SampleRate::Hz48000, 48_000, 0x8000),
    (SampleRate::Hz96000, 96_000, 0x9000),
    (SampleRate::Hz192000, 192_000, 0xA000),
];

impl SampleRate {
    /// Look up a supported rate; `None` for anything not in the table.
    #[must_use]
    pub fn from_hz(hz: u32) -> Option<Self> {
        SAMPLE_RATE_TABLE
            .iter()
            .find(|(_, table_hz, _)| *table_hz == hz)
            .map(|(rate, _, _)| *rate)
    }

    fn entry(self) -> (u32, u16) {
        SAMPLE_RATE_TABLE
            .iter()
            .find(|(rate, _, _)| *rate == self)
            .map_or((0, 0), |(_, hz, value)| (*hz, *value))
    }

    /// Rate in Hz.
    #[must_use]
    pub fn hz(self) -> u32 {
        self.entry().0
    }

    /// `I2S_SR_CTRL` register value.
    #[must_use]
    pub fn register_value(self) -> u16 {
        self.entry().1
    }
}

// ---------------------------------------------------------------------------
// I2S1LCK_CTRL fields
// ---------------------------------------------------------------------------

/// Bit 15: AIF1 clock direction; 1 = slave (BCLK/LRCK come from the host).
pub const LCK_MASTER_SHIFT: u16 = 15;
/// AIF1 clock slave.
pub const LCK_SLAVE: u16 = 1;
/// Bit 14: BCLK polarity inverted.
pub const LCK_BCLK_INV_SHIFT: u16 = 14;
/// Bit 13: LRCK polarity inverted.
pub const LCK_LRCK_INV_SHIFT: u16 = 13;
/// Bits 12:9: I2S1CLK / BCLK divider.
pub const LCK_BCLK_DIV_SHIFT: u16 = 9;
/// Bits 8:6: BCLK / LRCK divider.
pub const LCK_LRCK_DIV_SHIFT: u16 = 6;
/// Bits 5:4: word size.
pub const LCK_WORD_SIZE_SHIFT: u16 = 4;
/// Bits 3:2: data format.
pub const LCK_FORMAT_SHIFT: u16 = 2;

/// Data format field: standard I²S.
pub const FORMAT_I2S: u16 = 0b00;

/// `(bits per sample, 2-bit word size field)` lookup table.
///
/// The AC101 word size field tops out at 24 bits; a 32-bit stream is carried
/// in 32-bit slots with the codec taking the 24 most significant bits.
pub const WORD_SIZE_TABLE: [(BitsPerSample, u16); 4] = [
    (BitsPerSample::Bits8, 0b00),
    (BitsPerSample::Bits16, 0b01),
    (BitsPerSample::Bits24, 0b11),
    (BitsPerSample::Bits32, 0b11),
];

/// 2-bit word size field for `bits`.
#[must_use]
pub fn word_size_field(bits: BitsPerSample) -> u16 {
    WORD_SIZE_TABLE
        .iter()
        .find(|(b, _)| *b == bits)
        .map_or(0b01, |(_, field)| *field)
}

/// Slot width in bits for a word length (24-bit words travel in 32-bit slots).
#[must_use]
pub const fn slot_width(bits: BitsPerSample) -> u16 {
    match bits {
        BitsPerSample::Bits8 => 8,
        BitsPerSample::Bits16 => 16,
        BitsPerSample::Bits24 | BitsPerSample::Bits32 => 32,
    }
}

/// `(BCLK divider field, LRCK divider field)` for a slot width.
///
/// LRCK period = 2 slots; I2S1CLK runs at 256·fs, so BCLK div = 256 / LRCK div.
#[must_use]
pub const fn clock_dividers(bits: BitsPerSample) -> (u16, u16) {
    match slot_width(bits) {
        // BCLK_DIV_16, LRCK_DIV_16
        8 => (0x6, 0x0),
        // BCLK_DIV_8, LRCK_DIV_32
        16 => (0x4, 0x1),
        // BCLK_DIV_4, LRCK_DIV_64
        _ => (0x2, 0x2),
    }
}

/// Full `I2S1LCK_CTRL` value: slave mode, normal polarities, I²S format,
/// dividers and word size for `bits`.
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // fields are masked to their widths by construction
pub fn i2s1_clock_control(bits: BitsPerSample) -> u16 {
    let (bclk_div, lrck_div) = clock_dividers(bits);
    (LCK_SLAVE << LCK_MASTER_SHIFT)
        | (bclk_div << LCK_BCLK_DIV_SHIFT)
        | (lrck_div << LCK_LRCK_DIV_SHIFT)
        | (word_size_field(bits) << LCK_WORD_SIZE_SHIFT)
        | (FORMAT_I2S << LCK_FORMAT_SHIFT)
}

// ---------------------------------------------------------------------------
// Output stage
// ---------------------------------------------------------------------------

/// `OMIXER_DACA_CTRL`: analog DAC and output mixer enabled.
pub const OMIXER_DAC_ENABLED: u16 = 0xFF80;
/// `HPOUT_CTRL`: headphone amplifier enabled, routed from the output mixer.
pub const HPOUT_ENABLED: u16 = 0xFBC0;
/// `SPKOUT_CTRL`: speaker amplifier enabled, routed from the output mixer.
pub const SPKOUT_ENABLED: u16 = 0xEABD;
/// Settle time after enabling the output mixer.
pub const OMIXER_SETTLE_MS: u32 = 100;
/// Settle time after enabling the speaker amplifier.
pub const SPKOUT_SETTLE_MS: u32 = 10;

/// Headphone volume field: bits 9:4, 0..=63.
pub const HPOUT_VOLUME_SHIFT: u16 = 4;
/// Headphone volume field mask (unshifted).
pub const HPOUT_VOLUME_MASK: u16 = 0x3F;
/// Speaker volume field: bits 4:0, 0..=31.
pub const SPKOUT_VOLUME_MASK: u16 = 0x1F;

/// Volume scale shared by both outputs (speaker is stored at half resolution).
pub const VOLUME_FULL_SCALE: u8 = 63;

/// Line-in mode: `ADC_SRC` selects the line inputs.
pub const LINE_ADC_SRC: u16 = 0x0408;
/// Line-in mode: `ADC_APC_CTRL` analog power for line inputs.
pub const LINE_ADC_APC: u16 = 0x3BC0;
