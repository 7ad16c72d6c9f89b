//! Mock implementations for testing
//!
//! Host-side stand-ins for the external collaborators the components are
//! written against, for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

/// One recorded I²C write: device address plus the bytes sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    /// 7-bit device address.
    pub address: u8,
    /// Bytes written, register address first.
    pub bytes: Vec<u8>,
}

impl RecordedWrite {
    /// Register address (first byte), if any byte was written.
    pub fn register(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Big-endian 16-bit register value (second and third byte).
    pub fn value_u16(&self) -> Option<u16> {
        match self.bytes.as_slice() {
            [_, hi, lo] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }
}

/// Recording I²C bus with optional fault injection.
///
/// Every write is recorded, including the one that is made to fail.
/// Reads are not expected by the components and always fail.
#[derive(Debug, Default)]
pub struct MockI2c {
    writes: Vec<RecordedWrite>,
    fail_at: Option<usize>,
    attempts: usize,
}

impl MockI2c {
    /// Create a bus on which every write succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bus whose `index`-th write (0-based) fails with
    /// [`ErrorKind::Other`].
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// All write attempts so far, in order.
    pub fn writes(&self) -> &[RecordedWrite] {
        &self.writes
    }

    /// `(register, value)` pairs of every 3-byte write, in order.
    pub fn register_writes(&self) -> Vec<(u8, u16)> {
        self.writes
            .iter()
            .filter_map(|w| Some((w.register()?, w.value_u16()?)))
            .collect()
    }

    /// Forget recorded writes (fault injection stays armed).
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations.iter() {
            match op {
                Operation::Write(data) => {
                    self.writes.push(RecordedWrite {
                        address,
                        bytes: data.to_vec(),
                    });
                    let attempt = self.attempts;
                    self.attempts = self.attempts.saturating_add(1);
                    if self.fail_at == Some(attempt) {
                        return Err(ErrorKind::Other);
                    }
                }
                Operation::Read(_) => return Err(ErrorKind::Other),
            }
        }
        Ok(())
    }
}

/// Delay source that returns immediately but totals the requested time.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    /// Create a delay with nothing accumulated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay in milliseconds (rounded down).
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns = self.total_ns.saturating_add(u64::from(ns));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn records_register_value_pairs() {
        let mut bus = MockI2c::new();
        bus.write(0x1A, &[0x06, 0x30, 0x00]).unwrap();
        bus.write(0x1A, &[0x10, 0x80, 0x10]).unwrap();
        assert_eq!(bus.register_writes(), vec![(0x06, 0x3000), (0x10, 0x8010)]);
        assert!(bus.writes().iter().all(|w| w.address == 0x1A));
    }

    #[test]
    fn injected_fault_hits_only_the_chosen_write() {
        let mut bus = MockI2c::failing_at(1);
        assert!(bus.write(0x1A, &[0x00, 0x01, 0x23]).is_ok());
        assert_eq!(bus.write(0x1A, &[0x58, 0xE8, 0x80]), Err(ErrorKind::Other));
        assert!(bus.write(0x1A, &[0x01, 0x01, 0x4F]).is_ok());
        assert_eq!(bus.writes().len(), 3);
    }

    #[test]
    fn reads_are_rejected() {
        let mut bus = MockI2c::new();
        let mut buf = [0u8; 2];
        assert!(bus.read(0x1A, &mut buf).is_err());
    }

    #[test]
    fn delay_accumulates() {
        let mut delay = MockDelay::new();
        delay.delay_ms(100);
        delay.delay_ms(10);
        assert_eq!(delay.total_ms(), 110);
    }
}
