//! Software mirror of the AC101 register file
//!
//! Records every value the driver has successfully written since the last
//! reset. It is the driver's only source for read-modify-write: the chip is
//! never read back.

use heapless::LinearMap;

use super::registers::Register;

/// Capacity of the mirror; larger than the AC101 register count.
const CAPACITY: usize = 64;

/// Register address → last value written.
#[derive(Debug, Clone, Default)]
pub struct RegisterMap {
    values: LinearMap<u8, u16, CAPACITY>,
}

impl RegisterMap {
    /// Empty mirror (state right after chip reset, as far as software knows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to `register`, if any.
    pub fn get(&self, register: Register) -> Option<u16> {
        self.get_raw(register.addr())
    }

    /// Last value written to the register at `addr`, if any.
    pub fn get_raw(&self, addr: u8) -> Option<u16> {
        self.values.get(&addr).copied()
    }

    /// Number of registers with a known value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(address, value)` pairs, in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u16)> + '_ {
        self.values.iter().map(|(addr, value)| (*addr, *value))
    }

    pub(crate) fn set(&mut self, register: Register, value: u16) {
        // CAPACITY exceeds Register::ALL.len(), so insert cannot run out of room.
        let _ = self.values.insert(register.addr(), value);
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}
