// src/common/address.rs

use core::fmt;
use core::str::FromStr;

/// Reasons a device address string is rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum AddressError {
    #[error("Expected 6 octets, found {0}")]
    WrongOctetCount(usize),
    #[error("Invalid octet at position {0}")]
    InvalidOctet(usize),
}

/// 48-bit Bluetooth device address of the sword sensor.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct DeviceAddr([u8; 6]);

impl DeviceAddr {
    /// The board the training rig ships with.
    pub const DEFAULT_ADDRESS: DeviceAddr = DeviceAddr([0x98, 0x4f, 0xee, 0x10, 0xd4, 0x90]);

    pub const fn new(octets: [u8; 6]) -> Self {
        DeviceAddr(octets)
    }

    #[inline]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Parses `aa:bb:cc:dd:ee:ff`. Either `:` or `-` separates octets, hex is
    /// case-insensitive.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let mut octets = [0u8; 6];
        let mut count = 0;
        for (i, part) in s.split(|c: char| c == ':' || c == '-').enumerate() {
            if i >= octets.len() {
                count = i + 1;
                continue;
            }
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(AddressError::InvalidOctet(i));
            }
            octets[i] = u8::from_str_radix(part, 16).map_err(|_| AddressError::InvalidOctet(i))?;
            count = i + 1;
        }
        if count != octets.len() {
            return Err(AddressError::WrongOctetCount(count));
        }
        Ok(DeviceAddr(octets))
    }
}

impl Default for DeviceAddr {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl FromStr for DeviceAddr {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 6]> for DeviceAddr {
    fn from(value: [u8; 6]) -> Self {
        DeviceAddr(value)
    }
}

impl fmt::Display for DeviceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}", a, b, c, d, e, g)
    }
}
