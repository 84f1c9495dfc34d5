//! VLAN ID type with validation and SCL hexadecimal decoding.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IEEE 802.1Q VLAN identifier (1-4094).
///
/// VLAN 0 is reserved; SCL address blocks use it (and malformed text) as an
/// "unset" sentinel, which is why [`VlanId::from_hex`] returns `None` for it.
/// VLAN 4095 is reserved. Valid range is 1-4094.
///
/// # Examples
///
/// ```
/// use sclcfg_types::VlanId;
///
/// let vlan = VlanId::new(100).unwrap();
/// assert_eq!(vlan.as_u16(), 100);
///
/// // SCL VLAN-ID fields are hexadecimal text
/// assert_eq!(VlanId::from_hex("065"), VlanId::new(101).ok());
///
/// // The unset sentinel and malformed text both decode to None
/// assert_eq!(VlanId::from_hex("000"), None);
/// assert_eq!(VlanId::from_hex("garbage"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    /// Minimum valid VLAN ID.
    pub const MIN: u16 = 1;

    /// Maximum valid VLAN ID.
    pub const MAX: u16 = 4094;

    /// Creates a new VLAN ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the VLAN ID is not in the valid range (1-4094).
    pub const fn new(id: u16) -> Result<Self, ParseError> {
        if id >= Self::MIN && id <= Self::MAX {
            Ok(VlanId(id))
        } else {
            Err(ParseError::InvalidVlanId(id))
        }
    }

    /// Decodes an SCL `VLAN-ID` field (hexadecimal text).
    ///
    /// Returns `None` for the VLAN 0 sentinel, malformed text, and
    /// out-of-range values, all of which mean "no VLAN assigned" to the
    /// compiler.
    pub fn from_hex(text: &str) -> Option<Self> {
        let id = u16::from_str_radix(text.trim(), 16).ok()?;
        VlanId::new(id).ok()
    }

    /// Returns the VLAN ID as a u16.
    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VlanId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u16 = s
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidVlanText(s.to_string()))?;

        VlanId::new(id)
    }
}

impl TryFrom<u16> for VlanId {
    type Error = ParseError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        VlanId::new(id)
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> u16 {
        vlan.0
    }
}
