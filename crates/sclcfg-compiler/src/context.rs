//! Switch context: identity decoded from the switch naming convention.

use serde::{Deserialize, Serialize};

use sclcfg_types::VlanId;

use crate::types::{PrpNetwork, ProtectionTier};

/// Context derived once per build from the selected switch name.
///
/// Switch names follow a fixed positional convention:
///
/// ```text
/// index:      0 1 2 3 4 5 6 7 8 …
///             └─────┘     │   │
///             substation  │   └ PRP network digit (odd = A, even = B)
///                         └ protection tier digit ('1' = tier 1, else tier 2)
/// ```
///
/// A name is recognized iff it is at least nine ASCII characters long with
/// digits at indices 6 and 8. A non-conforming name still yields a usable
/// context (a missing or non-digit position falls back to tier 2 and LAN B)
/// with `recognized` cleared, so the build can report the malformed name
/// instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchContext {
    /// Substation id: the first three characters of the switch name.
    pub substation: String,
    pub tier: ProtectionTier,
    pub network: PrpNetwork,
    /// Caller-supplied native VLAN for every trunk port.
    pub native_vlan: VlanId,
    /// False when the name did not match the positional convention.
    pub recognized: bool,
}

impl SwitchContext {
    /// Decodes a switch name against the positional grammar.
    pub fn parse(switch_name: &str, native_vlan: VlanId) -> Self {
        let bytes = switch_name.as_bytes();
        let recognized = bytes.len() >= 9
            && switch_name.is_ascii()
            && bytes[6].is_ascii_digit()
            && bytes[8].is_ascii_digit();

        let tier = match bytes.get(6) {
            Some(b'1') => ProtectionTier::One,
            _ => ProtectionTier::Two,
        };
        let network = match bytes.get(8) {
            Some(digit) if digit.is_ascii_digit() && (digit - b'0') % 2 == 1 => PrpNetwork::A,
            _ => PrpNetwork::B,
        };

        SwitchContext {
            substation: switch_name.chars().take(3).collect(),
            tier,
            network,
            native_vlan,
            recognized,
        }
    }
}
