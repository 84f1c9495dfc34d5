//! Type definitions for the configuration compiler.

use serde::{Deserialize, Serialize};

use sclcfg_types::VlanId;

/// One row of the port map: a physical link between a switch port and an
/// IED port. Fields are trimmed; a malformed row fills the missing fields
/// with empty strings rather than being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    /// Switch the port belongs to (the partition key).
    pub switch_name: String,
    /// Switch interface name, e.g. `Gi1/0/1`.
    pub port_name: String,
    /// Connected IED name as it appears in the SCL document.
    pub ied_name: String,
    /// Port on the IED side, used in the interface description.
    pub receiving_port_name: String,
}

/// Protection system tier encoded in the switch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtectionTier {
    One,
    Two,
}

impl ProtectionTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProtectionTier::One => "1",
            ProtectionTier::Two => "2",
        }
    }
}

/// PRP redundancy network identity (one of two parallel LANs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrpNetwork {
    A,
    B,
}

impl PrpNetwork {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PrpNetwork::A => "A",
            PrpNetwork::B => "B",
        }
    }
}

/// Traffic direction of a MAC access list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AclDirection {
    /// Ingress: traffic entering the switch port (published by the device).
    In,
    /// Egress: traffic leaving the switch port (subscribed by the device).
    Out,
}

impl AclDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AclDirection::In => "in",
            AclDirection::Out => "out",
        }
    }
}

/// Why a mapped port produced no interface block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The IED name does not resolve in the topology document.
    UnknownDevice,
    /// The row carries no port name.
    EmptyPortName,
}

/// One port excluded from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPort {
    pub port_name: String,
    pub ied_name: String,
    pub reason: SkipReason,
}

/// Degraded-mode events observed during one build.
///
/// None of these abort the build; the report makes visible what the output
/// silently leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileReport {
    /// Ports excluded from the interface section.
    pub skipped_ports: Vec<SkippedPort>,
    /// 1-based line numbers of CSV rows with fewer than four fields.
    pub short_rows: Vec<usize>,
    /// VLAN ids observed on the switch with no registry entry, ascending.
    pub unnamed_vlans: Vec<VlanId>,
    /// Set when the selected switch name did not match the naming
    /// convention and the build fell back to tier 2 / LAN B.
    pub unrecognized_switch_name: Option<String>,
}

impl CompileReport {
    /// True when the build degraded nothing.
    pub fn is_clean(&self) -> bool {
        self.skipped_ports.is_empty()
            && self.short_rows.is_empty()
            && self.unnamed_vlans.is_empty()
            && self.unrecognized_switch_name.is_none()
    }
}
