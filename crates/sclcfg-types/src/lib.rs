//! Common types for the SCL network configuration compiler.
//!
//! This crate provides type-safe representations of the network primitives
//! shared by the SCL model and compiler crates:
//!
//! - [`VlanId`]: IEEE 802.1Q VLAN identifiers, including the hexadecimal
//!   encoding used by SCL `VLAN-ID` address fields
//! - [`PortName`]: switch port identifiers with the ACL token derivation

mod port;
mod vlan;

pub use port::PortName;
pub use vlan::VlanId;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(u16),

    #[error("invalid VLAN ID text: {0:?}")]
    InvalidVlanText(String),

    #[error("empty port name")]
    EmptyPortName,
}
