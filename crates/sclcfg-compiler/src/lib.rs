//! sclcfg-compiler - switch configuration compiler for SCL substations
//!
//! Joins a physical port map (CSV) with an SCL topology document and
//! compiles, for one selected Ethernet switch, the per-port trunk
//! configuration, MAC access lists, VLAN naming statements, and the ACL
//! removal section as one deterministic Cisco IE-9320 configuration text.

mod acl;
mod commands;
mod compile;
mod context;
mod interface;
mod port_map;
mod quirks;
mod types;
mod vlan_names;

pub use acl::AccessList;
pub use commands::{acl_name, AclPolicy, DEFAULT_DENY_TAIL};
pub use compile::{compile, CompileOptions, CompileOutput, ConfigDocument};
pub use context::SwitchContext;
pub use interface::trunk_vlan_tail;
pub use port_map::PortMap;
pub use quirks::{QuirkEntry, QuirkTable};
pub use types::{
    AclDirection, CompileReport, PortMapping, PrpNetwork, ProtectionTier, SkipReason, SkippedPort,
};
