//! Configuration command builders for the Cisco IE-9320 dialect.
//!
//! Every literal the compiler emits lives here. Downstream provisioning
//! tooling diffs this output byte-for-byte, so the exact spelling of each
//! command (including the catch-all permit's internal spacing and the
//! description line's trailing space) is part of the contract.

use sclcfg_types::{PortName, VlanId};

use crate::context::SwitchContext;
use crate::types::AclDirection;

/// Section/block separator line.
pub const SEPARATOR: &str = "!";

/// Trunk mode command.
pub const TRUNK_MODE_CMD: &str = "  switchport mode trunk";

/// Load interval command.
pub const LOAD_INTERVAL_CMD: &str = "  load-interval 30";

/// Spanning tree portfast command.
pub const PORTFAST_CMD: &str = "  spanning-tree portfast trunk";

/// Ingress service policy command.
pub const SERVICE_POLICY_INPUT_CMD: &str = "  service-policy input pm-dss-prot-vlan-mark-in";

/// Egress service policy command.
pub const SERVICE_POLICY_OUTPUT_CMD: &str = "  service-policy output pm-dss-lan-out";

/// Speed negotiation disable command (device quirk).
pub const SPEED_NONEGOTIATE_CMD: &str = "  speed nonegotiate";

/// Default ACL deny tail: drop remaining Sampled Values traffic
/// (ethertype 0x88ba) before the catch-all permit.
pub const DEFAULT_DENY_TAIL: &str = "deny any any 0x88ba 0x0";

/// Catch-all permit closing every access list. The internal spacing is a
/// dialect literal.
pub const CATCH_ALL_PERMIT_CMD: &str = "  permit   any any";

/// Header comment of the ACL removal section.
pub const ACL_REMOVAL_HEADER: &str = "!\n! ACL Removal Command\n!";

/// Maximum length of a VLAN name statement.
pub const VLAN_NAME_MAX_LEN: usize = 32;

/// ACL policy literals that vary between substations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclPolicy {
    /// The deny line emitted before the catch-all permit, without
    /// indentation.
    pub deny_tail: String,
}

impl Default for AclPolicy {
    fn default() -> Self {
        AclPolicy {
            deny_tail: DEFAULT_DENY_TAIL.to_string(),
        }
    }
}

/// Access-list name for a port and direction, e.g. `al-Gi1/0/1-in`.
pub fn acl_name(port: &PortName, direction: AclDirection) -> String {
    format!("al-{}-{}", port.acl_token(), direction.as_str())
}

/// Build interface statement
pub fn build_interface_cmd(port: &PortName) -> String {
    format!("interface {}", port)
}

/// Build interface description line.
///
/// The trailing space is carried verbatim from the deployed revision of
/// this generator; removing it would churn every provisioning diff.
pub fn build_description_cmd(ctx: &SwitchContext, ied_name: &str, receiving_port: &str) -> String {
    format!(
        "  description {} Protection {} LAN {} to {} {} ",
        ctx.substation,
        ctx.tier.as_str(),
        ctx.network.as_str(),
        ied_name,
        receiving_port
    )
}

/// Build trunk native VLAN command.
pub fn build_trunk_native_cmd(native_vlan: VlanId) -> String {
    format!("  switchport trunk native vlan {}", native_vlan)
}

/// Build trunk allowed VLAN command: the native VLAN first, then the
/// device's VLANs ascending.
pub fn build_trunk_allowed_cmd(native_vlan: VlanId, vlans: &[VlanId]) -> String {
    let mut cmd = format!("  switchport trunk allowed vlan {}", native_vlan);
    for vlan in vlans {
        cmd.push(',');
        cmd.push_str(&vlan.to_string());
    }
    cmd
}

/// Build ACL group reference line for an interface block.
pub fn build_acl_group_cmd(acl: &str, direction: AclDirection) -> String {
    format!("  mac access-group {} {}", acl, direction.as_str())
}

/// Build access-list header statement.
pub fn build_acl_header_cmd(acl: &str) -> String {
    format!("mac access-list extended {}", acl)
}

/// Build ingress permit line: traffic from the given host address.
pub fn build_permit_ingress_cmd(mac: &str) -> String {
    format!("  permit host {} any", mac)
}

/// Build egress permit line: traffic to the given host address.
pub fn build_permit_egress_cmd(mac: &str) -> String {
    format!("  permit any host {}", mac)
}

/// Build the removal command for a created access list.
pub fn build_acl_removal_cmd(acl_header: &str) -> String {
    format!("no {}", acl_header)
}

/// Build one VLAN naming block: separator, id, truncated name.
pub fn build_vlan_name_block(vlan_id: VlanId, label: &str) -> String {
    format!(
        "{}\nvlan {}\n  name {}",
        SEPARATOR,
        vlan_id,
        config_vlan_name(label)
    )
}

/// Mangles a VLAN label into the dialect's name token: truncated to 32
/// characters, every space replaced with an underscore.
fn config_vlan_name(label: &str) -> String {
    label
        .chars()
        .take(VLAN_NAME_MAX_LEN)
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
