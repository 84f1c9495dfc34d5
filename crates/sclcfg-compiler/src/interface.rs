//! Interface block builder: one trunk configuration block per mapped port.

use std::collections::BTreeSet;

use sclcfg_scl::{Device, Endpoint};
use sclcfg_types::{PortName, VlanId};

use crate::acl::AccessList;
use crate::commands::{
    build_acl_group_cmd, build_description_cmd, build_interface_cmd, build_trunk_allowed_cmd,
    build_trunk_native_cmd, LOAD_INTERVAL_CMD, PORTFAST_CMD, SEPARATOR, SERVICE_POLICY_INPUT_CMD,
    SERVICE_POLICY_OUTPUT_CMD, TRUNK_MODE_CMD,
};
use crate::context::SwitchContext;
use crate::quirks::QuirkTable;
use crate::types::PortMapping;

/// Collects the device's VLAN ids into the trunk tail: deduplicated,
/// ascending, with the unset sentinel already filtered at the index and the
/// native VLAN removed (it is rendered first on the allowed line).
pub fn trunk_vlan_tail(endpoints: &[Endpoint], native_vlan: VlanId) -> Vec<VlanId> {
    let vlans: BTreeSet<VlanId> = endpoints.iter().filter_map(|e| e.vlan_id).collect();
    vlans.into_iter().filter(|v| *v != native_vlan).collect()
}

/// Renders one interface configuration block.
///
/// Line order is fixed by the dialect: description, trunk VLANs, trunk
/// mode, load interval, device quirks, portfast, service policies, ACL
/// group references, separator.
#[allow(clippy::too_many_arguments)]
pub fn build_interface_block(
    ctx: &SwitchContext,
    mapping: &PortMapping,
    port: &PortName,
    device: &Device,
    trunk_tail: &[VlanId],
    quirks: &QuirkTable,
    acl_in: Option<&AccessList>,
    acl_out: Option<&AccessList>,
) -> String {
    let mut lines = Vec::with_capacity(12);

    lines.push(build_interface_cmd(port));
    lines.push(build_description_cmd(
        ctx,
        &mapping.ied_name,
        &mapping.receiving_port_name,
    ));
    lines.push(build_trunk_native_cmd(ctx.native_vlan));
    lines.push(build_trunk_allowed_cmd(ctx.native_vlan, trunk_tail));
    lines.push(TRUNK_MODE_CMD.to_string());
    lines.push(LOAD_INTERVAL_CMD.to_string());
    if let Some(quirk_lines) = quirks.lookup(&device.manufacturer, &device.ied_type) {
        lines.extend(quirk_lines.iter().cloned());
    }
    lines.push(PORTFAST_CMD.to_string());
    lines.push(SERVICE_POLICY_INPUT_CMD.to_string());
    lines.push(SERVICE_POLICY_OUTPUT_CMD.to_string());
    if let Some(acl) = acl_in {
        lines.push(build_acl_group_cmd(&acl.name, acl.direction));
    }
    if let Some(acl) = acl_out {
        lines.push(build_acl_group_cmd(&acl.name, acl.direction));
    }
    lines.push(SEPARATOR.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use sclcfg_scl::EndpointCategory;
    use crate::types::{AclDirection, PrpNetwork, ProtectionTier};

    fn ctx() -> SwitchContext {
        SwitchContext {
            substation: "HAM".to_string(),
            tier: ProtectionTier::One,
            network: PrpNetwork::A,
            native_vlan: VlanId::new(1000).unwrap(),
            recognized: true,
        }
    }

    fn mapping() -> PortMapping {
        PortMapping {
            switch_name: "HAM-SW101".to_string(),
            port_name: "Gi1/0/1".to_string(),
            ied_name: "PROT_A".to_string(),
            receiving_port_name: "ETH1".to_string(),
        }
    }

    fn device(manufacturer: &str, ied_type: &str) -> Device {
        Device {
            name: "PROT_A".to_string(),
            manufacturer: manufacturer.to_string(),
            ied_type: ied_type.to_string(),
        }
    }

    fn endpoint(vlan: u16) -> Endpoint {
        Endpoint {
            category: EndpointCategory::GoosePublish,
            vlan_id: VlanId::new(vlan).ok(),
            mac: None,
        }
    }

    #[test]
    fn test_trunk_vlan_tail_sorted_numeric_dedup() {
        let native = VlanId::new(1000).unwrap();
        let endpoints = vec![endpoint(1001), endpoint(101), endpoint(101), endpoint(102)];

        let tail = trunk_vlan_tail(&endpoints, native);
        let ids: Vec<u16> = tail.iter().map(|v| v.as_u16()).collect();
        // Numeric ascending, not lexicographic: 101 before 1001
        assert_eq!(ids, vec![101, 102, 1001]);
    }

    #[test]
    fn test_trunk_vlan_tail_excludes_native() {
        let native = VlanId::new(1000).unwrap();
        let endpoints = vec![endpoint(1000), endpoint(101)];

        let tail = trunk_vlan_tail(&endpoints, native);
        assert_eq!(tail, vec![VlanId::new(101).unwrap()]);
    }

    #[test]
    fn test_block_without_quirk_or_acls() {
        let port: PortName = "Gi1/0/1".parse().unwrap();
        let tail = vec![VlanId::new(101).unwrap()];

        let block = build_interface_block(
            &ctx(),
            &mapping(),
            &port,
            &device("GE", "P746"),
            &tail,
            &QuirkTable::builtin(),
            None,
            None,
        );

        assert_eq!(
            block,
            "interface Gi1/0/1\n\
             \x20 description HAM Protection 1 LAN A to PROT_A ETH1 \n\
             \x20 switchport trunk native vlan 1000\n\
             \x20 switchport trunk allowed vlan 1000,101\n\
             \x20 switchport mode trunk\n\
             \x20 load-interval 30\n\
             \x20 spanning-tree portfast trunk\n\
             \x20 service-policy input pm-dss-prot-vlan-mark-in\n\
             \x20 service-policy output pm-dss-lan-out\n\
             !"
        );
    }

    #[test]
    fn test_block_with_quirk_line() {
        let port: PortName = "Gi1/0/1".parse().unwrap();

        let block = build_interface_block(
            &ctx(),
            &mapping(),
            &port,
            &device("SEL", "SEL_411L_2S"),
            &[],
            &QuirkTable::builtin(),
            None,
            None,
        );

        let lines: Vec<&str> = block.lines().collect();
        let load_idx = lines
            .iter()
            .position(|l| *l == "  load-interval 30")
            .unwrap();
        assert_eq!(lines[load_idx + 1], "  speed nonegotiate");
        assert_eq!(block.matches("speed nonegotiate").count(), 1);
    }

    #[test]
    fn test_block_with_acl_references() {
        let port: PortName = "Gi1/0/1".parse().unwrap();
        let acl_in = AccessList {
            name: "al-Gi1/0/1-in".to_string(),
            direction: AclDirection::In,
            macs: vec!["01-0C-CD-01-00-01".to_string()],
        };
        let acl_out = AccessList {
            name: "al-Gi1/0/1-out".to_string(),
            direction: AclDirection::Out,
            macs: vec!["01-0C-CD-04-00-09".to_string()],
        };

        let block = build_interface_block(
            &ctx(),
            &mapping(),
            &port,
            &device("GE", "P746"),
            &[],
            &QuirkTable::builtin(),
            Some(&acl_in),
            Some(&acl_out),
        );

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[lines.len() - 3], "  mac access-group al-Gi1/0/1-in in");
        assert_eq!(
            lines[lines.len() - 2],
            "  mac access-group al-Gi1/0/1-out out"
        );
        assert_eq!(lines[lines.len() - 1], "!");
    }
}
