//! The compilation entry point: port map + SCL indexes → configuration text.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use sclcfg_scl::{TopologyIndex, VlanRegistry};
use sclcfg_types::{PortName, VlanId};

use crate::acl::AccessList;
use crate::commands::{AclPolicy, ACL_REMOVAL_HEADER, SEPARATOR};
use crate::context::SwitchContext;
use crate::interface::{build_interface_block, trunk_vlan_tail};
use crate::port_map::PortMap;
use crate::quirks::QuirkTable;
use crate::types::{AclDirection, CompileReport, SkipReason, SkippedPort};
use crate::vlan_names::emit_vlan_names;

/// Knobs of one build. `Default` matches the deployed generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub native_vlan: VlanId,
    pub acl_policy: AclPolicy,
    pub quirks: QuirkTable,
}

impl CompileOptions {
    /// Options with the given native VLAN and default policy/quirks.
    pub fn new(native_vlan: VlanId) -> Self {
        CompileOptions {
            native_vlan,
            acl_policy: AclPolicy::default(),
            quirks: QuirkTable::builtin(),
        }
    }
}

/// The five output sections, in emission order.
///
/// Each section carries its own separators; [`ConfigDocument::render`]
/// concatenates them with single newlines and nothing else. The order is a
/// correctness requirement of the dialect, not a formatting choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    pub vlan_names: String,
    pub interfaces: String,
    pub acls_in: String,
    pub acls_out: String,
    /// Removal commands, starting with its own separator line.
    pub removal: String,
}

impl ConfigDocument {
    /// Renders the final configuration text.
    pub fn render(&self) -> String {
        [
            self.vlan_names.as_str(),
            self.interfaces.as_str(),
            self.acls_in.as_str(),
            self.acls_out.as_str(),
            ACL_REMOVAL_HEADER,
            self.removal.as_str(),
        ]
        .join("\n")
    }
}

/// Result of one build: the document plus everything it silently left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    pub document: ConfigDocument,
    pub report: CompileReport,
}

/// Compiles the configuration for one switch.
///
/// Pure function of its inputs: no I/O, no shared state, byte-identical
/// output for identical inputs. Nothing aborts a build. Ports of other
/// switches, unknown devices, and unset VLANs contribute nothing; a
/// malformed switch name degrades to default tier/network context and is
/// recorded in the report.
pub fn compile(
    port_map: &PortMap,
    topology: &TopologyIndex,
    registry: &VlanRegistry,
    switch_name: &str,
    options: &CompileOptions,
) -> CompileOutput {
    let ctx = SwitchContext::parse(switch_name, options.native_vlan);

    let mut report = CompileReport {
        short_rows: port_map.short_rows().to_vec(),
        ..CompileReport::default()
    };
    if !ctx.recognized {
        warn!(
            switch = %switch_name,
            "switch name does not match the naming convention, decoding what it can"
        );
        report.unrecognized_switch_name = Some(switch_name.to_string());
    }

    let mut interface_blocks: Vec<String> = Vec::new();
    let mut acls_in: Vec<String> = Vec::new();
    let mut acls_out: Vec<String> = Vec::new();
    let mut removal_cmds: Vec<String> = vec![SEPARATOR.to_string()];
    let mut observed_vlans: BTreeSet<VlanId> = BTreeSet::new();

    for mapping in port_map.ports_for(switch_name) {
        let port = match PortName::new(mapping.port_name.as_str()) {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    ied = %mapping.ied_name,
                    "skipping row without a port name"
                );
                report.skipped_ports.push(SkippedPort {
                    port_name: mapping.port_name.clone(),
                    ied_name: mapping.ied_name.clone(),
                    reason: SkipReason::EmptyPortName,
                });
                continue;
            }
        };

        let device = match topology.device(&mapping.ied_name) {
            Some(device) => device,
            None => {
                warn!(
                    port = %port,
                    ied = %mapping.ied_name,
                    "device not in the SCL document, port excluded"
                );
                report.skipped_ports.push(SkippedPort {
                    port_name: mapping.port_name.clone(),
                    ied_name: mapping.ied_name.clone(),
                    reason: SkipReason::UnknownDevice,
                });
                continue;
            }
        };

        let endpoints = topology.endpoints(&mapping.ied_name);
        observed_vlans.extend(endpoints.iter().filter_map(|e| e.vlan_id));
        let trunk_tail = trunk_vlan_tail(endpoints, ctx.native_vlan);

        let acl_in = AccessList::build(&port, AclDirection::In, endpoints);
        let acl_out = AccessList::build(&port, AclDirection::Out, endpoints);

        debug!(
            port = %port,
            ied = %mapping.ied_name,
            vlans = trunk_tail.len(),
            acl_in = acl_in.is_some(),
            acl_out = acl_out.is_some(),
            "building interface block"
        );

        interface_blocks.push(build_interface_block(
            &ctx,
            mapping,
            &port,
            device,
            &trunk_tail,
            &options.quirks,
            acl_in.as_ref(),
            acl_out.as_ref(),
        ));

        // Creation order fixes the removal order: per port, ingress first
        if let Some(acl) = acl_in {
            removal_cmds.push(acl.removal_cmd());
            acls_in.push(acl.render(&options.acl_policy));
        }
        if let Some(acl) = acl_out {
            removal_cmds.push(acl.removal_cmd());
            acls_out.push(acl.render(&options.acl_policy));
        }
    }

    let (name_blocks, unnamed) = emit_vlan_names(&observed_vlans, registry);
    report.unnamed_vlans = unnamed;
    for vlan in &report.unnamed_vlans {
        warn!(vlan = %vlan, "no VLAN allocation entry, naming statement skipped");
    }

    let document = ConfigDocument {
        vlan_names: name_blocks.join("\n"),
        interfaces: interface_blocks.join("\n"),
        acls_in: acls_in.join("\n"),
        acls_out: acls_out.join("\n"),
        removal: removal_cmds.join("\n"),
    };

    CompileOutput { document, report }
}
