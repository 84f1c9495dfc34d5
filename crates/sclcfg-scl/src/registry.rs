//! VLAN allocation registry: VLAN id → service naming metadata.

use std::collections::HashMap;

use sclcfg_types::VlanId;

use crate::model::{SclDocument, VlanElement, VLAN_ALLOCATION_TYPE};

/// Naming metadata for one allocated VLAN id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanAllocation {
    pub service_name: String,
    pub service_type: String,
    pub use_case: String,
    /// Present for bus-scoped allocations only.
    pub bus_name: Option<String>,
}

impl VlanAllocation {
    /// Human-readable label, space-joined:
    /// `serviceName serviceType useCase[ busName]`.
    ///
    /// Dialect-specific mangling (truncation, underscores) is left to the
    /// emitter.
    pub fn label(&self) -> String {
        let mut label = format!(
            "{} {} {}",
            self.service_name, self.service_type, self.use_case
        );
        if let Some(bus) = &self.bus_name {
            label.push(' ');
            label.push_str(bus);
        }
        label
    }
}

/// Read-only VLAN id → allocation index.
///
/// Every allocation entry carries one hex id per protection system tier;
/// both ids point at the same metadata. Station-scoped entries are indexed
/// before bus-scoped ones, so a bus entry wins when the same numeric id
/// appears in both scopes.
#[derive(Debug, Default)]
pub struct VlanRegistry {
    allocations: HashMap<VlanId, VlanAllocation>,
}

impl VlanRegistry {
    /// Builds the registry from the document's VLAN allocation section.
    ///
    /// A document without that section yields an empty registry.
    pub fn build(doc: &SclDocument) -> Self {
        let mut allocations = HashMap::new();

        let containers = doc
            .privates
            .iter()
            .filter(|p| p.private_type == VLAN_ALLOCATION_TYPE);

        for container in containers {
            let station_vlans = container.stations.iter().flat_map(|s| s.vlans.iter());
            for vlan in station_vlans {
                insert_both_tiers(&mut allocations, vlan);
            }
            let bus_vlans = container.buses.iter().flat_map(|b| b.vlans.iter());
            for vlan in bus_vlans {
                insert_both_tiers(&mut allocations, vlan);
            }
        }

        VlanRegistry { allocations }
    }

    /// Looks up the allocation metadata for a VLAN id.
    pub fn name_for(&self, vlan_id: VlanId) -> Option<&VlanAllocation> {
        self.allocations.get(&vlan_id)
    }

    /// Number of indexed VLAN ids.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}

fn insert_both_tiers(allocations: &mut HashMap<VlanId, VlanAllocation>, vlan: &VlanElement) {
    let allocation = VlanAllocation {
        service_name: vlan.service_name.clone(),
        service_type: vlan.service_type.clone(),
        use_case: vlan.use_case.clone(),
        bus_name: if vlan.bus_name.is_empty() {
            None
        } else {
            Some(vlan.bus_name.clone())
        },
    };

    for id_text in [&vlan.prot1_id, &vlan.prot2_id] {
        if let Some(vlan_id) = VlanId::from_hex(id_text) {
            allocations.insert(vlan_id, allocation.clone());
        }
    }
}
