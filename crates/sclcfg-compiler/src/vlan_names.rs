//! VLAN naming section: one naming block per observed, registered VLAN id.

use std::collections::BTreeSet;

use sclcfg_scl::VlanRegistry;
use sclcfg_types::VlanId;

use crate::commands::build_vlan_name_block;

/// Emits naming blocks for every VLAN id observed on the switch that has a
/// registry entry, ascending by numeric id. Unregistered ids are skipped
/// and returned separately for the compile report.
///
/// Grouping is by id, never by the rendered name: two ids with identical
/// labels stay two blocks.
pub fn emit_vlan_names(
    observed: &BTreeSet<VlanId>,
    registry: &VlanRegistry,
) -> (Vec<String>, Vec<VlanId>) {
    let mut blocks = Vec::new();
    let mut unnamed = Vec::new();

    for &vlan_id in observed {
        match registry.name_for(vlan_id) {
            Some(allocation) => {
                blocks.push(build_vlan_name_block(vlan_id, &allocation.label()));
            }
            None => unnamed.push(vlan_id),
        }
    }

    (blocks, unnamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use sclcfg_scl::SclDocument;

    const DOC: &str = r#"
        <SCL>
          <Private type="Transpower-VLAN-Allocation">
            <tp:Station>
              <tp:VLAN serviceName="GOOSE" serviceType="Protection" useCase="Trip"
                       prot1Id="065" prot2Id="0C9"/>
              <tp:VLAN serviceName="SMV" serviceType="Process" useCase="Metering"
                       prot1Id="3E9" prot2Id="3EA"/>
            </tp:Station>
            <tp:Bus>
              <tp:VLAN serviceName="Interlock" serviceType="Bay" useCase="Control"
                       prot1Id="066" prot2Id="0CA" busName="Bus 1"/>
            </tp:Bus>
          </Private>
        </SCL>
    "#;

    fn registry() -> VlanRegistry {
        VlanRegistry::build(&SclDocument::from_xml(DOC).unwrap())
    }

    fn observed(ids: &[u16]) -> BTreeSet<VlanId> {
        ids.iter().map(|&id| VlanId::new(id).unwrap()).collect()
    }

    #[test]
    fn test_blocks_ascending_by_numeric_id() {
        // 0x3E9 = 1001, 0x65 = 101, 0x66 = 102
        let (blocks, unnamed) = emit_vlan_names(&observed(&[1001, 101, 102]), &registry());

        assert!(unnamed.is_empty());
        assert_eq!(
            blocks,
            vec![
                "!\nvlan 101\n  name GOOSE_Protection_Trip".to_string(),
                "!\nvlan 102\n  name Interlock_Bay_Control_Bus_1".to_string(),
                "!\nvlan 1001\n  name SMV_Process_Metering".to_string(),
            ]
        );
    }

    #[test]
    fn test_unregistered_ids_skipped_and_reported() {
        let (blocks, unnamed) = emit_vlan_names(&observed(&[101, 555]), &registry());

        assert_eq!(blocks.len(), 1);
        assert_eq!(unnamed, vec![VlanId::new(555).unwrap()]);
    }

    #[test]
    fn test_empty_observed_set() {
        let (blocks, unnamed) = emit_vlan_names(&BTreeSet::new(), &registry());
        assert!(blocks.is_empty());
        assert!(unnamed.is_empty());
    }
}
