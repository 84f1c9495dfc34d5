//! Topology index: typed device/endpoint lookups over an SCL document.

use std::collections::HashMap;

use tracing::warn;

use sclcfg_types::VlanId;

use crate::model::{
    AddressElement, SclDocument, GSE_SUBSCRIBE_TYPE, P_TYPE_MAC_ADDRESS, P_TYPE_VLAN_ID,
    SMV_SUBSCRIBE_TYPE,
};

/// Device identity from an `IED` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub manufacturer: String,
    pub ied_type: String,
}

/// Multicast endpoint category.
///
/// GOOSE carries fast event messaging, Sampled Values carries continuous
/// measurement streams; each side either publishes or subscribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointCategory {
    GoosePublish,
    SmvPublish,
    GooseSubscribe,
    SmvSubscribe,
}

impl EndpointCategory {
    /// Returns true for publish-side endpoints (traffic entering the switch
    /// port from the device).
    pub const fn is_publish(&self) -> bool {
        matches!(
            self,
            EndpointCategory::GoosePublish | EndpointCategory::SmvPublish
        )
    }

    /// Returns true for subscribe-side endpoints (traffic leaving the switch
    /// port towards the device).
    pub const fn is_subscribe(&self) -> bool {
        !self.is_publish()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            EndpointCategory::GoosePublish => "gse-publish",
            EndpointCategory::SmvPublish => "smv-publish",
            EndpointCategory::GooseSubscribe => "gse-subscribe",
            EndpointCategory::SmvSubscribe => "smv-subscribe",
        }
    }
}

/// One multicast endpoint of a device.
///
/// `vlan_id` is `None` when the address block carries no VLAN, the VLAN 0
/// sentinel, or unparseable text. `mac` is the document's MAC text verbatim
/// (trimmed) so downstream command output is byte-identical to the source;
/// an absent or empty field is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub category: EndpointCategory,
    pub vlan_id: Option<VlanId>,
    pub mac: Option<String>,
}

/// Read-only device/endpoint index, built once per document.
///
/// All `ConnectedAP` elements are walked in document order during
/// construction; queries are plain map lookups afterwards.
#[derive(Debug, Default)]
pub struct TopologyIndex {
    devices: HashMap<String, Device>,
    endpoints: HashMap<String, Vec<Endpoint>>,
}

impl TopologyIndex {
    /// Builds the index from a document in one pass.
    pub fn build(doc: &SclDocument) -> Self {
        let mut devices: HashMap<String, Device> = HashMap::new();
        let mut endpoints: HashMap<String, Vec<Endpoint>> = HashMap::new();

        for ied in &doc.ieds {
            if devices.contains_key(&ied.name) {
                warn!("duplicate IED name {:?}, keeping the first entry", ied.name);
                continue;
            }
            devices.insert(
                ied.name.clone(),
                Device {
                    name: ied.name.clone(),
                    manufacturer: ied.manufacturer.clone(),
                    ied_type: ied.ied_type.clone(),
                },
            );
        }

        let subnetworks = doc
            .communication
            .iter()
            .flat_map(|comm| comm.subnetworks.iter());
        for subnetwork in subnetworks {
            for ap in &subnetwork.connected_aps {
                if ap.ied_name.is_empty() {
                    continue;
                }
                let list = endpoints.entry(ap.ied_name.clone()).or_default();

                for gse in &ap.gse {
                    list.push(endpoint_from(&gse.address, EndpointCategory::GoosePublish));
                }
                for smv in &ap.smv {
                    list.push(endpoint_from(&smv.address, EndpointCategory::SmvPublish));
                }
                for private in &ap.privates {
                    let category = match private.private_type.as_str() {
                        GSE_SUBSCRIBE_TYPE => EndpointCategory::GooseSubscribe,
                        SMV_SUBSCRIBE_TYPE => EndpointCategory::SmvSubscribe,
                        _ => continue,
                    };
                    list.push(endpoint_from(&private.address, category));
                }
            }
        }

        TopologyIndex { devices, endpoints }
    }

    /// Looks up a device by IED name. An unknown name is absent, not an error.
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.get(name)
    }

    /// Returns every endpoint of the named device, all four categories
    /// merged in document order. Unknown names yield an empty slice.
    pub fn endpoints(&self, name: &str) -> &[Endpoint] {
        self.endpoints.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of known devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}

fn endpoint_from(address: &Option<AddressElement>, category: EndpointCategory) -> Endpoint {
    let vlan_id = address
        .as_ref()
        .and_then(|a| a.param(P_TYPE_VLAN_ID))
        .and_then(VlanId::from_hex);

    let mac = address
        .as_ref()
        .and_then(|a| a.param(P_TYPE_MAC_ADDRESS))
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    Endpoint {
        category,
        vlan_id,
        mac,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
        <SCL>
          <IED name="PROT_A" manufacturer="SEL" type="SEL_411L_2S"/>
          <IED name="MERGING_UNIT"/>
          <Communication>
            <SubNetwork name="W01">
              <ConnectedAP iedName="PROT_A">
                <GSE>
                  <Address>
                    <P type="VLAN-ID">065</P>
                    <P type="MAC-Address">01-0C-CD-01-00-01</P>
                  </Address>
                </GSE>
                <SMV>
                  <Address>
                    <P type="VLAN-ID">000</P>
                    <P type="MAC-Address"> 01-0C-CD-04-00-09 </P>
                  </Address>
                </SMV>
                <Private type="Transpower-GSE-Subscribe">
                  <Address>
                    <P type="VLAN-ID">not-hex</P>
                  </Address>
                </Private>
                <Private type="Some-Other-Private"/>
              </ConnectedAP>
            </SubNetwork>
            <SubNetwork name="W02">
              <ConnectedAP iedName="PROT_A">
                <Private type="Transpower-SMV-Subscribe">
                  <Address>
                    <P type="VLAN-ID">066</P>
                    <P type="MAC-Address">01-0C-CD-04-00-01</P>
                  </Address>
                </Private>
              </ConnectedAP>
            </SubNetwork>
          </Communication>
        </SCL>
    "#;

    fn index() -> TopologyIndex {
        TopologyIndex::build(&SclDocument::from_xml(DOC).unwrap())
    }

    #[test]
    fn test_device_lookup() {
        let index = index();
        assert_eq!(index.device_count(), 2);

        let device = index.device("PROT_A").unwrap();
        assert_eq!(device.manufacturer, "SEL");
        assert_eq!(device.ied_type, "SEL_411L_2S");

        // Attributes default to empty, not an error
        let bare = index.device("MERGING_UNIT").unwrap();
        assert_eq!(bare.manufacturer, "");

        assert!(index.device("NOT_THERE").is_none());
    }

    #[test]
    fn test_endpoints_merge_all_categories_across_aps() {
        let index = index();
        let endpoints = index.endpoints("PROT_A");

        let categories: Vec<_> = endpoints.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                EndpointCategory::GoosePublish,
                EndpointCategory::SmvPublish,
                EndpointCategory::GooseSubscribe,
                EndpointCategory::SmvSubscribe,
            ]
        );
    }

    #[test]
    fn test_vlan_sentinel_and_garbage_become_none() {
        let index = index();
        let endpoints = index.endpoints("PROT_A");

        assert_eq!(endpoints[0].vlan_id.unwrap().as_u16(), 0x65);
        // VLAN 0 sentinel
        assert_eq!(endpoints[1].vlan_id, None);
        // Unparseable hex
        assert_eq!(endpoints[2].vlan_id, None);
    }

    #[test]
    fn test_mac_text_is_trimmed_verbatim() {
        let index = index();
        let endpoints = index.endpoints("PROT_A");

        assert_eq!(endpoints[0].mac.as_deref(), Some("01-0C-CD-01-00-01"));
        assert_eq!(endpoints[1].mac.as_deref(), Some("01-0C-CD-04-00-09"));
        // No MAC-Address P at all
        assert_eq!(endpoints[2].mac, None);
    }

    #[test]
    fn test_unknown_device_has_no_endpoints() {
        let index = index();
        assert!(index.endpoints("NOT_THERE").is_empty());
    }

    #[test]
    fn test_category_direction() {
        assert!(EndpointCategory::GoosePublish.is_publish());
        assert!(EndpointCategory::SmvPublish.is_publish());
        assert!(EndpointCategory::GooseSubscribe.is_subscribe());
        assert!(EndpointCategory::SmvSubscribe.is_subscribe());
    }
}
