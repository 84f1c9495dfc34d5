//! Raw serde model of the SCL subset used by the compiler.
//!
//! These structs mirror the document shape one-to-one; resolution into the
//! typed lookup views happens in [`crate::index`] and [`crate::registry`].
//! Unknown elements and attributes are ignored, so full SCD files
//! deserialize without being modelled in full.

use serde::Deserialize;

use crate::SclError;

/// `Private@type` marking a GOOSE subscription under a `ConnectedAP`.
pub const GSE_SUBSCRIBE_TYPE: &str = "Transpower-GSE-Subscribe";

/// `Private@type` marking a Sampled Values subscription under a `ConnectedAP`.
pub const SMV_SUBSCRIBE_TYPE: &str = "Transpower-SMV-Subscribe";

/// `Private@type` of the root-level VLAN allocation registry.
pub const VLAN_ALLOCATION_TYPE: &str = "Transpower-VLAN-Allocation";

/// `P@type` carrying the VLAN id (hexadecimal text) of an address block.
pub const P_TYPE_VLAN_ID: &str = "VLAN-ID";

/// `P@type` carrying the multicast MAC address of an address block.
pub const P_TYPE_MAC_ADDRESS: &str = "MAC-Address";

/// Root `SCL` element.
#[derive(Debug, Clone, Deserialize)]
pub struct SclDocument {
    #[serde(rename = "IED", default)]
    pub ieds: Vec<IedElement>,

    #[serde(rename = "Communication")]
    pub communication: Option<CommunicationElement>,

    #[serde(rename = "Private", default)]
    pub privates: Vec<RootPrivateElement>,
}

impl SclDocument {
    /// Deserializes an SCL document from XML text.
    pub fn from_xml(xml: &str) -> Result<Self, SclError> {
        Ok(quick_xml::de::from_str(xml)?)
    }
}

/// `IED` element: device identity.
#[derive(Debug, Clone, Deserialize)]
pub struct IedElement {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@manufacturer", default)]
    pub manufacturer: String,

    #[serde(rename = "@type", default)]
    pub ied_type: String,
}

/// `Communication` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunicationElement {
    #[serde(rename = "SubNetwork", default)]
    pub subnetworks: Vec<SubNetworkElement>,
}

/// `SubNetwork` element.
#[derive(Debug, Clone, Deserialize)]
pub struct SubNetworkElement {
    #[serde(rename = "ConnectedAP", default)]
    pub connected_aps: Vec<ConnectedApElement>,
}

/// `ConnectedAP` element: one IED's access point on a subnetwork.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectedApElement {
    #[serde(rename = "@iedName", default)]
    pub ied_name: String,

    #[serde(rename = "GSE", default)]
    pub gse: Vec<ControlBlockElement>,

    #[serde(rename = "SMV", default)]
    pub smv: Vec<ControlBlockElement>,

    #[serde(rename = "Private", default)]
    pub privates: Vec<ApPrivateElement>,
}

/// `GSE` or `SMV` publish control block.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlBlockElement {
    #[serde(rename = "Address")]
    pub address: Option<AddressElement>,
}

/// `Private` element under a `ConnectedAP` (subscription markers).
#[derive(Debug, Clone, Deserialize)]
pub struct ApPrivateElement {
    #[serde(rename = "@type", default)]
    pub private_type: String,

    #[serde(rename = "Address")]
    pub address: Option<AddressElement>,
}

/// `Address` block: a bag of typed `P` parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressElement {
    #[serde(rename = "P", default)]
    pub params: Vec<AddressParam>,
}

impl AddressElement {
    /// Returns the trimmed text of the first `P` with the given type.
    pub fn param(&self, p_type: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.p_type == p_type)
            .map(|p| p.value.trim())
    }
}

/// `P` parameter: a typed text value.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressParam {
    #[serde(rename = "@type", default)]
    pub p_type: String,

    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Root-level `Private` element (VLAN allocation container).
///
/// The allocation children are carried in a vendor namespace; both the
/// prefixed and unprefixed spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct RootPrivateElement {
    #[serde(rename = "@type", default)]
    pub private_type: String,

    #[serde(rename = "Station", alias = "tp:Station", default)]
    pub stations: Vec<VlanScopeElement>,

    #[serde(rename = "Bus", alias = "tp:Bus", default)]
    pub buses: Vec<VlanScopeElement>,
}

/// `Station` or `Bus` scope container of VLAN allocations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VlanScopeElement {
    #[serde(rename = "VLAN", alias = "tp:VLAN", default)]
    pub vlans: Vec<VlanElement>,
}

/// One VLAN allocation entry.
///
/// `prot1Id`/`prot2Id` are the hex-encoded VLAN ids for protection systems
/// 1 and 2 respectively; both map to the same service metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct VlanElement {
    #[serde(rename = "@serviceName", default)]
    pub service_name: String,

    #[serde(rename = "@serviceType", default)]
    pub service_type: String,

    #[serde(rename = "@useCase", default)]
    pub use_case: String,

    #[serde(rename = "@prot1Id", default)]
    pub prot1_id: String,

    #[serde(rename = "@prot2Id", default)]
    pub prot2_id: String,

    #[serde(rename = "@busName", default)]
    pub bus_name: String,
}
