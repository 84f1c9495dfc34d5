//! MAC access-list derivation from a device's multicast endpoints.

use sclcfg_scl::Endpoint;
use sclcfg_types::PortName;

use crate::commands::{
    acl_name, build_acl_header_cmd, build_acl_removal_cmd, build_permit_egress_cmd,
    build_permit_ingress_cmd, AclPolicy, CATCH_ALL_PERMIT_CMD, SEPARATOR,
};
use crate::types::AclDirection;

/// One MAC access list for a port and direction.
///
/// Ingress lists permit the addresses the device publishes to; egress lists
/// permit the addresses it subscribes to. A direction with no usable MAC
/// yields no list at all ([`AccessList::build`] returns `None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessList {
    pub name: String,
    pub direction: AclDirection,
    /// Permitted MAC addresses, document encounter order, text verbatim.
    pub macs: Vec<String>,
}

impl AccessList {
    /// Derives the access list for one direction of a port.
    ///
    /// Publish endpoints feed the ingress list, subscribe endpoints the
    /// egress list; endpoints without a MAC are skipped.
    pub fn build(port: &PortName, direction: AclDirection, endpoints: &[Endpoint]) -> Option<Self> {
        let macs: Vec<String> = endpoints
            .iter()
            .filter(|e| match direction {
                AclDirection::In => e.category.is_publish(),
                AclDirection::Out => e.category.is_subscribe(),
            })
            .filter_map(|e| e.mac.clone())
            .collect();

        if macs.is_empty() {
            return None;
        }

        Some(AccessList {
            name: acl_name(port, direction),
            direction,
            macs,
        })
    }

    /// The `mac access-list extended …` header statement.
    pub fn header(&self) -> String {
        build_acl_header_cmd(&self.name)
    }

    /// The `no …` command that tears this list down.
    pub fn removal_cmd(&self) -> String {
        build_acl_removal_cmd(&self.header())
    }

    /// Renders the full list: header, permit lines, deny tail, catch-all
    /// permit, closing separator.
    pub fn render(&self, policy: &AclPolicy) -> String {
        let mut lines = Vec::with_capacity(self.macs.len() + 4);
        lines.push(self.header());
        for mac in &self.macs {
            lines.push(match self.direction {
                AclDirection::In => build_permit_ingress_cmd(mac),
                AclDirection::Out => build_permit_egress_cmd(mac),
            });
        }
        lines.push(format!("  {}", policy.deny_tail));
        lines.push(CATCH_ALL_PERMIT_CMD.to_string());
        lines.push(SEPARATOR.to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use sclcfg_scl::EndpointCategory;
    use sclcfg_types::VlanId;

    fn endpoint(category: EndpointCategory, mac: Option<&str>) -> Endpoint {
        Endpoint {
            category,
            vlan_id: VlanId::new(101).ok(),
            mac: mac.map(str::to_string),
        }
    }

    fn port() -> PortName {
        "Gi1/0/1".parse().unwrap()
    }

    #[test]
    fn test_ingress_from_publish_endpoints_only() {
        let endpoints = vec![
            endpoint(EndpointCategory::GoosePublish, Some("01-0C-CD-01-00-01")),
            endpoint(EndpointCategory::SmvPublish, Some("01-0C-CD-04-00-01")),
            endpoint(EndpointCategory::SmvSubscribe, Some("01-0C-CD-04-00-09")),
        ];

        let acl = AccessList::build(&port(), AclDirection::In, &endpoints).unwrap();
        assert_eq!(acl.name, "al-Gi1/0/1-in");
        assert_eq!(acl.macs, vec!["01-0C-CD-01-00-01", "01-0C-CD-04-00-01"]);
    }

    #[test]
    fn test_no_list_without_macs() {
        let endpoints = vec![
            endpoint(EndpointCategory::GoosePublish, None),
            endpoint(EndpointCategory::SmvSubscribe, Some("01-0C-CD-04-00-09")),
        ];

        assert!(AccessList::build(&port(), AclDirection::In, &endpoints).is_none());
        assert!(AccessList::build(&port(), AclDirection::Out, &endpoints).is_some());
    }

    #[test]
    fn test_render_ingress() {
        let endpoints = vec![endpoint(
            EndpointCategory::SmvPublish,
            Some("01-0C-CD-04-00-01"),
        )];
        let acl = AccessList::build(&port(), AclDirection::In, &endpoints).unwrap();

        assert_eq!(
            acl.render(&AclPolicy::default()),
            "mac access-list extended al-Gi1/0/1-in\n\
             \x20 permit host 01-0C-CD-04-00-01 any\n\
             \x20 deny any any 0x88ba 0x0\n\
             \x20 permit   any any\n\
             !"
        );
    }

    #[test]
    fn test_render_egress_permit_form() {
        let endpoints = vec![endpoint(
            EndpointCategory::GooseSubscribe,
            Some("01-0C-CD-01-00-09"),
        )];
        let acl = AccessList::build(&port(), AclDirection::Out, &endpoints).unwrap();

        let rendered = acl.render(&AclPolicy::default());
        assert!(rendered.contains("  permit any host 01-0C-CD-01-00-09"));
        assert!(rendered.starts_with("mac access-list extended al-Gi1/0/1-out"));
    }

    #[test]
    fn test_custom_deny_tail() {
        let endpoints = vec![endpoint(
            EndpointCategory::GoosePublish,
            Some("01-0C-CD-01-00-01"),
        )];
        let acl = AccessList::build(&port(), AclDirection::In, &endpoints).unwrap();

        let policy = AclPolicy {
            deny_tail: "deny any any 0x88b8 0x0".to_string(),
        };
        assert!(acl.render(&policy).contains("  deny any any 0x88b8 0x0"));
    }

    #[test]
    fn test_removal_cmd() {
        let endpoints = vec![endpoint(
            EndpointCategory::GoosePublish,
            Some("01-0C-CD-01-00-01"),
        )];
        let acl = AccessList::build(&port(), AclDirection::In, &endpoints).unwrap();
        assert_eq!(
            acl.removal_cmd(),
            "no mac access-list extended al-Gi1/0/1-in"
        );
    }
}
