//! Read-only model of the SCL (Substation Configuration Language) document.
//!
//! The compiler only needs a narrow slice of SCL: IED identity, the
//! Communication section's multicast endpoints (GOOSE and Sampled Values,
//! publish and subscribe), and the VLAN allocation registry carried in a
//! vendor `Private` section. This crate deserializes that slice with
//! `quick-xml` and resolves it into two one-pass indexes:
//!
//! - [`TopologyIndex`]: IED name → device identity and endpoint list
//! - [`VlanRegistry`]: VLAN id → allocation metadata
//!
//! Both indexes are built once per document and never mutate it.

mod error;
mod index;
mod model;
mod registry;

pub use error::SclError;
pub use index::{Device, Endpoint, EndpointCategory, TopologyIndex};
pub use model::SclDocument;
pub use registry::{VlanAllocation, VlanRegistry};
