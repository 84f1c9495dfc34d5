//! Switch port name type.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A switch interface name as it appears in the port map, e.g. `Gi1/0/1`.
///
/// Port names are carried verbatim into `interface` statements. For MAC
/// access-list names the port name is reduced to an *ACL token* by
/// [`PortName::acl_token`], which removes exactly the first space-then-slash
/// sequence. That narrow rule matches the provisioning dialect's naming
/// convention and is deliberately not a general sanitizer.
///
/// # Examples
///
/// ```
/// use sclcfg_types::PortName;
///
/// let port: PortName = "Gi1/0/1".parse().unwrap();
/// assert_eq!(port.acl_token(), "Gi1/0/1");
///
/// let port: PortName = "Te1 /0/24".parse().unwrap();
/// assert_eq!(port.acl_token(), "Te10/24");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PortName(String);

impl PortName {
    /// Creates a new port name from trimmed text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ParseError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ParseError::EmptyPortName);
        }
        Ok(PortName(name))
    }

    /// Returns the port name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the token used in MAC access-list names.
    ///
    /// Removes exactly the first occurrence of a space-then-slash sequence;
    /// every other character is kept as-is.
    pub fn acl_token(&self) -> String {
        self.0.replacen(" /", "", 1)
    }
}

impl fmt::Display for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PortName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PortName::new(s)
    }
}

impl TryFrom<String> for PortName {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PortName::new(s)
    }
}

impl From<PortName> for String {
    fn from(port: PortName) -> String {
        port.0
    }
}
