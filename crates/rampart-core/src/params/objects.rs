//! Host, network, group and service object parameters.

use serde::Serialize;
use std::net::Ipv4Addr;

use crate::error::{Error, InvalidInputError};
use crate::types::{ObjectName, Protocol};

/// Parameters for creating a host object.
#[derive(Debug, Clone, Serialize)]
pub struct HostParams {
    name: ObjectName,
    #[serde(rename = "ipv4-address")]
    ipv4_address: Ipv4Addr,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl HostParams {
    /// Create host parameters, validating the name and address.
    pub fn new(name: impl Into<String>, ipv4_address: &str) -> Result<Self, Error> {
        let name = ObjectName::new(name)?;
        let ipv4_address =
            ipv4_address
                .parse::<Ipv4Addr>()
                .map_err(|_| InvalidInputError::IpAddress {
                    value: ipv4_address.to_string(),
                })?;

        Ok(Self {
            name,
            ipv4_address,
            comments: None,
        })
    }

    /// Attach a comment to the host.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Returns the host name.
    pub fn name(&self) -> &ObjectName {
        &self.name
    }
}

/// Parameters for creating a network object.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkParams {
    name: ObjectName,
    subnet: Ipv4Addr,
    #[serde(rename = "mask-length")]
    mask_length: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl NetworkParams {
    /// Create network parameters, validating the subnet and mask length.
    pub fn new(
        name: impl Into<String>,
        subnet: &str,
        mask_length: u8,
    ) -> Result<Self, Error> {
        let name = ObjectName::new(name)?;
        let subnet = subnet
            .parse::<Ipv4Addr>()
            .map_err(|_| InvalidInputError::IpAddress {
                value: subnet.to_string(),
            })?;

        if mask_length > 32 {
            return Err(InvalidInputError::MaskLength { value: mask_length }.into());
        }

        Ok(Self {
            name,
            subnet,
            mask_length,
            comments: None,
        })
    }

    /// Attach a comment to the network.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Returns the network name.
    pub fn name(&self) -> &ObjectName {
        &self.name
    }
}

/// Parameters for creating a group object.
#[derive(Debug, Clone, Serialize)]
pub struct GroupParams {
    name: ObjectName,
    members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl GroupParams {
    /// Create group parameters. The member list may be empty; members can
    /// be added to the group later.
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Result<Self, Error> {
        Ok(Self {
            name: ObjectName::new(name)?,
            members,
            comments: None,
        })
    }

    /// Attach a comment to the group.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Returns the group name.
    pub fn name(&self) -> &ObjectName {
        &self.name
    }
}

/// Parameters for creating a TCP or UDP service object.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceParams {
    name: ObjectName,
    port: u16,
    protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl ServiceParams {
    /// Create service parameters, validating the port.
    pub fn new(
        name: impl Into<String>,
        port: u16,
        protocol: Protocol,
    ) -> Result<Self, Error> {
        if port == 0 {
            return Err(InvalidInputError::Port {
                value: u32::from(port),
            }
            .into());
        }

        Ok(Self {
            name: ObjectName::new(name)?,
            port,
            protocol,
            comments: None,
        })
    }

    /// Attach a comment to the service.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Returns the service name.
    pub fn name(&self) -> &ObjectName {
        &self.name
    }

    /// Returns the protocol, which selects the creation endpoint.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}
