use std::net::IpAddr;

use bollard::secret::{ContainerInspectResponse, PortBinding};

/// The host side of a service's published port: the externally reachable
/// port and the interface it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePortBinding {
    pub port: u16,
    pub binding_type: BindingType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingType {
    Loopback,         // 127.0.0.1 / ::1
    AnyInterface,     // 0.0.0.0 / ::
    Specific(IpAddr), // Specific IP address
}

#[derive(Debug, thiserror::Error)]
pub enum GetServicePortBindingError {
    #[error("Multiple published ports found")]
    MultiplePortsPublished,
    #[error("Missing port number")]
    MissingPortNumber,
    #[error("Invalid port number: {0}")]
    InvalidPortNumber(std::num::ParseIntError),
    #[error("Missing host IP")]
    MissingHostIp,
    #[error("Invalid host IP: {0}")]
    InvalidHostIp(std::net::AddrParseError),
}

impl ServicePortBinding {
    pub fn new(port: u16, binding_type: BindingType) -> Self {
        Self { port, binding_type }
    }

    /// Extracts the published port of a service container.
    ///
    /// Returns `Ok(None)` when the container publishes nothing. Docker may
    /// publish the same port once per host interface (IPv4 and IPv6); those
    /// bindings must agree on the host port, and the most local interface
    /// wins for the binding type. Several distinct host ports are ambiguous
    /// and rejected.
    pub fn try_from(
        value: &ContainerInspectResponse,
    ) -> Result<Option<ServicePortBinding>, GetServicePortBindingError> {
        let bindings = Self::published_bindings(value);
        if bindings.is_empty() {
            return Ok(None);
        }

        let mut port_number = None;
        let mut binding_types = Vec::with_capacity(bindings.len());

        for binding in bindings {
            let parsed_port = binding
                .host_port
                .as_ref()
                .ok_or(GetServicePortBindingError::MissingPortNumber)?
                .parse::<u16>()
                .map_err(GetServicePortBindingError::InvalidPortNumber)?;

            match port_number {
                None => port_number = Some(parsed_port),
                Some(port) if port != parsed_port => {
                    return Err(GetServicePortBindingError::MultiplePortsPublished);
                }
                Some(_) => {}
            }

            let binding_type = match binding
                .host_ip
                .as_ref()
                .ok_or(GetServicePortBindingError::MissingHostIp)?
                .as_str()
            {
                "0.0.0.0" | "::" => BindingType::AnyInterface,
                "127.0.0.1" | "::1" => BindingType::Loopback,
                ip => BindingType::Specific(
                    ip.parse::<IpAddr>()
                        .map_err(GetServicePortBindingError::InvalidHostIp)?,
                ),
            };
            binding_types.push(binding_type);
        }

        // Checked above: bindings is non-empty, so both unwraps hold
        let port = port_number.expect("at least one binding was parsed");
        let binding_type = binding_types
            .into_iter()
            .min_by_key(locality_rank)
            .expect("at least one binding was parsed");

        Ok(Some(ServicePortBinding::new(port, binding_type)))
    }

    fn published_bindings(value: &ContainerInspectResponse) -> Vec<&PortBinding> {
        let Some(ports) = value
            .network_settings
            .as_ref()
            .and_then(|settings| settings.ports.as_ref())
        else {
            return Vec::new();
        };

        ports
            .values()
            .filter_map(|bindings| bindings.as_ref())
            .flatten()
            .collect()
    }
}

fn locality_rank(binding_type: &BindingType) -> u8 {
    match binding_type {
        BindingType::Loopback => 0,
        BindingType::AnyInterface => 1,
        BindingType::Specific(_) => 2,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bollard::secret::NetworkSettings;

    use super::*;

    fn create_container_response_with_ports(
        container_port: &str,
        bindings: Vec<PortBinding>,
    ) -> ContainerInspectResponse {
        let mut port_map = HashMap::new();
        port_map.insert(container_port.to_string(), Some(bindings));

        ContainerInspectResponse {
            network_settings: Some(NetworkSettings {
                ports: Some(port_map),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn create_port_binding(host_ip: &str, host_port: &str) -> PortBinding {
        PortBinding {
            host_ip: Some(host_ip.to_string()),
            host_port: Some(host_port.to_string()),
        }
    }

    #[test]
    fn test_loopback_binding() {
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![create_port_binding("127.0.0.1", "3306")],
        );

        let binding = ServicePortBinding::try_from(&container).unwrap().unwrap();
        assert_eq!(binding.port, 3306);
        assert_eq!(binding.binding_type, BindingType::Loopback);
    }

    #[test]
    fn test_any_interface_binding() {
        let container = create_container_response_with_ports(
            "5432/tcp",
            vec![create_port_binding("0.0.0.0", "54320")],
        );

        let binding = ServicePortBinding::try_from(&container).unwrap().unwrap();
        assert_eq!(binding.port, 54320);
        assert_eq!(binding.binding_type, BindingType::AnyInterface);
    }

    #[test]
    fn test_specific_ip_binding() {
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![create_port_binding("192.168.1.100", "3306")],
        );

        let binding = ServicePortBinding::try_from(&container).unwrap().unwrap();
        assert_eq!(
            binding.binding_type,
            BindingType::Specific("192.168.1.100".parse().unwrap())
        );
    }

    #[test]
    fn test_dual_stack_bindings_agree() {
        // Docker publishes once per interface family; same host port
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![
                create_port_binding("0.0.0.0", "3306"),
                create_port_binding("::", "3306"),
            ],
        );

        let binding = ServicePortBinding::try_from(&container).unwrap().unwrap();
        assert_eq!(binding.port, 3306);
        assert_eq!(binding.binding_type, BindingType::AnyInterface);
    }

    #[test]
    fn test_loopback_wins_over_any_interface() {
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![
                create_port_binding("0.0.0.0", "3306"),
                create_port_binding("127.0.0.1", "3306"),
            ],
        );

        let binding = ServicePortBinding::try_from(&container).unwrap().unwrap();
        assert_eq!(binding.binding_type, BindingType::Loopback);
    }

    #[test]
    fn test_missing_network_settings() {
        let container = ContainerInspectResponse {
            network_settings: None,
            ..Default::default()
        };
        let result = ServicePortBinding::try_from(&container).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_ports() {
        let container = ContainerInspectResponse {
            network_settings: Some(NetworkSettings {
                ports: None,
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = ServicePortBinding::try_from(&container).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_exposed_but_unpublished_port() {
        // Exposed ports appear in the map with no bindings
        let mut port_map = HashMap::new();
        port_map.insert("3306/tcp".to_string(), None);

        let container = ContainerInspectResponse {
            network_settings: Some(NetworkSettings {
                ports: Some(port_map),
                ..Default::default()
            }),
            ..Default::default()
        };

        let result = ServicePortBinding::try_from(&container).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_multiple_distinct_ports_rejected() {
        let mut port_map = HashMap::new();
        port_map.insert(
            "3306/tcp".to_string(),
            Some(vec![create_port_binding("0.0.0.0", "3306")]),
        );
        port_map.insert(
            "33060/tcp".to_string(),
            Some(vec![create_port_binding("0.0.0.0", "33060")]),
        );

        let container = ContainerInspectResponse {
            network_settings: Some(NetworkSettings {
                ports: Some(port_map),
                ..Default::default()
            }),
            ..Default::default()
        };

        let result = ServicePortBinding::try_from(&container);
        assert!(matches!(
            result,
            Err(GetServicePortBindingError::MultiplePortsPublished)
        ));
    }

    #[test]
    fn test_missing_port_number() {
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![PortBinding {
                host_ip: Some("127.0.0.1".to_string()),
                host_port: None,
            }],
        );

        let result = ServicePortBinding::try_from(&container);
        assert!(matches!(
            result,
            Err(GetServicePortBindingError::MissingPortNumber)
        ));
    }

    #[test]
    fn test_invalid_port_number() {
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![PortBinding {
                host_ip: Some("127.0.0.1".to_string()),
                host_port: Some("not-a-port".to_string()),
            }],
        );

        let result = ServicePortBinding::try_from(&container);
        assert!(matches!(
            result,
            Err(GetServicePortBindingError::InvalidPortNumber(_))
        ));
    }

    #[test]
    fn test_missing_host_ip() {
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![PortBinding {
                host_ip: None,
                host_port: Some("3306".to_string()),
            }],
        );

        let result = ServicePortBinding::try_from(&container);
        assert!(matches!(
            result,
            Err(GetServicePortBindingError::MissingHostIp)
        ));
    }

    #[test]
    fn test_invalid_host_ip() {
        let container = create_container_response_with_ports(
            "3306/tcp",
            vec![PortBinding {
                host_ip: Some("not-an-ip".to_string()),
                host_port: Some("3306".to_string()),
            }],
        );

        let result = ServicePortBinding::try_from(&container);
        assert!(matches!(
            result,
            Err(GetServicePortBindingError::InvalidHostIp(_))
        ));
    }
}
