use k8s_openapi::api::core::v1::Endpoints;
use std::fmt;

/// Ready backend addresses of a service, in the order the API server lists them.
///
/// Duplicates are kept: a pod exposed through several subsets shows up once per subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hosts(Vec<String>);

impl Hosts {
    pub fn new(addresses: Vec<String>) -> Self {
        Self(addresses)
    }

    /// Flattens every subset's ready `addresses` into one list.
    ///
    /// `notReadyAddresses` are skipped, as are endpoints with no subsets at all.
    pub fn from_endpoints(endpoints: &Endpoints) -> Self {
        let addresses = endpoints
            .subsets
            .as_deref()
            .unwrap_or_default()
            .iter()
            .flat_map(|subset| subset.addresses.as_deref().unwrap_or_default())
            .map(|address| address.ip.clone())
            .collect();

        Self(addresses)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Hosts {
    fn from(addresses: Vec<String>) -> Self {
        Self(addresses)
    }
}

impl<S: Into<String>> FromIterator<S> for Hosts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Bracketed, space separated: `[10.0.0.1 10.0.0.2]`.
impl fmt::Display for Hosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{EndpointAddress, EndpointSubset};

    fn address(ip: &str) -> EndpointAddress {
        EndpointAddress {
            ip: ip.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_endpoints_flattens_subsets_in_order() {
        let endpoints = Endpoints {
            subsets: Some(vec![
                EndpointSubset {
                    addresses: Some(vec![address("10.0.0.2"), address("10.0.0.1")]),
                    ..Default::default()
                },
                EndpointSubset {
                    addresses: Some(vec![address("10.0.1.7")]),
                    not_ready_addresses: Some(vec![address("10.0.1.8")]),
                    ..Default::default()
                },
                EndpointSubset {
                    addresses: Some(vec![address("10.0.0.2")]),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        let hosts = Hosts::from_endpoints(&endpoints);

        assert_eq!(
            hosts.as_slice(),
            ["10.0.0.2", "10.0.0.1", "10.0.1.7", "10.0.0.2"]
        );
    }

    #[test]
    fn test_from_endpoints_without_subsets() {
        let hosts = Hosts::from_endpoints(&Endpoints::default());
        assert!(hosts.is_empty());

        let endpoints = Endpoints {
            subsets: Some(vec![EndpointSubset {
                not_ready_addresses: Some(vec![address("10.0.0.9")]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert!(Hosts::from_endpoints(&endpoints).is_empty());
    }

    #[test]
    fn test_display() {
        let hosts: Hosts = ["10.0.0.1", "10.0.0.2"].into_iter().collect();
        assert_eq!(hosts.to_string(), "[10.0.0.1 10.0.0.2]");
        assert_eq!(Hosts::default().to_string(), "[]");
    }
}
