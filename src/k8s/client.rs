use crate::k8s::{EndpointReader, Hosts};
use crate::{KubehostsError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Endpoints;
use kube::{Api, Client};
use tracing::{debug, info};

pub struct K8sClient {
    client: Client,
}

impl K8sClient {
    /// Connects with in-cluster service account credentials, or the local
    /// kubeconfig when running outside a pod.
    pub async fn try_default() -> Result<Self> {
        debug!("Initializing Kubernetes client");

        let client = Client::try_default().await.map_err(|e| {
            KubehostsError::KubernetesError(format!("Failed to create K8s client: {}", e))
        })?;

        info!("Successfully connected to Kubernetes cluster");

        Ok(Self { client })
    }

    pub fn endpoints(&self, namespace: &str) -> Api<Endpoints> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub async fn get_endpoints(&self, namespace: &str, service: &str) -> Result<Endpoints> {
        self.endpoints(namespace)
            .get(service)
            .await
            .map_err(|e| endpoints_error(e, namespace, service))
    }
}

fn endpoints_error(e: kube::Error, namespace: &str, service: &str) -> KubehostsError {
    match e {
        kube::Error::Api(response) if response.code == 404 => KubehostsError::ServiceNotFound {
            service: service.to_string(),
            namespace: namespace.to_string(),
        },
        e => KubehostsError::KubernetesError(format!(
            "Failed to get endpoints {}/{}: {}",
            namespace, service, e
        )),
    }
}

#[async_trait]
impl EndpointReader for K8sClient {
    async fn read(&self, namespace: &str, service: &str) -> Result<Hosts> {
        let endpoints = self.get_endpoints(namespace, service).await?;
        let hosts = Hosts::from_endpoints(&endpoints);

        debug!(
            "Read {} addresses for {}/{}",
            hosts.len(),
            namespace,
            service
        );

        Ok(hosts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::error::ErrorResponse;

    fn api_error(code: u16, reason: &str) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: format!("endpoints \"web\" {}", reason),
            reason: reason.to_string(),
            code,
        })
    }

    #[test]
    fn test_endpoints_error_not_found() {
        let err = endpoints_error(api_error(404, "NotFound"), "prod", "web");

        match err {
            KubehostsError::ServiceNotFound { service, namespace } => {
                assert_eq!(service, "web");
                assert_eq!(namespace, "prod");
            }
            other => panic!("expected ServiceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoints_error_other_api_failure() {
        let err = endpoints_error(api_error(403, "Forbidden"), "prod", "web");

        assert!(matches!(err, KubehostsError::KubernetesError(_)));
        assert!(err.to_string().contains("prod/web"));
        assert!(err.to_string().contains("Forbidden"));
    }

    #[test]
    fn test_endpoints_error_transport_failure() {
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = endpoints_error(kube::Error::ReadEvents(refused), "prod", "web");

        assert!(matches!(err, KubehostsError::KubernetesError(_)));
        assert!(err.to_string().contains("prod/web"));
    }
}
