use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KubehostsError {
    #[error("Kubernetes error: {0}")]
    KubernetesError(String),

    #[error("Service not found: {service} in namespace {namespace}")]
    ServiceNotFound { service: String, namespace: String },

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Failed to read template file {}: {source}", .path.display())]
    TemplateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KubehostsError>;
