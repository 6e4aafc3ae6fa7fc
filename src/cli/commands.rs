use crate::cli::Commands;
use crate::k8s::{EndpointReader, K8sClient};
use crate::render::{self, RenderRequest, TemplateSource};
use crate::resolve::{self, PollConfig};
use crate::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Hosts {
            namespace,
            service,
            format,
            template,
            wait,
            min_hosts,
        } => {
            let config = PollConfig::new(namespace, service)
                .with_min_count(min_hosts)
                .with_timeout(wait_timeout(wait));
            config.validate()?;

            let client = K8sClient::try_default().await?;
            let mut stdout = io::stdout();
            handle_hosts(&client, &config, format, template, &mut stdout).await
        }
    }
}

/// `--wait` is in minutes; zero or negative means a single read.
fn wait_timeout(minutes: i64) -> Duration {
    match u64::try_from(minutes) {
        Ok(minutes) => Duration::from_secs(minutes.saturating_mul(60)),
        Err(_) => Duration::ZERO,
    }
}

async fn handle_hosts<R, W>(
    reader: &R,
    config: &PollConfig,
    format: Option<String>,
    template: Option<PathBuf>,
    out: &mut W,
) -> Result<()>
where
    R: EndpointReader + ?Sized,
    W: Write,
{
    info!("Hosts requested for {}/{}", config.namespace, config.service);

    let hosts = resolve::resolve(reader, config).await?;
    info!("Resolved {} hosts", hosts.len());

    let request = RenderRequest::new(hosts, TemplateSource::from_flags(format, template));
    render::render(&request, out)
}
