use crate::k8s::{EndpointReader, Hosts};
use crate::resolve::PollConfig;
use crate::Result;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

/// Reads the service's addresses, retrying until `min_count` of them are
/// registered or `timeout` runs out.
///
/// The config is validated first, so a zero `interval` is rejected instead of
/// spinning. With a zero timeout the single read's error is returned as is. While
/// waiting, read errors are only logged, and the last successfully read set
/// is returned when time is up. That set is empty if no read ever succeeded.
pub async fn resolve<R>(reader: &R, config: &PollConfig) -> Result<Hosts>
where
    R: EndpointReader + ?Sized,
{
    config.validate()?;

    if !config.waits() {
        return reader.read(&config.namespace, &config.service).await;
    }

    info!(
        "Waiting up to {:?} for {} hosts in {}/{}",
        config.timeout, config.min_count, config.namespace, config.service
    );

    let start = Instant::now();
    let mut hosts = Hosts::default();
    let mut last_error = None;

    while start.elapsed() < config.timeout {
        match reader.read(&config.namespace, &config.service).await {
            Ok(found) => {
                hosts = found;
                last_error = None;
                if hosts.len() >= config.min_count {
                    debug!("Found {} hosts after {:?}", hosts.len(), start.elapsed());
                    return Ok(hosts);
                }
                debug!(
                    "Found {} of {} hosts, retrying in {:?}",
                    hosts.len(),
                    config.min_count,
                    config.interval
                );
            }
            Err(e) => {
                debug!("Endpoint read failed: {}, retrying in {:?}", e, config.interval);
                last_error = Some(e);
            }
        }

        time::sleep(config.interval).await;
    }

    match last_error {
        Some(e) => warn!(
            "Timed out after {:?} with {} of {} hosts; last read failed: {}",
            config.timeout,
            hosts.len(),
            config.min_count,
            e
        ),
        None => warn!(
            "Timed out after {:?} with {} of {} hosts",
            config.timeout,
            hosts.len(),
            config.min_count
        ),
    }

    Ok(hosts)
}
