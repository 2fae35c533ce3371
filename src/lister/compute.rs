//! Compute family lister backed by EC2 `DescribeInstances`.

use super::ResourceLister;
use crate::credentials::Session;
use crate::error::{Error, Result};
use crate::family::ResourceFamily;
use crate::record::ResourceRecord;
use async_trait::async_trait;
use aws_sdk_ec2::types::Reservation;
use aws_sdk_ec2::Client;

/// Lists EC2 instances visible to one session.
pub struct ComputeLister {
    client: Client,
}

impl ComputeLister {
    /// Binds an EC2 client to the session. No network I/O.
    pub fn new(session: &Session) -> Self {
        Self {
            client: Client::new(session.config()),
        }
    }
}

#[async_trait]
impl ResourceLister for ComputeLister {
    fn family(&self) -> ResourceFamily {
        ResourceFamily::Compute
    }

    async fn list(&self) -> Result<Vec<ResourceRecord>> {
        tracing::debug!("querying EC2 DescribeInstances");

        let resp = self
            .client
            .describe_instances()
            .send()
            .await
            .map_err(|e| Error::query(ResourceFamily::Compute, e.to_string()))?;

        let records = records_from_reservations(resp.reservations());
        tracing::info!(count = records.len(), "listed EC2 instances");
        Ok(records)
    }
}

/// Flattens the two-level reservation/instance grouping into records,
/// preserving provider order.
pub(crate) fn records_from_reservations(reservations: &[Reservation]) -> Vec<ResourceRecord> {
    let mut records = Vec::new();

    for reservation in reservations {
        for instance in reservation.instances() {
            records.push(ResourceRecord::new(
                instance.instance_id().unwrap_or_default(),
                instance
                    .instance_type()
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
                instance
                    .state()
                    .and_then(|s| s.name())
                    .map(|n| n.as_str().to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            ));
        }
    }

    records
}
