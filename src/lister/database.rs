//! Database family lister backed by RDS `DescribeDBInstances`.

use super::ResourceLister;
use crate::credentials::Session;
use crate::error::{Error, Result};
use crate::family::ResourceFamily;
use crate::record::ResourceRecord;
use async_trait::async_trait;
use aws_sdk_rds::types::DbInstance;
use aws_sdk_rds::Client;

/// Lists RDS database instances visible to one session.
pub struct DatabaseLister {
    client: Client,
}

impl DatabaseLister {
    /// Binds an RDS client to the session. No network I/O.
    pub fn new(session: &Session) -> Self {
        Self {
            client: Client::new(session.config()),
        }
    }
}

#[async_trait]
impl ResourceLister for DatabaseLister {
    fn family(&self) -> ResourceFamily {
        ResourceFamily::Database
    }

    async fn list(&self) -> Result<Vec<ResourceRecord>> {
        tracing::debug!("querying RDS DescribeDBInstances");

        let resp = self
            .client
            .describe_db_instances()
            .send()
            .await
            .map_err(|e| Error::query(ResourceFamily::Database, e.to_string()))?;

        let records = records_from_db_instances(resp.db_instances());
        tracing::info!(count = records.len(), "listed RDS instances");
        Ok(records)
    }
}

/// Maps the already-flat DB instance list to records in provider order.
pub(crate) fn records_from_db_instances(instances: &[DbInstance]) -> Vec<ResourceRecord> {
    instances
        .iter()
        .map(|db| {
            ResourceRecord::new(
                db.db_instance_identifier().unwrap_or_default(),
                db.engine().unwrap_or_default(),
                db.db_instance_class().unwrap_or_default(),
            )
        })
        .collect()
}
