//! Per-family resource listers.
//!
//! One lister per [`ResourceFamily`]. Each issues a single describe-style
//! query and flattens the provider's native response shape into
//! [`ResourceRecord`]s, in provider order. Only the first page of results
//! is fetched; inventories larger than one page are truncated (known
//! limitation, see the README).

mod compute;
mod database;

pub use compute::ComputeLister;
pub use database::DatabaseLister;

use crate::credentials::Session;
use crate::error::{Error, Result};
use crate::family::ResourceFamily;
use crate::record::ResourceRecord;
use async_trait::async_trait;

/// A family-scoped inventory query.
///
/// Implementations own their provider client and share nothing across
/// families, so callers wanting concurrency may run listers on independent
/// workers.
#[async_trait]
pub trait ResourceLister: Send + Sync {
    /// The family this lister serves.
    fn family(&self) -> ResourceFamily;

    /// Runs one describe query and returns normalized records.
    ///
    /// An empty inventory is an empty `Vec`, not an error. Provider-side
    /// failures surface as [`Error::Query`] for this family only.
    async fn list(&self) -> Result<Vec<ResourceRecord>>;
}

/// Builds the lister for `family` from an established session.
///
/// Pure configuration binding; no network traffic happens until
/// [`ResourceLister::list`] is called. Fails with [`Error::ClientConfig`]
/// when the session carries no resolvable region, which would otherwise
/// surface as a confusing dispatch failure on the first query.
pub fn for_family(session: &Session, family: ResourceFamily) -> Result<Box<dyn ResourceLister>> {
    if session.config().region().is_none() {
        return Err(Error::client_config(
            family,
            "no AWS region configured; set --region or AWS_REGION",
        ));
    }

    Ok(match family {
        ResourceFamily::Compute => Box::new(ComputeLister::new(session)),
        ResourceFamily::Database => Box::new(DatabaseLister::new(session)),
    })
}
