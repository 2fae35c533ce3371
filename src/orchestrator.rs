//! Top-level run sequencing.
//!
//! One run walks `AcquireSession -> {per family: BuildClient -> List ->
//! Report} -> Done`, with `Fatal` reserved for credential and client
//! configuration failures. A failed query is a per-family event: it is
//! reported on the error channel and the run moves on.

use crate::credentials::Credentials;
use crate::error::Result;
use crate::family::ResourceFamily;
use crate::lister::{self, ResourceLister};
use crate::report::Reporter;
use std::io::Write;

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every family was listed or had its failure reported.
    Success,
    /// A fatal condition aborted the run; the message was already emitted.
    Failure(i32),
}

impl ExitStatus {
    /// Process exit code for this outcome.
    pub fn code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure(code) => *code,
        }
    }
}

/// Acquires a session, then lists and reports every requested family in
/// order.
///
/// Fatal errors (credentials, client configuration) emit one human-readable
/// line and short-circuit before any listing; per-family query failures are
/// confined to their family and leave the exit status untouched.
pub async fn run<W: Write + Send>(
    credentials: Credentials,
    region: Option<String>,
    families: &[ResourceFamily],
    reporter: &mut Reporter<W>,
) -> ExitStatus {
    match try_run(credentials, region, families, reporter).await {
        Ok(()) => ExitStatus::Success,
        Err(error) => {
            tracing::error!(%error, "run aborted");
            reporter.fatal(&error);
            ExitStatus::Failure(error.exit_code())
        }
    }
}

async fn try_run<W: Write + Send>(
    credentials: Credentials,
    region: Option<String>,
    families: &[ResourceFamily],
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let session = credentials.acquire(region).await?;

    // Bind every client up front so configuration errors abort before the
    // first query.
    let listers = families
        .iter()
        .map(|family| lister::for_family(&session, *family))
        .collect::<Result<Vec<_>>>()?;

    run_listers(listers, reporter).await;
    Ok(())
}

/// Runs each lister in order, isolating query failures to their family.
pub async fn run_listers<W: Write + Send>(
    listers: Vec<Box<dyn ResourceLister>>,
    reporter: &mut Reporter<W>,
) {
    for lister in listers {
        let family = lister.family();
        reporter.section(family);

        match lister.list().await {
            Ok(records) => reporter.report(family, &records),
            Err(error) => {
                tracing::warn!(%family, %error, "family query failed");
                reporter.report_error(family, &error);
            }
        }
    }
}
