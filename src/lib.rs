//! # Cloudinv - A Cloud Resource Inventory Reporter
//!
//! Cloudinv authenticates to AWS, queries the compute (EC2) and database
//! (RDS) inventories, and prints the identifying attributes of every
//! instance to standard output.
//!
//! ## Core Concepts
//!
//! - **Credentials / Session**: opaque key material resolved into an
//!   authenticated, read-only handle for one run
//! - **Family**: a category of cloud resource with its own query endpoint
//!   and record shape
//! - **Lister**: one describe-style query per family, flattened into
//!   normalized records
//! - **Record**: the `{id, kind, status}` view of one inventory item,
//!   independent of its source family's native schema
//! - **Reporter**: line-oriented output with a per-family error channel
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use cloudinv::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Use the standard AWS credential chain
//!     let credentials = Credentials::default();
//!     let families = [ResourceFamily::Compute, ResourceFamily::Database];
//!
//!     let mut reporter = Reporter::stdout();
//!     let status = run(credentials, None, &families, &mut reporter).await;
//!     std::process::exit(status.code());
//! }
//! ```
//!
//! A failed query for one family is reported on the error channel and never
//! blocks the remaining families; only credential and client-configuration
//! failures abort the run.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod credentials;
pub mod error;
pub mod family;
pub mod lister;
pub mod orchestrator;
pub mod record;
pub mod report;

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::credentials::{Credentials, Session};
    pub use crate::error::{Error, Result};
    pub use crate::family::ResourceFamily;
    pub use crate::lister::{for_family, ResourceLister};
    pub use crate::orchestrator::{run, run_listers, ExitStatus};
    pub use crate::record::ResourceRecord;
    pub use crate::report::Reporter;
}
