//! Resource families known to the inventory reporter.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of cloud resource with its own query endpoint and record
/// shape.
///
/// Each family maps to one AWS service. Adding a family means adding a
/// variant here and a lister in [`crate::lister`]; the orchestrator stays
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFamily {
    /// EC2 instances, queried via `DescribeInstances`
    Compute,
    /// RDS database instances, queried via `DescribeDBInstances`
    Database,
}

impl ResourceFamily {
    /// AWS service name backing this family.
    pub fn service(&self) -> &'static str {
        match self {
            Self::Compute => "EC2",
            Self::Database => "RDS",
        }
    }

    /// Label printed for the record's `kind` field.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Compute => "Instance Type",
            Self::Database => "DB Engine",
        }
    }

    /// Label printed for the record's `status` field.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Compute => "State",
            Self::Database => "DB Instance Class",
        }
    }
}

impl fmt::Display for ResourceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service())
    }
}
