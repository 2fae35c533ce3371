//! Line-oriented reporting of inventory records.
//!
//! The output format is the tool's contract: one line per field, a blank
//! line after each record, errors on their own line. Records go out in
//! provider order; nothing is sorted or deduplicated.

use crate::error::Error;
use crate::family::ResourceFamily;
use crate::record::ResourceRecord;
use colored::Colorize;
use std::io::{self, Write};

/// Writes records and per-family errors to an output sink.
///
/// Write failures are deliberately swallowed; a closed stdout must not
/// change the run's outcome.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    /// Reporter on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Reporter on an arbitrary sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Section header announcing one family's listing.
    pub fn section(&mut self, family: ResourceFamily) {
        let header = format!("Listing {family} Instances:");
        let _ = writeln!(self.out, "{}", header.bold());
    }

    /// Emits every record: one line per field, blank line after each.
    pub fn report(&mut self, family: ResourceFamily, records: &[ResourceRecord]) {
        for record in records {
            let _ = writeln!(self.out, "{} Instance ID: {}", family, record.id);
            let _ = writeln!(self.out, "{}: {}", family.kind_label(), record.kind);
            let _ = writeln!(self.out, "{}: {}", family.status_label(), record.status);
            let _ = writeln!(self.out);
        }
    }

    /// Error channel: one line identifying the failed family. The run
    /// continues with the next family.
    pub fn report_error(&mut self, family: ResourceFamily, error: &Error) {
        let line = match error {
            Error::Query { .. } => error.to_string(),
            other => format!("Error listing {family} instances: {other}"),
        };
        let _ = writeln!(self.out, "{}", line.red());
    }

    /// Terminal message for a fatal error.
    pub fn fatal(&mut self, error: &Error) {
        let _ = writeln!(self.out, "{}", error.to_string().red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_reporter() -> Reporter<Vec<u8>> {
        colored::control::set_override(false);
        Reporter::new(Vec::new())
    }

    fn rendered(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn formats_compute_records() {
        let mut reporter = plain_reporter();
        reporter.report(
            ResourceFamily::Compute,
            &[ResourceRecord::new("i-1", "t2.micro", "running")],
        );

        assert_eq!(
            rendered(reporter),
            "EC2 Instance ID: i-1\nInstance Type: t2.micro\nState: running\n\n"
        );
    }

    #[test]
    fn formats_database_records() {
        let mut reporter = plain_reporter();
        reporter.report(
            ResourceFamily::Database,
            &[ResourceRecord::new("db-1", "postgres", "db.t3.micro")],
        );

        assert_eq!(
            rendered(reporter),
            "RDS Instance ID: db-1\nDB Engine: postgres\nDB Instance Class: db.t3.micro\n\n"
        );
    }

    #[test]
    fn no_records_means_no_record_lines() {
        let mut reporter = plain_reporter();
        reporter.report(ResourceFamily::Compute, &[]);
        assert_eq!(rendered(reporter), "");
    }

    #[test]
    fn preserves_provider_order() {
        let mut reporter = plain_reporter();
        reporter.report(
            ResourceFamily::Compute,
            &[
                ResourceRecord::new("i-1", "t2.micro", "running"),
                ResourceRecord::new("i-2", "t3.small", "stopped"),
                ResourceRecord::new("i-3", "t3.small", "running"),
            ],
        );

        let output = rendered(reporter);
        let first = output.find("i-1").unwrap();
        let second = output.find("i-2").unwrap();
        let third = output.find("i-3").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn error_channel_identifies_the_family() {
        let mut reporter = plain_reporter();
        let err = Error::query(ResourceFamily::Compute, "throttled");
        reporter.report_error(ResourceFamily::Compute, &err);

        assert_eq!(rendered(reporter), "Error listing EC2 instances: throttled\n");
    }

    #[test]
    fn non_query_errors_still_name_the_family() {
        let mut reporter = plain_reporter();
        let err = Error::Unexpected("socket closed".into());
        reporter.report_error(ResourceFamily::Database, &err);

        assert_eq!(
            rendered(reporter),
            "Error listing RDS instances: An error occurred: socket closed\n"
        );
    }
}
