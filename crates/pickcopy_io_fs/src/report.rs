//! Copy report model and mutable report builder.

use std::fmt;

/// Aggregate counters for one `copy_listed_with` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportCopy {
    /// Number of include entries processed.
    pub cnt_listed: u64,
    /// Number of files copied.
    pub cnt_copied: u64,
    /// Number of listed sources that did not exist.
    pub cnt_missing: u64,
    /// Number of files left uncopied because of dry-run.
    pub cnt_skipped: u64,
}

impl ReportCopy {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} listed={} copied={} missing={} skipped={}",
            self.cnt_listed, self.cnt_copied, self.cnt_missing, self.cnt_skipped
        )
    }
}

impl fmt::Display for ReportCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[REPORT]"))
    }
}

/// Mutable accumulator for copy statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportCopyBuilder {
    cnt_listed: u64,
    cnt_copied: u64,
    cnt_missing: u64,
    cnt_skipped: u64,
}

impl ReportCopyBuilder {
    /// Increment listed count by one.
    pub fn add_listed(&mut self) {
        self.cnt_listed += 1;
    }

    /// Increment copied count by one.
    pub fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    /// Increment missing count by one.
    pub fn add_missing(&mut self) {
        self.cnt_missing += 1;
    }

    /// Increment skipped count by one.
    pub fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportCopy {
        ReportCopy {
            cnt_listed: self.cnt_listed,
            cnt_copied: self.cnt_copied,
            cnt_missing: self.cnt_missing,
            cnt_skipped: self.cnt_skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReportCopyBuilder;

    #[test]
    fn report_copy_builder_counts_and_formats() {
        let mut builder = ReportCopyBuilder::default();
        for _ in 0..3 {
            builder.add_listed();
        }
        builder.add_copied();
        builder.add_skipped();
        builder.add_missing();
        let report = builder.build();

        assert_eq!(report.cnt_listed, 3);
        assert_eq!(report.cnt_missing, 1);
        assert_eq!(
            report.format("[COPY]"),
            "[COPY] listed=3 copied=1 missing=1 skipped=1"
        );
        assert_eq!(
            report.to_string(),
            "[REPORT] listed=3 copied=1 missing=1 skipped=1"
        );
    }
}
