//! Out-of-range tallies for rendered reports.

use lrs_model::{PrintRow, RangeFlag, RowKind};

/// Counts of flagged rows across a row sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Parameter and sub-parameter rows; heading markers are not counted.
    pub rows: usize,
    pub low: usize,
    pub high: usize,
}

impl ReportSummary {
    pub fn from_rows(rows: &[PrintRow]) -> Self {
        let mut summary = ReportSummary::default();
        for row in rows {
            if row.kind == RowKind::Heading {
                continue;
            }
            summary.rows += 1;
            match row.flag {
                RangeFlag::Low => summary.low += 1,
                RangeFlag::High => summary.high += 1,
                RangeFlag::None => {}
            }
        }
        summary
    }

    pub fn out_of_range(&self) -> usize {
        self.low + self.high
    }
}
