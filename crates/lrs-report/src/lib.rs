//! Report assembly for diagnostic lab tests.
//!
//! Takes a patient's resolution context plus their booked test results and
//! produces the ordered sequence of print-ready rows consumed by external
//! renderers: reference range resolved per age and gender, derived values
//! computed, numeric results flagged against their range, subheading
//! groups laid out in declared order.

pub mod assemble;
pub mod flagging;
pub mod numeric;
pub mod summary;

pub use assemble::{ReportSection, assemble, assemble_sections, assemble_test};
pub use flagging::{classify, parse_numeric_interval};
pub use numeric::{format_numeric, parse_f64};
pub use summary::ReportSummary;
