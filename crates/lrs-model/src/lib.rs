pub mod parameter;
pub mod patient;
pub mod result;
pub mod row;

pub use parameter::{AgeRange, Parameter, RangeField, RangeTable};
pub use patient::{Gender, PatientContext};
pub use result::{Subheading, TestResult};
pub use row::{PrintRow, RangeFlag, RowKind};
