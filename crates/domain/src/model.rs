pub mod outcome;
pub mod report;

pub use outcome::FileOutcome;
pub use report::BatchReport;
