// ATS compatibility scoring.
// A pure function of a resume content snapshot: eight independent category
// checks, aggregated into a 0-100 score, a letter grade and ranked
// improvement suggestions. No I/O happens below `handlers`.

pub mod aggregate;
pub mod checks;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod text;

pub use aggregate::{analyze_resume, group_by_category};
pub use models::{AtsCheck, AtsCheckResult, CategoryGroup, CheckCategory, CheckStatus, Grade};
