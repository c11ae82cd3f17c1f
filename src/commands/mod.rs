//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_root};
pub use check::{CheckConfig, CheckResult, CheckStep, check_words};
pub use simple::{run_session, run_simple};
pub use survey::{SurveyStatistics, print_survey_statistics, run_survey};
