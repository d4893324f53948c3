pub mod filter;
pub mod summary;
pub mod trend;

pub use filter::{filter_findings, FindingFilter};
pub use summary::build_repo_summary;
pub use trend::{build_trend, TREND_WINDOW};
