pub mod analyzer;
pub mod state;

pub use analyzer::Analyzer;
pub use state::AnalysisState;
