pub mod client;
pub mod http;
pub mod model;

pub use client::Classifier;
pub use http::HttpClassifier;
pub use model::{AnalysisResult, ThreatLevel};
