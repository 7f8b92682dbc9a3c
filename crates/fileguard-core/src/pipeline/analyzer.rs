//! Analysis orchestrator.
//!
//! Owns the single [`AnalysisState`] cell and sequences the pipeline:
//! size gate, then metadata extraction, then classification, strictly in
//! that order. Nothing here is internally parallel and no work outlives a
//! `submit` call.
//!
//! In-flight work is never cancelled. Instead each `submit` captures a
//! generation number and commits its outcome only if the generation is
//! still current; `reset` and newer submissions bump the generation, so a
//! superseded run finishes quietly and its result is discarded.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::intake::gate;
use crate::intake::handle::FileHandle;
use crate::metadata::{self, model::FileMetadata};
use crate::pipeline::state::AnalysisState;
use crate::verdict::client::Classifier;
use crate::verdict::model::AnalysisResult;

struct Cell {
    state: AnalysisState,
    generation: u64,
}

/// Orchestrates the intake pipeline over a pluggable classifier.
///
/// The mutex guards the state cell only; it is never held across an
/// await point. Serialization of overlapping submissions comes from the
/// generation check, not from locking.
pub struct Analyzer<C: Classifier> {
    classifier: C,
    cell: Mutex<Cell>,
}

impl<C: Classifier> Analyzer<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            cell: Mutex::new(Cell {
                state: AnalysisState::Idle,
                generation: 0,
            }),
        }
    }

    /// Snapshot of the current state for the presentation layer.
    pub fn state(&self) -> AnalysisState {
        self.lock().state.clone()
    }

    /// Run the full pipeline for one candidate file.
    ///
    /// The size gate runs before any content read; an oversized file goes
    /// straight to `Error` without ever entering `Analyzing`. Returns the
    /// state as committed for this submission (or the current state, if
    /// this submission was superseded while in flight).
    pub async fn submit(&self, file: FileHandle) -> AnalysisState {
        let generation = {
            let mut cell = self.lock();
            cell.generation += 1;

            if let Err(e) = gate::check_size(file.size()) {
                info!(name = file.name(), size = file.size(), "rejected by size gate");
                cell.state = AnalysisState::Error {
                    file: Some(file),
                    message: AnalysisError::from(e).user_message(),
                };
                return cell.state.clone();
            }

            cell.state = AnalysisState::Analyzing { file: file.clone() };
            cell.generation
        };

        info!(name = file.name(), size = file.size(), "analysis started");
        let outcome = self.run_stages(&file).await;

        let mut cell = self.lock();
        if cell.generation != generation {
            debug!(name = file.name(), "discarding stale pipeline outcome");
            return cell.state.clone();
        }

        cell.state = match outcome {
            Ok((metadata, result)) => {
                info!(name = file.name(), level = %result.threat_level, "analysis complete");
                AnalysisState::Complete {
                    file,
                    metadata,
                    result,
                }
            }
            Err(e) => {
                info!(name = file.name(), error = %e, "analysis failed");
                // Metadata from a partially-successful run is dropped with
                // the outcome; only the message survives.
                AnalysisState::Error {
                    file: Some(file),
                    message: e.user_message(),
                }
            }
        };
        cell.state.clone()
    }

    /// Unconditionally return to `Idle`, releasing any retained file,
    /// metadata, and verdict. An in-flight submission keeps running but
    /// can no longer commit.
    pub fn reset(&self) {
        let mut cell = self.lock();
        cell.generation += 1;
        cell.state = AnalysisState::Idle;
        debug!("pipeline reset to idle");
    }

    async fn run_stages(
        &self,
        file: &FileHandle,
    ) -> Result<(FileMetadata, AnalysisResult), AnalysisError> {
        let metadata = metadata::extract(file).await?;
        let result = self.classifier.classify(file, &metadata).await?;
        Ok((metadata, result))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
