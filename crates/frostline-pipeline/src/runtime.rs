//! FrostlineRuntime: owns the storage engine and both pipelines, built from
//! one config.

use std::path::Path;
use std::sync::Arc;

use frostline_core::config::FrostlineConfig;
use frostline_core::errors::FrostlineResult;
use frostline_core::traits::IFaultPredictor;
use frostline_escalation::EscalationRouter;
use frostline_learning::LearningTracker;
use frostline_observability::init_tracing_with;
use frostline_scoring::ConfidenceEngine;
use frostline_storage::StorageEngine;

use crate::alert_pipeline::AlertPipeline;
use crate::diagnostic_pipeline::DiagnosticPipeline;
use crate::prediction::HttpPredictor;

/// `storage.db_path` value that selects an in-memory database.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

pub struct FrostlineRuntime {
    pub storage: Arc<StorageEngine>,
    pub alerts: Arc<AlertPipeline>,
    /// `None` when no prediction service is configured.
    pub diagnostics: Option<DiagnosticPipeline>,
    pub config: FrostlineConfig,
}

impl FrostlineRuntime {
    /// Open storage from `config.storage.db_path` and wire everything.
    /// Also installs the tracing subscriber if none is set.
    pub fn new(config: FrostlineConfig) -> FrostlineResult<Self> {
        init_tracing_with(&config.observability);
        config.validate()?;
        let storage = if config.storage.db_path == IN_MEMORY_DB_PATH {
            StorageEngine::open_in_memory()?
        } else {
            StorageEngine::open_with(Path::new(&config.storage.db_path), &config.storage)?
        };
        let predictor = match config.prediction.base_url {
            Some(_) => Some(Arc::new(HttpPredictor::new(&config.prediction)?) as Arc<dyn IFaultPredictor>),
            None => {
                tracing::info!("no prediction service configured, diagnostics disabled");
                None
            }
        };
        Self::with_parts(config, Arc::new(storage), predictor)
    }

    /// Parse a TOML config, apply environment overrides, and build.
    pub fn from_toml_str(toml_str: &str) -> FrostlineResult<Self> {
        let mut config = FrostlineConfig::from_toml_str(toml_str)?;
        config.apply_env_overrides();
        Self::new(config)
    }

    /// Wire pipelines around an existing engine and predictor. The config
    /// is validated first.
    pub fn with_parts(
        config: FrostlineConfig,
        storage: Arc<StorageEngine>,
        predictor: Option<Arc<dyn IFaultPredictor>>,
    ) -> FrostlineResult<Self> {
        config.validate()?;
        let engine = ConfidenceEngine::new(config.scoring.clone());
        let router = EscalationRouter::from_config(
            &config.escalation,
            &config.enrichment,
            engine.utc_offset(),
        )?;
        let alerts = Arc::new(
            AlertPipeline::new(storage.clone(), engine, router).with_degradation_log(storage.clone()),
        );

        let diagnostics = predictor.map(|predictor| {
            DiagnosticPipeline::new(
                alerts.clone(),
                storage.clone(),
                predictor,
                LearningTracker::new(storage.clone(), config.learning.clone()),
                config.sensors.clone(),
            )
        });

        tracing::info!(
            transport = %config.escalation.transport,
            enrichment = config.enrichment.enabled,
            diagnostics = diagnostics.is_some(),
            "frostline runtime ready"
        );

        Ok(Self {
            storage,
            alerts,
            diagnostics,
            config,
        })
    }
}
