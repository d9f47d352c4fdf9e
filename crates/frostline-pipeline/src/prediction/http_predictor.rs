use frostline_core::config::PredictionConfig;
use frostline_core::errors::{FrostlineResult, TransportError};
use frostline_core::models::{NewFault, Prediction, SensorReadings};
use frostline_core::traits::IFaultPredictor;
use frostline_escalation::{HttpClient, HttpClientConfig};

use super::protocol::{PredictResponse, RetrainRequest, TrainNewFaultRequest};

const TARGET: &str = "prediction";

/// [`IFaultPredictor`] over the prediction service's JSON API.
///
/// Training calls get their own client because they run far longer than a
/// single prediction.
pub struct HttpPredictor {
    client: HttpClient,
    training: HttpClient,
}

impl HttpPredictor {
    pub fn new(config: &PredictionConfig) -> FrostlineResult<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| TransportError::NotConfigured {
                target: TARGET.to_string(),
            })?;
        Ok(Self {
            client: HttpClient::new(HttpClientConfig::new(TARGET, base_url, config.timeout_secs))?,
            training: HttpClient::new(HttpClientConfig::new(
                TARGET,
                base_url,
                config.retrain_timeout_secs,
            ))?,
        })
    }
}

impl IFaultPredictor for HttpPredictor {
    fn predict(&self, readings: &SensorReadings) -> FrostlineResult<Prediction> {
        let resp: PredictResponse = self.client.post_json("predict", readings)?;
        if !resp.score.is_finite() || !(0.0..=100.0).contains(&resp.score) {
            return Err(TransportError::InvalidResponse {
                target: TARGET.to_string(),
                reason: format!("score {} outside [0, 100]", resp.score),
            }
            .into());
        }
        Ok(Prediction {
            fault: resp.fault,
            score: resp.score,
            dominant_variable: resp.dominant_variable,
            error: None,
        })
    }

    fn retrain(&self, total_diagnostics: u64) -> FrostlineResult<()> {
        self.training
            .post_json_discard("retrain", &RetrainRequest { total_diagnostics })
    }

    fn train_new_fault(&self, fault: &NewFault) -> FrostlineResult<()> {
        self.training.post_json_discard(
            "train_new_fault",
            &TrainNewFaultRequest {
                label: &fault.label,
                confidence: fault.confidence,
                affected_sensors: &fault.affected_sensors,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use frostline_core::errors::FrostlineErrorCode;
    use frostline_core::models::Sensor;

    use super::*;

    fn config(base_url: Option<&str>) -> PredictionConfig {
        PredictionConfig {
            base_url: base_url.map(str::to_string),
            timeout_secs: 1,
            retrain_timeout_secs: 1,
        }
    }

    #[test]
    fn missing_base_url_is_not_configured() {
        let err = HttpPredictor::new(&config(None)).err().unwrap();
        assert_eq!(err.error_code(), "NOT_CONFIGURED");
        assert!(HttpPredictor::new(&config(Some("  "))).is_err());
    }

    #[test]
    fn unreachable_service_is_a_transport_error() {
        let predictor = HttpPredictor::new(&config(Some("http://127.0.0.1:1"))).unwrap();
        let readings = SensorReadings::new().with(Sensor::Temperature, 4.0);
        let err = predictor.predict(&readings).unwrap_err();
        assert!(matches!(err, frostline_core::FrostlineError::Transport(_)));
        assert!(predictor.retrain(10).is_err());
    }
}
