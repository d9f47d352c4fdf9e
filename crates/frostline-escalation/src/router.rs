//! Escalation gating and dispatch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};
use serde::Serialize;

use frostline_core::config::{EnrichmentConfig, EscalationConfig};
use frostline_core::constants::MAX_PAGING_MESSAGE_CHARS;
use frostline_core::errors::FrostlineResult;
use frostline_core::models::{AlertRecord, AlertStatus};
use frostline_core::traits::{IPagingTransport, ITextEnricher};
use frostline_observability::{escalation_span, events};

use crate::enrichment::{self, enrich_or_fallback, Enrichment};
use crate::message::{format_alert, truncate_message};
use crate::transport::build_transport;

/// What happened to one outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The transport reported an error. Carries the reason.
    Failed(String),
    /// No paging transport is configured; the message was only logged.
    NoTransport,
}

/// Full account of one escalation decision.
#[derive(Debug, Clone, PartialEq)]
pub struct EscalationReport {
    /// True iff the record was confirmed, regardless of delivery outcome.
    pub escalated: bool,
    /// `None` when the record was not confirmed.
    pub delivery: Option<Delivery>,
    /// Set when enrichment was attempted and the fallback text was used.
    pub enrichment_failure: Option<String>,
    pub message: Option<String>,
}

impl EscalationReport {
    fn skipped() -> Self {
        Self {
            escalated: false,
            delivery: None,
            enrichment_failure: None,
            message: None,
        }
    }

    pub fn delivery_failure(&self) -> Option<&str> {
        match &self.delivery {
            Some(Delivery::Failed(reason)) => Some(reason),
            _ => None,
        }
    }
}

/// Snapshot of the router's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EscalationStats {
    pub attempted: u64,
    pub delivered: u64,
    pub failed: u64,
}

/// Formats and dispatches paging messages for confirmed records.
pub struct EscalationRouter {
    transport: Option<Arc<dyn IPagingTransport>>,
    enricher: Option<Arc<dyn ITextEnricher>>,
    fallback_text: String,
    max_message_chars: usize,
    utc_offset: FixedOffset,
    attempted: AtomicU64,
    delivered: AtomicU64,
    failed: AtomicU64,
}

impl EscalationRouter {
    pub fn new(transport: Option<Arc<dyn IPagingTransport>>) -> Self {
        Self {
            transport,
            enricher: None,
            fallback_text: String::new(),
            max_message_chars: MAX_PAGING_MESSAGE_CHARS,
            utc_offset: Utc.fix(),
            attempted: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Build from config: transport from `[escalation]`, enricher from
    /// `[enrichment]`. Fails on a named transport without its credentials.
    pub fn from_config(
        escalation: &EscalationConfig,
        enrichment_config: &EnrichmentConfig,
        utc_offset: FixedOffset,
    ) -> FrostlineResult<Self> {
        let mut router = Self::new(build_transport(escalation)?)
            .with_max_message_chars(escalation.max_message_chars)
            .with_utc_offset(utc_offset);
        if let Some(enricher) = enrichment::build_enricher(enrichment_config)? {
            router = router.with_enricher(enricher, &enrichment_config.fallback_text);
        }
        Ok(router)
    }

    pub fn with_enricher(mut self, enricher: Arc<dyn ITextEnricher>, fallback_text: &str) -> Self {
        self.enricher = Some(enricher);
        self.fallback_text = fallback_text.to_string();
        self
    }

    pub fn with_max_message_chars(mut self, max_message_chars: usize) -> Self {
        self.max_message_chars = max_message_chars;
        self
    }

    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// Page for `record` if it is confirmed. Returns whether escalation was
    /// triggered; delivery failures do not change the answer.
    pub fn maybe_escalate(&self, record: &AlertRecord) -> bool {
        self.escalate(record).escalated
    }

    /// Same decision as [`maybe_escalate`](Self::maybe_escalate) with the
    /// delivery and enrichment outcome attached.
    pub fn escalate(&self, record: &AlertRecord) -> EscalationReport {
        if record.status != AlertStatus::Confirmed {
            tracing::debug!(
                alert_id = record.id,
                status = %record.status,
                "not confirmed, no page"
            );
            return EscalationReport::skipped();
        }

        let transport_name = self
            .transport
            .as_ref()
            .map(|t| t.name().to_string())
            .unwrap_or_else(|| "none".to_string());
        let _span = escalation_span!(record.id, transport_name).entered();

        let enrichment = self.enrich(record);
        let analysis = enrichment.as_ref().map(|e| e.text.as_str());
        let message = truncate_message(
            &format_alert(record, self.utc_offset, analysis),
            self.max_message_chars,
        );

        let delivery = self.dispatch(record.id, &message);
        EscalationReport {
            escalated: true,
            delivery: Some(delivery),
            enrichment_failure: enrichment.and_then(|e| e.failure),
            message: Some(message),
        }
    }

    /// Page an operational notice (retraining, new fault type). Not gated
    /// on any alert status.
    pub fn send_notice(&self, text: &str) -> Delivery {
        let message = truncate_message(text, self.max_message_chars);
        self.dispatch(0, &message)
    }

    pub fn stats(&self) -> EscalationStats {
        EscalationStats {
            attempted: self.attempted.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    fn enrich(&self, record: &AlertRecord) -> Option<Enrichment> {
        let enricher = self.enricher.as_ref()?;
        let prompt = enrichment::alert_prompt(record);
        Some(enrich_or_fallback(
            enricher.as_ref(),
            &prompt,
            &self.fallback_text,
        ))
    }

    fn dispatch(&self, alert_id: i64, message: &str) -> Delivery {
        let Some(transport) = self.transport.as_ref() else {
            tracing::warn!(
                alert_id,
                message_chars = message.chars().count(),
                "no paging transport configured, message not sent"
            );
            return Delivery::NoTransport;
        };

        self.attempted.fetch_add(1, Ordering::Relaxed);
        match transport.deliver(message) {
            Ok(()) => {
                self.delivered.fetch_add(1, Ordering::Relaxed);
                events::escalation_sent(alert_id, transport.name(), message.chars().count());
                Delivery::Delivered
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                let reason = e.to_string();
                events::escalation_failed(alert_id, transport.name(), &reason);
                Delivery::Failed(reason)
            }
        }
    }
}
