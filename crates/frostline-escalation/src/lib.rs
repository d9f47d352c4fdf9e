//! # frostline-escalation
//!
//! Turns confirmed alert records into paging messages and hands them to a
//! human-facing channel. Delivery problems never reach the caller: they are
//! logged, counted, and reported back as data.

pub mod enrichment;
pub mod message;
pub mod router;
pub mod transport;

pub use enrichment::{enrich_or_fallback, Enrichment, GeminiEnricher};
pub use router::{Delivery, EscalationReport, EscalationRouter, EscalationStats};
pub use transport::{build_transport, HttpClient, HttpClientConfig, TelegramTransport, WebhookTransport};
