//! Seams between the pipeline and its collaborators.

pub mod alert_store;
pub mod degradation_log;
pub mod diagnostic_store;
pub mod fault_predictor;
pub mod learning_store;
pub mod paging_transport;
pub mod text_enricher;

pub use alert_store::IAlertStore;
pub use degradation_log::IDegradationLog;
pub use diagnostic_store::IDiagnosticStore;
pub use fault_predictor::IFaultPredictor;
pub use learning_store::ILearningStore;
pub use paging_transport::IPagingTransport;
pub use text_enricher::ITextEnricher;
