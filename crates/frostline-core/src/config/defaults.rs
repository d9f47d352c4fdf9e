// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "frostline.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Scoring ---
pub const DEFAULT_BASE_SCORE: f64 = 20.0;
pub const DEFAULT_OCCURRENCE_WEIGHT: f64 = 15.0;
pub const DEFAULT_OCCURRENCE_CAP: f64 = 60.0;
pub const DEFAULT_SEVERITY_CRITICAL: f64 = 25.0;
pub const DEFAULT_SEVERITY_HIGH: f64 = 15.0;
pub const DEFAULT_SEVERITY_MEDIUM: f64 = 5.0;
pub const DEFAULT_SEVERITY_LOW: f64 = 0.0;
pub const DEFAULT_PATTERN_THRESHOLD: usize = 5;
pub const DEFAULT_PATTERN_PENALTY: f64 = -30.0;
pub const DEFAULT_OVERNIGHT_PENALTY: f64 = -15.0;
pub const DEFAULT_MIDDAY_PENALTY: f64 = -10.0;
pub const DEFAULT_CONFIRM_THRESHOLD: f64 = 70.0;
pub const DEFAULT_INVESTIGATE_THRESHOLD: f64 = 40.0;
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 0;

// --- Escalation ---
pub const DEFAULT_ESCALATION_TRANSPORT: &str = "none";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_PAGING_TIMEOUT_SECS: u64 = 5;

// --- Enrichment ---
pub const DEFAULT_ENRICHMENT_ENABLED: bool = false;
pub const DEFAULT_ENRICHMENT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ENRICHMENT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENRICHMENT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_ENRICHMENT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ENRICHMENT_FALLBACK: &str = "Automated analysis unavailable. Standard checks: \
verify system pressures, inspect electrical connections, check the evaporator.";

// --- Prediction ---
pub const DEFAULT_PREDICTION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RETRAIN_TIMEOUT_SECS: u64 = 120;

// --- Learning ---
pub const DEFAULT_RETRAINING_THRESHOLD: u64 = 1_000;
pub const DEFAULT_NEW_FAULT_THRESHOLD: u64 = 50;

// --- Sensors ---
pub const DEFAULT_MIN_SENSOR_COVERAGE: f64 = 0.7;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
