use frostline_core::errors::*;

#[test]
fn every_error_has_a_code() {
    let cases: Vec<FrostlineError> = vec![
        StorageError::SqliteError {
            message: "disk I/O".into(),
        }
        .into(),
        ValidationError::MissingTitle.into(),
        TransportError::Timeout {
            target: "paging".into(),
        }
        .into(),
        ConfigError::FileNotFound {
            path: "/tmp/x".into(),
        }
        .into(),
    ];
    for err in &cases {
        assert!(!err.error_code().is_empty());
        assert!(err.coded_string().starts_with('['));
    }
}

#[test]
fn only_validation_counts_as_invalid_input() {
    let invalid: FrostlineError = ValidationError::MissingTitle.into();
    assert!(invalid.is_invalid_input());
    assert_eq!(invalid.error_code(), error_code::INVALID_INPUT);

    let transport: FrostlineError = TransportError::NotConfigured {
        target: "telegram".into(),
    }
    .into();
    assert!(!transport.is_invalid_input());
    assert_eq!(transport.error_code(), error_code::NOT_CONFIGURED);
}

#[test]
fn migration_failure_has_its_own_code() {
    let err: FrostlineError = StorageError::MigrationFailed {
        version: 2,
        reason: "syntax".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::MIGRATION_FAILED);
    assert!(err.to_string().contains("version 2"));
}
