use crew::error::{exit_codes, Error, JsonError};

#[test]
fn exit_codes_map_correctly() {
    let validation = Error::Validation("task text cannot be empty".to_string());
    assert_eq!(validation.exit_code(), exit_codes::USER_ERROR);

    let duplicate = Error::Duplicate("Zoe".to_string());
    assert_eq!(duplicate.exit_code(), exit_codes::USER_ERROR);

    let past = Error::PastDate {
        due: "2025-05-31".to_string(),
        today: "2025-06-01".to_string(),
    };
    assert_eq!(past.exit_code(), exit_codes::USER_ERROR);

    let parse = Error::StorageParse("bad payload".to_string());
    assert_eq!(parse.exit_code(), exit_codes::OPERATION_FAILED);

    let op = Error::OperationFailed("boom".to_string());
    assert_eq!(op.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn json_error_includes_code() {
    let err = Error::Duplicate("Zoe".to_string());
    let json = JsonError::from(&err);
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.error.contains("already exists"));
}

#[test]
fn past_date_message_names_both_days() {
    let err = Error::PastDate {
        due: "2025-05-31".to_string(),
        today: "2025-06-01".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("2025-05-31"));
    assert!(message.contains("2025-06-01"));
}
