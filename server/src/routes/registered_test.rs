use super::*;

#[test]
fn registered_error_to_status_maps_missing_id_column_to_400() {
    let err = RegisteredError::MissingIdColumn;
    assert_eq!(registered_error_to_status(err), StatusCode::BAD_REQUEST);
}

#[test]
fn registered_error_to_status_maps_database_to_500() {
    let err = RegisteredError::Database(sqlx::Error::PoolClosed);
    assert_eq!(registered_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}
