use super::*;

#[test]
fn queue_error_to_status_maps_not_found() {
    let err = QueueError::NotFound(Uuid::nil());
    assert_eq!(queue_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn queue_error_to_status_maps_invalid_status_to_500() {
    let err = QueueError::InvalidStatus("limbo".to_owned());
    assert_eq!(queue_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn queue_error_to_status_maps_database_to_500() {
    let err = QueueError::Database(sqlx::Error::PoolClosed);
    assert_eq!(queue_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}
