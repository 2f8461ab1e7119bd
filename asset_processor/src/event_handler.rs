use lambda_runtime::{tracing, Error, LambdaEvent};
use serde_json::Value;

use crate::error::ProcessingError;
use crate::model::{HandlerResult, NotificationBatch, NotificationRecord};

fn log_record(record: &NotificationRecord) {
    tracing::info!("Image received: {}", record.object_key);
    tracing::info!("Bucket: {}", record.bucket_name);
    tracing::info!("Size: {} bytes", record.object_size);
    tracing::info!("Event: {}", record.event_name);
}

/// Logs every record of the batch in order and returns how many were
/// processed. Stops at the first record that cannot be decoded.
pub(crate) fn process_batch(payload: &Value) -> Result<usize, ProcessingError> {
    let batch = NotificationBatch::from_payload(payload)?;
    if batch.records.is_empty() {
        tracing::warn!("No records found in S3 event");
    }
    for (index, value) in batch.records.iter().enumerate() {
        let record = NotificationRecord::from_value(index, value)?;
        log_record(&record);
    }
    Ok(batch.records.len())
}

pub(crate) async fn function_handler(event: LambdaEvent<Value>) -> Result<HandlerResult, Error> {
    let (payload, _context) = event.into_parts();
    match process_batch(&payload) {
        Ok(files_processed) => Ok(HandlerResult::success(files_processed)?),
        Err(err) => {
            tracing::error!(kind = err.kind(), "Error processing S3 event: {}", err);
            tracing::error!("Event: {}", payload);
            Ok(HandlerResult::failure(&err)?)
        }
    }
}
