use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::body::to_body_string;
use crate::error::ProcessingError;

const SUCCESS_MESSAGE: &str = "Asset processed successfully";
const FAILURE_MESSAGE: &str = "Error processing asset";

/// Envelope of an S3 notification payload. Records stay raw until they are
/// decoded one by one, so a bad record only stops the batch at its position.
#[derive(Debug, Deserialize)]
pub struct NotificationBatch {
    #[serde(rename = "Records")]
    pub records: Vec<Value>,
}

impl NotificationBatch {
    pub fn from_payload(payload: &Value) -> Result<Self, ProcessingError> {
        NotificationBatch::deserialize(payload).map_err(ProcessingError::MalformedBatch)
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "eventName")]
    event_name: String,
    s3: RawEntity,
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    bucket: RawBucket,
    object: RawObject,
}

#[derive(Debug, Deserialize)]
struct RawBucket {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    key: String,
    size: u64,
}

/// One upload occurrence with the object key already percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub bucket_name: String,
    pub object_key: String,
    pub object_size: u64,
    pub event_name: String,
}

impl NotificationRecord {
    pub fn from_value(index: usize, value: &Value) -> Result<Self, ProcessingError> {
        let raw = RawRecord::deserialize(value)
            .map_err(|source| ProcessingError::MalformedRecord { index, source })?;
        Ok(Self {
            bucket_name: raw.s3.bucket.name,
            object_key: decode_object_key(&raw.s3.object.key),
            object_size: raw.s3.object.size,
            event_name: raw.event_name,
        })
    }
}

/// Decodes an S3 object key as form-encoded text: `+` is a space, `%XX` is a
/// byte. Invalid escapes are kept as-is and invalid UTF-8 becomes U+FFFD.
pub fn decode_object_key(key: &str) -> String {
    let key = key.replace('+', " ");
    let bytes = urlencoding::decode_binary(key.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[derive(Serialize)]
struct SuccessBody {
    message: &'static str,
    files_processed: usize,
}

#[derive(Serialize)]
struct FailureBody<'a> {
    message: &'static str,
    error: &'a str,
}

/// Response handed back to the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResult {
    pub fn success(files_processed: usize) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: 200,
            body: to_body_string(&SuccessBody {
                message: SUCCESS_MESSAGE,
                files_processed,
            })?,
        })
    }

    pub fn failure(error: &ProcessingError) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: 500,
            body: to_body_string(&FailureBody {
                message: FAILURE_MESSAGE,
                error: &error.to_string(),
            })?,
        })
    }
}
