use crate::common::{Error, types::STATUS_SUCCESS};
use serde_json::Value;
use tracing::{trace, warn};

/// Validate a PayPlay response envelope and return its payload.
///
/// A missing or null `status` counts as success. The payload is the nested
/// `data` field, or the whole envelope when `data` is missing or null. A
/// top-level array carries neither field and is its own payload.
pub fn open(raw: &str) -> Result<Value, Error> {
    trace!("PayPlay response => {raw}");

    let mut envelope = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(envelope)) => envelope,
        Ok(array @ Value::Array(_)) => return Ok(array),
        _ => {
            warn!("PayPlay response is not a JSON object or array");

            return Err(Error::invalid_json(raw));
        }
    };

    match envelope.get("status") {
        None | Some(Value::Null) => {}
        Some(Value::String(status)) if status == STATUS_SUCCESS => {}
        Some(status) => {
            warn!("PayPlay rejected request with status {status}");

            return Err(Error::remote_payload(raw));
        }
    }

    match envelope.remove("data") {
        Some(Value::Null) | None => Ok(Value::Object(envelope)),
        Some(data) => Ok(data),
    }
}
