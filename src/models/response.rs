//! Response records returned by the receiver's object and nested scenarios.

use serde::{Deserialize, Serialize};

/// Single-field counter object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Count {
    /// Zero when the receiver leaves it out.
    #[serde(default)]
    pub total_count: i32,
}

/// Status block nested inside the receiver's wrapped responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusObject {
    pub code: Option<serde_json::Value>,
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Timestamped status wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseObject {
    pub timestamp: Option<String>,
    pub status: Option<StatusObject>,
}

/// Timestamped status wrapper carrying an arbitrary data list.
///
/// Also the shape the receiver uses for its canned 4xx error bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseObjectList {
    pub timestamp: Option<String>,
    pub status: Option<StatusObject>,
    pub data_list: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_object_keeps_extra_fields() {
        let status: StatusObject =
            serde_json::from_str(r#"{"code":"400","message":"Bad Request","detail":"x"}"#).unwrap();
        assert_eq!(status.message.as_deref(), Some("Bad Request"));
        assert_eq!(status.extra["detail"], "x");

        let back = serde_json::to_value(&status).unwrap();
        assert_eq!(back["detail"], "x");
    }

    #[test]
    fn test_response_object_list_round_trips_data() {
        let raw = r#"{"timestamp":"2022-10-07","status":{"code":200,"message":"ok"},"dataList":[{"id":1}]}"#;
        let parsed: ResponseObjectList = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data_list.unwrap()[0]["id"], 1);
    }
}
