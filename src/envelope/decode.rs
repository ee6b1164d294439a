//! Decoding downstream bodies into envelope payloads.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::Payload;
use crate::models::{
    Count, ResponseObject, ResponseObjectList, Student, StudentNameAndClass,
};
use crate::scenario::ResponseShape;

/// The downstream body did not match the expected shape.
#[derive(Debug, Error)]
#[error("cannot decode {shape:?} response: {source}")]
pub struct DecodeError {
    pub shape: ResponseShape,
    #[source]
    pub source: serde_json::Error,
}

/// Decode `body` with the declared shape.
///
/// An empty body is an absent payload for every shape; `Text` is kept raw.
pub fn decode(shape: ResponseShape, body: &str) -> Result<Payload, DecodeError> {
    if body.is_empty() {
        return Ok(Payload::Absent);
    }

    let value = match shape {
        ResponseShape::Text => return Ok(Payload::Text(body.to_string())),
        ResponseShape::Count => reencode::<Count>(shape, body)?,
        ResponseShape::Student => reencode::<Student>(shape, body)?,
        ResponseShape::StringList => reencode::<Vec<String>>(shape, body)?,
        ResponseShape::StudentList => reencode::<Vec<Student>>(shape, body)?,
        ResponseShape::StudentNameAndClassList => {
            reencode::<Vec<StudentNameAndClass>>(shape, body)?
        }
        ResponseShape::ResponseObject => reencode::<ResponseObject>(shape, body)?,
        ResponseShape::ResponseObjectList => reencode::<ResponseObjectList>(shape, body)?,
    };

    Ok(Payload::Json(value))
}

/// Parse an error-status body strictly as [`ResponseObjectList`].
///
/// Unlike [`decode`], an empty body is a decode failure here.
pub fn decode_structured_error(body: &str) -> Result<Payload, DecodeError> {
    reencode::<ResponseObjectList>(ResponseShape::ResponseObjectList, body).map(Payload::Json)
}

fn reencode<T>(shape: ResponseShape, body: &str) -> Result<Value, DecodeError>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = serde_json::from_str(body).map_err(|source| DecodeError { shape, source })?;
    serde_json::to_value(typed).map_err(|source| DecodeError { shape, source })
}
