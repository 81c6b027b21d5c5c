use serde::Serialize;
use serde_json::{Value, ser::Formatter};

use std::{collections::BTreeMap, io};

use crate::dto::ApiResponse;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Builds the gateway envelope. Falsy payloads (null, `[]`, `{}`) produce an
/// empty body.
pub fn respond<T: Serialize>(status: u16, payload: &T) -> Result<ApiResponse, serde_json::Error> {
    let value = serde_json::to_value(payload)?;
    let body = if is_falsy(&value) {
        String::new()
    } else {
        to_spaced_json(&value)?
    };

    Ok(ApiResponse {
        status_code: status,
        body,
        headers: BTreeMap::from([("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())]),
    })
}

#[allow(clippy::float_cmp)]
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// `{"a": 1, "b": [1, 2]}` layout with non-ASCII characters escaped.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut bytes = [0u8; 4];
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(ch.encode_utf8(&mut bytes).as_bytes())?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

fn to_spaced_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;

    // Every non-ASCII character was escaped above.
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}
