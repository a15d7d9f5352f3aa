use serde_json::Value;

/// Externally owned, JSON-shaped state that path bindings are resolved against.
pub type DataModel = Value;

/// Bound-value descriptor, decoded from a prop.
///
/// Wire forms, in priority order: plain string/number/boolean shorthand, then
/// `literalString`, `literalNumber`, `literalBoolean`, `path`. A field holding `null` counts as
/// absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundValue<'a> {
    /// A literal scalar, borrowed from the props.
    Literal(&'a Value),
    /// A `/`-separated path into the data model.
    Path(&'a str),
}

const LITERAL_FIELDS: [&str; 3] = ["literalString", "literalNumber", "literalBoolean"];

impl<'a> BoundValue<'a> {
    /// Decode a raw prop value. Returns `None` when it denotes no value at all.
    pub fn decode(raw: &'a Value) -> Option<Self> {
        match raw {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => Some(Self::Literal(raw)),
            Value::Object(map) => {
                for key in LITERAL_FIELDS {
                    if let Some(v) = map.get(key).filter(|v| !v.is_null()) {
                        return Some(Self::Literal(v));
                    }
                }
                match map.get("path") {
                    Some(Value::String(p)) if !p.is_empty() => Some(Self::Path(p)),
                    _ => None,
                }
            }
            Value::Null | Value::Array(_) => None,
        }
    }

    /// Produce the concrete value this descriptor denotes.
    pub fn resolve(self, data: &'a DataModel) -> Option<&'a Value> {
        match self {
            Self::Literal(v) => Some(v),
            Self::Path(p) => lookup_path(data, p),
        }
    }
}

/// Resolve a raw prop against `data`. Never fails: anything unresolvable is `None`.
pub fn resolve<'a>(raw: Option<&'a Value>, data: &'a DataModel) -> Option<&'a Value> {
    BoundValue::decode(raw?)?.resolve(data)
}

/// Walk a `/`-separated path through `data`.
///
/// Empty segments are dropped, so `/a/b` and `a/b` are the same path and `/` is the whole model.
/// A segment indexes a sequence when it parses as a non-negative integer and is an object key
/// otherwise. Stepping into `null` or a scalar yields `None`.
pub fn lookup_path<'a>(data: &'a DataModel, path: &str) -> Option<&'a Value> {
    let mut cur = data;
    for seg in path.split('/').filter(|s| !s.is_empty()) {
        cur = match cur {
            Value::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get(seg)?,
            _ => return None,
        };
    }
    if cur.is_null() { None } else { Some(cur) }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/resolve.rs"]
mod tests;
