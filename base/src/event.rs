use crate::KeyString;
use crate::value::Value;

/// One step of a value tree walk.
///
/// `Literal` only ever carries scalar values; containers are spelled out
/// with start/end pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DocumentStart,
    DocumentEnd,
    MapStart,
    MapEnd,
    ListStart,
    ListEnd,
    MapKey(KeyString),
    Literal(Value),
}

impl Event {
    pub fn null() -> Event {
        Event::Literal(Value::Null)
    }
    pub fn bool(value: bool) -> Event {
        Event::Literal(Value::Bool(value))
    }
    pub fn int(value: impl Into<i64>) -> Event {
        Event::Literal(Value::int(value))
    }
    pub fn double(value: impl Into<f64>) -> Event {
        Event::Literal(Value::double(value))
    }

    pub fn string(s: impl Into<String>) -> Event {
        Event::Literal(Value::string(s))
    }

    pub fn map_key(s: impl Into<KeyString>) -> Event {
        Event::MapKey(s.into())
    }
}
