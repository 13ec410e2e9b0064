use crate::context;
use crate::event::Event;
use crate::result::JsonTreeResult;
use crate::value::Value;

pub trait Dumper {
    fn emit(&mut self, event: &Event) -> JsonTreeResult<()>;
}

/// Walks `value` and feeds it to `dumper` as a single document.
///
/// Object entries are emitted in key order, array elements in storage order.
pub fn dump_value(value: &Value, dumper: &mut dyn Dumper) -> JsonTreeResult<()> {
    context!("dump {} value", value.kind() => {
        dump_document(value, dumper)
    })
}

fn dump_document(value: &Value, dumper: &mut dyn Dumper) -> JsonTreeResult<()> {
    dumper.emit(&Event::DocumentStart)?;
    dump_events(value, dumper)?;
    dumper.emit(&Event::DocumentEnd)
}

fn dump_events(value: &Value, dumper: &mut dyn Dumper) -> JsonTreeResult<()> {
    match value {
        Value::Array(items) => {
            dumper.emit(&Event::ListStart)?;
            for item in items.iter() {
                dump_events(item, dumper)?;
            }
            dumper.emit(&Event::ListEnd)
        }
        Value::Object(entries) => {
            dumper.emit(&Event::MapStart)?;
            for (key, entry) in entries.iter() {
                dumper.emit(&Event::map_key(key.as_str()))?;
                dump_events(entry, dumper)?;
            }
            dumper.emit(&Event::MapEnd)
        }
        scalar => dumper.emit(&Event::Literal(scalar.clone())),
    }
}
