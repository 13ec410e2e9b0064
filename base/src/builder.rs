use crate::KeyString;
use crate::context;
use crate::dumper::Dumper;
use crate::error::{bail, ensure, format_err};
use crate::event::Event;
use crate::kind::ValueKind;
use crate::result::JsonTreeResult;
use crate::value::Value;

/// Builds a [`Value`] from a stream of events.
///
/// This is the receiving end for parsers: every event is applied with the
/// regular mutation operations, so the result upholds the same invariants as
/// a hand-built tree. Duplicate map keys replace the earlier entry.
#[derive(Debug)]
pub struct ValueBuilder {
    state: BuilderState,
    stack: Vec<Frame>,
    root: Option<Value>,
}

#[derive(Debug, PartialEq)]
enum BuilderState {
    Initial,
    InDocument,
    Finished,
}

#[derive(Debug)]
struct Frame {
    container: Value,
    pending_key: Option<KeyString>,
}

impl Default for ValueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueBuilder {
    pub fn new() -> ValueBuilder {
        ValueBuilder {
            state: BuilderState::Initial,
            stack: vec![],
            root: None,
        }
    }

    /// Feeds all `events` into a fresh builder and returns the finished value.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> JsonTreeResult<Value> {
        context!("build value from events" => {
            let mut builder = ValueBuilder::new();
            for event in events {
                builder.emit(event)?;
            }
            builder.finish()
        })
    }

    pub fn finish(self) -> JsonTreeResult<Value> {
        ensure!(
            self.state == BuilderState::Finished,
            "document is incomplete, {} container(s) still open",
            self.stack.len()
        );
        self.root
            .ok_or_else(|| format_err!("document ended without a value"))
    }

    fn expect_in_document(&self) -> JsonTreeResult<()> {
        match self.state {
            BuilderState::InDocument => Ok(()),
            BuilderState::Initial => bail!("event before document start"),
            BuilderState::Finished => bail!("event after document end"),
        }
    }

    fn expect_value_position(&self) -> JsonTreeResult<()> {
        self.expect_in_document()?;
        match self.stack.last() {
            None => ensure!(self.root.is_none(), "document already has a root value"),
            Some(frame) if frame.container.is_object() => {
                ensure!(frame.pending_key.is_some(), "map value without a preceding key")
            }
            Some(_) => {}
        }
        Ok(())
    }

    fn place(&mut self, value: Value) -> JsonTreeResult<()> {
        let Some(frame) = self.stack.last_mut() else {
            self.root = Some(value);
            return Ok(());
        };
        if frame.container.is_array() {
            frame.container.append(value);
            return Ok(());
        }
        let Some(key) = frame.pending_key.take() else {
            bail!("map value without a preceding key");
        };
        *frame.container.member_mut(&key)? = value;
        Ok(())
    }

    fn open(&mut self, kind: ValueKind) -> JsonTreeResult<()> {
        self.expect_value_position()?;
        self.stack.push(Frame {
            container: Value::with_kind(kind),
            pending_key: None,
        });
        Ok(())
    }

    fn close(&mut self, kind: ValueKind) -> JsonTreeResult<()> {
        self.expect_in_document()?;
        let Some(frame) = self.stack.last() else {
            bail!("end of {} without a matching start", kind);
        };
        ensure!(
            frame.container.kind() == kind,
            "end of {} inside an open {}",
            kind,
            frame.container.kind()
        );
        if let Some(key) = &frame.pending_key {
            bail!("map ended after key {:?} without a value", key);
        }
        let Some(frame) = self.stack.pop() else {
            bail!("end of {} without a matching start", kind);
        };
        self.place(frame.container)
    }
}

impl Dumper for ValueBuilder {
    fn emit(&mut self, event: &Event) -> JsonTreeResult<()> {
        match event {
            Event::DocumentStart => {
                ensure!(
                    self.state == BuilderState::Initial,
                    "document already started"
                );
                self.state = BuilderState::InDocument;
            }
            Event::DocumentEnd => {
                self.expect_in_document()?;
                ensure!(
                    self.stack.is_empty(),
                    "document ended with {} open container(s)",
                    self.stack.len()
                );
                ensure!(self.root.is_some(), "document ended without a value");
                self.state = BuilderState::Finished;
            }
            Event::MapStart => self.open(ValueKind::Object)?,
            Event::MapEnd => self.close(ValueKind::Object)?,
            Event::ListStart => self.open(ValueKind::Array)?,
            Event::ListEnd => self.close(ValueKind::Array)?,
            Event::MapKey(key) => {
                self.expect_in_document()?;
                let Some(frame) = self.stack.last_mut() else {
                    bail!("map key {:?} outside of a map", key);
                };
                ensure!(frame.container.is_object(), "map key {:?} inside a list", key);
                ensure!(
                    frame.pending_key.is_none(),
                    "map key {:?} follows another key",
                    key
                );
                frame.pending_key = Some(key.clone());
            }
            Event::Literal(value) => {
                ensure!(
                    !value.kind().is_container(),
                    "literal must be a scalar, but was {}",
                    value.kind()
                );
                self.expect_value_position()?;
                self.place(value.clone())?;
            }
        }
        Ok(())
    }
}
