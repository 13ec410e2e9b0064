pub mod builder;
pub mod dumper;
pub mod error;
pub mod event;
pub mod kind;
pub mod result;
pub mod value;

mod access;
mod container;

/// Text type used for object keys travelling through the event stream.
pub type KeyString = ecow::EcoString;

pub use builder::ValueBuilder;
pub use dumper::{Dumper, dump_value};
pub use error::TypeMismatch;
pub use event::Event;
pub use kind::ValueKind;
pub use value::Value;
