mod convert;
mod error;
mod meta;
mod slot;
mod tag;
mod timestamp;
mod walk;

/// Error and result aliases.
pub use error::{BindError, Result};
/// Static field descriptor table types.
pub use meta::{FieldMeta, Kind, Tag};
/// Typed slot views, binding capability traits, and document decoding.
pub use slot::{ArraySlot, Bind, DocumentSlot, FloatSlot, IntSlot, OptionalSlot, Record, SequenceSlot, SlotMut, UintSlot, decode_document};
/// Tag resolution strategies.
pub use tag::{DefaultSpec, DirectTag, SubKeyTag, TagResolver};
/// Default application entry points.
pub use walk::{apply_defaults, apply_form_defaults, apply_with};
