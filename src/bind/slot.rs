use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::bind::error::{BindError, Result};
use crate::bind::meta::{FieldMeta, Kind};

/// Typed mutable view over one bindable storage location.
pub enum SlotMut<'a> {
	/// Signed integer storage of a specific width.
	Int(IntSlot<'a>),
	/// Unsigned integer storage of a specific width.
	Uint(UintSlot<'a>),
	/// Floating point storage of a specific precision.
	Float(FloatSlot<'a>),
	/// Boolean storage.
	Bool(&'a mut bool),
	/// Owned text storage.
	Text(&'a mut String),
	/// Absolute timestamp storage.
	Timestamp(&'a mut DateTime<Utc>),
	/// Elapsed-time storage.
	Duration(&'a mut Duration),
	/// Growable sequence storage.
	Sequence(&'a mut dyn SequenceSlot),
	/// Fixed-arity array storage.
	Array(&'a mut dyn ArraySlot),
	/// Optional indirection storage.
	Optional(&'a mut dyn OptionalSlot),
	/// Nested record storage.
	Record(&'a mut dyn Record),
	/// Composite storage decoded from a serialized document.
	Document(&'a mut dyn DocumentSlot),
}

impl SlotMut<'_> {
	/// Slot classification used for dispatch and diagnostics.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Int(_) => Kind::Int,
			Self::Uint(_) => Kind::Uint,
			Self::Float(_) => Kind::Float,
			Self::Bool(_) => Kind::Bool,
			Self::Text(_) => Kind::Text,
			Self::Timestamp(_) => Kind::Timestamp,
			Self::Duration(_) => Kind::Duration,
			Self::Sequence(_) => Kind::Sequence,
			Self::Array(_) => Kind::Array,
			Self::Optional(_) => Kind::Optional,
			Self::Record(_) => Kind::Record,
			Self::Document(_) => Kind::Document,
		}
	}
}

/// Signed integer storage widths.
#[derive(Debug)]
pub enum IntSlot<'a> {
	/// 8-bit signed storage.
	I8(&'a mut i8),
	/// 16-bit signed storage.
	I16(&'a mut i16),
	/// 32-bit signed storage.
	I32(&'a mut i32),
	/// 64-bit signed storage.
	I64(&'a mut i64),
	/// Pointer-width signed storage.
	Isize(&'a mut isize),
}

/// Unsigned integer storage widths.
#[derive(Debug)]
pub enum UintSlot<'a> {
	/// 8-bit unsigned storage.
	U8(&'a mut u8),
	/// 16-bit unsigned storage.
	U16(&'a mut u16),
	/// 32-bit unsigned storage.
	U32(&'a mut u32),
	/// 64-bit unsigned storage.
	U64(&'a mut u64),
	/// Pointer-width unsigned storage.
	Usize(&'a mut usize),
}

/// Floating point storage precisions.
#[derive(Debug)]
pub enum FloatSlot<'a> {
	/// 32-bit float storage.
	F32(&'a mut f32),
	/// 64-bit float storage.
	F64(&'a mut f64),
}

/// A storage location that can expose a typed slot for default binding.
pub trait Bind {
	/// Slot classification after statically unwrapping optional indirection.
	const CORE: Kind;

	/// Borrow this location as a typed slot.
	fn slot_mut(&mut self) -> SlotMut<'_>;
}

/// A record type with a static field table the walker can traverse.
pub trait Record {
	/// Field descriptor table in declaration order.
	fn fields(&self) -> &'static [FieldMeta];

	/// Typed view of the field at `index`.
	///
	/// # Panics
	///
	/// Panics when `index` is outside the descriptor table.
	fn field_slot(&mut self, index: usize) -> SlotMut<'_>;

	/// Decode a serialized document default directly into the whole record.
	///
	/// The provided implementation rejects the default; records that accept
	/// document defaults forward to [`decode_document`].
	fn assign_document(&mut self, text: &str) -> Result<()> {
		let _ = text;
		Err(BindError::TypeUnsupported {
			type_name: "record without a document form",
		})
	}
}

/// Growable sequences that can install a single defaulted element.
pub trait SequenceSlot {
	/// Replace the contents with one element produced by `fill`.
	///
	/// The element is staged outside the sequence; when `fill` fails the
	/// previous contents are kept.
	fn install_one(&mut self, fill: &mut dyn FnMut(SlotMut<'_>) -> Result<()>) -> Result<()>;
}

impl<T: Bind + Default> SequenceSlot for Vec<T> {
	fn install_one(&mut self, fill: &mut dyn FnMut(SlotMut<'_>) -> Result<()>) -> Result<()> {
		let mut element = T::default();
		fill(element.slot_mut())?;
		self.clear();
		self.push(element);
		Ok(())
	}
}

/// Fixed-arity arrays exposing element slots.
pub trait ArraySlot {
	/// Declared element count.
	fn arity(&self) -> usize;

	/// Typed view of the element at `index`.
	///
	/// # Panics
	///
	/// Panics when `index` is not below [`ArraySlot::arity`].
	fn element(&mut self, index: usize) -> SlotMut<'_>;

	/// Printable array type name for diagnostics.
	fn type_name(&self) -> &'static str;
}

impl<T: Bind, const N: usize> ArraySlot for [T; N] {
	fn arity(&self) -> usize {
		N
	}

	fn element(&mut self, index: usize) -> SlotMut<'_> {
		self[index].slot_mut()
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<[T; N]>()
	}
}

/// Optional indirection supporting speculative allocation.
pub trait OptionalSlot {
	/// Whether a value is currently held.
	fn is_present(&self) -> bool;

	/// Insert a zero value when absent and return the inner slot.
	fn materialize(&mut self) -> SlotMut<'_>;

	/// Drop the held value, restoring the absent state.
	fn clear(&mut self);
}

impl<T: Bind + Default> OptionalSlot for Option<T> {
	fn is_present(&self) -> bool {
		self.is_some()
	}

	fn materialize(&mut self) -> SlotMut<'_> {
		self.get_or_insert_with(T::default).slot_mut()
	}

	fn clear(&mut self) {
		*self = None;
	}
}

/// Narrow capability for decoding a serialized document into a typed slot.
pub trait DocumentSlot {
	/// Decode `text` as a self-contained document into this location.
	fn assign_document(&mut self, text: &str) -> Result<()>;
}

impl<T: DeserializeOwned> DocumentSlot for T {
	fn assign_document(&mut self, text: &str) -> Result<()> {
		decode_document(self, text)
	}
}

/// Decode a JSON document default into any deserializable destination.
pub fn decode_document<T: DeserializeOwned>(target: &mut T, text: &str) -> Result<()> {
	*target = serde_json::from_str(text).map_err(|err| BindError::ConversionFailed {
		text: text.to_owned(),
		type_name: std::any::type_name::<T>(),
		source: Box::new(err),
	})?;
	Ok(())
}

impl Bind for i8 {
	const CORE: Kind = Kind::Int;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Int(IntSlot::I8(self))
	}
}

impl Bind for i16 {
	const CORE: Kind = Kind::Int;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Int(IntSlot::I16(self))
	}
}

impl Bind for i32 {
	const CORE: Kind = Kind::Int;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Int(IntSlot::I32(self))
	}
}

impl Bind for i64 {
	const CORE: Kind = Kind::Int;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Int(IntSlot::I64(self))
	}
}

impl Bind for isize {
	const CORE: Kind = Kind::Int;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Int(IntSlot::Isize(self))
	}
}

impl Bind for u8 {
	const CORE: Kind = Kind::Uint;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Uint(UintSlot::U8(self))
	}
}

impl Bind for u16 {
	const CORE: Kind = Kind::Uint;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Uint(UintSlot::U16(self))
	}
}

impl Bind for u32 {
	const CORE: Kind = Kind::Uint;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Uint(UintSlot::U32(self))
	}
}

impl Bind for u64 {
	const CORE: Kind = Kind::Uint;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Uint(UintSlot::U64(self))
	}
}

impl Bind for usize {
	const CORE: Kind = Kind::Uint;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Uint(UintSlot::Usize(self))
	}
}

impl Bind for f32 {
	const CORE: Kind = Kind::Float;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Float(FloatSlot::F32(self))
	}
}

impl Bind for f64 {
	const CORE: Kind = Kind::Float;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Float(FloatSlot::F64(self))
	}
}

impl Bind for bool {
	const CORE: Kind = Kind::Bool;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Bool(self)
	}
}

impl Bind for String {
	const CORE: Kind = Kind::Text;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Text(self)
	}
}

impl Bind for DateTime<Utc> {
	const CORE: Kind = Kind::Timestamp;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Timestamp(self)
	}
}

impl Bind for Duration {
	const CORE: Kind = Kind::Duration;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Duration(self)
	}
}

impl<T: Bind + Default> Bind for Vec<T> {
	const CORE: Kind = Kind::Sequence;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Sequence(self)
	}
}

impl<T: Bind, const N: usize> Bind for [T; N] {
	const CORE: Kind = Kind::Array;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Array(self)
	}
}

impl<T: Bind + Default> Bind for Option<T> {
	const CORE: Kind = T::CORE;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Optional(self)
	}
}

impl<T: Bind> Bind for Box<T> {
	const CORE: Kind = T::CORE;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		(**self).slot_mut()
	}
}

impl<K, V, S> Bind for HashMap<K, V, S>
where
	HashMap<K, V, S>: DeserializeOwned,
{
	const CORE: Kind = Kind::Document;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Document(self)
	}
}

impl<K, V> Bind for BTreeMap<K, V>
where
	BTreeMap<K, V>: DeserializeOwned,
{
	const CORE: Kind = Kind::Document;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Document(self)
	}
}
