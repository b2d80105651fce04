use std::str::FromStr;
use std::time::Duration;

use crate::bind::error::{BindError, Result};
use crate::bind::meta::FieldMeta;
use crate::bind::slot::{ArraySlot, DocumentSlot, FloatSlot, IntSlot, Record, SequenceSlot, SlotMut, UintSlot};
use crate::bind::timestamp;

/// Convert resolved default text and assign it into `slot`.
///
/// A sequence is replaced by a freshly built one-element sequence; a fixed
/// array must have arity one. Every other slot converts in place.
pub(crate) fn assign(slot: SlotMut<'_>, field: &FieldMeta, text: &str) -> Result<()> {
	match slot {
		SlotMut::Sequence(sequence) => sequence.install_one(&mut |element| assign_scalar(element, field, text)),
		SlotMut::Array(array) => {
			if array.arity() != 1 {
				return Err(BindError::ArityMismatch {
					text: text.to_owned(),
					type_name: array.type_name(),
				});
			}
			assign_scalar(array.element(0), field, text)
		}
		other => assign_scalar(other, field, text),
	}
}

fn assign_scalar(slot: SlotMut<'_>, field: &FieldMeta, text: &str) -> Result<()> {
	match slot {
		SlotMut::Int(slot) => assign_int(slot, text),
		SlotMut::Uint(slot) => assign_uint(slot, text),
		SlotMut::Float(slot) => assign_float(slot, text),
		SlotMut::Bool(value) => {
			*value = parse_bool(text)?;
			Ok(())
		}
		SlotMut::Text(value) => {
			*value = text.to_owned();
			Ok(())
		}
		SlotMut::Timestamp(value) => {
			*value = timestamp::parse(text, field)?;
			Ok(())
		}
		SlotMut::Duration(value) => {
			*value = parse_duration(text)?;
			Ok(())
		}
		SlotMut::Record(record) => record.assign_document(text),
		SlotMut::Document(document) => document.assign_document(text),
		other => Err(BindError::TypeUnsupported {
			type_name: other.kind().name(),
		}),
	}
}

fn assign_int(slot: IntSlot<'_>, text: &str) -> Result<()> {
	match slot {
		IntSlot::I8(value) => *value = parse_scalar(text, "0")?,
		IntSlot::I16(value) => *value = parse_scalar(text, "0")?,
		IntSlot::I32(value) => *value = parse_scalar(text, "0")?,
		IntSlot::I64(value) => *value = parse_scalar(text, "0")?,
		IntSlot::Isize(value) => *value = parse_scalar(text, "0")?,
	}
	Ok(())
}

fn assign_uint(slot: UintSlot<'_>, text: &str) -> Result<()> {
	match slot {
		UintSlot::U8(value) => *value = parse_scalar(text, "0")?,
		UintSlot::U16(value) => *value = parse_scalar(text, "0")?,
		UintSlot::U32(value) => *value = parse_scalar(text, "0")?,
		UintSlot::U64(value) => *value = parse_scalar(text, "0")?,
		UintSlot::Usize(value) => *value = parse_scalar(text, "0")?,
	}
	Ok(())
}

fn assign_float(slot: FloatSlot<'_>, text: &str) -> Result<()> {
	match slot {
		FloatSlot::F32(value) => *value = parse_scalar(text, "0.0")?,
		FloatSlot::F64(value) => *value = parse_scalar(text, "0.0")?,
	}
	Ok(())
}

fn parse_bool(text: &str) -> Result<bool> {
	match text {
		"1" | "t" | "T" | "True" | "TRUE" => Ok(true),
		"0" | "f" | "F" | "False" | "FALSE" => Ok(false),
		_ => parse_scalar(text, "false"),
	}
}

fn parse_duration(text: &str) -> Result<Duration> {
	humantime::parse_duration(text).map_err(|err| BindError::ConversionFailed {
		text: text.to_owned(),
		type_name: "Duration",
		source: Box::new(err),
	})
}

/// Parse scalar text, substituting `empty` when the default text is empty.
fn parse_scalar<T>(text: &str, empty: &'static str) -> Result<T>
where
	T: FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let raw = if text.is_empty() { empty } else { text };
	raw.parse().map_err(|err| BindError::ConversionFailed {
		text: text.to_owned(),
		type_name: std::any::type_name::<T>(),
		source: Box::new(err),
	})
}
