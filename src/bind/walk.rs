use crate::bind::convert;
use crate::bind::error::{BindError, Result};
use crate::bind::meta::{FieldMeta, Kind};
use crate::bind::slot::{Bind, OptionalSlot, Record, SlotMut};
use crate::bind::tag::{DefaultSpec, DirectTag, SubKeyTag, TagResolver};

/// Apply `default` tag declarations to every eligible field of `target`.
///
/// ```text
/// method: String    default:"POST"
/// ```
pub fn apply_defaults<T: Bind>(target: &mut T) -> Result<()> {
	apply_with(target, &DirectTag { tag: "default" })
}

/// Apply `default=` sub-keys declared inside `form` tags.
///
/// ```text
/// method: String    form:"method,default=POST"
/// ```
pub fn apply_form_defaults<T: Bind>(target: &mut T) -> Result<()> {
	apply_with(
		target,
		&SubKeyTag {
			tag: "form",
			key: "default",
		},
	)
}

/// Apply defaults resolved by `resolver` to every eligible field of `target`.
///
/// The target must be a record, possibly behind optional indirection; any
/// other core shape fails with [`BindError::InvalidTarget`].
pub fn apply_with<T: Bind>(target: &mut T, resolver: &dyn TagResolver) -> Result<()> {
	if T::CORE != Kind::Record {
		return Err(BindError::InvalidTarget { kind: T::CORE });
	}
	visit(target.slot_mut(), &FieldMeta::EMPTY, resolver)?;
	Ok(())
}

/// Visit one slot, returning whether a default was applied in its subtree.
fn visit(slot: SlotMut<'_>, field: &FieldMeta, resolver: &dyn TagResolver) -> Result<bool> {
	let spec = resolver.resolve(field);
	if spec == DefaultSpec::Ignore {
		return Ok(false);
	}

	match slot {
		SlotMut::Optional(optional) => {
			// Speculative allocation: only a subtree that actually binds a
			// default may leave the option occupied.
			let fresh = !optional.is_present();
			match visit(optional.materialize(), field, resolver) {
				Ok(applied) => {
					if fresh && !applied {
						optional.clear();
					}
					Ok(applied)
				}
				Err(err) => {
					if fresh {
						optional.clear();
					}
					Err(err)
				}
			}
		}
		SlotMut::Record(record) => {
			// A direct default on a named sub-record wins over descending
			// into its fields. Embedded members are only ever descended.
			if !field.embedded {
				if let DefaultSpec::Value(text) = spec {
					record.assign_document(text)?;
					return Ok(true);
				}
			}
			visit_fields(record, resolver)
		}
		leaf => match spec {
			DefaultSpec::Value(text) => {
				convert::assign(leaf, field, text)?;
				Ok(true)
			}
			_ => Ok(false),
		},
	}
}

fn visit_fields(record: &mut dyn Record, resolver: &dyn TagResolver) -> Result<bool> {
	let mut applied = false;
	for (index, meta) in record.fields().iter().enumerate() {
		applied |= visit(record.field_slot(index), meta, resolver)?;
	}
	Ok(applied)
}
