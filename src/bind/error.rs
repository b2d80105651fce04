use thiserror::Error;

use crate::bind::meta::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced while resolving and applying declared defaults.
#[derive(Debug, Error)]
pub enum BindError {
	/// Bind target was not a record after unwrapping optional indirection.
	#[error("bind target must be a record, got {kind}")]
	InvalidTarget {
		/// Core slot classification of the rejected target type.
		kind: Kind,
	},
	/// Slot has no default converter in its position.
	#[error("no default converter for {type_name}")]
	TypeUnsupported {
		/// Description of the unconvertible type.
		type_name: &'static str,
	},
	/// Default text failed to parse into the field's declared type.
	#[error("cannot convert {text:?} into {type_name}")]
	ConversionFailed {
		/// Original default text.
		text: String,
		/// Target type description.
		type_name: &'static str,
		/// Underlying parse failure.
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	/// Fixed-length array arity does not match the declared default count.
	#[error("{text:?} is not a valid value for {type_name}")]
	ArityMismatch {
		/// Original default text.
		text: String,
		/// Array type description.
		type_name: &'static str,
	},
}
