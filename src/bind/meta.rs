use std::fmt;

/// Classification of bindable slot shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// Signed integer of any supported width.
	Int,
	/// Unsigned integer of any supported width.
	Uint,
	/// Floating point of any supported precision.
	Float,
	/// Boolean flag.
	Bool,
	/// Owned text.
	Text,
	/// Absolute calendar timestamp.
	Timestamp,
	/// Elapsed-time quantity.
	Duration,
	/// Growable element sequence.
	Sequence,
	/// Fixed-arity element array.
	Array,
	/// Optional indirection around another slot.
	Optional,
	/// Nested record with its own field table.
	Record,
	/// Composite decoded from a serialized document.
	Document,
}

impl Kind {
	/// Short lowercase name used in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::Uint => "uint",
			Self::Float => "float",
			Self::Bool => "bool",
			Self::Text => "text",
			Self::Timestamp => "timestamp",
			Self::Duration => "duration",
			Self::Sequence => "sequence",
			Self::Array => "array",
			Self::Optional => "optional",
			Self::Record => "record",
			Self::Document => "document",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// One tag entry attached to a field.
#[derive(Debug, Clone, Copy)]
pub struct Tag {
	/// Tag name, e.g. `default` or `form`.
	pub name: &'static str,
	/// Raw tag content.
	pub value: &'static str,
}

impl Tag {
	/// Build a tag entry.
	pub const fn new(name: &'static str, value: &'static str) -> Self {
		Self { name, value }
	}
}

/// Static descriptor for one record field.
///
/// Descriptor tables are built once per record type at compile time; the
/// walker only ever iterates these precomputed entries.
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
	/// Externally visible field name.
	pub name: &'static str,
	/// Whether the field is an embedded member flattened into its parent.
	pub embedded: bool,
	/// Tag entries in declaration order.
	pub tags: &'static [Tag],
}

impl FieldMeta {
	/// Marker descriptor used where no field context exists (record roots).
	pub const EMPTY: Self = Self {
		name: "",
		embedded: false,
		tags: &[],
	};

	/// Build a named field descriptor.
	pub const fn new(name: &'static str, tags: &'static [Tag]) -> Self {
		Self {
			name,
			embedded: false,
			tags,
		}
	}

	/// Build an embedded member descriptor.
	pub const fn embedded(name: &'static str, tags: &'static [Tag]) -> Self {
		Self {
			name,
			embedded: true,
			tags,
		}
	}

	/// Look up a tag value by tag name.
	pub fn tag(&self, name: &str) -> Option<&'static str> {
		self.tags.iter().find(|tag| tag.name == name).map(|tag| tag.value)
	}
}
