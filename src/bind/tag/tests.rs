use crate::bind::meta::{FieldMeta, Tag};
use crate::bind::tag::{DefaultSpec, DirectTag, SubKeyTag, TagResolver};

const DIRECT: DirectTag = DirectTag { tag: "default" };
const SUB: SubKeyTag = SubKeyTag { tag: "form", key: "default" };

#[test]
fn direct_tag_resolves_literal_text() {
	const TAGS: &[Tag] = &[Tag::new("default", "POST")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(DIRECT.resolve(&field), DefaultSpec::Value("POST"));
}

#[test]
fn direct_tag_missing_is_absent() {
	const TAGS: &[Tag] = &[Tag::new("form", "method")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(DIRECT.resolve(&field), DefaultSpec::Absent);
}

#[test]
fn direct_tag_sentinel_is_ignore() {
	const TAGS: &[Tag] = &[Tag::new("default", "-")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(DIRECT.resolve(&field), DefaultSpec::Ignore);
}

#[test]
fn sub_key_tag_finds_keyed_entry() {
	const TAGS: &[Tag] = &[Tag::new("form", "Method,default=POST")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(SUB.resolve(&field), DefaultSpec::Value("POST"));
}

#[test]
fn sub_key_tag_skips_unrelated_entries() {
	const TAGS: &[Tag] = &[Tag::new("form", "Method,omitempty,default=POST,min=1")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(SUB.resolve(&field), DefaultSpec::Value("POST"));
}

#[test]
fn sub_key_tag_without_key_is_absent() {
	const TAGS: &[Tag] = &[Tag::new("form", "Method,omitempty")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(SUB.resolve(&field), DefaultSpec::Absent);
}

#[test]
fn sub_key_tag_value_keeps_embedded_equals() {
	const TAGS: &[Tag] = &[Tag::new("form", "expr,default=a=b")];
	let field = FieldMeta::new("expr", TAGS);
	assert_eq!(SUB.resolve(&field), DefaultSpec::Value("a=b"));
}

#[test]
fn sub_key_tag_sentinel_is_ignore() {
	const TAGS: &[Tag] = &[Tag::new("form", "Method,default=-")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(SUB.resolve(&field), DefaultSpec::Ignore);
}

#[test]
fn sub_key_tag_empty_leading_segment_is_absent() {
	const TAGS: &[Tag] = &[Tag::new("form", ",default=POST")];
	let field = FieldMeta::new("method", TAGS);
	assert_eq!(SUB.resolve(&field), DefaultSpec::Absent);
}

#[test]
fn resolvers_treat_root_marker_as_absent() {
	assert_eq!(DIRECT.resolve(&FieldMeta::EMPTY), DefaultSpec::Absent);
	assert_eq!(SUB.resolve(&FieldMeta::EMPTY), DefaultSpec::Absent);
}
