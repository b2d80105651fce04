#![allow(missing_docs)]

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use defbind::bind::{Bind, BindError, FieldMeta, Kind, Record, SlotMut, Tag, apply_defaults};

#[derive(Debug, Default, PartialEq)]
struct Limits {
	cpu_millis: u64,
	mem_mb: u64,
}

impl Record for Limits {
	fn fields(&self) -> &'static [FieldMeta] {
		const FIELDS: &[FieldMeta] = &[
			FieldMeta::new("cpu_millis", &[Tag::new("default", "500")]),
			FieldMeta::new("mem_mb", &[Tag::new("default", "256")]),
		];
		FIELDS
	}

	fn field_slot(&mut self, index: usize) -> SlotMut<'_> {
		match index {
			0 => self.cpu_millis.slot_mut(),
			1 => self.mem_mb.slot_mut(),
			_ => panic!("no field at index {index}"),
		}
	}
}

impl Bind for Limits {
	const CORE: Kind = Kind::Record;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Record(self)
	}
}

#[derive(Debug, Default, PartialEq)]
struct RetryPolicy {
	attempts: u32,
	backoff: u64,
}

impl Record for RetryPolicy {
	fn fields(&self) -> &'static [FieldMeta] {
		const FIELDS: &[FieldMeta] = &[
			FieldMeta::new("attempts", &[Tag::new("default", "3")]),
			FieldMeta::new("backoff", &[Tag::new("default", "2000")]),
		];
		FIELDS
	}

	fn field_slot(&mut self, index: usize) -> SlotMut<'_> {
		match index {
			0 => self.attempts.slot_mut(),
			1 => self.backoff.slot_mut(),
			_ => panic!("no field at index {index}"),
		}
	}
}

impl Bind for RetryPolicy {
	const CORE: Kind = Kind::Record;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Record(self)
	}
}

#[derive(Debug, Default, PartialEq)]
struct Audit {
	enabled: bool,
}

impl Record for Audit {
	fn fields(&self) -> &'static [FieldMeta] {
		const FIELDS: &[FieldMeta] = &[FieldMeta::new("enabled", &[Tag::new("default", "true")])];
		FIELDS
	}

	fn field_slot(&mut self, index: usize) -> SlotMut<'_> {
		match index {
			0 => self.enabled.slot_mut(),
			_ => panic!("no field at index {index}"),
		}
	}
}

impl Bind for Audit {
	const CORE: Kind = Kind::Record;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Record(self)
	}
}

#[derive(Debug, Default)]
struct JobSpec {
	queue: String,
	priority: u8,
	deadline: DateTime<Utc>,
	grace: Duration,
	labels: HashMap<String, String>,
	limits: Limits,
	retry: Option<RetryPolicy>,
	audit: Option<Audit>,
}

impl Record for JobSpec {
	fn fields(&self) -> &'static [FieldMeta] {
		const FIELDS: &[FieldMeta] = &[
			FieldMeta::new("queue", &[Tag::new("default", "default")]),
			FieldMeta::new("priority", &[Tag::new("default", "5")]),
			FieldMeta::new("deadline", &[Tag::new("default", "1700000000"), Tag::new("time_format", "unix")]),
			FieldMeta::new("grace", &[Tag::new("default", "1h30m")]),
			FieldMeta::new("labels", &[Tag::new("default", r#"{"tier":"free"}"#)]),
			FieldMeta::embedded("limits", &[]),
			FieldMeta::new("retry", &[]),
			FieldMeta::new("audit", &[Tag::new("default", "-")]),
		];
		FIELDS
	}

	fn field_slot(&mut self, index: usize) -> SlotMut<'_> {
		match index {
			0 => self.queue.slot_mut(),
			1 => self.priority.slot_mut(),
			2 => self.deadline.slot_mut(),
			3 => self.grace.slot_mut(),
			4 => self.labels.slot_mut(),
			5 => self.limits.slot_mut(),
			6 => self.retry.slot_mut(),
			7 => self.audit.slot_mut(),
			_ => panic!("no field at index {index}"),
		}
	}
}

impl Bind for JobSpec {
	const CORE: Kind = Kind::Record;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Record(self)
	}
}

#[test]
fn a_fresh_job_spec_binds_every_declared_default() {
	let mut job = JobSpec::default();
	apply_defaults(&mut job).expect("defaults apply");

	assert_eq!(job.queue, "default");
	assert_eq!(job.priority, 5);
	let expected = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).single().expect("valid instant");
	assert_eq!(job.deadline, expected);
	assert_eq!(job.grace, Duration::from_secs(90 * 60));
	assert_eq!(job.labels.get("tier").map(String::as_str), Some("free"));
	assert_eq!(
		job.limits,
		Limits {
			cpu_millis: 500,
			mem_mb: 256,
		}
	);
	assert_eq!(
		job.retry,
		Some(RetryPolicy {
			attempts: 3,
			backoff: 2000,
		})
	);
	assert_eq!(job.audit, None, "sentinel subtree stays untouched");
}

#[test]
fn rebinding_a_job_spec_is_stable() {
	let mut job = JobSpec::default();
	apply_defaults(&mut job).expect("first pass applies");
	let deadline = job.deadline;
	apply_defaults(&mut job).expect("second pass applies");
	assert_eq!(job.deadline, deadline);
	assert_eq!(job.audit, None);
}

#[derive(Debug, Default)]
struct Misdeclared {
	axes: [i64; 2],
}

impl Record for Misdeclared {
	fn fields(&self) -> &'static [FieldMeta] {
		const FIELDS: &[FieldMeta] = &[FieldMeta::new("axes", &[Tag::new("default", "7")])];
		FIELDS
	}

	fn field_slot(&mut self, index: usize) -> SlotMut<'_> {
		match index {
			0 => self.axes.slot_mut(),
			_ => panic!("no field at index {index}"),
		}
	}
}

impl Bind for Misdeclared {
	const CORE: Kind = Kind::Record;

	fn slot_mut(&mut self) -> SlotMut<'_> {
		SlotMut::Record(self)
	}
}

#[test]
fn a_two_slot_array_default_is_an_arity_mismatch() {
	let mut bad = Misdeclared::default();
	let err = apply_defaults(&mut bad).expect_err("one default cannot fill two slots");
	assert_eq!(err.to_string(), r#""7" is not a valid value for [i64; 2]"#);
	assert!(matches!(err, BindError::ArityMismatch { .. }));
	assert_eq!(bad.axes, [0, 0]);
}
