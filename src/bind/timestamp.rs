use chrono::format::ParseResult;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::bind::error::{BindError, Result};
use crate::bind::meta::FieldMeta;

const TYPE_NAME: &str = "DateTime<Utc>";

/// Round-trippable RFC 3339 layout used when no `time_format` is declared.
const RFC3339_LAYOUT: &str = "%+";

/// Tag selecting an epoch kind (`unix`/`unixnano`) or a strftime layout.
const FORMAT_TAG: &str = "time_format";
/// Tag forcing UTC interpretation for layout-based parsing.
const UTC_TAG: &str = "time_utc";
/// Tag naming an IANA region used for layout-based parsing.
const LOCATION_TAG: &str = "time_location";

/// Parse timestamp default text using the field's time tags.
///
/// Epoch kinds are zone-independent; the resolved zone applies only to
/// layout-based parsing, and only when the layout itself carries no offset.
pub(crate) fn parse(text: &str, field: &FieldMeta) -> Result<DateTime<Utc>> {
	let format = field.tag(FORMAT_TAG).unwrap_or("");
	match format.to_ascii_lowercase().as_str() {
		"unix" => return epoch(text, 1),
		"unixnano" => return epoch(text, 1_000_000_000),
		_ => {}
	}

	if text.is_empty() {
		return Ok(DateTime::default());
	}

	// The zone is resolved before parsing, so an unknown region fails even
	// when the layout carries its own offset.
	let zone = resolve_zone(field)?;
	let layout = if format.is_empty() { RFC3339_LAYOUT } else { format };
	parse_layout(text, layout, &zone)
}

enum Zone {
	Local,
	Utc,
	Named(Tz),
}

fn resolve_zone(field: &FieldMeta) -> Result<Zone> {
	if let Some(name) = field.tag(LOCATION_TAG) {
		let zone = name.parse::<Tz>().map_err(|_| BindError::ConversionFailed {
			text: name.to_owned(),
			type_name: "time zone region",
			source: format!("unknown region {name:?}").into(),
		})?;
		return Ok(Zone::Named(zone));
	}
	if matches!(field.tag(UTC_TAG), Some("1" | "t" | "T" | "true" | "True" | "TRUE")) {
		return Ok(Zone::Utc);
	}
	Ok(Zone::Local)
}

fn epoch(text: &str, scale: i64) -> Result<DateTime<Utc>> {
	let raw: i64 = text.parse().map_err(|err| conversion(text, err))?;
	let nanos = raw.rem_euclid(scale) as u32;
	DateTime::from_timestamp(raw.div_euclid(scale), nanos).ok_or_else(|| BindError::ConversionFailed {
		text: text.to_owned(),
		type_name: TYPE_NAME,
		source: "epoch value out of range".into(),
	})
}

fn parse_layout(text: &str, layout: &str, zone: &Zone) -> Result<DateTime<Utc>> {
	if let Ok(stamp) = DateTime::parse_from_str(text, layout) {
		return Ok(stamp.with_timezone(&Utc));
	}

	let naive = parse_naive(text, layout).map_err(|err| conversion(text, err))?;
	attach_zone(naive, zone).ok_or_else(|| BindError::ConversionFailed {
		text: text.to_owned(),
		type_name: TYPE_NAME,
		source: "no valid instant for local time".into(),
	})
}

fn parse_naive(text: &str, layout: &str) -> ParseResult<NaiveDateTime> {
	NaiveDateTime::parse_from_str(text, layout).or_else(|err| {
		// Date-only layouts resolve to midnight.
		NaiveDate::parse_from_str(text, layout)
			.map(|date| date.and_time(NaiveTime::MIN))
			.map_err(|_| err)
	})
}

fn attach_zone(naive: NaiveDateTime, zone: &Zone) -> Option<DateTime<Utc>> {
	match zone {
		Zone::Utc => Some(Utc.from_utc_datetime(&naive)),
		Zone::Local => Local.from_local_datetime(&naive).earliest().map(|stamp| stamp.with_timezone(&Utc)),
		Zone::Named(tz) => tz.from_local_datetime(&naive).earliest().map(|stamp| stamp.with_timezone(&Utc)),
	}
}

fn conversion<E>(text: &str, err: E) -> BindError
where
	E: std::error::Error + Send + Sync + 'static,
{
	BindError::ConversionFailed {
		text: text.to_owned(),
		type_name: TYPE_NAME,
		source: Box::new(err),
	}
}
