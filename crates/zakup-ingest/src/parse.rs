//! Best-effort coercions from the spreadsheet's locale-formatted text.
//!
//! Prices arrive as Russian locale numbers ("1 234,56", sometimes with
//! NBSP or tab group separators); timestamps as "%Y-%m-%d %H:%M:%S" with
//! optional fractional tails. Coercion failures are hard errors — ingestion
//! halts on the first malformed row. The one deliberate exception is the
//! participant list, where short entries are skipped silently.

use chrono::{NaiveDate, NaiveDateTime};
use zakup_core::model::Firm;

use crate::error::{Error, Result};

/// Prefix carried by the identifier sub-field of a participant entry.
const INN_PREFIX: &str = "ИНН:";

/// Separator between participant entries.
const ENTRY_SEP: &str = "; ";

/// Separator between the sub-fields of one participant entry.
const FIELD_SEP: &str = "  ";

// ─── Numbers ─────────────────────────────────────────────────────────────────

/// Coerce a locale-formatted decimal: group separators (space, NBSP, tab)
/// stripped, comma decimal separator converted to a dot.
pub fn parse_decimal(column: &'static str, raw: &str) -> Result<f64> {
  let cleaned: String = raw
    .trim()
    .chars()
    .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\t'))
    .map(|c| if c == ',' { '.' } else { c })
    .collect();

  cleaned.parse().map_err(|_| Error::InvalidDecimal {
    column,
    value: raw.to_owned(),
  })
}

/// Coerce an integer count; tolerates the same group separators as
/// [`parse_decimal`].
pub fn parse_integer(column: &'static str, raw: &str) -> Result<i64> {
  let cleaned: String = raw
    .trim()
    .chars()
    .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\t'))
    .collect();

  cleaned.parse().map_err(|_| Error::InvalidInteger {
    column,
    value: raw.to_owned(),
  })
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Parse a session timestamp. Fractional seconds and a `T` separator are
/// tolerated; everything past the seconds field is ignored.
pub fn parse_datetime(column: &'static str, raw: &str) -> Result<NaiveDateTime> {
  let s = raw.trim();
  let head: String = s.chars().take(19).map(|c| if c == 'T' { ' ' } else { c }).collect();

  NaiveDateTime::parse_from_str(&head, "%Y-%m-%d %H:%M:%S").map_err(|_| {
    Error::InvalidDateTime {
      column,
      value: raw.to_owned(),
    }
  })
}

/// Parse an offer-validity date: a bare date, or the date part of a full
/// timestamp (the spreadsheet exporter emits both).
pub fn parse_date(column: &'static str, raw: &str) -> Result<NaiveDate> {
  let s = raw.trim();
  if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
    return Ok(d);
  }
  parse_datetime(column, s)
    .map(|dt| dt.date())
    .map_err(|_| Error::InvalidDate {
      column,
      value: raw.to_owned(),
    })
}

// ─── Participants ────────────────────────────────────────────────────────────

/// Split the denormalized participant-list field into firms.
///
/// Entries are separated by `"; "`; within an entry, identifier, name and
/// region are separated by two consecutive spaces, and the identifier
/// carries a literal `"ИНН:"` prefix. Entries with fewer than three
/// sub-fields are skipped without a diagnostic — the source routinely
/// contains truncated tails.
pub fn parse_participants(raw: &str) -> Vec<Firm> {
  let mut firms = Vec::new();

  for entry in raw.split(ENTRY_SEP) {
    let parts: Vec<&str> = entry.split(FIELD_SEP).collect();
    if parts.len() < 3 {
      continue;
    }

    let inn = parts[0].trim().replace(INN_PREFIX, "");
    let name = parts[1].trim().to_owned();
    let region = parts[2].trim();

    firms.push(Firm {
      inn,
      name,
      region: if region.is_empty() {
        None
      } else {
        Some(region.to_owned())
      },
    });
  }

  firms
}

/// Empty or whitespace-only text becomes `None` (used for region columns).
pub fn optional(raw: &str) -> Option<String> {
  let s = raw.trim();
  if s.is_empty() { None } else { Some(s.to_owned()) }
}

#[cfg(test)]
mod tests {
  use super::*;

  // ── Decimals ──────────────────────────────────────────────────────────

  #[test]
  fn decimal_space_grouped_comma_separator() {
    assert_eq!(parse_decimal("p", "1 234,56").unwrap(), 1234.56);
  }

  #[test]
  fn decimal_tab_grouped() {
    assert_eq!(parse_decimal("p", "1\t234,56").unwrap(), 1234.56);
  }

  #[test]
  fn decimal_nbsp_grouped() {
    assert_eq!(parse_decimal("p", "12\u{a0}345,00").unwrap(), 12345.0);
  }

  #[test]
  fn decimal_plain_dot() {
    assert_eq!(parse_decimal("p", "999.5").unwrap(), 999.5);
  }

  #[test]
  fn decimal_garbage_is_error() {
    let err = parse_decimal("Начальная цена КС", "n/a").unwrap_err();
    assert!(matches!(err, Error::InvalidDecimal { column, .. } if column == "Начальная цена КС"));
  }

  #[test]
  fn integer_space_grouped() {
    assert_eq!(parse_integer("q", "1 000").unwrap(), 1000);
  }

  // ── Dates ─────────────────────────────────────────────────────────────

  #[test]
  fn datetime_plain() {
    let dt = parse_datetime("t", "2024-03-01 12:30:00").unwrap();
    assert_eq!(dt.to_string(), "2024-03-01 12:30:00");
  }

  #[test]
  fn datetime_fractional_tail_ignored() {
    let dt = parse_datetime("t", "2024-03-01 12:30:00.123456").unwrap();
    assert_eq!(dt.to_string(), "2024-03-01 12:30:00");
  }

  #[test]
  fn datetime_t_separator() {
    assert!(parse_datetime("t", "2024-03-01T12:30:00").is_ok());
  }

  #[test]
  fn date_bare_and_timestamped() {
    let d = parse_date("d", "2024-03-01").unwrap();
    assert_eq!(d, parse_date("d", "2024-03-01 00:00:00").unwrap());
  }

  #[test]
  fn date_garbage_is_error() {
    assert!(parse_date("d", "NaT").is_err());
  }

  // ── Participants ──────────────────────────────────────────────────────

  #[test]
  fn participants_two_entries_second_without_region() {
    let firms =
      parse_participants("ИНН:1234567890  Acme LLC  Moscow; ИНН:999  Beta  ");
    assert_eq!(firms.len(), 2);

    assert_eq!(firms[0].inn, "1234567890");
    assert_eq!(firms[0].name, "Acme LLC");
    assert_eq!(firms[0].region.as_deref(), Some("Moscow"));

    assert_eq!(firms[1].inn, "999");
    assert_eq!(firms[1].name, "Beta");
    assert_eq!(firms[1].region, None);
  }

  #[test]
  fn participants_short_entry_skipped() {
    let firms = parse_participants("ИНН:111  OnlyName; ИНН:222  Full  Omsk");
    assert_eq!(firms.len(), 1);
    assert_eq!(firms[0].inn, "222");
  }

  #[test]
  fn participants_empty_field() {
    assert!(parse_participants("").is_empty());
    assert!(parse_participants("nan").is_empty());
  }
}
