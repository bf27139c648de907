//! Spreadsheet ingestion for the zakup tender store.
//!
//! Reads the procurement spreadsheet (exported to CSV with its original
//! Russian headers) row by row and normalizes each row into an
//! [`IngestRecord`]: customer and winner firms, the session, the parsed
//! participant list, the classification code and one line item. The store
//! deduplicates on insert; this crate only parses and coerces.
//!
//! Coercion failures (price, date, quantity) abort the pass with an error
//! naming the column — malformed participant entries are the one case that
//! is skipped silently.

mod record;

pub mod error;
pub mod parse;

pub use error::{Error, Result};
pub use record::RawRecord;

use std::{fs::File, io::Read, path::Path};

use zakup_core::model::{Classification, Firm, IngestRecord, NewLineItem, Session};

use parse::{
  optional, parse_date, parse_datetime, parse_decimal, parse_integer,
  parse_participants,
};

/// Read and normalize every row of a CSV export at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<IngestRecord>> {
  read_records(File::open(path)?)
}

/// Read and normalize every row from `reader`.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<IngestRecord>> {
  let mut csv_reader = csv::Reader::from_reader(reader);
  let mut records = Vec::new();

  for raw in csv_reader.deserialize::<RawRecord>() {
    records.push(normalize(raw?)?);
  }

  Ok(records)
}

/// Normalize one raw row. Fails on the first field that cannot be coerced.
pub fn normalize(raw: RawRecord) -> Result<IngestRecord> {
  let ks_id = parse_integer("Id КС", &raw.ks_id)?;

  let customer = Firm {
    inn:    raw.customer_inn.trim().to_owned(),
    name:   raw.customer_name.trim().to_owned(),
    region: optional(&raw.customer_region),
  };

  let winner = Firm {
    inn:    raw.winner_inn.trim().to_owned(),
    name:   raw.winner_name.trim().to_owned(),
    region: optional(&raw.winner_region),
  };

  let session = Session {
    ks_id,
    url: raw.ks_url.trim().to_owned(),
    customer_inn: customer.inn.clone(),
    winner_inn: winner.inn.clone(),
    legal_basis: raw.legal_basis.trim().to_owned(),
    start_time: parse_datetime("Начало КС", &raw.start_time)?,
    end_time: parse_datetime("Окончание КС", &raw.end_time)?,
    start_price: parse_decimal("Начальная цена КС", &raw.start_price)?,
    end_price: parse_decimal(
      "Конечная цена КС (победителя в КС)",
      &raw.end_price,
    )?,
    kpgz_code: raw.kpgz_code.trim().to_owned(),
    offer_start_date: parse_date(
      "Начало действия оферты",
      &raw.offer_start_date,
    )?,
    offer_end_date: parse_date(
      "Окончание действия оферты",
      &raw.offer_end_date,
    )?,
  };

  let participants = parse_participants(&raw.participants);

  let classification = Classification {
    code: session.kpgz_code.clone(),
    name: raw.kpgz_name.trim().to_owned(),
  };

  let line_item = NewLineItem {
    link: raw.sku_link.trim().to_owned(),
    name: raw.sku_name.trim().to_owned(),
    quantity: parse_integer("Количество СТЕ", &raw.sku_count)?,
    unit_start_price: parse_decimal(
      "Стоимость за единицу СТЕ",
      &raw.sku_start_price,
    )?,
    unit_offer_price: parse_decimal(
      "Цена оферты за единицу",
      &raw.sku_offer_price,
    )?,
  };

  Ok(IngestRecord {
    customer,
    winner,
    session,
    participants,
    classification,
    line_item,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = "Id КС,Ссылка на КС,ИНН заказчика,Наименование заказчика,Регион заказчика,ИНН победителя КС,Наименование победителя КС,Регион победителя КС,Закон-основание,Начало КС,Окончание КС,Начальная цена КС,Конечная цена КС (победителя в КС),Код КПГЗ,Наименование КПГЗ,Начало действия оферты,Окончание действия оферты,Участники КС - поставщики,Ссылка на СТЕ,Наименование СТЕ,Количество СТЕ,Стоимость за единицу СТЕ,Цена оферты за единицу";

  fn csv_of(rows: &[&str]) -> String {
    let mut s = String::from(HEADER);
    for row in rows {
      s.push('\n');
      s.push_str(row);
    }
    s
  }

  #[test]
  fn normalizes_a_full_row() {
    let csv = csv_of(&[concat!(
      "9000001,https://zakupki.example/ks/9000001,7700001111,ГБУ Заказчик,Москва,",
      "7800002222,ООО Поставщик,Санкт-Петербург,44-ФЗ,",
      "2024-03-01 10:00:00,2024-03-02 10:00:00,\"1 000,00\",\"800,00\",",
      "01.02.03,Канцелярские товары,2024-03-02,2024-04-02,",
      "ИНН:7800002222  ООО Поставщик  Санкт-Петербург; ИНН:999  Beta  ,",
      "https://zakupki.example/sku/1,Бумага А4,10,\"100,00\",\"80,00\""
    )]);

    let records = read_records(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);

    let r = &records[0];
    assert_eq!(r.session.ks_id, 9000001);
    assert_eq!(r.session.start_price, 1000.0);
    assert_eq!(r.session.end_price, 800.0);
    assert_eq!(r.session.concession(), 200.0);
    assert_eq!(r.customer.inn, "7700001111");
    assert_eq!(r.winner.region.as_deref(), Some("Санкт-Петербург"));

    assert_eq!(r.participants.len(), 2);
    assert_eq!(r.participants[1].inn, "999");
    assert_eq!(r.participants[1].region, None);

    assert_eq!(r.classification.code, "01.02.03");
    assert_eq!(r.line_item.quantity, 10);
    assert_eq!(r.line_item.unit_offer_price, 80.0);
  }

  #[test]
  fn malformed_price_halts_the_pass() {
    let csv = csv_of(&[concat!(
      "9000001,u,1,c,,2,w,,44-ФЗ,",
      "2024-03-01 10:00:00,2024-03-02 10:00:00,не число,\"800,00\",",
      "01,k,2024-03-02,2024-04-02,,l,s,10,\"100,00\",\"80,00\""
    )]);

    let err = read_records(csv.as_bytes()).unwrap_err();
    assert!(
      matches!(err, Error::InvalidDecimal { column, .. } if column == "Начальная цена КС")
    );
  }

  #[test]
  fn malformed_date_halts_the_pass() {
    let csv = csv_of(&[concat!(
      "9000001,u,1,c,,2,w,,44-ФЗ,",
      "2024-03-01 10:00:00,2024-03-02 10:00:00,\"1,00\",\"1,00\",",
      "01,k,NaT,2024-04-02,,l,s,10,\"1,00\",\"1,00\""
    )]);

    assert!(read_records(csv.as_bytes()).is_err());
  }

  #[test]
  fn empty_participant_field_yields_no_participants() {
    let csv = csv_of(&[concat!(
      "9000001,u,1,c,,2,w,,44-ФЗ,",
      "2024-03-01 10:00:00,2024-03-02 10:00:00,\"1,00\",\"1,00\",",
      "01,k,2024-03-02,2024-04-02,,l,s,10,\"1,00\",\"1,00\""
    )]);

    let records = read_records(csv.as_bytes()).unwrap();
    assert!(records[0].participants.is_empty());
  }
}
