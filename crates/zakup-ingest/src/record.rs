//! The raw spreadsheet row, exactly as exported.
//!
//! The source keeps its original Russian column headers; every field is
//! read as text and coerced afterwards so a coercion failure can name the
//! offending column and value.

use serde::Deserialize;

/// One denormalized row of the source CSV: a session repeated once per
/// participant-list / line-item combination.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
  #[serde(rename = "Id КС")]
  pub ks_id: String,

  #[serde(rename = "Ссылка на КС")]
  pub ks_url: String,

  #[serde(rename = "ИНН заказчика")]
  pub customer_inn: String,

  #[serde(rename = "Наименование заказчика")]
  pub customer_name: String,

  #[serde(rename = "Регион заказчика", default)]
  pub customer_region: String,

  #[serde(rename = "ИНН победителя КС")]
  pub winner_inn: String,

  #[serde(rename = "Наименование победителя КС")]
  pub winner_name: String,

  #[serde(rename = "Регион победителя КС", default)]
  pub winner_region: String,

  #[serde(rename = "Закон-основание")]
  pub legal_basis: String,

  #[serde(rename = "Начало КС")]
  pub start_time: String,

  #[serde(rename = "Окончание КС")]
  pub end_time: String,

  #[serde(rename = "Начальная цена КС")]
  pub start_price: String,

  #[serde(rename = "Конечная цена КС (победителя в КС)")]
  pub end_price: String,

  #[serde(rename = "Код КПГЗ")]
  pub kpgz_code: String,

  #[serde(rename = "Наименование КПГЗ")]
  pub kpgz_name: String,

  #[serde(rename = "Начало действия оферты")]
  pub offer_start_date: String,

  #[serde(rename = "Окончание действия оферты")]
  pub offer_end_date: String,

  #[serde(rename = "Участники КС - поставщики", default)]
  pub participants: String,

  #[serde(rename = "Ссылка на СТЕ", default)]
  pub sku_link: String,

  #[serde(rename = "Наименование СТЕ")]
  pub sku_name: String,

  #[serde(rename = "Количество СТЕ")]
  pub sku_count: String,

  #[serde(rename = "Стоимость за единицу СТЕ")]
  pub sku_start_price: String,

  #[serde(rename = "Цена оферты за единицу")]
  pub sku_offer_price: String,
}
