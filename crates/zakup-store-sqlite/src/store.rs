//! [`SqliteStore`] — the SQLite implementation of [`TenderStore`].

use std::path::Path;

use chrono::{Duration, NaiveDateTime};
use rusqlite::OptionalExtension as _;

use zakup_core::{
  analytics::{
    CompetitorReport, CompetitorRow, CustomerFacet, Facets, KpiReport,
    SessionFilter, WinTrend, WinTrendPoint, WinTrendSummary, WinnerRow,
    YearRow, YearlySummary, YearlyTrend, percentage, round2,
  },
  model::{
    Classification, Firm, IngestRecord, IngestStats, LineItem,
    NewSubscription, SessionDetail, Subscription,
  },
  store::TenderStore,
};

use crate::{
  Error, Result,
  encode::{RawSessionDetail, decode_date, decode_dt, encode_date, encode_dt},
  schema::SCHEMA,
};

/// How far back the win-trend window reaches: two years, counted as days
/// the way the product defines it.
const WIN_TREND_WINDOW_DAYS: i64 = 730;

/// Result cap on the competitor overlap query.
const COMPETITOR_LIMIT: u32 = 100;

/// Page size of the facet endpoint's session preview.
const FACET_SESSION_LIMIT: u32 = 100;

const SESSION_DETAIL_COLUMNS: &str = "
  s.ks_id, s.url, s.customer_inn, s.winner_inn, s.legal_basis,
  s.start_time, s.end_time, s.start_price, s.end_price, s.kpgz_code,
  s.offer_start_date, s.offer_end_date,
  f.name   AS customer_name,
  f.region AS customer_region,
  k.name   AS kpgz_name";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A tender analytics store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row mapping helpers ─────────────────────────────────────────────────────

fn read_session_detail(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSessionDetail> {
  Ok(RawSessionDetail {
    ks_id:            row.get(0)?,
    url:              row.get(1)?,
    customer_inn:     row.get(2)?,
    winner_inn:       row.get(3)?,
    legal_basis:      row.get(4)?,
    start_time:       row.get(5)?,
    end_time:         row.get(6)?,
    start_price:      row.get(7)?,
    end_price:        row.get(8)?,
    kpgz_code:        row.get(9)?,
    offer_start_date: row.get(10)?,
    offer_end_date:   row.get(11)?,
    customer_name:    row.get(12)?,
    customer_region:  row.get(13)?,
    kpgz_name:        row.get(14)?,
  })
}

/// Insert a firm, ignoring only a duplicate `inn`. Returns `true` when a
/// row was actually written.
fn insert_firm(conn: &rusqlite::Connection, firm: &Firm) -> rusqlite::Result<bool> {
  let changed = conn.execute(
    "INSERT INTO firms (inn, name, region) VALUES (?1, ?2, ?3)
     ON CONFLICT (inn) DO NOTHING",
    rusqlite::params![firm.inn, firm.name, firm.region],
  )?;
  Ok(changed > 0)
}

fn insert_classification(
  conn: &rusqlite::Connection,
  c: &Classification,
) -> rusqlite::Result<bool> {
  let changed = conn.execute(
    "INSERT INTO classification_codes (code, name) VALUES (?1, ?2)
     ON CONFLICT (code) DO NOTHING",
    rusqlite::params![c.code, c.name],
  )?;
  Ok(changed > 0)
}

// ─── TenderStore impl ────────────────────────────────────────────────────────

impl TenderStore for SqliteStore {
  type Error = Error;

  // ── Ingestion ─────────────────────────────────────────────────────────

  async fn ingest_batch(&self, records: Vec<IngestRecord>) -> Result<IngestStats> {
    let stats = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut stats = IngestStats::default();

        for record in &records {
          // Firms before the session rows that reference them.
          if insert_firm(&tx, &record.customer)? {
            stats.firms += 1;
          }
          if insert_firm(&tx, &record.winner)? {
            stats.firms += 1;
          }

          if insert_classification(&tx, &record.classification)? {
            stats.classifications += 1;
          }

          let s = &record.session;
          let changed = tx.execute(
            "INSERT INTO sessions (
               ks_id, url, customer_inn, winner_inn, legal_basis,
               start_time, end_time, start_price, end_price, kpgz_code,
               offer_start_date, offer_end_date
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             ON CONFLICT (ks_id) DO NOTHING",
            rusqlite::params![
              s.ks_id,
              s.url,
              s.customer_inn,
              s.winner_inn,
              s.legal_basis,
              encode_dt(s.start_time),
              encode_dt(s.end_time),
              s.start_price,
              s.end_price,
              s.kpgz_code,
              encode_date(s.offer_start_date),
              encode_date(s.offer_end_date),
            ],
          )?;
          stats.sessions += changed;

          for participant in &record.participants {
            if insert_firm(&tx, participant)? {
              stats.firms += 1;
            }
            let changed = tx.execute(
              "INSERT INTO participants (inn, ks_id) VALUES (?1, ?2)
               ON CONFLICT (inn, ks_id) DO NOTHING",
              rusqlite::params![participant.inn, s.ks_id],
            )?;
            stats.participations += changed;
          }

          let item = &record.line_item;
          tx.execute(
            "INSERT INTO line_items (
               ks_id, link, name, quantity, unit_start_price, unit_offer_price
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
              s.ks_id,
              item.link,
              item.name,
              item.quantity,
              item.unit_start_price,
              item.unit_offer_price,
            ],
          )?;
          stats.line_items += 1;
        }

        // One commit for the whole batch.
        tx.commit()?;
        Ok(stats)
      })
      .await?;

    Ok(stats)
  }

  // ── Entity reads ──────────────────────────────────────────────────────

  async fn list_firms(&self) -> Result<Vec<Firm>> {
    let firms = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT inn, name, region FROM firms ORDER BY inn")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Firm {
              inn:    row.get(0)?,
              name:   row.get(1)?,
              region: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(firms)
  }

  async fn get_firm(&self, inn: &str) -> Result<Option<Firm>> {
    let inn = inn.to_owned();
    let firm = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT inn, name, region FROM firms WHERE inn = ?1",
              rusqlite::params![inn],
              |row| {
                Ok(Firm {
                  inn:    row.get(0)?,
                  name:   row.get(1)?,
                  region: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;
    Ok(firm)
  }

  async fn list_sessions(&self) -> Result<Vec<SessionDetail>> {
    let raws = self
      .conn
      .call(|conn| {
        let sql = format!(
          "SELECT {SESSION_DETAIL_COLUMNS}
           FROM sessions s
           LEFT JOIN firms f                ON s.customer_inn = f.inn
           LEFT JOIN classification_codes k ON s.kpgz_code    = k.code
           ORDER BY s.ks_id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], read_session_detail)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSessionDetail::into_detail).collect()
  }

  async fn line_items(&self, ks_id: i64) -> Result<Vec<LineItem>> {
    let items = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT item_id, ks_id, link, name, quantity,
                  unit_start_price, unit_offer_price
           FROM line_items WHERE ks_id = ?1 ORDER BY item_id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![ks_id], |row| {
            Ok(LineItem {
              item_id:          row.get(0)?,
              ks_id:            row.get(1)?,
              link:             row.get(2)?,
              name:             row.get(3)?,
              quantity:         row.get(4)?,
              unit_start_price: row.get(5)?,
              unit_offer_price: row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(items)
  }

  // ── Analytics ─────────────────────────────────────────────────────────

  async fn top_winners(&self, limit: usize) -> Result<Vec<WinnerRow>> {
    let limit = limit as i64;
    let winners = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT s.winner_inn,
                  COALESCE(f.name, s.winner_inn) AS name,
                  f.region,
                  COUNT(*) AS wins
           FROM sessions s
           LEFT JOIN firms f ON s.winner_inn = f.inn
           GROUP BY s.winner_inn
           ORDER BY wins DESC
           LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit], |row| {
            Ok(WinnerRow {
              inn:    row.get(0)?,
              name:   row.get(1)?,
              region: row.get(2)?,
              wins:   row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(winners)
  }

  async fn competitors(&self, inn: &str) -> Result<CompetitorReport> {
    struct RawCompetitor {
      inn:             String,
      name:            String,
      region:          Option<String>,
      kpgz_info:       Option<String>,
      total_contracts: i64,
      competitor_wins: i64,
      supplier_wins:   i64,
    }

    let inn = inn.to_owned();
    let raws = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT p2.inn,
                  f2.name,
                  f2.region,
                  GROUP_CONCAT(DISTINCT k.code || ' ' || k.name) AS kpgz_info,
                  COUNT(DISTINCT s.ks_id) AS total_contracts,
                  SUM(CASE WHEN p2.inn = s.winner_inn THEN 1 ELSE 0 END)
                    AS competitor_wins,
                  SUM(CASE WHEN p1.inn = s.winner_inn THEN 1 ELSE 0 END)
                    AS supplier_wins
           FROM participants p1
           JOIN participants p2 ON p1.ks_id = p2.ks_id AND p1.inn != p2.inn
           JOIN sessions s      ON p1.ks_id = s.ks_id
           JOIN firms f2        ON p2.inn   = f2.inn
           LEFT JOIN classification_codes k ON s.kpgz_code = k.code
           WHERE p1.inn = ?1
           GROUP BY p2.inn, f2.name, f2.region
           ORDER BY competitor_wins DESC, total_contracts DESC
           LIMIT ?2",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![inn, COMPETITOR_LIMIT], |row| {
            Ok(RawCompetitor {
              inn:             row.get(0)?,
              name:            row.get(1)?,
              region:          row.get(2)?,
              kpgz_info:       row.get(3)?,
              total_contracts: row.get(4)?,
              competitor_wins: row.get(5)?,
              supplier_wins:   row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    // Percentage split per competitor, plus the contract-weighted KPI.
    // Weighting each raw win ratio by its contract count reduces to a
    // ratio of sums; rounding happens once, on the final KPI.
    let mut supplier_wins_all: i64 = 0;
    let mut total_contracts_all: i64 = 0;

    let competitors: Vec<CompetitorRow> = raws
      .into_iter()
      .map(|raw| {
        let other_wins =
          raw.total_contracts - (raw.competitor_wins + raw.supplier_wins);
        supplier_wins_all += raw.supplier_wins;
        total_contracts_all += raw.total_contracts;

        CompetitorRow {
          inn: raw.inn,
          name: raw.name,
          region: raw.region,
          kpgz_info: raw.kpgz_info,
          total_contracts: raw.total_contracts,
          competitor_wins: raw.competitor_wins,
          competitor_win_percentage: percentage(
            raw.competitor_wins,
            raw.total_contracts,
          ),
          supplier_wins: raw.supplier_wins,
          supplier_win_percentage: percentage(
            raw.supplier_wins,
            raw.total_contracts,
          ),
          other_wins,
          other_win_percentage: percentage(other_wins, raw.total_contracts),
        }
      })
      .collect();

    let kpi = if total_contracts_all == 0 {
      0.0
    } else {
      round2(supplier_wins_all as f64 / total_contracts_all as f64 * 100.0)
    };

    Ok(CompetitorReport { kpi, competitors })
  }

  async fn win_trend(&self, inn: &str, now: NaiveDateTime) -> Result<Option<WinTrend>> {
    struct RawPoint {
      day:         String,
      start_price: f64,
      end_price:   f64,
      concession:  f64,
    }

    let inn = inn.to_owned();
    let cutoff = encode_dt(now - Duration::days(WIN_TREND_WINDOW_DAYS));

    let raws = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT date(end_time) AS day,
                  SUM(start_price),
                  SUM(end_price),
                  SUM(start_price - end_price)
           FROM sessions
           WHERE winner_inn = ?1 AND end_time >= ?2
           GROUP BY day
           ORDER BY day",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![inn, cutoff], |row| {
            Ok(RawPoint {
              day:         row.get(0)?,
              start_price: row.get(1)?,
              end_price:   row.get(2)?,
              concession:  row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    if raws.is_empty() {
      return Ok(None);
    }

    let total_start: f64 = raws.iter().map(|p| p.start_price).sum();
    let total_concession: f64 = raws.iter().map(|p| p.concession).sum();

    let average_concession_percentage = if total_start == 0.0 {
      0.0
    } else {
      round2(total_concession / total_start * 100.0)
    };

    let points = raws
      .into_iter()
      .map(|p| {
        Ok(WinTrendPoint {
          date:        decode_date(&p.day)?,
          start_price: round2(p.start_price),
          end_price:   round2(p.end_price),
          concession:  round2(p.concession),
        })
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(Some(WinTrend {
      summary: WinTrendSummary {
        total_concession: round2(total_concession),
        average_concession_percentage,
      },
      points,
    }))
  }

  async fn contracts_by_years(&self, inn: &str) -> Result<YearlyTrend> {
    let inn = inn.to_owned();
    let years = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT CAST(strftime('%Y', s.start_time) AS INTEGER) AS year,
                  COUNT(DISTINCT p.ks_id) AS participated,
                  SUM(CASE WHEN s.winner_inn = ?1 THEN 1 ELSE 0 END) AS wins
           FROM sessions s
           JOIN participants p ON s.ks_id = p.ks_id
           WHERE p.inn = ?1
           GROUP BY year
           ORDER BY year",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![inn], |row| {
            Ok(YearRow {
              year:         row.get(0)?,
              participated: row.get(1)?,
              wins:         row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let total_participated = years.iter().map(|y| y.participated).sum();
    let total_wins = years.iter().map(|y| y.wins).sum();

    Ok(YearlyTrend {
      summary: YearlySummary {
        total_participated,
        total_wins,
        win_percentage: percentage(total_wins, total_participated),
      },
      years,
    })
  }

  async fn search_sessions(&self, filter: &SessionFilter) -> Result<KpiReport> {
    let kpgz_prefix = filter.kpgz_prefix.clone();
    let winner_region = filter.winner_region.clone();
    let start_date = filter.start_date.map(encode_date);
    let end_date = filter.end_date.map(encode_date);
    let winner_inn = filter.winner_inn.clone();
    let customer_inn = filter.customer_inn.clone();
    let min_price = filter.min_price;
    let max_price = filter.max_price;
    let participant_inn = filter.participant_inn.clone();

    let raws = self
      .conn
      .call(move |conn| {
        // Fixed parameterized statement: every absent filter collapses its
        // clause to true, never spliced into the SQL text.
        let sql = format!(
          "SELECT {SESSION_DETAIL_COLUMNS}
           FROM sessions s
           LEFT JOIN firms f                ON s.customer_inn = f.inn
           LEFT JOIN firms w                ON s.winner_inn   = w.inn
           LEFT JOIN classification_codes k ON s.kpgz_code    = k.code
           WHERE (:kpgz_prefix IS NULL OR s.kpgz_code LIKE :kpgz_prefix || '%')
             AND (:winner_region IS NULL OR w.region = :winner_region)
             AND (:start_date IS NULL OR date(s.end_time) >= :start_date)
             AND (:end_date IS NULL OR date(s.end_time) <= :end_date)
             AND (:winner_inn IS NULL OR s.winner_inn = :winner_inn)
             AND (:customer_inn IS NULL OR s.customer_inn = :customer_inn)
             AND (:min_price IS NULL OR s.end_price >= :min_price)
             AND (:max_price IS NULL OR s.end_price <= :max_price)
             AND (:participant_inn IS NULL OR EXISTS (
                    SELECT 1 FROM participants p
                    WHERE p.ks_id = s.ks_id AND p.inn = :participant_inn))
           ORDER BY s.ks_id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::named_params! {
              ":kpgz_prefix":     kpgz_prefix,
              ":winner_region":   winner_region,
              ":start_date":      start_date,
              ":end_date":        end_date,
              ":winner_inn":      winner_inn,
              ":customer_inn":    customer_inn,
              ":min_price":       min_price,
              ":max_price":       max_price,
              ":participant_inn": participant_inn,
            },
            read_session_detail,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let sessions = raws
      .into_iter()
      .map(RawSessionDetail::into_detail)
      .collect::<Result<Vec<_>>>()?;

    let total_start: f64 = sessions.iter().map(|d| d.session.start_price).sum();
    let total_diff: f64 = sessions.iter().map(|d| d.concession).sum();

    let average_concession_percentage = if total_start == 0.0 {
      0.0
    } else {
      round2(total_diff / total_start * 100.0)
    };

    Ok(KpiReport {
      average_concession_percentage,
      total_concession: round2(total_diff.abs()),
      sessions,
    })
  }

  async fn search_facets(&self) -> Result<Facets> {
    let (regions, kpgz, customers, raws) = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT DISTINCT f.region
           FROM sessions s
           JOIN firms f ON s.winner_inn = f.inn
           WHERE f.region IS NOT NULL
           ORDER BY f.region",
        )?;
        let regions = stmt
          .query_map([], |row| row.get::<_, String>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn
          .prepare("SELECT code, name FROM classification_codes ORDER BY code")?;
        let kpgz = stmt
          .query_map([], |row| {
            Ok(Classification {
              code: row.get(0)?,
              name: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
          "SELECT DISTINCT s.customer_inn,
                  COALESCE(f.name, s.customer_inn) AS name
           FROM sessions s
           LEFT JOIN firms f ON s.customer_inn = f.inn
           ORDER BY name",
        )?;
        let customers = stmt
          .query_map([], |row| {
            Ok(CustomerFacet {
              inn:  row.get(0)?,
              name: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let sql = format!(
          "SELECT {SESSION_DETAIL_COLUMNS}
           FROM sessions s
           LEFT JOIN firms f                ON s.customer_inn = f.inn
           LEFT JOIN classification_codes k ON s.kpgz_code    = k.code
           ORDER BY s.ks_id
           LIMIT ?1"
        );
        let mut stmt = conn.prepare(&sql)?;
        let raws = stmt
          .query_map(rusqlite::params![FACET_SESSION_LIMIT], read_session_detail)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((regions, kpgz, customers, raws))
      })
      .await?;

    let first100 = raws
      .into_iter()
      .map(RawSessionDetail::into_detail)
      .collect::<Result<Vec<_>>>()?;

    Ok(Facets {
      regions,
      kpgz,
      customers,
      first100,
    })
  }

  // ── Subscriptions ─────────────────────────────────────────────────────

  async fn upsert_subscription(&self, sub: NewSubscription) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO subscriptions
             (inn, subscriber_id, subscriber_name, period_days, last_sent_at)
           VALUES (?1, ?2, ?3, ?4, NULL)",
          rusqlite::params![
            sub.inn,
            sub.subscriber_id,
            sub.subscriber_name,
            sub.period_days,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
    struct RawSubscription {
      inn:             String,
      subscriber_id:   i64,
      subscriber_name: Option<String>,
      period_days:     i64,
      last_sent_at:    Option<String>,
    }

    let raws = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT inn, subscriber_id, subscriber_name, period_days, last_sent_at
           FROM subscriptions
           ORDER BY inn, subscriber_id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSubscription {
              inn:             row.get(0)?,
              subscriber_id:   row.get(1)?,
              subscriber_name: row.get(2)?,
              period_days:     row.get(3)?,
              last_sent_at:    row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(|raw| {
        Ok(Subscription {
          inn:             raw.inn,
          subscriber_id:   raw.subscriber_id,
          subscriber_name: raw.subscriber_name,
          period_days:     raw.period_days,
          last_sent_at:    raw.last_sent_at.as_deref().map(decode_dt).transpose()?,
        })
      })
      .collect()
  }

  async fn mark_report_sent(
    &self,
    inn: &str,
    subscriber_id: i64,
    at: NaiveDateTime,
  ) -> Result<()> {
    let inn = inn.to_owned();
    let at = encode_dt(at);
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE subscriptions SET last_sent_at = ?3
           WHERE inn = ?1 AND subscriber_id = ?2",
          rusqlite::params![inn, subscriber_id, at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
