//! Periodic report scheduler.
//!
//! Each subscription follows one firm and names a delivery period in days.
//! On every tick the scheduler loads all subscriptions, builds a summary
//! for the ones that are due, and pushes it through a [`ReportSink`]. A
//! failed delivery is logged and skipped — one broken subscriber never
//! aborts the run. The scheduler runs independently of request traffic and
//! makes no attempt to coordinate with it.

use std::future::Future;

use chrono::NaiveDateTime;
use zakup_core::{
  analytics::YearlyTrend,
  model::Subscription,
  store::TenderStore,
};

/// A rendered per-firm report, ready for delivery.
#[derive(Debug, Clone)]
pub struct FirmReport {
  pub inn:       String,
  pub firm_name: Option<String>,
  pub yearly:    YearlyTrend,
}

/// Delivery transport for scheduled reports. The real messaging channels
/// (chat bots etc.) live outside this repository; the in-tree sink logs.
pub trait ReportSink: Send + Sync {
  fn deliver<'a>(
    &'a self,
    sub: &'a Subscription,
    report: &'a FirmReport,
  ) -> impl Future<Output = anyhow::Result<()>> + Send + 'a;
}

/// Sink that writes the report to the log.
pub struct LogSink;

impl ReportSink for LogSink {
  async fn deliver(&self, sub: &Subscription, report: &FirmReport) -> anyhow::Result<()> {
    tracing::info!(
      inn = %report.inn,
      subscriber = sub.subscriber_id,
      wins = report.yearly.summary.total_wins,
      participated = report.yearly.summary.total_participated,
      win_percentage = report.yearly.summary.win_percentage,
      "report delivered",
    );
    Ok(())
  }
}

/// Whether a subscription is due at `now`. A never-delivered subscription
/// is due immediately.
pub fn due(sub: &Subscription, now: NaiveDateTime) -> bool {
  match sub.last_sent_at {
    None => true,
    Some(last) => (now - last).num_days() >= sub.period_days,
  }
}

/// One scheduler pass: deliver to every due subscriber, isolating
/// per-subscriber failures.
pub async fn run_once<S, K>(store: &S, sink: &K, now: NaiveDateTime) -> anyhow::Result<()>
where
  S: TenderStore,
  K: ReportSink,
{
  let subs = store.list_subscriptions().await?;

  for sub in subs {
    if !due(&sub, now) {
      continue;
    }

    let firm = match store.get_firm(&sub.inn).await {
      Ok(f) => f,
      Err(e) => {
        tracing::warn!(inn = %sub.inn, error = %e, "skipping subscriber: firm lookup failed");
        continue;
      }
    };

    let yearly = match store.contracts_by_years(&sub.inn).await {
      Ok(t) => t,
      Err(e) => {
        tracing::warn!(inn = %sub.inn, error = %e, "skipping subscriber: report query failed");
        continue;
      }
    };

    let report = FirmReport {
      inn: sub.inn.clone(),
      firm_name: firm.map(|f| f.name),
      yearly,
    };

    if let Err(e) = sink.deliver(&sub, &report).await {
      tracing::warn!(
        inn = %sub.inn,
        subscriber = sub.subscriber_id,
        error = %e,
        "report delivery failed",
      );
      continue;
    }

    if let Err(e) = store.mark_report_sent(&sub.inn, sub.subscriber_id, now).await {
      tracing::warn!(inn = %sub.inn, error = %e, "failed to record delivery time");
    }
  }

  Ok(())
}

/// Run the scheduler forever, one pass every `interval`.
pub async fn run<S, K>(store: &S, sink: &K, interval: std::time::Duration)
where
  S: TenderStore,
  K: ReportSink,
{
  let mut ticker = tokio::time::interval(interval);
  loop {
    ticker.tick().await;
    let now = chrono::Local::now().naive_local();
    if let Err(e) = run_once(store, sink, now).await {
      tracing::error!(error = %e, "report pass failed");
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use chrono::NaiveDateTime;
  use zakup_core::{
    model::NewSubscription,
    store::TenderStore,
  };
  use zakup_store_sqlite::SqliteStore;

  use super::*;

  fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
  }

  fn sub(period_days: i64, last_sent_at: Option<&str>) -> Subscription {
    Subscription {
      inn: "1111111111".into(),
      subscriber_id: 1,
      subscriber_name: None,
      period_days,
      last_sent_at: last_sent_at.map(dt),
    }
  }

  #[test]
  fn never_delivered_is_due() {
    assert!(due(&sub(30, None), dt("2024-06-01 09:00:00")));
  }

  #[test]
  fn due_after_period_elapses() {
    let s = sub(7, Some("2024-06-01 09:00:00"));
    assert!(!due(&s, dt("2024-06-05 09:00:00")));
    assert!(due(&s, dt("2024-06-08 09:00:00")));
  }

  /// Sink that records which INNs it delivered.
  struct RecordingSink(Mutex<Vec<String>>);

  impl ReportSink for RecordingSink {
    async fn deliver(&self, _sub: &Subscription, report: &FirmReport) -> anyhow::Result<()> {
      self.0.lock().unwrap().push(report.inn.clone());
      Ok(())
    }
  }

  #[tokio::test]
  async fn run_once_delivers_and_marks_due_subscriptions() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store
      .upsert_subscription(NewSubscription {
        inn: "1111111111".into(),
        subscriber_id: 1,
        subscriber_name: Some("alice".into()),
        period_days: 7,
      })
      .await
      .unwrap();

    let sink = RecordingSink(Mutex::new(Vec::new()));
    let now = dt("2024-06-01 09:00:00");
    run_once(&store, &sink, now).await.unwrap();

    assert_eq!(*sink.0.lock().unwrap(), vec!["1111111111".to_owned()]);
    let subs = store.list_subscriptions().await.unwrap();
    assert_eq!(subs[0].last_sent_at, Some(now));

    // A second pass inside the period delivers nothing.
    run_once(&store, &sink, dt("2024-06-03 09:00:00")).await.unwrap();
    assert_eq!(sink.0.lock().unwrap().len(), 1);
  }
}
