//! Background task that deletes expired rate-limit marks.
//!
//! An expired mark never blocks a view, so deleting it changes no
//! outcome. The sweep only keeps the marks table from growing without bound.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::{DomainResult, RepositoryProvider, ViewWindow};
use crate::shared::shutdown::ShutdownSignal;

/// Start the sweeper. Returns `None` when `interval_secs` is 0 (disabled).
pub fn start_mark_sweeper_task(
    repos: Arc<dyn RepositoryProvider>,
    window: ViewWindow,
    interval_secs: u64,
    shutdown: ShutdownSignal,
) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        info!("Rate-limit mark sweeper disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        info!(interval_secs, "🧹 Rate-limit mark sweeper started");

        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = sweep_expired_marks(repos.as_ref(), window, Utc::now().timestamp()).await {
                        warn!(error = %e, "Rate-limit mark sweep failed");
                    }
                }
                _ = shutdown.wait() => {
                    info!("🧹 Rate-limit mark sweeper shutting down");
                    break;
                }
            }
        }
    }))
}

/// Delete marks that can no longer block a view at `now`.
pub async fn sweep_expired_marks(
    repos: &dyn RepositoryProvider,
    window: ViewWindow,
    now: i64,
) -> DomainResult<u64> {
    let removed = repos.views().purge_marks_before(window.cutoff(now)).await?;
    if removed > 0 {
        debug!(removed, "Expired rate-limit marks purged");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::{seed_article, test_db};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    #[tokio::test]
    async fn sweep_only_removes_marks_outside_the_window() {
        let db = test_db().await;
        let id = seed_article(&db, "my-post").await;
        let repos = SeaOrmRepositoryProvider::new(db);
        let window = ViewWindow::from_secs(300);

        repos.views().record("old", id, 1_000, window).await.unwrap();
        repos.views().record("edge", id, 1_400, window).await.unwrap();

        // cutoff = 1400: "old" is expired, "edge" sits exactly on it
        assert_eq!(sweep_expired_marks(&repos, window, 1_700).await.unwrap(), 1);
        assert!(!repos.views().record("edge", id, 1_700, window).await.unwrap().counted);
        assert_eq!(repos.views().count(id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn sweeper_stops_on_shutdown() {
        let db = test_db().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db));
        let shutdown = ShutdownSignal::new();

        let handle = start_mark_sweeper_task(repos, ViewWindow::DEFAULT, 3600, shutdown.clone())
            .expect("sweeper enabled");
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("sweeper did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn zero_interval_disables_the_sweeper() {
        let db = test_db().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db));
        assert!(start_mark_sweeper_task(repos, ViewWindow::DEFAULT, 0, ShutdownSignal::new()).is_none());
    }
}
