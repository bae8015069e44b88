use super::Engine;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    api::AlertAPI,
    entities::{Alert, AlertSummary, NewAlert},
    error::{not_found_error, Error},
};

#[async_trait]
impl AlertAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_alerts(&self) -> Result<Vec<AlertSummary>, Error> {
        let mut alerts = self.store.list_alerts().await?;

        // newest first
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let now = Utc::now();

        Ok(alerts.iter().map(|alert| alert.summary(now)).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn create_alert(&self, alert: NewAlert) -> Result<Alert, Error> {
        alert.validate()?;

        let alert = self.store.insert_alert(alert).await?;

        tracing::info!(id = alert.id, kind = %alert.kind, "created alert");

        Ok(alert)
    }

    #[tracing::instrument(skip(self))]
    async fn confirm_alert(&self, id: i64) -> Result<Alert, Error> {
        self.store
            .confirm_alert(id)
            .await?
            .ok_or_else(|| not_found_error(format!("alert {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn new_alert(kind: &str) -> NewAlert {
        NewAlert {
            kind: kind.into(),
            description: "Entire block without lights".into(),
            latitude: 12.9725,
            longitude: 77.5970,
            reporter_name: "Priya K.".into(),
        }
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let engine = Engine::new(MemStore::with_fixtures(), "Delhi NCR".into());
        engine
            .create_alert(new_alert("Street Lights Out"))
            .await
            .unwrap();

        let alerts = engine.list_alerts().await.unwrap();

        assert_eq!(alerts.len(), 7);
        assert_eq!(alerts[0].id, 7);
        assert_eq!(alerts[0].time, "just now");
        assert_eq!(alerts[1].reporter, "Amit S.");
        assert_eq!(alerts.last().unwrap().time, "2 days ago");
    }

    #[tokio::test]
    async fn rejects_invalid_alerts() {
        let engine = Engine::new(MemStore::new(), "Delhi NCR".into());
        let err = engine.create_alert(new_alert("  ")).await.unwrap_err();

        assert_eq!(err.code, 101);
        assert!(engine.list_alerts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn confirms_existing_alerts_only() {
        let engine = Engine::new(MemStore::new(), "Delhi NCR".into());
        let alert = engine.create_alert(new_alert("Accident")).await.unwrap();

        let confirmed = engine.confirm_alert(alert.id).await.unwrap();
        assert_eq!(confirmed.confirms, 1);

        assert_eq!(engine.confirm_alert(42).await.unwrap_err().code, 104);
    }
}
