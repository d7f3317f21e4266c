use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::{PoisonError, RwLock};

use super::alerts_model::{Alert, AlertType};
use super::alerts_traits::AlertRepositoryTrait;
use crate::errors::{Error, Result};

/// Process-local alert store.
#[derive(Debug, Default)]
pub struct InMemoryAlertRepository {
    alerts: RwLock<Vec<Alert>>,
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

impl InMemoryAlertRepository {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts: RwLock::new(alerts),
        }
    }

    /// Store pre-filled with the demo alerts.
    pub fn seeded() -> Self {
        Self::new(vec![
            Alert {
                id: "1".to_string(),
                asset: "Bitcoin".to_string(),
                alert_type: AlertType::PriceAbove,
                target: dec!(70000),
                current: dec!(65432),
                is_active: true,
                triggered_at: None,
                created_at: seed_date(2025, 1, 7),
            },
            Alert {
                id: "2".to_string(),
                asset: "Ethereum".to_string(),
                alert_type: AlertType::PriceBelow,
                target: dec!(3200),
                current: dec!(3450),
                is_active: true,
                triggered_at: None,
                created_at: seed_date(2025, 1, 6),
            },
            Alert {
                id: "3".to_string(),
                asset: "Cardano".to_string(),
                alert_type: AlertType::PercentageChange,
                target: dec!(15),
                current: dec!(2.3),
                is_active: false,
                triggered_at: None,
                created_at: seed_date(2025, 1, 5),
            },
        ])
    }
}

#[async_trait]
impl AlertRepositoryTrait for InMemoryAlertRepository {
    fn load_alerts(&self) -> Result<Vec<Alert>> {
        Ok(self
            .alerts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn get_alert(&self, alert_id: &str) -> Result<Alert> {
        self.alerts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|a| a.id == alert_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Alert {}", alert_id)))
    }

    async fn insert_alert(&self, alert: Alert) -> Result<Alert> {
        let mut alerts = self.alerts.write().unwrap_or_else(PoisonError::into_inner);
        if alerts.iter().any(|a| a.id == alert.id) {
            return Err(Error::Repository(format!("Alert {} already exists", alert.id)));
        }
        alerts.push(alert.clone());
        Ok(alert)
    }

    async fn update_alert(&self, alert: Alert) -> Result<Alert> {
        let mut alerts = self.alerts.write().unwrap_or_else(PoisonError::into_inner);
        let slot = alerts
            .iter_mut()
            .find(|a| a.id == alert.id)
            .ok_or_else(|| Error::NotFound(format!("Alert {}", alert.id)))?;
        *slot = alert.clone();
        Ok(alert)
    }

    async fn delete_alert(&self, alert_id: &str) -> Result<usize> {
        let mut alerts = self.alerts.write().unwrap_or_else(PoisonError::into_inner);
        let before = alerts.len();
        alerts.retain(|a| a.id != alert_id);
        Ok(before - alerts.len())
    }
}
