use async_trait::async_trait;
use chrono::Utc;
use cryptofolio_market_data::MarketAsset;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::alerts_model::{Alert, NewAlert};
use super::alerts_traits::{AlertRepositoryTrait, AlertServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing and evaluating price alerts
pub struct AlertService {
    repository: Arc<dyn AlertRepositoryTrait>,
}

impl AlertService {
    pub fn new(repository: Arc<dyn AlertRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AlertServiceTrait for AlertService {
    fn get_alerts(&self) -> Result<Vec<Alert>> {
        let mut alerts = self.repository.load_alerts()?;
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(alerts)
    }

    async fn create_alert(&self, new_alert: NewAlert) -> Result<Alert> {
        new_alert.validate()?;
        let alert = Alert {
            id: Uuid::now_v7().to_string(),
            asset: new_alert.asset.trim().to_string(),
            alert_type: new_alert.alert_type,
            target: new_alert.target,
            current: new_alert.current.unwrap_or_default(),
            is_active: true,
            triggered_at: None,
            created_at: Utc::now(),
        };
        debug!("Creating alert {} for {}", alert.id, alert.asset);
        self.repository.insert_alert(alert).await
    }

    async fn toggle_alert(&self, alert_id: &str) -> Result<Alert> {
        let mut alert = self.repository.get_alert(alert_id)?;
        alert.is_active = !alert.is_active;
        if alert.is_active {
            alert.triggered_at = None;
        }
        self.repository.update_alert(alert).await
    }

    async fn delete_alert(&self, alert_id: &str) -> Result<()> {
        match self.repository.delete_alert(alert_id).await? {
            0 => Err(Error::NotFound(format!("Alert {}", alert_id))),
            _ => Ok(()),
        }
    }

    async fn evaluate(&self, markets: &[MarketAsset]) -> Result<Vec<Alert>> {
        let mut triggered = Vec::new();

        for mut alert in self.repository.load_alerts()? {
            let Some(market) = markets.iter().find(|m| m.matches(&alert.asset)) else {
                continue;
            };

            let observed = alert.observed_value(market);
            let fires = alert.is_active && !alert.is_triggered() && alert.is_met(market);
            if observed == alert.current && !fires {
                continue;
            }

            alert.current = observed;
            if fires {
                alert.triggered_at = Some(Utc::now());
                info!(
                    "Alert {} triggered: {} {:?} {} (observed {})",
                    alert.id, alert.asset, alert.alert_type, alert.target, observed
                );
            }

            let saved = self.repository.update_alert(alert).await?;
            if fires {
                triggered.push(saved);
            }
        }

        Ok(triggered)
    }
}
