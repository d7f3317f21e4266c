//! Alerts module - price and 24h-change alerts evaluated on every refresh.

mod alerts_model;
mod alerts_repository;
mod alerts_service;
mod alerts_traits;

pub use alerts_model::{Alert, AlertType, NewAlert};
pub use alerts_repository::InMemoryAlertRepository;
pub use alerts_service::AlertService;
pub use alerts_traits::{AlertRepositoryTrait, AlertServiceTrait};
