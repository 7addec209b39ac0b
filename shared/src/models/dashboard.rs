//! Dashboard Statistics

use serde::{Deserialize, Serialize};

use super::Reservation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub today_reservations: u64,
    /// Percentage of today's combined lunch + dinner ceiling, one decimal
    pub occupancy_rate: f64,
    pub upcoming_reservations: Vec<Reservation>,
    pub haccp_alerts: u32,
    pub pending_records: u32,
}
