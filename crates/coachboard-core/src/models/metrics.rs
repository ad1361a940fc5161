//! Dashboard overview metrics
//!
//! The client status breakdown is recomputed from the client store; growth,
//! plan and subscription figures are business values seeded with the rest of
//! the data (a production deployment would fetch them).

use crate::models::{Client, ClientStatus};
use crate::view::stats::{count_where, percentage};
use serde::{Deserialize, Serialize};

/// A count plus its share of the total, for summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CountShare {
    pub count: u64,
    pub percentage: f64,
}

impl CountShare {
    pub fn new(count: usize, total: usize) -> Self {
        Self {
            count: count as u64,
            percentage: percentage(count, total),
        }
    }
}

/// Client counts per subscription status. Categories are exhaustive and
/// mutually exclusive, so the counts sum to `total`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBreakdown {
    pub active: CountShare,
    pub on_hold: CountShare,
    pub prestart: CountShare,
    pub expired: CountShare,
    pub refunded: CountShare,
    pub no_subscription: CountShare,
    pub total: u64,
}

impl ClientBreakdown {
    /// Compute the breakdown from the full client store.
    pub fn from_clients(clients: &[Client]) -> Self {
        let total = clients.len();
        let share = |status: ClientStatus| {
            CountShare::new(count_where(clients, |c| c.status == status), total)
        };
        Self {
            active: share(ClientStatus::Active),
            on_hold: share(ClientStatus::OnHold),
            prestart: share(ClientStatus::Prestart),
            expired: share(ClientStatus::Expired),
            refunded: share(ClientStatus::Refunded),
            no_subscription: share(ClientStatus::NoSubscription),
            total: total as u64,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessGrowth {
    pub daily_new_clients: CountShare,
    pub daily_renewals: CountShare,
}

/// Progress of plan preparation work (current / total).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlanProgress {
    pub current: u64,
    pub total: u64,
}

impl PlanProgress {
    /// Completion ratio 0-100; 0 when nothing is planned.
    pub fn percent(&self) -> f64 {
        percentage(self.current as usize, self.total as usize)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatus {
    pub diet: PlanProgress,
    pub resistance: PlanProgress,
    pub fitness: PlanProgress,
    pub mobility: PlanProgress,
}

/// Coach subscription expiry summary shown at the top of the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub is_expiring: bool,
    pub days_left: u32,
    pub hours_left: u32,
    pub remaining_percentage: f64,
}

/// Everything the overview screen shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub subscription: SubscriptionStatus,
    pub client_breakdown: ClientBreakdown,
    pub business_growth: BusinessGrowth,
    pub plan_status: PlanStatus,
    pub active_clients: u64,
    pub active_team_members: u64,
    pub total_clients: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, status: ClientStatus) -> Client {
        Client {
            id: id.to_string(),
            name: format!("Client {id}"),
            email: format!("client{id}@email.com"),
            phone: "+1 (555) 000-0000".to_string(),
            status,
            join_date: "2024-01-15".to_string(),
            program: None,
            avatar: None,
        }
    }

    #[test]
    fn test_breakdown_counts_and_shares() {
        let clients = vec![
            client("1", ClientStatus::Active),
            client("2", ClientStatus::Active),
            client("3", ClientStatus::OnHold),
            client("4", ClientStatus::Expired),
        ];
        let breakdown = ClientBreakdown::from_clients(&clients);
        assert_eq!(breakdown.active.count, 2);
        assert_eq!(breakdown.active.percentage, 50.0);
        assert_eq!(breakdown.on_hold.count, 1);
        assert_eq!(breakdown.total, 4);
    }

    #[test]
    fn test_breakdown_empty_store_is_all_zero() {
        let breakdown = ClientBreakdown::from_clients(&[]);
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.active.percentage, 0.0);
        assert!(!breakdown.active.percentage.is_nan());
    }

    #[test]
    fn test_plan_progress_percent() {
        let progress = PlanProgress { current: 0, total: 0 };
        assert_eq!(progress.percent(), 0.0);
        let progress = PlanProgress { current: 23, total: 46 };
        assert_eq!(progress.percent(), 50.0);
    }
}
