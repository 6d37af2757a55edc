use crate::models::payment::Payment;
use crate::models::player::Player;
use crate::models::training::Training;

/// Headline numbers shown above the tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    /// Percentage of attended sessions; `None` when there are no sessions.
    pub attendance_rate: Option<f64>,
    pub pending_payments: usize,
    pub total_goals: u64,
    pub total_assists: u64,
}

impl DashboardMetrics {
    /// Rounded to a whole percent, half away from zero.
    pub fn attendance_display(&self) -> String {
        match self.attendance_rate {
            Some(rate) => format!("{}%", rate.round() as i64),
            None => "—".to_string(),
        }
    }
}

pub fn derive_metrics(
    players: &[Player],
    payments: &[Payment],
    trainings: &[Training],
) -> DashboardMetrics {
    DashboardMetrics {
        attendance_rate: attendance_rate(trainings),
        pending_payments: payments.iter().filter(|p| p.status.is_pending()).count(),
        total_goals: players.iter().map(|p| u64::from(p.goals)).sum(),
        total_assists: players.iter().map(|p| u64::from(p.assists)).sum(),
    }
}

fn attendance_rate(trainings: &[Training]) -> Option<f64> {
    if trainings.is_empty() {
        return None;
    }
    let attended = trainings.iter().filter(|t| t.attended).count();
    Some(attended as f64 / trainings.len() as f64 * 100.0)
}
