pub mod metrics;
pub mod state;

pub use metrics::{DashboardMetrics, derive_metrics};
pub use state::{DashboardView, Navigation, Phase, Screen, Visitor};

/// The four dashboard sections, selected with `?tab=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Players,
    Training,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Players, Tab::Training, Tab::Profile];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Players => "players",
            Tab::Training => "training",
            Tab::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Resumen",
            Tab::Players => "Jugadores",
            Tab::Training => "Entrenamientos",
            Tab::Profile => "Perfil",
        }
    }

    /// Unknown or missing values fall back to the overview.
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|p| Tab::ALL.into_iter().find(|t| t.slug() == p))
            .unwrap_or_default()
    }
}
