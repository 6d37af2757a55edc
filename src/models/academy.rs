//! Fixed reference data for the member dashboard.
//!
//! Everything here is built once at startup and shared read-only across
//! requests. Nothing mutates it afterwards.

use chrono::{NaiveDate, NaiveTime, ParseError};

use super::overview::{Achievement, UpcomingEvent};
use super::payment::{Payment, PaymentStatus};
use super::player::Player;
use super::profile::{MemberProfile, SeasonStats, SkillLevel};
use super::training::{Training, TrainingWeek};

const MONTHLY_FEE: u32 = 50_000;

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub players: Vec<Player>,
    pub payments: Vec<Payment>,
    pub trainings: Vec<Training>,
    pub upcoming_events: Vec<UpcomingEvent>,
    pub achievements: Vec<Achievement>,
    pub training_week: TrainingWeek,
    pub profile: MemberProfile,
}

impl ReferenceData {
    /// The academy's current season snapshot.
    pub fn academy() -> Result<Self, ParseError> {
        Ok(Self {
            players: roster(),
            payments: payments()?,
            trainings: trainings()?,
            upcoming_events: upcoming_events(),
            achievements: achievements(),
            training_week: TrainingWeek {
                sessions: 5,
                hours: 12.5,
                intensity: "Alta".to_string(),
            },
            profile: profile()?,
        })
    }
}

fn roster() -> Vec<Player> {
    vec![
        Player::new(1, "Elvis Rivas", 10, "Mediocampista", 15, 8, 95),
        Player::new(2, "Juan Pintado", 7, "Extremo", 12, 10, 88),
        Player::new(3, "Kevin Muñoz", 8, "Mediocampista", 8, 12, 92),
        Player::new(4, "Mateo Ortega", 1, "Portero", 0, 2, 98),
        Player::new(5, "Estiven Toledo", 9, "Delantero", 20, 5, 90),
        Player::new(6, "Mantis", 5, "Defensa", 3, 4, 85),
        Player::new(7, "Chino", 4, "Defensa", 2, 6, 93),
    ]
}

fn payments() -> Result<Vec<Payment>, ParseError> {
    let rows = [
        (1, "Diciembre 2024", PaymentStatus::Paid, "2024-12-05"),
        (2, "Noviembre 2024", PaymentStatus::Paid, "2024-11-05"),
        (3, "Octubre 2024", PaymentStatus::Paid, "2024-10-05"),
        (4, "Enero 2025", PaymentStatus::Pending, "2025-01-05"),
    ];
    rows.into_iter()
        .map(|(id, month, status, due)| {
            date(due).map(|due_date| Payment {
                id,
                month: month.to_string(),
                amount: MONTHLY_FEE,
                status,
                due_date,
            })
        })
        .collect()
}

fn trainings() -> Result<Vec<Training>, ParseError> {
    let rows = [
        (1, "2024-12-01", "Entrenamiento Técnico", true),
        (2, "2024-12-03", "Entrenamiento Físico", true),
        (3, "2024-12-05", "Partido Amistoso", false),
        (4, "2024-12-08", "Entrenamiento Táctico", true),
        (5, "2024-12-10", "Entrenamiento Técnico", true),
    ];
    let kickoff = NaiveTime::parse_from_str("16:00", "%H:%M")?;
    rows.into_iter()
        .map(|(id, day, kind, attended)| {
            date(day).map(|date| Training {
                id,
                date,
                time: kickoff,
                kind: kind.to_string(),
                attended,
            })
        })
        .collect()
}

fn upcoming_events() -> Vec<UpcomingEvent> {
    vec![
        UpcomingEvent {
            title: "Entrenamiento Técnico".to_string(),
            detail: "Hoy 16:00 - Campo Principal".to_string(),
            badge: "Hoy".to_string(),
            is_today: true,
        },
        UpcomingEvent {
            title: "Partido vs Deportivo Cali".to_string(),
            detail: "Sábado 15:00 - Estadio".to_string(),
            badge: "Sábado".to_string(),
            is_today: false,
        },
    ]
}

fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            title: "¡Goleador del Mes!".to_string(),
            detail: "15 goles en Noviembre".to_string(),
        },
        Achievement {
            title: "Asistencia Perfecta".to_string(),
            detail: "100% en entrenamientos".to_string(),
        },
    ]
}

fn profile() -> Result<MemberProfile, ParseError> {
    Ok(MemberProfile {
        preferred_position: "Mediocampista".to_string(),
        joined_on: date("2024-01-15")?,
        status: "Activo".to_string(),
        season: SeasonStats {
            goals: 8,
            assists: 12,
            matches: 15,
            attendance: 92,
        },
        skills: vec![
            SkillLevel { label: "Nivel Técnico".to_string(), value: 85 },
            SkillLevel { label: "Condición Física".to_string(), value: 78 },
            SkillLevel { label: "Conocimiento Táctico".to_string(), value: 92 },
        ],
    })
}

fn date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}
