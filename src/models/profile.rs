use chrono::{Datelike, NaiveDate};

const MONTHS_ES: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

/// Static membership details for the Profile tab.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberProfile {
    pub preferred_position: String,
    pub joined_on: NaiveDate,
    pub status: String,
    pub season: SeasonStats,
    pub skills: Vec<SkillLevel>,
}

impl MemberProfile {
    /// "15 de Enero, 2024"
    pub fn joined_display(&self) -> String {
        spanish_long_date(self.joined_on)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStats {
    pub goals: u32,
    pub assists: u32,
    pub matches: u32,
    pub attendance: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillLevel {
    pub label: String,
    pub value: u8,
}

pub fn spanish_long_date(date: NaiveDate) -> String {
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} de {}, {}", date.day(), month, date.year())
}
