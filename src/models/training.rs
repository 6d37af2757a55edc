use chrono::{NaiveDate, NaiveTime};

/// A scheduled session and whether the member showed up.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: String,
    pub attended: bool,
}

impl Training {
    pub fn date_display(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_display(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn attendance_label(&self) -> &'static str {
        if self.attended { "Asistió" } else { "No asistió" }
    }
}

/// Headline numbers for the Training tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingWeek {
    pub sessions: u32,
    pub hours: f32,
    pub intensity: String,
}
