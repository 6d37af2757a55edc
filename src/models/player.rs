/// A roster entry shown on the Players tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub number: u8,
    pub position: String,
    pub goals: u32,
    pub assists: u32,
    /// Training attendance, 0-100.
    pub attendance: u8,
}

impl Player {
    pub fn new(
        id: i64,
        name: &str,
        number: u8,
        position: &str,
        goals: u32,
        assists: u32,
        attendance: u8,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            number,
            position: position.to_string(),
            goals,
            assists,
            attendance: attendance.min(100),
        }
    }
}
