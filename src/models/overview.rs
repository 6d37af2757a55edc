/// An upcoming fixture or session on the Overview tab.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingEvent {
    pub title: String,
    pub detail: String,
    pub badge: String,
    /// Today's events get the primary badge; later ones the secondary style.
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub title: String,
    pub detail: String,
}
