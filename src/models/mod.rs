pub mod academy;
pub mod overview;
pub mod payment;
pub mod player;
pub mod profile;
pub mod training;
