use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single scheduled screening. Two showtimes are the same screening
/// when their timestamps match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowTime {
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub showtimes: Vec<ShowTime>,
}
