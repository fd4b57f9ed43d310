use serde::{Deserialize, Serialize};

use super::movie::ShowTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub movie_id: i64,
    pub showtime: ShowTime,
    pub seat_number: i32,
}

/// Booking creation payload: everything but the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub movie_id: i64,
    pub showtime: ShowTime,
    pub seat_number: i32,
}
