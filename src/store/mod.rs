//! In-memory catalog and booking storage.
//!
//! The movie catalog is seeded once at startup and never mutated, so it is
//! read without locking. Bookings and the id counter live behind a single
//! mutex: creating or deleting a booking is one critical section, which
//! keeps seat-conflict checking and id assignment serialized under
//! concurrent requests.

use chrono::NaiveDate;
use std::sync::Mutex;
use thiserror::Error;

use crate::models::{Booking, Movie, NewBooking, ShowTime};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Movie not found")]
    MovieNotFound,
    #[error("Showtime not found")]
    ShowtimeNotFound,
    #[error("Seat is already booked for this showtime")]
    SeatTaken,
    #[error("Booking not found")]
    BookingNotFound,
}

pub struct Store {
    movies: Vec<Movie>,
    inner: Mutex<Bookings>,
}

struct Bookings {
    records: Vec<Booking>,
    next_id: i64,
}

impl Store {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            inner: Mutex::new(Bookings {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store preloaded with the demo catalog.
    pub fn with_seed_catalog() -> Self {
        Self::new(seed_catalog())
    }

    /// All movies, or only those with a showtime on the given calendar
    /// date, with non-matching showtimes stripped. Movies left without
    /// showtimes are dropped from the result.
    pub fn movies_on(&self, date: Option<NaiveDate>) -> Vec<Movie> {
        let Some(date) = date else {
            return self.movies.clone();
        };
        self.movies
            .iter()
            .filter_map(|movie| {
                let showtimes: Vec<ShowTime> = movie
                    .showtimes
                    .iter()
                    .filter(|s| s.time.date() == date)
                    .cloned()
                    .collect();
                if showtimes.is_empty() {
                    None
                } else {
                    Some(Movie {
                        showtimes,
                        ..movie.clone()
                    })
                }
            })
            .collect()
    }

    /// Validates and stores a booking. Checks run in order: the movie must
    /// exist, the showtime must belong to it, and the seat must be free for
    /// that screening. Id assignment and insertion happen under one lock.
    pub fn create_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        let movie = self
            .movies
            .iter()
            .find(|m| m.id == new.movie_id)
            .ok_or(StoreError::MovieNotFound)?;

        if !movie.showtimes.contains(&new.showtime) {
            return Err(StoreError::ShowtimeNotFound);
        }

        let mut inner = self.inner.lock().unwrap();
        let taken = inner.records.iter().any(|b| {
            b.movie_id == new.movie_id
                && b.showtime == new.showtime
                && b.seat_number == new.seat_number
        });
        if taken {
            return Err(StoreError::SeatTaken);
        }

        let booking = Booking {
            id: inner.next_id,
            movie_id: new.movie_id,
            showtime: new.showtime,
            seat_number: new.seat_number,
        };
        inner.records.push(booking.clone());
        inner.next_id += 1;
        Ok(booking)
    }

    /// All bookings in insertion order.
    pub fn list_bookings(&self) -> Vec<Booking> {
        self.inner.lock().unwrap().records.clone()
    }

    pub fn delete_booking(&self, booking_id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let pos = inner
            .records
            .iter()
            .position(|b| b.id == booking_id)
            .ok_or(StoreError::BookingNotFound)?;
        inner.records.remove(pos);
        Ok(())
    }
}

fn showtime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> ShowTime {
    ShowTime {
        time: NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, 0))
            .unwrap(),
    }
}

/// The demo catalog the service starts with.
pub fn seed_catalog() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Gladiator".to_string(),
            description: "Follow Maximus on his quest for vengance and survival.".to_string(),
            showtimes: vec![showtime(2024, 11, 8, 12, 0)],
        },
        Movie {
            id: 2,
            title: "Titanic".to_string(),
            description: "Rose from first class meets Jack from the third class on board of the Titanic.".to_string(),
            showtimes: vec![showtime(2024, 11, 10, 12, 0)],
        },
        Movie {
            id: 3,
            title: "Lord of the rings".to_string(),
            description: "A fellowship embarking on an epic adventure to destroy the one ring.".to_string(),
            showtimes: vec![showtime(2024, 11, 11, 12, 0)],
        },
    ]
}
