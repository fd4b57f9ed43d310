pub mod booking;
pub mod movie;

pub use booking::{Booking, NewBooking};
pub use movie::{Movie, ShowTime};
