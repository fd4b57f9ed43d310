//! Interactive command-line client for the booking service.

use anyhow::Result;
use std::io::{self, Write};

use movie_booking::client::BookingApiClient;
use movie_booking::config::Config;
use movie_booking::models::NewBooking;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    let client = BookingApiClient::from_config(&config.client);

    loop {
        println!("\n--- Movie Booking CLI ---");
        println!("1. List Movies");
        println!("2. Create a Booking");
        println!("3. Delete a Booking");
        println!("4. List All Bookings");
        println!("5. Exit");

        let choice = prompt("Choose an option (1-5): ")?;
        match choice.as_str() {
            "1" => list_movies(&client).await,
            "2" => create_booking(&client).await?,
            "3" => delete_booking(&client).await?,
            "4" => list_bookings(&client).await,
            "5" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please select a number between 1 and 5."),
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn list_movies(client: &BookingApiClient) {
    let movies = match client.list_movies().await {
        Ok(movies) => movies,
        Err(e) => {
            println!("Could not retrieve movies list: {e}");
            return;
        }
    };

    for movie in &movies {
        println!("\nID: {}", movie.id);
        println!("Title: {}", movie.title);
        println!("Description: {}", movie.description);
        println!("Showtimes:");
        for (index, showtime) in movie.showtimes.iter().enumerate() {
            println!(" {}. {}", index + 1, showtime.time);
        }
    }
    println!("\n------ End of Movies List ------\n");
}

// Guided flow: pick a movie by id, a showtime by its 1-based index,
// then a seat number. All business validation happens on the server;
// only numeric parsing and index bounds are checked here.
async fn create_booking(client: &BookingApiClient) -> Result<()> {
    let movies = match client.list_movies().await {
        Ok(movies) => movies,
        Err(e) => {
            println!("Could not retrieve movies list: {e}");
            return Ok(());
        }
    };

    for movie in &movies {
        println!("{}: {}", movie.id, movie.title);
    }

    let Some(movie_id) = read_number(&prompt("\nEnter the Movie ID to book: ")?) else {
        return Ok(());
    };
    let Some(movie) = movies.iter().find(|m| m.id == movie_id) else {
        println!("Invalid Movie ID.");
        return Ok(());
    };

    if movie.showtimes.is_empty() {
        println!("No available showtimes for this movie.");
        return Ok(());
    }

    println!("\nShowtimes for '{}':", movie.title);
    for (index, showtime) in movie.showtimes.iter().enumerate() {
        println!(" {}. {}", index + 1, showtime.time);
    }

    let Some(selection) = read_number(&prompt("Select a showtime by number: ")?) else {
        return Ok(());
    };
    let Some(showtime) = usize::try_from(selection)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| movie.showtimes.get(i))
    else {
        println!("Invalid showtime selection.");
        return Ok(());
    };

    let Some(seat_number) = read_number(&prompt("Enter Seat Number: ")?) else {
        return Ok(());
    };

    let request = NewBooking {
        movie_id,
        showtime: showtime.clone(),
        seat_number: seat_number as i32,
    };
    match client.create_booking(&request).await {
        Ok(booking) => println!("\nBooking created successfully! Booking ID: {}\n", booking.id),
        Err(e) => println!("Failed to create booking: {e}"),
    }

    Ok(())
}

async fn delete_booking(client: &BookingApiClient) -> Result<()> {
    let Some(booking_id) = read_number(&prompt("Enter the Booking ID to delete: ")?) else {
        return Ok(());
    };
    match client.delete_booking(booking_id).await {
        Ok(()) => println!("Booking canceled successfully."),
        Err(e) => println!("Failed to delete booking: {e}"),
    }
    Ok(())
}

async fn list_bookings(client: &BookingApiClient) {
    let bookings = match client.list_bookings().await {
        Ok(bookings) => bookings,
        Err(e) => {
            println!("Could not retrieve bookings list: {e}");
            return;
        }
    };

    for booking in &bookings {
        println!("\nBooking ID: {}", booking.id);
        println!("Movie ID: {}", booking.movie_id);
        println!("Showtime: {}", booking.showtime.time);
        println!("Seat Number: {}", booking.seat_number);
    }
    println!("\n------ End of Bookings List ------\n");
}

fn read_number(input: &str) -> Option<i64> {
    match input.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            println!("Invalid input. Please enter numbers where required.");
            None
        }
    }
}
