use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use restaurant_booking::domain::clock::clock_mock::FixedClock;
use restaurant_booking::domain::notification::console_sender::{ConsoleMailSender, ConsoleSmsSender};
use restaurant_booking::domain::restaurant::parse_clock_time;
use restaurant_booking::{generate_restaurant, load_bookings, logger};

/// Replays a file of booking requests against a restaurant's booking rules
#[derive(Parser, Debug)]
#[command(name = "restaurant_booking", version, about = "Replays booking requests against a restaurant's booking rules")]
struct Cli {
    /// Restaurant config (JSON)
    #[arg(short, long)]
    config: String,

    /// Booking requests (CSV with header name,phone,email,date_time,number_of_people)
    #[arg(short, long)]
    bookings: String,

    /// Pretend the bookings are made at this moment (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    now: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    let mut restaurant = generate_restaurant(&cli.config).with_context(|| format!("loading restaurant config '{}'", cli.config))?;
    if let Some(now) = &cli.now {
        let now = parse_clock_time(now)?;
        log::info!("Using fixed booking time {}.", now);
        restaurant.scheduler.set_date_source(Arc::new(FixedClock::new(now)));
    }
    restaurant.scheduler.set_sms_sender(Arc::new(ConsoleSmsSender));
    restaurant.scheduler.set_mail_sender(Arc::new(ConsoleMailSender));

    let bookings = load_bookings(&cli.bookings).with_context(|| format!("loading bookings '{}'", cli.bookings))?;

    println!("{}", format!("Bookings for {}", restaurant.name).bold());
    let total = bookings.len();
    let mut accepted = 0;
    for schedule in bookings {
        let label = format!(
            "{} {} ({} people)",
            schedule.date_time().format("%Y-%m-%d %H:%M"),
            schedule.customer().name(),
            schedule.number_of_people()
        );

        match restaurant.scheduler.add_schedule(schedule) {
            Ok(_) => {
                accepted += 1;
                println!("  {} {}", "accepted".green(), label);
            }
            Err(e) => println!("  {} {}: {}", "rejected".red(), label, e),
        }
    }

    println!("{}", "Occupancy per hour".bold());
    let capacity = restaurant.scheduler.capacity_per_hour();
    for (slot, load) in restaurant.scheduler.ledger().loads() {
        let line = format!("  {} {}/{}", slot.format("%Y-%m-%d %H:%M"), load, capacity);
        if load == capacity {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
    println!("{} of {} bookings accepted.", accepted, total);

    Ok(())
}
