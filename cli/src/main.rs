mod status;
mod tui;

use anyhow::Result;
use clap::Parser;
use studytrack_core::{format_duration, FileStateRepository, TrackerService, Weekday};

#[derive(Parser)]
#[command(name = "studytrack")]
#[command(about = "A study-time tracker with daily, weekly and monthly goals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log 30 minutes of study time on a weekday (usage: log mon)
    Log {
        /// Weekday, short or full name (mon..sun, monday..sunday)
        day: String,
    },
    /// Show the viewed week's days and overall progress
    Status,
    /// Show the closed-week history
    History,
    /// Close the current week and start the next one
    Next,
    /// Switch the viewed week (usage: week 3)
    Week { week: u32 },
    /// Reset all tracking data back to week 1
    Reset,
    /// Open the Terminal User Interface
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileStateRepository::new(None)?;
    let mut service = TrackerService::new(repo)?;

    match cli.command {
        Some(Commands::Log { day }) => {
            let Some(day) = Weekday::from_str(&day) else {
                println!("Unknown weekday: '{}'. Use mon..sun or a full day name.", day);
                return Ok(());
            };
            if service.add_time(day)? {
                let minutes = service.state().weekly_minutes.get(day);
                println!("Logged 30min on {}: now {}.", day.label(), format_duration(minutes));
            } else {
                let state = service.state();
                println!(
                    "Viewing week {} while week {} is open. Run `studytrack week {}` before logging time.",
                    state.viewing_week, state.current_week, state.current_week
                );
            }
        }
        Some(Commands::Status) => {
            status::show_status(service.state());
        }
        Some(Commands::History) => {
            status::show_history(service.state());
        }
        Some(Commands::Next) => {
            let closed = service.state().current_week;
            let total = service.state().weekly_total();
            service.advance_week()?;
            println!(
                "Closed week {} at {}. Week {} is now open.",
                closed,
                format_duration(total),
                service.state().current_week
            );
        }
        Some(Commands::Week { week }) => {
            service.switch_to_week(week)?;
            println!(
                "Now viewing week {} ({}).",
                week,
                format_duration(service.state().weekly_total())
            );
        }
        Some(Commands::Reset) => {
            service.reset_all()?;
            println!("All tracking data reset. Week 1 is open.");
        }
        Some(Commands::Tui) | None => {
            tui::run(service)?;
        }
    }
    Ok(())
}
