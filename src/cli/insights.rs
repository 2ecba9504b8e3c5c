use ansi_term::{Colour, Style};
use anyhow::Result;
use chrono::{DateTime, Datelike, Local};

use crate::{
    stats::{
        activity::{activity_map, DayActivity, HeatLevel},
        weekly::weekly_completion,
    },
    store::entities::HabitEntity,
    utils::time::{current_week, date_key, last_n_days},
};

/// The activity map covers a rolling year, matching the heatmap width of one column per
/// week for 52-ish weeks.
const ACTIVITY_WINDOW_DAYS: u32 = 365;

/// Command to process `week`. Renders the weekly focus summary: share of completed
/// (habit, day) slots in the current week.
pub fn process_week_command(habits: &[HabitEntity], now: DateTime<Local>) -> Result<()> {
    let summary = weekly_completion(habits, &current_week(now));

    println!("{}", Style::new().bold().paint("Weekly Focus"));
    if summary.total == 0 {
        println!("No habits yet, nothing to complete this week");
        return Ok(());
    }

    println!(
        "{}% of {} slots completed",
        summary.percentage().rounded(),
        summary.total
    );
    // pad before painting, ansi escapes would throw the width off otherwise
    println!(
        "{} {}",
        Colour::Green.paint(format!("{:<10}", "done")),
        summary.completed
    );
    println!(
        "{} {}",
        Colour::Fixed(240).paint(format!("{:<10}", "remaining")),
        summary.remaining()
    );
    Ok(())
}

/// Command to process `year`. Renders the trailing year of activity as a contribution
/// style grid, one column per week, Monday on top.
pub fn process_year_command(habits: &[HabitEntity], now: DateTime<Local>) -> Result<()> {
    let mut days = last_n_days(now.date_naive(), ACTIVITY_WINDOW_DAYS);
    // the grid reads left to right, so lay the window out oldest first
    days.reverse();
    let activity = activity_map(habits, &days);
    let max = activity.iter().map(|day| day.count).max().unwrap_or(0);

    println!("{}", Style::new().bold().paint("Activity Map"));
    if let (Some(oldest), Some(newest)) = (days.first(), days.last()) {
        println!(
            "{}",
            Colour::Fixed(245).paint(format!("{} to {}", date_key(*oldest), date_key(*newest)))
        );
    }
    for line in heatmap_rows(&activity, max) {
        println!("{line}");
    }
    println!(
        "    {} {}{}{} {}",
        Colour::Fixed(245).paint("less"),
        heat_tint(HeatLevel::Empty).paint("■"),
        heat_tint(HeatLevel::Low).paint("■"),
        heat_tint(HeatLevel::High).paint("■"),
        Colour::Fixed(245).paint("more"),
    );
    Ok(())
}

const ROW_LABELS: [&str; 7] = ["Mon", "", "Wed", "", "Fri", "", "Sun"];

/// Lays the window out as weekday rows. Cells before the first day of the window render
/// blank so columns always line up with calendar weeks.
fn heatmap_rows(activity: &[DayActivity], max: usize) -> Vec<String> {
    let lead = activity
        .first()
        .map(|day| day.date.weekday().num_days_from_monday() as usize)
        .unwrap_or(0);
    let columns = (lead + activity.len()).div_ceil(7);

    let mut grid: Vec<Vec<Option<HeatLevel>>> = vec![vec![None; columns]; 7];
    for (i, day) in activity.iter().enumerate() {
        let cell = lead + i;
        grid[cell % 7][cell / 7] = Some(HeatLevel::bucket(day.count, max));
    }

    grid.iter()
        .zip(ROW_LABELS)
        .map(|(row, label)| {
            let cells = row
                .iter()
                .map(|cell| match cell {
                    Some(level) => heat_tint(*level).paint("■").to_string(),
                    None => " ".to_string(),
                })
                .collect::<String>();
            format!("{label:<4}{cells}")
        })
        .collect()
}

fn heat_tint(level: HeatLevel) -> Colour {
    match level {
        HeatLevel::Empty => Colour::Fixed(238),
        HeatLevel::Low => Colour::Fixed(34),
        HeatLevel::High => Colour::Fixed(46),
    }
}
