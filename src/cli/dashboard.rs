use ansi_term::{Colour, Style};
use anyhow::Result;
use chrono::{DateTime, Local};

use crate::{
    stats::weekly::days_completed,
    store::entities::HabitEntity,
    utils::{
        percentage::ratio_percentage,
        time::{current_week, display_date},
    },
};

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const LABEL_TINT: Colour = Colour::Fixed(245);
const DONE_TINT: Colour = Colour::Green;
const PENDING_TINT: Colour = Colour::Fixed(240);

/// Command to process `list`. Renders the dashboard: today's date and one card per habit
/// with its Monday-first week row.
pub fn process_list_command(habits: &[HabitEntity], now: DateTime<Local>) -> Result<()> {
    println!("{}", LABEL_TINT.paint(display_date(now.date_naive())));
    println!("{}", Style::new().bold().paint("Your Habits"));

    if habits.is_empty() {
        println!();
        println!("No habits yet. Add your first with `habitual add <name>`");
        return Ok(());
    }

    let week = current_week(now);
    println!();
    println!("     {}", LABEL_TINT.paint(DAY_LABELS.join(" ")));

    for habit in habits {
        let done = days_completed(habit, &week);
        let percentage = ratio_percentage(done, week.len());

        let marks = week
            .iter()
            .map(|day| {
                if habit.completed_on(*day) {
                    format!(" {} ", DONE_TINT.paint("●"))
                } else {
                    format!(" {} ", PENDING_TINT.paint("○"))
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        println!();
        println!(
            "{}  {}",
            Style::new().bold().paint(&*habit.name),
            LABEL_TINT.paint(format!("{}%", percentage.rounded()))
        );
        println!("    {marks}");
    }
    Ok(())
}
