use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::{
    store::{
        entities::HabitEntity, habit_store::HabitStore, snapshot_storage::SnapshotStorage,
    },
    utils::time::display_date,
};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct ToggleCommand {
    #[arg(help = "Habit id or name")]
    habit: String,
    #[arg(
        long = "date",
        short,
        help = "Day to toggle. Examples are \"yesterday\", \"15/03/2025\". Defaults to today"
    )]
    date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Command to process `add`. The habit takes effect in memory even when the flush behind
/// it fails.
pub async fn process_add_command(
    store: &mut HabitStore<impl SnapshotStorage>,
    name: &str,
) -> Result<()> {
    let added = store.add(name).map(|habit| habit.name.clone());
    match added {
        Some(name) => {
            store.flush().await;
            println!("Added habit {name}");
        }
        None => eprintln!("Habit names can't be empty"),
    }
    Ok(())
}

/// Command to process `toggle`. Flips one day of one habit, defaulting to today.
pub async fn process_toggle_command(
    store: &mut HabitStore<impl SnapshotStorage>,
    ToggleCommand {
        habit,
        date,
        date_style,
    }: ToggleCommand,
    now: DateTime<Local>,
) -> Result<()> {
    let date = parse_toggle_date(date, date_style, now)?;

    let Some((id, name)) =
        resolve_habit(store.habits(), &habit).map(|h| (h.id.clone(), h.name.clone()))
    else {
        eprintln!("No habit matches \"{habit}\"");
        return Ok(());
    };

    match store.toggle(&id, date) {
        Some(true) => {
            store.flush().await;
            println!("Marked {name} done on {}", display_date(date));
        }
        Some(false) => {
            store.flush().await;
            println!("Cleared {name} on {}", display_date(date));
        }
        None => eprintln!("No habit matches \"{habit}\""),
    }
    Ok(())
}

/// Command to process `remove`.
pub async fn process_remove_command(
    store: &mut HabitStore<impl SnapshotStorage>,
    selector: &str,
) -> Result<()> {
    let Some((id, name)) =
        resolve_habit(store.habits(), selector).map(|h| (h.id.clone(), h.name.clone()))
    else {
        eprintln!("No habit matches \"{selector}\"");
        return Ok(());
    };

    if store.remove(&id) {
        store.flush().await;
        println!("Removed habit {name}");
    }
    Ok(())
}

fn parse_toggle_date(
    date: Option<String>,
    date_style: DateStyle,
    now: DateTime<Local>,
) -> Result<NaiveDate> {
    let Some(date) = date else {
        return Ok(now.date_naive());
    };
    match parse_date_string(&date, now, date_style.into()) {
        Ok(v) => Ok(v.date_naive()),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate date {e}"),
            )
            .into()),
    }
}

/// The store only speaks ids, but making the user paste ids would be hostile. Ids win
/// over names so a habit named like another habit's id stays addressable.
fn resolve_habit<'a>(habits: &'a [HabitEntity], selector: &str) -> Option<&'a HabitEntity> {
    habits
        .iter()
        .find(|h| &*h.id == selector)
        .or_else(|| habits.iter().find(|h| h.name.eq_ignore_ascii_case(selector)))
}

#[cfg(test)]
mod tests {
    use crate::store::entities::HabitEntity;

    use super::resolve_habit;

    #[test]
    fn test_resolve_prefers_id_over_name() {
        let first = HabitEntity::new("Read");
        let habits = vec![HabitEntity::new(&first.id.clone()), first];

        let resolved = resolve_habit(&habits, &habits[1].id).unwrap();

        assert_eq!(resolved.id, habits[1].id);
    }

    #[test]
    fn test_resolve_matches_names_case_insensitively() {
        let habits = vec![HabitEntity::new("Read"), HabitEntity::new("Run")];

        assert_eq!(resolve_habit(&habits, "run").unwrap().id, habits[1].id);
        assert!(resolve_habit(&habits, "swim").is_none());
    }
}
