//! `donate-away list`: the dashboard sample data on stdout.

use crate::mock_data::{DONATIONS, HISTORY, PICKUPS};
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    /// Donations nearby
    Feed,
    /// Active pickups
    Pickups,
    /// Completed collections
    History,
}

/// Prints `kind` as aligned text or as a pretty JSON array.
pub fn run(kind: ListKind, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let value = match kind {
            ListKind::Feed => serde_json::to_string_pretty(DONATIONS),
            ListKind::Pickups => serde_json::to_string_pretty(PICKUPS),
            ListKind::History => serde_json::to_string_pretty(HISTORY),
        }
        .context("Failed to serialize list")?;
        writeln!(out, "{}", value)?;
        return Ok(());
    }

    match kind {
        ListKind::Feed => {
            for item in DONATIONS {
                writeln!(
                    out,
                    "{:<26} {:<28} {:<10} {:>8}  {}",
                    item.donor_name,
                    item.food_items,
                    item.diet_label(),
                    item.distance(),
                    item.time_ago()
                )?;
                writeln!(out, "{:<26} Quantity: {}", "", item.quantity)?;
            }
        }
        ListKind::Pickups => {
            for item in PICKUPS {
                writeln!(
                    out,
                    "{:<22} {:<12} {:<28} {}",
                    item.donor_name,
                    item.status.label(),
                    item.address,
                    item.contact
                )?;
            }
        }
        ListKind::History => {
            for item in HISTORY {
                writeln!(
                    out,
                    "{:<14} {:<22} {}",
                    item.display_date(),
                    item.donor_name,
                    item.impact
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(kind: ListKind, json: bool) -> String {
        let mut out = Vec::new();
        run(kind, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_lists_every_record() {
        let feed = render(ListKind::Feed, false);
        for item in DONATIONS {
            assert!(feed.contains(item.donor_name));
        }
        let history = render(ListKind::History, false);
        assert_eq!(history.lines().count(), HISTORY.len());
    }

    #[test]
    fn test_json_is_an_array_of_records() {
        let value: serde_json::Value =
            serde_json::from_str(&render(ListKind::Pickups, true)).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), PICKUPS.len());
        assert_eq!(records[0]["donor_name"], PICKUPS[0].donor_name);
    }
}
