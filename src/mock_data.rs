//! Static fixtures that populate the dashboard lists.
//!
//! Nothing here is ever mutated; the records exist only so the NGO dashboard
//! has something to show.

use chrono::NaiveDate;
use serde::Serialize;

/// A donation offered near the NGO, shown on the feed tab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonationItem {
    pub id: u32,
    pub donor_name: &'static str,
    pub food_items: &'static str,
    pub quantity: &'static str,
    pub distance_km: f32,
    pub minutes_ago: u32,
    pub is_veg: bool,
    /// Placeholder thumbnail colour as RGB.
    pub accent: [u8; 3],
}

impl DonationItem {
    /// Relative posting time, e.g. "10 min ago" or "1 hr ago".
    pub fn time_ago(&self) -> String {
        match self.minutes_ago {
            0 => "just now".to_string(),
            m if m < 60 => format!("{} min ago", m),
            m if m < 120 => "1 hr ago".to_string(),
            m => format!("{} hrs ago", m / 60),
        }
    }

    pub fn distance(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }

    pub fn diet_label(&self) -> &'static str {
        if self.is_veg {
            "Veg"
        } else {
            "Non-Veg"
        }
    }

    /// First letter of the donor name, used as the thumbnail glyph.
    pub fn initial(&self) -> char {
        self.donor_name.chars().next().unwrap_or('?')
    }
}

/// Progress of an accepted pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickupStatus {
    #[serde(rename = "Accepted")]
    Accepted,
    #[serde(rename = "On the way")]
    OnTheWay,
}

impl PickupStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PickupStatus::Accepted => "Accepted",
            PickupStatus::OnTheWay => "On the way",
        }
    }
}

/// A pickup the NGO has accepted and not collected yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickupItem {
    pub id: u32,
    pub donor_name: &'static str,
    pub address: &'static str,
    pub status: PickupStatus,
    pub contact: &'static str,
}

/// A completed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    pub id: u32,
    pub donor_name: &'static str,
    /// ISO date (`YYYY-MM-DD`).
    pub date: &'static str,
    pub impact: &'static str,
}

impl HistoryItem {
    /// Date formatted like "Oct 24, 2023". Falls back to the raw value.
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }
}

/// Headline number on the feed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// The signed-in organisation, shown on the profile tab and feed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NgoProfile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub registration_id: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

impl NgoProfile {
    pub fn avatar_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.short_name)
    }
}

pub const DONATIONS: &[DonationItem] = &[
    DonationItem {
        id: 1,
        donor_name: "Tasty Bites Restaurant",
        food_items: "Fried Rice, Manchurian",
        quantity: "Serves 15",
        distance_km: 1.2,
        minutes_ago: 10,
        is_veg: true,
        accent: [0xFF, 0xCC, 0x80],
    },
    DonationItem {
        id: 2,
        donor_name: "John Doe",
        food_items: "Homemade Pasta",
        quantity: "Serves 4",
        distance_km: 0.5,
        minutes_ago: 25,
        is_veg: false,
        accent: [0xEF, 0x9A, 0x9A],
    },
    DonationItem {
        id: 3,
        donor_name: "City Bakery",
        food_items: "Breads & Pastries",
        quantity: "5 kg",
        distance_km: 3.0,
        minutes_ago: 60,
        is_veg: true,
        accent: [0xCE, 0x93, 0xD8],
    },
];

pub const PICKUPS: &[PickupItem] = &[
    PickupItem {
        id: 1,
        donor_name: "Wedding Banquet Hall",
        address: "123 Event St, Downtown",
        status: PickupStatus::Accepted,
        contact: "555-0123",
    },
    PickupItem {
        id: 2,
        donor_name: "Star Coffee House",
        address: "45 Park Ave",
        status: PickupStatus::OnTheWay,
        contact: "555-0199",
    },
];

pub const HISTORY: &[HistoryItem] = &[
    HistoryItem {
        id: 1,
        donor_name: "Fresh Mart",
        date: "2023-10-24",
        impact: "Fed 45 people",
    },
    HistoryItem {
        id: 2,
        donor_name: "Pizza Hut",
        date: "2023-10-22",
        impact: "Fed 12 people",
    },
    HistoryItem {
        id: 3,
        donor_name: "Community Event",
        date: "2023-10-20",
        impact: "Fed 100 people",
    },
];

pub const FEED_STATS: &[FeedStat] = &[
    FeedStat {
        value: "12",
        label: "Pending",
    },
    FeedStat {
        value: "850",
        label: "Lives Touched",
    },
];

pub const NGO_PROFILE: NgoProfile = NgoProfile {
    name: "Helping Hands Foundation",
    short_name: "Helping Hands",
    registration_id: "NGO-882190",
    phone: "+1 234 567 8900",
    location: "New York, USA",
};

/// Entries of the profile menu, top to bottom.
pub const PROFILE_OPTIONS: &[&str] = &[
    "Edit Profile",
    "Notifications",
    "Settings",
    "Help & Support",
    "Log Out",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_ago_formatting() {
        let mut item = DONATIONS[0];
        assert_eq!(item.time_ago(), "10 min ago");
        item.minutes_ago = 60;
        assert_eq!(item.time_ago(), "1 hr ago");
        item.minutes_ago = 185;
        assert_eq!(item.time_ago(), "3 hrs ago");
        item.minutes_ago = 0;
        assert_eq!(item.time_ago(), "just now");
    }

    #[test]
    fn test_distance_and_diet() {
        assert_eq!(DONATIONS[0].distance(), "1.2 km");
        assert_eq!(DONATIONS[2].distance(), "3.0 km");
        assert_eq!(DONATIONS[0].diet_label(), "Veg");
        assert_eq!(DONATIONS[1].diet_label(), "Non-Veg");
        assert_eq!(DONATIONS[1].initial(), 'J');
    }

    #[test]
    fn test_history_display_date() {
        assert_eq!(HISTORY[0].display_date(), "Oct 24, 2023");
        let broken = HistoryItem {
            date: "someday",
            ..HISTORY[0]
        };
        assert_eq!(broken.display_date(), "someday");
    }

    #[test]
    fn test_pickup_status_serializes_as_label() {
        let json = serde_json::to_string(&PICKUPS[1]).unwrap();
        assert!(json.contains("\"status\":\"On the way\""));
    }

    #[test]
    fn test_profile_helpers() {
        assert_eq!(NGO_PROFILE.greeting(), "Hello, Helping Hands!");
        assert_eq!(NGO_PROFILE.avatar_initial(), 'H');
        assert_eq!(PROFILE_OPTIONS.last(), Some(&"Log Out"));
    }
}
