// --- File: crates/scheduler_devdata/src/catalog.rs ---
//! The fixed sample data set: two venues, their rooms and six events.

use scheduler_api_client::{EventType, NewEvent, NewVenue};

use crate::dates::{api_date, SampleDates};

pub const MONKEY_PUZZLE_VENUE: &str = "Monkey Puzzle (Farnborough)";
pub const DOUBLE_TREE_VENUE: &str = "DoubleTree by Hilton Southampton";

#[derive(Debug, Clone, PartialEq)]
pub struct RoomSpec {
    pub name: String,
    pub capacity: u32,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct VenueSpec {
    pub venue: NewVenue,
    pub rooms: Vec<RoomSpec>,
    /// Every created room of the venue is assigned to every created event of the venue
    pub assign_rooms_to_events: bool,
}

impl VenueSpec {
    pub fn name(&self) -> &str {
        &self.venue.name
    }
}

/// Venues in creation order plus the events referencing them by name.
///
/// Event `venue_id`s are empty here and filled in once the venue exists.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub venues: Vec<VenueSpec>,
    pub events: Vec<NewEvent>,
}

impl Catalog {
    pub fn venue(&self, name: &str) -> Option<&VenueSpec> {
        self.venues.iter().find(|v| v.name() == name)
    }
}

fn room(name: &str, capacity: u32, description: &str) -> RoomSpec {
    RoomSpec {
        name: name.to_string(),
        capacity,
        description: description.to_string(),
    }
}

struct EventDraft<'a> {
    name: &'a str,
    description: &'a str,
    date: String,
    start_time: &'a str,
    end_time: &'a str,
    venue_name: &'a str,
    max_participants: u32,
    entry_fee: u32,
    event_type: EventType,
}

impl EventDraft<'_> {
    /// Single-day event. Social events are public; corporate ones need approval.
    fn build(self) -> NewEvent {
        let corporate = self.event_type == EventType::Corporate;
        NewEvent {
            name: self.name.to_string(),
            description: self.description.to_string(),
            event_date: self.date.clone(),
            start_time: self.start_time.to_string(),
            end_date: self.date,
            end_time: self.end_time.to_string(),
            venue_name: self.venue_name.to_string(),
            venue_id: String::new(),
            max_participants: self.max_participants,
            entry_fee: self.entry_fee,
            event_type: self.event_type,
            is_public: !corporate,
            requires_approval: corporate,
        }
    }
}

/// The sample data set with event dates relative to `dates`.
pub fn sample_catalog(dates: &SampleDates) -> Catalog {
    let venues = vec![
        VenueSpec {
            venue: NewVenue {
                name: MONKEY_PUZZLE_VENUE.to_string(),
                description: "Laid-back family pub/restaurant chain serving classic dishes & international favourites.".to_string(),
                address: "101 Ively Rd, Cove, Farnborough GU14 0LE".to_string(),
                contact_phone: "+44 1252 546654".to_string(),
                contact_email: String::new(),
                website_url: "https://www.brewersfayre.co.uk/en-gb/locations/hampshire/monkey-puzzle?cid=GLBC_location41015125".to_string(),
                capacity: 30,
                map_link: "https://maps.app.goo.gl/jxwgd532cFiAmDRJ7".to_string(),
            },
            rooms: vec![
                room("Main Area", 30, "Large open area with tables and chairs"),
                room("Back Room", 15, "Smaller private area at the back"),
            ],
            assign_rooms_to_events: true,
        },
        VenueSpec {
            venue: NewVenue {
                name: DOUBLE_TREE_VENUE.to_string(),
                description: "Set in wooded gardens off the M27 motorway, this informal hotel is 3 miles from Southampton International Airport and 5 miles from Southampton Docks.".to_string(),
                address: "Bracken Pl, Chilworth, Southampton SO16 3RB".to_string(),
                contact_phone: "+44 2380 702700".to_string(),
                contact_email: String::new(),
                website_url: "https://www.hilton.com/en/hotels/souhndi-doubletree-southampton/?SEO_id=GMB-EMEA-DI-SOUHNDI".to_string(),
                capacity: 200,
                map_link: "https://maps.app.goo.gl/fXmwzS9bBSHBD7MU6".to_string(),
            },
            rooms: vec![
                room("Chilworth Suite", 30, "Spacious conference suite with modern amenities"),
                room("Garden Suite", 30, "Bright suite overlooking the gardens"),
                room("Adams Suite", 30, "Executive suite with premium facilities"),
                room("Austen Suite", 30, "Classic suite with traditional decor"),
                room("Hardy Suite", 30, "Contemporary suite with modern technology"),
                room("The Boardroom", 20, "Intimate meeting space for smaller groups"),
                room("Frome Suite", 12, "Compact suite perfect for focused discussions"),
            ],
            assign_rooms_to_events: false,
        },
    ];

    let events = vec![
        EventDraft {
            name: "Board Game Championship - Monkey Puzzle",
            description: "Monthly board game tournament featuring strategy games. Winners receive prizes!",
            date: api_date(dates.four_months_ago),
            start_time: "14:00",
            end_time: "20:00",
            venue_name: MONKEY_PUZZLE_VENUE,
            max_participants: 25,
            entry_fee: 5,
            event_type: EventType::Social,
        },
        EventDraft {
            name: "Board Game Night - Monkey Puzzle",
            description: "Weekly board game night at Monkey Puzzle. Bring your own games or play ours!",
            date: api_date(dates.in_three_months),
            start_time: "18:00",
            end_time: "22:00",
            venue_name: MONKEY_PUZZLE_VENUE,
            max_participants: 30,
            entry_fee: 0,
            event_type: EventType::Social,
        },
        EventDraft {
            name: "Clocktower (Beginner Friendly)",
            description: "Learn to play Blood on the Clocktower! Perfect for newcomers to the game. Experienced players welcome to help teach.",
            date: api_date(dates.second_tuesday_next_month),
            start_time: "19:00",
            end_time: "22:30",
            venue_name: MONKEY_PUZZLE_VENUE,
            max_participants: 15,
            entry_fee: 0,
            event_type: EventType::Social,
        },
        EventDraft {
            name: "Clocktower (Intermediate+)",
            description: "Advanced Blood on the Clocktower sessions for experienced players. Complex scripts and challenging scenarios.",
            date: api_date(dates.fourth_tuesday_next_month),
            start_time: "19:00",
            end_time: "22:30",
            venue_name: MONKEY_PUZZLE_VENUE,
            max_participants: 15,
            entry_fee: 0,
            event_type: EventType::Social,
        },
        EventDraft {
            name: "Clockshire '25",
            description: "Quarterly corporate retreat with team building activities and presentations.",
            date: api_date(dates.two_months_ago),
            start_time: "08:00",
            end_time: "18:00",
            venue_name: DOUBLE_TREE_VENUE,
            max_participants: 80,
            entry_fee: 75,
            event_type: EventType::Corporate,
        },
        EventDraft {
            name: "Clockshire '26",
            description: "Team building event with various activities and games.",
            date: api_date(dates.in_four_months),
            start_time: "09:00",
            end_time: "17:00",
            venue_name: DOUBLE_TREE_VENUE,
            max_participants: 100,
            entry_fee: 50,
            event_type: EventType::Corporate,
        },
    ]
    .into_iter()
    .map(EventDraft::build)
    .collect();

    Catalog { venues, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        sample_catalog(&SampleDates::from_today(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()))
    }

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.venues.len(), 2);
        assert_eq!(catalog.venues.iter().map(|v| v.rooms.len()).sum::<usize>(), 9);
        assert_eq!(catalog.events.len(), 6);
    }

    #[test]
    fn test_every_event_references_a_catalog_venue() {
        let catalog = catalog();
        for event in &catalog.events {
            assert!(catalog.venue(&event.venue_name).is_some(), "{}", event.name);
        }
    }

    #[test]
    fn test_only_monkey_puzzle_assigns_rooms() {
        let catalog = catalog();
        let assigning: Vec<_> = catalog
            .venues
            .iter()
            .filter(|v| v.assign_rooms_to_events)
            .map(VenueSpec::name)
            .collect();
        assert_eq!(assigning, vec![MONKEY_PUZZLE_VENUE]);
    }

    #[test]
    fn test_corporate_events_are_private_and_need_approval() {
        let catalog = catalog();
        let clockshire = catalog.events.iter().find(|e| e.name == "Clockshire '25").unwrap();
        assert!(!clockshire.is_public);
        assert!(clockshire.requires_approval);
        assert_eq!(clockshire.event_date, "2026-08-17");

        let beginners = catalog.events.iter().find(|e| e.name.starts_with("Clocktower (Beginner")).unwrap();
        assert!(beginners.is_public);
        assert!(!beginners.requires_approval);
        assert_eq!(beginners.event_date, "2026-11-10");
        assert_eq!(beginners.end_time, "22:30");
    }
}
