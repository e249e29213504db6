use std::fmt;
use std::str::FromStr;

use crate::error::{SeatError, UnknownClassification};

/// Australian film classifications, as shown on the Classifications page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    G,
    PG,
    M,
    MA15Plus,
    R18Plus,
}

impl Classification {
    pub const ALL: [Classification; 5] = [
        Classification::G,
        Classification::PG,
        Classification::M,
        Classification::MA15Plus,
        Classification::R18Plus,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::G => "G",
            Self::PG => "PG",
            Self::M => "M",
            Self::MA15Plus => "MA15+",
            Self::R18Plus => "R18+",
        }
    }

    /// URL-safe form used in `?classification=` queries.
    pub fn slug(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::PG => "pg",
            Self::M => "m",
            Self::MA15Plus => "ma15",
            Self::R18Plus => "r18",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::G => "General. Suitable for everyone.",
            Self::PG => "Parental guidance recommended for viewers under 15.",
            Self::M => "Recommended for mature audiences.",
            Self::MA15Plus => "Not suitable for people under 15 unless accompanied by an adult.",
            Self::R18Plus => "Restricted to adults 18 and over.",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts either the slug (`ma15`) or the display code (`MA15+`).
impl FromStr for Classification {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s) || c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownClassification(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub classification: Classification,
    pub runtime_minutes: u16,
    pub synopsis: String,
    pub new_release: bool,
}

impl Movie {
    fn new(
        id: &str,
        title: &str,
        classification: Classification,
        runtime_minutes: u16,
        synopsis: &str,
        new_release: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            classification,
            runtime_minutes,
            synopsis: synopsis.to_string(),
            new_release,
        }
    }

    /// Runtime as `"1h 52m"`.
    pub fn runtime_label(&self) -> String {
        format!("{}h {:02}m", self.runtime_minutes / 60, self.runtime_minutes % 60)
    }
}

/// An auditorium and the booking state of each of its seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    seats: Vec<bool>,
}

impl Screen {
    pub fn new(name: impl Into<String>, seat_count: usize) -> Self {
        Self {
            name: name.into(),
            seats: vec![false; seat_count],
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Seats outside the screen are never booked.
    pub fn is_seat_booked(&self, index: usize) -> bool {
        self.seats.get(index).copied().unwrap_or(false)
    }

    pub fn set_seat_booked(&mut self, index: usize, booked: bool) -> Result<(), SeatError> {
        let seats = self.seats.len();
        let seat = self
            .seats
            .get_mut(index)
            .ok_or(SeatError::OutOfRange { index, seats })?;
        *seat = booked;
        Ok(())
    }

    pub fn booked_count(&self) -> usize {
        self.seats.iter().filter(|booked| **booked).count()
    }
}

pub fn seed_catalogue() -> Vec<Movie> {
    use Classification::*;
    vec![
        Movie::new(
            "1",
            "The Long Projection",
            M,
            112,
            "A projectionist pieces together a missing reel.",
            true,
        ),
        Movie::new(
            "2",
            "Harbour Lights",
            PG,
            98,
            "Two siblings race a ferry timetable across the city.",
            true,
        ),
        Movie::new(
            "3",
            "Red Dust",
            MA15Plus,
            127,
            "A drought, a debt and a road train heading north.",
            false,
        ),
        Movie::new(
            "4",
            "Paper Kites",
            G,
            85,
            "An animated flight over a town made of newspapers.",
            false,
        ),
        Movie::new(
            "5",
            "Night Shift",
            R18Plus,
            104,
            "A hospital thriller told over one winter night.",
            true,
        ),
    ]
}

pub fn seed_screens() -> Vec<Screen> {
    [("Screen 1", 120, 37), ("Screen 2", 80, 12), ("Gold Class", 24, 20)]
        .into_iter()
        .map(|(name, seats, booked)| {
            let mut screen = Screen::new(name, seats);
            screen.seats[..booked].fill(true);
            screen
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_start_free_and_can_be_booked() {
        let mut screen = Screen::new("Screen 1", 3);
        assert_eq!(screen.booked_count(), 0);
        screen.set_seat_booked(1, true).unwrap();
        assert!(screen.is_seat_booked(1));
        assert!(!screen.is_seat_booked(0));
        assert_eq!(screen.booked_count(), 1);
        screen.set_seat_booked(1, false).unwrap();
        assert_eq!(screen.booked_count(), 0);
    }

    #[test]
    fn seats_out_of_range() {
        let mut screen = Screen::new("Gold Class", 2);
        assert!(!screen.is_seat_booked(5));
        assert_eq!(
            screen.set_seat_booked(2, true),
            Err(SeatError::OutOfRange { index: 2, seats: 2 })
        );
    }

    #[test]
    fn catalogue_ids_are_unique() {
        let movies = seed_catalogue();
        let mut ids: Vec<_> = movies.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), movies.len());
    }

    #[test]
    fn seeded_screens_have_bookings() {
        let screens = seed_screens();
        assert_eq!(screens.len(), 3);
        assert!(screens.iter().all(|s| s.booked_count() < s.seat_count()));
        assert_eq!(screens[2].booked_count(), 20);
    }

    #[test]
    fn runtime_label_pads_minutes() {
        let movie = &seed_catalogue()[1];
        assert_eq!(movie.runtime_label(), "1h 38m");
    }

    #[test]
    fn classification_from_slug_or_code() {
        assert_eq!("ma15".parse(), Ok(Classification::MA15Plus));
        assert_eq!("R18+".parse(), Ok(Classification::R18Plus));
        assert_eq!(
            "x".parse::<Classification>(),
            Err(UnknownClassification("x".into()))
        );
    }

    #[test]
    fn classification_codes() {
        let codes: Vec<_> = Classification::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, ["G", "PG", "M", "MA15+", "R18+"]);
    }
}
