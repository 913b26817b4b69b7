//! Day pillar fortune readings.
//!
//! A birth date maps to one day of the 60-day stem/branch cycle. The stem
//! gives the element and its color, the branch gives the zodiac animal.

pub mod pillar;
pub mod reading;

pub use pillar::{day_pillar, parse_birth_date, parse_birth_time, Branch, DayPillar, Stem};
pub use reading::{
    character, compatibility, day_branch, element_color, element_label, five_element, Character,
    Compatibility, Element, FortuneReading, MatchLists,
};
