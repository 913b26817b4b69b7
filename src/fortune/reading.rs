//! Lookups built on a day pillar: element, color, character, compatibility.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use super::pillar::{day_pillar, Branch, DayPillar, Stem};

/// Label used when a pillar's stem is not recognised.
pub const UNKNOWN_ELEMENT: &str = "미상";

/// Color used when the element is unknown.
pub const UNKNOWN_ELEMENT_COLOR: &str = "#eee";

/// Animal used when a pillar's branch is not recognised.
pub const UNKNOWN_ANIMAL: &str = "동물";

/// The five elements (오행).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 목
    Wood,
    /// 화
    Fire,
    /// 토
    Earth,
    /// 금
    Metal,
    /// 수
    Water,
}

impl Element {
    /// Element governed by a stem; stems come in pairs.
    #[must_use]
    pub const fn of_stem(stem: Stem) -> Self {
        match stem {
            Stem::Gap | Stem::Eul => Self::Wood,
            Stem::Byeong | Stem::Jeong => Self::Fire,
            Stem::Mu | Stem::Gi => Self::Earth,
            Stem::Gyeong | Stem::Sin => Self::Metal,
            Stem::Im | Stem::Gye => Self::Water,
        }
    }

    /// Hangul label, e.g. "목".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Display color of the element.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Wood => "#4CAF50",
            Self::Fire => "#FF7043",
            Self::Earth => "#FFD54F",
            Self::Metal => "#90A4AE",
            Self::Water => "#42A5F5",
        }
    }

    /// Color adjective used in character names.
    #[must_use]
    pub const fn color_word(self) -> &'static str {
        match self {
            Self::Wood => "푸른",
            Self::Fire => "붉은",
            Self::Earth => "노란",
            Self::Metal => "하얀",
            Self::Water => "검은",
        }
    }
}

/// Everything after the first syllable of a pillar label.
pub fn day_branch(pillar: &str) -> &str {
    pillar
        .char_indices()
        .nth(1)
        .map_or("", |(offset, _)| &pillar[offset..])
}

/// Element of a pillar label, judged by its first syllable.
pub fn five_element(pillar: &str) -> Option<Element> {
    pillar
        .chars()
        .next()
        .and_then(Stem::from_hangul)
        .map(Element::of_stem)
}

/// Element label of a pillar, "미상" when unknown.
pub fn element_label(element: Option<Element>) -> &'static str {
    element.map_or(UNKNOWN_ELEMENT, Element::label)
}

/// Element color of a pillar, "#eee" when unknown.
pub fn element_color(element: Option<Element>) -> &'static str {
    element.map_or(UNKNOWN_ELEMENT_COLOR, Element::color)
}

/// Zodiac character of a pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    /// Name such as "푸른 양"
    pub name: String,
    /// Image path such as "/characters/양.png"
    pub image_url: String,
}

/// Builds the character of a pillar label.
///
/// The branch must be exactly one syllable to name an animal; an unknown
/// element leaves the color word empty.
pub fn character(pillar: &str) -> Character {
    let mut branch = day_branch(pillar).chars();
    let animal = match (branch.next(), branch.next()) {
        (Some(c), None) => Branch::from_hangul(c).map_or(UNKNOWN_ANIMAL, Branch::animal),
        _ => UNKNOWN_ANIMAL,
    };
    let color = five_element(pillar).map_or("", Element::color_word);

    Character {
        name: format!("{color} {animal}"),
        image_url: format!("/characters/{animal}.png"),
    }
}

/// Pillars listed as the best match.
pub const BEST_MATCHES: [&str; 5] = ["경신일주", "무신일주", "병신일주", "무술일주", "병오일주"];

/// Pillars listed as a good match.
pub const GOOD_MATCHES: [&str; 3] = ["정축일주", "병술일주", "갑진일주"];

/// Pillars listed as the worst match.
pub const WORST_MATCHES: [&str; 2] = ["임오일주", "계유일주"];

/// Compatibility tier of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    /// Listed as best
    Best,
    /// Listed as good
    Good,
    /// Not listed
    Normal,
    /// Listed as worst
    Worst,
}

impl Compatibility {
    /// Pillars of this tier, empty for `Normal`.
    #[must_use]
    pub const fn pillars(self) -> &'static [&'static str] {
        match self {
            Self::Best => &BEST_MATCHES,
            Self::Good => &GOOD_MATCHES,
            Self::Worst => &WORST_MATCHES,
            Self::Normal => &[],
        }
    }
}

/// Looks up the tier of a pillar; "경신" and "경신일주" are equivalent.
pub fn compatibility(pillar: &str) -> Compatibility {
    let trimmed = pillar.trim();
    let bare = trimmed.strip_suffix("일주").unwrap_or(trimmed);
    let listed = |list: &[&str]| {
        list.iter()
            .any(|&entry| entry.strip_suffix("일주").unwrap_or(entry) == bare)
    };

    [Compatibility::Best, Compatibility::Good, Compatibility::Worst]
        .into_iter()
        .find(|tier| listed(tier.pillars()))
        .unwrap_or(Compatibility::Normal)
}

/// Tier lists shown next to a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchLists {
    /// Best matches
    pub best: &'static [&'static str],
    /// Good matches
    pub good: &'static [&'static str],
    /// Worst matches
    pub worst: &'static [&'static str],
}

impl Default for MatchLists {
    fn default() -> Self {
        Self {
            best: Compatibility::Best.pillars(),
            good: Compatibility::Good.pillars(),
            worst: Compatibility::Worst.pillars(),
        }
    }
}

/// A complete reading for one birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneReading {
    /// Birth date
    pub birth_date: NaiveDate,
    /// Birth time, if given; it does not move the day
    pub birth_time: Option<NaiveTime>,
    /// Day pillar
    pub day_pillar: DayPillar,
    /// Branch syllable
    pub day_branch: String,
    /// Element
    pub element: Element,
    /// Element label, e.g. "토"
    pub element_label: &'static str,
    /// Element color
    pub element_color: &'static str,
    /// Zodiac character
    pub character: Character,
    /// Tier of this pillar itself
    pub compatibility: Compatibility,
    /// Static tier lists
    pub matches: MatchLists,
}

impl FortuneReading {
    /// Computes the reading for a birth date and optional time.
    #[must_use]
    pub fn for_birth(birth_date: NaiveDate, birth_time: Option<NaiveTime>) -> Self {
        let pillar = day_pillar(birth_date);
        let label = pillar.label();
        let element = Element::of_stem(pillar.stem);

        debug!(%birth_date, pillar = %label, "computed day pillar");

        Self {
            birth_date,
            birth_time,
            day_pillar: pillar,
            day_branch: day_branch(&label).to_string(),
            element,
            element_label: element.label(),
            element_color: element.color(),
            character: character(&label),
            compatibility: compatibility(&label),
            matches: MatchLists::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_branch() {
        assert_eq!(day_branch("을미"), "미");
        assert_eq!(day_branch("을"), "");
        assert_eq!(day_branch(""), "");
    }

    #[test]
    fn test_five_element() {
        assert_eq!(five_element("갑자"), Some(Element::Wood));
        assert_eq!(five_element("정축"), Some(Element::Fire));
        assert_eq!(five_element("기미"), Some(Element::Earth));
        assert_eq!(five_element("신유"), Some(Element::Metal));
        assert_eq!(five_element("계해"), Some(Element::Water));
        assert_eq!(element_label(five_element("X")), "미상");
    }

    #[test]
    fn test_element_color() {
        assert_eq!(element_color(Some(Element::Wood)), "#4CAF50");
        assert_eq!(element_color(Some(Element::Water)), "#42A5F5");
        assert_eq!(element_color(None), "#eee");
    }

    #[test]
    fn test_character() {
        let c = character("을미");
        assert_eq!(c.name, "푸른 양");
        assert_eq!(c.image_url, "/characters/양.png");
        assert_eq!(character("경인").name, "하얀 호랑이");
    }

    #[test]
    fn test_character_unknown_parts() {
        assert_eq!(character("X미").name, " 양");
        assert_eq!(character("갑").name, "푸른 동물");
        assert_eq!(character("갑").image_url, "/characters/동물.png");
    }

    #[test]
    fn test_compatibility_tiers() {
        assert_eq!(compatibility("경신"), Compatibility::Best);
        assert_eq!(compatibility("병오일주"), Compatibility::Best);
        assert_eq!(compatibility("갑진"), Compatibility::Good);
        assert_eq!(compatibility("계유"), Compatibility::Worst);
        assert_eq!(compatibility("을미"), Compatibility::Normal);
    }

    #[test]
    fn test_reading_for_known_date() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let reading = FortuneReading::for_birth(date, None);
        assert_eq!(reading.day_pillar.label(), "무오");
        assert_eq!(reading.day_branch, "오");
        assert_eq!(reading.element, Element::Earth);
        assert_eq!(reading.element_color, "#FFD54F");
        assert_eq!(reading.character.name, "노란 말");
        assert_eq!(reading.compatibility, Compatibility::Normal);
    }

    #[test]
    fn test_birth_time_does_not_move_day() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        let late = NaiveTime::from_hms_opt(23, 30, 0);
        assert_eq!(
            FortuneReading::for_birth(date, None).day_pillar,
            FortuneReading::for_birth(date, late).day_pillar
        );
    }

    #[test]
    fn test_reading_json_shape() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let json = serde_json::to_value(FortuneReading::for_birth(date, None)).unwrap();
        assert_eq!(json["day_pillar"], "무오");
        assert_eq!(json["birth_date"], "2000-01-01");
        assert!(json["birth_time"].is_null());
        assert_eq!(json["character"]["image_url"], "/characters/말.png");
        assert_eq!(json["matches"]["worst"][0], "임오일주");
    }
}
