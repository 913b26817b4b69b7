//! Sexagenary day pillars.
//!
//! Days cycle through 60 stem/branch pairs. Index 0 is 갑자; the stem advances
//! through 10 values and the branch through 12, so only pairs of equal parity
//! occur.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

/// Days in one sexagenary cycle.
pub const CYCLE_LENGTH: i64 = 60;

/// Julian day number of 0000-12-31 (proleptic Gregorian), the day before
/// chrono's day 1 of the common era.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Offset that puts 갑자 at index 0 when applied to a Julian day number.
const JDN_CYCLE_OFFSET: i64 = 49;

/// Heavenly stem (천간).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stem {
    /// 갑
    Gap,
    /// 을
    Eul,
    /// 병
    Byeong,
    /// 정
    Jeong,
    /// 무
    Mu,
    /// 기
    Gi,
    /// 경
    Gyeong,
    /// 신
    Sin,
    /// 임
    Im,
    /// 계
    Gye,
}

impl Stem {
    /// Stems in cycle order.
    pub const ALL: [Self; 10] = [
        Self::Gap,
        Self::Eul,
        Self::Byeong,
        Self::Jeong,
        Self::Mu,
        Self::Gi,
        Self::Gyeong,
        Self::Sin,
        Self::Im,
        Self::Gye,
    ];

    /// Hangul syllable of this stem.
    #[must_use]
    pub const fn hangul(self) -> char {
        match self {
            Self::Gap => '갑',
            Self::Eul => '을',
            Self::Byeong => '병',
            Self::Jeong => '정',
            Self::Mu => '무',
            Self::Gi => '기',
            Self::Gyeong => '경',
            Self::Sin => '신',
            Self::Im => '임',
            Self::Gye => '계',
        }
    }

    /// Looks a stem up by its syllable.
    #[must_use]
    pub fn from_hangul(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|stem| stem.hangul() == c)
    }

    /// Position in the ten-stem cycle.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Earthly branch (지지).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Branch {
    /// 자
    Ja,
    /// 축
    Chuk,
    /// 인
    In,
    /// 묘
    Myo,
    /// 진
    Jin,
    /// 사
    Sa,
    /// 오
    O,
    /// 미
    Mi,
    /// 신
    Sin,
    /// 유
    Yu,
    /// 술
    Sul,
    /// 해
    Hae,
}

impl Branch {
    /// Branches in cycle order.
    pub const ALL: [Self; 12] = [
        Self::Ja,
        Self::Chuk,
        Self::In,
        Self::Myo,
        Self::Jin,
        Self::Sa,
        Self::O,
        Self::Mi,
        Self::Sin,
        Self::Yu,
        Self::Sul,
        Self::Hae,
    ];

    /// Hangul syllable of this branch.
    #[must_use]
    pub const fn hangul(self) -> char {
        match self {
            Self::Ja => '자',
            Self::Chuk => '축',
            Self::In => '인',
            Self::Myo => '묘',
            Self::Jin => '진',
            Self::Sa => '사',
            Self::O => '오',
            Self::Mi => '미',
            Self::Sin => '신',
            Self::Yu => '유',
            Self::Sul => '술',
            Self::Hae => '해',
        }
    }

    /// Looks a branch up by its syllable.
    #[must_use]
    pub fn from_hangul(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|branch| branch.hangul() == c)
    }

    /// Zodiac animal of this branch.
    #[must_use]
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "쥐",
            Self::Chuk => "소",
            Self::In => "호랑이",
            Self::Myo => "토끼",
            Self::Jin => "용",
            Self::Sa => "뱀",
            Self::O => "말",
            Self::Mi => "양",
            Self::Sin => "원숭이",
            Self::Yu => "닭",
            Self::Sul => "개",
            Self::Hae => "돼지",
        }
    }

    /// Position in the twelve-branch cycle.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A stem/branch pair naming one day of the 60-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayPillar {
    /// Heavenly stem
    pub stem: Stem,
    /// Earthly branch
    pub branch: Branch,
}

impl DayPillar {
    /// Pillar at `index` of the cycle (taken modulo 60).
    #[must_use]
    pub const fn from_cycle_index(index: usize) -> Self {
        let index = index % 60;
        Self {
            stem: Stem::ALL[index % 10],
            branch: Branch::ALL[index % 12],
        }
    }

    /// Position of this pillar in the cycle, 0 for 갑자.
    #[must_use]
    pub fn cycle_index(&self) -> usize {
        // Smallest i with i % 10 == stem and i % 12 == branch
        (0..60)
            .find(|i| i % 10 == self.stem.index() && i % 12 == self.branch.index())
            .unwrap_or(0)
    }

    /// Parses a pillar such as "을미" or "을미일주".
    ///
    /// # Errors
    ///
    /// Returns an error unless the text is a stem followed by a branch that
    /// occur together in the cycle.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let syllables = trimmed.strip_suffix("일주").unwrap_or(trimmed);

        let mut chars = syllables.chars();
        let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Day pillar '{text}' must be two Hangul syllables (e.g. 을미)");
        };

        let stem = Stem::from_hangul(s)
            .with_context(|| format!("'{s}' is not a heavenly stem"))?;
        let branch = Branch::from_hangul(b)
            .with_context(|| format!("'{b}' is not an earthly branch"))?;

        if stem.index() % 2 != branch.index() % 2 {
            bail!("'{s}{b}' does not occur in the sexagenary cycle");
        }

        Ok(Self { stem, branch })
    }

    /// Hangul label, e.g. "을미".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl fmt::Display for DayPillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl FromStr for DayPillar {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for DayPillar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Computes the day pillar of a Gregorian date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fortune_palette::fortune::day_pillar;
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(day_pillar(date).label(), "무오");
/// ```
#[must_use]
pub fn day_pillar(date: NaiveDate) -> DayPillar {
    let jdn = i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET;
    let index = (jdn + JDN_CYCLE_OFFSET).rem_euclid(CYCLE_LENGTH);
    // rem_euclid keeps the index in 0..60
    DayPillar::from_cycle_index(usize::try_from(index).unwrap_or(0))
}

/// Parses a birth date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns an error when the text is not a valid calendar date.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid birth date '{text}'. Expected YYYY-MM-DD"))
}

/// Parses a birth time in `HH:MM` form.
///
/// # Errors
///
/// Returns an error when the text is not a valid 24-hour time.
pub fn parse_birth_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .with_context(|| format!("Invalid birth time '{text}'. Expected HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_known_day_pillars() {
        assert_eq!(day_pillar(date(2000, 1, 1)).label(), "무오");
        assert_eq!(day_pillar(date(1900, 1, 1)).label(), "갑술");
    }

    #[test]
    fn test_consecutive_days_advance_one_step() {
        let first = day_pillar(date(2000, 1, 1));
        let second = day_pillar(date(2000, 1, 2));
        assert_eq!((first.cycle_index() + 1) % 60, second.cycle_index());
        assert_eq!(second.label(), "기미");
    }

    #[test]
    fn test_cycle_repeats_every_sixty_days() {
        let start = date(1987, 6, 15);
        let later = start + chrono::Duration::days(60);
        assert_eq!(day_pillar(start), day_pillar(later));
    }

    #[test]
    fn test_cycle_index_round_trip() {
        for i in 0..60 {
            assert_eq!(DayPillar::from_cycle_index(i).cycle_index(), i);
        }
        assert_eq!(DayPillar::from_cycle_index(0).label(), "갑자");
        assert_eq!(DayPillar::from_cycle_index(59).label(), "계해");
    }

    #[test]
    fn test_parse_pillar() {
        let pillar = DayPillar::parse("을미").unwrap();
        assert_eq!(pillar.stem, Stem::Eul);
        assert_eq!(pillar.branch, Branch::Mi);
        assert_eq!(DayPillar::parse("경신일주").unwrap().label(), "경신");
    }

    #[test]
    fn test_parse_pillar_rejects_invalid() {
        assert!(DayPillar::parse("").is_err());
        assert!(DayPillar::parse("을").is_err());
        assert!(DayPillar::parse("을미미").is_err());
        assert!(DayPillar::parse("가나").is_err());
        // 갑 is even, 축 is odd
        assert!(DayPillar::parse("갑축").is_err());
    }

    #[test]
    fn test_parse_birth_date_and_time() {
        assert_eq!(parse_birth_date("1995-03-21").unwrap(), date(1995, 3, 21));
        assert!(parse_birth_date("1995-02-30").is_err());
        assert!(parse_birth_date("21/03/1995").is_err());

        assert_eq!(
            parse_birth_time("07:30").unwrap(),
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );
        assert!(parse_birth_time("25:00").is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&DayPillar::from_cycle_index(31)).unwrap();
        assert_eq!(json, "\"을미\"");
    }
}
