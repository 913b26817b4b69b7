//! Concept categories used to pick a primary color from free text.

use serde::Serialize;

use crate::models::RgbColor;

/// Color returned when a concept matches no category.
pub const FALLBACK_COLOR: RgbColor = RgbColor::new(0x21, 0x96, 0xF3);

/// A fixed concept category.
///
/// Declaration order matters: the classifier scans categories in this order
/// and keeps the first of equally scored matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptCategory {
    /// Banking, investment, money
    Finance,
    /// Companies, commerce, management
    Business,
    /// Technology and IT
    Tech,
    /// Innovation and the future
    Innovation,
    /// Health and wellbeing
    Health,
    /// Hospitals and treatment
    Medical,
    /// Schools and lectures
    Education,
    /// Study and knowledge
    Learning,
    /// Food and cooking
    Food,
    /// Restaurants and dining out
    Restaurant,
    /// Art and design
    Art,
    /// Creative work
    Creative,
    /// Nature and the environment
    Nature,
    /// Sustainability
    Eco,
    /// Clothing and style
    Fashion,
    /// Cosmetics and makeup
    Beauty,
    /// Sports and competition
    Sports,
    /// Workouts and gyms
    Fitness,
}

impl ConceptCategory {
    /// All categories in scan order.
    pub const ALL: [Self; 18] = [
        Self::Finance,
        Self::Business,
        Self::Tech,
        Self::Innovation,
        Self::Health,
        Self::Medical,
        Self::Education,
        Self::Learning,
        Self::Food,
        Self::Restaurant,
        Self::Art,
        Self::Creative,
        Self::Nature,
        Self::Eco,
        Self::Fashion,
        Self::Beauty,
        Self::Sports,
        Self::Fitness,
    ];

    /// The category key, also matched literally against concept text.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Business => "business",
            Self::Tech => "tech",
            Self::Innovation => "innovation",
            Self::Health => "health",
            Self::Medical => "medical",
            Self::Education => "education",
            Self::Learning => "learning",
            Self::Food => "food",
            Self::Restaurant => "restaurant",
            Self::Art => "art",
            Self::Creative => "creative",
            Self::Nature => "nature",
            Self::Eco => "eco",
            Self::Fashion => "fashion",
            Self::Beauty => "beauty",
            Self::Sports => "sports",
            Self::Fitness => "fitness",
        }
    }

    /// Looks a category up by key (case-insensitive).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Candidate colors, canonical primary first.
    #[must_use]
    pub const fn candidates(self) -> [RgbColor; 4] {
        #[allow(clippy::cast_possible_truncation)]
        const fn c(hex: u32) -> RgbColor {
            RgbColor::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
        }

        match self {
            Self::Finance => [c(0x1E3D59), c(0x2D5DA1), c(0x0066CC), c(0x17458F)],
            Self::Business => [c(0x1B365D), c(0x1E4477), c(0x0A2F5C), c(0x2E5C8A)],
            Self::Tech => [c(0x2962FF), c(0x2979FF), c(0x2196F3), c(0x03A9F4)],
            Self::Innovation => [c(0x00B0FF), c(0x0091EA), c(0x40C4FF), c(0x80D8FF)],
            Self::Health => [c(0x43A047), c(0x388E3C), c(0x66BB6A), c(0x4CAF50)],
            Self::Medical => [c(0x039BE5), c(0x0288D1), c(0x29B6F6), c(0x03A9F4)],
            Self::Education => [c(0x5E35B1), c(0x512DA8), c(0x673AB7), c(0x7E57C2)],
            Self::Learning => [c(0x3949AB), c(0x303F9F), c(0x3F51B5), c(0x5C6BC0)],
            Self::Food => [c(0xEF5350), c(0xF44336), c(0xE57373), c(0xFF8A80)],
            Self::Restaurant => [c(0xFB8C00), c(0xF57C00), c(0xFFB74D), c(0xFFE0B2)],
            Self::Art => [c(0x8E24AA), c(0x6A1B9A), c(0xAB47BC), c(0xCE93D8)],
            Self::Creative => [c(0xFF4081), c(0xF50057), c(0xFF80AB), c(0xFF4081)],
            Self::Nature => [c(0x43A047), c(0x388E3C), c(0x66BB6A), c(0x81C784)],
            Self::Eco => [c(0x009688), c(0x00796B), c(0x4DB6AC), c(0x80CBC4)],
            Self::Fashion => [c(0xEC407A), c(0xD81B60), c(0xF06292), c(0xFF80AB)],
            Self::Beauty => [c(0xFF80AB), c(0xFF4081), c(0xF50057), c(0xC51162)],
            Self::Sports => [c(0xFF3D00), c(0xDD2C00), c(0xFF6E40), c(0xFF9E80)],
            Self::Fitness => [c(0xF57C00), c(0xEF6C00), c(0xFB8C00), c(0xFFA726)],
        }
    }

    /// The canonical primary color of this category.
    #[must_use]
    pub const fn primary(self) -> RgbColor {
        self.candidates()[0]
    }

    /// Korean synonym keywords.
    ///
    /// Compared as written against the lowercased concept text.
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Finance => &["금융", "은행", "투자", "돈", "자산", "금전"],
            Self::Business => &["비즈니스", "기업", "회사", "상업", "경영"],
            Self::Tech => &["기술", "IT", "테크", "디지털", "온라인"],
            Self::Innovation => &["혁신", "창의", "미래", "첨단"],
            Self::Health => &["건강", "웰빙", "운동", "의료"],
            Self::Medical => &["의료", "병원", "진료", "치료"],
            Self::Education => &["교육", "학습", "학교", "강의"],
            Self::Learning => &["학습", "공부", "교육", "지식"],
            Self::Food => &["음식", "요리", "맛집", "레스토랑", "식당"],
            Self::Restaurant => &["식당", "레스토랑", "요리", "외식"],
            Self::Art => &["예술", "미술", "창작", "디자인"],
            Self::Creative => &["창의", "창작", "디자인", "예술"],
            Self::Nature => &["자연", "환경", "생태", "친환경"],
            Self::Eco => &["환경", "친환경", "생태", "지속가능"],
            Self::Fashion => &["패션", "의류", "옷", "스타일"],
            Self::Beauty => &["뷰티", "화장품", "미용", "메이크업"],
            Self::Sports => &["스포츠", "운동", "경기", "체육"],
            Self::Fitness => &["피트니스", "운동", "헬스", "건강"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        let mut keys: Vec<&str> = ConceptCategory::ALL.iter().map(|c| c.key()).collect();
        assert!(keys.iter().all(|k| k.chars().all(|c| c.is_ascii_lowercase())));
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ConceptCategory::ALL.len());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ConceptCategory::from_key("finance"), Some(ConceptCategory::Finance));
        assert_eq!(ConceptCategory::from_key("ECO"), Some(ConceptCategory::Eco));
        assert_eq!(ConceptCategory::from_key("travel"), None);
    }

    #[test]
    fn test_primary_is_first_candidate() {
        assert_eq!(ConceptCategory::Finance.primary().to_hex_upper(), "#1E3D59");
        assert_eq!(ConceptCategory::Fitness.primary().to_hex_upper(), "#F57C00");
        for category in ConceptCategory::ALL {
            assert_eq!(category.primary(), category.candidates()[0]);
        }
    }

    #[test]
    fn test_every_category_has_synonyms() {
        for category in ConceptCategory::ALL {
            assert!(!category.synonyms().is_empty(), "{} has no synonyms", category.key());
        }
    }

    #[test]
    fn test_fallback_color() {
        assert_eq!(FALLBACK_COLOR.to_hex_upper(), "#2196F3");
    }
}
