//! Concept classifier: free text to a category's primary color.
//!
//! Every category is scored against the lowercased text. A literal key match
//! scores 1.0, a synonym match 0.8, nothing 0. The single best category wins;
//! on equal scores the earlier category in declaration order is kept. When
//! nothing matches, the fallback blue is returned.

use serde::Serialize;
use tracing::debug;

use crate::models::{ConceptCategory, RgbColor, FALLBACK_COLOR};

/// Score for a literal category key found in the text.
pub const KEY_SCORE: f32 = 1.0;

/// Score for one of the category's synonyms found in the text.
pub const SYNONYM_SCORE: f32 = 0.8;

/// Result of classifying a concept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConceptMatch {
    /// Winning category, `None` when nothing matched.
    pub category: Option<ConceptCategory>,
    /// Score of the winning category (0 when nothing matched).
    pub score: f32,
    /// The category's canonical color, or the fallback.
    #[serde(serialize_with = "crate::models::rgb::serialize_as_hex")]
    pub color: RgbColor,
}

impl ConceptMatch {
    /// Whether the fallback color was used.
    pub const fn is_fallback(&self) -> bool {
        self.category.is_none()
    }
}

/// Scores one category against already lowercased text.
pub fn keyword_score(lowered: &str, category: ConceptCategory) -> f32 {
    if lowered.contains(category.key()) {
        return KEY_SCORE;
    }

    if category.synonyms().iter().any(|s| lowered.contains(s)) {
        SYNONYM_SCORE
    } else {
        0.0
    }
}

/// Classifies a concept and reports the winning category and score.
///
/// # Examples
///
/// ```
/// use fortune_palette::color::classify_concept;
/// use fortune_palette::models::ConceptCategory;
///
/// let m = classify_concept("금융 관련 서비스");
/// assert_eq!(m.category, Some(ConceptCategory::Finance));
/// ```
pub fn classify_concept(concept: &str) -> ConceptMatch {
    let lowered = concept.to_lowercase();

    let mut best: Option<ConceptCategory> = None;
    let mut highest = 0.0_f32;

    for category in ConceptCategory::ALL {
        let score = keyword_score(&lowered, category);
        if score > highest {
            highest = score;
            best = Some(category);
        }
    }

    let color = best.map_or(FALLBACK_COLOR, ConceptCategory::primary);
    debug!(
        concept,
        category = best.map(ConceptCategory::key),
        score = highest,
        "classified concept"
    );

    ConceptMatch {
        category: best,
        score: highest,
        color,
    }
}

/// Returns the primary color for a concept.
pub fn classify(concept: &str) -> RgbColor {
    classify_concept(concept).color
}

/// Returns the primary color for a concept as "#RRGGBB".
///
/// Uppercase, matching the spelling of the category tables and the fallback.
pub fn generate_primary_color_from_concept(concept: &str) -> String {
    classify(concept).to_hex_upper()
}

/// Advisory rules shown next to a generated primary color, first match wins.
const DESCRIPTION_RULES: &[(&[&str], &str)] = &[
    (
        &["게임", "game"],
        "게임과 관련된 서비스에는 활기찬 에너지를 표현하는 밝은 컬러가 잘 어울려요.",
    ),
    (
        &["건강", "피트니스", "운동"],
        "건강한 생활을 상징하는 신선하고 활력 있는 컬러로 사용자의 동기부여를 높여줄 수 있어요.",
    ),
    (
        &["음식", "레시피", "요리"],
        "식욕을 돋구는 따뜻한 컬러로 음식과 관련된 서비스의 특성을 잘 살려줄 수 있어요.",
    ),
    (
        &["학습", "교육", "공부"],
        "학습에 집중할 수 있는 차분하면서도 지적인 느낌의 컬러를 추천해드려요.",
    ),
    (
        &["여행", "관광"],
        "모험과 즐거움을 연상시키는 밝고 경쾌한 컬러로 여행의 설렘을 표현해요.",
    ),
    (
        &["패션", "쇼핑"],
        "트렌디하고 세련된 느낌의 컬러로 패션 서비스의 스타일리시함을 강조해요.",
    ),
    (
        &["금융", "투자"],
        "신뢰감과 안정감을 주는 프로페셔널한 컬러로 금융 서비스의 신뢰도를 높여줘요.",
    ),
];

const GENERIC_DESCRIPTION: &str =
    "입력하신 서비스 컨셉에 가장 잘 어울리는 컬러를 분석하여 추천해드렸어요.";

/// Returns the advisory sentence for a concept.
pub fn concept_description(concept: &str) -> &'static str {
    let lowered = concept.to_lowercase();

    DESCRIPTION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map_or(GENERIC_DESCRIPTION, |&(_, description)| description)
}
