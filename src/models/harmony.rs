//! Harmonic relationships between a primary color and its secondaries.

use serde::Serialize;

/// A hue-rotation relationship in HSL space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Harmony {
    /// Opposite hue (+180°)
    #[serde(rename = "complementary")]
    Complementary,
    /// First triadic point (+120°)
    #[serde(rename = "triadic-120")]
    TriadicA,
    /// Second triadic point (+240°)
    #[serde(rename = "triadic-240")]
    TriadicB,
    /// Neighbouring hue (+60°)
    #[serde(rename = "analogous-60")]
    Analogous,
}

impl Harmony {
    /// All relationships in output order.
    pub const ALL: [Self; 4] = [
        Self::Complementary,
        Self::TriadicA,
        Self::TriadicB,
        Self::Analogous,
    ];

    /// Hue rotation in degrees.
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Complementary => 180.0,
            Self::TriadicA => 120.0,
            Self::TriadicB => 240.0,
            Self::Analogous => 60.0,
        }
    }

    /// Stable machine-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::TriadicA => "triadic-120",
            Self::TriadicB => "triadic-240",
            Self::Analogous => "analogous-60",
        }
    }

    /// Display name used next to the swatch.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Complementary => "보조1",
            Self::TriadicA => "보조2",
            Self::TriadicB => "보조3",
            Self::Analogous => "보조4",
        }
    }

    /// One-sentence explanation of the relationship.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Complementary => {
                "메인 컬러와 보색 관계로, 강력한 대비를 이루어 시각적 긴장감을 줍니다."
            }
            Self::TriadicA => "메인 컬러와 120도 각도의 삼각 배색으로, 균형잡힌 조화를 이룹니다.",
            Self::TriadicB => "메인 컬러와 240도 각도의 삼각 배색으로, 안정적인 구조를 만듭니다.",
            Self::Analogous => "메인 컬러와 유사한 색상으로, 자연스러운 그라데이션 효과를 줍니다.",
        }
    }
}
