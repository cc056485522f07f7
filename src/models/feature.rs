use serde::Serialize;

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Users,
    Zap,
    Target,
}

/// CSS custom property carrying a card's background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum Gradient {
    Card1,
    Card2,
    Card3,
}

impl Gradient {
    pub fn token(&self) -> &'static str {
        match self {
            Gradient::Card1 => "--gradient-card-1",
            Gradient::Card2 => "--gradient-card-2",
            Gradient::Card3 => "--gradient-card-3",
        }
    }
}

impl From<Gradient> for &'static str {
    fn from(gradient: Gradient) -> Self {
        gradient.token()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
}

pub static FEATURES_AR: [FeatureCard; 3] = [
    FeatureCard {
        icon: Icon::Users,
        title: "ممكنة",
        description: "دعم ومساندة جهود تمكين قطاع الجمعيات الأهلية",
        gradient: Gradient::Card1,
    },
    FeatureCard {
        icon: Icon::Zap,
        title: "حيوية",
        description: "مرونة عالية واستجابة سريعة في تنفيذ المبادرات والمشروعات",
        gradient: Gradient::Card2,
    },
    FeatureCard {
        icon: Icon::Target,
        title: "مؤثرة",
        description: "إيمان عميق بقضايا الجمعيات الأهلية ومسؤول توفير الدعم والموازنة",
        gradient: Gradient::Card3,
    },
];

pub static FEATURES_EN: [FeatureCard; 3] = [
    FeatureCard {
        icon: Icon::Users,
        title: "Enabling",
        description: "Supporting the efforts to empower the civil society sector",
        gradient: Gradient::Card1,
    },
    FeatureCard {
        icon: Icon::Zap,
        title: "Vibrant",
        description: "Flexible and quick to respond when delivering initiatives and projects",
        gradient: Gradient::Card2,
    },
    FeatureCard {
        icon: Icon::Target,
        title: "Impactful",
        description: "A deep belief in the causes of civil society and in providing balanced support",
        gradient: Gradient::Card3,
    },
];

pub fn features(locale: Locale) -> &'static [FeatureCard; 3] {
    match locale {
        Locale::Ar => &FEATURES_AR,
        Locale::En => &FEATURES_EN,
    }
}
