//! Static page content — the biographical copy shown on the portfolio page.
//!
//! Everything here is defined once at compile time and never mutated. The
//! renderer walks these slices in order, so the order of each array is the
//! order the visitor sees.

// ────────────────────────────────────────────────────────────────────────────
// Record shapes
// ────────────────────────────────────────────────────────────────────────────

/// Icon names understood by the front-end icon set. Rendered as `data-icon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    TrendingUp,
    PieChart,
    LineChart,
    ShieldCheck,
    CheckCircle2,
    Mail,
    Phone,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::TrendingUp => "TrendingUp",
            Icon::PieChart => "PieChart",
            Icon::LineChart => "LineChart",
            Icon::ShieldCheck => "ShieldCheck",
            Icon::CheckCircle2 => "CheckCircle2",
            Icon::Mail => "Mail",
            Icon::Phone => "Phone",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Competency {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub achievements: &'static [&'static str],
}

/// A headline metric such as "15+ / Лет опыта".
#[derive(Debug, Clone, Copy)]
pub struct AchievementMetric {
    pub number: &'static str,
    pub label: &'static str,
}

/// A direct contact link shown under the form.
#[derive(Debug, Clone, Copy)]
pub struct DirectContact {
    pub icon: Icon,
    pub href: &'static str,
    pub text: &'static str,
}

/// Free-standing copy for the hero, about, contact and footer blocks.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub brand: &'static str,
    pub badge: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub contact_heading: &'static str,
    pub contact_lead: &'static str,
    pub direct_contact_hint: &'static str,
    pub footer: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────────────────

pub const PROFILE: Profile = Profile {
    brand: "CFO",
    badge: "Финансовый директор (CFO)",
    headline: "Стратегическое управление финансами",
    tagline: "Помогаю компаниям достигать финансовых целей через консалтинг и стратегическое планирование",
    about: &[
        "Финансовый директор с 15-летним опытом работы в международных корпорациях и технологических компаниях. \
         Специализируюсь на стратегическом финансовом планировании и консалтинге для топ-менеджмента.",
        "Моя миссия — помогать компаниям выстраивать устойчивые финансовые системы, оптимизировать процессы \
         и достигать амбициозных бизнес-целей через грамотное управление ресурсами.",
    ],
    contact_heading: "Запись на консультацию",
    contact_lead: "Заполните форму, и я свяжусь с вами для обсуждения вашего проекта",
    direct_contact_hint: "Или свяжитесь напрямую:",
    footer: "© 2024 CFO Portfolio. Все права защищены.",
};

pub const COMPETENCIES: &[Competency] = &[
    Competency {
        icon: Icon::TrendingUp,
        title: "Финансовое планирование",
        description: "Разработка долгосрочных стратегий и финансовых моделей для устойчивого роста бизнеса",
    },
    Competency {
        icon: Icon::PieChart,
        title: "Бюджетирование",
        description: "Эффективное управление бюджетами и оптимизация финансовых потоков компании",
    },
    Competency {
        icon: Icon::LineChart,
        title: "Финансовый анализ",
        description: "Глубокий анализ показателей и подготовка управленческой отчетности",
    },
    Competency {
        icon: Icon::ShieldCheck,
        title: "Управление рисками",
        description: "Выявление и минимизация финансовых рисков на всех уровнях организации",
    },
];

/// Newest first.
pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        period: "2020 — настоящее время",
        company: "Международная корпорация",
        position: "Финансовый директор (CFO)",
        achievements: &[
            "Увеличение EBITDA на 45%",
            "Оптимизация затрат на 30%",
            "Привлечение инвестиций $50M",
        ],
    },
    ExperienceEntry {
        period: "2015 — 2020",
        company: "Технологическая компания",
        position: "Директор по финансам",
        achievements: &[
            "Выход на безубыточность",
            "Построение финансового отдела",
            "IPO подготовка",
        ],
    },
    ExperienceEntry {
        period: "2010 — 2015",
        company: "Консалтинговая группа",
        position: "Старший консультант",
        achievements: &[
            "20+ успешных проектов",
            "Реструктуризация компаний",
            "M&A сделки",
        ],
    },
];

pub const ACHIEVEMENTS: &[AchievementMetric] = &[
    AchievementMetric {
        number: "15+",
        label: "Лет опыта",
    },
    AchievementMetric {
        number: "$500M+",
        label: "Управляемых активов",
    },
    AchievementMetric {
        number: "50+",
        label: "Реализованных проектов",
    },
    AchievementMetric {
        number: "98%",
        label: "Довольных клиентов",
    },
];

pub const DIRECT_CONTACTS: &[DirectContact] = &[
    DirectContact {
        icon: Icon::Mail,
        href: "mailto:cfo@example.com",
        text: "cfo@example.com",
    },
    DirectContact {
        icon: Icon::Phone,
        href: "tel:+79001234567",
        text: "+7 (900) 123-45-67",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_sequences_have_expected_lengths() {
        assert_eq!(COMPETENCIES.len(), 4);
        assert_eq!(EXPERIENCE.len(), 3);
        assert_eq!(ACHIEVEMENTS.len(), 4);
        assert_eq!(DIRECT_CONTACTS.len(), 2);
    }

    #[test]
    fn test_every_experience_entry_lists_three_achievements() {
        for entry in EXPERIENCE {
            assert_eq!(
                entry.achievements.len(),
                3,
                "{} should list three achievements",
                entry.company
            );
        }
    }

    #[test]
    fn test_experience_is_newest_first() {
        assert!(EXPERIENCE[0].period.starts_with("2020"));
        assert!(EXPERIENCE[2].period.starts_with("2010"));
    }

    #[test]
    fn test_competency_icons_are_distinct() {
        let names: std::collections::HashSet<&str> =
            COMPETENCIES.iter().map(|c| c.icon.name()).collect();
        assert_eq!(names.len(), COMPETENCIES.len());
    }

    #[test]
    fn test_no_blank_copy() {
        assert!(COMPETENCIES
            .iter()
            .all(|c| !c.title.is_empty() && !c.description.is_empty()));
        assert!(ACHIEVEMENTS
            .iter()
            .all(|a| !a.number.is_empty() && !a.label.is_empty()));
        assert!(PROFILE.about.iter().all(|p| !p.trim().is_empty()));
    }
}
