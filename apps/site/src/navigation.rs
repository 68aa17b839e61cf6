/// Page sections, in the order they appear in the nav bar and on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Competencies,
    Experience,
    Achievements,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Competencies,
        Section::Experience,
        Section::Achievements,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Competencies => "competencies",
            Section::Experience => "experience",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    /// Nav bar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::About => "Обо мне",
            Section::Competencies => "Компетенции",
            Section::Experience => "Опыт",
            Section::Achievements => "Достижения",
            Section::Contact => "Контакты",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// The "currently active section" marker used for nav highlighting.
///
/// Always equals the last selected section, or `Home` before any selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    active: Section,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: Section::Home,
        }
    }
}

impl NavState {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}
