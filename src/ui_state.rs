//! DOM-free state layer for the page: the active-section store, the two
//! tab groups, the non-motor symptom accordion and the mobile menu.
//! Everything here is plain data so it can be unit tested without a browser.

/// The six top-level content sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Overview,
    Causes,
    Symptoms,
    Diagnosis,
    Treatments,
    Future,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Overview,
        SectionId::Causes,
        SectionId::Symptoms,
        SectionId::Diagnosis,
        SectionId::Treatments,
        SectionId::Future,
    ];

    /// The DOM id of the section element, doubling as the anchor fragment
    /// nav links point at (`#overview` etc). Keeping both derived from the
    /// same enum is what keeps nav links and sections in lock-step.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Causes => "causes",
            SectionId::Symptoms => "symptoms",
            SectionId::Diagnosis => "diagnosis",
            SectionId::Treatments => "treatments",
            SectionId::Future => "future",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Overview => "Visión General",
            SectionId::Causes => "Causas y Riesgos",
            SectionId::Symptoms => "Síntomas y Fases",
            SectionId::Diagnosis => "Diagnóstico",
            SectionId::Treatments => "Tratamientos",
            SectionId::Future => "Futuro",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        SectionId::ALL.iter().copied().find(|s| s.anchor() == anchor)
    }
}

/// Single-writer store for the section currently highlighted in the nav.
///
/// Updates are last-write-wins over the stream of "entered the viewport"
/// events. There is deliberately no clearing operation: once a section has
/// been active, scrolling through the gap between two sections keeps the
/// previous one highlighted instead of flickering to nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: Option<SectionId>,
}

impl ActiveSection {
    /// State at page load: the first section is treated as in view.
    pub fn page_load() -> Self {
        Self {
            current: Some(SectionId::Overview),
        }
    }

    pub fn activate(&mut self, id: SectionId) {
        self.current = Some(id);
    }

    pub fn current(self) -> Option<SectionId> {
        self.current
    }

    pub fn is_active(self, id: SectionId) -> bool {
        self.current == Some(id)
    }
}

/// Exclusive selector: exactly one value of `T` is selected at all times.
/// Shared shape for the symptom and treatment tab groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExclusiveSelect<T> {
    selected: T,
}

impl<T: Copy + PartialEq> ExclusiveSelect<T> {
    pub fn new(initial: T) -> Self {
        Self { selected: initial }
    }

    /// Selects `value`, returning whether the selection actually changed.
    /// Re-selecting the current value is a valid no-op, not an error.
    pub fn select(&mut self, value: T) -> bool {
        let changed = self.selected != value;
        self.selected = value;
        changed
    }

    pub fn selected(self) -> T {
        self.selected
    }

    pub fn is_selected(self, value: T) -> bool {
        self.selected == value
    }
}

/// At most one value of `T` open; toggling the open value closes it,
/// toggling any other value replaces it. Used by the accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExclusiveToggle<T> {
    open: Option<T>,
}

impl<T: Copy + PartialEq> ExclusiveToggle<T> {
    pub fn closed() -> Self {
        Self { open: None }
    }

    pub fn toggle(&mut self, value: T) {
        self.open = if self.open == Some(value) {
            None
        } else {
            Some(value)
        };
    }

    pub fn open(self) -> Option<T> {
        self.open
    }

    pub fn is_open(self, value: T) -> bool {
        self.open == Some(value)
    }
}

impl<T: Copy + PartialEq> Default for ExclusiveToggle<T> {
    fn default() -> Self {
        Self::closed()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymptomTab {
    #[default]
    Motor,
    NonMotor,
}

impl SymptomTab {
    pub const ALL: [SymptomTab; 2] = [SymptomTab::Motor, SymptomTab::NonMotor];

    pub fn label(self) -> &'static str {
        match self {
            SymptomTab::Motor => "Síntomas Motores",
            SymptomTab::NonMotor => "Síntomas No Motores",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TreatmentTab {
    #[default]
    Pharma,
    Surgical,
    Support,
}

impl TreatmentTab {
    pub const ALL: [TreatmentTab; 3] = [
        TreatmentTab::Pharma,
        TreatmentTab::Surgical,
        TreatmentTab::Support,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TreatmentTab::Pharma => "Farmacológicos",
            TreatmentTab::Surgical => "Quirúrgicos",
            TreatmentTab::Support => "De Apoyo",
        }
    }
}

/// The four non-motor symptom groups shown as accordion items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionItem {
    Neuropsychiatric,
    SleepDisorders,
    Autonomic,
    Sensory,
}

impl AccordionItem {
    pub const ALL: [AccordionItem; 4] = [
        AccordionItem::Neuropsychiatric,
        AccordionItem::SleepDisorders,
        AccordionItem::Autonomic,
        AccordionItem::Sensory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AccordionItem::Neuropsychiatric => "Neuropsiquiátricos",
            AccordionItem::SleepDisorders => "Trastornos del Sueño",
            AccordionItem::Autonomic => "Disfunción Autonómica",
            AccordionItem::Sensory => "Síntomas Sensoriales",
        }
    }
}

/// Open/closed state of the collapsible mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Unconditional close; safe to call from any navigation action.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_page_load() {
        assert_eq!(ActiveSection::page_load().current(), Some(SectionId::Overview));
        assert_eq!(
            ExclusiveSelect::<SymptomTab>::default().selected(),
            SymptomTab::Motor
        );
        assert_eq!(
            ExclusiveSelect::<TreatmentTab>::default().selected(),
            TreatmentTab::Pharma
        );
        assert_eq!(ExclusiveToggle::<AccordionItem>::default().open(), None);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn anchors_round_trip_and_reject_unknown() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("references"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }

    #[test]
    fn active_section_is_last_write_wins() {
        let mut active = ActiveSection::page_load();
        active.activate(SectionId::Symptoms);
        active.activate(SectionId::Causes);
        assert_eq!(active.current(), Some(SectionId::Causes));
        assert!(active.is_active(SectionId::Causes));
        assert!(!active.is_active(SectionId::Symptoms));
    }

    #[test]
    fn activation_only_moves_between_known_sections() {
        // No clearing operation exists, so once a section has been entered
        // the store can never report "nothing active" again.
        let mut active = ActiveSection::default();
        assert_eq!(active.current(), None);
        active.activate(SectionId::Future);
        for id in SectionId::ALL {
            active.activate(id);
            assert!(active.current().is_some());
        }
    }

    #[test]
    fn reselecting_a_tab_is_a_no_op() {
        let mut tabs = ExclusiveSelect::new(TreatmentTab::Pharma);
        assert!(tabs.select(TreatmentTab::Surgical));
        assert_eq!(tabs.selected(), TreatmentTab::Surgical);
        assert!(!tabs.select(TreatmentTab::Surgical));
        assert_eq!(tabs.selected(), TreatmentTab::Surgical);
    }

    #[test]
    fn symptom_tabs_swap_exclusively() {
        let mut tabs = ExclusiveSelect::<SymptomTab>::default();
        tabs.select(SymptomTab::NonMotor);
        assert!(tabs.is_selected(SymptomTab::NonMotor));
        assert!(!tabs.is_selected(SymptomTab::Motor));
    }

    #[test]
    fn accordion_toggle_round_trips() {
        let mut accordion = ExclusiveToggle::closed();
        accordion.toggle(AccordionItem::Autonomic);
        assert_eq!(accordion.open(), Some(AccordionItem::Autonomic));
        assert_eq!(AccordionItem::Autonomic.label(), "Disfunción Autonómica");
        accordion.toggle(AccordionItem::Autonomic);
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn accordion_keeps_at_most_one_item_open() {
        let mut accordion = ExclusiveToggle::closed();
        accordion.toggle(AccordionItem::Neuropsychiatric);
        accordion.toggle(AccordionItem::Sensory);
        assert_eq!(accordion.open(), Some(AccordionItem::Sensory));
        assert!(!accordion.is_open(AccordionItem::Neuropsychiatric));
    }

    #[test]
    fn menu_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
