use crate::config::{NAVBAR_SCROLL_THRESHOLD, SECTION_HEADER_COMPENSATION};

/// Vertical extent of one `section[id]`, measured in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, offset: f64) -> bool {
        let top = self.top - SECTION_HEADER_COMPENSATION;
        offset >= top && offset < top + self.height
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// Id of the section the visitor is reading. Sections are given in document
/// order and the last one containing the offset wins.
pub fn active_section(offset: f64, sections: &[SectionExtent]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(offset))
        .last()
        .map(|section| section.id.as_str())
}

pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(fragment), Some(id)) if !fragment.is_empty() => fragment == id,
        _ => false,
    }
}

/// Open/closed state of the collapsed mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn page() -> Vec<SectionExtent> {
        vec![
            SectionExtent::new("home", 0.0, 700.0),
            SectionExtent::new("about", 700.0, 600.0),
            SectionExtent::new("portfolio", 1300.0, 900.0),
            SectionExtent::new("contact", 2200.0, 500.0),
        ]
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(100.0, false)]
    #[case(100.5, true)]
    #[case(2500.0, true)]
    fn scrolled_only_past_threshold(#[case] offset: f64, #[case] expected: bool) {
        assert_eq!(is_scrolled(offset), expected);
    }

    #[rstest]
    #[case(0.0, Some("home"))]
    #[case(549.0, Some("home"))]
    #[case(550.0, Some("about"))]
    #[case(1200.0, Some("portfolio"))]
    #[case(2100.0, Some("contact"))]
    #[case(2549.0, Some("contact"))]
    #[case(2550.0, None)]
    fn picks_section_under_compensated_offset(
        #[case] offset: f64,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(active_section(offset, &page()), expected);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_later_one() {
        let sections = vec![
            SectionExtent::new("hero", 0.0, 2000.0),
            SectionExtent::new("stats", 600.0, 300.0),
        ];
        assert_eq!(active_section(500.0, &sections), Some("stats"));
        assert_eq!(active_section(800.0, &sections), Some("hero"));
    }

    #[test]
    fn no_sections_means_no_active_link() {
        assert_eq!(active_section(300.0, &[]), None);
    }

    #[test]
    fn at_most_one_link_is_active() {
        let links = ["#home", "#about", "#portfolio", "#contact"];
        for offset in (0..2800).step_by(25) {
            let sections = page();
            let active = active_section(offset as f64, &sections);
            let count = links
                .iter()
                .filter(|href| is_link_active(href, active))
                .count();
            assert!(count <= 1, "offset {offset} marked {count} links");
            assert_eq!(count == 1, active.is_some());
        }
    }

    #[test]
    fn link_matching_needs_a_fragment() {
        assert!(is_link_active("#about", Some("about")));
        assert!(!is_link_active("about", Some("about")));
        assert!(!is_link_active("#about", None));
        assert!(!is_link_active("#", Some("")));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());
        assert!(!menu.closed().is_open());
        assert!(!MenuState::default().closed().is_open());
    }
}
