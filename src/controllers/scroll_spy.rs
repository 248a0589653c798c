/// What made the mobile menu close. Only used for logging; every reason
/// forces the same transition to closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    OutsideClick,
    EscapeKey,
    LinkActivated,
}

impl CloseReason {
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::OutsideClick => "outside click",
            CloseReason::EscapeKey => "escape key",
            CloseReason::LinkActivated => "link activated",
        }
    }
}

/// Navbar view state: which section anchor is highlighted, whether the
/// mobile menu is open and whether the page has scrolled past the
/// elevation threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    anchors: &'static [&'static str],
    active: &'static str,
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    /// `anchors` is the full set of observed section ids; the first one is
    /// active until the spy reports otherwise (and stays active if the
    /// observer never comes up).
    pub fn new(anchors: &'static [&'static str]) -> Self {
        assert!(!anchors.is_empty(), "scroll spy needs at least one section");
        NavState {
            anchors,
            active: anchors[0],
            menu_open: false,
            scrolled: false,
        }
    }

    /// A section crossed into the intersecting band. When several sections
    /// intersect at once the most recently reported one wins. Ids outside
    /// the known set are ignored, which keeps `active` always valid.
    pub fn section_entered(&mut self, id: &str) -> bool {
        match self.anchors.iter().find(|anchor| **anchor == id) {
            Some(anchor) if *anchor != self.active => {
                self.active = anchor;
                true
            }
            _ => false,
        }
    }

    /// Tracks the elevation flag against the scroll offset. No hysteresis:
    /// scrolling back above the threshold clears it.
    pub fn scroll_offset(&mut self, y: f64, threshold: f64) -> bool {
        let scrolled = y > threshold;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Returns `true` when the menu was open and is now closed.
    pub fn close_menu(&mut self, _reason: CloseReason) -> bool {
        if !self.menu_open {
            return false;
        }
        self.menu_open = false;
        true
    }

    pub fn active_anchor(&self) -> &'static str {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHORS: &[&str] = &["home", "about", "services", "projects", "quote"];

    #[test]
    fn first_anchor_active_by_default() {
        let nav = NavState::new(ANCHORS);
        assert_eq!(nav.active_anchor(), "home");
        assert!(!nav.menu_open());
        assert!(!nav.scrolled());
    }

    #[test]
    fn single_intersection_sets_that_section() {
        let mut nav = NavState::new(ANCHORS);
        assert!(nav.section_entered("services"));
        assert_eq!(nav.active_anchor(), "services");
    }

    #[test]
    fn last_reported_section_wins() {
        let mut nav = NavState::new(ANCHORS);
        nav.section_entered("about");
        nav.section_entered("projects");
        assert_eq!(nav.active_anchor(), "projects");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut nav = NavState::new(ANCHORS);
        nav.section_entered("about");
        assert!(!nav.section_entered("not-a-section"));
        assert_eq!(nav.active_anchor(), "about");
    }

    #[test]
    fn reporting_the_active_section_is_not_a_change() {
        let mut nav = NavState::new(ANCHORS);
        assert!(nav.section_entered("about"));
        assert!(!nav.section_entered("about"));
    }

    #[test]
    fn scrolled_flag_has_no_hysteresis() {
        let mut nav = NavState::new(ANCHORS);
        assert!(nav.scroll_offset(9.0, 8.0));
        assert!(nav.scrolled());
        assert!(!nav.scroll_offset(120.0, 8.0));
        assert!(nav.scroll_offset(0.0, 8.0));
        assert!(!nav.scrolled());
    }

    #[test]
    fn every_close_reason_closes_an_open_menu() {
        for reason in [
            CloseReason::OutsideClick,
            CloseReason::EscapeKey,
            CloseReason::LinkActivated,
        ] {
            let mut nav = NavState::new(ANCHORS);
            nav.toggle_menu();
            assert!(nav.menu_open());
            assert!(nav.close_menu(reason));
            assert!(!nav.menu_open());
            // Closing an already-closed menu reports no transition.
            assert!(!nav.close_menu(reason));
        }
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut nav = NavState::new(ANCHORS);
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }
}
