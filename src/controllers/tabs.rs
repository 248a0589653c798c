/// The service catalog is a closed set, so an unknown selection is
/// unrepresentable rather than a runtime error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceId {
    Ponts,
    Voiries,
    Etudes,
}

impl ServiceId {
    pub const ALL: [ServiceId; 3] = [ServiceId::Ponts, ServiceId::Voiries, ServiceId::Etudes];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Ponts => "ponts",
            ServiceId::Voiries => "voiries",
            ServiceId::Etudes => "etudes",
        }
    }
}

/// Selection state of the services panel.
///
/// `selected` follows the user's clicks immediately (card highlight), while
/// `shown` is the pane currently mounted. A selection change flips `leaving`
/// so the old pane can play its exit animation; `finish_exit` then swaps the
/// pane to the latest selection. Only one pane is ever mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabPanel {
    selected: ServiceId,
    shown: ServiceId,
    leaving: bool,
}

impl TabPanel {
    pub fn new() -> Self {
        let first = ServiceId::ALL[0];
        TabPanel {
            selected: first,
            shown: first,
            leaving: false,
        }
    }

    /// Returns `true` when the selection actually changed. Re-selecting the
    /// active id is a no-op and must not re-trigger the transition.
    pub fn select(&mut self, id: ServiceId) -> bool {
        if id == self.selected {
            return false;
        }
        self.selected = id;
        self.leaving = true;
        true
    }

    /// Completes the exit transition: mounts the latest selection.
    pub fn finish_exit(&mut self) {
        self.shown = self.selected;
        self.leaving = false;
    }

    pub fn selected(&self) -> ServiceId {
        self.selected
    }

    pub fn shown(&self) -> ServiceId {
        self.shown
    }

    pub fn leaving(&self) -> bool {
        self.leaving
    }
}

impl Default for TabPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_catalog_entry() {
        let panel = TabPanel::new();
        assert_eq!(panel.selected(), ServiceId::Ponts);
        assert_eq!(panel.shown(), ServiceId::Ponts);
        assert!(!panel.leaving());
    }

    #[test]
    fn switching_runs_exit_then_enter() {
        let mut panel = TabPanel::new();
        assert!(panel.select(ServiceId::Voiries));
        // Old pane still mounted while it exits.
        assert_eq!(panel.selected(), ServiceId::Voiries);
        assert_eq!(panel.shown(), ServiceId::Ponts);
        assert!(panel.leaving());

        panel.finish_exit();
        assert_eq!(panel.shown(), ServiceId::Voiries);
        assert!(!panel.leaving());
    }

    #[test]
    fn reselecting_active_id_is_a_noop() {
        let mut panel = TabPanel::new();
        assert!(panel.select(ServiceId::Voiries));
        panel.finish_exit();
        assert!(!panel.select(ServiceId::Voiries));
        assert!(!panel.leaving());
    }

    #[test]
    fn selection_during_exit_lands_on_latest() {
        let mut panel = TabPanel::new();
        assert!(panel.select(ServiceId::Voiries));
        assert!(panel.select(ServiceId::Etudes));
        panel.finish_exit();
        assert_eq!(panel.shown(), ServiceId::Etudes);
    }

    #[test]
    fn exactly_one_pane_is_current() {
        let mut panel = TabPanel::new();
        for id in [ServiceId::Voiries, ServiceId::Etudes, ServiceId::Ponts] {
            panel.select(id);
            // At every observable instant a single pane is mounted.
            let _only = panel.shown();
            panel.finish_exit();
            assert_eq!(panel.shown(), id);
        }
    }
}
