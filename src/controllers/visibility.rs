/// One-shot visibility trigger.
///
/// A reveal or count-up starts the first time its element crosses the
/// visibility threshold and never re-arms, so the trigger is a two-state
/// machine rather than a bare bool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    Armed,
    Fired,
}

impl RevealTrigger {
    pub fn new() -> Self {
        RevealTrigger::Armed
    }

    /// Returns `true` only on the transition from `Armed` to `Fired`.
    pub fn fire(&mut self) -> bool {
        match self {
            RevealTrigger::Armed => {
                *self = RevealTrigger::Fired;
                true
            }
            RevealTrigger::Fired => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        matches!(self, RevealTrigger::Fired)
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut trigger = RevealTrigger::new();
        assert!(!trigger.has_fired());
        assert!(trigger.fire());
        assert!(trigger.has_fired());
        assert!(!trigger.fire());
        assert!(!trigger.fire());
        assert!(trigger.has_fired());
    }
}
