//! One-shot fade-in of page sections as they scroll into view.

use std::collections::BTreeSet;

use crate::effect::{Effect, Transition};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    sections: usize,
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn sections(&self) -> usize {
        self.sections
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Hide and start observing `count` sections, indexed in document order.
    pub fn register(&self, count: usize) -> Transition<Self> {
        let effects = (0..count)
            .flat_map(|index| [Effect::HideSection(index), Effect::ObserveSection(index)])
            .collect();
        Transition::new(
            RevealTracker {
                sections: count,
                revealed: BTreeSet::new(),
            },
            effects,
        )
    }

    pub fn on_intersection(&self, index: usize, is_intersecting: bool) -> Transition<Self> {
        if !is_intersecting || index >= self.sections || self.revealed.contains(&index) {
            return Transition::unchanged(self.clone());
        }

        let mut next = self.clone();
        next.revealed.insert(index);
        Transition::new(
            next,
            vec![Effect::RevealSection(index), Effect::UnobserveSection(index)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_hides_and_observes_every_section() {
        let step = RevealTracker::default().register(2);
        assert_eq!(step.next.sections(), 2);
        assert_eq!(
            step.effects,
            vec![
                Effect::HideSection(0),
                Effect::ObserveSection(0),
                Effect::HideSection(1),
                Effect::ObserveSection(1),
            ]
        );
    }

    #[test]
    fn reveal_is_one_shot() {
        let tracker = RevealTracker::default().register(3).next;
        let first = tracker.on_intersection(1, true);
        assert_eq!(
            first.effects,
            vec![Effect::RevealSection(1), Effect::UnobserveSection(1)]
        );
        assert!(first.next.is_revealed(1));

        let again = first.next.on_intersection(1, true);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn leaving_or_unknown_sections_are_ignored() {
        let tracker = RevealTracker::default().register(1).next;
        assert!(tracker.on_intersection(0, false).effects.is_empty());
        assert!(tracker.on_intersection(7, true).effects.is_empty());
        assert!(!tracker.is_revealed(0));
    }
}
