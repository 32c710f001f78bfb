//! One-shot viewport-visibility observation.
//!
//! [`VisibilityObserver`] is the seam between page logic and whatever reports
//! visibility: `IntersectionObserver` in the browser, synthetic entries in
//! tests. [`OneShotObserver`] is the bookkeeping both share: a target fires
//! its callback on the first intersecting entry and is then dropped from
//! observation for good.

/// Callback invoked with a target the first time it becomes visible.
pub type EnterCallback<T> = Box<dyn FnMut(&T)>;

pub trait VisibilityObserver<T> {
    /// Start watching `target`. Observing the same target twice is a no-op.
    fn observe(&mut self, target: T);

    /// Install the callback fired on each target's first visible entry.
    fn on_enter(&mut self, callback: EnterCallback<T>);
}

/// Lifecycle of an observed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Observed,
    /// Terminal: the enter callback has run and observation stopped.
    Revealed,
}

pub struct OneShotObserver<T> {
    targets: Vec<(T, RevealState)>,
    callback: Option<EnterCallback<T>>,
}

impl<T> Default for OneShotObserver<T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            callback: None,
        }
    }
}

impl<T: PartialEq> OneShotObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, target: &T) -> RevealState {
        self.targets
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, s)| *s)
            .unwrap_or(RevealState::Unobserved)
    }

    /// Number of targets still waiting for their first visible entry.
    pub fn pending(&self) -> usize {
        self.targets
            .iter()
            .filter(|(_, s)| *s == RevealState::Observed)
            .count()
    }

    pub fn revealed(&self) -> usize {
        self.targets
            .iter()
            .filter(|(_, s)| *s == RevealState::Revealed)
            .count()
    }

    /// Feed one visibility entry. Returns `true` when this entry triggered the
    /// target, in which case the caller must stop platform observation of it.
    pub fn intersect(&mut self, target: &T, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(slot) = self
            .targets
            .iter_mut()
            .find(|(t, s)| t == target && *s == RevealState::Observed)
        else {
            return false;
        };
        slot.1 = RevealState::Revealed;
        log::debug!("target entered view, {} pending", self.pending());
        if let Some(cb) = self.callback.as_mut() {
            cb(target);
        }
        true
    }

    /// Feed a batch of entries; returns how many targets fired.
    pub fn dispatch<'a, I>(&mut self, entries: I) -> usize
    where
        T: 'a,
        I: IntoIterator<Item = (&'a T, bool)>,
    {
        entries
            .into_iter()
            .filter(|(target, visible)| self.intersect(target, *visible))
            .count()
    }
}

impl<T: PartialEq> VisibilityObserver<T> for OneShotObserver<T> {
    fn observe(&mut self, target: T) {
        if self.state(&target) == RevealState::Unobserved {
            self.targets.push((target, RevealState::Observed));
        }
    }

    fn on_enter(&mut self, callback: EnterCallback<T>) {
        self.callback = Some(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fires_once_per_target() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut obs = OneShotObserver::new();
        let sink = hits.clone();
        obs.on_enter(Box::new(move |t: &&str| sink.borrow_mut().push(*t)));
        obs.observe("a");
        obs.observe("b");

        assert_eq!(obs.dispatch([(&"a", true), (&"b", false)]), 1);
        assert_eq!(obs.dispatch([(&"a", true), (&"b", true)]), 1);
        assert_eq!(obs.dispatch([(&"a", true), (&"b", true)]), 0);
        assert_eq!(*hits.borrow(), vec!["a", "b"]);
        assert_eq!(obs.state(&"a"), RevealState::Revealed);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut obs: OneShotObserver<u32> = OneShotObserver::new();
        assert!(!obs.intersect(&7, true));
        assert_eq!(obs.state(&7), RevealState::Unobserved);
    }
}
