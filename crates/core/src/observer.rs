/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling logging, early stopping, or custom control policies.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<Obs: Observer<usize, Stop>>(mut observer: Obs, events: usize) -> Option<usize> {
        (1..=events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &usize| (*event == 3).then_some(Stop::Now);
        assert_eq!(drive(observer, 10), Some(3));
    }

    #[test]
    fn borrowed_closure_keeps_state_across_drives() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            None::<Stop>
        };

        assert_eq!(drive(&mut observer, 4), None);
        assert_eq!(drive(&mut observer, 2), None);
        assert_eq!(seen, vec![1, 2, 3, 4, 1, 2]);
    }
}
