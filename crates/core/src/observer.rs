/// A hook called with every event a solver emits.
///
/// Returning `Some(action)` asks the solver to act, with the action type
/// chosen by each solver. `None` leaves the solve untouched, which is all a
/// logging or recording observer ever returns.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that ignores everything.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}
