//! Reducer trait for immutable, action-driven domain state.

/// Pure state transition over an immutable value.
///
/// - **Decision + evolution**: `reduce(&self, action)` validates the action and
///   returns the next state as a new value.
/// - `self` is never mutated; a rejected action leaves the caller holding the
///   previous state unchanged.
///
/// Implementations must not perform IO or side effects.
pub trait Reducer: Sized {
    type Action: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Compute the state that results from applying `action`.
    fn reduce(&self, action: &Self::Action) -> Result<Self, Self::Error>;

    /// Apply a sequence of actions in order, stopping at the first rejection.
    fn reduce_all<'a, I>(&self, actions: I) -> Result<Self, Self::Error>
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self: Clone,
        Self::Action: 'a,
    {
        let mut state = self.clone();
        for action in actions {
            state = state.reduce(action)?;
        }
        Ok(state)
    }
}
