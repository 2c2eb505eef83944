//! Aggregate trait for value-semantics domain models.

/// Aggregate execution semantics (pure, deterministic).
///
/// `handle(&self, cmd)` decides and applies in one step: it returns the next
/// state as a new value and leaves `self` untouched. Callers keep the old
/// value if they need it (undo, diffing, optimistic UI).
///
/// Aggregates must not perform IO or side effects.
pub trait Aggregate: Sized {
    type Command: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Produce the state that results from applying `command` to `self`.
    fn handle(&self, command: &Self::Command) -> Result<Self, Self::Error>;

    /// Fold a sequence of commands, stopping at the first failure.
    fn replay<'a, I>(&self, commands: I) -> Result<Self, Self::Error>
    where
        Self: Clone,
        I: IntoIterator<Item = &'a Self::Command>,
        Self::Command: 'a,
    {
        commands
            .into_iter()
            .try_fold(self.clone(), |state, command| state.handle(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(u32);

    #[derive(Debug, Clone)]
    enum CounterCommand {
        Increment,
        Fail,
    }

    impl Aggregate for Counter {
        type Command = CounterCommand;
        type Error = &'static str;

        fn handle(&self, command: &Self::Command) -> Result<Self, Self::Error> {
            match command {
                CounterCommand::Increment => Ok(Counter(self.0 + 1)),
                CounterCommand::Fail => Err("boom"),
            }
        }
    }

    #[test]
    fn replay_folds_in_order() {
        let start = Counter(0);
        let commands = vec![CounterCommand::Increment, CounterCommand::Increment];
        assert_eq!(start.replay(&commands), Ok(Counter(2)));
        assert_eq!(start, Counter(0));
    }

    #[test]
    fn replay_stops_at_first_error() {
        let commands = vec![
            CounterCommand::Increment,
            CounterCommand::Fail,
            CounterCommand::Increment,
        ];
        assert_eq!(Counter(0).replay(&commands), Err("boom"));
    }
}
