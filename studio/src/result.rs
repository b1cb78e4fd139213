//! Command result store
//!
//! Holds the most recent result grid of an arbitrary executed command,
//! independent of any table cache. Replaced wholesale on each execution;
//! no history of past results is kept.

use tabula_link::CommandResult;

/// Most recent result of an executed command.
#[derive(Debug, Default)]
pub struct CommandResultStore {
    result: CommandResult,
}

impl CommandResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored result wholesale.
    pub fn set_result(&mut self, result: CommandResult) {
        self.result = result;
    }

    /// Borrow the current result.
    pub fn result(&self) -> &CommandResult {
        &self.result
    }

    /// Apply a caller-supplied projection to the current result without
    /// mutating stored state.
    ///
    /// The grid carries no column metadata; any typed or labeled view
    /// must come through an explicit projection like this one.
    pub fn result_with<F, T>(&self, projection: F) -> T
    where
        F: FnOnce(&CommandResult) -> T,
    {
        projection(&self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> CommandResult {
        CommandResult {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_set_result_replaces_wholesale() {
        let mut store = CommandResultStore::new();
        assert!(store.result().is_empty());

        store.set_result(grid(&[&["1", "alice"], &["2", "bob"]]));
        assert_eq!(store.result().len(), 2);

        store.set_result(grid(&[&["3", "carol"]]));
        assert_eq!(store.result().rows, vec![vec!["3", "carol"]]);
    }

    #[test]
    fn test_projection_does_not_mutate() {
        let mut store = CommandResultStore::new();
        store.set_result(grid(&[&["1", "alice"]]));

        let first_cells: Vec<String> = store.result_with(|r| {
            r.iter().filter_map(|row| row.first().cloned()).collect()
        });

        assert_eq!(first_cells, vec!["1"]);
        assert_eq!(store.result().rows, vec![vec!["1", "alice"]]);
    }
}
