//! Playing a game by walking a decision tree

use super::arena::{DecisionTree, NodeId};
use crate::core::{Pattern, Word, WordLists};
use crate::error::SolverError;
use crate::solver::SessionState;

/// Position in a [`DecisionTree`] during one game
///
/// Each turn is a single child lookup; the tree already holds every decision.
#[derive(Debug, Clone)]
pub struct TreeCursor<'a> {
    tree: &'a DecisionTree,
    lists: &'a WordLists,
    /// Nodes visited before the current one, with the feedback that left them
    path: Vec<(NodeId, Pattern)>,
    current: NodeId,
    solved: bool,
}

impl<'a> TreeCursor<'a> {
    /// Start at the root
    ///
    /// # Errors
    /// Returns `StaleCache` if the tree was built from other dictionaries.
    pub fn new(tree: &'a DecisionTree, lists: &'a WordLists) -> Result<Self, SolverError> {
        tree.validate_lists(lists)?;
        Ok(Self {
            tree,
            lists,
            path: Vec::new(),
            current: DecisionTree::ROOT,
            solved: false,
        })
    }

    /// The word to play now
    ///
    /// # Errors
    /// Returns `AlreadySolved` once the game is over.
    pub fn guess(&self) -> Result<&'a Word, SolverError> {
        if self.solved {
            return Err(SolverError::AlreadySolved);
        }
        Ok(self.lists.guesses().word(self.node_guess(self.current)))
    }

    /// Move along the branch for `pattern`
    ///
    /// # Errors
    /// `InvalidFeedback` when no answer can produce the pattern here (the
    /// cursor does not move), `AlreadySolved` after the game ended.
    pub fn apply_feedback(&mut self, pattern: Pattern) -> Result<SessionState, SolverError> {
        let guess = self.guess()?;
        let tree = self.tree;
        let node = tree
            .node(self.current)
            .ok_or(SolverError::UnknownHistory {
                turn: self.path.len(),
                pattern,
            })?;

        if pattern.is_perfect() && node.can_win() {
            self.path.push((self.current, pattern));
            self.solved = true;
            return Ok(SessionState::Solved);
        }

        let child = node.child(pattern).ok_or_else(|| SolverError::InvalidFeedback {
            guess: guess.text().to_string(),
            pattern,
        })?;
        self.path.push((self.current, pattern));
        self.current = child;
        Ok(SessionState::InProgress)
    }

    /// Step back one turn; false at the start
    pub fn undo(&mut self) -> bool {
        match self.path.pop() {
            Some((node, _)) => {
                self.current = node;
                self.solved = false;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.path.clear();
        self.current = DecisionTree::ROOT;
        self.solved = false;
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.solved {
            SessionState::Solved
        } else if self.path.is_empty() {
            SessionState::Fresh
        } else {
            SessionState::InProgress
        }
    }

    /// The current guess is certainly the answer
    #[must_use]
    pub fn is_certain(&self) -> bool {
        !self.solved && self.tree.node(self.current).is_some_and(|node| node.is_leaf())
    }

    /// Turns played so far as `(guess, feedback)` words
    pub fn history(&self) -> impl Iterator<Item = (&'a Word, Pattern)> + '_ {
        self.path
            .iter()
            .map(|&(node, pattern)| (self.lists.guesses().word(self.node_guess(node)), pattern))
    }

    fn node_guess(&self, id: NodeId) -> usize {
        self.tree.node(id).map_or(0, |node| node.guess())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackTable;
    use crate::fixtures;
    use crate::solver::{Solver, SolverConfig};

    #[test]
    fn cursor_walks_to_every_answer() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();

        for answer in lists.answers() {
            let mut cursor = TreeCursor::new(&tree, &lists).unwrap();
            let mut turns = 0;
            loop {
                let guess = cursor.guess().unwrap();
                turns += 1;
                let state = cursor.apply_feedback(Pattern::compute(answer, guess)).unwrap();
                if state == SessionState::Solved {
                    assert_eq!(guess, answer);
                    break;
                }
                assert!(turns < 10);
            }
            assert_eq!(cursor.history().count(), turns);
            assert_eq!(cursor.guess(), Err(SolverError::AlreadySolved));
        }
    }

    #[test]
    fn impossible_feedback_does_not_move() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();
        let mut cursor = TreeCursor::new(&tree, &lists).unwrap();

        // The opening "roate" is not an answer
        let result = cursor.apply_feedback(Pattern::PERFECT);
        assert_eq!(
            result,
            Err(SolverError::InvalidFeedback {
                guess: "roate".into(),
                pattern: Pattern::PERFECT
            })
        );
        assert_eq!(cursor.state(), SessionState::Fresh);
    }

    #[test]
    fn undo_and_reset() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();
        let mut cursor = TreeCursor::new(&tree, &lists).unwrap();
        let answer = lists.answers().word(lists.answers().find("where").unwrap());

        let opening = cursor.guess().unwrap();
        cursor.apply_feedback(Pattern::compute(answer, opening)).unwrap();
        let second = cursor.guess().unwrap();
        assert_eq!(cursor.state(), SessionState::InProgress);

        assert!(cursor.undo());
        assert_eq!(cursor.guess().unwrap(), opening);
        cursor.apply_feedback(Pattern::compute(answer, opening)).unwrap();
        assert_eq!(cursor.guess().unwrap(), second);

        cursor.reset();
        assert_eq!(cursor.state(), SessionState::Fresh);
        assert!(!cursor.undo());
    }

    #[test]
    fn leaves_are_exactly_the_single_candidate_positions() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();

        for answer in lists.answers() {
            let mut cursor = TreeCursor::new(&tree, &lists).unwrap();
            let mut session = solver.session();
            let mut history = Vec::new();

            while cursor.state() != SessionState::Solved {
                let single = session.candidates().len() == 1;
                assert_eq!(cursor.is_certain(), single);
                assert_eq!(session.is_certain(), single);
                assert_eq!(tree.lookup(&history).unwrap().is_leaf, single);

                let guess = cursor.guess().unwrap();
                assert_eq!(session.request_guess().unwrap(), guess);
                let pattern = Pattern::compute(answer, guess);
                if single {
                    assert!(pattern.is_perfect());
                }
                cursor.apply_feedback(pattern).unwrap();
                session.apply_feedback(pattern).unwrap();
                history.push(pattern);
            }
            assert_eq!(session.state(), SessionState::Solved);
            assert!(!cursor.is_certain());
        }
    }

    #[test]
    fn rejects_tree_for_other_lists() {
        let lists = fixtures::lists();
        let tiny = fixtures::tiny();
        let table = FeedbackTable::build(tiny.guesses(), tiny.answers());
        let solver = Solver::new(&tiny, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();

        assert!(TreeCursor::new(&tree, &lists).is_err());
    }
}
