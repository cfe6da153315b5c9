//! In-memory stand-ins for the collaborators, for tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::collaborators::{Clock, FortuneTeller, RandomIndex};
use crate::error::FortuneError;

/// Replays a fixed script of indices, wrapping each into range.
#[derive(Debug, Clone)]
pub struct ScriptedIndex {
    script: Vec<usize>,
    cursor: usize,
    draws: usize,
}

impl ScriptedIndex {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomIndex for ScriptedIndex {
    fn next_index(&mut self, n: usize) -> usize {
        self.draws += 1;
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % n
    }
}

/// Clock that never waits and remembers every delay it was asked for.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    requested: Rc<RefCell<Vec<Duration>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

impl Clock for ManualClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self.requested.borrow_mut().push(duration);
        future::ready(()).boxed_local()
    }
}

/// Teller that answers every request with the same canned result.
#[derive(Debug, Clone)]
pub struct CannedTeller {
    answer: Result<String, FortuneError>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl CannedTeller {
    pub fn answering(text: &str) -> Self {
        Self { answer: Ok(text.to_string()), asked: Rc::default() }
    }

    pub fn failing(error: FortuneError) -> Self {
        Self { answer: Err(error), asked: Rc::default() }
    }

    /// Prize labels this teller was asked about, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl FortuneTeller for CannedTeller {
    fn fortune(&self, prize_label: &str) -> LocalBoxFuture<'static, Result<String, FortuneError>> {
        self.asked.borrow_mut().push(prize_label.to_string());
        future::ready(self.answer.clone()).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_index_wraps() {
        let mut rng = ScriptedIndex::new(vec![3, 11]);
        assert_eq!(rng.next_index(9), 3);
        assert_eq!(rng.next_index(9), 2);
        assert_eq!(rng.next_index(9), 3);
        assert_eq!(rng.draws(), 3);
    }
}
