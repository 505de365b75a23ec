/// Outcome of applying a rule.
///
/// `start` is always the cursor the rule was invoked with. On success
/// `position` is where the input continues, so `[start, position)` is the
/// consumed range; on failure `position == start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<I> {
    pub matched: bool,
    pub position: I,
    pub start: I,
}

impl<I: Copy> Match<I> {
    /// Creates a match result.
    pub fn new(matched: bool, position: I, start: I) -> Self {
        Self {
            matched,
            position,
            start,
        }
    }

    /// Zero-width result: `start` and `position` are the same cursor.
    pub fn at(matched: bool, position: I) -> Self {
        Self::new(matched, position, position)
    }

    /// A successful match of `[start, position)`.
    pub fn success(start: I, position: I) -> Self {
        Self::new(true, position, start)
    }

    /// A failed match that consumed nothing.
    pub fn failure(start: I) -> Self {
        Self::at(false, start)
    }

    /// Returns the consumed range as `(start, position)`.
    pub fn consumed(&self) -> (I, I) {
        (self.start, self.position)
    }

    /// Same outcome, reported as if the rule had been started at `start`.
    ///
    /// Failures are collapsed back onto `start`.
    pub(crate) fn from_start(self, start: I) -> Self {
        if self.matched {
            Self::success(start, self.position)
        } else {
            Self::failure(start)
        }
    }
}

/// Builds a [`Match`] from its parts.
pub fn make_result<I: Copy>(matched: bool, position: I, start: I) -> Match<I> {
    Match::new(matched, position, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_at_defaults_start() {
        let m = Match::at(true, 4usize);
        assert_eq!(m.start, 4);
        assert_eq!(m.position, 4);
    }

    #[test]
    fn test_failure_does_not_move() {
        let m = Match::failure(7usize);
        assert!(!m.matched);
        assert_eq!(m.consumed(), (7, 7));
    }

    #[test]
    fn test_from_start_collapses_failure() {
        let m = make_result(false, 9usize, 5).from_start(2);
        assert_eq!(m, Match::failure(2));
        let ok = Match::success(5usize, 9).from_start(2);
        assert_eq!(ok.consumed(), (2, 9));
    }
}
