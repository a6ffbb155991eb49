//! Letter-by-letter evaluation of a guess against the hidden target.

use std::fmt::Display;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How one guessed letter relates to the target word.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Status {
    /// The letter is in the target at this exact position.
    Correct,

    /// The letter is in the target, but at a different position that no
    /// earlier letter of this guess has already claimed.
    Misplaced,

    /// The letter matches no remaining occurrence in the target.
    Wrong,
}

/// One letter of a guess together with its [`Status`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LetterResult {
    pub letter: char,
    pub status: Status,
}

/// The evaluation of one submitted guess, in guess order.
///
/// Produced by [`evaluate()`] and never mutated afterwards. The
/// [`Session`](crate::Session) appends one of these to its history per
/// accepted guess.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Attempt {
    inner: Vec<LetterResult>,
}

impl Attempt {
    /// Returns the per-letter results, one per letter of the guess.
    pub fn results(&self) -> &[LetterResult] {
        self.inner.as_slice()
    }

    /// Returns the number of letters in the guess.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if every letter is [`Status::Correct`], i.e. the guess
    /// was the target.
    pub fn is_winning(&self) -> bool {
        self.inner.iter().all(|r| r.status == Status::Correct)
    }

    /// Returns the statuses as a compact string, one character per letter:
    /// `c` for correct, `m` for misplaced, `w` for wrong.
    ///
    /// Handy for logs and test expectations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let attempt = wordrally::evaluate("peach", "apple");
    /// assert_eq!(attempt.status_line(), "mmmww");
    /// ```
    pub fn status_line(&self) -> String {
        self.inner
            .iter()
            .map(|r| match r.status {
                Status::Correct => 'c',
                Status::Misplaced => 'm',
                Status::Wrong => 'w',
            })
            .collect()
    }
}

impl Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in &self.inner {
            write!(f, "{}", r.letter)?;
        }
        Ok(())
    }
}

/// Evaluates `guess` against `target` and classifies every letter.
///
/// This is a pure function: the same inputs always produce the same
/// [`Attempt`], and nothing else is touched. Both strings must have the same
/// number of characters; [`Session::submit_guess()`](crate::Session::submit_guess)
/// checks that before calling here, and this function panics on a mismatch.
///
/// Duplicate letters are handled the way Wordle does it, in two passes.
/// Exact position matches are marked first and consume their target
/// position. Only then are the remaining letters matched against leftover
/// target positions, scanning left to right, so the leftmost unconsumed
/// occurrence is claimed first. A letter never shows more `Correct` and
/// `Misplaced` results together than the target contains copies of it.
///
/// # Examples
///
/// ```rust
/// use wordrally::{evaluate, Status::*};
///
/// let attempt = evaluate("peach", "apple");
/// let statuses: Vec<_> = attempt.results().iter().map(|r| r.status).collect();
/// assert_eq!(statuses, [Misplaced, Misplaced, Misplaced, Wrong, Wrong]);
/// ```
pub fn evaluate(guess: &str, target: &str) -> Attempt {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();

    let mut statuses = vec![Status::Wrong; guess.len()];
    let mut consumed = vec![false; target.len()];

    // Exact matches first, since they take priority over misplaced matches
    // for the same target letter.
    for (i, (g, t)) in guess.iter().zip_eq(&target).enumerate() {
        if g == t {
            statuses[i] = Status::Correct;
            consumed[i] = true;
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if statuses[i] == Status::Correct {
            continue;
        }
        // The leftmost unconsumed occurrence is claimed first, which keeps
        // results for repeated letters deterministic.
        if let Some(j) = target.iter().positions(|t| t == g).find(|&j| !consumed[j]) {
            consumed[j] = true;
            statuses[i] = Status::Misplaced;
        }
    }

    Attempt {
        inner: guess
            .into_iter()
            .zip(statuses)
            .map(|(letter, status)| LetterResult { letter, status })
            .collect(),
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn check(guess: &str, target: &str, expected: &str) {
        let attempt = evaluate(guess, target);
        assert_eq!(
            attempt.status_line(),
            expected,
            "evaluate({:?}, {:?})",
            guess,
            target
        );
    }

    #[test]
    fn status_line_agrees_with_the_results() {
        let attempt = evaluate("speed", "apple");
        for (r, c) in attempt.results().iter().zip(attempt.status_line().chars()) {
            let expected = match r.status {
                Status::Correct => 'c',
                Status::Misplaced => 'm',
                Status::Wrong => 'w',
            };
            assert_eq!(c, expected);
        }
    }

    #[test]
    fn all_correct_on_exact_guess() {
        check("apple", "apple", "ccccc");
        check("flugzeug", "flugzeug", "cccccccc");
    }

    #[test]
    fn all_wrong_on_disjoint_letters() {
        check("fghij", "abcde", "wwwww");
    }

    #[test]
    fn repeated_guess_letter_consumes_leftmost_target_occurrence() {
        // Target has two p's; the guess's single p picks up the first one.
        check("peach", "apple", "mmmww");
    }

    #[test]
    fn exact_match_takes_priority_over_misplaced() {
        // The p at index 1 is an exact match; the second e finds no
        // remaining e because the first one consumed target position 4.
        check("speed", "apple", "wcmww");
    }

    #[test]
    fn second_copy_goes_wrong_when_target_has_one() {
        // "sober" has a single o, so only the first o of "spool" scores.
        check("spool", "sober", "cwmww");
    }

    #[test]
    fn both_copies_misplaced_when_target_has_two() {
        // "erase" has two e's at other positions.
        check("speed", "erase", "mwmmw");
    }

    #[test]
    fn exact_match_later_in_word_wins_over_earlier_misplaced_scan() {
        // The second o of "robot" sits on a target o and must not lose it
        // to the first o's left-to-right scan.
        check("robot", "floor", "mmwcw");
    }

    #[test]
    fn umlauts_count_as_single_letters() {
        check("möhre", "höhle", "wccwc");
    }

    #[test]
    #[should_panic]
    fn length_mismatch_panics() {
        evaluate("apple", "banana");
    }

    proptest! {
        #[test]
        fn result_preserves_length_and_order(
            guess in "[a-e]{5}",
            target in "[a-e]{5}",
        ) {
            let attempt = evaluate(&guess, &target);
            prop_assert_eq!(attempt.len(), 5);
            let letters: String = attempt.results().iter().map(|r| r.letter).collect();
            prop_assert_eq!(letters, guess);
        }

        #[test]
        fn never_more_hits_than_target_copies(
            guess in "[a-e]{5}",
            target in "[a-e]{5}",
        ) {
            let attempt = evaluate(&guess, &target);
            for c in 'a'..='e' {
                let hits = attempt
                    .results()
                    .iter()
                    .filter(|r| r.letter == c && r.status != Status::Wrong)
                    .count();
                let copies = target.chars().filter(|&t| t == c).count();
                prop_assert!(
                    hits <= copies,
                    "{} hits for {:?} but target {:?} has {}",
                    hits, c, target, copies
                );
            }
        }

        #[test]
        fn evaluation_is_pure(
            guess in "[a-e]{5}",
            target in "[a-e]{5}",
        ) {
            prop_assert_eq!(evaluate(&guess, &target), evaluate(&guess, &target));
        }

        #[test]
        fn guessing_the_target_wins(target in "[a-z]{5,8}") {
            prop_assert!(evaluate(&target, &target).is_winning());
        }
    }
}
