//! The drill loop: shuffle, prompt, read, verify, report, repeat.
//!
//! A `Quiz` owns its phrase set outright and reorders it at the start of
//! every round. Hints and results go to the output sink; a failed read is
//! logged and the phrase skipped, never ending the session.

use std::convert::Infallible;
use std::io::{self, Write};

use rand::Rng;

use crate::error::QuizError;
use crate::phrase::{PhraseRecord, PhraseSet};

/// Source of secrets typed by the user.
pub trait SecretReader {
    /// Block until one line of input is available and return it without its
    /// line terminator.
    fn read_secret(&mut self) -> io::Result<Vec<u8>>;
}

impl<R: SecretReader + ?Sized> SecretReader for Box<R> {
    fn read_secret(&mut self) -> io::Result<Vec<u8>> {
        (**self).read_secret()
    }
}

/// What happened to a single phrase within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// Reading the secret failed; nothing was verified.
    Skipped,
}

/// A drill session over one phrase set.
pub struct Quiz<R, W, G> {
    phrases: PhraseSet,
    reader: R,
    out: W,
    rng: G,
    round: u64,
}

impl<R, W, G> Quiz<R, W, G>
where
    R: SecretReader,
    W: Write,
    G: Rng,
{
    pub fn new(phrases: PhraseSet, reader: R, out: W, rng: G) -> Self {
        Self {
            phrases,
            reader,
            out,
            rng,
            round: 0,
        }
    }

    /// The phrases in the order of the most recent round.
    pub fn phrases(&self) -> &PhraseSet {
        &self.phrases
    }

    /// Number of rounds started so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Drill forever. Returns only on a fatal error.
    pub fn run(&mut self) -> Result<Infallible, QuizError> {
        if self.phrases.is_empty() {
            return Err(QuizError::NoPhrases);
        }
        loop {
            self.run_round()?;
        }
    }

    /// Shuffle and go through every phrase once.
    pub fn run_round(&mut self) -> Result<Vec<Outcome>, QuizError> {
        self.phrases.shuffle(&mut self.rng);
        self.round += 1;
        tracing::debug!(round = self.round, phrases = self.phrases.len(), "starting round");

        let mut outcomes = Vec::with_capacity(self.phrases.len());
        for record in &self.phrases {
            outcomes.push(prompt(record, &mut self.reader, &mut self.out)?);
        }
        Ok(outcomes)
    }
}

fn prompt<R, W>(record: &PhraseRecord, reader: &mut R, out: &mut W) -> Result<Outcome, QuizError>
where
    R: SecretReader + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", record.hint())?;
    out.flush()?;

    let secret = match reader.read_secret() {
        Ok(secret) => secret,
        Err(e) => {
            tracing::error!("error on prompting for phrase '{}': {e}", record.hint());
            return Ok(Outcome::Skipped);
        }
    };

    let outcome = if record.matches(&secret)? {
        writeln!(out, "correct!")?;
        Outcome::Correct
    } else {
        writeln!(out, "incorrect!")?;
        Outcome::Incorrect
    };
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::hash_kind::HashKind;
    use crate::verify::digest_hex;

    /// Replays scripted answers in order, then fails every read.
    struct ScriptedReader {
        answers: VecDeque<io::Result<Vec<u8>>>,
        calls: usize,
    }

    impl ScriptedReader {
        fn new(answers: Vec<io::Result<Vec<u8>>>) -> Self {
            Self {
                answers: answers.into(),
                calls: 0,
            }
        }
    }

    impl SecretReader for ScriptedReader {
        fn read_secret(&mut self) -> io::Result<Vec<u8>> {
            self.calls += 1;
            self.answers
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script ended")))
        }
    }

    /// Answers every prompt with the hint it was just shown. Records built by
    /// `record_for` use their secret as the hint, so every answer is right.
    struct EchoHintReader<'a> {
        out: &'a RefCell<Vec<u8>>,
    }

    impl SecretReader for EchoHintReader<'_> {
        fn read_secret(&mut self) -> io::Result<Vec<u8>> {
            let out = self.out.borrow();
            let text = String::from_utf8_lossy(&out);
            Ok(text.lines().last().unwrap_or_default().as_bytes().to_vec())
        }
    }

    struct SharedSink<'a>(&'a RefCell<Vec<u8>>);

    impl Write for SharedSink<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record_for(secret: &str) -> PhraseRecord {
        let digest = digest_hex(secret.as_bytes(), HashKind::Sha256).unwrap();
        PhraseRecord::new(secret, HashKind::Sha256, digest).unwrap()
    }

    fn set_of(secrets: &[&str]) -> PhraseSet {
        secrets.iter().map(|s| record_for(s)).collect()
    }

    fn output_lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn single_phrase_correct_and_incorrect() {
        let reader = ScriptedReader::new(vec![Ok(b"alpha".to_vec()), Ok(b"nope".to_vec())]);
        let mut quiz = Quiz::new(set_of(&["alpha"]), reader, Vec::new(), StdRng::seed_from_u64(1));

        assert_eq!(quiz.run_round().unwrap(), vec![Outcome::Correct]);
        assert_eq!(quiz.run_round().unwrap(), vec![Outcome::Incorrect]);
        assert_eq!(quiz.round(), 2);

        let lines = output_lines(&quiz.out);
        assert_eq!(lines, vec!["alpha", "correct!", "alpha", "incorrect!"]);
    }

    #[test]
    fn read_error_skips_only_that_phrase() {
        let reader = ScriptedReader::new(vec![
            Err(io::Error::new(io::ErrorKind::Interrupted, "tty gone")),
            Ok(b"whatever".to_vec()),
            Ok(b"whatever".to_vec()),
        ]);
        let set = set_of(&["a", "b", "c"]);
        let before = set.clone();
        let mut quiz = Quiz::new(set, reader, Vec::new(), StdRng::seed_from_u64(3));

        let outcomes = quiz.run_round().unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0], Outcome::Skipped);
        assert_eq!(quiz.reader.calls, 3);

        // Three hints, two results: the skipped phrase prints no verdict.
        let lines = output_lines(&quiz.out);
        assert_eq!(lines.len(), 5);
        assert!(!["correct!", "incorrect!"].contains(&lines[1].as_str()));

        let mut after: Vec<_> = quiz.phrases().iter().cloned().collect();
        let mut expected: Vec<_> = before.iter().cloned().collect();
        after.sort_by(|a, b| a.hint().cmp(b.hint()));
        expected.sort_by(|a, b| a.hint().cmp(b.hint()));
        assert_eq!(after, expected);
    }

    #[test]
    fn loop_survives_rounds_of_read_errors() {
        let reader = ScriptedReader::new(vec![]);
        let mut quiz = Quiz::new(set_of(&["a", "b"]), reader, Vec::new(), StdRng::seed_from_u64(9));

        for _ in 0..5 {
            assert_eq!(quiz.run_round().unwrap(), vec![Outcome::Skipped; 2]);
        }
        assert_eq!(quiz.reader.calls, 10);
        assert_eq!(quiz.phrases().len(), 2);
    }

    #[test]
    fn every_phrase_prompted_once_per_round() {
        let secrets = ["one", "two", "three", "four"];
        let out = RefCell::new(Vec::new());
        let mut quiz = Quiz::new(
            set_of(&secrets),
            EchoHintReader { out: &out },
            SharedSink(&out),
            StdRng::seed_from_u64(11),
        );

        for _ in 0..3 {
            assert_eq!(quiz.run_round().unwrap(), vec![Outcome::Correct; 4]);
        }

        let lines = output_lines(&out.borrow());
        assert_eq!(lines.len(), 24);
        let hints: Vec<_> = lines.iter().step_by(2).cloned().collect();
        let mut expected: Vec<_> = secrets.iter().map(|s| s.to_string()).collect();
        expected.sort();
        for round in hints.chunks(4) {
            let mut sorted = round.to_vec();
            sorted.sort();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn order_changes_between_rounds() {
        let secrets = ["a", "b", "c", "d", "e", "f"];
        let reader = ScriptedReader::new(vec![]);
        let mut quiz = Quiz::new(set_of(&secrets), reader, Vec::new(), StdRng::seed_from_u64(5));

        let mut orders = std::collections::HashSet::new();
        for _ in 0..10 {
            quiz.run_round().unwrap();
            let order: Vec<_> = quiz.phrases().iter().map(|r| r.hint().to_string()).collect();
            orders.insert(order);
        }
        assert!(orders.len() > 1);
    }

    #[test]
    fn run_rejects_empty_set() {
        let reader = ScriptedReader::new(vec![]);
        let mut quiz = Quiz::new(PhraseSet::default(), reader, Vec::new(), StdRng::seed_from_u64(0));
        assert!(matches!(quiz.run(), Err(QuizError::NoPhrases)));
        assert_eq!(quiz.reader.calls, 0);
    }

    #[test]
    fn output_failure_is_fatal() {
        struct BrokenSink;
        impl Write for BrokenSink {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let reader = ScriptedReader::new(vec![Ok(b"a".to_vec())]);
        let mut quiz = Quiz::new(set_of(&["a"]), reader, BrokenSink, StdRng::seed_from_u64(0));
        assert!(matches!(quiz.run(), Err(QuizError::Output(_))));
    }
}
