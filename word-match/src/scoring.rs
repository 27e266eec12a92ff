use std::fmt;

use dictionary::PartOfSpeech;

pub const CORRECT_POINTS: i64 = 100;
pub const WRONG_POINTS: i64 = -50;
pub const SKIPPED_POINTS: i64 = 0;

/// Categories a definition can be sorted into.
pub const CATEGORIES: [PartOfSpeech; 6] = [
    PartOfSpeech::Noun,
    PartOfSpeech::Verb,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
    PartOfSpeech::Preposition,
    PartOfSpeech::Conjunction,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Category(PartOfSpeech),
    /// Set the definition aside without scoring it
    Other,
}

impl Target {
    /// Every target in menu order, `Other` last.
    pub fn all() -> impl Iterator<Item = Target> {
        CATEGORIES
            .into_iter()
            .map(Target::Category)
            .chain(Some(Target::Other))
    }

    pub fn label(self) -> &'static str {
        match self {
            Target::Category(part_of_speech) => part_of_speech.label(),
            Target::Other => "other",
        }
    }

    /// Reads a target typed by the player: a menu number, a label, an
    /// unambiguous prefix of a label, or a close misspelling of one.
    pub fn from_input(input: &str) -> Option<Target> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }
        if let Ok(index) = input.parse::<usize>() {
            return Target::all().nth(index.wrapping_sub(1));
        }
        if input == "skip" {
            return Some(Target::Other);
        }
        if let Ok(part_of_speech) = input.parse::<PartOfSpeech>() {
            return CATEGORIES
                .contains(&part_of_speech)
                .then_some(Target::Category(part_of_speech));
        }

        let mut prefixed = Target::all().filter(|target| target.label().starts_with(&input[..]));
        if let (Some(target), None) = (prefixed.next(), prefixed.next()) {
            return Some(target);
        }

        let mut similar = Target::all()
            .map(|target| (target, strsim::jaro(target.label(), &input)))
            .collect::<Vec<(Target, f64)>>();
        // most similar at the start
        similar.sort_unstable_by(|(_, a), (_, b)| b.total_cmp(a));
        let difference = similar[0].1 - similar[1].1;
        if similar[0].1 > 0.9 && difference > 0.25 {
            Some(similar[0].0)
        } else {
            None
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    Skipped,
}

impl Verdict {
    pub fn points(self) -> i64 {
        match self {
            Verdict::Correct => CORRECT_POINTS,
            Verdict::Incorrect => WRONG_POINTS,
            Verdict::Skipped => SKIPPED_POINTS,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: i64,
    pub correct: u32,
    pub incorrect: u32,
    pub skipped: u32,
}

impl Scoreboard {
    /// Applies a verdict and returns the points it was worth.
    pub fn record(&mut self, verdict: Verdict) -> i64 {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Incorrect => self.incorrect += 1,
            Verdict::Skipped => self.skipped += 1,
        }
        let points = verdict.points();
        self.score += points;
        points
    }
}
