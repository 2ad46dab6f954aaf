use std::time::Duration;

use crate::config;
use crate::error::CyclerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerTimings {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl Default for CyclerTimings {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(config::TYPING_INTERVAL_MS),
            deleting: Duration::from_millis(config::DELETING_INTERVAL_MS),
            pause: Duration::from_millis(config::PAUSE_BEFORE_DELETE_MS),
        }
    }
}

/// Types and deletes a fixed list of phrases, one character per tick, forever.
///
/// The cycler does no timing of its own: each [`tick`](Self::tick) returns
/// how long the caller should wait before ticking again. The displayed text
/// is always a prefix of the current phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCycler {
    phrases: Vec<String>,
    timings: CyclerTimings,
    index: usize,
    text: String,
    deleting: bool,
}

impl PhraseCycler {
    pub fn new<I, S>(phrases: I, timings: CyclerTimings) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(CyclerError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timings,
            index: 0,
            text: String::new(),
            deleting: false,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// Delay before the very first tick.
    pub fn first_delay(&self) -> Duration {
        self.timings.typing
    }

    /// Advance by one step and return the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        if self.deleting {
            self.delete_step()
        } else {
            self.type_step()
        }
    }

    fn type_step(&mut self) -> Duration {
        let typed = self.text.chars().count();
        if let Some(next) = self.phrases[self.index].chars().nth(typed) {
            self.text.push(next);
        }
        // `text` is a prefix, so equal byte length means the phrase is complete
        if self.text.len() == self.phrases[self.index].len() {
            self.deleting = true;
            self.timings.pause
        } else {
            self.timings.typing
        }
    }

    fn delete_step(&mut self) -> Duration {
        self.text.pop();
        if self.text.is_empty() {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            self.timings.typing
        } else {
            self.timings.deleting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_timings() -> CyclerTimings {
        CyclerTimings {
            typing: Duration::from_millis(1),
            deleting: Duration::from_millis(2),
            pause: Duration::from_millis(3),
        }
    }

    fn frames(cycler: &mut PhraseCycler, ticks: usize) -> Vec<(String, Duration)> {
        (0..ticks)
            .map(|_| {
                let delay = cycler.tick();
                (cycler.text().to_string(), delay)
            })
            .collect()
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let err = PhraseCycler::new(Vec::<String>::new(), CyclerTimings::default()).unwrap_err();
        assert_eq!(err, CyclerError::NoPhrases);
    }

    #[test]
    fn default_timings_follow_config() {
        let timings = CyclerTimings::default();
        assert_eq!(timings.typing, Duration::from_millis(80));
        assert_eq!(timings.deleting, Duration::from_millis(50));
        assert_eq!(timings.pause, Duration::from_millis(2_000));
    }

    #[test]
    fn types_pauses_deletes_and_moves_on() {
        let mut cycler = PhraseCycler::new(["A", "BC"], unit_timings()).unwrap();
        assert_eq!(cycler.first_delay(), Duration::from_millis(1));

        let typing = Duration::from_millis(1);
        let deleting = Duration::from_millis(2);
        let pause = Duration::from_millis(3);
        let expected = vec![
            ("A", pause),
            ("", typing),
            ("B", typing),
            ("BC", pause),
            ("B", deleting),
            ("", typing),
            ("A", pause),
        ];
        let got = frames(&mut cycler, expected.len());
        let got: Vec<(&str, Duration)> = got.iter().map(|(t, d)| (t.as_str(), *d)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn period_is_sum_of_type_and_delete_ticks() {
        let phrases = ["Script", "Ops", "Archive"];
        let period: usize = phrases.iter().map(|p| 2 * p.chars().count()).sum();
        let mut cycler = PhraseCycler::new(phrases, unit_timings()).unwrap();

        let first = frames(&mut cycler, period);
        let second = frames(&mut cycler, period);
        assert_eq!(first, second);
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.text(), "");
    }

    #[test]
    fn text_is_always_a_prefix_of_the_current_phrase() {
        let phrases = ["Café ✨", "日本語", "x"];
        let mut cycler = PhraseCycler::new(phrases, unit_timings()).unwrap();
        for _ in 0..200 {
            cycler.tick();
            assert!(cycler.current_phrase().starts_with(cycler.text()));
            let matching = phrases
                .iter()
                .filter(|p| p.starts_with(cycler.text()) && !cycler.text().is_empty())
                .count();
            assert!(cycler.text().is_empty() || matching == 1);
        }
    }

    #[test]
    fn phrases_are_visited_round_robin() {
        let mut cycler = PhraseCycler::new(["ab", "c", "def"], unit_timings()).unwrap();
        let mut visited = vec![cycler.index()];
        for _ in 0..60 {
            cycler.tick();
            if *visited.last().unwrap() != cycler.index() {
                visited.push(cycler.index());
            }
        }
        let expected: Vec<usize> = (0..visited.len()).map(|i| i % 3).collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn length_rises_then_holds_then_falls() {
        let mut cycler = PhraseCycler::new(["hello"], unit_timings()).unwrap();
        let lengths: Vec<usize> = frames(&mut cycler, 10)
            .iter()
            .map(|(t, _)| t.chars().count())
            .collect();
        assert_eq!(lengths, vec![1, 2, 3, 4, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn no_duplicate_empty_frames_between_phrases() {
        let mut cycler = PhraseCycler::new(["ab", "cd"], unit_timings()).unwrap();
        let texts: Vec<String> = frames(&mut cycler, 40).into_iter().map(|(t, _)| t).collect();
        for pair in texts.windows(2) {
            assert!(!(pair[0].is_empty() && pair[1].is_empty()), "{:?}", texts);
        }
    }

    #[test]
    fn empty_phrase_flips_straight_to_pause() {
        let mut cycler = PhraseCycler::new(["", "X"], unit_timings()).unwrap();

        assert_eq!(cycler.tick(), Duration::from_millis(3));
        assert_eq!(cycler.text(), "");
        assert!(cycler.is_deleting());

        assert_eq!(cycler.tick(), Duration::from_millis(1));
        assert_eq!(cycler.index(), 1);
        assert!(!cycler.is_deleting());

        cycler.tick();
        assert_eq!(cycler.text(), "X");
    }
}
