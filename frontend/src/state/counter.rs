use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS};

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("number pattern compiles"));

/// A statistic like `250+`: the first run of digits plus the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterText {
    pub prefix: String,
    pub target: u64,
    pub suffix: String,
}

impl CounterText {
    pub fn parse(text: &str) -> Option<Self> {
        let found = NUMBER.find(text)?;
        let target = found.as_str().parse().ok()?;
        Some(Self {
            prefix: text[..found.start()].to_string(),
            target,
            suffix: text[found.end()..].to_string(),
        })
    }

    pub fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// Count-up from zero in a fixed number of steps. Yields one value per
/// step; the last one is exactly the target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    step: u32,
    steps: u32,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            step: 0,
            steps: COUNTER_STEPS,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Wait before the next value. Steps land on the rounded share of the
    /// total duration, so the delays add up to exactly `COUNTER_DURATION_MS`.
    pub fn next_delay_ms(&self) -> u32 {
        let elapsed_at = |step: u32| (step * COUNTER_DURATION_MS + self.steps / 2) / self.steps;
        elapsed_at(self.step + 1) - elapsed_at(self.step)
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        if self.is_finished() {
            return Some(self.target);
        }
        let value = (self.target as f64 * self.step as f64 / self.steps as f64).round() as u64;
        Some(value.min(self.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("250+", "", 250, "+")]
    #[case("98%", "", 98, "%")]
    #[case("15", "", 15, "")]
    #[case("Over 10 tahun", "Over ", 10, " tahun")]
    fn splits_number_from_text(
        #[case] text: &str,
        #[case] prefix: &str,
        #[case] target: u64,
        #[case] suffix: &str,
    ) {
        let parsed = CounterText::parse(text).unwrap();
        assert_eq!(parsed.prefix, prefix);
        assert_eq!(parsed.target, target);
        assert_eq!(parsed.suffix, suffix);
        assert_eq!(parsed.render(target), text);
    }

    #[test]
    fn text_without_number_is_left_alone() {
        assert_eq!(CounterText::parse("Banyak"), None);
    }

    #[test]
    fn counts_250_plus_monotonically() {
        let text = CounterText::parse("250+").unwrap();
        let frames: Vec<String> = CounterAnimation::new(text.target)
            .map(|value| text.render(value))
            .collect();
        assert_eq!(frames.len(), 60);
        assert_eq!(frames.last().map(String::as_str), Some("250+"));

        let values: Vec<u64> = CounterAnimation::new(250).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values[29], 125);
    }

    #[test]
    fn small_targets_never_overshoot() {
        for target in 0..=7 {
            let values: Vec<u64> = CounterAnimation::new(target).collect();
            assert!(values.iter().all(|&value| value <= target));
            assert_eq!(values.last(), Some(&target));
        }
    }

    #[test]
    fn step_delays_fill_the_whole_duration() {
        let mut animation = CounterAnimation::new(250);
        let mut total = 0;
        while !animation.is_finished() {
            let delay = animation.next_delay_ms();
            assert!((33..=34).contains(&delay));
            total += delay;
            animation.next();
        }
        assert_eq!(total, 2000);
    }

    #[test]
    fn finished_animation_yields_nothing() {
        let mut animation = CounterAnimation::new(5);
        animation.by_ref().for_each(drop);
        assert!(animation.is_finished());
        assert_eq!(animation.next(), None);
    }
}
