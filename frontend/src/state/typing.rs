use crate::config::{
    TYPING_CHAR_DELAY_MS, TYPING_DELETE_DELAY_MS, TYPING_FULL_WORD_PAUSE_MS,
    TYPING_NEXT_WORD_PAUSE_MS,
};

/// What the hero headline shows after one step, and how long to wait before
/// the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Typewriter over a fixed list of phrases. Offsets count characters, so
/// multi-byte phrases never split inside a code point.
#[derive(Debug, Clone)]
pub struct TypingState {
    words: &'static [&'static str],
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingState {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    #[cfg(test)]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypingFrame {
        let Some(word) = self.words.get(self.word_index) else {
            return TypingFrame {
                text: String::new(),
                delay_ms: TYPING_NEXT_WORD_PAUSE_MS,
            };
        };
        let len = word.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            TYPING_DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPING_CHAR_DELAY_MS
        };
        let text: String = word.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            delay_ms = TYPING_FULL_WORD_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = TYPING_NEXT_WORD_PAUSE_MS;
        }

        TypingFrame { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TYPING_WORDS;

    fn run_word(state: &mut TypingState) -> Vec<TypingFrame> {
        let start = state.word_index();
        let mut frames = Vec::new();
        loop {
            frames.push(state.tick());
            if state.word_index() != start || frames.len() > 200 {
                return frames;
            }
        }
    }

    #[test]
    fn types_forward_then_pauses_on_full_word() {
        let mut state = TypingState::new(TYPING_WORDS);
        let first = state.tick();
        assert_eq!(first, TypingFrame { text: "B".into(), delay_ms: 100 });

        let mut last = first;
        for _ in 1.."Beautiful Spaces".len() {
            last = state.tick();
        }
        assert_eq!(last.text, "Beautiful Spaces");
        assert_eq!(last.delay_ms, 2000);
        assert!(state.is_deleting());
    }

    #[test]
    fn full_cycle_returns_to_empty_and_advances_one_word() {
        let mut state = TypingState::new(TYPING_WORDS);
        let frames = run_word(&mut state);

        let word_len = "Beautiful Spaces".len();
        assert_eq!(frames.len(), word_len * 2);
        let last = frames.last().unwrap();
        assert_eq!(last.text, "");
        assert_eq!(last.delay_ms, 500);
        assert_eq!(state.word_index(), 1);
        assert!(!state.is_deleting());
        assert!(frames[word_len..frames.len() - 1]
            .iter()
            .all(|frame| frame.delay_ms == 50));
    }

    #[test]
    fn wraps_after_last_word() {
        let mut state = TypingState::new(TYPING_WORDS);
        for expected in [1, 2, 3, 0, 1] {
            run_word(&mut state);
            assert_eq!(state.word_index(), expected);
        }
    }

    #[test]
    fn never_splits_multibyte_characters() {
        static WORDS: &[&str] = &["Désain", "Ruang"];
        let mut state = TypingState::new(WORDS);
        let typed: Vec<String> = (0..6).map(|_| state.tick().text).collect();
        assert_eq!(typed[1], "Dé");
        assert_eq!(typed[5], "Désain");
    }

    #[test]
    fn empty_phrase_list_stays_blank() {
        static WORDS: &[&str] = &[];
        let mut state = TypingState::new(WORDS);
        assert_eq!(state.tick().text, "");
        assert_eq!(state.word_index(), 0);
    }
}
