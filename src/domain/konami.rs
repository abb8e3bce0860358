use std::collections::VecDeque;

use eframe::egui::Key;

use crate::config::{KONAMI_BUFFER_LEN, KONAMI_SEQUENCE};

/// Rolling buffer of the most recent key presses, matched against a fixed sequence.
#[derive(Debug, Clone)]
pub struct KonamiDetector {
    buffer: VecDeque<Key>,
    sequence: &'static [Key],
}

impl Default for KonamiDetector {
    fn default() -> Self {
        Self::new(&KONAMI_SEQUENCE)
    }
}

impl KonamiDetector {
    pub fn new(sequence: &'static [Key]) -> Self {
        Self {
            buffer: VecDeque::with_capacity(sequence.len().max(KONAMI_BUFFER_LEN)),
            sequence,
        }
    }

    /// Records a key. Returns true when the buffer now equals the sequence exactly.
    pub fn push(&mut self, key: Key) -> bool {
        self.buffer.push_back(key);
        while self.buffer.len() > self.sequence.len() {
            self.buffer.pop_front();
        }
        self.is_match()
    }

    pub fn is_match(&self) -> bool {
        self.buffer.len() == self.sequence.len() && self.buffer.iter().eq(self.sequence.iter())
    }
}
