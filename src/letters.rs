use rand::Rng;

/// Letter counts gathered from a word list, used to pick fill letters with the same distribution as the words.
#[derive(Clone, Debug, Default)]
pub struct LetterFrequencies {
    // first-seen order; sampling walks it front to back
    counts: Vec<(char, usize)>,
    total: usize,
}

impl LetterFrequencies {
    /// Counts every character of every word.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies = Self::default();

        for word in words {
            for ch in word.as_ref().chars() {
                match frequencies.counts.iter_mut().find(|(c, _)| *c == ch) {
                    Some((_, count)) => *count += 1,
                    None => frequencies.counts.push((ch, 1)),
                }
                frequencies.total += 1;
            }
        }

        frequencies
    }

    /// Total number of characters counted.
    #[cfg(test)]
    pub(crate) fn total(&self) -> usize {
        self.total
    }

    /// How many times `ch` was counted.
    #[cfg(test)]
    pub(crate) fn count(&self, ch: char) -> usize {
        self.counts
            .iter()
            .find_map(|&(c, n)| (c == ch).then_some(n))
            .unwrap_or(0)
    }

    /// Draws a character with probability proportional to its count.
    ///
    /// When nothing was counted, falls back to a uniformly random letter from 'A' to 'Z'.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        if self.total == 0 {
            return char::from(rng.gen_range(b'A'..=b'Z'));
        }

        let threshold = rng.gen_range(0..self.total);
        let mut running = 0;

        for &(ch, count) in &self.counts {
            running += count;
            if running > threshold {
                return ch;
            }
        }

        unreachable!("counts sum to total, so the threshold is always passed")
    }
}
