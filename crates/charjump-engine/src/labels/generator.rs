use std::iter::FusedIterator;

use charjump_common::EngineError;

use super::alphabet::LabelAlphabet;

/// Shortest label length that gives every one of `count` candidates its own
/// label: the smallest `L >= 1` with `alphabet.len()^L >= count`.
pub fn label_length(count: usize, alphabet: &LabelAlphabet) -> Result<u32, EngineError> {
    if count == 0 {
        return Err(EngineError::InvalidCount(count));
    }
    let base = alphabet.len();
    let mut length = 1;
    let mut capacity = base;
    while capacity < count {
        length += 1;
        match capacity.checked_mul(base) {
            Some(next) => capacity = next,
            None => break,
        }
    }
    Ok(length)
}

/// Every label of exactly `length` symbols, each once, in a fixed order.
///
/// Labels count like a mixed-radix number whose leftmost symbol is the
/// least significant: `aa, ba, ca, ..., zz`. Equal lengths are prefix-free
/// by construction.
pub fn generate(length: u32, alphabet: &LabelAlphabet) -> Result<Labels, EngineError> {
    let overflow = EngineError::LabelSpaceOverflow {
        alphabet: alphabet.len(),
        length,
    };
    let width = usize::try_from(length).map_err(|_| overflow.clone())?;
    let total = alphabet.len().checked_pow(length).ok_or(overflow)?;
    Ok(Labels {
        symbols: alphabet.symbols().to_vec(),
        digits: vec![0; width],
        remaining: total,
    })
}

/// Iterator returned by [`generate`].
#[derive(Debug, Clone)]
pub struct Labels {
    symbols: Vec<char>,
    digits: Vec<usize>,
    remaining: usize,
}

impl Iterator for Labels {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        let label = self.digits.iter().map(|&d| self.symbols[d]).collect();
        self.remaining -= 1;

        for digit in &mut self.digits {
            *digit += 1;
            if *digit < self.symbols.len() {
                break;
            }
            *digit = 0;
        }
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Labels {}

impl FusedIterator for Labels {}
