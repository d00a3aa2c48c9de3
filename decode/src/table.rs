//! # Decode Table
//!
//! A decode table maps an instruction word to the symbolic type of the best
//! matching [`PatternEntry`]. Patterns overlap on purpose (a catch-all for a
//! whole encoding space next to the exact encodings living inside it), so
//! every lookup applies the same resolution order:
//!
//! 1. highest `priority`
//! 2. most fixed bits (the most specific pattern)
//! 3. first registered
//!
//! ## Bucketing
//!
//! Scanning hundreds of entries per fetch is too slow, so at construction
//! time the table picks up to [`MAX_KEY_BITS`] bit positions that split the
//! entries best and precomputes, for each of the `2^k` values of those bits,
//! the list of entries that can still match, already sorted in resolution
//! order. A lookup extracts the key and walks one short bucket.
//!
//! ```text
//!  word ──► key bits ──► bucket[key] = [e17, e3, e250] ──► first match wins
//! ```

use std::fmt::Debug;

use crate::bitwise::Bits;
use crate::pattern::PatternEntry;

pub const MAX_KEY_BITS: usize = 12;

#[derive(Debug, Clone)]
struct Entry<T> {
    mask: u32,
    value: u32,
    ty: T,
    priority: u8,
    specificity: u32,
    order: usize,
}

/// A compiled, immutable decode table for one encoding width.
#[derive(Debug, Clone)]
pub struct DecodeTable<T> {
    name: &'static str,
    width: u8,
    entries: Vec<Entry<T>>,
    key_bits: Vec<u8>,
    /// `buckets[key]..buckets[key + 1]` is the slice of `slots` for `key`.
    buckets: Vec<u32>,
    slots: Vec<u16>,
}

impl<T: Copy + Debug> DecodeTable<T> {
    /// Builds the table from entries in registration order.
    ///
    /// # Panics
    ///
    /// Panics when an entry is not `width` bits wide.
    pub fn new(name: &'static str, width: u8, patterns: impl IntoIterator<Item = PatternEntry<T>>) -> Self {
        let mut entries: Vec<Entry<T>> = patterns
            .into_iter()
            .enumerate()
            .map(|(order, e)| {
                assert_eq!(
                    e.pattern.width, width,
                    "{name}: pattern {} for {:?} is not {width} bits wide",
                    e.pattern, e.ty
                );
                Entry {
                    mask: e.pattern.mask,
                    value: e.pattern.value,
                    ty: e.ty,
                    priority: e.priority,
                    specificity: e.pattern.specificity(),
                    order,
                }
            })
            .collect();
        assert!(entries.len() <= usize::from(u16::MAX), "{name}: too many entries");

        entries.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(b.specificity.cmp(&a.specificity))
                .then(a.order.cmp(&b.order))
        });

        let key_bits = select_key_bits(&entries, width);

        // Every entry projected onto the key space.
        let projected: Vec<(u32, u32)> = entries
            .iter()
            .map(|e| (compress(e.mask, &key_bits), compress(e.value, &key_bits)))
            .collect();

        let bucket_count = 1_usize << key_bits.len();
        let mut buckets = Vec::with_capacity(bucket_count + 1);
        let mut slots = Vec::new();
        for key in 0..bucket_count as u32 {
            buckets.push(slots.len() as u32);
            for (idx, (key_mask, key_value)) in projected.iter().enumerate() {
                if key & key_mask == *key_value {
                    slots.push(idx as u16);
                }
            }
        }
        buckets.push(slots.len() as u32);

        tracing::debug!(
            table = name,
            entries = entries.len(),
            key_bits = ?key_bits,
            slots = slots.len(),
            "decode table built"
        );

        Self {
            name,
            width,
            entries,
            key_bits,
            buckets,
            slots,
        }
    }

    /// Returns the type of the best matching entry, `None` when nothing
    /// matches.
    #[must_use]
    pub fn lookup(&self, word: u32) -> Option<T> {
        let key = compress(word, &self.key_bits) as usize;
        let range = self.buckets[key] as usize..self.buckets[key + 1] as usize;

        self.slots[range]
            .iter()
            .map(|&idx| &self.entries[usize::from(idx)])
            .find(|e| word & e.mask == e.value)
            .map(|e| e.ty)
    }

    /// Every matching entry in resolution order, as `(type, priority)`.
    ///
    /// This scans the whole table and is meant for diagnostics.
    pub fn candidates(&self, word: u32) -> impl Iterator<Item = (T, u8)> + '_ {
        self.entries
            .iter()
            .filter(move |e| word & e.mask == e.value)
            .map(|e| (e.ty, e.priority))
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bit positions used as bucket key, most significant key bit first.
    #[must_use]
    pub fn key_bits(&self) -> &[u8] {
        &self.key_bits
    }
}

/// Picks the bit positions splitting the entries most evenly.
///
/// A bit scores the smaller of "entries fixing it to 0" and "entries fixing
/// it to 1"; a bit every entry agrees on does not discriminate anything.
fn select_key_bits<T>(entries: &[Entry<T>], width: u8) -> Vec<u8> {
    let mut scores: Vec<(usize, usize, u8)> = (0..width)
        .map(|bit_idx| {
            let zeros = entries
                .iter()
                .filter(|e| e.mask.get_bit(bit_idx) && !e.value.get_bit(bit_idx))
                .count();
            let ones = entries
                .iter()
                .filter(|e| e.mask.get_bit(bit_idx) && e.value.get_bit(bit_idx))
                .count();
            (zeros.min(ones), zeros + ones, bit_idx)
        })
        .filter(|(split, _, _)| *split > 0)
        .collect();

    scores.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)).then(b.2.cmp(&a.2)));

    let mut key_bits: Vec<u8> = scores
        .into_iter()
        .take(MAX_KEY_BITS)
        .map(|(_, _, bit_idx)| bit_idx)
        .collect();
    key_bits.sort_unstable_by(|a, b| b.cmp(a));
    key_bits
}

/// Gathers the bits of `word` at `key_bits` into a dense key.
fn compress(word: u32, key_bits: &[u8]) -> u32 {
    key_bits
        .iter()
        .fold(0, |key, &bit_idx| (key << 1) | u32::from(word.get_bit(bit_idx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::entry;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Synthetic {
        Wide,
        Narrow,
        First,
        Second,
        Specific,
    }

    #[test]
    fn higher_priority_wins() {
        let table = DecodeTable::new(
            "synthetic",
            16,
            [
                entry("1010............", Synthetic::Wide, 0),
                entry("1010.......1....", Synthetic::Narrow, 1),
            ],
        );

        assert_eq!(table.lookup(0b1010_0000_0001_0000), Some(Synthetic::Narrow));
        assert_eq!(table.lookup(0b1010_0000_0000_0000), Some(Synthetic::Wide));
    }

    #[test]
    fn priority_beats_specificity() {
        let table = DecodeTable::new(
            "synthetic",
            16,
            [
                entry("1010000000010000", Synthetic::Specific, 0),
                entry("1010............", Synthetic::Wide, 1),
            ],
        );

        assert_eq!(table.lookup(0b1010_0000_0001_0000), Some(Synthetic::Wide));
    }

    #[test]
    fn most_specific_wins_on_same_priority() {
        let table = DecodeTable::new(
            "synthetic",
            16,
            [
                entry("1010............", Synthetic::Wide, 0),
                entry("1010....1111....", Synthetic::Specific, 0),
            ],
        );

        assert_eq!(table.lookup(0b1010_0000_1111_0000), Some(Synthetic::Specific));
        assert_eq!(table.lookup(0b1010_0000_1110_0000), Some(Synthetic::Wide));
    }

    #[test]
    fn first_registered_wins_on_full_tie() {
        let table = DecodeTable::new(
            "synthetic",
            16,
            [
                entry("1.1.............", Synthetic::First, 0),
                entry("1..1............", Synthetic::Second, 0),
            ],
        );

        assert_eq!(table.lookup(0b1011_0000_0000_0000), Some(Synthetic::First));
        assert_eq!(
            table.candidates(0b1011_0000_0000_0000).collect::<Vec<_>>(),
            vec![(Synthetic::First, 0), (Synthetic::Second, 0)]
        );
    }

    #[test]
    fn unmatched_word_is_none() {
        let table = DecodeTable::new("synthetic", 16, [entry("1111............", Synthetic::Wide, 0)]);

        assert_eq!(table.lookup(0x0FFF), None);
    }

    #[test]
    #[should_panic(expected = "not 32 bits wide")]
    fn width_mismatch_panics() {
        let _ = DecodeTable::new("synthetic", 32, [entry("1111............", Synthetic::Wide, 0)]);
    }

    #[test]
    fn bucketed_lookup_agrees_with_linear_scan() {
        let patterns = [
            entry("0000............", Synthetic::Wide, 0),
            entry("00001...........", Synthetic::Narrow, 0),
            entry("0000111100000000", Synthetic::Specific, 2),
            entry("1...............", Synthetic::First, 0),
            entry("1.....1.........", Synthetic::Second, 1),
        ];
        let table = DecodeTable::new("synthetic", 16, patterns);

        for word in 0..=u32::from(u16::MAX) {
            let linear = table.candidates(word).next().map(|(ty, _)| ty);
            assert_eq!(table.lookup(word), linear, "word {word:#06x}");
        }
    }
}
