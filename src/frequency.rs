use std::collections::BTreeMap;

use crate::Symbol;

/// Mapping from symbol to occurrence count. Ordered, so that everything
/// seeded from it (in particular the tree builder's heap) behaves the same
/// across runs.
pub type FreqTable = BTreeMap<Symbol, u64>;

/// Counts the occurrences of every distinct symbol in the stream.
pub fn count_frequencies<I>(symbols: I) -> FreqTable
where
    I: IntoIterator<Item = Symbol>,
{
    let mut freqs = FreqTable::new();

    for symbol in symbols {
        freqs.entry(symbol).and_modify(|f| *f += 1).or_insert(1);
    }

    freqs
}

#[test]
fn counts_every_occurrence_exactly() {
    let freqs = count_frequencies("abracadabra".encode_utf16());

    assert_eq!(freqs.len(), 5);
    assert_eq!(freqs[&(b'a' as Symbol)], 5);
    assert_eq!(freqs[&(b'b' as Symbol)], 2);
    assert_eq!(freqs[&(b'c' as Symbol)], 1);
    assert_eq!(freqs[&(b'd' as Symbol)], 1);
    assert_eq!(freqs[&(b'r' as Symbol)], 2);
}

#[test]
fn empty_stream_counts_nothing() {
    assert!(count_frequencies("".encode_utf16()).is_empty());
}
