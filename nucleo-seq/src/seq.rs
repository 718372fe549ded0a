//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases and validates every byte.
//! The inner data is always uppercase, so `Deref<Target=[u8]>` and
//! `as_bytes()` are zero-cost and safe to pass to downstream `&[u8]` APIs.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Bound, Deref, RangeBounds};

use nucleo_core::{ContentAddressable, NucleoError, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// Sequences longer than this are abbreviated in `Debug` output.
const DEBUG_FULL_LEN: usize = 50;
const DEBUG_EDGE_LEN: usize = 25;

/// Uppercase `bytes` into a fresh buffer.
pub(crate) fn normalize(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| b.to_ascii_uppercase()).collect()
}

/// Distinct symbols of `data` rejected by `is_valid`, sorted.
///
/// Input is decoded as UTF-8 first so multi-byte characters are reported
/// as typed (uppercased), not as their individual bytes.
pub(crate) fn invalid_symbols(data: &[u8], is_valid: impl Fn(u8) -> bool) -> Vec<char> {
    if data.is_ascii() {
        return data
            .iter()
            .copied()
            .filter(|&b| !is_valid(b))
            .collect::<BTreeSet<u8>>()
            .into_iter()
            .map(char::from)
            .collect();
    }
    String::from_utf8_lossy(data)
        .chars()
        .filter(|&c| !(c.is_ascii() && is_valid(c as u8)))
        .map(|c| {
            // keep characters whose uppercase form is not a single char (ß)
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// `Debug` body shared by all sequence types: the symbols, abbreviated to
/// the first and last 25 when longer than 50.
pub(crate) fn debug_preview(data: &[u8]) -> String {
    let s = String::from_utf8_lossy(data);
    if data.len() > DEBUG_FULL_LEN {
        format!(
            "{}...{}",
            &s[..DEBUG_EDGE_LEN],
            &s[s.len() - DEBUG_EDGE_LEN..]
        )
    } else {
        s.into_owned()
    }
}

/// One-line summary shared by all sequence types.
pub(crate) fn summary_line(name: &str, unit: &str, data: &[u8]) -> String {
    let preview_len = data.len().min(20);
    let preview = String::from_utf8_lossy(&data[..preview_len]);
    if data.len() > 20 {
        format!("{} sequence ({} {}): {}...", name, data.len(), unit, preview)
    } else {
        format!("{} sequence ({} {}): {}", name, data.len(), unit, preview)
    }
}

/// A validated biological sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA. The inner bytes are always uppercase and never change after
/// construction; every transforming operation returns a new value.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    /// On failure the error lists every distinct offending symbol together
    /// with the valid alphabet; no partial sequence is produced.
    pub fn new(bytes: impl AsRef<[u8]>) -> nucleo_core::Result<Self> {
        let data = normalize(bytes.as_ref());
        let invalid = invalid_symbols(&data, A::is_valid);
        if !invalid.is_empty() {
            return Err(NucleoError::InvalidSequence {
                alphabet: A::NAME,
                invalid,
                valid: A::VALID_STR,
            });
        }
        Ok(Self::from_validated(data))
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Copy out a sub-range as a new sequence of the same variant.
    ///
    /// Returns `None` if the range is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<Self> {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.data
            .get(bounds)
            .map(|sub| Self::from_validated(sub.to_vec()))
    }

    /// Iterate over the symbols as `char`s. Each call starts from the beginning.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.data.iter().map(|&b| char::from(b))
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a ValidatedSeq<A> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<A: Alphabet> std::str::FromStr for ValidatedSeq<A> {
    type Err = NucleoError;

    fn from_str(s: &str) -> nucleo_core::Result<Self> {
        Self::new(s)
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> ContentAddressable for ValidatedSeq<A> {
    fn content_hash(&self) -> String {
        nucleo_core::hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        summary_line(A::NAME, "bp", &self.data)
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, debug_preview(&self.data))
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> PartialEq<str> for ValidatedSeq<A> {
    fn eq(&self, other: &str) -> bool {
        self.data.eq_ignore_ascii_case(other.as_bytes())
    }
}

impl<A: Alphabet> PartialEq<&str> for ValidatedSeq<A> {
    fn eq(&self, other: &&str) -> bool {
        self.data.eq_ignore_ascii_case(other.as_bytes())
    }
}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        A::NAME.hash(state);
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DnaAlphabet, RnaAlphabet};
    use std::collections::HashSet;

    type DnaSeq = ValidatedSeq<DnaAlphabet>;

    #[test]
    fn stores_uppercase() {
        let seq = DnaSeq::new(b"acgt").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT");
    }

    #[test]
    fn empty_sequence_ok() {
        let seq = DnaSeq::new(b"").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn deref_to_slice() {
        let seq = DnaSeq::new(b"ACGT").unwrap();
        let slice: &[u8] = &seq;
        assert_eq!(slice, b"ACGT");
        assert_eq!(seq[0], b'A');
        assert_eq!(&seq[1..3], b"CG");
    }

    #[test]
    fn slice_returns_same_variant() {
        let seq = DnaSeq::new(b"AACCGGTT").unwrap();
        assert_eq!(seq.slice(2..6).unwrap(), "CCGG");
        assert_eq!(seq.slice(..2).unwrap(), "AA");
        assert!(seq.slice(4..20).is_none());
    }

    #[test]
    fn iteration_restarts() {
        let seq = DnaSeq::new(b"GATC").unwrap();
        let first: String = seq.symbols().collect();
        let second: String = seq.symbols().collect();
        assert_eq!(first, "GATC");
        assert_eq!(first, second);
        assert_eq!((&seq).into_iter().count(), 4);
    }

    #[test]
    fn rejects_invalid_bytes_with_details() {
        let err = DnaSeq::new(b"ACGXUX").unwrap_err();
        match err {
            NucleoError::InvalidSequence {
                alphabet,
                invalid,
                valid,
            } => {
                assert_eq!(alphabet, "DNA");
                assert_eq!(invalid, vec!['U', 'X']);
                assert_eq!(valid, "ACGT");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn non_ascii_symbols_reported_whole() {
        let err = DnaSeq::new("ACGé").unwrap_err();
        assert_eq!(err.invalid_symbols(), &['É']);

        let err = DnaSeq::new("aéxé").unwrap_err();
        assert_eq!(err.invalid_symbols(), &['X', 'É']);
    }

    #[test]
    fn equality_with_raw_strings() {
        let seq = DnaSeq::new(b"ATGC").unwrap();
        assert_eq!(seq, "atgc");
        assert!(seq == *"ATGC");
        assert!(seq != "ATG");
    }

    #[test]
    fn hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(DnaSeq::new(b"acgt").unwrap());
        assert!(set.contains(&DnaSeq::new(b"ACGT").unwrap()));
        assert!(!set.contains(&DnaSeq::new(b"ACGA").unwrap()));
    }

    #[test]
    fn content_addressable_deterministic() {
        let seq1 = DnaSeq::new(b"ACGT").unwrap();
        let seq2 = DnaSeq::new(b"acgt").unwrap();
        assert_eq!(seq1.content_hash(), seq2.content_hash());
    }

    #[test]
    fn debug_abbreviates_long_sequences() {
        let short = DnaSeq::new(b"ACGT").unwrap();
        assert_eq!(format!("{short:?}"), "DNA(\"ACGT\")");

        let long = DnaSeq::new("A".repeat(30) + &"C".repeat(30)).unwrap();
        let dbg = format!("{long:?}");
        assert_eq!(dbg, format!("DNA(\"{}...{}\")", "A".repeat(25), "C".repeat(25)));
    }

    #[test]
    fn summary_and_display() {
        let seq = ValidatedSeq::<RnaAlphabet>::new(b"augc").unwrap();
        assert_eq!(seq.to_string(), "AUGC");
        assert_eq!(seq.summary(), "RNA sequence (4 bp): AUGC");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_revalidates() {
        let seq = DnaSeq::new(b"acgt").unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"ACGT\"");
        let back: DnaSeq = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
        assert!(serde_json::from_str::<DnaSeq>("\"ACGU\"").is_err());
    }

    #[test]
    fn from_str_validates() {
        let seq: DnaSeq = "gattaca".parse().unwrap();
        assert_eq!(seq, "GATTACA");
        assert!("GAUUACA".parse::<DnaSeq>().is_err());
    }
}
