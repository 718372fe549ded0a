//! Protein (amino acid) sequences.
//!
//! A [`ProteinSequence`] is either *strict*, admitting only the 20 standard
//! residues, or *extended*, additionally admitting `*` (stop), `X` (unknown)
//! and `-` (gap). The mode is fixed at construction. Equality and hashing
//! depend on the residues only, never on the mode.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use nucleo_core::{ContentAddressable, NucleoError, Result, Sequence, Summarizable};

use crate::alphabet::{
    is_standard_amino_acid, Alphabet, ProteinAlphabet, EXTENDED_AMINO_ACIDS,
    STANDARD_AMINO_ACIDS,
};
use crate::seq::{self, ValidatedSeq};

/// A validated protein sequence.
#[derive(Clone)]
pub struct ProteinSequence {
    residues: ValidatedSeq<ProteinAlphabet>,
    strict: bool,
}

impl ProteinSequence {
    /// Create a strict protein sequence (20 standard residues only).
    ///
    /// # Example
    ///
    /// ```
    /// use nucleo_seq::ProteinSequence;
    ///
    /// let p = ProteinSequence::new("mkv").unwrap();
    /// assert_eq!(p, "MKV");
    /// assert!(ProteinSequence::new("MK*").is_err());
    /// ```
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_strictness(bytes, true)
    }

    /// Create an extended protein sequence that also accepts `*`, `X` and `-`.
    pub fn extended(bytes: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_strictness(bytes, false)
    }

    /// Create a protein sequence, choosing the residue set with `strict`.
    ///
    /// Fails with [`NucleoError::InvalidProtein`] listing every distinct
    /// offending symbol.
    pub fn with_strictness(bytes: impl AsRef<[u8]>, strict: bool) -> Result<Self> {
        let data = seq::normalize(bytes.as_ref());
        let (invalid, valid) = if strict {
            (
                seq::invalid_symbols(&data, is_standard_amino_acid),
                STANDARD_AMINO_ACIDS,
            )
        } else {
            (
                seq::invalid_symbols(&data, ProteinAlphabet::is_valid),
                EXTENDED_AMINO_ACIDS,
            )
        };
        if !invalid.is_empty() {
            return Err(NucleoError::InvalidProtein { invalid, valid });
        }
        Ok(Self {
            residues: ValidatedSeq::from_validated(data),
            strict,
        })
    }

    /// Wrap translation output. Translation only emits table residues, `*`
    /// and `X`, so the result is always a valid extended sequence.
    pub(crate) fn from_translation(data: Vec<u8>) -> Self {
        Self {
            residues: ValidatedSeq::from_validated(data),
            strict: false,
        }
    }

    /// Whether this sequence was validated against the standard residues only.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// A copy with every stop marker removed, validated strictly.
    ///
    /// Fails if unknown or gap markers remain.
    pub fn without_stops(&self) -> Result<Self> {
        let kept: Vec<u8> = self.iter().copied().filter(|&b| b != b'*').collect();
        Self::new(kept)
    }

    /// Iterate over the residues as `char`s. Each call starts from the beginning.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.residues.symbols()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.residues.into_bytes()
    }
}

impl Deref for ProteinSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.residues
    }
}

impl AsRef<[u8]> for ProteinSequence {
    fn as_ref(&self) -> &[u8] {
        &self.residues
    }
}

impl<'a> IntoIterator for &'a ProteinSequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.residues.iter()
    }
}

impl std::str::FromStr for ProteinSequence {
    type Err = NucleoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Sequence for ProteinSequence {
    fn as_bytes(&self) -> &[u8] {
        &self.residues
    }
}

impl ContentAddressable for ProteinSequence {
    fn content_hash(&self) -> String {
        self.residues.content_hash()
    }
}

impl Summarizable for ProteinSequence {
    fn summary(&self) -> String {
        seq::summary_line(ProteinAlphabet::NAME, "aa", &self.residues)
    }
}

impl fmt::Debug for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProteinSequence(\"{}\")", seq::debug_preview(&self.residues))
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for ProteinSequence {
    fn eq(&self, other: &Self) -> bool {
        self.residues == other.residues
    }
}

impl Eq for ProteinSequence {}

impl PartialEq<str> for ProteinSequence {
    fn eq(&self, other: &str) -> bool {
        self.residues == *other
    }
}

impl PartialEq<&str> for ProteinSequence {
    fn eq(&self, other: &&str) -> bool {
        self.residues == *other
    }
}

impl Hash for ProteinSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.residues.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProteinSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.residues, serializer)
    }
}

/// Deserializes in extended mode so translation output round-trips.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProteinSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::extended(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
