//! Alphabet definitions for biological sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type. The
//! nucleic-acid alphabets additionally implement [`NucleicAlphabet`], which
//! carries the base-pairing table used by complement operations.

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors uppercase input first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// `VALID_BYTES` as a string, for error messages.
    const VALID_STR: &'static str;

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// A nucleic-acid alphabet with a Watson-Crick pairing table.
pub trait NucleicAlphabet: Alphabet {
    /// Pairs `(base, partner)`; every valid base appears exactly once on the left.
    const PAIRS: &'static [(u8, u8)];

    /// Pairing partner of `b`. Bytes outside the table map to themselves.
    fn complement(b: u8) -> u8 {
        Self::PAIRS
            .iter()
            .find(|&&(base, _)| base == b)
            .map_or(b, |&(_, partner)| partner)
    }
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
    const VALID_STR: &'static str = "ACGT";
}

impl NucleicAlphabet for DnaAlphabet {
    const PAIRS: &'static [(u8, u8)] = &[(b'A', b'T'), (b'T', b'A'), (b'G', b'C'), (b'C', b'G')];
}

/// RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
    const VALID_STR: &'static str = "ACGU";
}

impl NucleicAlphabet for RnaAlphabet {
    const PAIRS: &'static [(u8, u8)] = &[(b'A', b'U'), (b'U', b'A'), (b'G', b'C'), (b'C', b'G')];
}

/// Protein alphabet: the 20 standard amino acids plus `*` (stop), `X`
/// (unknown residue) and `-` (gap).
///
/// Strict protein sequences only admit [`STANDARD_AMINO_ACIDS`]; see
/// [`ProteinSequence`](crate::ProteinSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

/// The 20 standard amino acids.
pub const STANDARD_AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Standard residues plus stop, unknown and gap markers.
pub const EXTENDED_AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY*X-";

/// Stop marker produced by translation.
pub const STOP: u8 = b'*';

/// Unknown residue marker.
pub const UNKNOWN: u8 = b'X';

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const VALID_BYTES: &'static [u8] = EXTENDED_AMINO_ACIDS.as_bytes();
    const VALID_STR: &'static str = EXTENDED_AMINO_ACIDS;
}

/// Whether `b` is one of the 20 standard amino acids.
pub fn is_standard_amino_acid(b: u8) -> bool {
    STANDARD_AMINO_ACIDS.as_bytes().contains(&b)
}
