//! Codon lookup and RNA → protein translation.
//!
//! Uses the standard genetic code (NCBI Table 1) as a 64-entry lookup array.
//! Codons are accepted in RNA (`U`) or DNA (`T`) form.

use tracing::trace;

use crate::alphabet::{STOP, UNKNOWN};
use crate::protein::ProteinSequence;

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T/U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

// Codon order: AAA, AAC, AAG, AAU, ACA, ACC, ACG, ACU, AGA, AGC, AGG, AGU,
//              AUA, AUC, AUG, AUU, CAA, CAC, CAG, CAU, CCA, CCC, CCG, CCU,
//              CGA, CGC, CGG, CGU, CUA, CUC, CUG, CUU, GAA, GAC, GAG, GAU,
//              GCA, GCC, GCG, GCU, GGA, GGC, GGG, GGU, GUA, GUC, GUG, GUU,
//              UAA, UAC, UAG, UAU, UCA, UCC, UCG, UCU, UGA, UGC, UGG, UGU,
//              UUA, UUC, UUG, UUU

/// Standard genetic code (NCBI Table 1).
const STANDARD_TABLE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Index of AUG in the table.
const START_INDEX: usize = 14;

/// The start codon in RNA form.
pub const START_CODON: &[u8; 3] = b"AUG";

/// Translate a single codon to its amino acid.
///
/// Stop codons yield `b'*'`; anything that is not three unambiguous bases
/// yields the unknown marker `b'X'`.
pub fn translate_codon(codon: &[u8]) -> u8 {
    codon_index(codon).map_or(UNKNOWN, |idx| STANDARD_TABLE[idx])
}

/// Whether `codon` is the start codon (AUG/ATG).
pub fn is_start(codon: &[u8]) -> bool {
    codon_index(codon) == Some(START_INDEX)
}

/// Whether `codon` is one of the three stop codons.
pub fn is_stop(codon: &[u8]) -> bool {
    codon_index(codon).map_or(false, |idx| STANDARD_TABLE[idx] == STOP)
}

/// Position of the first start codon at any offset, if any.
pub fn find_start_codon(seq: &[u8]) -> Option<usize> {
    seq.windows(3).position(is_start)
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// How [`translate`] treats start and stop codons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationOptions {
    /// Begin at the first AUG, skipping anything upstream of it.
    pub start_at_start_codon: bool,
    /// End at the first stop codon instead of emitting `*` and continuing.
    pub stop_at_stop: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            start_at_start_codon: true,
            stop_at_stop: true,
        }
    }
}

impl TranslationOptions {
    /// Translate from position 0, stopping at the first stop codon.
    pub fn from_first_base() -> Self {
        Self {
            start_at_start_codon: false,
            ..Self::default()
        }
    }

    /// Translate every codon, emitting `*` for stops.
    pub fn read_through() -> Self {
        Self {
            stop_at_stop: false,
            ..Self::default()
        }
    }
}

/// Outcome of a single translation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationResult {
    /// Translated residues. May contain `*` when reading through stops and
    /// `X` for unrecognized codons.
    pub protein: ProteinSequence,
    /// Whether a stop codon was encountered.
    pub stop_codon: bool,
    /// Bases left untranslated at the end of the working sequence.
    pub remaining_bases: usize,
}

/// Translate a nucleotide sequence according to `options`.
///
/// Codons are read in non-overlapping triplets. A trailing partial codon is
/// never translated; it is counted in `remaining_bases` together with
/// anything left after a terminating stop codon.
pub fn translate(seq: &[u8], options: TranslationOptions) -> TranslationResult {
    let working = if options.start_at_start_codon {
        match find_start_codon(seq) {
            Some(pos) => &seq[pos..],
            None => {
                trace!(len = seq.len(), "no start codon; nothing translated");
                return TranslationResult {
                    protein: ProteinSequence::from_translation(Vec::new()),
                    stop_codon: false,
                    remaining_bases: seq.len(),
                };
            }
        }
    } else {
        seq
    };

    let mut protein = Vec::with_capacity(working.len() / 3);
    let mut stop_codon = false;
    let mut consumed = 0;

    for codon in working.chunks_exact(3) {
        let aa = translate_codon(codon);
        consumed += 3;
        if aa == STOP {
            stop_codon = true;
            if options.stop_at_stop {
                break;
            }
        }
        protein.push(aa);
    }

    TranslationResult {
        protein: ProteinSequence::from_translation(protein),
        stop_codon,
        remaining_bases: working.len() - consumed,
    }
}
