//! Open Reading Frame (ORF) finder.
//!
//! Scans the three forward reading frames of a nucleotide sequence. An ORF
//! begins at a start codon (AUG) and ends with the next in-frame stop codon
//! (UAA, UAG, UGA). A start codon that runs off the end of the sequence
//! without meeting a stop is not an ORF.

use tracing::debug;

use crate::alphabet::STOP;
use crate::codon::{is_start, translate_codon};
use crate::protein::ProteinSequence;

/// An open reading frame found by [`find_orfs`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orf {
    /// Position of the first base of the start codon (0-indexed).
    pub start: usize,
    /// Position just past the stop codon (exclusive).
    pub end: usize,
    /// Translated residues, start methionine included, stop excluded.
    pub protein: ProteinSequence,
}

impl Orf {
    /// Reading frame (0, 1 or 2) the ORF lies in.
    pub fn frame(&self) -> usize {
        self.start % 3
    }

    /// Length in nucleotides, stop codon included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty. Never true for scan results.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// `(start, end, protein)` as a plain tuple.
    pub fn into_parts(self) -> (usize, usize, ProteinSequence) {
        (self.start, self.end, self.protein)
    }
}

/// Find ORFs in all three forward reading frames.
///
/// Within a frame the scan advances one codon at a time. On a start codon it
/// translates until the next in-frame stop codon and reports the ORF if the
/// protein has at least `min_length` residues; scanning then resumes right
/// after the stop codon, so ORFs in one frame never overlap. Results are
/// grouped by frame, in order of position within each frame. Input may be
/// RNA or DNA.
///
/// # Example
///
/// ```
/// use nucleo_seq::orf::find_orfs;
///
/// let orfs = find_orfs(b"AUGAAAUAA", 1);
/// assert_eq!(orfs.len(), 1);
/// assert_eq!((orfs[0].start, orfs[0].end), (0, 9));
/// assert_eq!(orfs[0].protein, "MK");
/// ```
pub fn find_orfs(seq: &[u8], min_length: usize) -> Vec<Orf> {
    let mut results = Vec::new();
    let len = seq.len();

    for frame in 0..3 {
        let mut pos = frame;

        while pos + 3 <= len {
            if !is_start(&seq[pos..pos + 3]) {
                pos += 3;
                continue;
            }

            let start = pos;
            let mut protein = Vec::new();
            let mut cursor = pos;
            while cursor + 3 <= len {
                let aa = translate_codon(&seq[cursor..cursor + 3]);
                cursor += 3;
                if aa == STOP {
                    if protein.len() >= min_length {
                        results.push(Orf {
                            start,
                            end: cursor,
                            protein: ProteinSequence::from_translation(protein),
                        });
                    }
                    break;
                }
                protein.push(aa);
            }
            pos = cursor;
        }
    }

    debug!(len, min_length, found = results.len(), "ORF scan complete");
    results
}
