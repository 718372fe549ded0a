//! Concrete sequence type aliases and cross-variant operations.
//!
//! - [`DnaSequence`]: transcription, translation
//! - [`RnaSequence`]: reverse transcription, translation, ORF finding
//!
//! Conversions between variants are free functions ([`transcribe`],
//! [`reverse_transcribe`]) over plain values; the methods delegate to them.

use nucleo_core::Result;

use crate::alphabet::{DnaAlphabet, RnaAlphabet};
use crate::codon::{self, TranslationOptions, TranslationResult};
use crate::orf::{self, Orf};
use crate::protein::ProteinSequence;
use crate::seq::ValidatedSeq;

/// A validated DNA sequence (`ACGT`).
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence (`ACGU`).
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// Transcribe DNA to RNA (T → U).
pub fn transcribe(dna: &DnaSequence) -> RnaSequence {
    let rna: Vec<u8> = dna
        .iter()
        .map(|&b| if b == b'T' { b'U' } else { b })
        .collect();
    RnaSequence::from_validated(rna)
}

/// Reverse-transcribe RNA to DNA (U → T).
pub fn reverse_transcribe(rna: &RnaSequence) -> DnaSequence {
    let dna: Vec<u8> = rna
        .iter()
        .map(|&b| if b == b'U' { b'T' } else { b })
        .collect();
    DnaSequence::from_validated(dna)
}

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl DnaSequence {
    /// Transcribe DNA to RNA (T → U).
    pub fn transcribe(&self) -> RnaSequence {
        transcribe(self)
    }

    /// Transcribe, then translate. See [`RnaSequence::translate`].
    pub fn translate(&self, options: TranslationOptions) -> TranslationResult {
        self.transcribe().translate(options)
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl RnaSequence {
    /// Reverse-transcribe RNA to DNA (U → T).
    pub fn reverse_transcribe(&self) -> DnaSequence {
        reverse_transcribe(self)
    }

    /// Translate to protein using the standard genetic code.
    ///
    /// ```
    /// use nucleo_seq::{RnaSequence, TranslationOptions};
    ///
    /// let rna = RnaSequence::new("AUGUUUUAA").unwrap();
    /// let result = rna.translate(TranslationOptions::default());
    /// assert_eq!(result.protein, "MF");
    /// assert!(result.stop_codon);
    /// assert_eq!(result.remaining_bases, 0);
    /// ```
    pub fn translate(&self, options: TranslationOptions) -> TranslationResult {
        codon::translate(self, options)
    }

    /// Translate and return a strict protein with stop markers removed.
    ///
    /// Fails only if translation produced an unknown residue, which the RNA
    /// alphabet rules out.
    pub fn translate_to_protein(&self, options: TranslationOptions) -> Result<ProteinSequence> {
        self.translate(options).protein.without_stops()
    }

    /// ORFs in the three forward frames with at least `min_length` residues.
    pub fn find_orfs(&self, min_length: usize) -> Vec<Orf> {
        orf::find_orfs(self, min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Transcription ---

    #[test]
    fn dna_to_rna() {
        let dna = DnaSequence::new(b"ATCG").unwrap();
        let rna = dna.transcribe();
        assert_eq!(rna.as_ref(), b"AUCG");
    }

    #[test]
    fn rna_to_dna() {
        let rna = RnaSequence::new(b"AUCG").unwrap();
        let dna = rna.reverse_transcribe();
        assert_eq!(dna.as_ref(), b"ATCG");
    }

    #[test]
    fn free_functions_match_methods() {
        let dna = DnaSequence::new(b"GATTACA").unwrap();
        assert_eq!(transcribe(&dna), dna.transcribe());
        let rna = dna.transcribe();
        assert_eq!(reverse_transcribe(&rna), rna.reverse_transcribe());
    }

    #[test]
    fn transcription_roundtrip() {
        let dna = DnaSequence::new(b"ATCGATCG").unwrap();
        let roundtrip = dna.transcribe().reverse_transcribe();
        assert_eq!(dna, roundtrip);
    }

    #[test]
    fn rna_rejects_thymine_and_unknowns() {
        for input in ["ACGT", "AUGX"] {
            match RnaSequence::new(input).unwrap_err() {
                nucleo_core::NucleoError::InvalidSequence {
                    alphabet,
                    invalid,
                    valid,
                } => {
                    assert_eq!(alphabet, "RNA");
                    assert_eq!(invalid.len(), 1);
                    assert_eq!(valid, "ACGU");
                }
                other => panic!("unexpected error {other:?}"),
            }
        }
        let err = RnaSequence::new("augtx").unwrap_err();
        assert_eq!(err.invalid_symbols(), &['T', 'X']);
    }

    // --- Translation ---

    #[test]
    fn translate_aug_uuu_uaa() {
        let rna = RnaSequence::new(b"AUGUUUUAA").unwrap();
        let r = rna.translate(TranslationOptions::default());
        assert_eq!(r.protein, "MF");
        assert!(r.stop_codon);
        assert_eq!(r.remaining_bases, 0);
    }

    #[test]
    fn translate_from_first_base() {
        let rna = RnaSequence::new(b"UUUUUU").unwrap();
        let r = rna.translate(TranslationOptions::from_first_base());
        assert_eq!(r.protein, "FF");
    }

    #[test]
    fn dna_translate_goes_through_rna() {
        let dna = DnaSequence::new(b"ccatgaaagcttaa").unwrap();
        let r = dna.translate(TranslationOptions::default());
        assert_eq!(r.protein, "MKA");
        assert!(r.stop_codon);
    }

    #[test]
    fn translate_to_protein_is_strict() {
        let rna = RnaSequence::new(b"AUGUUUUAAGGG").unwrap();
        let p = rna.translate_to_protein(TranslationOptions::read_through()).unwrap();
        assert_eq!(p, "MFG");
        assert!(p.is_strict());
    }

    #[test]
    fn values_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DnaSequence>();
        assert_send_sync::<RnaSequence>();
        assert_send_sync::<ProteinSequence>();
        assert_send_sync::<TranslationResult>();
        assert_send_sync::<Orf>();
    }

    // --- ORFs ---

    #[test]
    fn find_orfs_method() {
        let rna = RnaSequence::new(b"AUGAAAUAA").unwrap();
        let orfs = rna.find_orfs(1);
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].protein, "MK");
        assert!(RnaSequence::new(b"AUGAAAAAA").unwrap().find_orfs(1).is_empty());
    }
}
