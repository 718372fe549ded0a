//! Validated biological sequences and the properties derived from them.
//!
//! Provides strongly-typed, immutable sequence types and the analyses built
//! on them:
//!
//! - **Alphabets**: [`DnaAlphabet`], [`RnaAlphabet`], [`ProteinAlphabet`]
//! - **Sequences**: [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`]
//! - **Nucleic acid operations**: complement, reverse complement, GC content
//! - **Transcription and translation**: standard genetic code, [`TranslationResult`]
//! - **ORF finding**: three forward frames via [`orf::find_orfs`]
//! - **Protein properties**: mass, composition, hydropathy, charge, pI,
//!   extinction coefficient
//! - **DNA composition**: base frequencies, motif search
//!
//! # Example
//!
//! ```
//! use nucleo_seq::{DnaSequence, TranslationOptions};
//!
//! // Lowercase input is normalized
//! let dna = DnaSequence::new("atgaaagcttaa").unwrap();
//! assert_eq!(dna, "ATGAAAGCTTAA");
//!
//! // Reverse complement
//! assert_eq!(dna.reverse_complement(), "TTAAGCTTTCAT");
//!
//! // Transcribe DNA → RNA
//! let rna = dna.transcribe();
//! assert_eq!(rna, "AUGAAAGCUUAA");
//!
//! // Translate RNA → protein (stops at UAA)
//! let result = rna.translate(TranslationOptions::default());
//! assert_eq!(result.protein, "MKA");
//!
//! // Protein properties
//! let protein = rna.translate_to_protein(TranslationOptions::default()).unwrap();
//! assert!(protein.molecular_weight() > 300.0);
//! assert!(protein.isoelectric_point() > 7.0);
//! ```

pub mod alphabet;
pub mod analysis;
pub mod codon;
mod nucleic;
pub mod orf;
pub mod protein;
pub mod protein_properties;
pub mod seq;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, NucleicAlphabet, ProteinAlphabet, RnaAlphabet};

// Re-export the generic sequence type
pub use seq::ValidatedSeq;

// Re-export concrete sequence types and cross-variant conversions
pub use protein::ProteinSequence;
pub use types::{reverse_transcribe, transcribe, DnaSequence, RnaSequence};

// Re-export translation
pub use codon::{translate, translate_codon, TranslationOptions, TranslationResult};

// Re-export ORF and property records
pub use orf::{find_orfs, Orf};
pub use protein_properties::{AminoAcidComposition, ExtinctionCoefficient, ProteinProperties};

// Re-export DNA composition analysis
pub use analysis::{base_frequency, find_motif, BaseFrequency};

pub use nucleo_core::{NucleoError, Result};
