//! Compositional analysis of DNA sequences.
//!
//! - [`base_frequency`]: per-base counts and ratios
//! - [`find_motif`]: every (overlapping) occurrence of a short motif
//! - [`dna_molecular_weight`]: approximate single-stranded mass

use nucleo_core::{NucleoError, Result};

use crate::alphabet::{Alphabet, DnaAlphabet};
use crate::types::DnaSequence;

/// Base counts of a DNA sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseFrequency {
    /// Number of `A` bases.
    pub a_count: usize,
    /// Number of `C` bases.
    pub c_count: usize,
    /// Number of `G` bases.
    pub g_count: usize,
    /// Number of `T` bases.
    pub t_count: usize,
    /// Sequence length.
    pub total: usize,
}

impl BaseFrequency {
    /// `count / total`, 0.0 for an empty sequence.
    fn ratio(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    /// Fraction of bases that are `A`.
    pub fn a_ratio(&self) -> f64 {
        self.ratio(self.a_count)
    }

    /// Fraction of bases that are `C`.
    pub fn c_ratio(&self) -> f64 {
        self.ratio(self.c_count)
    }

    /// Fraction of bases that are `G`.
    pub fn g_ratio(&self) -> f64 {
        self.ratio(self.g_count)
    }

    /// Fraction of bases that are `T`.
    pub fn t_ratio(&self) -> f64 {
        self.ratio(self.t_count)
    }
}

/// Count each base. Ratios of an empty sequence are all 0.0.
pub fn base_frequency(seq: &DnaSequence) -> BaseFrequency {
    let mut freq = BaseFrequency {
        a_count: 0,
        c_count: 0,
        g_count: 0,
        t_count: 0,
        total: seq.len(),
    };
    for &b in seq.iter() {
        match b {
            b'A' => freq.a_count += 1,
            b'C' => freq.c_count += 1,
            b'G' => freq.g_count += 1,
            b'T' => freq.t_count += 1,
            _ => {}
        }
    }
    freq
}

/// All 0-based positions where `motif` occurs in `seq`, overlaps included.
///
/// The motif is case-insensitive and must be a non-empty string over the
/// DNA alphabet; it is checked before any scanning.
///
/// # Example
///
/// ```
/// use nucleo_seq::{analysis::find_motif, DnaSequence};
///
/// let seq = DnaSequence::new("ATGATGATG").unwrap();
/// assert_eq!(find_motif(&seq, "atg").unwrap(), vec![0, 3, 6]);
/// assert_eq!(find_motif(&seq, "GATGA").unwrap(), vec![2]);
/// assert!(find_motif(&seq, "AUG").is_err());
/// ```
pub fn find_motif(seq: &DnaSequence, motif: &str) -> Result<Vec<usize>> {
    if motif.is_empty() {
        return Err(NucleoError::InvalidInput("motif must not be empty".to_string()));
    }
    let pattern = DnaSequence::new(motif).map_err(|e| {
        NucleoError::InvalidInput(format!(
            "motif contains symbols {:?} outside {}",
            e.invalid_symbols(),
            DnaAlphabet::VALID_STR
        ))
    })?;
    Ok(kmp(seq, &pattern))
}

/// Knuth-Morris-Pratt search returning every occurrence, overlaps included.
fn kmp(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return vec![];
    }

    // Failure function.
    let mut fail = vec![0usize; m];
    let mut k = 0usize;
    for i in 1..m {
        while k > 0 && pattern[k] != pattern[i] {
            k = fail[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        fail[i] = k;
    }

    let mut results = Vec::new();
    let mut q = 0usize;
    for (i, &c) in text.iter().enumerate() {
        while q > 0 && pattern[q] != c {
            q = fail[q - 1];
        }
        if pattern[q] == c {
            q += 1;
        }
        if q == m {
            results.push(i + 1 - m);
            q = fail[q - 1];
        }
    }
    results
}

/// Approximate mass (Da) of single-stranded DNA: the sum of the
/// deoxynucleotide monophosphate residue masses.
pub fn dna_molecular_weight(seq: &DnaSequence) -> f64 {
    seq.iter()
        .map(|&b| match b {
            b'A' => 331.2,
            b'C' => 307.2,
            b'G' => 347.2,
            b'T' => 322.2,
            _ => 0.0,
        })
        .sum()
}

impl DnaSequence {
    /// Per-base counts. See [`base_frequency`].
    pub fn base_frequency(&self) -> BaseFrequency {
        base_frequency(self)
    }

    /// Motif occurrences. See [`find_motif`].
    pub fn find_motif(&self, motif: &str) -> Result<Vec<usize>> {
        find_motif(self, motif)
    }

    /// Single-stranded mass. See [`dna_molecular_weight`].
    pub fn molecular_weight(&self) -> f64 {
        dna_molecular_weight(self)
    }
}
