//! Protein sequence property analysis.
//!
//! Computes physicochemical and compositional properties of a
//! [`ProteinSequence`]:
//!
//! - **Molecular weight**: average mass of the neutral polypeptide
//! - **Amino acid composition**: residue counts and frequencies
//! - **Hydrophobicity profile**: Kyte-Doolittle sliding window
//! - **GRAVY**: grand average of hydropathicity
//! - **Net charge**: Henderson-Hasselbalch sum at a given pH
//! - **Isoelectric point**: pI via bisection on the charge curve
//! - **Extinction coefficient**: molar absorptivity at 280 nm
//!
//! Only the 20 standard residues carry table values. Stop, unknown and gap
//! markers in extended sequences are skipped by every computation.

use std::collections::BTreeMap;
use std::fmt;

use nucleo_core::{NucleoError, Result};
use tracing::debug;

use crate::protein::ProteinSequence;

// ── Amino acid indexing ─────────────────────────────────────────

/// Map amino acid byte to index 0–19. Returns None for non-standard residues.
fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

// ── Masses ──────────────────────────────────────────────────────

/// Average mass of water (Da).
pub const WATER_MASS: f64 = 18.015;

/// Average masses of the free amino acids (Da), indexed by aa_index.
const FREE_AA_MASS: [f64; 20] = [
    89.09,  // A
    121.15, // C
    133.10, // D
    147.13, // E
    165.19, // F
    75.07,  // G
    155.16, // H
    131.17, // I
    146.19, // K
    131.17, // L
    149.21, // M
    132.12, // N
    115.13, // P
    146.15, // Q
    174.20, // R
    105.09, // S
    119.12, // T
    117.15, // V
    204.23, // W
    181.19, // Y
];

// ── Hydrophobicity scale ────────────────────────────────────────

/// Kyte-Doolittle (1982) hydropathy values, indexed by aa_index.
const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

// ── pKa values ──────────────────────────────────────────────────

const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_D: f64 = 3.9;
const PKA_E: f64 = 4.1;
const PKA_C: f64 = 8.3;
const PKA_Y: f64 = 10.1;
const PKA_H: f64 = 6.0;
const PKA_K: f64 = 10.5;
const PKA_R: f64 = 12.5;

/// Bisection stops once the bracket is this narrow.
const PI_TOLERANCE: f64 = 0.01;

// ── Extinction coefficient constants (280 nm) ──────────────────

const EXT_TRP: u64 = 5500;
const EXT_TYR: u64 = 1490;
const EXT_CYSTINE: u64 = 125;

// ── Public types ────────────────────────────────────────────────

/// Amino acid composition of a protein sequence.
///
/// Only standard residues are counted; `total` is their number, so stop,
/// unknown and gap markers never dilute the frequencies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AminoAcidComposition {
    /// Count of each observed residue.
    pub counts: BTreeMap<char, usize>,
    /// Frequency (count / total) of each observed residue.
    pub frequencies: BTreeMap<char, f64>,
    /// Number of standard residues.
    pub total: usize,
}

impl AminoAcidComposition {
    /// Count of `aa`, zero if absent.
    pub fn count(&self, aa: char) -> usize {
        self.counts
            .get(&aa.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Frequency of `aa`, zero if absent.
    pub fn frequency(&self, aa: char) -> f64 {
        self.frequencies
            .get(&aa.to_ascii_uppercase())
            .copied()
            .unwrap_or(0.0)
    }
}

impl fmt::Display for AminoAcidComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total residues: {}", self.total)?;
        for (aa, count) in &self.counts {
            let freq = self.frequencies.get(aa).copied().unwrap_or(0.0);
            write!(f, "\n  {}: {:4} ({:5.1}%)", aa, count, freq * 100.0)?;
        }
        Ok(())
    }
}

/// Molar extinction coefficient at 280 nm (M⁻¹ cm⁻¹).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtinctionCoefficient {
    /// All cysteines reduced.
    pub reduced: u64,
    /// All cysteine pairs forming cystines.
    pub oxidized: u64,
}

impl From<ExtinctionCoefficient> for (u64, u64) {
    fn from(ec: ExtinctionCoefficient) -> Self {
        (ec.reduced, ec.oxidized)
    }
}

impl PartialEq<(u64, u64)> for ExtinctionCoefficient {
    fn eq(&self, other: &(u64, u64)) -> bool {
        (self.reduced, self.oxidized) == *other
    }
}

/// Headline properties of a protein, computed together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProteinProperties {
    /// Average molecular weight (Da).
    pub molecular_weight: f64,
    /// Isoelectric point, two decimals.
    pub isoelectric_point: f64,
    /// Net charge at pH 7.0.
    pub charge_at_ph7: f64,
    /// Grand average of hydropathicity.
    pub gravy: f64,
    /// Extinction coefficient at 280 nm.
    pub extinction_coefficient: ExtinctionCoefficient,
}

// ── Molecular weight ────────────────────────────────────────────

/// Average molecular weight of a polypeptide in Daltons.
///
/// Sums the free amino acid masses of the standard residues, then removes
/// one water per peptide bond. Every symbol counts towards the chain length,
/// so stop, unknown and gap markers add no mass but still take part in a
/// bond. A single residue weighs exactly its free amino acid mass; an empty
/// sequence weighs one water.
///
/// # Example
///
/// ```
/// use nucleo_seq::protein_properties::molecular_weight;
///
/// assert!((molecular_weight(b"G") - 75.07).abs() < 1e-9);
/// assert!((molecular_weight(b"MK") - (149.21 + 146.19 - 18.015)).abs() < 1e-9);
/// ```
pub fn molecular_weight(seq: &[u8]) -> f64 {
    let free_mass: f64 = seq
        .iter()
        .filter_map(|&aa| aa_index(aa))
        .map(|i| FREE_AA_MASS[i])
        .sum();
    let peptide_bonds = seq.len().saturating_sub(1);
    free_mass - peptide_bonds as f64 * WATER_MASS
}

// ── Amino acid composition ──────────────────────────────────────

/// Compute the amino acid composition of a protein sequence.
///
/// Frequencies are all 0.0 when no standard residue is present.
pub fn amino_acid_composition(seq: &[u8]) -> AminoAcidComposition {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for &aa in seq.iter().filter(|&&aa| aa_index(aa).is_some()) {
        *counts.entry(char::from(aa)).or_insert(0) += 1;
    }
    let total: usize = counts.values().sum();
    let frequencies = counts
        .iter()
        .map(|(&aa, &count)| {
            let freq = if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            };
            (aa, freq)
        })
        .collect();
    AminoAcidComposition {
        counts,
        frequencies,
        total,
    }
}

// ── Hydrophobicity ──────────────────────────────────────────────

fn hydropathy(aa: u8) -> Option<f64> {
    aa_index(aa).map(|i| KYTE_DOOLITTLE[i])
}

/// Mean Kyte-Doolittle value over the covered residues of `residues`;
/// 0.0 when none are covered.
fn mean_hydropathy(residues: &[u8]) -> f64 {
    let (sum, n) = residues
        .iter()
        .filter_map(|&aa| hydropathy(aa))
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Kyte-Doolittle hydrophobicity profile over a sliding window.
///
/// Returns one value per position at which a full window of `window`
/// residues fits (`len - window + 1` values), in sequence order. Residues
/// without a scale value are left out of that window's average. A sequence
/// shorter than `window` yields an empty profile.
///
/// Even windows are not centred: a window of 4 covers four residues, not
/// two on either side of a midpoint.
///
/// # Errors
///
/// Returns an error if `window` is zero.
///
/// # Example
///
/// ```
/// use nucleo_seq::protein_properties::hydrophobicity_profile;
///
/// let profile = hydrophobicity_profile(b"IIIIIIIII", 3).unwrap();
/// assert_eq!(profile.len(), 7);
/// assert!((profile[1] - 4.5).abs() < 1e-10); // I = 4.5 on KD scale
/// ```
pub fn hydrophobicity_profile(seq: &[u8], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(NucleoError::InvalidInput(
            "hydrophobicity window must be at least 1".to_string(),
        ));
    }
    if seq.len() < window {
        return Ok(Vec::new());
    }
    Ok(seq.windows(window).map(mean_hydropathy).collect())
}

/// Compute the GRAVY (grand average of hydropathicity) score.
///
/// Positive values indicate overall hydrophobic character. 0.0 when the
/// sequence has no standard residues.
pub fn gravy(seq: &[u8]) -> f64 {
    mean_hydropathy(seq)
}

// ── Charge and isoelectric point ────────────────────────────────

/// Fraction protonated of a basic group.
fn positive_term(ph: f64, pka: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(ph - pka))
}

/// Fraction deprotonated of an acidic group.
fn negative_term(ph: f64, pka: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(pka - ph))
}

/// Net charge at `ph` via Henderson-Hasselbalch.
///
/// Sums the free termini and the ionizable side chains of D, E, C, Y
/// (negative) and H, K, R (positive). Other residues contribute nothing.
pub fn charge_at_ph(seq: &[u8], ph: f64) -> f64 {
    let mut charge = positive_term(ph, PKA_NTERM) - negative_term(ph, PKA_CTERM);

    for &aa in seq {
        match aa {
            b'D' => charge -= negative_term(ph, PKA_D),
            b'E' => charge -= negative_term(ph, PKA_E),
            b'C' => charge -= negative_term(ph, PKA_C),
            b'Y' => charge -= negative_term(ph, PKA_Y),
            b'H' => charge += positive_term(ph, PKA_H),
            b'K' => charge += positive_term(ph, PKA_K),
            b'R' => charge += positive_term(ph, PKA_R),
            _ => {}
        }
    }
    charge
}

/// Isoelectric point (pI) of a protein sequence.
///
/// Bisects pH over [0, 14] until the bracket is no wider than 0.01, which
/// takes at most 11 steps, and returns the bracket midpoint rounded to two
/// decimals. Relies on net charge falling as pH rises.
///
/// # Example
///
/// ```
/// use nucleo_seq::protein_properties::isoelectric_point;
///
/// assert!(isoelectric_point(b"DDDDD") < 4.0); // highly acidic
/// ```
pub fn isoelectric_point(seq: &[u8]) -> f64 {
    let mut lo = 0.0_f64;
    let mut hi = 14.0_f64;
    let mut steps = 0;

    while hi - lo > PI_TOLERANCE {
        let mid = (lo + hi) / 2.0;
        if charge_at_ph(seq, mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        steps += 1;
    }

    let pi = ((lo + hi) / 2.0 * 100.0).round() / 100.0;
    debug!(steps, pi, "isoelectric point bisection converged");
    pi
}

// ── Extinction coefficient ──────────────────────────────────────

/// Molar extinction coefficient at 280 nm (Pace et al. 1995).
///
/// Reduced counts Trp and Tyr only; oxidized adds 125 per cysteine pair.
///
/// # Example
///
/// ```
/// use nucleo_seq::protein_properties::extinction_coefficient;
///
/// let ec = extinction_coefficient(b"WY");
/// assert_eq!(ec.reduced, 6990);
/// assert_eq!(ec.oxidized, 6990);
/// ```
pub fn extinction_coefficient(seq: &[u8]) -> ExtinctionCoefficient {
    let count = |target: u8| seq.iter().filter(|&&aa| aa == target).count() as u64;
    let reduced = count(b'W') * EXT_TRP + count(b'Y') * EXT_TYR;
    let oxidized = reduced + (count(b'C') / 2) * EXT_CYSTINE;
    ExtinctionCoefficient { reduced, oxidized }
}

// ── Methods on ProteinSequence ──────────────────────────────────

impl ProteinSequence {
    /// Average molecular weight in Daltons. See [`molecular_weight`].
    pub fn molecular_weight(&self) -> f64 {
        molecular_weight(self)
    }

    /// Standard-residue composition. See [`amino_acid_composition`].
    pub fn amino_acid_composition(&self) -> AminoAcidComposition {
        amino_acid_composition(self)
    }

    /// Kyte-Doolittle sliding-window profile. See [`hydrophobicity_profile`].
    pub fn hydrophobicity_profile(&self, window: usize) -> Result<Vec<f64>> {
        hydrophobicity_profile(self, window)
    }

    /// Grand average of hydropathicity. See [`gravy`].
    pub fn gravy(&self) -> f64 {
        gravy(self)
    }

    /// Net charge at `ph`. See [`charge_at_ph`].
    pub fn charge_at_ph(&self, ph: f64) -> f64 {
        charge_at_ph(self, ph)
    }

    /// Isoelectric point. See [`isoelectric_point`].
    pub fn isoelectric_point(&self) -> f64 {
        isoelectric_point(self)
    }

    /// Extinction coefficient at 280 nm. See [`extinction_coefficient`].
    pub fn extinction_coefficient(&self) -> ExtinctionCoefficient {
        extinction_coefficient(self)
    }

    /// Compute the headline properties in one record. Nothing is cached.
    pub fn properties(&self) -> ProteinProperties {
        ProteinProperties {
            molecular_weight: self.molecular_weight(),
            isoelectric_point: self.isoelectric_point(),
            charge_at_ph7: self.charge_at_ph(7.0),
            gravy: self.gravy(),
            extinction_coefficient: self.extinction_coefficient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protein(s: &str) -> ProteinSequence {
        ProteinSequence::new(s).unwrap()
    }

    // ── molecular_weight ──

    #[test]
    fn mw_single_residue_is_free_mass() {
        assert!((protein("G").molecular_weight() - 75.07).abs() < 1e-9);
        assert!((protein("M").molecular_weight() - 149.21).abs() < 1e-9);
    }

    #[test]
    fn mw_dipeptide_loses_one_water() {
        let mw = protein("MK").molecular_weight();
        assert!((mw - (149.21 + 146.19 - WATER_MASS)).abs() < 1e-9);
    }

    #[test]
    fn mw_empty_is_one_water() {
        assert!((protein("").molecular_weight() - WATER_MASS).abs() < 1e-12);
    }

    #[test]
    fn mw_markers_count_as_chain_positions() {
        let marked = ProteinSequence::extended("M-K*X").unwrap().molecular_weight();
        let expected = 149.21 + 146.19 - 4.0 * WATER_MASS;
        assert!((marked - expected).abs() < 1e-9, "mw {}", marked);

        let stops = ProteinSequence::extended("**").unwrap().molecular_weight();
        assert!(stops.abs() < 1e-9, "mw {}", stops);
    }

    #[test]
    fn mw_read_through_translation() {
        let options = crate::TranslationOptions::read_through();
        let protein = crate::RnaSequence::new("AUGUAAAAA").unwrap().translate(options).protein;
        assert_eq!(protein, "M*K");
        let expected = 149.21 + 146.19 - 2.0 * WATER_MASS;
        assert!((protein.molecular_weight() - expected).abs() < 1e-9);
    }

    #[test]
    fn mw_long_sequence_positive() {
        assert!(protein("MKFLILLFNILCLFPVLAADNH").molecular_weight() > 2000.0);
    }

    // ── amino_acid_composition ──

    #[test]
    fn composition_counts_and_frequencies() {
        let comp = protein("AAAMKKK").amino_acid_composition();
        assert_eq!(comp.total, 7);
        assert_eq!(comp.count('A'), 3);
        assert_eq!(comp.count('m'), 1);
        assert_eq!(comp.count('W'), 0);
        assert!((comp.frequency('K') - 3.0 / 7.0).abs() < 1e-12);
        let sum: f64 = comp.frequencies.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn composition_excludes_markers_from_total() {
        let comp = ProteinSequence::extended("AA**X-").unwrap().amino_acid_composition();
        assert_eq!(comp.total, 2);
        assert_eq!(comp.counts.len(), 1);
        assert!((comp.frequency('A') - 1.0).abs() < 1e-12);
    }

    #[test]
    fn composition_of_markers_only_is_empty() {
        let comp = ProteinSequence::extended("**X").unwrap().amino_acid_composition();
        assert_eq!(comp.total, 0);
        assert!(comp.counts.is_empty());
        assert_eq!(comp.frequency('A'), 0.0);
    }

    #[test]
    fn composition_display() {
        let comp = protein("AAK").amino_acid_composition();
        let text = comp.to_string();
        assert!(text.starts_with("Total residues: 3"));
        assert!(text.contains("A:    2 ( 66.7%)"));
        assert!(text.contains("K:    1 ( 33.3%)"));
    }

    // ── hydrophobicity ──

    #[test]
    fn profile_length() {
        let seq = protein("MKFLILLFNILCLFPVLAADNH");
        let profile = seq.hydrophobicity_profile(9).unwrap();
        assert_eq!(profile.len(), seq.len() - 9 + 1);
    }

    #[test]
    fn profile_short_sequence_is_empty() {
        assert!(protein("MKF").hydrophobicity_profile(9).unwrap().is_empty());
    }

    #[test]
    fn profile_values() {
        // I=4.5, R=-4.5
        let profile = protein("IIRR").hydrophobicity_profile(2).unwrap();
        assert_eq!(profile.len(), 3);
        assert!((profile[0] - 4.5).abs() < 1e-12);
        assert!(profile[1].abs() < 1e-12);
        assert!((profile[2] + 4.5).abs() < 1e-12);
    }

    #[test]
    fn profile_skips_uncovered_symbols() {
        let profile = ProteinSequence::extended("I-I").unwrap().hydrophobicity_profile(3).unwrap();
        assert_eq!(profile.len(), 1);
        assert!((profile[0] - 4.5).abs() < 1e-12);

        let gaps = ProteinSequence::extended("---").unwrap().hydrophobicity_profile(2).unwrap();
        assert_eq!(gaps, vec![0.0, 0.0]);
    }

    #[test]
    fn profile_zero_window_rejected() {
        assert!(protein("MKV").hydrophobicity_profile(0).is_err());
    }

    #[test]
    fn gravy_sign() {
        assert!(protein("ILVAG").gravy() > 0.0);
        assert!(protein("DEKRN").gravy() < 0.0);
        assert!((protein("IIIII").gravy() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn gravy_without_covered_residues() {
        assert_eq!(protein("").gravy(), 0.0);
        assert_eq!(ProteinSequence::extended("**").unwrap().gravy(), 0.0);
    }

    // ── charge / pI ──

    #[test]
    fn charge_at_ph7_mixed() {
        let charge = protein("MKDE").charge_at_ph(7.0);
        assert!(charge > -2.0 && charge < 0.0, "charge {}", charge);
    }

    #[test]
    fn charge_extremes() {
        let seq = protein("KDE");
        assert!(seq.charge_at_ph(0.0) > 1.5);
        assert!(seq.charge_at_ph(14.0) < -2.5);
    }

    #[test]
    fn pi_acidic_and_basic() {
        assert!(protein("DDDEEEMMM").isoelectric_point() < 5.0);
        assert!(protein("KKKRRRMMMM").isoelectric_point() > 9.0);
    }

    #[test]
    fn pi_has_two_decimals() {
        let pi = protein("MKFLILLFNILCLFPVLAADNH").isoelectric_point();
        assert!(pi > 0.0 && pi < 14.0);
        assert!(((pi * 100.0).round() - pi * 100.0).abs() < 1e-9);
    }

    #[test]
    fn pi_near_zero_charge() {
        let seq = protein("MKFLILLFNILCLFPVLAADNH");
        let pi = seq.isoelectric_point();
        assert!(seq.charge_at_ph(pi - 0.05) > 0.0);
        assert!(seq.charge_at_ph(pi + 0.05) < 0.0);
    }

    // ── extinction coefficient ──

    #[test]
    fn extinction_without_chromophores() {
        assert_eq!(protein("AAAGG").extinction_coefficient(), (0u64, 0u64));
    }

    #[test]
    fn extinction_cystine_pairs() {
        let ec = protein("CCAAA").extinction_coefficient();
        assert_eq!(ec.reduced, 0);
        assert_eq!(ec.oxidized, 125);
        assert!(ec.oxidized > ec.reduced);
        // odd cysteine does not pair
        assert_eq!(protein("CCC").extinction_coefficient().oxidized, 125);
    }

    #[test]
    fn extinction_trp_tyr() {
        let ec = protein("WWYY").extinction_coefficient();
        assert_eq!(<(u64, u64)>::from(ec), (13960, 13960));
    }

    // ── properties ──

    #[test]
    fn properties_bundle() {
        let seq = protein("MKFLILLFNILCLFPVLAADNH");
        let props = seq.properties();
        assert_eq!(props.molecular_weight, seq.molecular_weight());
        assert_eq!(props.isoelectric_point, seq.isoelectric_point());
        assert_eq!(props.charge_at_ph7, seq.charge_at_ph(7.0));
        assert_eq!(props.gravy, seq.gravy());
        assert_eq!(props.extinction_coefficient, seq.extinction_coefficient());
        assert!(props.isoelectric_point > 0.0 && props.isoelectric_point < 14.0);
    }
}
