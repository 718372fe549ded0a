//! Operations shared by DNA and RNA.
//!
//! Written once over [`NucleicAlphabet`]; each variant contributes only its
//! pairing table.

use nucleo_core::Sequence;

use crate::alphabet::NucleicAlphabet;
use crate::seq::ValidatedSeq;

impl<A: NucleicAlphabet> ValidatedSeq<A> {
    /// Complementary strand, same orientation.
    pub fn complement(&self) -> Self {
        let comp: Vec<u8> = self.iter().map(|&b| A::complement(b)).collect();
        Self::from_validated(comp)
    }

    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> Self {
        let rc: Vec<u8> = self.iter().rev().map(|&b| A::complement(b)).collect();
        Self::from_validated(rc)
    }

    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self.iter().filter(|&&b| b == b'G' || b == b'C').count();
        gc as f64 / self.len() as f64
    }
}
