use std::fmt;

use crate::Nucleotide;
use crate::NCOUNT;
use crate::NUCLEOTIDES;

/// Nucleotide composition of a sequence.
///
/// %CG is the share of C and G in the *whole* sequence, not the C+G / A+T
/// ratio. An empty sequence reports zero for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    counts: [usize; NCOUNT],
    length: usize,
}

impl Statistics {
    pub fn compute(sequence: &[Nucleotide]) -> Self {
        let mut counts = [0; NCOUNT];
        for &n in sequence {
            counts[n as usize] += 1;
        }
        Self { counts, length: sequence.len() }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn count(&self, n: Nucleotide) -> usize {
        self.counts[n as usize]
    }

    pub fn percentage(&self, n: Nucleotide) -> f64 {
        self.percent_of(self.count(n))
    }

    /// (nucleotide, percentage) in A, C, G, T order.
    pub fn percentages(&self) -> impl Iterator<Item = (Nucleotide, f64)> + '_ {
        NUCLEOTIDES.iter().map(move |&n| (n, self.percentage(n)))
    }

    pub fn cg_percent(&self) -> f64 {
        self.percent_of(self.count(Nucleotide::C) + self.count(Nucleotide::G))
    }

    fn percent_of(&self, count: usize) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        count as f64 / self.length as f64 * 100.0
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, p) in self.percentages() {
            writeln!(f, "{}: {:.2}%", n, p)?;
        }
        write!(f, "%CG: {:.2}", self.cg_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;
    use crate::RngSource;
    use crate::generate;

    #[test]
    fn test_balanced_sequence() {
        let seq = Sequence::try_from("ACGT").unwrap();
        let stats = Statistics::compute(&seq);
        for (_, p) in stats.percentages() {
            assert_eq!(p, 25.0);
        }
        assert_eq!(stats.cg_percent(), 50.0);
    }

    #[test]
    fn test_empty_sequence() {
        let stats = Statistics::compute(&[]);
        assert!(stats.is_empty());
        for (_, p) in stats.percentages() {
            assert_eq!(p, 0.0);
        }
        assert_eq!(stats.cg_percent(), 0.0);
    }

    #[test]
    fn test_cg_is_fraction_of_length() {
        // C+G / A+T would be 3.0 here.
        let seq = Sequence::try_from("CCGA").unwrap();
        let stats = Statistics::compute(&seq);
        assert_eq!(stats.cg_percent(), 75.0);
        assert_eq!(stats.percentage(Nucleotide::T), 0.0);
        assert_eq!(stats.count(Nucleotide::C), 2);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let mut rng = RngSource::seeded(3);
        for len in [1, 3, 17, 333, 1001] {
            let seq = generate(len, &mut rng).unwrap();
            let stats = Statistics::compute(&seq);
            let total: f64 = stats.percentages().map(|(_, p)| p).sum();
            assert!((total - 100.0).abs() < 1e-9, "sum was {total}");
            for (_, p) in stats.percentages() {
                assert!((0.0..=100.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_report_format() {
        let seq = Sequence::try_from("AACGTTT").unwrap();
        let stats = Statistics::compute(&seq);
        assert_eq!(stats.to_string(),
            "A: 28.57%\nC: 14.29%\nG: 14.29%\nT: 42.86%\n%CG: 28.57");
    }
}
