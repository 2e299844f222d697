//! Measurement count distributions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use qbasis_ir::Outcome;

/// Counts of each readout over a fixed number of shots.
///
/// Serializes as `{"counts": {"0": n0, "1": n1}, "shots": n}`. The two counts
/// always sum to `shots`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCounts", into = "RawCounts")]
pub struct CountDistribution {
    zeros: u64,
    ones: u64,
}

impl CountDistribution {
    /// Build from the number of `1` readouts out of `shots`.
    ///
    /// Returns `None` if `ones > shots`.
    pub fn from_ones(shots: u64, ones: u64) -> Option<Self> {
        (ones <= shots).then(|| Self {
            zeros: shots - ones,
            ones,
        })
    }

    /// Count for a single outcome.
    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Zero => self.zeros,
            Outcome::One => self.ones,
        }
    }

    /// Count for a bitstring label; unknown labels count zero.
    pub fn get(&self, label: &str) -> u64 {
        label.parse::<Outcome>().map_or(0, |o| self.count(o))
    }

    /// Total number of shots.
    pub fn total_shots(&self) -> u64 {
        self.zeros + self.ones
    }

    /// Empirical probability of `outcome`.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        let total = self.total_shots();
        if total == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / total as f64
    }

    /// Most frequent outcome; ties go to `0`.
    pub fn most_frequent(&self) -> (Outcome, u64) {
        if self.ones > self.zeros {
            (Outcome::One, self.ones)
        } else {
            (Outcome::Zero, self.zeros)
        }
    }

    /// `(label, count)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Outcome::ALL.into_iter().map(|o| (o.label(), self.count(o)))
    }
}

#[derive(Serialize, Deserialize)]
struct RawCounts {
    counts: BTreeMap<String, u64>,
    shots: u64,
}

impl From<CountDistribution> for RawCounts {
    fn from(dist: CountDistribution) -> Self {
        Self {
            counts: dist.iter().map(|(l, c)| (l.to_string(), c)).collect(),
            shots: dist.total_shots(),
        }
    }
}

impl TryFrom<RawCounts> for CountDistribution {
    type Error = String;

    fn try_from(raw: RawCounts) -> Result<Self, Self::Error> {
        let overflow = || format!("counts overflow u64 (shots is {})", raw.shots);
        let mut zeros: u64 = 0;
        let mut ones: u64 = 0;
        for (label, count) in &raw.counts {
            let slot = match label.parse::<Outcome>().map_err(|e| e.to_string())? {
                Outcome::Zero => &mut zeros,
                Outcome::One => &mut ones,
            };
            *slot = slot.checked_add(*count).ok_or_else(overflow)?;
        }
        let total = zeros.checked_add(ones).ok_or_else(overflow)?;
        if total != raw.shots {
            return Err(format!(
                "counts sum to {total} but shots is {}",
                raw.shots
            ));
        }
        Ok(Self { zeros, ones })
    }
}
