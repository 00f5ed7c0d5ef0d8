use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeightInput {
    pub exposure: f64,
    pub vulnerability: f64,
    pub criticality: f64,
}

impl Default for WeightInput {
    fn default() -> Self {
        Self {
            exposure: 1.0,
            vulnerability: 1.0,
            criticality: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct NormalizedWeights {
    pub exposure: f64,
    pub vulnerability: f64,
    pub criticality: f64,
}

pub fn normalize(raw: &WeightInput) -> NormalizedWeights {
    let total = raw.exposure + raw.vulnerability + raw.criticality;

    if total == 0.0 {
        // 0.34/0.33/0.33 sums to exactly 1.00 at the two decimals shown to users.
        return NormalizedWeights {
            exposure: 0.34,
            vulnerability: 0.33,
            criticality: 0.33,
        };
    }

    NormalizedWeights {
        exposure: raw.exposure / total,
        vulnerability: raw.vulnerability / total,
        criticality: raw.criticality / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(exposure: f64, vulnerability: f64, criticality: f64) -> WeightInput {
        WeightInput {
            exposure,
            vulnerability,
            criticality,
        }
    }

    #[test]
    fn normalized_weights_sum_to_one() {
        let cases = [
            input(1.0, 1.0, 1.0),
            input(5.0, 3.0, 2.0),
            input(0.0, 0.5, 0.0),
            input(70.0, 20.0, 10.0),
            input(0.01, 99.0, 0.3),
        ];

        for raw in cases {
            let normalized = normalize(&raw);
            let sum = normalized.exposure + normalized.vulnerability + normalized.criticality;
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "sum {} for input {:?}",
                sum,
                raw
            );
        }
    }

    #[test]
    fn zero_total_falls_back_to_fixed_split() {
        let normalized = normalize(&input(0.0, 0.0, 0.0));
        assert_eq!(normalized.exposure, 0.34);
        assert_eq!(normalized.vulnerability, 0.33);
        assert_eq!(normalized.criticality, 0.33);
    }

    #[test]
    fn proportions_follow_raw_ratios() {
        let normalized = normalize(&input(2.0, 1.0, 1.0));
        assert!((normalized.exposure - 0.5).abs() < 1e-9);
        assert!((normalized.vulnerability - 0.25).abs() < 1e-9);
        assert!((normalized.criticality - 0.25).abs() < 1e-9);
    }

    #[test]
    fn components_stay_non_negative_for_non_negative_input() {
        let normalized = normalize(&input(0.0, 4.0, 6.0));
        assert!(normalized.exposure >= 0.0);
        assert!(normalized.vulnerability >= 0.0);
        assert!(normalized.criticality >= 0.0);
    }
}
