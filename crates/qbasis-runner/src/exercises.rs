//! The three basis-measurement exercises.

use qbasis_ir::{MeasurementBasis, PreparedState};

use crate::config::{CircuitSpec, DEFAULT_SHOTS, ExperimentSpec, SuiteConfig};

fn experiment(title: &str, basis: MeasurementBasis, states: &[PreparedState]) -> ExperimentSpec {
    ExperimentSpec {
        title: title.to_string(),
        output: None,
        shots: None,
        circuits: states.iter().map(|&s| CircuitSpec::new(s, basis)).collect(),
    }
}

/// |+⟩ in the X basis, then |+⟩/|−⟩ in Z, then |+⟩/|−⟩ in Y.
pub fn catalogue() -> SuiteConfig {
    use PreparedState::{Minus, Plus};

    SuiteConfig {
        shots: DEFAULT_SHOTS,
        seed: None,
        experiments: vec![
            experiment("Ejercicio 1", MeasurementBasis::X, &[Plus]),
            experiment("Medicion en Z", MeasurementBasis::Z, &[Plus, Minus]),
            experiment("Mediciones en Y", MeasurementBasis::Y, &[Plus, Minus]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_catalogue_shape() {
        let suite = catalogue();
        let titles: Vec<_> = suite.experiments.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Ejercicio 1", "Medicion en Z", "Mediciones en Y"]);
        assert_eq!(suite.experiments[0].circuits.len(), 1);
        assert_eq!(suite.experiments[2].programs()[1].0, "|->");
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn test_each_experiment_gets_own_output() {
        let mut suite = catalogue();
        let paths: Vec<PathBuf> = ["a.json", "b.json", "c.json"].map(PathBuf::from).to_vec();
        suite.assign_outputs(&paths);
        let outputs: Vec<_> = suite
            .experiments
            .iter()
            .map(|e| e.output.clone().unwrap())
            .collect();
        assert_eq!(outputs, paths);
    }

    #[test]
    fn test_missing_outputs_stay_unset() {
        let mut suite = catalogue();
        suite.assign_outputs(&[PathBuf::from("only.json")]);
        assert!(suite.experiments[0].output.is_some());
        assert!(suite.experiments[1].output.is_none());
        assert!(suite.experiments[2].output.is_none());
    }
}
