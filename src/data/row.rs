use serde::{Serialize, Deserialize};

/// One dataset row: a feature vector plus its class label.
///
/// `label` is `None` for the copies handed to a predictor during
/// cross-validation (the "unknown" sentinel). Ground truth is kept only in
/// the original dataset and in the per-fold actual list used for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub features: Vec<f64>,
    pub label: Option<usize>,
}

impl Row {
    pub fn new(features: Vec<f64>, label: usize) -> Row {
        Row { features, label: Some(label) }
    }

    /// A copy of this row with the label blanked out.
    pub fn unlabeled(&self) -> Row {
        Row { features: self.features.clone(), label: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlabeled_keeps_features_drops_label() {
        let row = Row::new(vec![0.1, -0.9], 1);
        let masked = row.unlabeled();
        assert_eq!(masked.features, row.features);
        assert_eq!(masked.label, None);
        assert_eq!(row.label, Some(1));
    }
}
