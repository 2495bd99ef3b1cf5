//! Ordinary least-squares fit over the weight/cost scatter.

use serde::{
    Deserialize,
    Serialize,
};

use super::reshape::WeightCostPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,
    pub domain_min: f64,
    pub domain_max: f64,
}

impl RegressionLine {
    /// The fitted line as a drawable segment: its endpoints at the min and
    /// max observed x.
    pub fn endpoints(&self) -> [WeightCostPoint; 2] {
        [
            WeightCostPoint {
                weight: self.domain_min,
                cost: self.slope * self.domain_min + self.intercept,
            },
            WeightCostPoint {
                weight: self.domain_max,
                cost: self.slope * self.domain_max + self.intercept,
            },
        ]
    }
}

/// Fits a least-squares line over the finite points. Returns `None` when
/// fewer than two valid points remain, or when every x is identical (a
/// vertical scatter has no least-squares line).
pub fn fit_line(points: &[WeightCostPoint]) -> Option<RegressionLine> {
    let valid: Vec<&WeightCostPoint> = points
        .iter()
        .filter(|p| p.weight.is_finite() && p.cost.is_finite())
        .collect();

    if valid.len() < 2 {
        return None;
    }

    let n = valid.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for point in &valid {
        sum_x += point.weight;
        sum_y += point.cost;
        sum_xy += point.weight * point.cost;
        sum_x2 += point.weight * point.weight;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mut domain_min = f64::INFINITY;
    let mut domain_max = f64::NEG_INFINITY;
    for point in &valid {
        domain_min = domain_min.min(point.weight);
        domain_max = domain_max.max(point.weight);
    }

    Some(RegressionLine {
        slope,
        intercept,
        domain_min,
        domain_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(weight: f64, cost: f64) -> WeightCostPoint {
        WeightCostPoint { weight, cost }
    }

    #[test]
    fn test_fit_line_empty() {
        assert_eq!(fit_line(&[]), None);
    }

    #[test]
    fn test_fit_line_single_point() {
        assert_eq!(fit_line(&[point(1.0, 2.0)]), None);
    }

    #[test]
    fn test_fit_line_zero_x_variance() {
        assert_eq!(fit_line(&[point(1.0, 1.0), point(1.0, 5.0)]), None);
    }

    #[test]
    fn test_fit_line_exact_fit() {
        let line = fit_line(&[point(0.0, 0.0), point(10.0, 20.0)]).unwrap();
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.intercept, 0.0);
        assert_eq!(line.domain_min, 0.0);
        assert_eq!(line.domain_max, 10.0);
    }

    #[test]
    fn test_fit_line_ignores_non_finite_points() {
        let line = fit_line(&[
            point(0.0, 0.0),
            point(f64::NAN, 3.0),
            point(5.0, f64::INFINITY),
            point(10.0, 20.0),
        ])
        .unwrap();
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.intercept, 0.0);
    }

    #[test]
    fn test_fit_line_non_finite_only_is_none() {
        assert_eq!(
            fit_line(&[point(f64::NAN, 1.0), point(2.0, f64::NAN)]),
            None
        );
    }

    #[test]
    fn test_endpoints_lie_on_the_line() {
        let line = fit_line(&[point(1.0, 3.0), point(2.0, 5.0), point(3.0, 7.0)]).unwrap();
        let [start, end] = line.endpoints();
        assert_eq!(start.weight, 1.0);
        assert!((start.cost - 3.0).abs() < 1e-9);
        assert_eq!(end.weight, 3.0);
        assert!((end.cost - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_line_least_squares_over_scatter() {
        // Symmetric residuals around y = x + 1
        let line = fit_line(&[
            point(0.0, 1.5),
            point(0.0, 0.5),
            point(2.0, 3.5),
            point(2.0, 2.5),
        ])
        .unwrap();
        assert!((line.slope - 1.0).abs() < 1e-9);
        assert!((line.intercept - 1.0).abs() < 1e-9);
    }
}
