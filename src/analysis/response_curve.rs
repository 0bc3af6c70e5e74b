//! Feature-to-popularity response curves.
//!
//! Bins a continuous feature into approximately equal-population quantile
//! buckets and reports the mean feature value, mean popularity measure, and
//! sample count per bucket. Binned averages reduce noise and show the
//! overall direction of the association.

use super::{stats, ResolvedPopularity};
use crate::dataset::{AudioFeature, Dataset};
use serde::Serialize;

/// Default number of quantile bins requested for a response curve.
pub const DEFAULT_BIN_TARGET: usize = 20;

/// One bucket of a response curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseCurvePoint {
    pub feature_mean: f64,
    pub outcome_mean: f64,
    pub count: usize,
}

/// Builds the response curve of a popularity measure against one feature.
///
/// Rows missing either the feature or the measure are dropped. Repeated
/// feature values can collapse quantile edges; the curve then has as many
/// bins as the data supports, each with a positive count. An empty result
/// means insufficient data, not a zero-point curve.
///
/// `popularity` must have been resolved from the same dataset; rows are
/// paired by index.
pub fn build_response_curve(
    dataset: &Dataset,
    popularity: &ResolvedPopularity,
    feature: AudioFeature,
    bin_target: usize,
) -> Vec<ResponseCurvePoint> {
    let mut pairs: Vec<(f64, f64)> = dataset
        .iter()
        .enumerate()
        .filter_map(|(row, record)| {
            let value = feature.value(record)?;
            let outcome = popularity.get(row)?;
            Some((value, outcome))
        })
        .collect();

    if pairs.is_empty() {
        return Vec::new();
    }

    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    let values: Vec<f64> = pairs.iter().map(|(v, _)| *v).collect();

    let bins = bin_target.max(1).min(pairs.len());
    let mut edges: Vec<f64> = (0..=bins)
        .map(|i| stats::quantile(&values, i as f64 / bins as f64))
        .collect();
    // Repeated values produce duplicate edges; collapse them instead of
    // leaving empty bins behind.
    edges.dedup();

    if edges.len() < 2 {
        // Every value is identical: one bucket holds the whole sample.
        let outcome: Vec<f64> = pairs.iter().map(|(_, o)| *o).collect();
        return vec![ResponseCurvePoint {
            feature_mean: values[0],
            outcome_mean: stats::mean(&outcome).unwrap_or(0.0),
            count: pairs.len(),
        }];
    }

    let mut points = Vec::with_capacity(edges.len() - 1);
    let mut next = 0usize;
    for bucket in 0..edges.len() - 1 {
        let upper = edges[bucket + 1];
        let start = next;
        // The final edge is the maximum, so the last bucket takes the rest.
        while next < pairs.len()
            && (pairs[next].0 <= upper || bucket == edges.len() - 2)
        {
            next += 1;
        }
        if next == start {
            continue;
        }
        let slice = &pairs[start..next];
        let feature_values: Vec<f64> = slice.iter().map(|(v, _)| *v).collect();
        let outcomes: Vec<f64> = slice.iter().map(|(_, o)| *o).collect();
        points.push(ResponseCurvePoint {
            feature_mean: stats::mean(&feature_values).unwrap_or(upper),
            outcome_mean: stats::mean(&outcomes).unwrap_or(0.0),
            count: slice.len(),
        });
    }

    points.sort_by(|a, b| a.feature_mean.total_cmp(&b.feature_mean));
    points
}
