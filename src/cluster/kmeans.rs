//! Lloyd's k-means over dense vectors.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::{AnnealError, Result};

/// K-means clustering.
///
/// Seeded with the first `k` distinct points, so the result is
/// deterministic for a given input order.
///
/// # Examples
///
/// ```
/// use u_anneal::cluster::KMeans;
///
/// let points = vec![vec![0.0], vec![0.1], vec![10.0], vec![10.2]];
/// let groups = KMeans::new(2).process(&points)?;
/// assert_eq!(groups, vec![vec![0, 1], vec![2, 3]]);
/// # Ok::<(), u_anneal::AnnealError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    max_passes: usize,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self { k, max_passes: 100 }
    }

    /// Caps the number of assign/update passes.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Partitions `points` into `k` disjoint groups of point indices.
    ///
    /// Groups are non-empty whenever there are at least `k` points.
    ///
    /// # Errors
    ///
    /// - [`AnnealError::InvalidConfig`] if `k` is 0
    /// - [`AnnealError::EmptyInput`] if `points` is empty
    /// - [`AnnealError::DimensionMismatch`] if points differ in length
    pub fn process(&self, points: &[Vec<f64>]) -> Result<Vec<Vec<usize>>> {
        if self.k == 0 {
            return Err(AnnealError::InvalidConfig("k must be at least 1".into()));
        }
        let Some(first) = points.first() else {
            return Err(AnnealError::EmptyInput("no points to cluster".into()));
        };
        let dim = first.len();
        if let Some(bad) = points.iter().find(|p| p.len() != dim) {
            return Err(AnnealError::DimensionMismatch {
                expected: dim,
                actual: bad.len(),
            });
        }

        let mut centroids = initial_centroids(points, self.k);
        let mut assignment = assign(points, &centroids);
        fill_empty(points, &mut centroids, &mut assignment);

        let mut passes = 0;
        while passes < self.max_passes {
            passes += 1;
            update_centroids(points, &assignment, &mut centroids);
            let mut next = assign(points, &centroids);
            fill_empty(points, &mut centroids, &mut next);
            if next == assignment {
                break;
            }
            assignment = next;
        }
        debug!(k = self.k, points = points.len(), passes, "k-means converged");

        let mut groups = vec![Vec::new(); self.k];
        for (i, &c) in assignment.iter().enumerate() {
            groups[c].push(i);
        }
        Ok(groups)
    }
}

fn sq_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let d = sq_distance(point, centroid);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    best
}

/// First `k` distinct points; repeats the last seed if there are fewer.
fn initial_centroids(points: &[Vec<f64>], k: usize) -> Vec<Vec<f64>> {
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    for p in points {
        if centroids.len() == k {
            break;
        }
        if !centroids.iter().any(|c| c == p) {
            centroids.push(p.clone());
        }
    }
    while centroids.len() < k {
        let last = centroids[centroids.len() - 1].clone();
        centroids.push(last);
    }
    centroids
}

#[cfg(feature = "parallel")]
fn assign(points: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<usize> {
    points.par_iter().map(|p| nearest(p, centroids)).collect()
}

#[cfg(not(feature = "parallel"))]
fn assign(points: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<usize> {
    points.iter().map(|p| nearest(p, centroids)).collect()
}

fn update_centroids(points: &[Vec<f64>], assignment: &[usize], centroids: &mut [Vec<f64>]) {
    let dim = centroids.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0; dim]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];
    for (p, &c) in points.iter().zip(assignment) {
        counts[c] += 1;
        for (s, x) in sums[c].iter_mut().zip(p) {
            *s += x;
        }
    }
    for ((centroid, sum), &n) in centroids.iter_mut().zip(sums).zip(&counts) {
        // Empty clusters keep their previous centroid.
        if n > 0 {
            *centroid = sum.into_iter().map(|s| s / n as f64).collect();
        }
    }
}

/// Moves the point farthest from its centroid into each empty cluster,
/// taking only from clusters with more than one member.
fn fill_empty(points: &[Vec<f64>], centroids: &mut [Vec<f64>], assignment: &mut [usize]) {
    let mut counts = vec![0usize; centroids.len()];
    for &c in assignment.iter() {
        counts[c] += 1;
    }
    for empty in 0..centroids.len() {
        if counts[empty] > 0 {
            continue;
        }
        let donor = assignment
            .iter()
            .enumerate()
            .filter(|&(_, &c)| counts[c] > 1)
            .map(|(i, &c)| (i, sq_distance(&points[i], &centroids[c])))
            .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((i, d)),
            });
        let Some((i, _)) = donor else {
            break;
        };
        counts[assignment[i]] -= 1;
        counts[empty] += 1;
        assignment[i] = empty;
        centroids[empty] = points[i].clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_blobs() {
        let points = vec![
            vec![0.0, 0.0],
            vec![10.0, 10.0],
            vec![0.5, 0.2],
            vec![9.8, 10.1],
            vec![0.1, 0.4],
        ];
        let groups = KMeans::new(2).process(&points).unwrap();
        assert_eq!(groups, vec![vec![0, 2, 4], vec![1, 3]]);
    }

    #[test]
    fn test_k_zero() {
        assert!(matches!(
            KMeans::new(0).process(&[vec![1.0]]),
            Err(AnnealError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_points() {
        assert!(matches!(
            KMeans::new(2).process(&[]),
            Err(AnnealError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_mixed_dimensions() {
        let points = vec![vec![1.0, 2.0], vec![1.0]];
        assert_eq!(
            KMeans::new(1).process(&points),
            Err(AnnealError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_duplicates_still_non_empty() {
        let points = vec![vec![1.0], vec![1.0], vec![1.0]];
        let groups = KMeans::new(3).process(&points).unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn test_fewer_points_than_k() {
        let points = vec![vec![1.0], vec![2.0]];
        let groups = KMeans::new(3).process(&points).unwrap();
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(Vec::len).sum();
        assert_eq!(total, 2);
    }
}
