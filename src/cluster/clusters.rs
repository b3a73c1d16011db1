//! Editable cluster membership.

use super::kmeans::KMeans;
use crate::error::{AnnealError, Result};

/// Groups of point indices with reverse lookup.
///
/// Built from a k-means pass, then edited with [`put`](Clusters::put)
/// and [`remove`](Clusters::remove). A point belongs to at most one
/// cluster at a time.
#[derive(Debug, Clone)]
pub struct Clusters {
    clusters: Vec<Vec<usize>>,
    membership: Vec<Option<usize>>,
}

impl Clusters {
    /// Clusters `points` into `k` groups.
    pub fn new(k: usize, points: &[Vec<f64>]) -> Result<Self> {
        let clusters = KMeans::new(k).process(points)?;
        let mut membership = vec![None; points.len()];
        for (c, members) in clusters.iter().enumerate() {
            for &i in members {
                membership[i] = Some(c);
            }
        }
        Ok(Self {
            clusters,
            membership,
        })
    }

    /// Members of cluster `n`, or `None` if there is no such cluster.
    pub fn cluster(&self, n: usize) -> Option<&[usize]> {
        self.clusters.get(n).map(Vec::as_slice)
    }

    /// The cluster `point` currently belongs to.
    pub fn cluster_of(&self, point: usize) -> Option<usize> {
        self.membership.get(point).copied().flatten()
    }

    pub fn is_in_cluster(&self, point: usize, n: usize) -> bool {
        self.cluster_of(point) == Some(n)
    }

    /// Moves `point` into cluster `n`, leaving any previous cluster.
    pub fn put(&mut self, point: usize, n: usize) -> Result<()> {
        self.check_cluster(n)?;
        if let Some(prev) = self.cluster_of(point) {
            self.clusters[prev].retain(|&i| i != point);
        }
        if point >= self.membership.len() {
            self.membership.resize(point + 1, None);
        }
        self.membership[point] = Some(n);
        self.clusters[n].push(point);
        Ok(())
    }

    /// Removes `point` from cluster `n`. Returns whether it was there.
    pub fn remove(&mut self, point: usize, n: usize) -> Result<bool> {
        self.check_cluster(n)?;
        let before = self.clusters[n].len();
        self.clusters[n].retain(|&i| i != point);
        let removed = self.clusters[n].len() != before;
        if removed {
            self.membership[point] = None;
        }
        Ok(removed)
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.clusters.iter().map(Vec::as_slice)
    }

    fn check_cluster(&self, n: usize) -> Result<()> {
        if n >= self.clusters.len() {
            return Err(AnnealError::InvalidConfig(format!(
                "cluster {n} out of range ({} clusters)",
                self.clusters.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Vec<f64>> {
        vec![vec![0.0], vec![0.2], vec![5.0], vec![5.3]]
    }

    #[test]
    fn test_lookup() {
        let c = Clusters::new(2, &points()).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.cluster(0), Some(&[0, 1][..]));
        assert_eq!(c.cluster_of(3), Some(1));
        assert!(c.is_in_cluster(2, 1));
        assert!(!c.is_in_cluster(2, 0));
        assert_eq!(c.cluster(5), None);
    }

    #[test]
    fn test_put_moves_point() {
        let mut c = Clusters::new(2, &points()).unwrap();
        c.put(1, 1).unwrap();
        assert_eq!(c.cluster(0), Some(&[0][..]));
        assert_eq!(c.cluster_of(1), Some(1));
        assert!(c.cluster(1).unwrap().contains(&1));
    }

    #[test]
    fn test_remove() {
        let mut c = Clusters::new(2, &points()).unwrap();
        assert!(c.remove(0, 0).unwrap());
        assert_eq!(c.cluster_of(0), None);
        assert!(!c.remove(0, 0).unwrap());
        assert!(!c.remove(2, 0).unwrap());
        assert_eq!(c.cluster_of(2), Some(1));
    }

    #[test]
    fn test_out_of_range_cluster() {
        let mut c = Clusters::new(2, &points()).unwrap();
        assert!(c.put(0, 7).is_err());
        assert!(c.remove(0, 7).is_err());
    }
}
