//! Sliding window of fixed-length vectors.
//!
//! Vectors are added one at a time; once `slice_count` of them are held
//! the whole window can be flattened into a time-slice input.

use std::collections::VecDeque;

use crate::error::{AnnealError, Result};

/// Bounded FIFO of vectors.
///
/// # Examples
///
/// ```
/// use u_anneal::window::VectorWindow;
///
/// let mut window = VectorWindow::new(2)?;
/// window.add(&[1.0, 2.0]);
/// window.add(&[3.0, 4.0]);
/// window.add(&[5.0, 6.0]);
///
/// let mut out = [0.0; 4];
/// window.copy_window(&mut out, 0)?;
/// assert_eq!(out, [3.0, 4.0, 5.0, 6.0]);
/// # Ok::<(), u_anneal::AnnealError>(())
/// ```
#[derive(Debug, Clone)]
pub struct VectorWindow {
    slice_count: usize,
    window: VecDeque<Vec<f64>>,
}

impl VectorWindow {
    /// # Errors
    ///
    /// [`AnnealError::InvalidConfig`] if `slice_count` is 0.
    pub fn new(slice_count: usize) -> Result<Self> {
        if slice_count == 0 {
            return Err(AnnealError::InvalidConfig(
                "window slice_count must be at least 1".into(),
            ));
        }
        Ok(Self {
            slice_count,
            window: VecDeque::with_capacity(slice_count + 1),
        })
    }

    /// Adds a copy of `vec`, evicting the oldest slices over capacity.
    pub fn add(&mut self, vec: &[f64]) {
        self.window.push_back(vec.to_vec());
        while self.window.len() > self.slice_count {
            self.window.pop_front();
        }
    }

    /// `true` once enough slices are loaded for a complete window.
    pub fn is_ready(&self) -> bool {
        self.window.len() >= self.slice_count
    }

    /// Copies the window, oldest slice first, into `output` at `start`.
    ///
    /// # Errors
    ///
    /// - [`AnnealError::WindowNotReady`] before `slice_count` vectors are loaded
    /// - [`AnnealError::OutputTooSmall`] if `output` can't hold the window
    pub fn copy_window(&self, output: &mut [f64], start: usize) -> Result<()> {
        if !self.is_ready() {
            return Err(AnnealError::WindowNotReady {
                required: self.slice_count,
                loaded: self.window.len(),
            });
        }
        let required = start + self.window_len();
        if required > output.len() {
            return Err(AnnealError::OutputTooSmall {
                required,
                available: output.len(),
            });
        }

        let mut pos = start;
        for slice in &self.window {
            output[pos..pos + slice.len()].copy_from_slice(slice);
            pos += slice.len();
        }
        Ok(())
    }

    /// Total number of scalars across all loaded slices.
    pub fn window_len(&self) -> usize {
        self.window.iter().map(Vec::len).sum()
    }

    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}
