//! Error diffusion kernel definitions.
//!
//! This module defines the diffusion stencils for the three error diffusion
//! algorithms. Each kernel specifies how quantization error is distributed
//! to neighboring pixels.

/// An error diffusion kernel.
///
/// The kernel defines how quantization error is distributed to neighboring
/// pixels that haven't been processed yet. Each entry specifies an offset
/// (dx, dy) and a weight for that neighbor.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Floyd-Steinberg
/// and Jarvis-Judice-Ninke propagate 100% of error, Atkinson intentionally
/// propagates only 75%.
///
/// # Scan Order
///
/// Every entry has `dy >= 0`, and entries with `dy == 0` have `dx > 0`, so
/// a left-to-right, top-to-bottom scan never writes error into a pixel that
/// has already been decided.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (0 = current row, positive = rows below)
    /// - `weight`: fraction of error to diffuse (as numerator, divisor is separate)
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    ///
    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,
}

impl Kernel {
    /// Normalized weight for an entry numerator.
    #[inline]
    pub fn weight(&self, numerator: u8) -> f32 {
        numerator as f32 / self.divisor as f32
    }

    /// Fraction of the quantization error the kernel passes on.
    pub fn propagation(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, _, weight)| self.weight(weight))
            .sum()
    }
}

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
/// The 25% "lost" error is part of the algorithm and gives its
/// characteristic lower-contrast look.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
/// The most widely known error diffusion algorithm.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation (48/48).
/// Produces smoother gradients than Floyd-Steinberg but is slower due to
/// the larger kernel size.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};
