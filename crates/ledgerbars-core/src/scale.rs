// File: crates/ledgerbars-core/src/scale.rs
// Summary: Band, linear, and ordinal scales mapping data to pixel space.

/// Categorical scale mapping discrete keys to contiguous pixel bands with
/// inter-band padding. Padding is applied both between bands and at the
/// outer edges, with the leftover space split evenly on both sides.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    start: f32,
    step: f32,
    bandwidth: f32,
}

impl BandScale {
    pub fn new<I, S>(domain: I, range: (f32, f32), padding: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain: Vec<String> = domain.into_iter().map(Into::into).collect();
        let padding = padding.clamp(0.0, 1.0);
        let n = domain.len() as f32;
        let (r0, r1) = range;
        let step = (r1 - r0) / (n + padding).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Self { domain, start, step, bandwidth }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Width of one band, in pixels.
    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Distance between the starts of two adjacent bands, in pixels.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Pixel position of the left edge of `key`'s band. `None` for keys
    /// outside the domain. Duplicate keys resolve to the first occurrence.
    pub fn position(&self, key: &str) -> Option<f32> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f32)
    }
}

/// Continuous scale mapping a numeric domain onto a pixel range by linear
/// interpolation. The range may be inverted (larger values mapping to
/// smaller pixels), which is how the y axis is laid out.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d0, mut d1) = domain;
        // Widen degenerate domains so the map stays finite.
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.r0 + t as f32 * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }
}

/// Categorical scale mapping keys to a repeating list of values, used for
/// the subgroup fill colors.
#[derive(Clone, Debug)]
pub struct OrdinalScale<V> {
    domain: Vec<String>,
    range: Vec<V>,
}

impl<V> OrdinalScale<V> {
    pub fn new<I, S>(domain: I, range: Vec<V>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { domain: domain.into_iter().map(Into::into).collect(), range }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        if self.range.is_empty() {
            return None;
        }
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| &self.range[i % self.range.len()])
    }
}
