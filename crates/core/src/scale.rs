//! Linear and band scales shared by the chart builders
//!
//! Small value-to-pixel maps with the usual rounding behavior: linear
//! scales can widen their domain to round tick-step multiples and emit
//! 1/2/5-stepped ticks; band scales divide a pixel range into padded slots.

/// Affine map from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> LinearScale {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Map a domain value to its pixel position. A degenerate domain
    /// (empty chart) maps everything onto the start of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Widen the domain outwards to multiples of the tick step.
    pub fn nice(mut self, count: usize) -> LinearScale {
        let (d0, d1) = self.domain;
        let step = tick_step(d0, d1, count);
        if step > 0.0 && step.is_finite() {
            self.domain = ((d0 / step).floor() * step, (d1 / step).ceil() * step);
        }
        self
    }

    /// Round tick values covering the domain, at most `count + 1` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return vec![d0];
        }

        let step = tick_step(d0, d1, count);
        if step <= 0.0 || !step.is_finite() {
            return Vec::new();
        }

        let first = (d0 / step).ceil() as i64;
        let last = (d1 / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Evenly spaced slots for categorical data, with inner and outer padding
/// expressed as a fraction of the slot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    len: usize,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new(len: usize, range: (f64, f64), padding: f64) -> BandScale {
        Self {
            len,
            range,
            padding,
        }
    }

    fn step(&self) -> f64 {
        let extent = self.range.1 - self.range.0;
        let slots = (self.len as f64 + self.padding).max(1.0);
        extent / slots
    }

    /// Width of one band; zero when there is nothing to place.
    pub fn bandwidth(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.step() * (self.padding + index as f64)
    }

    /// Center of the band at `index`; where its axis tick goes.
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.bandwidth() / 2.0
    }
}

/// Tick step for a domain: a power of ten times 1, 2 or 5.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if span == 0.0 {
        return 0.0;
    }

    let step0 = span / count.max(1) as f64;
    let step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    step1 * factor
}
