//! FILENAME: chart-engine/src/intervals.rs
//! Value-axis interval selection.
//!
//! Given a value range, picks a short run of round-numbered ticks that
//! covers it: step sizes come from three families (1s, 2s, 5s) scaled by
//! powers of ten, and an axis never carries more than six ticks. Ranges
//! reaching below zero get negative multiples of the same step prepended;
//! negative-heavy ranges are solved on the mirrored positive side and
//! negated back.

use log::trace;

// Candidate step runs per decade. Each family is arithmetic in its first
// member, so ticks are plain step multiples.
const STEP_FAMILIES: [[f64; 5]; 3] = [
    [1.0, 2.0, 3.0, 4.0, 5.0],
    [2.0, 4.0, 6.0, 8.0, 10.0],
    [5.0, 10.0, 15.0, 20.0, 25.0],
];

const MAX_TICKS: usize = 6;
const MAX_INFLATE_ROUNDS: usize = 16;

/// Which side of zero dominates the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeClass {
    /// Everything at or above zero.
    NonNegative,
    /// Crosses zero with the positive side at least as large.
    PositiveDominant,
    /// Negative side dominates; solved by mirroring.
    NegativeDominant,
}

fn classify(min: f64, max: f64) -> RangeClass {
    if min >= 0.0 {
        RangeClass::NonNegative
    } else if max > 0.0 && max >= -min {
        RangeClass::PositiveDominant
    } else {
        RangeClass::NegativeDominant
    }
}

/// Selects axis tick values for the range `min..=max`.
///
/// With `requested_count == 0` the selector picks its own count (four to
/// six ticks); otherwise the covered range is requantized into exactly
/// `requested_count` equal steps, yielding `requested_count + 1` ticks.
///
/// Non-finite bounds fall back to a unit axis over `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisIntervalSelector {
    pub min: f64,
    pub max: f64,
    pub requested_count: usize,
}

impl AxisIntervalSelector {
    pub fn new(min: f64, max: f64) -> Self {
        AxisIntervalSelector {
            min,
            max,
            requested_count: 0,
        }
    }

    pub fn with_count(mut self, requested_count: usize) -> Self {
        self.requested_count = requested_count;
        self
    }

    /// Runs the selection. Ticks come back in ascending order and always
    /// cover the range (first tick <= min, last tick >= max) for finite
    /// inputs.
    pub fn select(&self) -> Vec<f64> {
        let ticks = if !self.min.is_finite() || !self.max.is_finite() {
            single_sided(5.0)
        } else {
            self.select_finite()
        };
        trace!(
            "selected {} tick(s) for range {}..={}",
            ticks.len(),
            self.min,
            self.max
        );
        if self.requested_count > 0 {
            requantize(&ticks, self.requested_count)
        } else {
            ticks
        }
    }

    fn select_finite(&self) -> Vec<f64> {
        let mut lo = self.min;
        let mut hi = self.max;
        let mut mirrored = false;
        loop {
            match classify(lo, hi) {
                RangeClass::NonNegative => return finish(single_sided(hi), mirrored),
                RangeClass::PositiveDominant => return finish(double_sided(lo, hi), mirrored),
                RangeClass::NegativeDominant => {
                    if mirrored {
                        // Inverted bounds can look negative-heavy from
                        // both orientations; give up on the range and
                        // return the unit axis.
                        return single_sided(5.0);
                    }
                    mirrored = true;
                    let (a, b) = (-hi, -lo);
                    lo = a;
                    hi = b;
                }
            }
        }
    }
}

/// Convenience wrapper over [`AxisIntervalSelector`].
pub fn intervals(min: f64, max: f64, requested_count: usize) -> Vec<f64> {
    AxisIntervalSelector::new(min, max)
        .with_count(requested_count)
        .select()
}

/// Picks the step size covering `target`: scale the families by powers of
/// ten until one's last member reaches the target, then take the first
/// such family's base step.
fn choose_step(target: f64) -> f64 {
    let max = if target > 0.0 { target } else { 5.0 };
    let mut scale = 1.0_f64;
    while 25.0 * scale < max {
        scale *= 10.0;
    }
    while 2.5 * scale > max && scale > f64::MIN_POSITIVE {
        scale /= 10.0;
    }
    let family = STEP_FAMILIES
        .iter()
        .find(|f| f[4] * scale >= max)
        .unwrap_or(&STEP_FAMILIES[2]);
    family[0] * scale
}

/// Emits step multiples from zero: four ticks always, the fifth and
/// sixth only when the range actually reaches them.
fn emit(step: f64, max: f64) -> Vec<f64> {
    let mut ticks = vec![0.0, step, 2.0 * step, 3.0 * step];
    if max >= 3.0 * step {
        ticks.push(4.0 * step);
    }
    if max >= 4.0 * step {
        ticks.push(5.0 * step);
    }
    ticks
}

fn single_sided(target: f64) -> Vec<f64> {
    let max = if target > 0.0 { target } else { 5.0 };
    emit(choose_step(max), max)
}

/// Positive-dominant ranges: solve the positive side single-sided, then
/// prepend negative step multiples to reach `lo`. When the negative ticks
/// do not fit under the six-tick cap, inflate the target by `5.1` steps
/// and redo the single-sided solve from the inflated target, until the
/// coarser step leaves enough headroom.
fn double_sided(lo: f64, hi: f64) -> Vec<f64> {
    let mut target = hi;
    let mut rounds = 0;
    loop {
        let step = choose_step(target);
        let pos = emit(step, target);
        let needed = ((-lo) / step).ceil().max(0.0) as usize;
        if needed + pos.len() <= MAX_TICKS || rounds >= MAX_INFLATE_ROUNDS {
            let mut ticks: Vec<f64> = (1..=needed).rev().map(|k| -(k as f64) * step).collect();
            ticks.extend(pos);
            return ticks;
        }
        target += 5.1 * step;
        rounds += 1;
    }
}

fn finish(mut ticks: Vec<f64>, mirrored: bool) -> Vec<f64> {
    if mirrored {
        ticks.reverse();
        for t in &mut ticks {
            let v = -*t;
            *t = if v == 0.0 { 0.0 } else { v };
        }
    }
    ticks
}

/// Divides the covered range into `count` equal steps.
fn requantize(ticks: &[f64], count: usize) -> Vec<f64> {
    let lo = ticks.first().copied().unwrap_or(0.0);
    let hi = ticks.last().copied().unwrap_or(0.0);
    let step = (hi - lo) / count as f64;
    (0..=count).map(|k| lo + k as f64 * step).collect()
}
