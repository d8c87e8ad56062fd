/// A contiguous angular range of a ring, in radians relative to the ring start.
///
/// Invariant: `to == from + magnitude` (up to float rounding of the running sum).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub magnitude: f32,
    pub from: f32,
    pub to: f32,
}

impl Segment {
    /// Zero-length segments produce no visible stroke.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.magnitude <= 0.0
    }
}

/// Lays `values` end to end starting at 0.
///
/// Each segment starts exactly where the previous one ended, so adjacent
/// `to`/`from` pairs compare equal.
pub fn cumulate(values: &[f32]) -> Vec<Segment> {
    values
        .iter()
        .scan(0.0_f32, |end, &magnitude| {
            let from = *end;
            *end += magnitude;
            Some(Segment { magnitude, from, to: *end })
        })
        .collect()
}
