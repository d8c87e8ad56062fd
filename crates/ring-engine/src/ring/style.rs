use super::LAP;

/// Order in which the two partition halves are laid around the ring.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SegmentOrder {
    /// Split portion from the ring start, remainder after it.
    SplitFirst,
    /// Remainder from the ring start, split portion ending at the tip.
    RestFirst,
}

/// Orientation of the linear gradients painted under each arc.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientAxis {
    /// One axis for every segment, from the tip direction to the opposite
    /// side of the ring. Colors follow the leading edge as it moves.
    LeadingEdge,
    /// Each gradient runs between its own segment's endpoints, trailing the arc.
    PerSegment,
}

/// Fill used for the remainder half of the partition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RestFill {
    Gradient,
    /// Flat color continuing the gradient where the two halves meet.
    Solid,
}

/// Where one gradient stop goes and which color it takes.
///
/// `offset` is the stop position along the gradient; `fraction` picks the color
/// between the segment's two color positions (0 = near end, 1 = far end).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StopPlacement {
    pub offset: f32,
    pub fraction: f32,
}

impl StopPlacement {
    #[inline]
    pub const fn new(offset: f32, fraction: f32) -> Self {
        Self { offset, fraction }
    }
}

/// Ordered stop placements shared by every gradient of a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct StopLayout {
    placements: Vec<StopPlacement>,
}

impl StopLayout {
    /// Placements are sorted by offset; offsets and fractions are clamped to [0, 1].
    pub fn new(placements: impl IntoIterator<Item = StopPlacement>) -> Self {
        let mut placements: Vec<StopPlacement> = placements
            .into_iter()
            .map(|p| StopPlacement::new(p.offset.clamp(0.0, 1.0), p.fraction.clamp(0.0, 1.0)))
            .collect();
        placements.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { placements }
    }

    /// Hard 0% / 100% stops.
    pub fn endpoints() -> Self {
        Self::new([StopPlacement::new(0.0, 0.0), StopPlacement::new(1.0, 1.0)])
    }

    /// 0% / 50% / 100% stops.
    pub fn even_thirds() -> Self {
        Self::new([
            StopPlacement::new(0.0, 0.0),
            StopPlacement::new(0.5, 0.5),
            StopPlacement::new(1.0, 1.0),
        ])
    }

    /// 15% / 85% stops; padding softens the ends of the sweep.
    pub fn softened() -> Self {
        Self::new([StopPlacement::new(0.15, 0.0), StopPlacement::new(0.85, 1.0)])
    }

    #[inline]
    pub fn placements(&self) -> &[StopPlacement] {
        &self.placements
    }
}

impl Default for StopLayout {
    fn default() -> Self {
        Self::endpoints()
    }
}

/// Progress needed before the leading-edge marker shows, in laps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LapThreshold {
    /// Visible once progress reaches `laps` full turns.
    AtLeast(f32),
    /// Visible once progress is strictly beyond `laps` full turns.
    Exceeds(f32),
    Never,
}

impl LapThreshold {
    pub fn is_reached(self, progress_angle: f32) -> bool {
        match self {
            LapThreshold::AtLeast(laps) => progress_angle >= laps * LAP,
            LapThreshold::Exceeds(laps) => progress_angle > laps * LAP,
            LapThreshold::Never => false,
        }
    }
}

/// Leading-edge marker configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub threshold: LapThreshold,
    /// Extra radius beyond half the stroke width.
    pub halo: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            threshold: LapThreshold::AtLeast(1.0),
            halo: 6.0,
        }
    }
}

/// Per-variant knobs of the ring builder.
#[derive(Debug, Clone, PartialEq)]
pub struct RingStyle {
    /// Fraction of a lap in (0, 1] where the ring is split in two.
    pub split_fraction: f32,
    pub order: SegmentOrder,
    pub gradient_axis: GradientAxis,
    pub stops: StopLayout,
    pub rest_fill: RestFill,
    pub marker: MarkerStyle,
}

impl RingStyle {
    /// Two half-turn gradients sharing a leading-edge axis.
    pub fn half_turn() -> Self {
        Self {
            split_fraction: 0.5,
            order: SegmentOrder::RestFirst,
            gradient_axis: GradientAxis::LeadingEdge,
            stops: StopLayout::endpoints(),
            rest_fill: RestFill::Gradient,
            marker: MarkerStyle::default(),
        }
    }

    /// A 7/8-lap trailing gradient followed by a solid stretch up to the tip.
    pub fn seven_eighths() -> Self {
        Self {
            split_fraction: 0.875,
            order: SegmentOrder::SplitFirst,
            gradient_axis: GradientAxis::PerSegment,
            stops: StopLayout::softened(),
            rest_fill: RestFill::Solid,
            marker: MarkerStyle {
                threshold: LapThreshold::Exceeds(1.5),
                ..MarkerStyle::default()
            },
        }
    }

    pub fn split_fraction(mut self, v: f32) -> Self { self.split_fraction = v; self }
    pub fn order(mut self, v: SegmentOrder) -> Self { self.order = v; self }
    pub fn gradient_axis(mut self, v: GradientAxis) -> Self { self.gradient_axis = v; self }
    pub fn stops(mut self, v: StopLayout) -> Self { self.stops = v; self }
    pub fn rest_fill(mut self, v: RestFill) -> Self { self.rest_fill = v; self }
    pub fn marker(mut self, v: MarkerStyle) -> Self { self.marker = v; self }

    /// Split point in radians.
    #[inline]
    pub fn split_angle(&self) -> f32 {
        self.split_fraction * LAP
    }
}

impl Default for RingStyle {
    fn default() -> Self {
        Self::half_turn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_layout_sorts_and_clamps() {
        let layout = StopLayout::new([
            StopPlacement::new(0.9, 2.0),
            StopPlacement::new(-0.1, 0.0),
            StopPlacement::new(0.4, 0.5),
        ]);
        let offsets: Vec<f32> = layout.placements().iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.4, 0.9]);
        assert_eq!(layout.placements()[2].fraction, 1.0);
    }

    #[test]
    fn at_least_includes_boundary() {
        assert!(LapThreshold::AtLeast(1.0).is_reached(LAP));
        assert!(!LapThreshold::AtLeast(1.0).is_reached(LAP * 0.99));
    }

    #[test]
    fn exceeds_excludes_boundary() {
        assert!(!LapThreshold::Exceeds(1.5).is_reached(1.5 * LAP));
        assert!(LapThreshold::Exceeds(1.5).is_reached(1.6 * LAP));
    }

    #[test]
    fn never_stays_hidden() {
        assert!(!LapThreshold::Never.is_reached(100.0 * LAP));
    }

    #[test]
    fn presets_differ_in_split() {
        assert_eq!(RingStyle::default(), RingStyle::half_turn());
        assert_eq!(RingStyle::half_turn().split_angle(), std::f32::consts::PI);
        assert_eq!(RingStyle::seven_eighths().split_fraction, 0.875);
    }
}
