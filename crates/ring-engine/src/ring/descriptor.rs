use std::f32::consts::PI;

use log::trace;

use crate::coords::{Rect, Vec2};
use crate::paint::{ColorStop, LinearGradient, Paint, RadialGradient};

use super::{
    cumulate, partition_once, ColorSampler, GradientAxis, IdAllocator, RestFill, RingError,
    RingSpec, RingStyle, Segment, SegmentOrder, LAP,
};

/// Stroked circular arc with round caps.
///
/// `start`/`end` are absolute points; `start_angle` is the absolute angle of
/// `start` (phase included) so renderers can subdivide the arc if needed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcPath {
    pub center: Vec2,
    pub start: Vec2,
    pub end: Vec2,
    pub radius: f32,
    pub stroke_width: f32,
    pub start_angle: f32,
    pub magnitude: f32,
    /// Arc spans more than half a turn.
    pub large_arc: bool,
    /// Arc runs toward increasing angles (clockwise on a +Y-down surface).
    pub sweep: bool,
}

impl ArcPath {
    fn on_ring(segment: &Segment, spec: &RingSpec, phase: f32) -> Self {
        Self {
            center: spec.center,
            start: Vec2::on_circle(spec.center, spec.radius, segment.from + phase),
            end: Vec2::on_circle(spec.center, spec.radius, segment.to + phase),
            radius: spec.radius,
            stroke_width: spec.stroke_width,
            start_angle: segment.from + phase,
            magnitude: segment.magnitude,
            large_arc: segment.magnitude > PI,
            sweep: true,
        }
    }

    /// Point `fraction` of the way along the arc.
    #[inline]
    pub fn point_at(&self, fraction: f32) -> Vec2 {
        Vec2::on_circle(self.center, self.radius, self.start_angle + self.magnitude * fraction)
    }

    /// Start and end coincide; a single SVG-style arc command cannot draw it.
    #[inline]
    pub fn is_full_turn(&self) -> bool {
        self.magnitude >= LAP - 1e-4
    }
}

/// Clip shape built from one arc's stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskSpec {
    pub id: String,
    /// Index into [`RingDescriptor::arcs`].
    pub arc: usize,
}

/// Paint covering [`RingDescriptor::gradient_bounds`], clipped by a mask.
#[derive(Debug, Clone, PartialEq)]
pub struct RingFill {
    /// Index into [`RingDescriptor::masks`].
    pub mask: usize,
    pub paint: Paint,
}

/// Soft shadow under the ring's tip once it has wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadingEdgeMarker {
    pub center: Vec2,
    pub radius: f32,
    pub visible: bool,
    pub shadow: RadialGradient,
    /// Mask of the first ring segment, when it is drawn. The shadow is clipped
    /// to it so it only darkens the stroke the tip overlaps. `None` when the
    /// first segment is empty; such a marker is never visible.
    pub mask: Option<usize>,
}

/// One paint operation in compositing order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaintItem<'a> {
    Fill(&'a RingFill),
    Marker(&'a LeadingEdgeMarker),
}

/// Everything a renderer needs to draw one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingDescriptor {
    pub progress_angle: f32,
    /// Swept angle clamped to one lap.
    pub ring_angle: f32,
    /// Whole laps (and beyond) folded into the phase.
    pub rotation: f32,
    /// Effective start angle of the ring.
    pub phase: f32,
    /// Square every fill covers: side `2 * radius + stroke_width` around the center.
    pub gradient_bounds: Rect,
    /// Full partition, degenerate entries included.
    pub segments: Vec<Segment>,
    pub arcs: Vec<ArcPath>,
    pub masks: Vec<MaskSpec>,
    pub fills: Vec<RingFill>,
    pub gradients: Vec<LinearGradient>,
    pub leading_edge_marker: Option<LeadingEdgeMarker>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Portion {
    Split,
    Rest,
}

impl RingDescriptor {
    /// Computes the descriptor for `spec`, drawing gradient/mask ids from `ids`.
    pub fn build(spec: &RingSpec, ids: &mut IdAllocator) -> Result<Self, RingError> {
        spec.validate()?;
        let style = &spec.style;

        let ring_angle = spec.progress_angle.min(LAP);
        let rotation = spec.progress_angle - ring_angle;
        let phase = spec.initial_phase + rotation;

        let (split, rest) = partition_once(ring_angle, style.split_angle());
        let (magnitudes, portions) = match style.order {
            SegmentOrder::SplitFirst => ([split, rest], [Portion::Split, Portion::Rest]),
            SegmentOrder::RestFirst => ([rest, split], [Portion::Rest, Portion::Split]),
        };
        let segments = cumulate(&magnitudes);
        let gradient_bounds = Rect::square_around(spec.center, spec.radius * 2.0 + spec.stroke_width);

        // Zero progress draws nothing, so colors are not consulted.
        let Some(leading) = segments.iter().rposition(|s| !s.is_degenerate()) else {
            return Ok(Self {
                progress_angle: spec.progress_angle,
                ring_angle,
                rotation,
                phase,
                gradient_bounds,
                segments,
                arcs: Vec::new(),
                masks: Vec::new(),
                fills: Vec::new(),
                gradients: Vec::new(),
                leading_edge_marker: None,
            });
        };
        let sampler = ColorSampler::new(&spec.colors)?;
        let ramp = ColorSpan::for_ring(style, &segments, &portions, ring_angle);

        let mut arcs = Vec::new();
        let mut masks = Vec::new();
        let mut fills = Vec::new();
        let mut gradients = Vec::new();
        let mut first_segment_mask = None;

        for (i, (segment, portion)) in segments.iter().zip(portions).enumerate() {
            if segment.is_degenerate() {
                continue;
            }

            let arc = arcs.len();
            arcs.push(ArcPath::on_ring(segment, spec, phase));

            let mask = masks.len();
            masks.push(MaskSpec { id: ids.next_id("mask"), arc });
            if i == 0 {
                first_segment_mask = Some(mask);
            }

            let paint = if portion == Portion::Rest && style.rest_fill == RestFill::Solid {
                let junction = match style.order {
                    SegmentOrder::SplitFirst => segment.from,
                    SegmentOrder::RestFirst => segment.to,
                };
                Paint::solid(sampler.sample(ramp.position(junction)))
            } else {
                let (start, end, near, far) = match style.gradient_axis {
                    GradientAxis::LeadingEdge => {
                        let tip = ring_angle + phase;
                        let near = if i == leading { 1.0 } else { 0.0 };
                        (
                            Vec2::unit_box_direction(tip),
                            Vec2::unit_box_direction(tip - PI),
                            near,
                            0.5,
                        )
                    }
                    GradientAxis::PerSegment => (
                        Vec2::unit_box_direction(segment.from + phase),
                        Vec2::unit_box_direction(segment.to + phase),
                        ramp.position(segment.from),
                        ramp.position(segment.to),
                    ),
                };
                let stops = style
                    .stops
                    .placements()
                    .iter()
                    .map(|p| ColorStop::new(p.offset, sampler.sample(near + (far - near) * p.fraction)))
                    .collect();
                let gradient = LinearGradient::new(ids.next_id("gradient"), start, end, stops);
                debug_assert!(gradient.is_valid(), "malformed ring gradient {gradient:?}");
                let paint = Paint::LinearGradient(gradient.id.clone());
                gradients.push(gradient);
                paint
            };
            fills.push(RingFill { mask, paint });
        }

        // The shadow only ever darkens the first segment; without it there is
        // nothing to clip to and the marker stays hidden.
        let leading_edge_marker = Some(LeadingEdgeMarker {
            center: Vec2::on_circle(spec.center, spec.radius, segments[leading].to + phase),
            radius: spec.stroke_width / 2.0 + style.marker.halo,
            visible: first_segment_mask.is_some()
                && style.marker.threshold.is_reached(spec.progress_angle),
            shadow: RadialGradient::shadow(ids.next_id("shadow")),
            mask: first_segment_mask,
        });

        let descriptor = Self {
            progress_angle: spec.progress_angle,
            ring_angle,
            rotation,
            phase,
            gradient_bounds,
            segments,
            arcs,
            masks,
            fills,
            gradients,
            leading_edge_marker,
        };

        trace!(
            "ring r={} progress={:.4} swept={:.4} arcs={} marker_visible={}",
            spec.radius,
            spec.progress_angle,
            descriptor.swept(),
            descriptor.arcs.len(),
            descriptor.leading_edge_marker.as_ref().is_some_and(|m| m.visible),
        );
        Ok(descriptor)
    }

    /// Fills and the marker in the order they are composited: the first
    /// segment, then the shadow over it, then the rest. A hidden marker is
    /// skipped.
    pub fn paint_order(&self) -> Vec<PaintItem<'_>> {
        let mut items = Vec::with_capacity(self.fills.len() + 1);
        let mut fills = self.fills.iter();
        items.extend(fills.next().map(PaintItem::Fill));
        if let Some(marker) = self.leading_edge_marker.as_ref().filter(|m| m.visible) {
            items.push(PaintItem::Marker(marker));
        }
        items.extend(fills.map(PaintItem::Fill));
        items
    }

    /// Arc a mask is cut from.
    pub fn mask_arc(&self, mask: usize) -> Option<&ArcPath> {
        self.masks.get(mask).and_then(|m| self.arcs.get(m.arc))
    }

    /// Sum of all segment magnitudes; equals `ring_angle`.
    pub fn swept(&self) -> f32 {
        self.segments.iter().map(|s| s.magnitude).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Angular range mapped onto the whole color list.
#[derive(Debug, Copy, Clone)]
struct ColorSpan {
    from: f32,
    len: f32,
}

impl ColorSpan {
    /// A solid rest keeps its flat color, so the split half alone sweeps the
    /// palette; otherwise the palette stretches across the drawn ring.
    fn for_ring(style: &RingStyle, segments: &[Segment], portions: &[Portion], ring_angle: f32) -> Self {
        if style.rest_fill == RestFill::Solid {
            if let Some((split, _)) = segments.iter().zip(portions).find(|(_, p)| **p == Portion::Split) {
                return Self { from: split.from, len: split.magnitude };
            }
        }
        Self { from: 0.0, len: ring_angle }
    }

    fn position(self, angle: f32) -> f32 {
        if self.len <= 0.0 {
            return 0.0;
        }
        ((angle - self.from) / self.len).clamp(0.0, 1.0)
    }
}
