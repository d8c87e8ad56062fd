//! SVG serialization of ring descriptors.
//!
//! Each ring becomes one `<g>`: gradient definitions, one `<mask>` per arc
//! (the arc stroked in white with round caps), then the fills and the marker
//! in [`RingDescriptor::paint_order`].

use std::fmt::{self, Write};

use ring_engine::coords::Rect;
use ring_engine::paint::{Color, ColorStop, Paint};
use ring_engine::ring::{ArcPath, PaintItem, RingDescriptor};

/// Full document: a `background` rect under every ring, in order.
pub fn render_document(
    width: f32,
    height: f32,
    background: Color,
    rings: &[RingDescriptor],
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="overflow: hidden">"#,
        w = num(width),
        h = num(height),
    )?;
    writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, background.to_hex_rgb())?;
    for ring in rings {
        write_ring(&mut out, ring)?;
    }
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn write_ring(out: &mut String, ring: &RingDescriptor) -> fmt::Result {
    if ring.is_empty() {
        return Ok(());
    }

    writeln!(out, "  <g>")?;
    writeln!(out, "    <defs>")?;
    for g in &ring.gradients {
        writeln!(
            out,
            r#"      <linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            g.id,
            num(g.start.x),
            num(g.start.y),
            num(g.end.x),
            num(g.end.y),
        )?;
        write_stops(out, &g.stops)?;
        writeln!(out, "      </linearGradient>")?;
    }
    if let Some(marker) = ring.leading_edge_marker.as_ref().filter(|m| m.visible) {
        writeln!(out, r#"      <radialGradient id="{}">"#, marker.shadow.id)?;
        write_stops(out, &marker.shadow.stops)?;
        writeln!(out, "      </radialGradient>")?;
    }
    writeln!(out, "    </defs>")?;

    for (i, mask) in ring.masks.iter().enumerate() {
        let Some(arc) = ring.mask_arc(i) else { continue };
        writeln!(out, r#"    <mask id="{}">"#, mask.id)?;
        writeln!(
            out,
            r#"      <path d="{}" stroke-width="{}" stroke="{}" fill="none" stroke-linecap="round"/>"#,
            arc_path_data(arc),
            num(arc.stroke_width),
            Color::WHITE.to_hex_rgb(),
        )?;
        writeln!(out, "    </mask>")?;
    }

    for item in ring.paint_order() {
        match item {
            PaintItem::Fill(fill) => {
                writeln!(
                    out,
                    r#"    <rect {} fill="{}" mask="url(#{})"/>"#,
                    rect_attrs(ring.gradient_bounds),
                    paint_ref(&fill.paint),
                    ring.masks[fill.mask].id,
                )?;
            }
            PaintItem::Marker(marker) => {
                write!(
                    out,
                    r#"    <circle r="{}" cx="{}" cy="{}" fill="url(#{})""#,
                    num(marker.radius),
                    num(marker.center.x),
                    num(marker.center.y),
                    marker.shadow.id,
                )?;
                if let Some(mask) = marker.mask {
                    write!(out, r#" mask="url(#{})""#, ring.masks[mask].id)?;
                }
                writeln!(out, "/>")?;
            }
        }
    }
    writeln!(out, "  </g>")
}

fn write_stops(out: &mut String, stops: &[ColorStop]) -> fmt::Result {
    for stop in stops {
        write!(
            out,
            r#"        <stop offset="{}%" stop-color="{}""#,
            num(stop.t * 100.0),
            stop.color.to_hex_rgb(),
        )?;
        if stop.color.a < 1.0 {
            write!(out, r#" stop-opacity="{}""#, num(stop.color.a))?;
        }
        writeln!(out, "/>")?;
    }
    Ok(())
}

/// Path data for one arc. A full turn has coincident endpoints, which a
/// single `A` command would drop, so it is split at its midpoint.
pub fn arc_path_data(arc: &ArcPath) -> String {
    let flag = |b: bool| if b { 1 } else { 0 };
    let r = num(arc.radius);
    if arc.is_full_turn() {
        let mid = arc.point_at(0.5);
        format!(
            "M {} {} A {r} {r} 0 0 {} {} {} A {r} {r} 0 0 {} {} {}",
            num(arc.start.x),
            num(arc.start.y),
            flag(arc.sweep),
            num(mid.x),
            num(mid.y),
            flag(arc.sweep),
            num(arc.end.x),
            num(arc.end.y),
        )
    } else {
        format!(
            "M {} {} A {r} {r} 0 {} {} {} {}",
            num(arc.start.x),
            num(arc.start.y),
            flag(arc.large_arc),
            flag(arc.sweep),
            num(arc.end.x),
            num(arc.end.y),
        )
    }
}

fn rect_attrs(r: Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        num(r.origin.x),
        num(r.origin.y),
        num(r.size.x),
        num(r.size.y),
    )
}

fn paint_ref(paint: &Paint) -> String {
    match paint {
        Paint::Solid(c) => c.to_hex_rgb(),
        Paint::LinearGradient(id) => format!("url(#{id})"),
    }
}

/// Up to three decimals, trailing zeros trimmed, no `-0`.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_engine::coords::Vec2;
    use ring_engine::ring::{IdAllocator, RingSpec, LAP};

    fn ring(progress_angle: f32) -> RingDescriptor {
        let spec = RingSpec::new(70.0, 30.0)
            .center(Vec2::new(200.0, 200.0))
            .colors(vec![Color::from_hex("#75fbb0").unwrap(), Color::from_hex("#60d6fa").unwrap()])
            .progress_angle(progress_angle);
        RingDescriptor::build(&spec, &mut IdAllocator::new("t")).unwrap()
    }

    // ── num ───────────────────────────────────────────────────────────────

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(200.0), "200");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(1.23456), "1.235");
    }

    // ── arcs ──────────────────────────────────────────────────────────────

    #[test]
    fn half_turn_path() {
        let d = ring(std::f32::consts::PI);
        assert_eq!(arc_path_data(&d.arcs[0]), "M 200 130 A 70 70 0 0 1 200 270");
    }

    #[test]
    fn full_turn_path_is_split() {
        let spec = RingSpec::new(10.0, 2.0)
            .colors(vec![Color::WHITE])
            .progress_angle(LAP)
            .style(ring_engine::ring::RingStyle::half_turn().split_fraction(1.0));
        let d = RingDescriptor::build(&spec, &mut IdAllocator::default()).unwrap();
        let data = arc_path_data(&d.arcs[0]);
        assert_eq!(data.matches(" A ").count(), 2);
        assert_eq!(data, "M 0 -10 A 10 10 0 0 1 0 10 A 10 10 0 0 1 0 -10");
    }

    // ── document ──────────────────────────────────────────────────────────

    #[test]
    fn empty_ring_emits_only_background() {
        let svg = render_document(400.0, 400.0, Color::BLACK, &[ring(0.0)]).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#000000""##));
        assert!(!svg.contains("<g>"));
    }

    #[test]
    fn wrapped_ring_references_its_defs() {
        let d = ring(LAP * 1.5);
        let svg = render_document(400.0, 400.0, Color::BLACK, &[d.clone()]).unwrap();
        for g in &d.gradients {
            assert!(svg.contains(&format!(r#"<linearGradient id="{}""#, g.id)));
            assert!(svg.contains(&format!("url(#{})", g.id)));
        }
        for m in &d.masks {
            assert!(svg.contains(&format!(r#"<mask id="{}">"#, m.id)));
        }
        assert_eq!(svg.matches(r##"stroke="#ffffff""##).count(), d.masks.len());
        let marker = d.leading_edge_marker.as_ref().unwrap();
        assert!(svg.contains(&format!(r#"<radialGradient id="{}">"#, marker.shadow.id)));
        assert!(svg.contains(r#"stop-opacity="0""#));
        assert!(svg.contains(r#"x="115" y="115" width="170" height="170""#));

        // Marker is painted between the two fills.
        let circle = svg.find("<circle").unwrap();
        let rects: Vec<usize> = svg.match_indices("<rect x=").map(|(i, _)| i).collect();
        assert_eq!(rects.len(), 2);
        assert!(rects[0] < circle && circle < rects[1]);
    }

    #[test]
    fn hidden_marker_is_not_emitted() {
        let svg = render_document(400.0, 400.0, Color::BLACK, &[ring(1.0)]).unwrap();
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("radialGradient"));
    }
}
