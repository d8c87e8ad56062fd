use std::fmt;

/// Reasons a ring descriptor cannot be computed.
///
/// Each error is local to the ring being built; sibling rings in the same
/// pass are unaffected.
#[derive(Debug, Clone, PartialEq)]
pub enum RingError {
    /// Radius or stroke width is not a positive, finite number.
    InvalidGeometry { radius: f32, stroke_width: f32 },
    /// A color sweep was requested but no colors were supplied. Callers can
    /// recover by substituting [`Color::NEUTRAL`](crate::paint::Color::NEUTRAL).
    EmptyColorSet,
    /// A color literal could not be parsed.
    InvalidColor(String),
    /// Progress angle is negative or not finite.
    InvalidProgress(f32),
    /// Split fraction is outside (0, 1].
    InvalidSplit(f32),
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::InvalidGeometry { radius, stroke_width } => write!(
                f,
                "invalid ring geometry: radius {radius} and stroke width {stroke_width} must both be positive"
            ),
            RingError::EmptyColorSet => write!(f, "ring has no colors to sample"),
            RingError::InvalidColor(literal) => write!(f, "invalid color literal {literal:?}"),
            RingError::InvalidProgress(angle) => {
                write!(f, "progress angle {angle} must be finite and non-negative")
            }
            RingError::InvalidSplit(fraction) => {
                write!(f, "split fraction {fraction} must lie in (0, 1]")
            }
        }
    }
}

impl std::error::Error for RingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let e = RingError::InvalidGeometry { radius: -1.0, stroke_width: 30.0 };
        let msg = e.to_string();
        assert!(msg.contains("-1"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn display_quotes_color_literal() {
        let e = RingError::InvalidColor("#zz".into());
        assert_eq!(e.to_string(), "invalid color literal \"#zz\"");
    }
}
