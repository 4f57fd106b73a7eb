//! Text form of a vertex list: `(0,3),(3,0),(0,-3),(-3,0)`.

use glam::IVec2;
use tracing::debug;

/// Result of parsing a persisted vertex list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedVertexList {
    /// Points that parsed to lattice coordinates, in text order.
    pub points: Vec<IVec2>,
    /// Non-empty fragments that were dropped.
    pub skipped: usize,
}

/// Formats vertices as comma-joined `(x,y)` pairs.
#[must_use]
pub fn format_vertex_list(vertices: &[IVec2]) -> String {
    vertices
        .iter()
        .map(|v| format!("({},{})", v.x, v.y))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses the text form, skipping malformed or non-integral fragments.
///
/// Coordinates may be written as floats (`5.0`) as long as they are whole.
///
/// ```rust
/// use wedge_circle::store::parse_vertex_list;
///
/// let parsed = parse_vertex_list("(0,3),(3.0,0),(oops),(0.5,1),(0,-3)");
/// assert_eq!(parsed.points.len(), 3);
/// assert_eq!(parsed.skipped, 2);
/// ```
#[must_use]
pub fn parse_vertex_list(text: &str) -> ParsedVertexList {
    let mut parsed = ParsedVertexList::default();
    for fragment in text.trim().split(')') {
        let fragment = fragment.trim().trim_matches(',').trim();
        let fragment = fragment.strip_prefix('(').unwrap_or(fragment);
        if fragment.is_empty() {
            continue;
        }
        match parse_pair(fragment) {
            Some(point) => parsed.points.push(point),
            None => {
                debug!(fragment, "Skipping malformed vertex");
                parsed.skipped += 1;
            }
        }
    }
    parsed
}

fn parse_pair(fragment: &str) -> Option<IVec2> {
    let (x, y) = fragment.split_once(',')?;
    Some(IVec2::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(text: &str) -> Option<i32> {
    let value: f64 = text.trim().parse().ok()?;
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i32)
}
