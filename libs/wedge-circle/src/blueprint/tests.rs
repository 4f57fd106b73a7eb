use super::*;
use crate::core::point::CenterParity;
use crate::lattice::build_lattice_polygon;
use crate::quantize::is_representable;
use config::constants::QUANTIZATION_LIMIT;

const K: i32 = QUANTIZATION_LIMIT;

fn polygon(pairs: &[(i32, i32)], parity: CenterParity) -> Polygon {
    let vertices = pairs.iter().map(|&(x, y)| IVec2::new(x, y)).collect();
    Polygon::from_vertices(vertices, parity).unwrap()
}

fn cross(o: IVec2, a: IVec2, p: (f64, f64)) -> f64 {
    let (ox, oy) = (f64::from(o.x), f64::from(o.y));
    (f64::from(a.x) - ox) * (p.1 - oy) - (f64::from(a.y) - oy) * (p.0 - ox)
}

fn strictly_inside_polygon(poly: &Polygon, p: (f64, f64)) -> bool {
    poly.edges().all(|(a, b)| cross(a, b, p) > 0.0)
}

fn strictly_inside_primitive(primitive: &Primitive, p: (f64, f64)) -> bool {
    match primitive {
        Primitive::Rect(r) => {
            p.0 > f64::from(r.x)
                && p.0 < f64::from(r.x + r.width)
                && p.1 > f64::from(r.y)
                && p.1 < f64::from(r.y + r.height)
        }
        Primitive::Wedge(w) => {
            let d = [cross(w.a, w.b, p), cross(w.b, w.c, p), cross(w.c, w.a, p)];
            d.iter().all(|&v| v > 0.0) || d.iter().all(|&v| v < 0.0)
        }
    }
}

/// Samples one point per lattice cell at an irrational offset, so no sample
/// sits on a primitive boundary, and checks it is covered exactly once
/// inside the polygon and never outside it.
fn assert_exact_cover(poly: &Polygon, shapes: &ShapeSet) {
    let (dx, dy) = (std::f64::consts::SQRT_2 - 1.0, (3f64.sqrt() - 1.0) / 2.0);
    let (min, max) = poly.bounding_box();
    let primitives: Vec<Primitive> = shapes.primitives().collect();
    for x in (min.x - 1)..=max.x {
        for y in (min.y - 1)..=max.y {
            let p = (f64::from(x) + dx, f64::from(y) + dy);
            let hits = primitives
                .iter()
                .filter(|prim| strictly_inside_primitive(prim, p))
                .count();
            let expected = usize::from(strictly_inside_polygon(poly, p));
            assert_eq!(hits, expected, "sample {p:?} covered {hits} times");
        }
    }
}

// =============================================================================
// COMPILE
// =============================================================================

#[test]
fn test_radius_five_twelve_gon() {
    let poly = build_lattice_polygon(CenterParity::Even, 5.0).unwrap();
    let shapes = compile(&poly, K).unwrap();

    assert_eq!(shapes.wedges.len(), 12);
    assert_eq!(shapes.doubled_area(), poly.doubled_area());
    assert_eq!(shapes.doubled_area(), 148);
    assert_exact_cover(&poly, &shapes);
}

#[test]
fn test_odd_unit_square_is_one_rect() {
    let poly = polygon(&[(0, 0), (1, 0), (1, 1), (0, 1)], CenterParity::Odd);
    let shapes = compile(&poly, K).unwrap();

    assert!(shapes.wedges.is_empty());
    assert_eq!(
        shapes.rects,
        vec![Rect {
            x: 0,
            y: 0,
            width: 1,
            height: 1
        }]
    );
}

#[test]
fn test_swept_polygons_tile_exactly() {
    let mut compiled = 0;
    for parity in [CenterParity::Even, CenterParity::Odd] {
        for step in 0..60 {
            let radius = 1.0 + f64::from(step) * 0.37;
            let Ok(poly) = build_lattice_polygon(parity, radius) else {
                continue;
            };
            if !is_representable(&poly, K) {
                continue;
            }
            let shapes = compile(&poly, K).unwrap();
            assert_eq!(shapes.doubled_area(), poly.doubled_area(), "radius {radius}");
            assert!(shapes.max_span() <= K, "radius {radius}");
            assert_exact_cover(&poly, &shapes);
            compiled += 1;
        }
    }
    assert!(compiled > 20);
}

#[test]
fn test_diamond_subdivides_every_edge() {
    let poly = polygon(&[(16, 0), (0, 8), (-16, 0), (0, -8)], CenterParity::Even);
    let shapes = compile(&poly, K).unwrap();

    assert_eq!(poly.doubled_area(), 512);
    assert_eq!(shapes.wedges.len(), 32);
    assert!(shapes.wedges.iter().all(|w| w.legs() == (2, 1)));
    assert_eq!(shapes.doubled_area(), 512);
    assert!(shapes.max_span() <= K);
    assert_exact_cover(&poly, &shapes);
}

#[test]
fn test_unrepresentable_edge_is_invariant_violation() {
    let poly = polygon(&[(9, 0), (0, 7), (-9, 0), (0, -7)], CenterParity::Even);
    assert!(matches!(
        compile(&poly, K),
        Err(CircleError::InternalInvariantViolation(_))
    ));
}

#[test]
fn test_asymmetric_polygon_rejected() {
    let poly = polygon(&[(-1, -1), (3, -1), (-1, 3)], CenterParity::Even);
    assert!(matches!(
        compile(&poly, K),
        Err(CircleError::InternalInvariantViolation(_))
    ));
}

// =============================================================================
// SUBDIVISION
// =============================================================================

#[test]
fn test_subdivide_top_left_edge() {
    let wedge = Wedge::on_edge(IVec2::new(0, 8), IVec2::new(-16, 0), Quadrant::TopLeft);
    assert_eq!(wedge.c, IVec2::new(0, 0));

    let (pieces, rects) = subdivide_wedge(&wedge, K).unwrap();
    assert_eq!(pieces.len(), 8);
    assert_eq!(rects.len(), 7);
    assert_eq!(pieces[0].a, wedge.a);
    assert_eq!(pieces[7].b, wedge.b);
    for pair in pieces.windows(2) {
        assert_eq!(pair[0].b, pair[1].a);
    }

    let wedge_area: i64 = pieces.iter().map(Wedge::doubled_area).sum();
    let rect_area: i64 = rects.iter().map(Rect::doubled_area).sum();
    assert_eq!(wedge_area, 16);
    assert_eq!(rect_area, wedge.doubled_area() - wedge_area);
}

#[test]
fn test_subdivide_preserves_edge_direction() {
    let wedge = Wedge::on_edge(IVec2::new(-16, 0), IVec2::new(0, 8), Quadrant::TopLeft);
    let (pieces, _) = subdivide_wedge(&wedge, K).unwrap();
    assert_eq!(pieces.first().map(|w| w.a), Some(wedge.a));
    assert_eq!(pieces.last().map(|w| w.b), Some(wedge.b));
}

#[test]
fn test_subdivide_small_wedge_unchanged() {
    let wedge = Wedge::on_edge(IVec2::new(4, 3), IVec2::new(3, 4), Quadrant::TopRight);
    let (pieces, rects) = subdivide_wedge(&wedge, K).unwrap();
    assert_eq!(pieces, vec![wedge]);
    assert!(rects.is_empty());
}

#[test]
fn test_subdivide_coprime_legs_fails() {
    let wedge = Wedge::on_edge(IVec2::new(0, 7), IVec2::new(-9, 0), Quadrant::TopLeft);
    assert!(matches!(
        subdivide_wedge(&wedge, K),
        Err(CircleError::InternalInvariantViolation(_))
    ));
}

// =============================================================================
// SHAPES
// =============================================================================

#[test]
fn test_orientation_codes() {
    assert_eq!(Orientation::RECT, Orientation { x_axis: 1, z_axis: 3 });
    let codes: Vec<(i8, i8)> = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ]
    .into_iter()
    .map(|q| {
        let o = q.orientation();
        (o.x_axis, o.z_axis)
    })
    .collect();
    assert_eq!(codes, vec![(3, -1), (3, 2), (3, 1), (3, -2)]);
}

#[test]
fn test_quadrant_uses_midpoint() {
    let odd = CenterParity::Odd;
    assert_eq!(
        Quadrant::of_edge(IVec2::new(1, 4), IVec2::new(3, 3), odd),
        Quadrant::TopRight
    );
    assert_eq!(
        Quadrant::of_edge(IVec2::new(0, 4), IVec2::new(-2, 3), odd),
        Quadrant::TopLeft
    );
    assert_eq!(
        Quadrant::of_edge(IVec2::new(-4, -3), IVec2::new(-5, 0), CenterParity::Even),
        Quadrant::BottomLeft
    );
}

#[test]
fn test_rect_split() {
    let rect = Rect {
        x: -10,
        y: 0,
        width: 20,
        height: 3,
    };
    let tiles = rect.split(K);
    assert_eq!(tiles.len(), 3);
    assert_eq!(tiles[2].x, 6);
    assert_eq!(tiles[2].width, 4);
    assert_eq!(tiles.iter().map(Rect::doubled_area).sum::<i64>(), rect.doubled_area());
}

#[test]
fn test_shape_set_json() {
    let poly = build_lattice_polygon(CenterParity::Even, 5.0).unwrap();
    let shapes = compile(&poly, K).unwrap();
    let value = serde_json::to_value(&shapes).unwrap();

    assert_eq!(value["wedges"][0]["quadrant"], "TopRight");
    let back: ShapeSet = serde_json::from_value(value).unwrap();
    assert_eq!(back, shapes);
}
