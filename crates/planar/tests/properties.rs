//! Property tests on integer-cornered rectangles, where every contact point
//! and offset is exact in f64.

use planar::prelude::*;
use proptest::prelude::*;

fn rect() -> impl Strategy<Value = Rectangle> {
    (-20i32..20, -20i32..20, 1i32..=12, 1i32..=12).prop_map(|(x, y, w, h)| {
        Rectangle::new(x as f64, y as f64, w as f64, h as f64)
    })
}

fn boxes_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width
        && b.x < a.x + a.width
        && a.y < b.y + b.height
        && b.y < a.y + a.height
}

fn corners(r: &Rectangle) -> Vec<Point2<f64>> {
    let (lo, hi) = (r.min(), r.max());
    vec![lo, point![lo.x, hi.y], hi, point![hi.x, lo.y]]
}

proptest! {
    /// Any rotation or reversal of the corner list builds the same clockwise polygon.
    #[test]
    fn construction_normalizes_winding(r in rect(), k in 0usize..4, reverse in any::<bool>()) {
        let mut pts = corners(&r);
        pts.rotate_left(k);
        if reverse {
            pts.reverse();
        }
        let p = Polygon::from_points(pts).unwrap();
        prop_assert!(is_clockwise(p.line_segments()));
        prop_assert_eq!(p.line_segments().len(), 4);
        prop_assert_eq!(p, r.to_polygon().unwrap());
    }

    #[test]
    fn next_line_segment_walks_the_whole_boundary(r in rect()) {
        let p = r.to_polygon().unwrap();
        let first = &p.line_segments()[0];
        let mut cur = first;
        for _ in 0..p.line_segments().len() {
            cur = p.next_line_segment(cur).unwrap();
        }
        prop_assert!(std::ptr::eq(cur, first));
    }

    #[test]
    fn transpose_round_trip(r in rect(), dx in -30i32..30, dy in -30i32..30) {
        let p = r.to_polygon().unwrap();
        let (dx, dy) = (dx as f64, dy as f64);
        let moved = p.transpose(dx, dy);
        prop_assert_eq!(moved.get_bounds(), Rectangle::new(r.x + dx, r.y + dy, r.width, r.height));
        prop_assert_eq!(moved.transpose(-dx, -dy), p);
    }

    /// Interior overlap of boxes matches the open-interval test on both axes.
    #[test]
    fn overlap_matches_box_test(a in rect(), b in rect()) {
        let pa = a.to_polygon().unwrap();
        let pb = b.to_polygon().unwrap();
        prop_assert_eq!(pa.overlap(&pb), boxes_overlap(&a, &b));
        prop_assert_eq!(pa.overlap(&pb), pb.overlap(&pa));
        prop_assert!(pa.overlap(&pa));
    }

    #[test]
    fn separate_from_clears_overlap(a in rect(), b in rect(), axis in 0usize..5) {
        let direction = [
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![-1.0, 0.0],
            vector![0.0, -1.0],
            vector![3.0, 0.0],
        ][axis];
        let pa = a.to_polygon().unwrap();
        let pb = b.to_polygon().unwrap();
        let moved = pa.separate_from(&pb, direction).unwrap();
        prop_assert!(!moved.overlap(&pb));
        if !boxes_overlap(&a, &b) {
            prop_assert_eq!(moved, pa);
        }
    }

    /// Oblique integer directions, where the push is not along an axis.
    #[test]
    fn separate_from_clears_overlap_along_oblique_axes(
        a in rect(),
        b in rect(),
        dx in -4i32..=4,
        dy in -4i32..=4,
    ) {
        prop_assume!(dx != 0 && dy != 0);
        let direction = vector![dx as f64, dy as f64];
        let pa = a.to_polygon().unwrap();
        let pb = b.to_polygon().unwrap();
        let moved = pa.separate_from(&pb, direction).unwrap();
        prop_assert!(!moved.overlap(&pb));
        let shift = moved.line_segments()[0].p1 - pa.line_segments()[0].p1;
        let scale = direction.norm_squared().max(shift.norm_squared());
        prop_assert!(shift.perp(&direction).abs() <= 1e-9 * scale);
    }

    #[test]
    fn swell_grows_bounds(r in rect(), amount in 1i32..5) {
        let p = r.to_polygon().unwrap();
        let amount = amount as f64;
        let big = p.swell(amount).unwrap();
        let bounds = big.get_bounds();
        prop_assert!((bounds.x - (r.x - amount)).abs() < 1e-9);
        prop_assert!((bounds.y - (r.y - amount)).abs() < 1e-9);
        prop_assert!((bounds.width - (r.width + 2.0 * amount)).abs() < 1e-9);
        prop_assert!((bounds.height - (r.height + 2.0 * amount)).abs() < 1e-9);
        prop_assert!(p.vertices().all(|v| big.contains_point(v)));
    }

    #[test]
    fn merge_covers_both_inputs(a in rect(), b in rect()) {
        let pa = a.to_polygon().unwrap();
        let pb = b.to_polygon().unwrap();
        match pa.merge(&pb) {
            Ok(merged) => {
                prop_assert!(boxes_overlap(&a, &b));
                prop_assert!(merged.covers(&pa));
                prop_assert!(merged.covers(&pb));
                prop_assert!(is_clockwise(merged.line_segments()));
                let ix = (a.max().x.min(b.max().x) - a.x.max(b.x)).max(0.0);
                let iy = (a.max().y.min(b.max().y) - a.y.max(b.y)).max(0.0);
                let union_area = a.width * a.height + b.width * b.height - ix * iy;
                prop_assert_eq!(merged.area(), union_area);
            }
            Err(err) => {
                prop_assert_eq!(err, GeomError::DisjointMerge);
                prop_assert!(!boxes_overlap(&a, &b));
            }
        }
    }
}
