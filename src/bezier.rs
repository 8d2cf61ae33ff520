// Bezier curve evaluation in Bernstein form.
// Visual: these are the points the black polyline passes through.

use crate::binomial::BinomialTable;
use crate::types::Point2;

/// Point on the degree-R curve at parameter `t`:
///   sum_{i=0..R} C(R,i) * t^i * (1-t)^(R-i) * P_i
///
/// Only `control_points[0..=degree]` are read; a shorter slice panics.
/// `t` is not clamped, values outside [0,1] extrapolate.
pub fn bezier_point(
    control_points: &[Point2],
    degree: usize,
    t: f32,
    table: &BinomialTable,
) -> Point2 {
    let s = 1.0 - t;
    let mut point = Point2::default();
    for (i, p) in control_points[..=degree].iter().enumerate() {
        // powi(0) is 1.0 even for a zero base, so the endpoints come out exact
        let weight = table.get(degree, i) as f32 * t.powi(i as i32) * s.powi((degree - i) as i32);
        point.x += p.x * weight;
        point.y += p.y * weight;
    }
    point
}

/// Evaluate the curve at `num_steps + 1` evenly spaced parameters across [0,1].
/// Consecutive pairs are the line segments we draw.
pub fn sample_curve(
    control_points: &[Point2],
    degree: usize,
    num_steps: usize,
    table: &BinomialTable,
) -> Vec<Point2> {
    (0..=num_steps)
        .map(|i| {
            let t = i as f32 / num_steps as f32;
            bezier_point(control_points, degree, t, table)
        })
        .collect()
}

/// The same polyline as consecutive (start, end) pairs, evaluated lazily.
/// Nothing is collected, so a frame costs no allocation however many steps there are.
pub fn curve_segments<'a>(
    control_points: &'a [Point2],
    degree: usize,
    num_steps: usize,
    table: &'a BinomialTable,
) -> impl Iterator<Item = (Point2, Point2)> + 'a {
    let mut prev = bezier_point(control_points, degree, 0.0, table);
    (1..=num_steps).map(move |i| {
        let t = i as f32 / num_steps as f32;
        let next = bezier_point(control_points, degree, t, table);
        (std::mem::replace(&mut prev, next), next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    fn assert_point_eq(a: Point2, b: Point2) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-3);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-3);
    }

    fn curves() -> Vec<Vec<Point2>> {
        vec![
            vec![p(42.0, -7.0)],
            vec![p(0.0, 0.0), p(10.0, 0.0)],
            vec![p(0.0, 0.0), p(5.0, 10.0), p(10.0, 0.0)],
            vec![p(100.0, 400.0), p(150.0, 100.0), p(550.0, 100.0), p(600.0, 400.0)],
            vec![
                p(12.5, 3.0),
                p(-40.0, 80.0),
                p(200.0, 310.0),
                p(77.0, 9.0),
                p(300.0, 150.0),
                p(5.0, 600.0),
            ],
        ]
    }

    #[test]
    fn linear_midpoint() {
        let table = BinomialTable::new(1);
        let pts = [p(0.0, 0.0), p(10.0, 0.0)];
        assert_point_eq(bezier_point(&pts, 1, 0.5, &table), p(5.0, 0.0));
    }

    #[test]
    fn quadratic_midpoint_is_average_of_midpoints() {
        let table = BinomialTable::new(2);
        let pts = [p(0.0, 0.0), p(5.0, 10.0), p(10.0, 0.0)];
        assert_point_eq(bezier_point(&pts, 2, 0.5, &table), p(5.0, 5.0));
    }

    #[test]
    fn endpoints_interpolate_first_and_last_control_point() {
        for pts in curves() {
            let degree = pts.len() - 1;
            let table = BinomialTable::new(degree);
            assert_point_eq(bezier_point(&pts, degree, 0.0, &table), pts[0]);
            assert_point_eq(bezier_point(&pts, degree, 1.0, &table), pts[degree]);
        }
    }

    #[test]
    fn reversing_points_mirrors_parameter() {
        for pts in curves() {
            let degree = pts.len() - 1;
            let table = BinomialTable::new(degree);
            let reversed: Vec<Point2> = pts.iter().rev().copied().collect();
            for step in 0..=20 {
                let t = step as f32 / 20.0;
                let forward = bezier_point(&pts, degree, t, &table);
                let backward = bezier_point(&reversed, degree, 1.0 - t, &table);
                assert_point_eq(forward, backward);
            }
        }
    }

    #[test]
    fn extra_control_points_are_ignored() {
        let table = BinomialTable::new(1);
        let pts = [p(0.0, 0.0), p(10.0, 0.0), p(999.0, 999.0)];
        assert_point_eq(bezier_point(&pts, 1, 0.5, &table), p(5.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn too_few_control_points_panics() {
        let table = BinomialTable::new(3);
        let pts = [p(0.0, 0.0), p(10.0, 0.0)];
        bezier_point(&pts, 3, 0.5, &table);
    }

    #[test]
    fn sample_curve_has_steps_plus_one_points() {
        let table = BinomialTable::new(2);
        let pts = [p(0.0, 0.0), p(5.0, 10.0), p(10.0, 0.0)];
        let samples = sample_curve(&pts, 2, 4, &table);
        assert_eq!(samples.len(), 5);
        assert_point_eq(samples[0], pts[0]);
        assert_point_eq(samples[2], p(5.0, 5.0));
        assert_point_eq(samples[4], pts[2]);
    }

    #[test]
    fn single_step_is_the_chord() {
        let table = BinomialTable::new(3);
        let pts = curves().swap_remove(3);
        let samples = sample_curve(&pts, 3, 1, &table);
        assert_eq!(samples.len(), 2);
        assert_point_eq(samples[0], pts[0]);
        assert_point_eq(samples[1], pts[3]);
    }

    #[test]
    fn segments_chain_the_sampled_points() {
        let table = BinomialTable::new(3);
        let pts = curves().swap_remove(3);
        let samples = sample_curve(&pts, 3, 7, &table);
        let segments: Vec<(Point2, Point2)> = curve_segments(&pts, 3, 7, &table).collect();
        assert_eq!(segments.len(), 7);
        for (i, (a, b)) in segments.iter().enumerate() {
            assert_eq!(*a, samples[i]);
            assert_eq!(*b, samples[i + 1]);
        }
    }

    #[test]
    fn segments_are_lazy_for_huge_step_counts() {
        let table = BinomialTable::new(1);
        let pts = [p(0.0, 0.0), p(10.0, 0.0)];
        let first: Vec<_> = curve_segments(&pts, 1, usize::MAX, &table).take(2).collect();
        assert_eq!(first.len(), 2);
        assert_point_eq(first[0].0, pts[0]);
        assert_eq!(first[0].1, first[1].0);
    }
}
