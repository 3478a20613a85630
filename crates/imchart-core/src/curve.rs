//! Natural cubic spline through a sequence of points
//!
//! The spline passes through every point with continuous first and second
//! derivatives and zero curvature at both ends. Each segment is emitted as a
//! cubic Bezier (`C`) command.

use crate::export::fmt_coord;

/// Bezier control points for one coordinate of a natural cubic spline
///
/// Returns `(first, second)` control values for each of the `len - 1` segments.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n.saturating_sub(1) {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    // Tridiagonal solve: forward elimination, then back substitution
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }

    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }
    (a, b)
}

/// SVG path data for a natural cubic spline through `points`
///
/// One point yields a lone move, two points a straight segment, and no points
/// an empty string.
pub fn natural_path(points: &[(f64, f64)]) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };
    let mut d = format!("M{},{}", fmt_coord(x0), fmt_coord(y0));

    match points.len() {
        1 => {}
        2 => {
            let (x1, y1) = points[1];
            d.push_str(&format!("L{},{}", fmt_coord(x1), fmt_coord(y1)));
        }
        _ => {
            let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
            let (ax, bx) = control_points(&xs);
            let (ay, by) = control_points(&ys);
            for (i, &(x, y)) in points.iter().enumerate().skip(1) {
                d.push_str(&format!(
                    "C{},{},{},{},{},{}",
                    fmt_coord(ax[i - 1]),
                    fmt_coord(ay[i - 1]),
                    fmt_coord(bx[i - 1]),
                    fmt_coord(by[i - 1]),
                    fmt_coord(x),
                    fmt_coord(y)
                ));
            }
        }
    }
    d
}
