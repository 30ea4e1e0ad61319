use crate::Element;

/// 2D line in homogeneous form `a * x + b * y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> Line<T>
where
    T: Element,
{
    /// The line passing `point` with direction `angle_in_degree`, measured
    /// counter-clockwise from the x axis.
    pub fn from_point_angle(point: [T; 2], angle_in_degree: T) -> Self {
        let [x, y] = point;
        let (dy, dx) = angle_in_degree.to_radians().sin_cos();
        Self {
            a: -dy,
            b: dx,
            c: x * dy - y * dx,
        }
    }

    /// The intersection point, or `None` if the lines are parallel or the
    /// result is not finite.
    pub fn intersection(&self, other: &Self) -> Option<[T; 2]> {
        let x = self.b * other.c - self.c * other.b;
        let y = self.c * other.a - self.a * other.c;
        let w = self.a * other.b - self.b * other.a;

        if !(w.abs() > T::epsilon()) {
            return None;
        }
        let point = [x / w, y / w];
        point.iter().all(|v| v.is_finite()).then(|| point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn line_intersection_axis_aligned() {
        let vertical = Line::from_point_angle([3.0, 100.0], 90.0);
        let horizontal = Line::from_point_angle([-7.0, 4.0], 0.0);
        let [x, y] = vertical.intersection(&horizontal).unwrap();
        assert_abs_diff_eq!(x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn line_intersection_diagonal() {
        let l1 = Line::from_point_angle([0.0, 0.0], 45.0);
        let l2 = Line::from_point_angle([2.0, 0.0], 135.0);
        let [x, y] = l1.intersection(&l2).unwrap();
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn line_parallel_has_no_intersection() {
        let l1 = Line::from_point_angle([0.0, 0.0], 30.0);
        let l2 = Line::from_point_angle([0.0, 1.0], 30.0);
        assert_eq!(l1.intersection(&l2), None);

        let l3 = Line::from_point_angle([0.0, 0.0], f64::NAN);
        assert_eq!(l1.intersection(&l3), None);
    }
}
