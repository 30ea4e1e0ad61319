use crate::{
    check_tlbr, common::*, safe_bboxes, DiagnosticSink, Element, IntoBoxes, NoDiagnostics, Rect,
    Transform, TLBR,
};

const POINTS_SHAPE: &str = "(2, N) or (3, N)";

/// Points are stored column-wise: row 0 holds x, row 1 holds y and an optional
/// row 2 holds the occlusion flag.
fn check_points<T>(points: ArrayView2<'_, T>) -> Result<()> {
    match points.nrows() {
        2 | 3 => Ok(()),
        _ => Err(Error::shape(POINTS_SHAPE, points.shape())),
    }
}

/// The tightest TLBR box enclosing a `2×N` or `3×N` point set with `N >= 2`.
pub fn pts_to_bbox<T>(points: ArrayView2<'_, T>) -> Result<TLBR<T>>
where
    T: Element,
{
    pts_to_bbox_with(points, &NoDiagnostics)
}

pub fn pts_to_bbox_with<T, D>(points: ArrayView2<'_, T>, sink: &D) -> Result<TLBR<T>>
where
    T: Element,
    D: DiagnosticSink<T>,
{
    check_points(points)?;
    let npts = points.ncols();
    if npts < 2 {
        return Err(Error::InsufficientPoints { found: npts });
    }

    let (x1, x2) = min_max(points.row(0));
    let (y1, y2) = min_max(points.row(1));
    let bbox = TLBR { x1, y1, x2, y2 };
    sink.points_bounded(points, &bbox);
    Ok(bbox)
}

fn min_max<T>(values: ArrayView1<'_, T>) -> (T, T)
where
    T: Element,
{
    values.fold((T::infinity(), T::neg_infinity()), |(min, max), &v| {
        (min.min(v), max.max(v))
    })
}

/// Centers of TLBR boxes, laid out as `2×N` with x in the first row and y in
/// the second row.
pub fn bbox_to_center<T, B>(boxes: B) -> Result<Array2<T>>
where
    T: Element,
    B: IntoBoxes<T>,
{
    bbox_to_center_with(boxes, &NoDiagnostics)
}

pub fn bbox_to_center_with<T, B, D>(boxes: B, sink: &D) -> Result<Array2<T>>
where
    T: Element,
    B: IntoBoxes<T>,
    D: DiagnosticSink<T>,
{
    let boxes = safe_bboxes(boxes)?;
    check_tlbr(boxes.view())?;

    let two = T::one() + T::one();
    let mut centers = Array2::zeros((2, boxes.nrows()));
    for (index, row) in boxes.outer_iter().enumerate() {
        centers[[0, index]] = (row[0] + row[2]) / two;
        centers[[1, index]] = (row[1] + row[3]) / two;
    }

    sink.centers_computed(boxes.view(), centers.view());
    Ok(centers)
}

/// Move points from image coordinates into the frame whose origin is the
/// top-left corner of `rect`, e.g. to follow a crop.
pub fn pts_to_bbox_frame<T, R>(points: ArrayView2<'_, T>, rect: &R) -> Result<Array2<T>>
where
    T: Element,
    R: Rect<Type = T>,
{
    let transform = Transform::translation(-rect.x1(), -rect.y1());
    translate_points(points, &transform)
}

/// Inverse of [pts_to_bbox_frame].
pub fn pts_from_bbox_frame<T, R>(points: ArrayView2<'_, T>, rect: &R) -> Result<Array2<T>>
where
    T: Element,
    R: Rect<Type = T>,
{
    let transform = Transform::translation(rect.x1(), rect.y1());
    translate_points(points, &transform)
}

fn translate_points<T>(points: ArrayView2<'_, T>, transform: &Transform<T>) -> Result<Array2<T>>
where
    T: Element,
{
    check_points(points)?;

    // the occlusion row is copied as is
    let mut output = points.to_owned();
    for mut column in output.columns_mut() {
        let [x, y] = transform.apply([column[0], column[1]]);
        column[0] = x;
        column[1] = y;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RectNum, TLWH};
    use ndarray::array;

    #[test]
    fn pts_to_bbox_example() {
        let points = array![[2.0, 5.0, 4.0], [3.0, 1.0, 9.0]];
        let bbox = pts_to_bbox(points.view()).unwrap();
        assert_eq!(bbox.tlbr(), [2.0, 1.0, 5.0, 9.0]);
    }

    #[test]
    fn pts_to_bbox_ignores_occlusion_row() {
        let points = array![[2.0, 5.0], [3.0, 1.0], [100.0, -100.0]];
        let bbox = pts_to_bbox(points.view()).unwrap();
        assert_eq!(bbox.tlbr(), [2.0, 1.0, 5.0, 3.0]);
    }

    #[test]
    fn pts_to_bbox_requires_two_points() {
        let points = array![[2.0], [3.0]];
        assert!(matches!(
            pts_to_bbox(points.view()),
            Err(Error::InsufficientPoints { found: 1 })
        ));
        let points = array![[2.0, 1.0]];
        assert!(matches!(
            pts_to_bbox(points.view()),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn bbox_to_center_is_transposed() {
        let centers = bbox_to_center(vec![[0.0, 0.0, 4.0, 2.0], [1.0, 1.0, 2.0, 5.0]]).unwrap();
        assert_eq!(centers, array![[2.0, 1.5], [1.0, 3.0]]);
    }

    #[test]
    fn bbox_frame_round_trip() {
        let points = array![[12.0, 15.0, 7.0], [3.0, 8.0, 10.0], [1.0, 0.0, 1.0]];
        let rect = TLWH::try_from_tlwh([5.0, 2.0, 10.0, 10.0]).unwrap();

        let local = pts_to_bbox_frame(points.view(), &rect).unwrap();
        assert_eq!(local, array![[7.0, 10.0, 2.0], [1.0, 6.0, 8.0], [1.0, 0.0, 1.0]]);

        let back = pts_from_bbox_frame(local.view(), &rect.to_tlbr()).unwrap();
        assert_eq!(back, points);
    }
}
