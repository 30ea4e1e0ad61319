//! The boundary adapter that turns box-like input into a canonical N×4 matrix.

use crate::{common::*, Element, RectNum, TLBR, TLWH};

const BOX_SHAPE: &str = "(N, 4)";

/// Box-like input that can be normalized into an N×4 matrix.
///
/// A single box becomes a 1×4 matrix.
pub trait IntoBoxes<T> {
    fn into_boxes(self) -> Result<Array2<T>>;
}

/// Normalize any supported box input into the canonical N×4 matrix.
pub fn safe_bboxes<T, B>(input: B) -> Result<Array2<T>>
where
    B: IntoBoxes<T>,
{
    input.into_boxes()
}

fn from_rows<T, I, R>(rows: I) -> Result<Array2<T>>
where
    T: Copy,
    I: ExactSizeIterator<Item = R>,
    R: AsRef<[T]>,
{
    let nrows = rows.len();
    let mut data = Vec::with_capacity(nrows * 4);
    for row in rows {
        let row = row.as_ref();
        if row.len() != 4 {
            return Err(Error::shape(BOX_SHAPE, &[nrows, row.len()]));
        }
        data.extend_from_slice(row);
    }
    Array2::from_shape_vec((nrows, 4), data).map_err(|_| Error::shape(BOX_SHAPE, &[nrows]))
}

impl<T> IntoBoxes<T> for [T; 4]
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        from_rows([self].iter())
    }
}

impl<T> IntoBoxes<T> for &[T]
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        from_rows([self].iter())
    }
}

impl<T> IntoBoxes<T> for &[[T; 4]]
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        from_rows(self.iter())
    }
}

impl<T> IntoBoxes<T> for Vec<[T; 4]>
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        self.as_slice().into_boxes()
    }
}

impl<T> IntoBoxes<T> for &[Vec<T>]
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        from_rows(self.iter())
    }
}

impl<T> IntoBoxes<T> for Vec<Vec<T>>
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        self.as_slice().into_boxes()
    }
}

impl<T> IntoBoxes<T> for Array1<T>
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        self.view().into_boxes()
    }
}

impl<T> IntoBoxes<T> for ArrayView1<'_, T>
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        let len = self.len();
        if len != 4 {
            return Err(Error::shape(BOX_SHAPE, &[len]));
        }
        Ok(self.to_owned().insert_axis(Axis(0)))
    }
}

impl<T> IntoBoxes<T> for ArrayView2<'_, T>
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        // no rows means no boxes, whatever the column count
        if self.nrows() == 0 {
            return Array2::from_shape_vec((0, 4), vec![])
                .map_err(|_| Error::shape(BOX_SHAPE, self.shape()));
        }
        if self.ncols() != 4 {
            return Err(Error::shape(BOX_SHAPE, self.shape()));
        }
        Ok(self.to_owned())
    }
}

impl<T> IntoBoxes<T> for &Array2<T>
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        self.view().into_boxes()
    }
}

impl<T> IntoBoxes<T> for Array2<T>
where
    T: Copy,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        if self.nrows() == 0 || self.ncols() != 4 {
            return self.view().into_boxes();
        }
        Ok(self)
    }
}

impl<T> IntoBoxes<T> for &TLBR<T>
where
    T: Element,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        self.tlbr().into_boxes()
    }
}

impl<T> IntoBoxes<T> for &TLWH<T>
where
    T: Element,
{
    fn into_boxes(self) -> Result<Array2<T>> {
        self.tlwh().into_boxes()
    }
}

/// Check that every row satisfies `x1 <= x2` and `y1 <= y2`.
pub fn check_tlbr<T>(boxes: ArrayView2<'_, T>) -> Result<()>
where
    T: Element,
{
    check_rows(boxes, "TLBR", |row| row[0] <= row[2] && row[1] <= row[3])
}

/// Check that every row has non-negative width and height.
pub fn check_tlwh<T>(boxes: ArrayView2<'_, T>) -> Result<()>
where
    T: Element,
{
    let zero = T::zero();
    check_rows(boxes, "TLWH", |row| row[2] >= zero && row[3] >= zero)
}

fn check_rows<T, F>(boxes: ArrayView2<'_, T>, format: &'static str, valid: F) -> Result<()>
where
    T: Element,
    F: Fn(ArrayView1<'_, T>) -> bool,
{
    if boxes.ncols() != 4 {
        return Err(Error::shape(BOX_SHAPE, boxes.shape()));
    }
    match boxes.outer_iter().position(|row| !valid(row)) {
        Some(row) => Err(Error::InvalidBoxFormat { format, row }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn coerce_single_box() {
        let boxes = safe_bboxes([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(boxes, array![[1.0, 2.0, 3.0, 4.0]]);

        let slice: &[f64] = &[1.0, 2.0, 3.0, 4.0];
        assert_eq!(safe_bboxes(slice).unwrap(), boxes);
        assert_eq!(safe_bboxes(array![1.0, 2.0, 3.0, 4.0]).unwrap(), boxes);
    }

    #[test]
    fn coerce_list_of_boxes() {
        let expect = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
        let nested = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]];
        assert_eq!(safe_bboxes(nested).unwrap(), expect);

        let arrays = vec![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
        assert_eq!(safe_bboxes(arrays).unwrap(), expect);
        assert_eq!(safe_bboxes(&expect).unwrap(), expect);
    }

    #[test]
    fn coerce_empty_matrix() {
        let boxes = safe_bboxes(Array2::<f64>::zeros((0, 0))).unwrap();
        assert_eq!(boxes.shape(), &[0, 4]);
        let boxes = safe_bboxes(Array2::<f64>::zeros((0, 7)).view()).unwrap();
        assert_eq!(boxes.shape(), &[0, 4]);
    }

    #[test]
    fn coerce_rejects_bad_shape() {
        let nested = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0]];
        assert!(matches!(
            safe_bboxes(nested),
            Err(Error::InvalidShape { .. })
        ));
        assert!(matches!(
            safe_bboxes(Array2::<f32>::zeros((2, 5))),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn check_reports_offending_row() {
        let boxes = array![[0.0, 0.0, 1.0, 1.0], [3.0, 0.0, 1.0, 1.0]];
        assert!(matches!(
            check_tlbr(boxes.view()),
            Err(Error::InvalidBoxFormat { row: 1, .. })
        ));
        assert!(check_tlwh(boxes.view()).is_ok());
    }
}
