use crate::{
    check_tlbr, check_tlwh,
    common::*,
    format::{tlbr_to_tlwh, tlwh_to_tlbr},
    safe_bboxes, Element, ImageSize, IntoBoxes,
};

/// Clip TLBR boxes into the image. The clipped coordinates stay half-open, so
/// `x2` may be equal to the image width.
///
/// A box lying completely outside the image collapses to a zero-area box on the
/// nearest border.
pub fn clip_bboxes_tlbr<T, B>(boxes: B, size: &ImageSize<T>) -> Result<Array2<T>>
where
    T: Element,
    B: IntoBoxes<T>,
{
    let boxes = safe_bboxes(boxes)?;
    check_tlbr(boxes.view())?;
    Ok(clip_tlbr(boxes.view(), size))
}

/// Clip TLWH boxes into the image by the way of TLBR clipping.
pub fn clip_bboxes_tlwh<T, B>(boxes: B, size: &ImageSize<T>) -> Result<Array2<T>>
where
    T: Element,
    B: IntoBoxes<T>,
{
    let boxes = safe_bboxes(boxes)?;
    check_tlwh(boxes.view())?;
    let tlbr = tlwh_to_tlbr(boxes.view());
    let clipped = clip_tlbr(tlbr.view(), size);
    Ok(tlbr_to_tlwh(clipped.view()))
}

fn clip_tlbr<T>(boxes: ArrayView2<'_, T>, size: &ImageSize<T>) -> Array2<T>
where
    T: Element,
{
    let zero = T::zero();
    let clamp = |value: T, max: T| value.min(max).max(zero);

    let mut output = boxes.to_owned();
    output
        .outer_iter_mut()
        .enumerate()
        .for_each(|(index, mut row)| {
            row[0] = clamp(row[0], size.w());
            row[1] = clamp(row[1], size.h());
            row[2] = clamp(row[2], size.w());
            row[3] = clamp(row[3], size.h());

            if row[0] == row[2] || row[1] == row[3] {
                trace!("box at row {} is clipped to zero area", index);
            }
        });
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn clip_tlbr_example() {
        let size = ImageSize::new(40.0, 40.0).unwrap();
        let clipped = clip_bboxes_tlbr([-3.0, -2.0, 50.0, 60.0], &size).unwrap();
        assert_eq!(clipped, array![[0.0, 0.0, 40.0, 40.0]]);
    }

    #[test]
    fn clip_outside_box_collapses_to_border() {
        let size = ImageSize::new(40.0, 30.0).unwrap();
        let clipped = clip_bboxes_tlbr([50.0, -20.0, 60.0, -10.0], &size).unwrap();
        assert_eq!(clipped, array![[40.0, 0.0, 40.0, 0.0]]);
    }

    #[test]
    fn clip_tlwh_matches_tlbr() {
        let size = ImageSize::new(20.0, 10.0).unwrap();
        let clipped = clip_bboxes_tlwh(vec![[-5.0, 2.0, 10.0, 20.0], [3.0, 3.0, 2.0, 2.0]], &size)
            .unwrap();
        assert_eq!(clipped, array![[0.0, 2.0, 5.0, 8.0], [3.0, 3.0, 2.0, 2.0]]);
    }

    #[test]
    fn clip_validates_input() {
        let size = ImageSize::new(20.0, 10.0).unwrap();
        assert!(matches!(
            clip_bboxes_tlbr([5.0, 0.0, 1.0, 1.0], &size),
            Err(Error::InvalidBoxFormat { .. })
        ));
        assert!(matches!(
            clip_bboxes_tlwh([5.0, 0.0, -1.0, 1.0], &size),
            Err(Error::InvalidBoxFormat { .. })
        ));
    }
}
