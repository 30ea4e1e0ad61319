use crate::{check_tlbr, check_tlwh, common::*, safe_bboxes, Element, IntoBoxes};

/// Convert TLBR boxes to TLWH boxes.
pub fn bbox_tlbr_to_tlwh<T, B>(boxes: B) -> Result<Array2<T>>
where
    T: Element,
    B: IntoBoxes<T>,
{
    let boxes = safe_bboxes(boxes)?;
    check_tlbr(boxes.view())?;
    Ok(tlbr_to_tlwh(boxes.view()))
}

/// Convert TLWH boxes to TLBR boxes.
pub fn bbox_tlwh_to_tlbr<T, B>(boxes: B) -> Result<Array2<T>>
where
    T: Element,
    B: IntoBoxes<T>,
{
    let boxes = safe_bboxes(boxes)?;
    check_tlwh(boxes.view())?;
    Ok(tlwh_to_tlbr(boxes.view()))
}

pub(crate) fn tlbr_to_tlwh<T>(boxes: ArrayView2<'_, T>) -> Array2<T>
where
    T: Element,
{
    let mut output = boxes.to_owned();
    output
        .outer_iter_mut()
        .zip(boxes.outer_iter())
        .for_each(|(mut out, row)| {
            out[2] = row[2] - row[0];
            out[3] = row[3] - row[1];
        });
    output
}

pub(crate) fn tlwh_to_tlbr<T>(boxes: ArrayView2<'_, T>) -> Array2<T>
where
    T: Element,
{
    let mut output = boxes.to_owned();
    output
        .outer_iter_mut()
        .zip(boxes.outer_iter())
        .for_each(|(mut out, row)| {
            out[2] = row[2] + row[0];
            out[3] = row[3] + row[1];
        });
    output
}
