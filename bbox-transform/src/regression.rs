//! Anchor-relative box regression targets as used by region proposal networks.
//!
//! Boxes here follow the inclusive pixel convention: the width of
//! `[x1, y1, x2, y2]` is `x2 - x1 + 1`.

use crate::{common::*, safe_bboxes, Element, IntoBoxes};

const DELTAS_SHAPE: &str = "(N, 4 * num_classes)";

/// Inclusive width, height and center of a box row.
fn whc<T>(row: ArrayView1<'_, T>) -> [T; 4]
where
    T: Element,
{
    let one = T::one();
    let half = one / (one + one);
    let w = row[2] - row[0] + one;
    let h = row[3] - row[1] + one;
    [w, h, row[0] + half * w, row[1] + half * h]
}

/// Encode `targets` relative to `anchors` as `[dx, dy, dw, dh]` rows.
///
/// `dx` and `dy` are center offsets normalized by the anchor size, `dw` and
/// `dh` are log ratios of the sizes.
pub fn bbox_transform<T, A, B>(anchors: A, targets: B) -> Result<Array2<T>>
where
    T: Element,
    A: IntoBoxes<T>,
    B: IntoBoxes<T>,
{
    let anchors = safe_bboxes(anchors)?;
    let targets = safe_bboxes(targets)?;
    if anchors.nrows() != targets.nrows() {
        return Err(Error::shape("(num_anchors, 4)", targets.shape()));
    }

    let mut deltas = Array2::zeros((anchors.nrows(), 4));
    for ((anchor, target), mut delta) in anchors
        .outer_iter()
        .zip(targets.outer_iter())
        .zip(deltas.outer_iter_mut())
    {
        let [ex_w, ex_h, ex_cx, ex_cy] = whc(anchor);
        let [gt_w, gt_h, gt_cx, gt_cy] = whc(target);

        delta[0] = (gt_cx - ex_cx) / ex_w;
        delta[1] = (gt_cy - ex_cy) / ex_h;
        delta[2] = (gt_w / ex_w).ln();
        delta[3] = (gt_h / ex_h).ln();
    }
    Ok(deltas)
}

/// Decode per-class deltas into boxes.
///
/// `deltas` holds `[dx, dy, dw, dh]` groups for every class, so the output has
/// the same shape as `deltas`. No anchors yield an empty matrix.
pub fn bbox_transform_inv<T, A>(anchors: A, deltas: ArrayView2<'_, T>) -> Result<Array2<T>>
where
    T: Element,
    A: IntoBoxes<T>,
{
    let ncols = deltas.ncols();
    let anchors = safe_bboxes(anchors)?;
    if anchors.nrows() == 0 {
        return Ok(Array2::zeros((0, ncols)));
    }
    if ncols % 4 != 0 {
        return Err(Error::shape(DELTAS_SHAPE, deltas.shape()));
    }
    if anchors.nrows() != deltas.nrows() {
        return Err(Error::shape(DELTAS_SHAPE, deltas.shape()));
    }

    let one = T::one();
    let half = one / (one + one);

    let mut boxes = Array2::zeros(deltas.raw_dim());
    for ((anchor, delta), mut output) in anchors
        .outer_iter()
        .zip(deltas.outer_iter())
        .zip(boxes.outer_iter_mut())
    {
        let [w, h, cx, cy] = whc(anchor);

        for class in 0..(ncols / 4) {
            let d = delta.slice(s![class * 4..(class + 1) * 4]);
            let pred_cx = d[0] * w + cx;
            let pred_cy = d[1] * h + cy;
            let pred_w = d[2].exp() * w;
            let pred_h = d[3].exp() * h;

            let mut out = output.slice_mut(s![class * 4..(class + 1) * 4]);
            out[0] = pred_cx - half * pred_w;
            out[1] = pred_cy - half * pred_h;
            out[2] = pred_cx + half * pred_w - one;
            out[3] = pred_cy + half * pred_h - one;
        }
    }
    Ok(boxes)
}
