//! Boxes on rotated images.
//!
//! Angles are in degrees. A box detected on an image rotated clockwise by
//! `angle` is mapped back to the unrotated image. On the unrotated image the
//! box becomes a rotated rectangle, either kept as its four corners (tight) or
//! replaced by its axis-aligned envelope (loose).

use crate::{
    cartesian_to_image, common::*, image_to_cartesian, DiagnosticSink, Element, ImageSize, Line,
    NoDiagnostics, Rect, RectNum, Transform, TLBR,
};
use rayon::prelude::*;

const DETECTIONS_SHAPE: &str = "(N, 4 * num_classes)";

fn degenerate<T>(angle: T) -> Error
where
    T: Element,
{
    Error::DegenerateRotation {
        angle: angle.to_f64().unwrap_or(f64::NAN),
    }
}

/// Undo the rotation of the two corners of `bbox` (`[x1, y1, x2, y2]`) around
/// the image center.
///
/// The corners are normalized into `[-1, 1]` on both axes, multiplied with the
/// affine `[[cos, sin, 0], [-sin, cos, 0]]` and mapped back to pixels. The
/// output corners may be in any order.
pub fn bbox_rotation_inv<T>(bbox: [T; 4], angle_in_degree: T, size: &ImageSize<T>) -> Result<[T; 4]>
where
    T: Element,
{
    let zero = T::zero();
    let one = T::one();
    if size.w() == zero || size.h() == zero {
        return Err(Error::InvalidImageSize {
            width: size.w().to_f64().unwrap_or(f64::NAN),
            height: size.h().to_f64().unwrap_or(f64::NAN),
        });
    }
    if !angle_in_degree.is_finite() {
        return Err(degenerate(angle_in_degree));
    }

    let unit = TLBR {
        x1: -one,
        y1: -one,
        x2: one,
        y2: one,
    };
    let normalize = Transform::from_rects(&size.to_tlbr(), &unit);
    let denormalize = normalize.inverse();

    let (sin, cos) = angle_in_degree.to_radians().sin_cos();
    let recover = |point: [T; 2]| {
        let [x, y] = normalize.apply(point);
        denormalize.apply([cos * x + sin * y, -sin * x + cos * y])
    };

    let [x1, y1] = recover([bbox[0], bbox[1]]);
    let [x2, y2] = recover([bbox[2], bbox[3]]);
    Ok([x1, y1, x2, y2])
}

/// Complete the rotated rectangle given its top-left and bottom-right corners.
///
/// Returns the corners clockwise from top-left: `[tl, tr, br, bl]`.
fn rotated_corners<T>(corners: [T; 4], angle_in_degree: T) -> Result<[[T; 2]; 4]>
where
    T: Element,
{
    let right_angle = T::from(90.0).ok_or_else(|| degenerate(angle_in_degree))?;
    let normal = angle_in_degree + right_angle;

    let tl = [corners[0], corners[1]];
    let br = [corners[2], corners[3]];
    let tl_cart = image_to_cartesian(tl);
    let br_cart = image_to_cartesian(br);

    let bl = Line::from_point_angle(tl_cart, normal)
        .intersection(&Line::from_point_angle(br_cart, angle_in_degree))
        .ok_or_else(|| degenerate(angle_in_degree))?;
    let tr = Line::from_point_angle(tl_cart, angle_in_degree)
        .intersection(&Line::from_point_angle(br_cart, normal))
        .ok_or_else(|| degenerate(angle_in_degree))?;

    Ok([tl, cartesian_to_image(tr), br, cartesian_to_image(bl)])
}

fn envelope<T>(corners: &[[T; 2]; 4]) -> TLBR<T>
where
    T: Element,
{
    let init = TLBR {
        x1: T::infinity(),
        y1: T::infinity(),
        x2: T::neg_infinity(),
        y2: T::neg_infinity(),
    };
    corners.iter().fold(init, |bbox, &[x, y]| TLBR {
        x1: bbox.x1.min(x),
        y1: bbox.y1.min(y),
        x2: bbox.x2.max(x),
        y2: bbox.y2.max(y),
    })
}

/// Turn the de-rotated top-left and bottom-right corners into the axis-aligned
/// envelope of the rotated rectangle.
pub fn bbox_rotatedtight_to_rotatedloose<T>(corners: [T; 4], angle_in_degree: T) -> Result<TLBR<T>>
where
    T: Element,
{
    let corners = rotated_corners(corners, angle_in_degree)?;
    Ok(envelope(&corners))
}

/// Map a box on the rotated image to a loose box on the original image.
pub fn bbox_general_to_rotated_loose<T>(
    bbox: &TLBR<T>,
    angle_in_degree: T,
    size: &ImageSize<T>,
) -> Result<TLBR<T>>
where
    T: Element,
{
    let corners = bbox_rotation_inv(bbox.tlbr(), angle_in_degree, size)?;
    bbox_rotatedtight_to_rotatedloose(corners, angle_in_degree)
}

/// Map a box on the rotated image to the four corners of the rotated rectangle
/// on the original image, clockwise from top-left, truncated to pixels.
pub fn apply_rotation_tight<T>(
    bbox: &TLBR<T>,
    angle_in_degree: T,
    size: &ImageSize<T>,
) -> Result<[[i64; 2]; 4]>
where
    T: Element,
{
    apply_rotation_tight_with(bbox, angle_in_degree, size, &NoDiagnostics)
}

pub fn apply_rotation_tight_with<T, D>(
    bbox: &TLBR<T>,
    angle_in_degree: T,
    size: &ImageSize<T>,
    sink: &D,
) -> Result<[[i64; 2]; 4]>
where
    T: Element,
    D: DiagnosticSink<T>,
{
    let corners = bbox_rotation_inv(bbox.tlbr(), angle_in_degree, size)?;
    let corners = rotated_corners(corners, angle_in_degree)?;
    sink.corners_constructed(&corners);

    let mut pixels = [[0i64; 2]; 4];
    for (pixel, corner) in pixels.iter_mut().zip(corners.iter()) {
        for (p, &c) in pixel.iter_mut().zip(corner.iter()) {
            *p = c.trunc().to_i64().ok_or_else(|| degenerate(angle_in_degree))?;
        }
    }
    Ok(pixels)
}

/// Apply [bbox_general_to_rotated_loose] to every box of a detection matrix.
///
/// Each row holds one TLBR box per class, so the matrix has `4 * num_classes`
/// columns. Rows are processed in parallel.
pub fn apply_rotation_loose<T>(
    all_boxes: ArrayView2<'_, T>,
    angle_in_degree: T,
    size: &ImageSize<T>,
) -> Result<Array2<T>>
where
    T: Element,
{
    let (nrows, ncols) = all_boxes.dim();
    if ncols % 4 != 0 {
        return Err(Error::shape(DETECTIONS_SHAPE, all_boxes.shape()));
    }

    let rows: Vec<Vec<T>> = all_boxes.outer_iter().map(|row| row.to_vec()).collect();
    let rotated: Vec<Vec<T>> = rows
        .into_par_iter()
        .enumerate()
        .map(|(index, row)| -> Result<_> {
            let boxes: Vec<[T; 4]> = row
                .chunks(4)
                .map(|chunk| -> Result<[T; 4]> {
                    let bbox = TLBR::try_from_tlbr([chunk[0], chunk[1], chunk[2], chunk[3]])
                        .map_err(|_| Error::InvalidBoxFormat {
                            format: "TLBR",
                            row: index,
                        })?;
                    let loose = bbox_general_to_rotated_loose(&bbox, angle_in_degree, size)?;
                    Ok(loose.tlbr())
                })
                .collect::<Result<_>>()?;
            Ok(boxes.concat())
        })
        .collect::<Result<_>>()?;

    debug!(
        "rotated {} boxes by {:?} degrees",
        nrows * ncols / 4,
        angle_in_degree
    );
    Array2::from_shape_vec((nrows, ncols), rotated.concat())
        .map_err(|_| Error::shape(DETECTIONS_SHAPE, all_boxes.shape()))
}
