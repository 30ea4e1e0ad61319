use crate::{common::*, Element, ImageSize};

const CENTER_BOX_SHAPE: &str = "(N, 2) or (N, 4)";

/// Description of a crop around a center point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CenterBox<T> {
    /// Crop of the given size around the image center.
    Size { w: T, h: T },
    /// Crop of the given size around `(cx, cy)`.
    Centered { cx: T, cy: T, w: T, h: T },
}

impl<T> CenterBox<T>
where
    T: Element,
{
    /// Parse `[w, h]` or `[cx, cy, w, h]`.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        match *values {
            [w, h] => Ok(Self::Size { w, h }),
            [cx, cy, w, h] => Ok(Self::Centered { cx, cy, w, h }),
            _ => Err(Error::shape(CENTER_BOX_SHAPE, &[values.len()])),
        }
    }

    /// Compute the crop box in TLWH format with integer coordinates.
    pub fn to_crop_tlwh(&self, size: Option<&ImageSize<T>>) -> Result<[i64; 4]> {
        let two = T::one() + T::one();
        let (cx, cy, w, h) = match *self {
            Self::Centered { cx, cy, w, h } => (cx, cy, w, h),
            Self::Size { w, h } => {
                let size = size.ok_or(Error::MissingImageDimensions)?;
                ((size.w() / two).ceil(), (size.h() / two).ceil(), w, h)
            }
        };

        let x = cx - (w / two).ceil();
        let y = cy - (h / two).ceil();

        let to_pixel = |value: T| {
            value.round().to_i64().ok_or(Error::InvalidBoxFormat {
                format: "center box",
                row: 0,
            })
        };
        Ok([to_pixel(x)?, to_pixel(y)?, to_pixel(w)?, to_pixel(h)?])
    }
}

/// Build TLWH crop boxes from rows of `[w, h]` (around the image center) or
/// `[cx, cy, w, h]`.
///
/// The image size is required only for the 2-column form.
pub fn get_center_crop_bbox<T>(
    center_boxes: ArrayView2<'_, T>,
    size: Option<&ImageSize<T>>,
) -> Result<Array2<i64>>
where
    T: Element,
{
    let nrows = center_boxes.nrows();
    if !matches!(center_boxes.ncols(), 2 | 4) {
        return Err(Error::shape(CENTER_BOX_SHAPE, center_boxes.shape()));
    }

    let mut output = Array2::zeros((nrows, 4));
    for (index, (row, mut out)) in center_boxes
        .outer_iter()
        .zip(output.outer_iter_mut())
        .enumerate()
    {
        let values = row.to_vec();
        let crop = CenterBox::from_slice(&values)?
            .to_crop_tlwh(size)
            .map_err(|err| match err {
                Error::InvalidBoxFormat { format, .. } => Error::InvalidBoxFormat { format, row: index },
                err => err,
            })?;
        out.assign(&ArrayView1::from(&crop[..]));
    }
    Ok(output)
}
