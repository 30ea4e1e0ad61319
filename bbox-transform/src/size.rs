use crate::{common::*, Element, TLBR};

/// Image dimensions in pixels.
///
/// Both values are integral and non-negative. They are stored in the box
/// scalar type so that they can be mixed with coordinates directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize<T> {
    w: T,
    h: T,
}

impl<T> ImageSize<T>
where
    T: Element,
{
    pub fn new(w: T, h: T) -> Result<Self> {
        let valid = |v: T| v.is_finite() && v >= T::zero() && v.fract() == T::zero();
        if !(valid(w) && valid(h)) {
            return Err(Error::InvalidImageSize {
                width: w.to_f64().unwrap_or(f64::NAN),
                height: h.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { w, h })
    }

    /// Build from an image array shape, which is laid out as `[height, width]`.
    pub fn from_shape(shape: [T; 2]) -> Result<Self> {
        let [h, w] = shape;
        Self::new(w, h)
    }

    pub fn from_pixels(w: usize, h: usize) -> Self {
        // usize always fits into a float
        Self {
            w: T::from(w).unwrap_or_else(T::max_value),
            h: T::from(h).unwrap_or_else(T::max_value),
        }
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }

    pub fn area(&self) -> T {
        self.w * self.h
    }

    /// The whole image as a box.
    pub fn to_tlbr(&self) -> TLBR<T> {
        TLBR {
            x1: T::zero(),
            y1: T::zero(),
            x2: self.w,
            y2: self.h,
        }
    }
}
