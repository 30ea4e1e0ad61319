use super::{Rect, TLBR};
use crate::common::*;

/// Bounding box in TLWH format, `[x, y, w, h]`.
///
/// `w` and `h` count the pixels included along each axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TLWH<T> {
    pub(crate) x: T,
    pub(crate) y: T,
    pub(crate) w: T,
    pub(crate) h: T,
}

impl<T> Rect for TLWH<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn x1(&self) -> Self::Type {
        self.x
    }

    fn y1(&self) -> Self::Type {
        self.y
    }

    fn x2(&self) -> Self::Type {
        self.x + self.w
    }

    fn y2(&self) -> Self::Type {
        self.y + self.h
    }

    fn cx(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.x + self.w / two
    }

    fn cy(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.y + self.h / two
    }

    fn w(&self) -> Self::Type {
        self.w
    }

    fn h(&self) -> Self::Type {
        self.h
    }

    fn try_from_tlbr(tlbr: [T; 4]) -> Result<Self> {
        let tlbr = TLBR::try_from_tlbr(tlbr)?;
        Ok(Self::from(&tlbr))
    }

    fn try_from_tlwh(tlwh: [T; 4]) -> Result<Self> {
        let [x, y, w, h] = tlwh;
        let zero = T::zero();
        if !(w >= zero && h >= zero) {
            return Err(Error::InvalidBoxFormat {
                format: "TLWH",
                row: 0,
            });
        }
        Ok(Self { x, y, w, h })
    }
}

impl<T> From<TLBR<T>> for TLWH<T>
where
    T: Copy + Num,
{
    fn from(from: TLBR<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&TLBR<T>> for TLWH<T>
where
    T: Copy + Num,
{
    fn from(from: &TLBR<T>) -> Self {
        let TLBR { x1, y1, x2, y2 } = *from;
        Self {
            x: x1,
            y: y1,
            w: x2 - x1,
            h: y2 - y1,
        }
    }
}

/// Unchecked bounding box in TLWH format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TLWH_<T> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T> TryFrom<TLWH_<T>> for TLWH<T>
where
    T: Copy + Num + PartialOrd,
{
    type Error = Error;

    fn try_from(from: TLWH_<T>) -> Result<Self, Self::Error> {
        Self::try_from(&from)
    }
}

impl<T> TryFrom<&TLWH_<T>> for TLWH<T>
where
    T: Copy + Num + PartialOrd,
{
    type Error = Error;

    fn try_from(from: &TLWH_<T>) -> Result<Self, Self::Error> {
        let TLWH_ { x, y, w, h } = *from;
        Self::try_from_tlwh([x, y, w, h])
    }
}
