use super::{Rect, TLWH};
use crate::common::*;

/// Bounding box in TLBR format, `[x1, y1, x2, y2]`.
///
/// The top-left corner is included and the bottom-right corner is not, e.g.
/// `[5, 5, 10, 10]` covers pixels 5 to 9 on both axes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub(crate) x1: T,
    pub(crate) y1: T,
    pub(crate) x2: T,
    pub(crate) y2: T,
}

impl<T> Rect for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn x1(&self) -> Self::Type {
        self.x1
    }

    fn y1(&self) -> Self::Type {
        self.y1
    }

    fn x2(&self) -> Self::Type {
        self.x2
    }

    fn y2(&self) -> Self::Type {
        self.y2
    }

    fn cx(&self) -> Self::Type {
        let two = T::one() + T::one();
        (self.x1 + self.x2) / two
    }

    fn cy(&self) -> Self::Type {
        let two = T::one() + T::one();
        (self.y1 + self.y2) / two
    }

    fn w(&self) -> Self::Type {
        self.x2 - self.x1
    }

    fn h(&self) -> Self::Type {
        self.y2 - self.y1
    }

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self> {
        let [x1, y1, x2, y2] = tlbr;
        if !(x1 <= x2 && y1 <= y2) {
            return Err(Error::InvalidBoxFormat {
                format: "TLBR",
                row: 0,
            });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    fn try_from_tlwh(tlwh: [Self::Type; 4]) -> Result<Self> {
        let tlwh = TLWH::try_from_tlwh(tlwh)?;
        Ok(Self::from(&tlwh))
    }
}

impl<T> From<TLWH<T>> for TLBR<T>
where
    T: Copy + Num,
{
    fn from(from: TLWH<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&TLWH<T>> for TLBR<T>
where
    T: Copy + Num,
{
    fn from(from: &TLWH<T>) -> Self {
        let TLWH { x, y, w, h } = *from;
        Self {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        }
    }
}

/// Unchecked bounding box in TLBR format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TLBR_<T> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T> TryFrom<TLBR_<T>> for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Error = Error;

    fn try_from(from: TLBR_<T>) -> Result<Self, Self::Error> {
        Self::try_from(&from)
    }
}

impl<T> TryFrom<&TLBR_<T>> for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Error = Error;

    fn try_from(from: &TLBR_<T>) -> Result<Self, Self::Error> {
        let TLBR_ { x1, y1, x2, y2 } = *from;
        Self::try_from_tlbr([x1, y1, x2, y2])
    }
}
