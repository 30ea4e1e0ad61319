use super::{TLBR, TLWH};
use crate::common::*;

/// The generic rectangle in image coordinates.
///
/// `x2` and `y2` are exclusive, so `w() == x2() - x1()`.
pub trait Rect {
    type Type;

    fn x1(&self) -> Self::Type;
    fn y1(&self) -> Self::Type;
    fn x2(&self) -> Self::Type;
    fn y2(&self) -> Self::Type;
    fn cx(&self) -> Self::Type;
    fn cy(&self) -> Self::Type;
    fn w(&self) -> Self::Type;
    fn h(&self) -> Self::Type;

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;

    fn try_from_tlwh(tlwh: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;
}

pub trait RectNum: Rect
where
    Self::Type: Num + PartialOrd + Copy,
{
    fn tlbr(&self) -> [Self::Type; 4] {
        [self.x1(), self.y1(), self.x2(), self.y2()]
    }

    fn tlwh(&self) -> [Self::Type; 4] {
        [self.x1(), self.y1(), self.w(), self.h()]
    }

    /// The center point as `[x, y]`.
    fn center(&self) -> [Self::Type; 2] {
        [self.cx(), self.cy()]
    }

    fn to_tlbr(&self) -> TLBR<Self::Type> {
        TLBR {
            x1: self.x1(),
            y1: self.y1(),
            x2: self.x2(),
            y2: self.y2(),
        }
    }

    fn to_tlwh(&self) -> TLWH<Self::Type> {
        TLWH {
            x: self.x1(),
            y: self.y1(),
            w: self.w(),
            h: self.h(),
        }
    }

    fn area(&self) -> <Self::Type as Mul<Self::Type>>::Output {
        self.w() * self.h()
    }
}

impl<R> RectNum for R
where
    R: Rect,
    R::Type: Num + PartialOrd + Copy,
{
}
