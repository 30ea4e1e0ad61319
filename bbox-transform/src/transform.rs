use super::Rect;
use crate::common::*;

/// Axis-aligned scale followed by translation, `x' = x * sx + tx`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transform<T> {
    pub sx: T,
    pub sy: T,
    pub tx: T,
    pub ty: T,
}

impl<T> Transform<T>
where
    T: Copy + Num,
{
    pub fn translation(tx: T, ty: T) -> Self {
        Self {
            sx: T::one(),
            sy: T::one(),
            tx,
            ty,
        }
    }

    /// The transform that maps the `src` rectangle onto `tgt`.
    pub fn from_rects<R, S>(src: &R, tgt: &S) -> Self
    where
        R: Rect<Type = T>,
        S: Rect<Type = T>,
    {
        let sx = tgt.w() / src.w();
        let sy = tgt.h() / src.h();
        let tx = tgt.x1() - src.x1() * sx;
        let ty = tgt.y1() - src.y1() * sy;

        Self { sx, sy, tx, ty }
    }

    pub fn apply(&self, point: [T; 2]) -> [T; 2] {
        let [x, y] = point;
        [x * self.sx + self.tx, y * self.sy + self.ty]
    }
}

impl<T> Transform<T>
where
    T: Copy + Num + Neg<Output = T>,
{
    pub fn inverse(&self) -> Self {
        let sx = T::one() / self.sx;
        let sy = T::one() / self.sy;
        let tx = -self.tx / self.sx;
        let ty = -self.ty / self.sy;

        Self { sx, sy, tx, ty }
    }
}
