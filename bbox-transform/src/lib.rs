//! Bounding box format conversion, clipping, cropping, rotation and regression
//! target encoding.

mod common;

pub mod error;
pub use error::*;

pub use element::*;
pub mod element;

pub use rect::*;
pub mod rect;

pub use tlbr::*;
pub mod tlbr;

pub use tlwh::*;
pub mod tlwh;

pub use size::*;
pub mod size;

pub use transform::*;
mod transform;

pub use boxes::*;
pub mod boxes;

pub use format::*;
pub mod format;

pub use clip::*;
pub mod clip;

pub use center_crop::*;
pub mod center_crop;

pub use points::*;
pub mod points;

pub use regression::*;
pub mod regression;

pub use coord::*;
pub mod coord;

pub use line::*;
pub mod line;

pub use rotation::*;
pub mod rotation;

pub use enlarge::*;
pub mod enlarge;

pub use diagnostics::*;
pub mod diagnostics;

pub mod prelude {
    pub use crate::{
        boxes::IntoBoxes,
        rect::{Rect, RectNum},
    };
}
