pub use crate::error::{Error, Result};
pub use log::{debug, trace};
pub use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};
pub use num_traits::{Float, Num};
pub use serde::{Deserialize, Serialize};
pub use std::{
    convert::TryFrom,
    fmt::Debug,
    fs,
    ops::{Mul, Neg},
    path::Path,
};
