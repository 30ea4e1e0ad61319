use crate::common::*;

/// Scalar type accepted by every box operation.
pub trait Element: Float + Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Float + Debug + Send + Sync + 'static {}
