//! Optional hooks to inspect intermediate geometry, e.g. for plotting.
//!
//! Results never depend on the sink. The default hooks do nothing.

use crate::{common::*, Element, RectNum, TLBR};

pub trait DiagnosticSink<T> {
    /// Called with the input points and their bounding box.
    fn points_bounded(&self, _points: ArrayView2<'_, T>, _bbox: &TLBR<T>) {}

    /// Called with TLBR boxes and their `2×N` centers.
    fn centers_computed(&self, _boxes: ArrayView2<'_, T>, _centers: ArrayView2<'_, T>) {}

    /// Called with the four corners of a rotated box, clockwise from top-left.
    fn corners_constructed(&self, _corners: &[[T; 2]; 4]) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl<T> DiagnosticSink<T> for NoDiagnostics {}

/// Writes everything to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl<T> DiagnosticSink<T> for LogDiagnostics
where
    T: Element,
{
    fn points_bounded(&self, points: ArrayView2<'_, T>, bbox: &TLBR<T>) {
        debug!(
            "{} points bounded by {:?}",
            points.ncols(),
            bbox.tlbr()
        );
    }

    fn centers_computed(&self, boxes: ArrayView2<'_, T>, centers: ArrayView2<'_, T>) {
        debug!("centers of {} boxes: {:?}", boxes.nrows(), centers);
    }

    fn corners_constructed(&self, corners: &[[T; 2]; 4]) {
        debug!("rotated corners: {:?}", corners);
    }
}
