//! Mutable curve editing.
//!
//! [`PiecewiseCubic`] never changes once built. Authoring tools work on a
//! [`CurveEditor`] instead and turn it back into a curve when done.

use hatm_math::NewtonTarget;

use crate::cubic::{PiecewiseCubic, evaluate_control_points};
use crate::error::{CurveError, CurveResult};
use crate::pchip::populate_pchip_slopes;
use crate::types::ControlPoint;
use crate::view::ViewTransform;

/// Editable list of control points, kept sorted by `x`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveEditor {
    points: Vec<ControlPoint>,
}

impl CurveEditor {
    /// Starts editing a copy of `curve`.
    pub fn new(curve: &PiecewiseCubic) -> Self {
        Self {
            points: curve.control_points().to_vec(),
        }
    }

    /// Current control points.
    #[inline]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True once every point has been removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point on the current curve at `x` and returns its index.
    ///
    /// The new point takes the value and slope the curve has at `x`, so the
    /// shape is unchanged until the point is moved.
    pub fn insert(&mut self, x: f64) -> usize {
        let point = ControlPoint::from(evaluate_control_points(&self.points, x));
        self.insert_point(point)
    }

    fn insert_point(&mut self, point: ControlPoint) -> usize {
        let index = self.points.partition_point(|p| p.x < point.x);
        self.points.insert(index, point);
        index
    }

    /// Removes and returns the point at `index`; out of range does nothing.
    pub fn remove(&mut self, index: usize) -> Option<ControlPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Replaces the point at `index` and returns where it ended up.
    pub fn set_point(&mut self, index: usize, point: ControlPoint) -> CurveResult<usize> {
        if index >= self.points.len() {
            return Err(CurveError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.points.remove(index);
        Ok(self.insert_point(point))
    }

    /// Moves the point at `index` to the display position `target.value`.
    ///
    /// With a display slope in `target.slope` the point's slope is solved
    /// too; otherwise it keeps its slope. Returns the new index.
    pub fn place_in_view(&mut self, index: usize, view: &ViewTransform, target: NewtonTarget) -> CurveResult<usize> {
        let old = self.points.get(index).copied().ok_or(CurveError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })?;
        let model = view.to_model(target);
        self.set_point(index, ControlPoint::new(model.x, model.g, model.m.unwrap_or(old.m)))
    }

    /// Recomputes every slope with the PCHIP rule.
    pub fn smooth(&mut self) {
        populate_pchip_slopes(&mut self.points);
    }

    /// Builds a curve from the current points.
    pub fn to_curve(&self) -> CurveResult<PiecewiseCubic> {
        PiecewiseCubic::new(self.points.clone())
    }

    /// Finishes editing.
    pub fn into_curve(self) -> CurveResult<PiecewiseCubic> {
        PiecewiseCubic::new(self.points)
    }
}

impl From<PiecewiseCubic> for CurveEditor {
    fn from(curve: PiecewiseCubic) -> Self {
        Self { points: curve.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hatm_math::Vec2;

    fn curve() -> PiecewiseCubic {
        PiecewiseCubic::with_pchip(&[(0.5, 1.0), (1.0, 0.5), (4.0, -1.0)]).unwrap()
    }

    #[test]
    fn test_insert_preserves_shape() {
        let original = curve();
        let mut editor = original.edit();
        let index = editor.insert(2.0);
        assert_eq!(index, 2);
        assert_eq!(editor.len(), 4);

        let edited = editor.to_curve().unwrap();
        assert!(edited.is_ascending());
        assert_relative_eq!(edited.evaluate(2.0).y, original.evaluate(2.0).y, epsilon = 1e-12);
        for x in [0.7, 1.5, 2.5, 3.5] {
            // splitting a Hermite segment at its own value and slope keeps it
            assert_relative_eq!(edited.evaluate(x).y, original.evaluate(x).y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_insert_at_ends() {
        let mut editor = curve().edit();
        assert_eq!(editor.insert(0.1), 0);
        assert_eq!(editor.control_points()[0].y, 1.0);
        let last = editor.insert(8.0);
        assert_eq!(last, editor.len() - 1);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut editor = curve().edit();
        assert_eq!(editor.remove(10), None);
        assert_eq!(editor.len(), 3);
        assert_eq!(editor.remove(0).map(|p| p.x), Some(0.5));
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn test_empty_editor_has_no_curve() {
        let mut editor = CurveEditor::from(PiecewiseCubic::unity(1.0));
        editor.remove(0);
        assert!(editor.is_empty());
        assert_eq!(editor.to_curve(), Err(CurveError::Empty));
    }

    #[test]
    fn test_set_point_keeps_order() {
        let mut editor = curve().edit();
        let index = editor.set_point(0, ControlPoint::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(index, 1);
        assert!(editor.to_curve().unwrap().is_ascending());
        assert_eq!(
            editor.set_point(7, ControlPoint::default()),
            Err(CurveError::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_place_in_view() {
        let mut editor = curve().edit();
        let view = ViewTransform::linear();
        // Put the middle point at input 1.0, output 2.0: a gain of one stop
        let index = editor
            .place_in_view(1, &view, NewtonTarget::new(Vec2::new(1.0, 2.0)))
            .unwrap();
        assert_eq!(index, 1);
        let p = editor.control_points()[1];
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_eq!(p.m, curve().control_points()[1].m);

        editor.smooth();
        let smoothed = editor.into_curve().unwrap();
        assert_relative_eq!(smoothed.evaluate(1.0).y, 1.0, epsilon = 1e-12);
    }
}
