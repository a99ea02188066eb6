//! The standard gizmo collection

use sk_core::SceneObject;

use super::{Gizmo, GizmoMode, centre_marker};

/// Name-keyed gizmos in a fixed iteration order, plus the centre marker.
///
/// Order matters: picking breaks ties by iteration order.
#[derive(Debug, Clone)]
pub struct GizmoSet {
    gizmos: Vec<Gizmo>,
    centre: SceneObject,
}

impl Default for GizmoSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl GizmoSet {
    /// Three axis handles, three plane handles and three rings.
    ///
    /// Move handles start active, rings start inactive.
    pub fn standard() -> Self {
        let mut gizmos = vec![
            Gizmo::axis_move("X"),
            Gizmo::axis_move("Y"),
            Gizmo::axis_move("Z"),
            Gizmo::plane_move("XY"),
            Gizmo::plane_move("XZ"),
            Gizmo::plane_move("YZ"),
            Gizmo::rotate("X"),
            Gizmo::rotate("Y"),
            Gizmo::rotate("Z"),
        ];
        for gizmo in gizmos.iter_mut().filter(|g| g.mode() == GizmoMode::Move) {
            gizmo.toggle_activity();
        }

        Self {
            gizmos,
            centre: centre_marker(),
        }
    }

    /// An empty set with only the centre marker
    pub fn empty() -> Self {
        Self {
            gizmos: Vec::new(),
            centre: centre_marker(),
        }
    }

    /// Add a gizmo, replacing any gizmo with the same name in place
    pub fn insert(&mut self, gizmo: Gizmo) {
        match self.gizmos.iter_mut().find(|g| g.name() == gizmo.name()) {
            Some(existing) => *existing = gizmo,
            None => self.gizmos.push(gizmo),
        }
    }

    /// Gizmo keyed by `name`
    pub fn get(&self, name: &str) -> Option<&Gizmo> {
        self.gizmos.iter().find(|g| g.name() == name)
    }

    /// Mutable gizmo keyed by `name`
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Gizmo> {
        self.gizmos.iter_mut().find(|g| g.name() == name)
    }

    /// All gizmos in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Gizmo> {
        self.gizmos.iter()
    }

    /// Gizmos that are currently shown and pickable
    pub fn active(&self) -> impl Iterator<Item = &Gizmo> {
        self.gizmos.iter().filter(|g| g.is_active())
    }

    /// Number of gizmos, excluding the centre marker
    pub fn len(&self) -> usize {
        self.gizmos.len()
    }

    /// True when the set holds no gizmos
    pub fn is_empty(&self) -> bool {
        self.gizmos.is_empty()
    }

    /// Flip the activity of every gizmo in lockstep
    pub fn toggle_all(&mut self) {
        for gizmo in &mut self.gizmos {
            gizmo.toggle_activity();
        }
    }

    /// Marker sphere drawn at the target's origin
    pub fn centre_marker(&self) -> &SceneObject {
        &self.centre
    }

    /// Move every body and the centre marker onto `target`
    pub fn update_for_target(&mut self, target: &SceneObject) {
        self.centre.set_position(target.position());
        for gizmo in &mut self.gizmos {
            gizmo.update_pos_and_orientation(target);
            gizmo.update_bounding_box();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use sk_core::{Primitive, Transform};

    #[test]
    fn test_standard_set_order_and_activity() {
        let set = GizmoSet::standard();
        let names: Vec<_> = set.iter().map(|g| g.name()).collect();
        assert_eq!(
            names,
            vec![
                "X_AXIS_MOVE",
                "Y_AXIS_MOVE",
                "Z_AXIS_MOVE",
                "XY_PLANE_MOVE",
                "XZ_PLANE_MOVE",
                "YZ_PLANE_MOVE",
                "X_AXIS_ROTATE",
                "Y_AXIS_ROTATE",
                "Z_AXIS_ROTATE",
            ]
        );
        assert!(set.active().all(|g| g.mode() == GizmoMode::Move));
        assert_eq!(set.active().count(), 6);
    }

    #[test]
    fn test_toggle_all_swaps_families() {
        let mut set = GizmoSet::standard();
        set.toggle_all();
        assert_eq!(set.active().count(), 3);
        assert!(set.active().all(|g| g.mode() == GizmoMode::Rotate));
        set.toggle_all();
        assert!(set.active().all(|g| g.mode() == GizmoMode::Move));
    }

    #[test]
    fn test_update_for_target_moves_everything() {
        let mut set = GizmoSet::standard();
        let target = SceneObject::new(
            Primitive::Cube,
            Transform::from_position(Vec3::new(-2.0, -2.0, 1.0)),
            Vec3::ONE,
            85.0,
        );
        set.update_for_target(&target);

        assert_eq!(set.centre_marker().position(), target.position());
        let x = set.get("X_AXIS_MOVE").unwrap();
        assert!(x.body().position().abs_diff_eq(Vec3::new(-1.75, -2.0, 1.0), 1e-6));
        assert!(x.body().bbox().contains_point(x.body().position()));
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut set = GizmoSet::empty();
        set.insert(Gizmo::axis_move("X"));
        set.insert(Gizmo::axis_move("X"));
        assert_eq!(set.len(), 1);
        assert!(set.get("Y_AXIS_MOVE").is_none());
    }
}
