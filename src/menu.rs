//! Menu tiles and their expandable children.

use crate::config;
use crate::entity::Animatable;
use crate::math::lerp_vec3;
use crate::render::{DrawList, QuadFill, TextureId};
use cgmath::Vector3;

/// How an entry lays out its children: a compact 2-wide icon grid or a single
/// stack of flattened text strips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildKind {
    Icon,
    Text,
}

/// Rule position for the child at `ordinal`, relative to the parent's current
/// position. Icon children fill a two-column grid growing upward from the
/// parent; text children stack in one column.
pub fn sub_position(kind: ChildKind, parent: Vector3<f32>, ordinal: usize) -> Vector3<f32> {
    match kind {
        ChildKind::Icon => {
            let col = (ordinal % 2) as f32;
            let row = (ordinal / 2) as f32;
            Vector3::new(
                parent.x + col * config::SUB_ICON_COL_OFFSET,
                parent.y + (row + 1.0) * config::SUB_ICON_ROW_SPACING,
                parent.z,
            )
        }
        ChildKind::Text => Vector3::new(
            parent.x,
            parent.y
                + config::SUB_TEXT_BASE_OFFSET
                + ordinal as f32 * config::SUB_TEXT_ROW_SPACING,
            parent.z,
        ),
    }
}

/// Rule scale for a child, derived from the parent's current scale.
pub fn sub_scale(kind: ChildKind, parent: Vector3<f32>) -> Vector3<f32> {
    match kind {
        ChildKind::Icon => Vector3::new(
            parent.x / config::SUB_ICON_WIDTH_DIVISOR,
            parent.y / config::SUB_ICON_HEIGHT_DIVISOR,
            parent.z,
        ),
        ChildKind::Text => Vector3::new(
            parent.x,
            parent.y / config::SUB_TEXT_HEIGHT_DIVISOR,
            parent.z,
        ),
    }
}

/// One tile: a textured quad with zero or more child tiles that unfold above
/// it while it is the focused entry.
#[derive(Clone, Debug)]
pub struct MenuEntry {
    pub name: String,
    pub body: Animatable,
    /// True only while this is the focused top-level entry (the controller
    /// enforces uniqueness).
    pub selected: bool,
    /// Selection state at the end of the previous frame; the edge between the
    /// two is what retargets the children, exactly once per focus change.
    was_selected: bool,
    pub child_kind: ChildKind,
    pub children: Vec<MenuEntry>,
    pub texture: Option<TextureId>,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Animatable::at(Vector3::new(0.0, 0.0, 0.0)),
            selected: false,
            was_selected: false,
            child_kind: ChildKind::Text,
            children: Vec::new(),
            texture: None,
        }
    }

    /// Append a child, placing it by the layout rules at the next ordinal.
    /// New children start stacked at the parent's height (both y values are
    /// clamped down) so they unfold outward on the next selection edge.
    pub fn add_child(&mut self, mut entry: MenuEntry, kind: ChildKind) {
        self.child_kind = kind;
        let ordinal = self.children.len();

        entry.body.scale = sub_scale(kind, self.body.scale);
        entry.body.scale_dest = entry.body.scale;

        let mut position = sub_position(kind, self.body.position, ordinal);
        position.y = self.body.position.y;
        entry.body.position = position;
        entry.body.position_dest = position;

        self.children.push(entry);
    }

    /// Bind (or rebind) the tile's artwork. Safe to call again when a newer
    /// bitmap finishes loading.
    pub fn load_texture(&mut self, texture: TextureId) {
        self.texture = Some(texture);
    }

    /// Per-frame update. `_elapsed_ms` is accepted for symmetry with the rest
    /// of the frame step but the smoothing rates are per-frame fractions.
    pub fn animate(&mut self, _elapsed_ms: f32) {
        let kind = self.child_kind;
        let parent_position = self.body.position;
        let parent_scale = self.body.scale;

        // Child destinations are recomputed only on the selection edge.
        if self.was_selected != self.selected {
            if self.selected {
                for (ordinal, child) in self.children.iter_mut().enumerate() {
                    child.body.scale_dest = sub_scale(kind, parent_scale);
                    child.body.position_dest = sub_position(kind, parent_position, ordinal);
                }
            } else {
                // Collapse back into the parent: flatten and drop to its y.
                for child in self.children.iter_mut() {
                    child.body.scale_dest.y = 0.0;
                    child.body.position_dest.y = parent_position.y;
                }
            }
        }

        for (ordinal, child) in self.children.iter_mut().enumerate() {
            // Horizontal alignment stays locked to the rule even while the
            // parent itself is mid-transition.
            let rule_x = sub_position(kind, parent_position, ordinal).x;
            child.body.position.x = rule_x;
            child.body.position_dest.x = rule_x;

            lerp_vec3(
                &mut child.body.scale,
                &child.body.scale_dest,
                config::ENTRY_SCALE_RATE,
            );
            lerp_vec3(
                &mut child.body.position,
                &child.body.position_dest,
                config::ENTRY_POSITION_RATE,
            );
        }

        self.body
            .step(config::ENTRY_POSITION_RATE, config::ENTRY_SCALE_RATE);

        self.was_selected = self.selected;
    }

    /// Emit this tile and then its children. Children are always emitted at
    /// their current scale; hidden ones have interpolated to a collapsed
    /// height rather than being skipped.
    pub fn draw(&self, list: &mut DrawList) {
        if let Some(texture) = self.texture {
            list.push(self.body.transform(), QuadFill::Textured(texture));
        }
        for child in &self.children {
            child.draw(list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_at(x: f32, y: f32) -> MenuEntry {
        let mut entry = MenuEntry::new("parent");
        entry.body = Animatable::at(Vector3::new(x, y, config::ENTRY_PLANE_Z));
        entry
    }

    #[test]
    fn icon_children_fill_a_two_column_grid() {
        let mut parent = parent_at(-0.16, -2.0);
        for i in 0..4 {
            parent.add_child(MenuEntry::new(format!("icon{i}")), ChildKind::Icon);
        }
        parent.selected = true;
        parent.animate(16.0);

        let expect = [
            (-0.16, -2.0 + 0.7),
            (-0.16 + 0.52, -2.0 + 0.7),
            (-0.16, -2.0 + 1.4),
            (-0.16 + 0.52, -2.0 + 1.4),
        ];
        for (child, (x, y)) in parent.children.iter().zip(expect) {
            assert!((child.body.position_dest.x - x).abs() < 1e-6, "{}", child.name);
            assert!((child.body.position_dest.y - y).abs() < 1e-6, "{}", child.name);
        }
    }

    #[test]
    fn text_children_stack_in_one_column() {
        let mut parent = parent_at(1.0, -2.0);
        for i in 0..3 {
            parent.add_child(MenuEntry::new(format!("row{i}")), ChildKind::Text);
        }
        parent.selected = true;
        parent.animate(16.0);

        for (ordinal, child) in parent.children.iter().enumerate() {
            assert!((child.body.position_dest.x - 1.0).abs() < 1e-6);
            let y = -2.0 + 0.37 + ordinal as f32 * 0.37;
            assert!((child.body.position_dest.y - y).abs() < 1e-6);
        }
    }

    #[test]
    fn scale_rules_shrink_children() {
        let mut icon_parent = parent_at(0.0, -2.0);
        icon_parent.add_child(MenuEntry::new("icon"), ChildKind::Icon);
        let icon = &icon_parent.children[0].body.scale;
        assert!((icon.x - 1.0 / 2.1).abs() < 1e-6);
        assert!((icon.y - 1.0 / 1.5).abs() < 1e-6);

        let mut text_parent = parent_at(0.0, -2.0);
        text_parent.add_child(MenuEntry::new("text"), ChildKind::Text);
        let text = &text_parent.children[0].body.scale;
        assert!((text.x - 1.0).abs() < 1e-6);
        assert!((text.y - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn new_children_start_stacked_at_parent_height() {
        let mut parent = parent_at(0.0, -2.0);
        parent.add_child(MenuEntry::new("a"), ChildKind::Icon);
        let child = &parent.children[0];
        assert_eq!(child.body.position.y, -2.0);
        assert_eq!(child.body.position_dest.y, -2.0);
    }

    #[test]
    fn deselect_edge_collapses_children() {
        let mut parent = parent_at(0.0, -2.0);
        parent.add_child(MenuEntry::new("a"), ChildKind::Text);
        parent.selected = true;
        parent.animate(16.0);
        assert!(parent.children[0].body.position_dest.y > -2.0);

        parent.selected = false;
        parent.animate(16.0);
        assert_eq!(parent.children[0].body.scale_dest.y, 0.0);
        assert!((parent.children[0].body.position_dest.y - parent.body.position.y).abs() < 1e-6);
    }

    #[test]
    fn destinations_recompute_only_on_the_edge() {
        let mut parent = parent_at(0.0, -2.0);
        parent.add_child(MenuEntry::new("a"), ChildKind::Text);
        parent.selected = true;
        parent.animate(16.0);

        // Steady-state frames must leave the y destination alone (x is
        // re-snapped every frame).
        parent.children[0].body.position_dest.y = 5.5;
        parent.animate(16.0);
        assert_eq!(parent.children[0].body.position_dest.y, 5.5);
    }

    #[test]
    fn children_ride_the_parent_horizontally() {
        let mut parent = parent_at(0.0, -2.0);
        parent.add_child(MenuEntry::new("a"), ChildKind::Text);
        parent.selected = true;
        parent.animate(16.0);

        // Parent mid-transition: children snap to the rule x immediately.
        parent.body.position.x = 2.5;
        parent.animate(16.0);
        assert!((parent.children[0].body.position.x - 2.5).abs() < 1e-6);
        assert!((parent.children[0].body.position_dest.x - 2.5).abs() < 1e-6);
    }

    #[test]
    fn untextured_tiles_draw_nothing_but_children_still_emit() {
        let mut parent = parent_at(0.0, -2.0);
        parent.add_child(MenuEntry::new("a"), ChildKind::Icon);
        parent.children[0].load_texture(TextureId(3));

        let mut list = DrawList::default();
        parent.draw(&mut list);
        assert_eq!(list.quads.len(), 1);

        parent.load_texture(TextureId(4));
        list.clear();
        parent.draw(&mut list);
        assert_eq!(list.quads.len(), 2);
    }
}
