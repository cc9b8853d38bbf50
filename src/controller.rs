//! All mutable menu session state, behind one owner.
//!
//! The controller owns the entry tree, the selector, the backdrop tint and
//! plane, the selection state machine, the transition sequencer and the
//! input latch. One call to [`MenuController::frame`] runs a whole tick:
//! consume input, fire due mutations, emit the draw list, advance every
//! animation. Input consumed at the top of a frame is visible to that same
//! frame's animate step.

use crate::config;
use crate::entity::Plane;
use crate::input::{InputState, MenuAction};
use crate::loader::TileSlot;
use crate::manifest::MenuManifest;
use crate::menu::MenuEntry;
use crate::render::{DrawList, TextureId};
use crate::selector::Selector;
use crate::sequencer::{Group, Mutation, TransitionSequencer};
use cgmath::Vector3;
use log::{debug, info, warn};

pub struct MenuController {
    entries: Vec<MenuEntry>,
    selector: Selector,
    tint: Selector,
    backdrop: Plane,
    focused: usize,
    sub_focused: Option<usize>,
    menu_visible: bool,
    show_backdrop: bool,
    sequencer: TransitionSequencer,
    pub input: InputState,
}

impl MenuController {
    pub fn new(manifest: &MenuManifest) -> Self {
        let mut entries = Vec::with_capacity(manifest.entries.len());
        for (i, def) in manifest.entries.iter().enumerate() {
            let mut entry = MenuEntry::new(def.name.clone());
            entry.body.position = Vector3::new(
                config::slot_x(i),
                config::ENTRY_ROW_Y,
                config::ENTRY_PLANE_Z,
            );
            entry.body.position_dest = entry.body.position;
            for child in &def.children {
                entry.add_child(MenuEntry::new(child.name()), child.kind());
            }
            entries.push(entry);
        }

        // Focus opens on the center tile.
        let focused = entries.len() / 2;
        if let Some(entry) = entries.get_mut(focused) {
            entry.selected = true;
        }
        let selector = match entries.get(focused) {
            Some(entry) => Selector::highlight(entry),
            None => Selector::new(
                Vector3::new(0.0, config::ENTRY_ROW_Y, config::ENTRY_PLANE_Z),
                Vector3::new(1.0, 1.0, 1.0),
                config::SELECTOR_COLOR,
            ),
        };

        info!(
            "menu ready: {} entries, focus on '{}'",
            entries.len(),
            entries.get(focused).map(|e| e.name.as_str()).unwrap_or("-")
        );

        Self {
            entries,
            selector,
            tint: Selector::backdrop_tint(),
            backdrop: Plane::new(
                Vector3::from(config::BACKDROP_POSITION),
                Vector3::from(config::BACKDROP_SCALE),
            ),
            focused,
            sub_focused: None,
            menu_visible: true,
            show_backdrop: true,
            sequencer: TransitionSequencer::new(),
            input: InputState::default(),
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn sub_focused(&self) -> Option<usize> {
        self.sub_focused
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn tint(&self) -> &Selector {
        &self.tint
    }

    /// One frame: input, due mutations, draw list, animation step.
    pub fn frame(&mut self, dt_ms: f32, list: &mut DrawList) {
        self.handle_input();
        for mutation in self.sequencer.advance(dt_ms) {
            self.apply(mutation);
        }
        self.emit(list);
        self.animate(dt_ms);
    }

    /// Route a finished tile bitmap's texture to its owner. Rebinding is
    /// fine; an out-of-range slot is dropped with a warning.
    pub fn bind_texture(&mut self, slot: TileSlot, texture: TextureId) {
        let bound = match slot {
            TileSlot::Backdrop => {
                self.backdrop.texture = Some(texture);
                true
            }
            TileSlot::Entry(i) => match self.entries.get_mut(i) {
                Some(entry) => {
                    entry.load_texture(texture);
                    true
                }
                None => false,
            },
            TileSlot::Child { entry, child } => match self
                .entries
                .get_mut(entry)
                .and_then(|e| e.children.get_mut(child))
            {
                Some(child) => {
                    child.load_texture(texture);
                    true
                }
                None => false,
            },
        };
        if bound {
            debug!("bound texture {texture:?} to {slot:?}");
        } else {
            warn!("no tile at {slot:?} for texture {texture:?}");
        }
    }

    /* ---------------- selection state machine ---------------- */

    pub fn move_left(&mut self) {
        if self.focused == 0 {
            return;
        }
        self.entries[self.focused].selected = false;
        self.focused -= 1;
        self.sub_focused = None;
        self.entries[self.focused].selected = true;
        self.selector.body.scale_dest = self.entries[self.focused].body.scale;
        debug!("focus left to '{}'", self.entries[self.focused].name);

        // Neighbors shove away from the new focus for a beat: the side being
        // left behind hardest, the side ahead gently, the focus itself eases
        // into the travel direction.
        for i in self.focused + 1..self.entries.len() {
            self.nudge(i, config::BOUNCE_WIDE);
        }
        self.nudge(self.focused, -config::BOUNCE_NEAR);
        for i in 0..self.focused {
            self.nudge(i, -config::BOUNCE_FAR);
        }
    }

    pub fn move_right(&mut self) {
        if self.entries.is_empty() || self.focused + 1 >= self.entries.len() {
            return;
        }
        self.entries[self.focused].selected = false;
        self.focused += 1;
        self.sub_focused = None;
        self.entries[self.focused].selected = true;
        self.selector.body.scale_dest = self.entries[self.focused].body.scale;
        debug!("focus right to '{}'", self.entries[self.focused].name);

        for i in self.focused + 1..self.entries.len() {
            self.nudge(i, config::BOUNCE_FAR);
        }
        self.nudge(self.focused, config::BOUNCE_NEAR);
        for i in 0..self.focused {
            self.nudge(i, -config::BOUNCE_WIDE);
        }
    }

    /// Walk the focus one child upward into the sub-menu, if there is one.
    pub fn focus_child_up(&mut self) {
        let Some(entry) = self.entries.get(self.focused) else {
            return;
        };
        let next = self.sub_focused.map_or(0, |s| s + 1);
        if next >= entry.children.len() {
            return;
        }
        self.sub_focused = Some(next);
        self.selector.body.scale_dest = entry.children[next].body.scale_dest;
    }

    /// Walk back down; from the lowest child the focus returns to the parent
    /// tile.
    pub fn focus_child_down(&mut self) {
        match self.sub_focused {
            Some(s) if s > 0 => {
                let child = &self.entries[self.focused].children[s - 1];
                self.selector.body.position_dest = child.body.position_dest;
                self.selector.body.scale_dest = child.body.scale_dest;
                self.sub_focused = Some(s - 1);
            }
            Some(_) => {
                let entry = &self.entries[self.focused];
                self.selector.body.position_dest = entry.body.position;
                self.selector.body.scale_dest = entry.body.scale;
                self.sub_focused = None;
            }
            None => {}
        }
    }

    /* ---------------- show / hide ---------------- */

    pub fn toggle_menu(&mut self) {
        self.sub_focused = None;
        if self.menu_visible {
            self.hide_menu();
        } else {
            self.show_menu();
        }
    }

    /// Start the entrance choreography. Visibility stays latched off until
    /// the final scheduled step so navigation can't race a tile that is
    /// still sliding in.
    pub fn show_menu(&mut self) {
        info!("menu entrance");
        self.menu_visible = false;
        self.sequencer.show_menu(self.entries.len(), self.focused);
    }

    /// Start the exit choreography. Repeating this is harmless: each request
    /// replaces the pending one.
    pub fn hide_menu(&mut self) {
        info!("menu exit");
        self.menu_visible = false;
        // Collapse the sub-menu right away; the 0 ms mutation re-asserts it.
        if let Some(entry) = self.entries.get_mut(self.focused) {
            entry.selected = false;
        }
        self.sequencer.hide_menu(self.entries.len(), self.focused);
    }

    pub fn toggle_backdrop(&mut self) {
        self.show_backdrop = !self.show_backdrop;
    }

    /* ---------------- internals ---------------- */

    fn handle_input(&mut self) {
        // Directional input is only consumed while the menu is navigable; a
        // press made during a transition stays latched for the frame the
        // menu comes back.
        if self.menu_visible {
            if self.input.take(MenuAction::Up) {
                self.focus_child_up();
            }
            if self.input.take(MenuAction::Down) {
                self.focus_child_down();
            }
            if self.input.take(MenuAction::Left) {
                self.move_left();
            }
            if self.input.take(MenuAction::Right) {
                self.move_right();
            }
        }
        if self.input.take(MenuAction::Dismiss) {
            self.hide_menu();
        }
        if self.input.take(MenuAction::ToggleMenu) {
            self.toggle_menu();
        }
        if self.input.take(MenuAction::ToggleBackdrop) {
            self.toggle_backdrop();
        }
    }

    /// Apply a one-shot x nudge to a tile's destination and schedule its
    /// restore.
    fn nudge(&mut self, index: usize, dx: f32) {
        self.entries[index].body.position_dest.x += dx;
        self.sequencer.schedule(
            Group::Bounce,
            config::BOUNCE_RESTORE_MS,
            Mutation::EntryNudgeXDest { index, dx: -dx },
        );
    }

    fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::EntryPosXDest { index, x } => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.body.position_dest.x = x;
                }
            }
            Mutation::EntryPosYDest { index, y } => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.body.position_dest.y = y;
                }
            }
            Mutation::EntryNudgeXDest { index, dx } => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.body.position_dest.x += dx;
                }
            }
            Mutation::EntrySelected { index, selected } => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.selected = selected;
                }
            }
            Mutation::SelectorPosYDest(y) => self.selector.body.position_dest.y = y,
            Mutation::SelectorScaleToEntry(index) => {
                if let Some(entry) = self.entries.get(index) {
                    self.selector.body.scale_dest = entry.body.scale;
                }
            }
            Mutation::TintAlphaDest(alpha) => self.tint.color_dest.w = alpha,
            Mutation::MenuVisible(visible) => {
                self.menu_visible = visible;
                debug!("menu visibility latched {visible}");
            }
        }
    }

    /// Emit the frame in pass order: backdrop, tiles, tint, selector.
    fn emit(&self, list: &mut DrawList) {
        list.clear();
        if self.show_backdrop {
            self.backdrop.draw(list);
        }
        for entry in &self.entries {
            entry.draw(list);
        }
        if self.show_backdrop {
            self.tint.draw(list);
        }
        self.selector.draw(list);
    }

    fn animate(&mut self, dt_ms: f32) {
        for entry in &mut self.entries {
            entry.animate(dt_ms);
        }
        self.sync_selector();
        self.selector.animate(dt_ms);
        self.tint.animate(dt_ms);
    }

    /// Keep the highlight glued to a tile that may itself be mid-glide:
    /// x locks to the focused tile every frame, y chases it through its own
    /// destination.
    fn sync_selector(&mut self) {
        if !self.menu_visible {
            return;
        }
        let Some(entry) = self.entries.get(self.focused) else {
            return;
        };
        match self.sub_focused {
            None => {
                let x = entry.body.position.x;
                self.selector.body.position.x = x;
                self.selector.body.position_dest.x = x;
                self.selector.body.position_dest.y = entry.body.position.y;
                self.selector.body.scale_dest = entry.body.scale_dest;
            }
            Some(s) => {
                if let Some(child) = entry.children.get(s) {
                    self.selector.body.position_dest.x = child.body.position.x;
                    self.selector.body.position_dest.y = child.body.position.y;
                    self.selector.body.scale_dest = child.body.scale_dest;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::QuadFill;

    fn controller() -> MenuController {
        MenuController::new(&MenuManifest::demo())
    }

    fn settle_bounces(c: &mut MenuController) {
        let mut list = DrawList::default();
        for _ in 0..3 {
            c.frame(100.0, &mut list);
        }
    }

    #[test]
    fn focus_opens_on_the_center_tile() {
        let c = controller();
        assert_eq!(c.focused(), 3);
        assert!(c.entries()[3].selected);
        assert_eq!(c.selector().body.position, c.entries()[3].body.position);
    }

    #[test]
    fn move_right_retargets_and_bounces_neighbors() {
        let mut c = controller();
        c.move_right();

        assert_eq!(c.focused(), 4);
        assert!(c.entries()[4].selected);
        assert!(!c.entries()[3].selected);
        assert_eq!(c.selector().body.scale_dest, c.entries()[4].body.scale);

        // Ahead of the focus: small shove right. Behind it: a wide recoil.
        for i in 5..7 {
            let expected = config::slot_x(i) + config::BOUNCE_FAR;
            assert!((c.entries()[i].body.position_dest.x - expected).abs() < 1e-5);
        }
        for i in 0..4 {
            let expected = config::slot_x(i) - config::BOUNCE_WIDE;
            assert!((c.entries()[i].body.position_dest.x - expected).abs() < 1e-5);
        }
        let focus_x = config::slot_x(4) + config::BOUNCE_NEAR;
        assert!((c.entries()[4].body.position_dest.x - focus_x).abs() < 1e-5);
    }

    #[test]
    fn bounces_revert_after_their_delay() {
        let mut c = controller();
        c.move_right();
        settle_bounces(&mut c);
        for (i, entry) in c.entries().iter().enumerate() {
            assert!(
                (entry.body.position_dest.x - config::slot_x(i)).abs() < 1e-5,
                "tile {i} never returned to its slot"
            );
        }
    }

    #[test]
    fn edges_are_no_ops_without_bounces() {
        let mut c = controller();
        for _ in 0..3 {
            c.move_left();
        }
        settle_bounces(&mut c);
        assert_eq!(c.focused(), 0);

        let before: Vec<f32> = c
            .entries()
            .iter()
            .map(|e| e.body.position_dest.x)
            .collect();
        c.move_left();
        let after: Vec<f32> = c
            .entries()
            .iter()
            .map(|e| e.body.position_dest.x)
            .collect();
        assert_eq!(c.focused(), 0);
        assert_eq!(before, after);

        for _ in 0..6 {
            c.move_right();
        }
        settle_bounces(&mut c);
        assert_eq!(c.focused(), 6);
        let before: Vec<f32> = c
            .entries()
            .iter()
            .map(|e| e.body.position_dest.x)
            .collect();
        c.move_right();
        assert_eq!(c.focused(), 6);
        let after: Vec<f32> = c
            .entries()
            .iter()
            .map(|e| e.body.position_dest.x)
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn exactly_one_entry_stays_selected() {
        let mut c = controller();
        let moves = [
            MenuAction::Left,
            MenuAction::Left,
            MenuAction::Right,
            MenuAction::Left,
            MenuAction::Right,
            MenuAction::Right,
            MenuAction::Right,
        ];
        let mut list = DrawList::default();
        for action in moves {
            c.input.press(action);
            c.frame(16.0, &mut list);
            let selected = c.entries().iter().filter(|e| e.selected).count();
            assert_eq!(selected, 1);
        }
    }

    #[test]
    fn sub_focus_walks_up_and_back_down() {
        let mut c = controller();
        // Entry 3 ("LIVE TV") has two text children.
        assert_eq!(c.entries()[3].children.len(), 2);

        c.focus_child_up();
        assert_eq!(c.sub_focused(), Some(0));
        c.focus_child_up();
        assert_eq!(c.sub_focused(), Some(1));
        // Top of the stack: a further Up is a no-op.
        c.focus_child_up();
        assert_eq!(c.sub_focused(), Some(1));

        c.focus_child_down();
        assert_eq!(c.sub_focused(), Some(0));
        assert_eq!(
            c.selector().body.scale_dest,
            c.entries()[3].children[0].body.scale_dest
        );

        // From the lowest child, Down returns to the parent tile.
        c.focus_child_down();
        assert_eq!(c.sub_focused(), None);
        assert_eq!(c.selector().body.position_dest, c.entries()[3].body.position);
        assert_eq!(c.selector().body.scale_dest, c.entries()[3].body.scale);

        c.focus_child_down();
        assert_eq!(c.sub_focused(), None);
    }

    #[test]
    fn lateral_moves_reset_sub_focus() {
        let mut c = controller();
        c.focus_child_up();
        assert_eq!(c.sub_focused(), Some(0));
        c.move_right();
        assert_eq!(c.sub_focused(), None);
    }

    #[test]
    fn selector_rides_an_animating_tile() {
        let mut c = controller();
        let mut list = DrawList::default();
        c.entries[3].body.position.x = 99.0;
        c.frame(16.0, &mut list);
        // The sync runs after the tile's own step, so the selector's x is
        // locked to wherever the tile is right now, far from its slot.
        let tile_x = c.entries()[3].body.position.x;
        assert!(tile_x > 50.0);
        assert_eq!(c.selector().body.position.x, tile_x);
        assert_eq!(c.selector().body.position_dest.x, tile_x);
        assert_eq!(
            c.selector().body.position_dest.y,
            c.entries()[3].body.position.y
        );
    }

    #[test]
    fn dismiss_hides_immediately_and_ignores_navigation() {
        let mut c = controller();
        let mut list = DrawList::default();
        c.input.press(MenuAction::Dismiss);
        c.frame(16.0, &mut list);
        assert!(!c.is_menu_visible());
        assert!(!c.entries()[3].selected);

        c.input.press(MenuAction::Left);
        c.frame(16.0, &mut list);
        assert_eq!(c.focused(), 3);
    }

    #[test]
    fn toggle_runs_the_full_round_trip() {
        let mut c = controller();
        let mut list = DrawList::default();

        c.input.press(MenuAction::ToggleMenu);
        c.frame(16.0, &mut list);
        assert!(!c.is_menu_visible());

        // Let the exit finish, then toggle back in and run the entrance to
        // its finalize step.
        for _ in 0..4 {
            c.frame(100.0, &mut list);
        }
        c.input.press(MenuAction::ToggleMenu);
        for _ in 0..12 {
            c.frame(100.0, &mut list);
        }
        assert!(c.is_menu_visible());
        assert!(c.entries()[3].selected);
        for (i, entry) in c.entries().iter().enumerate() {
            assert!(
                (entry.body.position_dest.x - config::slot_x(i)).abs() < 1e-5,
                "tile {i} not back in its slot"
            );
            assert!((entry.body.position_dest.y - config::ENTRY_ROW_Y).abs() < 1e-5);
        }
    }

    #[test]
    fn hide_twice_matches_hiding_once() {
        let mut list = DrawList::default();

        let mut once = controller();
        once.hide_menu();
        for _ in 0..20 {
            once.frame(100.0, &mut list);
        }

        let mut twice = controller();
        twice.hide_menu();
        twice.hide_menu();
        for _ in 0..20 {
            twice.frame(100.0, &mut list);
        }

        for (a, b) in once.entries().iter().zip(twice.entries()) {
            assert_eq!(a.body.position_dest, b.body.position_dest);
        }
        assert_eq!(
            once.selector().body.position_dest.y,
            twice.selector().body.position_dest.y
        );
        assert_eq!(once.tint().color_dest.w, twice.tint().color_dest.w);
    }

    #[test]
    fn bounce_restores_survive_a_hide() {
        let mut c = controller();
        let mut list = DrawList::default();
        c.move_right();
        c.hide_menu();
        // The hide parks edge tiles; interior non-bounced state aside, the
        // pending bounce restores still fire and cancel their nudges out.
        for _ in 0..4 {
            c.frame(100.0, &mut list);
        }
        // Tile 2 is interior: its only x offsets were the bounce and its
        // restore, so it is back on its slot.
        assert!((c.entries()[2].body.position_dest.x - config::slot_x(2)).abs() < 1e-5);
    }

    #[test]
    fn draw_order_is_backdrop_tiles_tint_selector() {
        let mut c = controller();
        c.bind_texture(TileSlot::Backdrop, TextureId(1));
        c.bind_texture(TileSlot::Entry(0), TextureId(2));

        let mut list = DrawList::default();
        c.emit(&mut list);
        // backdrop + one textured tile + tint + selector
        assert_eq!(list.quads.len(), 4);
        assert_eq!(list.quads[0].fill, QuadFill::Textured(TextureId(1)));
        assert_eq!(list.quads[1].fill, QuadFill::Textured(TextureId(2)));
        assert!(matches!(list.quads[2].fill, QuadFill::Solid(_)));
        assert!(matches!(list.quads[3].fill, QuadFill::Solid(_)));

        c.toggle_backdrop();
        c.emit(&mut list);
        // backdrop and tint both gone
        assert_eq!(list.quads.len(), 2);
    }

    #[test]
    fn textures_bind_into_the_tree() {
        let mut c = controller();
        c.bind_texture(TileSlot::Child { entry: 1, child: 2 }, TextureId(9));
        assert_eq!(c.entries()[1].children[2].texture, Some(TextureId(9)));
        // Out-of-range slots are dropped quietly.
        c.bind_texture(TileSlot::Entry(42), TextureId(10));
    }

    #[test]
    fn empty_manifest_is_inert() {
        let manifest = MenuManifest {
            entries: Vec::new(),
            backdrop: None,
        };
        let mut c = MenuController::new(&manifest);
        let mut list = DrawList::default();
        c.move_left();
        c.move_right();
        c.focus_child_up();
        c.toggle_menu();
        for _ in 0..12 {
            c.frame(100.0, &mut list);
        }
        // Nothing but tint and selector to draw, and nothing panicked.
        assert_eq!(list.quads.len(), 2);
    }
}
