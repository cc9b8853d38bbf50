//! Logical menu actions and the keyboard mapping that produces them.
//!
//! Key events latch into [`InputState`] as they arrive and are consumed once
//! per frame by the controller, so an action registered mid-frame takes
//! effect on the very next frame step.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MenuAction {
    Left = 0,
    Right,
    Up,
    Down,
    ToggleMenu,
    Dismiss,
    ToggleBackdrop,
}

pub const ACTION_COUNT: usize = 7;

pub const ALL_ACTIONS: [MenuAction; ACTION_COUNT] = [
    MenuAction::Left,
    MenuAction::Right,
    MenuAction::Up,
    MenuAction::Down,
    MenuAction::ToggleMenu,
    MenuAction::Dismiss,
    MenuAction::ToggleBackdrop,
];

impl MenuAction {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Pressed-key latch. `take` reads and clears, so each press yields exactly
/// one action even if the frame rate dips.
#[derive(Debug, Default)]
pub struct InputState {
    pressed: [bool; ACTION_COUNT],
}

impl InputState {
    pub fn press(&mut self, action: MenuAction) {
        self.pressed[action.index()] = true;
    }

    pub fn release(&mut self, action: MenuAction) {
        self.pressed[action.index()] = false;
    }

    pub fn take(&mut self, action: MenuAction) -> bool {
        std::mem::take(&mut self.pressed[action.index()])
    }
}

pub fn action_from_keycode(code: KeyCode) -> Option<MenuAction> {
    match code {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(MenuAction::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(MenuAction::Right),
        KeyCode::ArrowUp | KeyCode::KeyW => Some(MenuAction::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(MenuAction::Down),
        KeyCode::KeyM => Some(MenuAction::ToggleMenu),
        KeyCode::Escape => Some(MenuAction::Dismiss),
        KeyCode::Backquote => Some(MenuAction::ToggleBackdrop),
        _ => None,
    }
}

pub fn handle_keyboard_input(event: &KeyEvent, state: &mut InputState) {
    if let PhysicalKey::Code(code) = event.physical_key {
        if let Some(action) = action_from_keycode(code) {
            match event.state {
                ElementState::Pressed => state.press(action),
                ElementState::Released => state.release(action),
            }
        }
    }
}
