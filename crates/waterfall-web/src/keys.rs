use waterfall_core::DirectionalInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Control::Forward),
        "ArrowDown" | "s" | "S" => Some(Control::Backward),
        "ArrowLeft" | "a" | "A" => Some(Control::Left),
        "ArrowRight" | "d" | "D" => Some(Control::Right),
        " " | "Spacebar" => Some(Control::Jump),
        _ => None,
    }
}

/// Controls currently held down. Several keys share a control, and the last
/// event for a control wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldControls {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl HeldControls {
    /// Returns true when the held state actually changed.
    pub fn set(&mut self, control: Control, down: bool) -> bool {
        let slot = match control {
            Control::Forward => &mut self.forward,
            Control::Backward => &mut self.backward,
            Control::Left => &mut self.left,
            Control::Right => &mut self.right,
            Control::Jump => &mut self.jump,
        };
        let changed = *slot != down;
        *slot = down;
        changed
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Steering ignores `jump`.
    pub fn directional(&self) -> DirectionalInput {
        DirectionalInput {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
        }
    }
}
