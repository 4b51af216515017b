use winit::keyboard::{Key, NamedKey};

/// Last pointer sample and button state.
#[derive(Default, Clone, Copy, Debug)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
    pub down: bool,
    has_sample: bool,
}

impl MouseState {
    pub fn press(&mut self) {
        self.down = true;
    }

    /// Returns whether the button was held.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.down)
    }

    /// Records a new sample. While the button is held, returns the delta since
    /// the previous sample with `dy` positive when moving up the screen.
    /// The first sample only seeds the position.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let delta = (self.down && self.has_sample).then(|| (x - self.x, self.y - y));
        self.x = x;
        self.y = y;
        self.has_sample = true;
        delta
    }
}

/// DOM-style key name for a winit logical key, as used by the shared key map.
pub fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(named) => Some(match named {
            NamedKey::Space => " ",
            NamedKey::Backspace => "Backspace",
            NamedKey::Delete => "Delete",
            NamedKey::Tab => "Tab",
            NamedKey::Enter => "Enter",
            NamedKey::Escape => "Escape",
            NamedKey::ArrowUp => "ArrowUp",
            NamedKey::ArrowDown => "ArrowDown",
            NamedKey::ArrowLeft => "ArrowLeft",
            NamedKey::ArrowRight => "ArrowRight",
            _ => return None,
        }),
        _ => None,
    }
}
