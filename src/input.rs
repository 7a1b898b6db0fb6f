//! Input normalization
//!
//! Hosts report which keys are held; this turns them into the named controls
//! the simulation understands. Unknown keys are ignored.

use crate::sim::TickInput;

/// Named controls the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    RapidFire,
    Start,
}

impl Control {
    /// Controls bound to a DOM-style key code (`"ArrowLeft"`, `"KeyZ"`, ...)
    pub fn for_key(code: &str) -> &'static [Control] {
        match code {
            "ArrowLeft" | "KeyA" => &[Control::MoveLeft],
            "ArrowRight" | "KeyD" => &[Control::MoveRight],
            "ArrowUp" | "KeyW" => &[Control::MoveUp],
            "ArrowDown" | "KeyS" => &[Control::MoveDown],
            // Fire doubles as the start/retry confirmation
            "Space" | "KeyZ" => &[Control::Fire, Control::Start],
            "KeyX" | "ShiftLeft" | "ShiftRight" => &[Control::RapidFire],
            "Enter" => &[Control::Start],
            _ => &[],
        }
    }
}

impl TickInput {
    /// Build a snapshot from active controls
    pub fn from_controls(controls: impl IntoIterator<Item = Control>) -> Self {
        let mut input = TickInput::default();
        for control in controls {
            match control {
                Control::MoveLeft => input.left = true,
                Control::MoveRight => input.right = true,
                Control::MoveUp => input.up = true,
                Control::MoveDown => input.down = true,
                Control::Fire => input.fire = true,
                Control::RapidFire => input.rapid = true,
                Control::Start => input.start = true,
            }
        }
        input
    }

    /// Build a snapshot from held key codes
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_controls(
            keys.into_iter()
                .flat_map(|code| Control::for_key(code).iter().copied()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_controls() {
        let input = TickInput::from_keys(["ArrowLeft", "KeyW", "KeyX"]);
        assert!(input.left && input.up && input.rapid);
        assert!(!input.right && !input.down && !input.fire && !input.start);
    }

    #[test]
    fn test_space_fires_and_confirms() {
        let input = TickInput::from_keys(["Space"]);
        assert!(input.fire);
        assert!(input.start);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(
            TickInput::from_keys(["F13", "", "MetaLeft"]),
            TickInput::default()
        );
    }

    #[test]
    fn test_opposite_directions_both_held() {
        let input = TickInput::from_controls([Control::MoveLeft, Control::MoveRight]);
        assert!(input.left && input.right);
    }
}
