//! Symbolic key bindings decoded once from the raw integer codes the
//! display widget reports, so the session loop never matches on magic
//! numbers.

const Z_KEY: i32 = 122;
const X_KEY: i32 = 120;
const A_KEY: i32 = 97;
const S_KEY: i32 = 115;
const G_KEY: i32 = 103;
const W_KEY: i32 = 119;
const SPACE: i32 = 32;
const ESC: i32 = 27;

/// The fixed key bindings every filter session responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// 'z': previous variant on the primary cycle axis
    PrevVariant,
    /// 'x': next variant on the primary cycle axis
    NextVariant,
    /// 'a': previous variant on the secondary cycle axis
    PrevMode,
    /// 's': next variant on the secondary cycle axis
    NextMode,
    /// space: toggle pause
    Pause,
    /// 'g': print a code fragment for the current filter call
    Generate,
    /// 'w': save the processed frame to a still image
    Save,
    /// esc: end the session
    Quit,
}

impl Key {
    /// Decodes a `wait_key` code; any unbound code (including the -1
    /// poll timeout) maps to `None`.
    pub fn from_code(code: i32) -> Option<Key> {
        match code {
            Z_KEY => Some(Key::PrevVariant),
            X_KEY => Some(Key::NextVariant),
            A_KEY => Some(Key::PrevMode),
            S_KEY => Some(Key::NextMode),
            SPACE => Some(Key::Pause),
            G_KEY => Some(Key::Generate),
            W_KEY => Some(Key::Save),
            ESC => Some(Key::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_codes_decode() {
        assert_eq!(Key::from_code(122), Some(Key::PrevVariant));
        assert_eq!(Key::from_code(120), Some(Key::NextVariant));
        assert_eq!(Key::from_code(97), Some(Key::PrevMode));
        assert_eq!(Key::from_code(115), Some(Key::NextMode));
        assert_eq!(Key::from_code(32), Some(Key::Pause));
        assert_eq!(Key::from_code(103), Some(Key::Generate));
        assert_eq!(Key::from_code(119), Some(Key::Save));
        assert_eq!(Key::from_code(27), Some(Key::Quit));
    }

    #[test]
    fn unbound_codes_are_ignored() {
        assert_eq!(Key::from_code(-1), None);
        assert_eq!(Key::from_code(0), None);
        assert_eq!(Key::from_code(113), None);
    }
}
