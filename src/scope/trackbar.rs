//! Thin handle over a `highgui` trackbar on the session window.

use opencv::highgui;

use crate::scope::WINNAME;
use crate::scope::tune;

/// A named integer slider. Positions are read and written through
/// `highgui`, so the displayed value and the value a filter uses never
/// diverge.
pub struct Trackbar {
    name: &'static str,
}

impl Trackbar {
    pub fn new(name: &'static str, count: i32) -> Result<Trackbar, opencv::Error> {
        highgui::create_trackbar(name, WINNAME, None, count, None)?;
        Ok(Trackbar { name })
    }

    /// Sets the initial position, builder style.
    pub fn at(self, pos: i32) -> Result<Trackbar, opencv::Error> {
        self.set(pos)?;
        Ok(self)
    }

    /// Sets the minimum position, builder style.
    pub fn floor(self, min: i32) -> Result<Trackbar, opencv::Error> {
        highgui::set_trackbar_min(self.name, WINNAME, min)?;
        Ok(self)
    }

    pub fn pos(&self) -> Result<i32, opencv::Error> {
        highgui::get_trackbar_pos(self.name, WINNAME)
    }

    pub fn set(&self, pos: i32) -> Result<(), opencv::Error> {
        highgui::set_trackbar_pos(self.name, WINNAME, pos)
    }

    /// Position under the odd-or-zero size rule. A corrected value is
    /// written back to the slider so the UI shows what the filter gets.
    pub fn odd_pos(&self) -> Result<i32, opencv::Error> {
        let pos = self.pos()?;
        let odd = tune::odd_or_zero(pos);
        if odd != pos {
            self.set(odd)?;
        }
        Ok(odd)
    }
}
