pub mod cycle;
pub mod keys;
pub mod session;
pub mod source;
pub mod trackbar;
pub mod tune;

use log::debug;
use opencv::highgui;

/// Name of the one display window a session owns. `highgui` addresses
/// windows by name, so the trackbar and title calls all route through this.
pub const WINNAME: &str = "filterscope";

pub fn init_window() -> Result<(), opencv::Error> {
    debug!("Initializing display window '{}'", WINNAME);
    highgui::named_window(
        WINNAME,
        highgui::WINDOW_KEEPRATIO | highgui::WINDOW_GUI_NORMAL,
    )?;

    Ok(())
}
