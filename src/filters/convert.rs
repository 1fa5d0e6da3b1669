//! Brightness and contrast adjustment through `Mat::convert_to`.

use opencv::core::{Mat, MatTraitConst};

use crate::scope::session::Filter;
use crate::scope::trackbar::Trackbar;
use crate::scope::tune;

pub struct Convert {
    alpha_tracker: Trackbar,
    beta_tracker: Trackbar,
    alpha: f64,
    beta: f64,
}

impl Convert {
    pub fn new() -> Result<Convert, opencv::Error> {
        Ok(Convert {
            alpha_tracker: Trackbar::new("alpha", 30)?.floor(10)?.at(12)?,
            beta_tracker: Trackbar::new("beta", 100)?.at(20)?,
            alpha: 0.0,
            beta: 0.0,
        })
    }
}

impl Filter for Convert {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn title(&self) -> String {
        "Convert - filterscope".to_string()
    }

    // The alpha slider reads 10..30 and maps onto a 1.0..3.0 gain.
    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.alpha = tune::tenths(self.alpha_tracker.pos()?);
        self.beta = f64::from(self.beta_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        src.convert_to(dst, -1, self.alpha, self.beta)?;
        Ok(())
    }

    fn fragment(&self) -> String {
        format!(
            "src.convert_to(&mut dest, -1, {:.1}, {:.1})?;",
            self.alpha, self.beta
        )
    }
}
