//! Canny edge detector. Works on grayscale, so frames are converted first.

use opencv::core::{AlgorithmHint, Mat};
use opencv::imgproc;

use crate::scope::session::Filter;
use crate::scope::trackbar::Trackbar;

pub struct Canny {
    t1_tracker: Trackbar,
    t2_tracker: Trackbar,
    gray: Mat,
    t1: f64,
    t2: f64,
}

impl Canny {
    pub fn new() -> Result<Canny, opencv::Error> {
        Ok(Canny {
            t1_tracker: Trackbar::new("t1", 100)?.at(50)?,
            t2_tracker: Trackbar::new("t2", 100)?.at(50)?,
            gray: Mat::default(),
            t1: 0.0,
            t2: 0.0,
        })
    }
}

impl Filter for Canny {
    fn name(&self) -> &'static str {
        "canny"
    }

    fn title(&self) -> String {
        "Canny - filterscope".to_string()
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.t1 = f64::from(self.t1_tracker.pos()?);
        self.t2 = f64::from(self.t2_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::cvt_color(
            src,
            &mut self.gray,
            imgproc::COLOR_BGR2GRAY,
            0,
            AlgorithmHint::ALGO_HINT_DEFAULT,
        )?;
        imgproc::canny_def(&self.gray, dst, self.t1, self.t2)?;
        Ok(())
    }

    fn fragment(&self) -> String {
        format!(
            "imgproc::canny_def(&gray, &mut dest, {:.1}, {:.1})?;",
            self.t1, self.t2
        )
    }
}
