//! Edge-preserving bilateral filter.

use opencv::core::{self, Mat};
use opencv::imgproc;

use crate::scope::session::Filter;
use crate::scope::trackbar::Trackbar;

pub struct Bilateral {
    diameter_tracker: Trackbar,
    color_tracker: Trackbar,
    space_tracker: Trackbar,
    diameter: i32,
    sigma_color: f64,
    sigma_space: f64,
}

impl Bilateral {
    pub fn new() -> Result<Bilateral, opencv::Error> {
        Ok(Bilateral {
            diameter_tracker: Trackbar::new("diameter", 5)?.floor(1)?.at(2)?,
            color_tracker: Trackbar::new("sigma color", 255)?.at(60)?,
            space_tracker: Trackbar::new("sigma space", 255)?.at(0)?,
            diameter: 0,
            sigma_color: 0.0,
            sigma_space: 0.0,
        })
    }
}

impl Filter for Bilateral {
    fn name(&self) -> &'static str {
        "bilateral"
    }

    fn title(&self) -> String {
        "BilateralFilter - filterscope".to_string()
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.diameter = self.diameter_tracker.pos()?;
        self.sigma_color = f64::from(self.color_tracker.pos()?);
        self.sigma_space = f64::from(self.space_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::bilateral_filter(
            src,
            dst,
            self.diameter,
            self.sigma_color,
            self.sigma_space,
            core::BORDER_DEFAULT,
        )?;
        Ok(())
    }

    fn fragment(&self) -> String {
        format!(
            "imgproc::bilateral_filter(&src, &mut dest, {}, {:.1}, {:.1}, core::BORDER_DEFAULT)?;",
            self.diameter, self.sigma_color, self.sigma_space
        )
    }
}
