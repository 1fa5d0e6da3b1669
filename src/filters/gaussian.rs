//! Gaussian blur with a pageable border extrapolation mode.

use opencv::core::{AlgorithmHint, Mat, Size};
use opencv::imgproc;

use crate::scope::cycle::{self, Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;
use crate::scope::tune;

pub struct Gaussian {
    border: Cycle,
    kx_tracker: Trackbar,
    ky_tracker: Trackbar,
    sx_tracker: Trackbar,
    sy_tracker: Trackbar,
    ksize: Size,
    sigma_x: f64,
    sigma_y: f64,
}

impl Gaussian {
    pub fn new() -> Result<Gaussian, opencv::Error> {
        Ok(Gaussian {
            border: cycle::border_cycle(),
            kx_tracker: Trackbar::new("ksize X", 25)?.at(0)?,
            ky_tracker: Trackbar::new("ksize Y", 25)?.at(0)?,
            sx_tracker: Trackbar::new("sigma X", 60)?.at(30)?,
            sy_tracker: Trackbar::new("sigma Y", 60)?.at(0)?,
            ksize: Size::default(),
            sigma_x: 0.0,
            sigma_y: 0.0,
        })
    }
}

fn code_fragment(ksize: Size, sigma_x: f64, sigma_y: f64, border: &str) -> String {
    format!(
        "imgproc::gaussian_blur(&src, &mut dest, Size::new({}, {}), {sigma_x:.1}, {sigma_y:.1}, core::{border}, AlgorithmHint::ALGO_HINT_DEFAULT)?;",
        ksize.width, ksize.height
    )
}

impl Filter for Gaussian {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    fn title(&self) -> String {
        format!(
            "GaussianBlur - {} - filterscope",
            cycle::border_label(self.border.ordinal())
        )
    }

    // Kernel size and sigma X may not both be zero.
    fn validate(&mut self) -> Result<(), opencv::Error> {
        let kx = self.kx_tracker.pos()?;
        let ky = self.ky_tracker.pos()?;
        let (fx, fy) = tune::kernel_floor(self.sx_tracker.pos()?, kx, ky);
        if fx != kx {
            self.kx_tracker.set(fx)?;
        }
        if fy != ky {
            self.ky_tracker.set(fy)?;
        }

        self.ksize = Size::new(self.kx_tracker.odd_pos()?, self.ky_tracker.odd_pos()?);
        self.sigma_x = f64::from(self.sx_tracker.pos()?);
        self.sigma_y = f64::from(self.sy_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::gaussian_blur(
            src,
            dst,
            self.ksize,
            self.sigma_x,
            self.sigma_y,
            self.border.ordinal(),
            AlgorithmHint::ALGO_HINT_DEFAULT,
        )?;
        Ok(())
    }

    fn cycle(&mut self, axis: Axis, dir: Direction) -> bool {
        match axis {
            Axis::Primary => {
                self.border.step(dir);
                true
            }
            Axis::Secondary => false,
        }
    }

    fn fragment(&self) -> String {
        code_fragment(
            self.ksize,
            self.sigma_x,
            self.sigma_y,
            cycle::border_label(self.border.ordinal()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_names_the_border_mode() {
        assert_eq!(
            code_fragment(Size::new(5, 5), 4.0, 0.0, "BORDER_REFLECT"),
            "imgproc::gaussian_blur(&src, &mut dest, Size::new(5, 5), 4.0, 0.0, core::BORDER_REFLECT, AlgorithmHint::ALGO_HINT_DEFAULT)?;"
        );
    }
}
