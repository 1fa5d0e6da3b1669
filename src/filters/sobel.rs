//! Sobel directional gradient filter.

use opencv::core::{self, Mat};
use opencv::imgproc;

use crate::scope::cycle::{self, Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;
use crate::scope::tune;

pub struct Sobel {
    border: Cycle,
    dx_tracker: Trackbar,
    dy_tracker: Trackbar,
    ksize_tracker: Trackbar,
    scale_tracker: Trackbar,
    delta_tracker: Trackbar,
    dx: i32,
    dy: i32,
    ksize: i32,
    scale: f64,
    delta: f64,
}

impl Sobel {
    pub fn new() -> Result<Sobel, opencv::Error> {
        Ok(Sobel {
            border: cycle::border_cycle(),
            dx_tracker: Trackbar::new("dx", 1)?.at(1)?,
            dy_tracker: Trackbar::new("dy", 1)?.at(0)?,
            ksize_tracker: Trackbar::new("ksize", 7)?.at(3)?,
            scale_tracker: Trackbar::new("scale", 60)?.at(30)?,
            delta_tracker: Trackbar::new("delta", 60)?.at(30)?,
            dx: 0,
            dy: 0,
            ksize: 0,
            scale: 0.0,
            delta: 0.0,
        })
    }
}

fn code_fragment(dx: i32, dy: i32, ksize: i32, scale: f64, delta: f64, border: &str) -> String {
    format!(
        "imgproc::sobel(&src, &mut dest, core::CV_16S, {dx}, {dy}, {ksize}, {scale:.1}, {delta:.1}, core::{border})?;"
    )
}

impl Filter for Sobel {
    fn name(&self) -> &'static str {
        "sobel"
    }

    fn title(&self) -> String {
        format!(
            "Sobel - {} - filterscope",
            cycle::border_label(self.border.ordinal())
        )
    }

    // The derivative order pair may not be (0, 0); only one axis at a time.
    fn validate(&mut self) -> Result<(), opencv::Error> {
        let raw_dx = self.dx_tracker.pos()?;
        let raw_dy = self.dy_tracker.pos()?;
        let (dx, dy) = tune::exclusive_pair(raw_dx, raw_dy);
        if dx != raw_dx {
            self.dx_tracker.set(dx)?;
        }
        if dy != raw_dy {
            self.dy_tracker.set(dy)?;
        }

        self.dx = dx;
        self.dy = dy;
        self.ksize = self.ksize_tracker.odd_pos()?;
        self.scale = f64::from(self.scale_tracker.pos()?);
        self.delta = f64::from(self.delta_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::sobel(
            src,
            dst,
            core::CV_16S,
            self.dx,
            self.dy,
            self.ksize,
            self.scale,
            self.delta,
            self.border.ordinal(),
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
            self.dx,
            self.dy,
            self.ksize,
            self.scale,
            self.delta,
            cycle::border_label(self.border.ordinal()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_substitutes_the_derivative_pair() {
        assert_eq!(
            code_fragment(0, 1, 3, 30.0, 30.0, "BORDER_CONSTANT"),
            "imgproc::sobel(&src, &mut dest, core::CV_16S, 0, 1, 3, 30.0, 30.0, core::BORDER_CONSTANT)?;"
        );
    }
}
