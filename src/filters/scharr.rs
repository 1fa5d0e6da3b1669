//! Scharr directional gradient filter.

use opencv::core::{self, Mat};
use opencv::imgproc;

use crate::scope::cycle::{self, Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;
use crate::scope::tune;

pub struct Scharr {
    border: Cycle,
    dx_tracker: Trackbar,
    dy_tracker: Trackbar,
    scale_tracker: Trackbar,
    delta_tracker: Trackbar,
    dx: i32,
    dy: i32,
    scale: f64,
    delta: f64,
}

impl Scharr {
    pub fn new() -> Result<Scharr, opencv::Error> {
        Ok(Scharr {
            border: cycle::border_cycle(),
            dx_tracker: Trackbar::new("dx", 1)?.at(1)?,
            dy_tracker: Trackbar::new("dy", 1)?.at(0)?,
            scale_tracker: Trackbar::new("scale", 60)?.at(30)?,
            delta_tracker: Trackbar::new("delta", 60)?.at(30)?,
            dx: 0,
            dy: 0,
            scale: 0.0,
            delta: 0.0,
        })
    }
}

impl Filter for Scharr {
    fn name(&self) -> &'static str {
        "scharr"
    }

    fn title(&self) -> String {
        format!(
            "Scharr - {} - filterscope",
            cycle::border_label(self.border.ordinal())
        )
    }

    // Same derivative-pair rule as Sobel, including the Y-axis fallback.
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
        self.scale = f64::from(self.scale_tracker.pos()?);
        self.delta = f64::from(self.delta_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::scharr(
            src,
            dst,
            core::CV_16S,
            self.dx,
            self.dy,
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
        format!(
            "imgproc::scharr(&src, &mut dest, core::CV_16S, {}, {}, {:.1}, {:.1}, core::{})?;",
            self.dx,
            self.dy,
            self.scale,
            self.delta,
            cycle::border_label(self.border.ordinal())
        )
    }
}
