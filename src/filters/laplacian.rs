//! Laplacian edge filter.

use opencv::core::{self, Mat};
use opencv::imgproc;

use crate::scope::cycle::{self, Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;

pub struct Laplacian {
    border: Cycle,
    size_tracker: Trackbar,
    scale_tracker: Trackbar,
    delta_tracker: Trackbar,
    ksize: i32,
    scale: f64,
    delta: f64,
}

impl Laplacian {
    pub fn new() -> Result<Laplacian, opencv::Error> {
        Ok(Laplacian {
            border: cycle::border_cycle(),
            size_tracker: Trackbar::new("size", 31)?.at(1)?,
            scale_tracker: Trackbar::new("scale", 60)?.at(0)?,
            delta_tracker: Trackbar::new("delta", 60)?.at(0)?,
            ksize: 0,
            scale: 0.0,
            delta: 0.0,
        })
    }
}

impl Filter for Laplacian {
    fn name(&self) -> &'static str {
        "laplacian"
    }

    fn title(&self) -> String {
        format!(
            "Laplacian - {} - filterscope",
            cycle::border_label(self.border.ordinal())
        )
    }

    // Aperture size has to be odd and at least 1.
    fn validate(&mut self) -> Result<(), opencv::Error> {
        if self.size_tracker.pos()? == 0 {
            self.size_tracker.set(1)?;
        }

        self.ksize = self.size_tracker.odd_pos()?;
        self.scale = f64::from(self.scale_tracker.pos()?);
        self.delta = f64::from(self.delta_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::laplacian(
            src,
            dst,
            core::CV_16S,
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
        format!(
            "imgproc::laplacian(&src, &mut dest, core::CV_16S, {}, {:.1}, {:.1}, core::{})?;",
            self.ksize,
            self.scale,
            self.delta,
            cycle::border_label(self.border.ordinal())
        )
    }
}
