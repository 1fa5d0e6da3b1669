//! Dilation with a pageable structuring element shape.

use opencv::core::{Mat, Size};
use opencv::imgproc;

use crate::scope::cycle::{self, Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;

pub struct Dilate {
    shape: Cycle,
    x_tracker: Trackbar,
    y_tracker: Trackbar,
    ksize: Size,
}

impl Dilate {
    pub fn new() -> Result<Dilate, opencv::Error> {
        Ok(Dilate {
            shape: cycle::shape_cycle(),
            x_tracker: Trackbar::new("ksize X", 25)?.floor(1)?.at(12)?,
            y_tracker: Trackbar::new("ksize Y", 25)?.floor(1)?.at(12)?,
            ksize: Size::default(),
        })
    }
}

impl Filter for Dilate {
    fn name(&self) -> &'static str {
        "dilate"
    }

    fn title(&self) -> String {
        format!(
            "Dilate - {} - filterscope",
            cycle::shape_label(self.shape.ordinal())
        )
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.ksize = Size::new(self.x_tracker.pos()?, self.y_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        let kernel = imgproc::get_structuring_element_def(self.shape.ordinal(), self.ksize)?;
        imgproc::dilate_def(src, dst, &kernel)?;
        Ok(())
    }

    fn cycle(&mut self, axis: Axis, dir: Direction) -> bool {
        match axis {
            Axis::Primary => {
                self.shape.step(dir);
                true
            }
            Axis::Secondary => false,
        }
    }

    fn fragment(&self) -> String {
        format!(
            "let kernel = imgproc::get_structuring_element_def(imgproc::{}, Size::new({}, {}))?;\nimgproc::dilate_def(&src, &mut dest, &kernel)?;",
            cycle::shape_label(self.shape.ordinal()),
            self.ksize.width,
            self.ksize.height
        )
    }
}
