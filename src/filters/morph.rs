//! General morphology operations: erode, dilate, open, close, gradient,
//! top-hat, black-hat, paged on the secondary axis.

use opencv::core::{Mat, Size};
use opencv::imgproc;

use crate::scope::cycle::{self, Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;

pub struct Morph {
    shape: Cycle,
    op: Cycle,
    x_tracker: Trackbar,
    y_tracker: Trackbar,
    ksize: Size,
}

impl Morph {
    pub fn new() -> Result<Morph, opencv::Error> {
        Ok(Morph {
            shape: cycle::shape_cycle(),
            op: Cycle::new(7),
            x_tracker: Trackbar::new("ksize X", 25)?.floor(1)?.at(12)?,
            y_tracker: Trackbar::new("ksize Y", 25)?.floor(1)?.at(12)?,
            ksize: Size::default(),
        })
    }
}

fn op_label(ord: i32) -> &'static str {
    match ord {
        0 => "MORPH_ERODE",
        1 => "MORPH_DILATE",
        2 => "MORPH_OPEN",
        3 => "MORPH_CLOSE",
        4 => "MORPH_GRADIENT",
        5 => "MORPH_TOPHAT",
        6 => "MORPH_BLACKHAT",
        _ => "Unknown",
    }
}

impl Filter for Morph {
    fn name(&self) -> &'static str {
        "morph"
    }

    fn title(&self) -> String {
        format!(
            "MorphologyEx - {} - {} - filterscope",
            op_label(self.op.ordinal()),
            cycle::shape_label(self.shape.ordinal())
        )
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.ksize = Size::new(self.x_tracker.pos()?, self.y_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        let kernel = imgproc::get_structuring_element_def(self.shape.ordinal(), self.ksize)?;
        imgproc::morphology_ex_def(src, dst, self.op.ordinal(), &kernel)?;
        Ok(())
    }

    fn cycle(&mut self, axis: Axis, dir: Direction) -> bool {
        match axis {
            Axis::Primary => self.shape.step(dir),
            Axis::Secondary => self.op.step(dir),
        };
        true
    }

    fn fragment(&self) -> String {
        format!(
            "let kernel = imgproc::get_structuring_element_def(imgproc::{}, Size::new({}, {}))?;\nimgproc::morphology_ex_def(&src, &mut dest, imgproc::{}, &kernel)?;",
            cycle::shape_label(self.shape.ordinal()),
            self.ksize.width,
            self.ksize.height,
            op_label(self.op.ordinal())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_cycle_covers_all_seven_labels() {
        let mut op = Cycle::new(7);
        for _ in 0..7 {
            assert_ne!(op_label(op.ordinal()), "Unknown");
            op.next();
        }
        assert_eq!(op.ordinal(), 0);
    }
}
