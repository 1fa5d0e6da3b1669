//! Erosion with a pageable structuring element shape.

use opencv::core::{Mat, Size};
use opencv::imgproc;

use crate::scope::cycle::{self, Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;

pub struct Erode {
    shape: Cycle,
    x_tracker: Trackbar,
    y_tracker: Trackbar,
    ksize: Size,
}

impl Erode {
    pub fn new() -> Result<Erode, opencv::Error> {
        Ok(Erode {
            shape: cycle::shape_cycle(),
            x_tracker: Trackbar::new("ksize X", 25)?.floor(1)?.at(12)?,
            y_tracker: Trackbar::new("ksize Y", 25)?.floor(1)?.at(12)?,
            ksize: Size::default(),
        })
    }
}

fn code_fragment(shape: &str, ksize: Size) -> String {
    format!(
        "let kernel = imgproc::get_structuring_element_def(imgproc::{shape}, Size::new({}, {}))?;\nimgproc::erode_def(&src, &mut dest, &kernel)?;",
        ksize.width, ksize.height
    )
}

impl Filter for Erode {
    fn name(&self) -> &'static str {
        "erode"
    }

    fn title(&self) -> String {
        format!(
            "Erode - {} - filterscope",
            cycle::shape_label(self.shape.ordinal())
        )
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.ksize = Size::new(self.x_tracker.pos()?, self.y_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        let kernel = imgproc::get_structuring_element_def(self.shape.ordinal(), self.ksize)?;
        imgproc::erode_def(src, dst, &kernel)?;
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
        code_fragment(cycle::shape_label(self.shape.ordinal()), self.ksize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_builds_the_kernel_first() {
        assert_eq!(
            code_fragment("MORPH_ELLIPSE", Size::new(12, 12)),
            "let kernel = imgproc::get_structuring_element_def(imgproc::MORPH_ELLIPSE, Size::new(12, 12))?;\nimgproc::erode_def(&src, &mut dest, &kernel)?;"
        );
    }
}
