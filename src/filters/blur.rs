//! Normalized box blur.

use opencv::core::{Mat, Size};
use opencv::imgproc;

use crate::scope::session::Filter;
use crate::scope::trackbar::Trackbar;

pub struct Blur {
    x_tracker: Trackbar,
    y_tracker: Trackbar,
    ksize: Size,
}

impl Blur {
    pub fn new() -> Result<Blur, opencv::Error> {
        Ok(Blur {
            x_tracker: Trackbar::new("ksize X", 25)?.floor(1)?.at(12)?,
            y_tracker: Trackbar::new("ksize Y", 25)?.floor(1)?.at(12)?,
            ksize: Size::default(),
        })
    }
}

fn code_fragment(ksize: Size) -> String {
    format!(
        "imgproc::blur_def(&src, &mut dest, Size::new({}, {}))?;",
        ksize.width, ksize.height
    )
}

impl Filter for Blur {
    fn name(&self) -> &'static str {
        "blur"
    }

    fn title(&self) -> String {
        "Blur - filterscope".to_string()
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.ksize = Size::new(self.x_tracker.pos()?, self.y_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::blur_def(src, dst, self.ksize)?;
        Ok(())
    }

    fn fragment(&self) -> String {
        code_fragment(self.ksize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_carries_both_kernel_axes() {
        assert_eq!(
            code_fragment(Size::new(12, 7)),
            "imgproc::blur_def(&src, &mut dest, Size::new(12, 7))?;"
        );
    }
}
