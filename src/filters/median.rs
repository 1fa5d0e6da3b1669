//! Median blur.

use opencv::core::Mat;
use opencv::imgproc;

use crate::scope::session::Filter;
use crate::scope::trackbar::Trackbar;

pub struct MedianBlur {
    ksize_tracker: Trackbar,
    ksize: i32,
}

impl MedianBlur {
    pub fn new() -> Result<MedianBlur, opencv::Error> {
        Ok(MedianBlur {
            ksize_tracker: Trackbar::new("ksize", 25)?.at(5)?,
            ksize: 0,
        })
    }
}

impl Filter for MedianBlur {
    fn name(&self) -> &'static str {
        "medianblur"
    }

    fn title(&self) -> String {
        "MedianBlur - filterscope".to_string()
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.ksize = self.ksize_tracker.odd_pos()?;
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::median_blur(src, dst, self.ksize)?;
        Ok(())
    }

    fn fragment(&self) -> String {
        format!("imgproc::median_blur(&src, &mut dest, {})?;", self.ksize)
    }
}
