//! Adaptive threshold filter. Works on grayscale, so frames are converted
//! before thresholding.

use opencv::core::{AlgorithmHint, Mat};
use opencv::imgproc;

use crate::scope::cycle::{Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;
use crate::scope::tune;

pub struct Adaptive {
    method: Cycle,
    kind: Cycle,
    block_tracker: Trackbar,
    c_tracker: Trackbar,
    gray: Mat,
    block: i32,
    c: f64,
}

impl Adaptive {
    pub fn new() -> Result<Adaptive, opencv::Error> {
        Ok(Adaptive {
            method: Cycle::new(2),
            kind: Cycle::new(2),
            block_tracker: Trackbar::new("block size", 255)?.at(3)?,
            c_tracker: Trackbar::new("C", 512)?.at(256)?,
            gray: Mat::default(),
            block: 0,
            c: 0.0,
        })
    }
}

fn method_label(ord: i32) -> &'static str {
    match ord {
        0 => "ADAPTIVE_THRESH_MEAN_C",
        1 => "ADAPTIVE_THRESH_GAUSSIAN_C",
        _ => "Unknown",
    }
}

fn kind_label(ord: i32) -> &'static str {
    match ord {
        0 => "THRESH_BINARY",
        1 => "THRESH_BINARY_INV",
        _ => "Unknown",
    }
}

fn code_fragment(method: &str, kind: &str, block: i32, c: f64) -> String {
    format!(
        "imgproc::adaptive_threshold(&gray, &mut dest, 255.0, imgproc::{method}, imgproc::{kind}, {block}, {c:.1})?;"
    )
}

impl Filter for Adaptive {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn title(&self) -> String {
        format!(
            "AdaptiveThreshold - {} - {} - filterscope",
            method_label(self.method.ordinal()),
            kind_label(self.kind.ordinal())
        )
    }

    // Block size has to be odd. C maps onto -256.0..256.0.
    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.block = self.block_tracker.odd_pos()?;
        self.c = tune::signed_offset(self.c_tracker.pos()?, 256);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::cvt_color(
            src,
            &mut self.gray,
            imgproc::COLOR_BGR2GRAY,
            0,
            AlgorithmHint::ALGO_HINT_DEFAULT,
        )?;
        imgproc::adaptive_threshold(
            &self.gray,
            dst,
            255.0,
            self.method.ordinal(),
            self.kind.ordinal(),
            self.block,
            self.c,
        )?;
        Ok(())
    }

    fn cycle(&mut self, axis: Axis, dir: Direction) -> bool {
        match axis {
            Axis::Primary => self.method.step(dir),
            Axis::Secondary => self.kind.step(dir),
        };
        true
    }

    fn fragment(&self) -> String {
        code_fragment(
            method_label(self.method.ordinal()),
            kind_label(self.kind.ordinal()),
            self.block,
            self.c,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_slider_maps_onto_signed_offsets() {
        assert_eq!(tune::signed_offset(0, 256), -256.0);
        assert_eq!(tune::signed_offset(256, 256), 0.0);
        assert_eq!(tune::signed_offset(512, 256), 256.0);
    }

    #[test]
    fn fragment_names_both_variants() {
        assert_eq!(
            code_fragment("ADAPTIVE_THRESH_MEAN_C", "THRESH_BINARY", 3, -10.0),
            "imgproc::adaptive_threshold(&gray, &mut dest, 255.0, imgproc::ADAPTIVE_THRESH_MEAN_C, imgproc::THRESH_BINARY, 3, -10.0)?;"
        );
    }
}
