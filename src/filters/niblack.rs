//! Niblack-family local threshold filter from the ximgproc module.

use opencv::core::{AlgorithmHint, Mat};
use opencv::{imgproc, ximgproc};

use crate::scope::cycle::{Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;
use crate::scope::tune;

pub struct Niblack {
    method: Cycle,
    kind: Cycle,
    block_tracker: Trackbar,
    k_tracker: Trackbar,
    r_tracker: Trackbar,
    gray: Mat,
    block: i32,
    k: f64,
    r: f64,
}

impl Niblack {
    pub fn new() -> Result<Niblack, opencv::Error> {
        Ok(Niblack {
            method: Cycle::new(4),
            kind: Cycle::new(2),
            block_tracker: Trackbar::new("block size", 255)?.at(3)?,
            k_tracker: Trackbar::new("k", 10)?.at(5)?,
            r_tracker: Trackbar::new("r", 512)?.at(128)?,
            gray: Mat::default(),
            block: 0,
            k: 0.0,
            r: 0.0,
        })
    }
}

fn method_label(ord: i32) -> &'static str {
    match ord {
        0 => "BINARIZATION_NIBLACK",
        1 => "BINARIZATION_SAUVOLA",
        2 => "BINARIZATION_WOLF",
        3 => "BINARIZATION_NICK",
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

fn code_fragment(kind: &str, block: i32, k: f64, method: &str, r: f64) -> String {
    format!(
        "ximgproc::ni_black_threshold(&gray, &mut dest, 255.0, imgproc::{kind}, {block}, {k:.1}, ximgproc::{method}, {r:.1})?;"
    )
}

impl Filter for Niblack {
    fn name(&self) -> &'static str {
        "niblack"
    }

    fn title(&self) -> String {
        format!(
            "NiblackThreshold - {} - {} - filterscope",
            method_label(self.method.ordinal()),
            kind_label(self.kind.ordinal())
        )
    }

    // Block size has to be odd. k maps onto 0.0..1.0.
    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.block = self.block_tracker.odd_pos()?;
        self.k = tune::tenths(self.k_tracker.pos()?);
        self.r = f64::from(self.r_tracker.pos()?);
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
        ximgproc::ni_black_threshold(
            &self.gray,
            dst,
            255.0,
            self.kind.ordinal(),
            self.block,
            self.k,
            self.method.ordinal(),
            self.r,
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
            kind_label(self.kind.ordinal()),
            self.block,
            self.k,
            method_label(self.method.ordinal()),
            self.r,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binarization_methods_wrap_in_both_directions() {
        let mut method = Cycle::new(4);
        assert_eq!(method_label(method.prev()), "BINARIZATION_NICK");
        assert_eq!(method_label(method.next()), "BINARIZATION_NIBLACK");
    }
}
