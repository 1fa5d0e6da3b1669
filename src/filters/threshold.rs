//! Fixed-level threshold filter.

use opencv::core::Mat;
use opencv::imgproc;

use crate::scope::cycle::{Cycle, Direction};
use crate::scope::session::{Axis, Filter};
use crate::scope::trackbar::Trackbar;

pub struct Threshold {
    kind: Cycle,
    level_tracker: Trackbar,
    level: f64,
}

impl Threshold {
    pub fn new() -> Result<Threshold, opencv::Error> {
        Ok(Threshold {
            kind: Cycle::new(5),
            level_tracker: Trackbar::new("threshold", 255)?.at(128)?,
            level: 0.0,
        })
    }
}

fn kind_label(ord: i32) -> &'static str {
    match ord {
        0 => "THRESH_BINARY",
        1 => "THRESH_BINARY_INV",
        2 => "THRESH_TRUNC",
        3 => "THRESH_TOZERO",
        4 => "THRESH_TOZERO_INV",
        _ => "Unknown",
    }
}

fn code_fragment(level: f64, kind: &str) -> String {
    format!("imgproc::threshold(&src, &mut dest, {level:.1}, 255.0, imgproc::{kind})?;")
}

impl Filter for Threshold {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn title(&self) -> String {
        format!("Threshold - {} - filterscope", kind_label(self.kind.ordinal()))
    }

    fn validate(&mut self) -> Result<(), opencv::Error> {
        self.level = f64::from(self.level_tracker.pos()?);
        Ok(())
    }

    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error> {
        imgproc::threshold(src, dst, self.level, 255.0, self.kind.ordinal())?;
        Ok(())
    }

    fn cycle(&mut self, axis: Axis, dir: Direction) -> bool {
        match axis {
            Axis::Primary => {
                self.kind.step(dir);
                true
            }
            Axis::Secondary => false,
        }
    }

    fn fragment(&self) -> String {
        code_fragment(self.level, kind_label(self.kind.ordinal()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn next_variant_pages_through_all_kinds_and_wraps() {
        let mut kind = Cycle::new(5);
        let mut seen = HashSet::new();
        seen.insert(kind_label(kind.ordinal()));
        for _ in 0..4 {
            seen.insert(kind_label(kind.next()));
        }
        assert_eq!(seen.len(), 5);
        assert!(!seen.contains("Unknown"));

        // The fifth press lands back on the starting kind.
        assert_eq!(kind_label(kind.next()), "THRESH_BINARY");
    }

    #[test]
    fn fragment_substitutes_level_and_kind() {
        assert_eq!(
            code_fragment(128.0, "THRESH_BINARY"),
            "imgproc::threshold(&src, &mut dest, 128.0, 255.0, imgproc::THRESH_BINARY)?;"
        );
    }
}
