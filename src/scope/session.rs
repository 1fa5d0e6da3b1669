//! The generic filter session: one window, one video source, a set of
//! trackbars and variant cycles owned by the filter, and a per-frame loop
//! that validates, processes, displays, and dispatches key presses.

use anyhow::{Context, Result};
use log::{debug, info, warning};
use opencv::core::{Mat, MatTraitConst};
use opencv::{highgui, imgcodecs};
use std::time::Instant;

use crate::scope::cycle::Direction;
use crate::scope::keys::Key;
use crate::scope::source::{FrameStatus, Source};
use crate::scope::{self, WINNAME};

/// Which of a filter's (up to two) variant cycles a key addresses. 'z'/'x'
/// step the primary axis, 'a'/'s' the secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Primary,
    Secondary,
}

/// One interactive filter. Implementations own their trackbars, cycles, and
/// the validated parameter set shared between `process` and `fragment`.
pub trait Filter {
    /// Subcommand name; also the stem of the saved frame file.
    fn name(&self) -> &'static str;

    /// Window title reflecting the current variant selection.
    fn title(&self) -> String;

    /// Normalizes the raw trackbar positions into the parameters used by
    /// [`Filter::process`] and [`Filter::fragment`]. Runs once per frame,
    /// before the filter; corrected values are written back to the sliders.
    fn validate(&mut self) -> Result<(), opencv::Error>;

    /// Applies the filter to `src`, writing the result into `dst`.
    fn process(&mut self, src: &Mat, dst: &mut Mat) -> Result<(), opencv::Error>;

    /// Steps a variant cycle. Returns false when the filter has no cycle on
    /// that axis, so the caller skips the title refresh.
    fn cycle(&mut self, _axis: Axis, _dir: Direction) -> bool {
        false
    }

    /// The `opencv` crate call(s) equivalent to the current filter state.
    fn fragment(&self) -> String;
}

/// Opens the source, builds the filter's controls on a fresh window, and
/// runs the session loop until the exit key or the end of the stream.
///
/// `build` runs after the window exists, since trackbars attach to it.
pub fn run<F, B>(source: &str, build: B) -> Result<()>
where
    F: Filter,
    B: FnOnce() -> Result<F, opencv::Error>,
{
    let mut video =
        Source::open(source).with_context(|| format!("Error opening video source: {source}"))?;

    scope::init_window().context("Could not create display window")?;
    let mut filter = build().context("Could not create filter controls")?;
    highgui::set_window_title(WINNAME, &filter.title())?;

    let mut img = Mat::default();
    let mut processed = Mat::default();
    let mut paused = false;
    let mut pace = FramePace::new();

    info!("Start reading video: {}", source);
    loop {
        if video.read(&mut img) == FrameStatus::Closed {
            info!("Device closed: {}", source);
            break;
        }
        if img.empty() {
            debug!("Empty frame received");
            continue;
        }

        filter.validate()?;
        filter.process(&img, &mut processed)?;

        // Paused sessions show the raw frame instead of the filter output.
        if paused {
            highgui::imshow(WINNAME, &img)?;
        } else {
            highgui::imshow(WINNAME, &processed)?;
        }
        pace.tick();

        match Key::from_code(highgui::wait_key(1)?) {
            Some(Key::PrevVariant) => {
                if filter.cycle(Axis::Primary, Direction::Prev) {
                    highgui::set_window_title(WINNAME, &filter.title())?;
                }
            }
            Some(Key::NextVariant) => {
                if filter.cycle(Axis::Primary, Direction::Next) {
                    highgui::set_window_title(WINNAME, &filter.title())?;
                }
            }
            Some(Key::PrevMode) => {
                if filter.cycle(Axis::Secondary, Direction::Prev) {
                    highgui::set_window_title(WINNAME, &filter.title())?;
                }
            }
            Some(Key::NextMode) => {
                if filter.cycle(Axis::Secondary, Direction::Next) {
                    highgui::set_window_title(WINNAME, &filter.title())?;
                }
            }
            Some(Key::Pause) => {
                paused = !paused;
                let mut text = filter.title();
                if paused {
                    text = format!("**PAUSED** {text}");
                }
                highgui::set_window_title(WINNAME, &text)?;
            }
            Some(Key::Generate) => {
                fragment_header();
                println!("\n{}\n", filter.fragment());
            }
            Some(Key::Save) => save_frame(filter.name(), &processed),
            Some(Key::Quit) => break,
            None => {}
        }
    }

    highgui::destroy_window(WINNAME)?;
    Ok(())
}

fn fragment_header() {
    println!("===============================");
    println!("Rust code for current filter:");
    println!("-------------------------------");
}

/// Writes the current processed frame next to the working directory, named
/// after the filter command. A failed save never ends the session.
fn save_frame(name: &str, img: &Mat) {
    let path = format!("{name}.jpg");
    match imgcodecs::imwrite_def(&path, img) {
        Ok(true) => info!("Wrote processed frame to {}", path),
        Ok(false) => warning!("Encoder refused to write {}", path),
        Err(e) => warning!("Failed to write {}: {}", path, e),
    }
}

/// Frame counter that logs a debug-level rate line every 100 frames.
struct FramePace {
    frames: usize,
    window_start: Instant,
}

impl FramePace {
    const WINDOW: usize = 100;

    fn new() -> Self {
        FramePace {
            frames: 0,
            window_start: Instant::now(),
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        if self.frames % Self::WINDOW == 0 {
            let elapsed = self.window_start.elapsed().as_secs_f32();
            debug!(
                "Processed {} frames ({:.1} fps over the last {})",
                self.frames,
                Self::WINDOW as f32 / elapsed,
                Self::WINDOW
            );
            self.window_start = Instant::now();
        }
    }
}
