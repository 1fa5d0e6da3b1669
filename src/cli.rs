use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LogLevel;
use std::path::PathBuf;

use crate::conf;
use crate::filters::{
    Adaptive, Bilateral, Blur, Canny, Convert, Dilate, Erode, Gaussian, Laplacian, MedianBlur,
    Morph, Niblack, Scharr, Sobel, Threshold,
};
use crate::scope::session;

#[derive(Parser, Debug)]
#[command(name = "filterscope", version, about = "Lets you visualize OpenCV filters and algorithms", long_about = r#"filterscope is a command line tool for OpenCV that lets you visually
explore various filters and algorithms for computer vision.

It can also generate Rust code for the current filter command using the
opencv crate. filterscope is itself written with the opencv crate."#)]
pub struct Args {
    /// Video source, can be device number, file, or stream
    #[arg(short = 'f', long, global = true)]
    source: Option<String>,

    /// Config file (default is the user configuration directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output debug information
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply threshold filter to video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through threshold calculation types.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to threshold.jpg.
    ///   Press 'esc' to exit.
    Threshold,

    /// Apply adaptive threshold to video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through adaptive threshold calculation types.
    ///   Use 'a' and 's' keys to page through threshold calculation types.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to adaptive.jpg.
    ///   Press 'esc' to exit.
    Adaptive,

    /// Apply Niblack threshold to video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through binarization methods.
    ///   Use 'a' and 's' keys to page through threshold calculation types.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to niblack.jpg.
    ///   Press 'esc' to exit.
    Niblack,

    /// Blur video images using a normalized box filter
    ///
    /// Key commands:
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to blur.jpg.
    ///   Press 'esc' to exit.
    Blur,

    /// Apply Gaussian blur to video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through border calculation types.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to gaussian.jpg.
    ///   Press 'esc' to exit.
    Gaussian,

    /// Blur video images using a median filter
    ///
    /// Key commands:
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to medianblur.jpg.
    ///   Press 'esc' to exit.
    Medianblur,

    /// Apply bilateral filter to video images
    ///
    /// Key commands:
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to bilateral.jpg.
    ///   Press 'esc' to exit.
    Bilateral,

    /// Convert video images using brightness and contrast
    ///
    /// Key commands:
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to convert.jpg.
    ///   Press 'esc' to exit.
    Convert,

    /// Apply Sobel to video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through border calculation types.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to sobel.jpg.
    ///   Press 'esc' to exit.
    Sobel,

    /// Apply Scharr to video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through border calculation types.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to scharr.jpg.
    ///   Press 'esc' to exit.
    Scharr,

    /// Apply Laplacian to video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through border calculation types.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to laplacian.jpg.
    ///   Press 'esc' to exit.
    Laplacian,

    /// Detect edges in video images with the Canny algorithm
    ///
    /// Key commands:
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to canny.jpg.
    ///   Press 'esc' to exit.
    Canny,

    /// Erode video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through structuring element shapes.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to erode.jpg.
    ///   Press 'esc' to exit.
    Erode,

    /// Dilate video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through structuring element shapes.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to dilate.jpg.
    ///   Press 'esc' to exit.
    Dilate,

    /// Perform morphology operations on video images
    ///
    /// Key commands:
    ///   Use 'z' and 'x' keys to page through structuring element shapes.
    ///   Use 'a' and 's' keys to page through morphology operations.
    ///   Press 'space' to pause/resume filtering.
    ///   Press 'g' to generate Rust code based on the current filter.
    ///   Press 'w' to write the processed frame to morph.jpg.
    ///   Press 'esc' to exit.
    Morph,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        if let Some(logger) = log::logger() {
            logger.set_level(LogLevel::Debug);
        }
    }

    let cfg = conf::load(args.config.as_deref())?;
    let source = args.source.unwrap_or(cfg.source);

    match args.command {
        Command::Threshold => session::run(&source, Threshold::new),
        Command::Adaptive => session::run(&source, Adaptive::new),
        Command::Niblack => session::run(&source, Niblack::new),
        Command::Blur => session::run(&source, Blur::new),
        Command::Gaussian => session::run(&source, Gaussian::new),
        Command::Medianblur => session::run(&source, MedianBlur::new),
        Command::Bilateral => session::run(&source, Bilateral::new),
        Command::Convert => session::run(&source, Convert::new),
        Command::Sobel => session::run(&source, Sobel::new),
        Command::Scharr => session::run(&source, Scharr::new),
        Command::Laplacian => session::run(&source, Laplacian::new),
        Command::Canny => session::run(&source, Canny::new),
        Command::Erode => session::run(&source, Erode::new),
        Command::Dilate => session::run(&source, Dilate::new),
        Command::Morph => session::run(&source, Morph::new),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn source_flag_parses_short_and_long() {
        let args = Args::try_parse_from(["filterscope", "threshold", "-f", "clip.mp4"]).unwrap();
        assert_eq!(args.source.as_deref(), Some("clip.mp4"));

        let args =
            Args::try_parse_from(["filterscope", "gaussian", "--source", "rtsp://cam/1"]).unwrap();
        assert_eq!(args.source.as_deref(), Some("rtsp://cam/1"));
    }

    #[test]
    fn source_defaults_to_the_config_value() {
        let args = Args::try_parse_from(["filterscope", "canny"]).unwrap();
        assert!(args.source.is_none());
        assert!(!args.debug);
    }
}
