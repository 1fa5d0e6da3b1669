//! Video source adapter. Wraps `VideoCapture` so a still-image source
//! yields its frame exactly once and then idles, while a live device or
//! stream gets a fresh read on every poll.

use log::{debug, info, warning};
use opencv::core::{Mat, StsError};
use opencv::videoio::{VideoCapture, VideoCaptureTrait, VideoCaptureTraitConst};

/// Outcome of polling a [`Source`] for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// A new frame was decoded into the buffer.
    Fresh,
    /// Still-image source past its first read: the previous frame is still
    /// valid, nothing new was decoded.
    Held,
    /// The source failed a read or reached end of stream. Stop iterating.
    Closed,
}

/// Tracks whether a poll should touch the decoder. For still images only
/// the first poll reads; afterwards the decoded frame is held until the
/// source is dropped.
#[derive(Debug, Clone, Copy)]
struct DeliveryGate {
    still: bool,
    delivered: bool,
}

impl DeliveryGate {
    fn new(still: bool) -> Self {
        DeliveryGate {
            still,
            delivered: false,
        }
    }

    fn wants_read(&self) -> bool {
        !self.still || !self.delivered
    }

    fn mark_delivered(&mut self) {
        self.delivered = true;
    }
}

pub struct Source {
    source: String,
    video: VideoCapture,
    gate: DeliveryGate,
}

impl Source {
    /// Opens a video source. A source string that parses as an integer is
    /// taken as a capture device index, anything else as a file path or
    /// stream URI.
    pub fn open(source: &str) -> Result<Source, opencv::Error> {
        let video = match source.parse::<i32>() {
            Ok(index) => {
                info!("Opening camera device {}", index);
                VideoCapture::new_def(index)?
            }
            Err(_) => {
                info!("Opening video source: {}", source);
                VideoCapture::from_file_def(source)?
            }
        };

        if !video.is_opened()? {
            return Err(opencv::Error::new(
                StsError,
                format!("could not open video source: {source}"),
            ));
        }

        debug!("Video source opened: {}", source);
        Ok(Source {
            gate: DeliveryGate::new(is_still_image(source)),
            source: source.to_string(),
            video,
        })
    }

    /// Polls for the next frame. Failed and errored reads both map to
    /// [`FrameStatus::Closed`]; the session treats that as normal
    /// termination, not a crash.
    pub fn read(&mut self, frame: &mut Mat) -> FrameStatus {
        if !self.gate.wants_read() {
            return FrameStatus::Held;
        }

        match self.video.read(frame) {
            Ok(true) => {
                self.gate.mark_delivered();
                FrameStatus::Fresh
            }
            Ok(false) => FrameStatus::Closed,
            Err(e) => {
                warning!("Read from {} failed: {}", self.source, e);
                FrameStatus::Closed
            }
        }
    }
}

fn is_still_image(source: &str) -> bool {
    let source = source.to_ascii_lowercase();
    [".jpg", ".jpeg", ".png"]
        .iter()
        .any(|ext| source.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_gate_reads_once_then_holds() {
        let mut gate = DeliveryGate::new(true);
        assert!(gate.wants_read());
        gate.mark_delivered();
        for _ in 0..4 {
            assert!(!gate.wants_read());
        }
    }

    #[test]
    fn live_gate_always_reads() {
        let mut gate = DeliveryGate::new(false);
        assert!(gate.wants_read());
        gate.mark_delivered();
        assert!(gate.wants_read());
    }

    #[test]
    fn image_extensions_are_detected() {
        assert!(is_still_image("photo.jpg"));
        assert!(is_still_image("PHOTO.JPEG"));
        assert!(is_still_image("scan.png"));
        assert!(!is_still_image("clip.mp4"));
        assert!(!is_still_image("0"));
        assert!(!is_still_image("rtsp://camera/stream"));
    }
}
