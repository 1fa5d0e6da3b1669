//! One module per filter subcommand. Each filter owns its trackbars,
//! variant cycles, and validated parameters, and plugs into the generic
//! session loop through the [`Filter`](crate::scope::session::Filter)
//! trait.

pub mod adaptive;
pub mod bilateral;
pub mod blur;
pub mod canny;
pub mod convert;
pub mod dilate;
pub mod erode;
pub mod gaussian;
pub mod laplacian;
pub mod median;
pub mod morph;
pub mod niblack;
pub mod scharr;
pub mod sobel;
pub mod threshold;

pub use adaptive::Adaptive;
pub use bilateral::Bilateral;
pub use blur::Blur;
pub use canny::Canny;
pub use convert::Convert;
pub use dilate::Dilate;
pub use erode::Erode;
pub use gaussian::Gaussian;
pub use laplacian::Laplacian;
pub use median::MedianBlur;
pub use morph::Morph;
pub use niblack::Niblack;
pub use scharr::Scharr;
pub use sobel::Sobel;
pub use threshold::Threshold;
