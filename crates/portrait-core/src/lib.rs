//! Platform-independent core of the pointillism portrait.
//!
//! Nothing here touches browser APIs: the web front-end feeds in the dot map,
//! pointer position and frame timing, and supplies a [`render::Surface`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod dot;
pub mod error;
pub mod lifecycle;
pub mod motion;
pub mod render;
pub mod scene;
pub mod spring;
pub mod synth;

pub use clock::AnimationClock;
pub use config::*;
pub use dot::{filter_dots, load_dot_map, parse_dot_map, parse_rgb, Dot, DotColor, Rgb};
pub use error::DotMapError;
pub use lifecycle::Teardown;
pub use motion::Pointer;
pub use render::{RecordingSurface, Surface, Viewport};
pub use scene::{DotSnapshot, Layer, Phase, PointCloud};
pub use synth::AnimatedDot;
