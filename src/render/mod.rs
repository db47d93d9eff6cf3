pub mod layout;
pub mod scene;
pub mod surface;
pub mod visualizer;

pub use layout::{BalloonSlot, BalloonStyle, Layout};
pub use scene::{Scene, Sprite};
pub use surface::{AnsiSurface, Surface};
pub use visualizer::{AnimatedVisualizer, Animator, SummaryVisualizer, Visualizer, write_summary};
