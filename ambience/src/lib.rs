pub mod animator;
pub mod background;
pub mod card_stack;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod ease;
pub mod error;
pub mod generator;
pub mod hint;
pub mod listener;
pub mod marquee;
pub mod parallax;
pub mod shape;
pub mod tray;
pub mod utils;

pub use animator::{FallAnimator, FallTween, Landing, RainState, ShapePhase};
pub use background::Background;
pub use card_stack::{CardPose, CardStack, StackStep, card_stack, trigger_progress};
pub use carousel::{Carousel, FlipDirection};
pub use config::{BackgroundConfig, CursorConfig, FallMode};
pub use cursor::{CustomCursor, Trail};
pub use error::{Error, Result};
pub use generator::{generate_shapes, respawn, shape_count};
pub use hint::UsageHint;
pub use listener::{ListenerGuard, ListenerKind, ListenerRegistry};
pub use marquee::{Marquee, MarqueeDirection};
pub use parallax::Parallax;
pub use shape::{NeonColor, Shape, ShapeKind, Viewport};
pub use tray::{CollectionTray, SettledShape};
