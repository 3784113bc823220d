//! Core library for the portfolio showcase.
//!
//! The centrepiece is [`CarouselController`], a looping carousel with
//! autoplay, swipe gestures and direct navigation that the testimonial
//! section is built on. The remaining modules hold the static site content
//! and the small pieces of state behind the other sections (terminal
//! typewriter, project gallery, skill board) plus plain-text renderers.
//! Everything is synchronous and driven by elapsed time supplied by the
//! caller, so it can be exercised by tests and the command line front end
//! alike.

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod render;
pub mod script;
pub mod state;
pub mod timeline;
pub mod typewriter;

pub use carousel::{CarouselController, IndexChange, IndexObserver, PlaybackMode};
pub use config::{AppConfig, CarouselConfig, TypewriterConfig};
pub use content::{Project, SiteContent, Skill, SkillCategory, Testimonial};
pub use error::{Result, ShowcaseError};
pub use gallery::{ProjectFilter, ProjectGallery, SkillBoard};
pub use gesture::{swipe_power, GestureInterpreter};
pub use script::{run_script, ScriptStep};
pub use state::{CarouselState, Direction};
pub use timeline::{AutoplayScheduler, PlaybackClock, SchedulerStatus, MAX_FIRES_PER_ADVANCE};
pub use typewriter::TerminalTyper;
