//! Timing and interaction core of a click-track metronome.
//!
//! It is mainly targetted to run in a firmware with a single cooperative
//! control loop, sampling the button once per tick and passing the result
//! to hardware outputs. However, it has no dependency on any hardware and
//! may be driven by a simulated clock as well.
//!
//! Following is the flow of a single tick:
//!
//! ```text
//!          (InputSnapshot)
//!                 |
//!                 V
//!   [ Button ] -> (Action) -> [ Tempo / TapDetector / Edit ]
//!                                          |
//!                                          V
//!                       [ BeatScheduler ]  [ Display ]
//!                               |              |
//!                               +------+-------+
//!                                      |
//!                                      V
//!                               (DesiredOutput)
//!                                 |    |    |
//!                            [Click] [Pulse] [Screen]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

pub mod beat_scheduler;
pub mod configuration;
pub mod display;
pub mod edit;
pub mod input;
mod log;
pub mod metronome;
pub mod output;
pub mod tap_detector;
pub mod tempo;
pub mod time;

pub use configuration::Configuration;
pub use input::snapshot::Snapshot as InputSnapshot;
pub use metronome::Metronome;
pub use output::DesiredOutput;
pub use tempo::Tempo;
