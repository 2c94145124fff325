//! Injectable runtime services: timers, randomness, wall clock and audio.

mod audio;
mod clock;
mod random;
mod scheduler;

pub use audio::{AudioCue, AudioCues, RecordingAudio, SilentAudio};
pub use clock::{format_timestamp, Clock, FixedClock, LocalClock};
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use scheduler::{ManualScheduler, RepeatingTask, Scheduler, Task, TimerHandle};
