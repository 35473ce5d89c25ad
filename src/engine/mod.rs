//! Quiz engine: question generation, distractor generation, the kou jue
//! formatter and the per-session state machine. No egui in here; everything
//! takes an explicit `Rng` so tests can seed it.

pub mod kou_jue;
pub mod options;
pub mod question;
pub mod session;

pub use kou_jue::kou_jue;
pub use options::generate_options;
pub use question::random_fact;
pub use session::{QuizSession, Selection};
