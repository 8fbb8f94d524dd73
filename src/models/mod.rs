mod group;
mod question;
mod shared_data;

pub use group::Group;
pub use question::{AnswerSpec, Question, QuizQuestion, Unit};
pub use shared_data::{DataBlock, SharedData};
