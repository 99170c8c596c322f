// Interview preparation: question sets with model answers, document
// correction, and feedback on practice answers.

pub mod correction;
pub mod feedback;
pub mod handlers;
pub mod prompts;
pub mod questions;
