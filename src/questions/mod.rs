//! Questions module - answers, validators, choice providers and the question table

pub mod answers;
pub mod choices;
pub mod graph;
pub mod validate;

pub use answers::*;
pub use choices::*;
pub use graph::{question_graph, ChoiceSource, QuestionKind, QuestionSpec, SessionContext};
pub use validate::*;
