//! Diagram generation: flowchart plan -> validated `<mxfile>` XML.
//!
//! Three steps in sequence: [`generate_diagram`] asks the model for raw
//! document text, [`extract`] peels markdown fences, comments and prose
//! off the answer, and [`validate`] parses the candidate and asserts the
//! root element.

pub mod extract;
pub mod generate;
pub mod prompt;
pub mod validate;

pub use extract::extract;
pub use generate::{DIAGRAM_MAX_TOKENS, DIAGRAM_TEMPERATURE, generate_diagram};
pub use validate::{ROOT_TAG, ValidateError, validate};
