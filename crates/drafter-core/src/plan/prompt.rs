//! Prompt contract for the plan stage.
//!
//! The model must answer with nothing but the two-section notation below.
//! The plan is never parsed by this crate -- it is handed opaquely to the
//! diagram stage, where the model itself interprets it.

/// Role-setting system prompt for the plan stage.
pub const SYSTEM_PROMPT: &str = "You are an expert solution architect.";

/// The notation the model must emit, verbatim in the prompt.
const PLAN_FORMAT: &str = "NODES:\n\
                           - [ID] Label (Type: Start, Process, Decision, or End)\n\
                           EDGES:\n\
                           - ID -> ID : Label";

/// Build the user prompt for turning `instruction` into a flowchart plan.
pub fn user_prompt(instruction: &str) -> String {
    format!(
        "Create a flowchart plan for: \"{instruction}\".\n\n\
         Output ONLY this format:\n\
         {PLAN_FORMAT}\n\n\
         Keep IDs short (A, B, C). Keep labels concise."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_both_sections() {
        let prompt = user_prompt("user login flow");
        assert!(prompt.contains("NODES:"));
        assert!(prompt.contains("EDGES:"));
    }

    #[test]
    fn prompt_embeds_the_instruction() {
        let prompt = user_prompt("user login flow");
        assert!(prompt.contains("\"user login flow\""));
    }

    #[test]
    fn prompt_enumerates_node_kinds() {
        let prompt = user_prompt("x");
        assert!(prompt.contains("Start, Process, Decision, or End"));
    }

    #[test]
    fn prompt_constrains_ids_and_labels() {
        let prompt = user_prompt("x");
        assert!(prompt.contains("Keep IDs short (A, B, C)"));
        assert!(prompt.contains("Keep labels concise"));
        assert!(prompt.contains("Output ONLY this format"));
    }

    #[test]
    fn prompt_shows_edge_notation() {
        let prompt = user_prompt("x");
        assert!(prompt.contains("- ID -> ID : Label"));
    }
}
