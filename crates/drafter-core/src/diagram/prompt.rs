//! Prompt contract for the diagram stage.
//!
//! The contract pins down everything the validator does not check:
//! the fixed skeleton, the per-kind cell styles, id uniqueness, edge
//! endpoint integrity, label escaping, and the top-to-bottom layout.
//! If the model breaks one of those promises the document still passes
//! the (root-tag-only) validator, so the contract is deliberately blunt.

/// Role-setting system prompt for the diagram stage.
pub const SYSTEM_PROMPT: &str = "You are an expert at generating draw.io XML. \
                                 Output ONLY raw XML without any markdown or explanations.";

/// Style string for generic (Start, Process, End) vertex cells.
pub const NODE_STYLE: &str =
    "rounded=1;whiteSpace=wrap;html=1;fillColor=#d5e8d4;strokeColor=#82b366;fontColor=#36393d;shadow=1;";

/// Style string for Decision vertex cells: diamond shape, contrasting fill.
pub const DECISION_STYLE: &str =
    "rhombus;whiteSpace=wrap;html=1;fillColor=#ffe6cc;strokeColor=#d79b00;fontColor=#36393d;shadow=1;";

/// Style string for edge cells: bold stroke, block arrow.
pub const EDGE_STYLE: &str = "endArrow=block;strokeWidth=2;strokeColor=#404040;";

/// Document skeleton the model must preserve verbatim. The first two
/// cells are the root container and its child layer; every generated
/// cell goes under them with `parent="1"`.
const SKELETON: &str = r#"<mxfile><diagram><mxGraphModel><root>
  <mxCell id="0"/>
  <mxCell id="1" parent="0"/>
  <!-- ADD ALL NODES AND EDGES HERE -->
</root></mxGraphModel></diagram></mxfile>"#;

/// Build the user prompt for turning `plan` into a draw.io document.
pub fn user_prompt(plan: &str) -> String {
    format!(
        r#"Generate a complete diagrams.net/draw.io XML for this flowchart plan:

{plan}

Strict requirements:
- Output ONLY one <mxfile>...</mxfile> string. No markdown, no commentary, no code fences.
- Use this skeleton (do not reorder the first two cells):
  {SKELETON}

- Each node (vertex) must look like:
  <mxCell id="A" value="Label" style="{NODE_STYLE}" vertex="1" parent="1">
    <mxGeometry x="[number]" y="[number]" width="120" height="50" as="geometry"/>
  </mxCell>

- **CRITICAL**: For **Decision** nodes (usually diamond shape and short label), use this style for contrast:
  <mxCell id="B" value="Decision" style="{DECISION_STYLE}" vertex="1" parent="1">
    <mxGeometry x="[number]" y="[number]" width="100" height="100" as="geometry"/>
  </mxCell>

- Each edge must look like (use thicker stroke and a clear arrow):
  <mxCell id="e1" value="yes" edge="1" parent="1" source="A" target="B" style="{EDGE_STYLE}">
    <mxGeometry relative="1" as="geometry"/>
  </mxCell>

- All ids unique; every edge's source/target id must exist; escape &, <, > in labels.
- Layout for **Organization** and **Readability**: Arrange shapes in a clear, consistent top-to-bottom flow with adequate spacing. **Do not overlap components.**
- Position nodes: Start at x="350" y="20", increment y by 120 for each level
- IDs: Use the exact IDs from the plan (e.g., A, B, C) for nodes, and e1, e2, e3 for edges

OUTPUT ONLY THE XML STRING, NOTHING ELSE."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_plan() {
        let prompt = user_prompt("NODES:\n- [A] Start (Type: Start)");
        assert!(prompt.contains("- [A] Start (Type: Start)"));
    }

    #[test]
    fn prompt_contains_skeleton_cells() {
        let prompt = user_prompt("plan");
        assert!(prompt.contains(r#"<mxCell id="0"/>"#));
        assert!(prompt.contains(r#"<mxCell id="1" parent="0"/>"#));
        assert!(prompt.contains("do not reorder the first two cells"));
    }

    #[test]
    fn prompt_contains_all_three_styles() {
        let prompt = user_prompt("plan");
        assert!(prompt.contains(NODE_STYLE));
        assert!(prompt.contains(DECISION_STYLE));
        assert!(prompt.contains(EDGE_STYLE));
    }

    #[test]
    fn decision_style_is_a_distinct_diamond() {
        assert!(DECISION_STYLE.starts_with("rhombus;"));
        assert_ne!(NODE_STYLE, DECISION_STYLE);
    }

    #[test]
    fn prompt_demands_escaping_and_unique_ids() {
        let prompt = user_prompt("plan");
        assert!(prompt.contains("All ids unique"));
        assert!(prompt.contains("every edge's source/target id must exist"));
        assert!(prompt.contains("escape &, <, > in labels"));
    }

    #[test]
    fn prompt_fixes_layout_origin_and_increment() {
        let prompt = user_prompt("plan");
        assert!(prompt.contains(r#"Start at x="350" y="20""#));
        assert!(prompt.contains("increment y by 120"));
        assert!(prompt.contains("Do not overlap"));
    }

    #[test]
    fn prompt_forbids_wrapping() {
        let prompt = user_prompt("plan");
        assert!(prompt.contains("No markdown, no commentary, no code fences"));
        assert!(prompt.contains("OUTPUT ONLY THE XML STRING, NOTHING ELSE."));
    }
}
