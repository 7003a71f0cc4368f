//! Tests for the Mermaid diagram exporter.
mod common;
use common::*;
use flowengine::graph::{DiagramFormat, export};
use flowengine::prelude::*;

#[test]
fn test_one_node_per_step_in_declaration_order() {
    let flow = create_intake_flow();
    let diagram = MermaidExporter::new(&flow).export();
    let lines: Vec<&str> = diagram.lines().collect();

    assert_eq!(lines[0], "flowchart TD");
    let nodes: Vec<&str> = lines
        .iter()
        .filter(|l| l.contains("[\""))
        .map(|l| l.trim().split('[').next().unwrap())
        .collect();
    assert_eq!(nodes, flow.step_ids());
}

#[test]
fn test_one_edge_per_transition_in_declaration_order() {
    let flow = create_intake_flow();
    let diagram = MermaidExporter::new(&flow).export();
    let edges: Vec<&str> = diagram.lines().filter(|l| l.contains("-->")).collect();

    let transition_count: usize = flow.steps().iter().map(|s| s.transitions.len()).sum();
    assert_eq!(edges.len(), transition_count);
    assert_eq!(
        edges[0].trim(),
        "greeting -->|\"greeting == FileReturn\"| income_info"
    );
    assert_eq!(edges[2].trim(), "greeting --> info");
    assert_eq!(
        edges[3].trim(),
        "income_info -->|\"income_info contains Business\"| business_details"
    );
}

#[test]
fn test_export_is_idempotent() {
    let flow = create_intake_flow();
    assert_eq!(
        export(&flow, DiagramFormat::Mermaid),
        export(&flow, DiagramFormat::Mermaid)
    );
}

#[test]
fn test_dangling_edges_are_rendered_literally() {
    let flow = FlowDefinition::builder("a")
        .step(Step::new("a", StepKind::Text, "A").transition("ghost"))
        .build()
        .unwrap();
    let diagram = export(&flow, DiagramFormat::default());
    assert!(diagram.contains("    a --> ghost\n"));
    assert!(!diagram.contains("ghost[\""));
}

#[test]
fn test_ids_that_are_not_plain_keys_get_positional_keys() {
    let flow = FlowDefinition::builder("end")
        .step(Step::new("end", StepKind::Display, "line one\nline two").transition("next step"))
        .step(
            Step::new("next step", StepKind::Text, "x")
                .transition_if("lost step", Predicate::equals("next step", "y"))
                .transition("income_info"),
        )
        .build()
        .unwrap();

    let expected = "flowchart TD\n\
                    \x20   node__0[\"line one<br/>line two\"]\n\
                    \x20   node__1[\"x\"]\n\
                    \x20   node__0 --> node__1\n\
                    \x20   node__1 -->|\"next step == y\"| missing__0[\"lost step\"]\n\
                    \x20   node__1 --> income_info\n";
    assert_eq!(MermaidExporter::new(&flow).export(), expected);
}

#[test]
fn test_plain_ids_keep_their_names_as_keys() {
    let flow = FlowDefinition::builder("End")
        .step(Step::new("End", StepKind::Text, "Last").transition("step_2"))
        .step(Step::new("step_2", StepKind::Text, "Two"))
        .build()
        .unwrap();
    let diagram = MermaidExporter::new(&flow).export();
    assert!(diagram.contains("    End[\"Last\"]\n"));
    assert!(diagram.contains("    End --> step_2\n"));
}
