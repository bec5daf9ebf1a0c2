//! Seeded sample graphs, one per notation family

use crate::graph::{Edge, Graph, Node};

/// Nodes as `(label, type, x, y)`
type NodeSpec = (&'static str, &'static str, f64, f64);

/// Edges as `(source index, target index, label, type)`
type EdgeSpec = (usize, usize, &'static str, &'static str);

fn assemble(id: &str, name: &str, nodes: &[NodeSpec], edges: &[EdgeSpec]) -> Graph {
    let mut graph = Graph::with_id(id, name);
    let nodes: Vec<Node> = nodes
        .iter()
        .map(|&(label, node_type, x, y)| Node::with_type(label, node_type).at((x, y)))
        .collect();
    for node in &nodes {
        graph.add_node(node.clone());
    }
    for &(source, target, label, edge_type) in edges {
        if let (Some(source), Some(target)) = (nodes.get(source), nodes.get(target)) {
            graph.add_edge(Edge::between(source, target, edge_type).with_label(label));
        }
    }
    graph
}

/// Four nodes joined in a diamond
pub fn basic_sample() -> Graph {
    assemble(
        "basic",
        "Basic Graph Example",
        &[
            ("Node A", "basic", 100.0, 100.0),
            ("Node B", "basic", 300.0, 100.0),
            ("Node C", "basic", 200.0, 250.0),
            ("Node D", "basic", 400.0, 200.0),
        ],
        &[
            (0, 1, "connects to", "basic"),
            (0, 2, "links to", "basic"),
            (1, 3, "flows to", "basic"),
            (2, 3, "merges with", "basic"),
        ],
    )
}

/// Approval workflow with one decision
pub fn process_sample() -> Graph {
    assemble(
        "process",
        "Process Workflow Example",
        &[
            ("Start", "start", 50.0, 150.0),
            ("Review Request", "task", 200.0, 150.0),
            ("Approve?", "decision", 350.0, 150.0),
            ("Process Request", "task", 500.0, 100.0),
            ("Reject Request", "task", 500.0, 200.0),
            ("End - Approved", "end", 650.0, 100.0),
            ("End - Rejected", "end", 650.0, 200.0),
        ],
        &[
            (0, 1, "begin", "flow"),
            (1, 2, "review complete", "flow"),
            (2, 3, "yes", "decision"),
            (2, 4, "no", "decision"),
            (3, 5, "complete", "flow"),
            (4, 6, "complete", "flow"),
        ],
    )
}

/// Small organisation chart
pub fn hierarchy_sample() -> Graph {
    assemble(
        "hierarchy",
        "Organization Hierarchy Example",
        &[
            ("CEO", "executive", 300.0, 50.0),
            ("CTO", "director", 150.0, 150.0),
            ("CFO", "director", 450.0, 150.0),
            ("Dev Lead", "manager", 75.0, 250.0),
            ("QA Lead", "manager", 225.0, 250.0),
            ("Finance Mgr", "manager", 450.0, 250.0),
            ("Developer 1", "employee", 25.0, 350.0),
            ("Developer 2", "employee", 125.0, 350.0),
            ("QA Engineer", "employee", 225.0, 350.0),
        ],
        &[
            (0, 1, "reports to", "hierarchy"),
            (0, 2, "reports to", "hierarchy"),
            (1, 3, "manages", "hierarchy"),
            (1, 4, "manages", "hierarchy"),
            (2, 5, "manages", "hierarchy"),
            (3, 6, "supervises", "hierarchy"),
            (3, 7, "supervises", "hierarchy"),
            (4, 8, "supervises", "hierarchy"),
        ],
    )
}

/// Every sample graph, in seeding order
pub fn all_samples() -> Vec<Graph> {
    vec![basic_sample(), process_sample(), hierarchy_sample()]
}
