use super::*;
use crate::assign::Assignment;
use crate::types::{Cycle, LatLon, NodeId, UserId};

#[test]
fn parses_all_three_sections() {
    let net = parse_network("2\n1 10.5 -3\n2 11 -3.5\n1\n1 2\n2\n7 0 0\n8 1.5 2.5\n").unwrap();
    assert_eq!(net.nodes.len(), 2);
    assert_eq!(net.nodes.get(NodeId(1)), Some(LatLon::new(10.5, -3.0)));
    assert_eq!(net.edges, vec![(NodeId(1), NodeId(2))]);
    assert_eq!(net.users.len(), 2);
    assert_eq!(net.users[1].id, UserId(8));
    assert_eq!(net.users[1].pos, LatLon::new(1.5, 2.5));
}

#[test]
fn tolerates_extra_spacing_and_crlf() {
    let net = parse_network("1\r\n  5   1  2 \r\n0\r\n0\r\n").unwrap();
    assert_eq!(net.nodes.get(NodeId(5)), Some(LatLon::new(1.0, 2.0)));
    assert!(net.edges.is_empty() && net.users.is_empty());
}

#[test]
fn duplicate_node_ids_keep_last_position() {
    let net = parse_network("2\n1 0 0\n1 5 5\n0\n0\n").unwrap();
    assert_eq!(net.nodes.len(), 1);
    assert_eq!(net.nodes.get(NodeId(1)), Some(LatLon::new(5.0, 5.0)));
}

#[test]
fn reports_line_of_first_problem() {
    let err = parse_network("2\n1 0 0\n2 0\n0\n0\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("3 fields"), "{err}");

    let err = parse_network("1\n1 0 north\n0\n0\n").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("longitude"), "{err}");

    let err = parse_network("1\n1 0 0\n1\n1 x\n0\n").unwrap_err();
    assert_eq!(err.line, 4);

    let err = parse_network("-1\n").unwrap_err();
    assert_eq!(err.line, 1);
}

#[test]
fn truncated_input_is_an_error() {
    let err = parse_network("2\n1 0 0\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("end of input"), "{err}");
    assert!(parse_network("").is_err());
}

#[test]
fn text_report_layout() {
    let cycles = vec![
        Cycle(vec![NodeId(1), NodeId(2), NodeId(3)]),
        Cycle(vec![NodeId(3), NodeId(1), NodeId(2)]),
    ];
    let assignment = Assignment {
        centroids: vec![LatLon::new(0.5, 0.5); 2],
        per_cycle: vec![vec![UserId(9), UserId(4)], vec![]],
    };
    let report = Report::new(cycles, assignment);
    assert_eq!(
        report.to_text(),
        "2\n3\n1 2 3\n2\n9 4\n3\n3 1 2\n0\n\n"
    );
}

#[test]
fn empty_report_is_a_single_zero() {
    assert_eq!(Report::default().to_text(), "0\n");
}

#[test]
fn huge_counts_fail_on_missing_records() {
    let err = parse_network("0\n18446744073709551615\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("end of input"), "{err}");

    let err = parse_network("0\n0\n1000000000000\n").unwrap_err();
    assert_eq!(err.line, 4);

    // one past usize::MAX is not a count at all
    let err = parse_network("0\n18446744073709551616\n").unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn report_without_assignment_has_no_centroids() {
    let cycles = vec![Cycle(vec![NodeId(1), NodeId(2), NodeId(3)])];
    let report = Report::new(cycles, Assignment::default());
    assert_eq!(report.cycles[0].centroid, None);
    assert!(report.cycles[0].users.is_empty());
    assert_eq!(report.to_text(), "1\n3\n1 2 3\n0\n\n");
}
