use dp_tables::{
    dag::{DpDag, EdgeKind},
    problems::{common_substring::CommonSubstringProblem, edit_distance::EditDistanceProblem},
    TableEngine,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn substring_run_lights_up_a_diagonal() {
    let x = chars("bans");
    let y = chars("banana");
    let problem = CommonSubstringProblem::new(&x, &y);
    let solution = TableEngine::new(problem.clone()).solve();
    let dag = DpDag::build(&problem, &solution);

    assert_eq!(dag.nodes.len(), 5 * 7);
    assert!(dag.edges.iter().all(|e| e.kind == EdgeKind::Diagonal));
    let active: Vec<_> = dag.active_edges().collect();
    assert_eq!(active.len(), 2);
    let lit: Vec<_> = dag.nodes.iter().filter(|n| n.on_path).map(|n| (n.row, n.col, n.value)).collect();
    assert_eq!(lit, vec![(1, 1, 1), (2, 2, 2), (3, 3, 3)]);
}

#[test]
fn edit_distance_path_spans_the_grid() {
    let x = chars("SAT");
    let y = chars("SUN");
    let problem = EditDistanceProblem::new(&x, &y);
    let solution = TableEngine::new(problem.clone()).solve();
    let dag = DpDag::build(&problem, &solution);

    let first = dag.nodes.iter().find(|n| n.row == 0 && n.col == 0).unwrap();
    let last = dag.nodes.iter().find(|n| n.row == 3 && n.col == 3).unwrap();
    assert!(first.on_path && last.on_path);
    assert_eq!(last.value, 2);
    assert!(dag.active_edges().all(|e| e.kind == EdgeKind::Diagonal));
}
