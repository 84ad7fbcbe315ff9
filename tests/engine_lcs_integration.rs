use dp_tables::{
    lcs_len, longest_palindromic_subsequence,
    problems::lcs::LcsProblem,
    utils::reversed,
    TableEngine,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn valid_path(path: &[(usize, usize)], n: usize, m: usize) -> bool {
    if *path.first().unwrap() != (0, 0) {
        return false;
    }
    if *path.last().unwrap() != (n, m) {
        return false;
    }
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        let di = b.0 as isize - a.0 as isize;
        let dj = b.1 as isize - a.1 as isize;
        match (di, dj) {
            (1, 0) | (0, 1) | (1, 1) => {}
            _ => return false,
        }
    }
    true
}

#[test]
fn agca_palindromic_subsequence_is_three() {
    let x = chars("agca");
    let y = reversed(&x);
    assert_eq!(y, chars("acga"));

    let problem = LcsProblem::new(&x, &y);
    let (len, path) = TableEngine::new(problem.clone()).run();
    assert_eq!(len, 3);
    assert!(valid_path(&path, 4, 4));

    let witness = problem.subsequence(&path);
    assert_eq!(witness.len(), 3);
    assert!(witness == chars("aca") || witness == chars("aga"));
    assert_eq!(longest_palindromic_subsequence(&x), 3);
}

#[test]
fn identical_sequences_match_fully() {
    let x = chars("dynamic");
    assert_eq!(lcs_len(&x, &x), x.len());
}

#[test]
fn empty_side_gives_zero() {
    let x = chars("abc");
    let empty: Vec<char> = Vec::new();
    assert_eq!(lcs_len(&x, &empty), 0);
    assert_eq!(lcs_len(&empty, &x), 0);
}

#[test]
fn swapping_arguments_transposes_the_table() {
    let x = chars("ABCBDAB");
    let y = chars("BDCABA");
    let forward = TableEngine::new(LcsProblem::new(&x, &y)).solve();
    let backward = TableEngine::new(LcsProblem::new(&y, &x)).solve();
    assert_eq!(forward.cost, backward.cost);
    for i in 0..=x.len() {
        for j in 0..=y.len() {
            assert_eq!(forward.table.get(i, j), backward.table.get(j, i));
        }
    }
}

#[test]
fn first_row_and_column_stay_zero() {
    let x = chars("banana");
    let y = chars("ananas");
    let table = TableEngine::new(LcsProblem::new(&x, &y)).solve().table;
    assert!(table.row(0).iter().all(|&v| v == 0));
    assert!((0..table.rows()).all(|i| table.get(i, 0) == 0));
}
