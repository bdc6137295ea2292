
use itertools::Itertools;

/// Exact number of permutations of `0..succ.len()` that respect every edge.
pub(crate) fn brute_force_count(succ: &[Vec<usize>]) -> u128 {
    let n = succ.len();
    (0..n)
        .permutations(n)
        .filter(|order| {
            let mut pos = vec![0; n];
            for (p, &item) in order.iter().enumerate() {
                pos[item] = p;
            }
            succ.iter().enumerate().all(|(i, js)| js.iter().all(|&j| pos[i] < pos[j]))
        })
        .count() as u128
}

pub(crate) fn successors_of(relation: &crate::Relation) -> Vec<Vec<usize>> {
    (0..relation.len()).map(|i| relation.successors(i).to_vec()).collect()
}

#[test]
fn test_oracle_sanity() {
    assert_eq!(brute_force_count(&[vec![], vec![], vec![]]), 6);
    assert_eq!(brute_force_count(&[vec![1], vec![2], vec![]]), 1);
    assert_eq!(brute_force_count(&[vec![1], vec![], vec![]]), 3);
}
