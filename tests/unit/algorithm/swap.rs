//! Tests for disjoint swap pairs and presentation permutations

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stimgrid::PatternError;
    use stimgrid::algorithm::swap::{ElementSwapper, SwapPlan};
    use stimgrid::spatial::grid::{ExpandedGrid, GridSpec};

    fn assert_disjoint(plan: &SwapPlan) {
        let indices = plan.indices();
        let unique: HashSet<usize> = indices.iter().copied().collect();
        assert_eq!(unique.len(), indices.len());
        for &(a, b) in plan.pairs() {
            assert!(a < b);
        }
    }

    // Tests that n pairs move exactly 2n indices
    // Verified by allowing an index to be drawn twice
    #[test]
    fn test_swap_pairs_permutation() {
        let swapper = ElementSwapper::new(10).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let plan = swapper.swap_pairs(3, &mut rng).unwrap();

        assert_eq!(plan.len(), 3);
        assert_disjoint(&plan);

        let order = plan.permutation();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());

        let moved = order
            .iter()
            .enumerate()
            .filter(|(position, index)| position != *index)
            .count();
        assert_eq!(moved, 6);
    }

    // Tests the pair count limit and zero cells
    // Verified by comparing n_pairs against total_cells
    #[test]
    fn test_swap_pairs_too_many() {
        let swapper = ElementSwapper::new(5).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            swapper.swap_pairs(3, &mut rng),
            Err(PatternError::InvalidParameter {
                parameter: "n_pairs",
                ..
            })
        ));
        assert!(swapper.swap_pairs(2, &mut rng).is_ok());
        assert!(ElementSwapper::new(0).is_err());
    }

    // Tests forbidden cells are never drawn and can exhaust the pool
    // Verified by ignoring the forbidden mask
    #[test]
    fn test_forbidden_cells() {
        let swapper = ElementSwapper::new(6)
            .unwrap()
            .with_forbidden(&[0, 1, 2])
            .unwrap();
        assert_eq!(swapper.available(), vec![3, 4, 5]);

        let mut rng = StdRng::seed_from_u64(8);
        let plan = swapper.swap_pairs(1, &mut rng).unwrap();
        assert!(plan.indices().iter().all(|&index| index >= 3));

        assert!(matches!(
            swapper.swap_pairs(2, &mut rng),
            Err(PatternError::SwapExhausted {
                requested: 2,
                completed: 1
            })
        ));
        assert!(ElementSwapper::new(3).unwrap().with_forbidden(&[3]).is_err());
    }

    // Tests distinct pairs always join different fingerprints
    // Verified by accepting equal fingerprints
    #[test]
    fn test_swap_distinct_pairs() {
        let fingerprints = ["a", "a", "b", "b", "c", "a"];
        let swapper = ElementSwapper::new(fingerprints.len()).unwrap();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = swapper
                .swap_distinct_pairs(2, |index| fingerprints.get(index).copied(), &mut rng)
                .unwrap();
            assert_disjoint(&plan);
            for &(a, b) in plan.pairs() {
                assert_ne!(fingerprints.get(a), fingerprints.get(b));
            }
        }
    }

    // Tests every valid pair is drawn with equal frequency
    // Verified by drawing the partner uniformly after a uniform first cell
    #[test]
    fn test_swap_distinct_pairs_uniform() {
        let fingerprints = ['a', 'b', 'b', 'c'];
        let swapper = ElementSwapper::new(fingerprints.len()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let trials = 20_000;

        let mut counts = HashMap::new();
        for _ in 0..trials {
            let plan = swapper
                .swap_distinct_pairs(1, |index| fingerprints.get(index).copied(), &mut rng)
                .unwrap();
            *counts.entry(plan.pairs().to_vec()).or_insert(0_usize) += 1;
        }

        assert_eq!(counts.len(), 5);
        for (pair, count) in counts {
            let frequency = count as f64 / f64::from(trials);
            assert!((frequency - 0.2).abs() < 0.02, "{pair:?} drawn at {frequency}");
        }
    }

    // Tests exhaustion once remaining cells share a fingerprint
    // Verified by returning the partial plan
    #[test]
    fn test_swap_distinct_pairs_exhausted() {
        let fingerprints = [1, 1, 1, 2];
        let swapper = ElementSwapper::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let plan = swapper
            .swap_distinct_pairs(1, |index| fingerprints.get(index).copied(), &mut rng)
            .unwrap();
        assert!(plan.indices().contains(&3));

        assert!(matches!(
            swapper.swap_distinct_pairs(2, |index| fingerprints.get(index).copied(), &mut rng),
            Err(PatternError::SwapExhausted {
                requested: 2,
                completed: 1
            })
        ));
    }

    // Tests merging disjoint plans and rejecting overlaps
    // Verified by skipping the overlap check
    #[test]
    fn test_merged() {
        let swapper = ElementSwapper::new(8).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let first = swapper.swap_pairs(2, &mut rng).unwrap();
        let second = swapper
            .clone()
            .with_forbidden(&first.indices())
            .unwrap()
            .swap_pairs(2, &mut rng)
            .unwrap();

        let merged = first.merged(&second).unwrap();
        assert_eq!(merged.len(), 4);
        assert_disjoint(&merged);

        assert!(first.merged(&first).is_err());
        assert!(first.merged(&SwapPlan::empty(9)).is_err());
        assert_eq!(first.merged(&SwapPlan::empty(8)).unwrap(), first);
    }

    // Tests applying a plan swaps grid cells without touching the source
    // Verified by applying the inverse permutation
    #[test]
    fn test_apply() {
        let spec = GridSpec::new(1, 4).unwrap();
        let grid = ExpandedGrid::from_cells(spec, vec!['a', 'b', 'c', 'd']).unwrap();
        let swapper = ElementSwapper::new(4).unwrap().with_forbidden(&[1, 2]).unwrap();
        let plan = swapper.swap_pairs(1, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(plan.pairs(), &[(0, 3)]);
        assert_eq!(plan.apply(&grid).unwrap().to_vec(), vec!['d', 'b', 'c', 'a']);
        assert_eq!(grid.to_vec(), vec!['a', 'b', 'c', 'd']);
        assert!(SwapPlan::empty(4).is_empty());
    }
}
