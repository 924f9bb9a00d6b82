//! Greedy 2-approximation for min-cost knapsack.

use std::cmp::Ordering;

/// Returns a feasible selection of at most twice the optimal cost,
/// or `(-1.0, [])` when the demand exceeds the total available weight.
///
/// Items are taken in ascending cost-density order until the demand is
/// met; the closing item is then used to evict any trailing picks whose
/// weight fits inside the leftover slack. Runs in `O(n log n)`.
///
/// # References
///
/// - Csirik & Frenk (1991), simplified greedy for min-cost knapsack
pub fn greedy_half(cost: &[f64], weight: &[f64], demand: f64) -> (f64, Vec<usize>) {
    if demand <= 0.0 {
        return (0.0, Vec::new());
    }
    if cost.is_empty() || weight.iter().sum::<f64>() < demand {
        return (-1.0, Vec::new());
    }

    let mut order: Vec<usize> = (0..cost.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = cost[a] / weight[a];
        let rb = cost[b] / weight[b];
        ra.partial_cmp(&rb)
            .unwrap_or(Ordering::Equal)
            .then_with(|| weight[a].partial_cmp(&weight[b]).unwrap_or(Ordering::Equal))
            .then_with(|| a.cmp(&b))
    });

    let mut residual = demand;
    let mut value = 0.0;
    let mut sol: Vec<usize> = Vec::new();
    let mut closer = None;

    for &i in &order {
        if residual - weight[i] <= 0.0 {
            closer = Some(i);
            break;
        }
        sol.push(i);
        value += cost[i];
        residual -= weight[i];
    }

    // total weight covers the demand, so some item closes the gap
    let closer = closer.expect("demand is met before the order is exhausted");

    // evict trailing picks made redundant by the closing item
    while let Some(&last) = sol.last() {
        if weight[last] <= weight[closer] - residual {
            residual += weight[last];
            value -= cost[last];
            sol.pop();
        } else {
            break;
        }
    }

    sol.push(closer);
    value += cost[closer];

    (value, sol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_half_vectors() {
        let cases: &[(&[f64], &[f64], f64, &[usize])] = &[
            (&[1.0, 1.0, 1.0, 1.0], &[1.0, 1.0, 1.0, 1.0], 2.0, &[0, 1]),
            (&[1.0, 1.0, 1.0, 3.0], &[1.0, 1.0, 1.0, 3.0], 3.0, &[0, 1, 2]),
            (&[10.0], &[10.0], 10.0, &[0]),
            (&[2.0, 3.0, 3.0, 4.0], &[2.0, 3.0, 3.0, 4.0], 6.0, &[0, 1, 2]),
            (&[1.0, 1.0, 2.0, 5.0], &[10.0, 5.0, 10.0, 5.0], 20.0, &[0, 2]),
            (
                &[1.0, 1.0, 1.0, 3.0, 1.0],
                &[10.0, 5.0, 5.0, 15.0, 1.0],
                25.0,
                &[0, 3],
            ),
        ];
        for (cost, weight, demand, expected) in cases {
            let (_, mut sol) = greedy_half(cost, weight, *demand);
            sol.sort_unstable();
            assert_eq!(&sol, expected, "instance {cost:?} {weight:?} {demand}");
        }
    }

    #[test]
    fn test_greedy_half_empty() {
        assert_eq!(greedy_half(&[], &[], 0.0), (0.0, vec![]));
        assert_eq!(greedy_half(&[], &[], 1.0), (-1.0, vec![]));
    }

    #[test]
    fn test_greedy_half_infeasible() {
        let (val, sol) = greedy_half(&[1.0, 1.0], &[1.0, 1.0], 5.0);
        assert_eq!(val, -1.0);
        assert!(sol.is_empty());
    }

    #[test]
    fn test_greedy_half_is_feasible_and_within_factor_two() {
        use crate::random::create_rng;
        use rand::Rng;

        let mut rng = create_rng(7);

        for _ in 0..60 {
            let n = rng.random_range(2..8usize);
            let cost: Vec<f64> = (0..n).map(|_| rng.random_range(1..10u32) as f64).collect();
            let weight: Vec<f64> = (0..n).map(|_| rng.random_range(1..7u32) as f64).collect();
            let total: f64 = weight.iter().sum();
            let demand = rng.random_range(1.0..total.max(1.5));

            let (val, sol) = greedy_half(&cost, &weight, demand);
            let covered: f64 = sol.iter().map(|&i| weight[i]).sum();
            assert!(covered >= demand, "selection must cover the demand");

            let mut best = f64::INFINITY;
            for mask in 0u32..(1 << n) {
                let (mut c, mut w) = (0.0, 0.0);
                for i in 0..n {
                    if mask & (1 << i) != 0 {
                        c += cost[i];
                        w += weight[i];
                    }
                }
                if w >= demand && c < best {
                    best = c;
                }
            }
            assert!(
                val <= 2.0 * best + 1e-9,
                "cost {cost:?} weight {weight:?} demand {demand}: {val} > 2 * {best}"
            );
        }
    }
}
