// ==========================================
// 再平衡不变量属性测试
// ==========================================
// 测试目标: 对任意合法输入验证下限、顺序、确定性与收敛性
// ==========================================


use lesson_balance::{BalanceOrchestrator, BloomLevel, Phase, RedistributionStrategy};
use proptest::prelude::*;
use test_helpers::{context, phases, total};

fn levels_strategy() -> impl Strategy<Value = Vec<BloomLevel>> {
    prop::collection::vec(
        prop::sample::select(BloomLevel::ALL.to_vec()),
        0..4,
    )
}

/// 快照 + 在 1~2 个事件上加时后的当前事件
fn edited_lesson() -> impl Strategy<Value = (Vec<Phase>, Vec<Phase>)> {
    (
        prop::array::uniform9(1i32..=40),
        prop::sample::subsequence((0..9).collect::<Vec<usize>>(), 1..=2),
        1i32..=10,
    )
        .prop_map(|(base, edited, extra)| {
            let snapshot = phases(base);
            let mut current = snapshot.clone();
            for pos in edited {
                current[pos].duration += extra;
            }
            (snapshot, current)
        })
}

proptest! {
    #[test]
    fn floor_and_order_are_preserved(
        durations in prop::array::uniform9(1i32..=40),
        target in 5i32..=480,
        levels in levels_strategy(),
    ) {
        let input = phases(durations);
        let result = BalanceOrchestrator::with_defaults()
            .rebalance(&input, &context(target, &levels), None)
            .unwrap();

        prop_assert_eq!(result.phases.len(), 9);
        for (i, phase) in result.phases.iter().enumerate() {
            prop_assert_eq!(phase.index as usize, i + 1);
            prop_assert!(phase.duration >= 1);
        }
        prop_assert_eq!(result.final_difference_after, (total(&result.phases) - target).abs());
    }

    #[test]
    fn rebalance_is_deterministic(
        durations in prop::array::uniform9(1i32..=40),
        target in 5i32..=480,
        levels in levels_strategy(),
    ) {
        let input = phases(durations);
        let ctx = context(target, &levels);
        let orchestrator = BalanceOrchestrator::with_defaults();

        let first = orchestrator.rebalance(&input, &ctx, None).unwrap();
        let second = orchestrator.rebalance(&input, &ctx, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn small_gaps_converge(
        durations in prop::array::uniform9(1i32..=40),
        offset in -2i32..=2,
    ) {
        let input = phases(durations);
        let target = total(&input) + offset;
        prop_assume!(target >= 9);

        let result = BalanceOrchestrator::with_defaults()
            .rebalance(&input, &context(target, &[]), None)
            .unwrap();
        prop_assert!(result.final_difference_after <= 1);
    }

    #[test]
    fn growth_always_converges(
        durations in prop::array::uniform9(1i32..=40),
        growth in 0i32..=120,
        levels in levels_strategy(),
    ) {
        let input = phases(durations);
        let target = total(&input) + growth;

        let result = BalanceOrchestrator::with_defaults()
            .rebalance(&input, &context(target, &levels), None)
            .unwrap();
        prop_assert!(result.final_difference_after <= 1);
    }

    #[test]
    fn exact_totals_are_untouched(durations in prop::array::uniform9(1i32..=40)) {
        let input = phases(durations);
        let result = BalanceOrchestrator::with_defaults()
            .rebalance(&input, &context(total(&input), &[]), None)
            .unwrap();

        prop_assert_eq!(result.strategy.strategy, RedistributionStrategy::None);
        prop_assert!(result.adjustments.is_empty());
        prop_assert_eq!(result.phases, input);
    }

    #[test]
    fn edits_with_snapshot_keep_floor_order_and_converge(
        (snapshot, current) in edited_lesson(),
        offset in -5i32..=5,
    ) {
        let target = total(&current) + offset;
        prop_assume!(target >= 9);

        let result = BalanceOrchestrator::with_defaults()
            .rebalance(&current, &context(target, &[]), Some(&snapshot))
            .unwrap();

        for (i, phase) in result.phases.iter().enumerate() {
            prop_assert_eq!(phase.index as usize, i + 1);
            prop_assert!(phase.duration >= 1);
        }
        if offset.abs() <= 2 || offset > 0 {
            prop_assert!(result.final_difference_after <= 1);
        }

        // 就近调整且未微调时,用户修改过的事件保持不变
        if result.strategy.strategy == RedistributionStrategy::Adjacent
            && !result.strategy.micro_adjusted
        {
            for (before, after) in current.iter().zip(&result.phases) {
                if before.duration != snapshot[before.index as usize - 1].duration {
                    prop_assert_eq!(before.duration, after.duration);
                }
            }
        }
    }
}
