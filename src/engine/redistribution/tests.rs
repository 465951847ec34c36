use super::*;
use crate::domain::phase::total_minutes;

// ==========================================
// 测试辅助函数
// ==========================================

/// 按时长数组创建九个事件
fn phases(durations: [i32; 9]) -> Vec<Phase> {
    durations
        .iter()
        .enumerate()
        .map(|(i, d)| Phase::new((i + 1) as u8, *d))
        .collect()
}

fn durations(phases: &[Phase]) -> Vec<i32> {
    phases.iter().map(|p| p.duration).collect()
}

fn modified(indices: &[u8]) -> BTreeSet<u8> {
    indices.iter().copied().collect()
}

// ==========================================
// 按比例分配
// ==========================================

#[test]
fn test_proportional_uniform_when_all_at_floor() {
    let input = phases([1; 9]);
    let result = redistribute_proportional(&input, 18);
    assert_eq!(durations(&result), vec![2; 9]);
    assert_eq!(total_minutes(&result), 18);
}

#[test]
fn test_proportional_follows_flexible_share() {
    // flexible = [9, 0, 9, 0, 0, 0, 0, 0, 0] → 各占一半
    let input = phases([10, 1, 10, 1, 1, 1, 1, 1, 1]);
    let result = redistribute_proportional(&input, 37);
    assert_eq!(durations(&result), vec![15, 1, 15, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn test_proportional_shrink_respects_floor() {
    let input = phases([2, 2, 2, 2, 2, 2, 2, 2, 2]);
    let result = redistribute_proportional(&input, 5);
    assert!(result.iter().all(|p| p.duration >= 1));
    assert_eq!(total_minutes(&result), 9);
}

#[test]
fn test_proportional_does_not_mutate_input() {
    let input = phases([5; 9]);
    let before = input.clone();
    let _ = redistribute_proportional(&input, 70);
    assert_eq!(input, before);
}

// ==========================================
// 教学优先级分配
// ==========================================

#[test]
fn test_pedagogical_balanced_growth_hits_target() {
    let table = FlexibilityTable::default();
    let input = phases([5; 9]);
    let result = redistribute_pedagogical(&input, 60, LessonFocus::Balanced, &table);
    // 15 * w_i, w = flex / 5.5
    assert_eq!(durations(&result), vec![7, 8, 7, 6, 6, 6, 7, 6, 7]);
    assert_eq!(total_minutes(&result), 60);
}

#[test]
fn test_pedagogical_theory_protects_present_content_when_shrinking() {
    let table = FlexibilityTable::default();
    let input = phases([5, 5, 8, 30, 10, 10, 6, 5, 6]);
    let theory = redistribute_pedagogical(&input, 65, LessonFocus::Theoretical, &table);
    let practice = redistribute_pedagogical(&input, 65, LessonFocus::Practical, &table);

    let theory_cut = input[3].duration - theory[3].duration;
    let practice_cut = input[3].duration - practice[3].duration;
    assert!(theory_cut < practice_cut);
}

#[test]
fn test_pedagogical_uses_table_row() {
    let mut table = FlexibilityTable::default();
    // 仅事件 6 可伸缩
    table.practical = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    let input = phases([5; 9]);
    let result = redistribute_pedagogical(&input, 57, LessonFocus::Practical, &table);
    assert_eq!(durations(&result), vec![5, 5, 5, 5, 5, 17, 5, 5, 5]);
}

// ==========================================
// 就近调整
// ==========================================

#[test]
fn test_adjacent_candidates_clip_and_exclude_modified() {
    assert_eq!(adjacent_candidates(&modified(&[1])), modified(&[2]));
    assert_eq!(adjacent_candidates(&modified(&[9])), modified(&[8]));
    assert_eq!(adjacent_candidates(&modified(&[4, 5])), modified(&[3, 6]));
    assert_eq!(adjacent_candidates(&modified(&[3, 5])), modified(&[2, 4, 6]));
    assert!(adjacent_candidates(&BTreeSet::new()).is_empty());
}

#[test]
fn test_adjacent_grows_neighbours_when_lesson_needs_time() {
    let mut input = phases([5; 9]);
    input[3].duration = 20; // total 60
    let result = redistribute_adjacent(&input, 63, &modified(&[4]));

    // round(3 / 2) = 2
    assert_eq!(durations(&result), vec![5, 5, 7, 20, 7, 5, 5, 5, 5]);
}

#[test]
fn test_adjacent_shrinks_neighbours_when_lesson_needs_less() {
    let input = phases([5, 6, 5, 20, 5, 5, 5, 5, 5]);
    let result = redistribute_adjacent(&input, 57, &modified(&[1]));
    // 仅事件 2 为候选: -4
    assert_eq!(durations(&result), vec![5, 2, 5, 20, 5, 5, 5, 5, 5]);
}

#[test]
fn test_adjacent_never_touches_modified_phase() {
    let input = phases([3, 3, 3, 3, 3, 3, 3, 3, 3]);
    let result = redistribute_adjacent(&input, 22, &modified(&[2, 8]));
    assert_eq!(result[1].duration, 3);
    assert_eq!(result[7].duration, 3);
}

#[test]
fn test_adjacent_shrink_respects_floor() {
    let input = phases([5, 2, 5, 20, 5, 5, 5, 5, 5]);
    let result = redistribute_adjacent(&input, 52, &modified(&[1]));
    assert_eq!(result[1].duration, 1);
}

#[test]
fn test_adjacent_falls_back_to_proportional_with_true_target() {
    let input = phases([10, 1, 10, 1, 1, 1, 1, 1, 1]);
    let mut all = BTreeSet::new();
    all.extend(1..=9u8);

    let fallback = redistribute_adjacent(&input, 31, &all);
    let direct = redistribute_proportional(&input, 31);
    assert_eq!(fallback, direct);
    assert_eq!(total_minutes(&fallback), 31);
}

// ==========================================
// 分派
// ==========================================

#[test]
fn test_dispatch_none_returns_copy() {
    let input = phases([5; 9]);
    let context = RedistributionContext {
        lesson_focus: LessonFocus::Balanced,
        modified_indices: BTreeSet::new(),
    };
    let result = redistribute(
        RedistributionStrategy::None,
        &input,
        80,
        &context,
        &FlexibilityTable::default(),
    );
    assert_eq!(result, input);
}

#[test]
fn test_round_minutes_half_away_from_zero() {
    assert_eq!(round_minutes(1.5), 2);
    assert_eq!(round_minutes(-1.5), -2);
    assert_eq!(round_minutes(0.49), 0);
}
