/// Tests for the scene completion policies
///
/// Covers the decrement-then-compare order of the frame budget, the
/// exclusive elapsed threshold, and the mismatched-scene rule.

use super::*;
use crate::renderer::{RenderParams, RendererResult};
use crate::scene::SceneType;

fn params(scene: SceneType, frame: u64, elapsed_us: u64) -> RenderParams {
    RenderParams::new(scene, frame, elapsed_us)
}

// ============================================================================
// Tests: FrameBudget
// ============================================================================

#[test]
fn test_frame_budget_grants_one_less_than_budget() {
    let mut budget = FrameBudget::new(3);
    assert!(budget.consume());
    assert!(budget.consume());
    assert!(!budget.consume());
    assert!(budget.is_exhausted());
}

#[test]
fn test_frame_budget_saturates_when_exhausted() {
    let mut budget = FrameBudget::new(1);
    assert!(!budget.consume());
    assert!(!budget.consume());
    assert_eq!(budget.remaining(), 0);
}

#[test]
fn test_frame_budget_zero_never_draws() {
    let mut budget = FrameBudget::new(0);
    assert!(!budget.consume());
}

#[test]
fn test_frame_budget_rearm_restores_initial() {
    let mut budget = FrameBudget::new(5);
    budget.consume();
    budget.consume();
    assert_eq!(budget.remaining(), 3);

    budget.rearm();
    assert_eq!(budget.remaining(), 5);
    assert_eq!(budget.initial(), 5);
}

// ============================================================================
// Tests: ElapsedLimit
// ============================================================================

#[test]
fn test_elapsed_limit_is_exclusive() {
    let limit = ElapsedLimit::from_secs(5);
    assert_eq!(limit.threshold_us(), 5_000_000);
    assert!(limit.admits(0));
    assert!(limit.admits(4_999_999));
    assert!(!limit.admits(5_000_000));
    assert!(!limit.admits(u64::MAX));
}

// ============================================================================
// Tests: SceneCompletion with frame budget
// ============================================================================

#[test]
fn test_budget_of_1000_yields_999_successes_then_finished() {
    let mut completion = SceneCompletion::frame_budget(SceneType::TEST0, 1000);

    for frame in 0..999 {
        assert_eq!(completion.advance(&params(SceneType::TEST0, frame, 0)), RendererResult::Success);
    }
    assert_eq!(completion.advance(&params(SceneType::TEST0, 999, 0)), RendererResult::Finished);
}

#[test]
fn test_mismatched_scene_finishes_without_consuming_budget() {
    let mut completion = SceneCompletion::frame_budget(SceneType::TEST0, 3);

    for _ in 0..10 {
        assert_eq!(completion.advance(&params(SceneType::TEST1, 0, 0)), RendererResult::Finished);
    }

    match completion.policy() {
        CompletionPolicy::FrameBudget(budget) => assert_eq!(budget.remaining(), 3),
        other => panic!("unexpected policy {:?}", other),
    }
}

#[test]
fn test_begin_activation_rearms_owned_scene_only() {
    let mut completion = SceneCompletion::frame_budget(SceneType::TEST0, 2);
    assert_eq!(completion.advance(&params(SceneType::TEST0, 0, 0)), RendererResult::Success);
    assert_eq!(completion.advance(&params(SceneType::TEST0, 1, 0)), RendererResult::Finished);

    // Another scene's activation leaves the exhausted budget alone
    completion.begin_activation(SceneType::TEST1);
    assert_eq!(completion.advance(&params(SceneType::TEST0, 0, 0)), RendererResult::Finished);

    // Re-activating the owned scene starts over
    completion.begin_activation(SceneType::TEST0);
    assert_eq!(completion.advance(&params(SceneType::TEST0, 0, 0)), RendererResult::Success);
}

#[test]
fn test_frame_budget_ignores_elapsed_time() {
    let mut completion = SceneCompletion::frame_budget(SceneType::TEST0, 3);
    assert_eq!(completion.advance(&params(SceneType::TEST0, 0, u64::MAX)), RendererResult::Success);
}

// ============================================================================
// Tests: SceneCompletion with elapsed time
// ============================================================================

#[test]
fn test_elapsed_policy_boundary() {
    let mut completion = SceneCompletion::elapsed_time(SceneType::TEST1, 5_000_000);
    assert_eq!(completion.advance(&params(SceneType::TEST1, 0, 4_999_999)), RendererResult::Success);
    assert_eq!(completion.advance(&params(SceneType::TEST1, 1, 5_000_000)), RendererResult::Finished);
}

#[test]
fn test_elapsed_policy_ignores_frame_id() {
    let mut completion = SceneCompletion::elapsed_time(SceneType::TEST1, 1_000);
    assert_eq!(completion.advance(&params(SceneType::TEST1, u64::MAX, 999)), RendererResult::Success);
    assert_eq!(completion.advance(&params(SceneType::TEST1, 0, 1_000)), RendererResult::Finished);
}

#[test]
fn test_elapsed_policy_mismatched_scene_finishes() {
    let mut completion = SceneCompletion::elapsed_time(SceneType::TEST1, 5_000_000);
    assert_eq!(completion.advance(&params(SceneType::TEST0, 0, 0)), RendererResult::Finished);
    assert_eq!(completion.scene(), SceneType::TEST1);
    assert!(!completion.owns(SceneType::TEST0));
}

#[test]
fn test_custom_scene_ids() {
    let custom = SceneType::new(42);
    assert_eq!(custom.id(), 42);
    assert_eq!(format!("{}", custom), "scene#42");
    assert_ne!(custom, SceneType::TEST0);
}
