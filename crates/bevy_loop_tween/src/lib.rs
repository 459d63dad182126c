//! Repeating, cancelable component tweens for Bevy ECS.
//!
//! `bevy_loop_tween` drives indefinitely-running UI animation (pulses,
//! rotations) as plain components: a [`Tween`] describes the interpolation,
//! an [`Animator`] attached next to the target component advances it, and
//! [`step_animators`] steps every animator of one component type for the
//! current frame. Cancellation is [`cancel_animator`], and what happens to
//! the target value on cancel or completion is an explicit
//! [`RemovalPolicy`] rather than an implicit reset.

use std::{fmt, marker::PhantomData, time::Duration};

use bevy_app::{App, Plugin};
use bevy_ecs::{component::Mutable, entity::Entity, prelude::*};
use bevy_time::Time;

/// Easing function used by [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseFunction {
    Linear,
    QuadraticInOut,
}

impl EaseFunction {
    #[must_use]
    pub fn sample(self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Self::Linear => x,
            Self::QuadraticInOut => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - ((-2.0 * x + 2.0).powi(2) / 2.0)
                }
            }
        }
    }
}

impl Default for EaseFunction {
    fn default() -> Self {
        Self::Linear
    }
}

/// How many cycles a [`Tween`] runs before its animator is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Finite(u32),
    Infinite,
}

/// How consecutive cycles traverse the interpolation range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatStrategy {
    /// Every cycle runs start-to-end.
    Restart,
    /// Odd cycles run end-to-start, producing a continuous back-and-forth.
    MirroredRepeat,
}

/// What the target value does when the animator is removed, either by
/// finishing a finite tween or through [`cancel_animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Keep the last applied value. Restarting later continues from it
    /// without a visual snap.
    Freeze,
    /// Re-apply the interpolation start value before removal.
    ResetToStart,
}

/// Interpolation lens for tweening a component.
pub trait Lens<T>: Send + Sync + 'static {
    fn lerp(&mut self, target: &mut T, ratio: f32);
}

trait DynLens<T>: Send + Sync {
    fn lerp_dyn(&mut self, target: &mut T, ratio: f32);
}

impl<T, L> DynLens<T> for L
where
    L: Lens<T>,
{
    fn lerp_dyn(&mut self, target: &mut T, ratio: f32) {
        self.lerp(target, ratio);
    }
}

/// Tween description for one component type.
pub struct Tween<T: Component> {
    pub ease: EaseFunction,
    pub duration: Duration,
    pub delay: Duration,
    pub repeat: RepeatCount,
    pub strategy: RepeatStrategy,
    pub removal: RemovalPolicy,
    lens: Box<dyn DynLens<T>>,
}

impl<T: Component> Tween<T> {
    /// A single start-to-end cycle that freezes at its end value.
    #[must_use]
    pub fn new<L>(ease: EaseFunction, duration: Duration, lens: L) -> Self
    where
        L: Lens<T>,
    {
        Self {
            ease,
            duration,
            delay: Duration::ZERO,
            repeat: RepeatCount::Finite(1),
            strategy: RepeatStrategy::Restart,
            removal: RemovalPolicy::Freeze,
            lens: Box::new(lens),
        }
    }

    /// Defer the first cycle by `delay`. Nothing is applied until it passes.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatCount, strategy: RepeatStrategy) -> Self {
        self.repeat = repeat;
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_removal_policy(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    fn apply(&mut self, target: &mut T, ratio: f32) {
        self.lens.lerp_dyn(target, self.ease.sample(ratio));
    }
}

impl<T: Component> fmt::Debug for Tween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("ease", &self.ease)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("repeat", &self.repeat)
            .field("strategy", &self.strategy)
            .field("removal", &self.removal)
            .finish_non_exhaustive()
    }
}

/// Runtime animator component that drives a [`Tween`] for a component type.
#[derive(Component)]
pub struct Animator<T: Component> {
    tween: Tween<T>,
    elapsed: Duration,
    _marker: PhantomData<T>,
}

impl<T: Component> Animator<T> {
    #[must_use]
    pub fn new(tween: Tween<T>) -> Self {
        Self {
            tween,
            elapsed: Duration::ZERO,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.tween.duration
    }

    #[must_use]
    pub fn removal_policy(&self) -> RemovalPolicy {
        self.tween.removal
    }

    fn tick(&mut self, target: &mut T, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);

        let Some(active) = self.elapsed.checked_sub(self.tween.delay) else {
            return false;
        };

        if self.tween.duration.is_zero() {
            self.apply_cycle(target, 0, 1.0);
            return matches!(self.tween.repeat, RepeatCount::Finite(_));
        }

        let cycles = active.as_secs_f32() / self.tween.duration.as_secs_f32();

        match self.tween.repeat {
            RepeatCount::Finite(count) if cycles >= count as f32 => {
                self.apply_cycle(target, count.saturating_sub(1), 1.0);
                true
            }
            _ => {
                let cycle_index = cycles as u32;
                self.apply_cycle(target, cycle_index, cycles - cycle_index as f32);
                false
            }
        }
    }

    fn apply_cycle(&mut self, target: &mut T, cycle_index: u32, ratio: f32) {
        let ratio = match self.tween.strategy {
            RepeatStrategy::Restart => ratio,
            RepeatStrategy::MirroredRepeat if cycle_index % 2 == 1 => 1.0 - ratio,
            RepeatStrategy::MirroredRepeat => ratio,
        };
        self.tween.apply(target, ratio);
    }

    fn apply_removal(&mut self, target: &mut T) {
        if self.tween.removal == RemovalPolicy::ResetToStart {
            self.tween.apply(target, 0.0);
        }
    }
}

impl<T: Component> fmt::Debug for Animator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("tween", &self.tween)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

/// Lightweight plugin marker for loop-tween support.
///
/// The crate keeps stepping explicit via [`step_animators`] so integrators can
/// place animation updates exactly where they need in schedule ordering.
#[derive(Default)]
pub struct LoopTweenPlugin;

impl Plugin for LoopTweenPlugin {
    fn build(&self, _app: &mut App) {}
}

/// Advance all [`Animator<T>`] components for one frame using Bevy `Time`.
///
/// Finished finite animators are removed after their [`RemovalPolicy`] is
/// applied. Infinite animators run until [`cancel_animator`] removes them.
pub fn step_animators<T: Component<Mutability = Mutable>>(world: &mut World) {
    let delta = world.resource::<Time>().delta();

    let mut finished_entities = Vec::<Entity>::new();
    let mut query = world.query::<(Entity, &mut Animator<T>, &mut T)>();

    for (entity, mut animator, mut target) in query.iter_mut(world) {
        if animator.tick(&mut target, delta) {
            animator.apply_removal(&mut target);
            finished_entities.push(entity);
        }
    }

    for entity in finished_entities {
        if world.get_entity(entity).is_ok() {
            world.entity_mut(entity).remove::<Animator<T>>();
        }
    }
}

/// Cancel the [`Animator<T>`] on `entity`, applying its [`RemovalPolicy`].
///
/// Returns whether an animator was actually running. Calling this with no
/// animator present, or on a despawned entity, is a no-op.
pub fn cancel_animator<T: Component<Mutability = Mutable>>(
    world: &mut World,
    entity: Entity,
) -> bool {
    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        return false;
    };

    let Some(mut animator) = entity_mut.take::<Animator<T>>() else {
        return false;
    };

    if let Some(mut target) = entity_mut.get_mut::<T>() {
        animator.apply_removal(&mut target);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Component, Debug, PartialEq)]
    struct Gauge(f32);

    struct GaugeLens {
        from: f32,
        to: f32,
    }

    impl Lens<Gauge> for GaugeLens {
        fn lerp(&mut self, target: &mut Gauge, ratio: f32) {
            target.0 = self.from + (self.to - self.from) * ratio;
        }
    }

    fn world_with_time() -> World {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world
    }

    fn advance(world: &mut World, secs: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        step_animators::<Gauge>(world);
    }

    fn gauge(world: &World, entity: Entity) -> f32 {
        world.get::<Gauge>(entity).unwrap().0
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn one_shot_reaches_end_and_removes_animator() {
        let mut world = world_with_time();
        let tween = Tween::new(
            EaseFunction::Linear,
            Duration::from_secs(1),
            GaugeLens { from: 0.0, to: 10.0 },
        );
        let entity = world.spawn((Gauge(0.0), Animator::new(tween))).id();

        advance(&mut world, 0.5);
        assert_close(gauge(&world, entity), 5.0);
        assert!(world.get::<Animator<Gauge>>(entity).is_some());

        advance(&mut world, 0.6);
        assert_close(gauge(&world, entity), 10.0);
        assert!(world.get::<Animator<Gauge>>(entity).is_none());
    }

    #[test]
    fn infinite_mirrored_repeat_oscillates() {
        let mut world = world_with_time();
        let tween = Tween::new(
            EaseFunction::Linear,
            Duration::from_secs_f32(1.2),
            GaugeLens { from: 0.1, to: 0.5 },
        )
        .with_repeat(RepeatCount::Infinite, RepeatStrategy::MirroredRepeat);
        let entity = world.spawn((Gauge(0.0), Animator::new(tween))).id();

        // Quarter of the first (forward) cycle.
        advance(&mut world, 0.3);
        assert_close(gauge(&world, entity), 0.2);

        // 1.25 cycles in: second cycle runs reversed, a quarter down from the top.
        advance(&mut world, 1.2);
        assert_close(gauge(&world, entity), 0.4);

        // 1.5 cycles: reversed cycle at its midpoint.
        advance(&mut world, 0.3);
        assert_close(gauge(&world, entity), 0.3);

        assert!(world.get::<Animator<Gauge>>(entity).is_some());
    }

    #[test]
    fn cancel_with_freeze_keeps_last_value() {
        let mut world = world_with_time();
        let tween = Tween::new(
            EaseFunction::Linear,
            Duration::from_secs(1),
            GaugeLens { from: 0.0, to: 8.0 },
        )
        .with_repeat(RepeatCount::Infinite, RepeatStrategy::Restart);
        let entity = world.spawn((Gauge(0.0), Animator::new(tween))).id();

        advance(&mut world, 0.25);
        assert_close(gauge(&world, entity), 2.0);

        assert!(cancel_animator::<Gauge>(&mut world, entity));
        assert!(world.get::<Animator<Gauge>>(entity).is_none());
        assert_close(gauge(&world, entity), 2.0);

        // Idempotent: nothing left to cancel, value untouched.
        assert!(!cancel_animator::<Gauge>(&mut world, entity));
        assert_close(gauge(&world, entity), 2.0);
    }

    #[test]
    fn cancel_with_reset_restores_start_value() {
        let mut world = world_with_time();
        let tween = Tween::new(
            EaseFunction::Linear,
            Duration::from_secs(1),
            GaugeLens { from: 3.0, to: 9.0 },
        )
        .with_repeat(RepeatCount::Infinite, RepeatStrategy::Restart)
        .with_removal_policy(RemovalPolicy::ResetToStart);
        let entity = world.spawn((Gauge(3.0), Animator::new(tween))).id();

        advance(&mut world, 0.5);
        assert_close(gauge(&world, entity), 6.0);

        assert!(cancel_animator::<Gauge>(&mut world, entity));
        assert_close(gauge(&world, entity), 3.0);
    }

    #[test]
    fn delay_defers_first_application() {
        let mut world = world_with_time();
        let tween = Tween::new(
            EaseFunction::Linear,
            Duration::from_secs(1),
            GaugeLens { from: 0.0, to: 4.0 },
        )
        .with_delay(Duration::from_secs(1));
        let entity = world.spawn((Gauge(-1.0), Animator::new(tween))).id();

        advance(&mut world, 0.5);
        assert_close(gauge(&world, entity), -1.0);

        advance(&mut world, 1.0);
        assert_close(gauge(&world, entity), 2.0);
    }

    #[test]
    fn zero_duration_completes_at_end_value() {
        let mut world = world_with_time();
        let tween = Tween::new(
            EaseFunction::Linear,
            Duration::ZERO,
            GaugeLens { from: 0.0, to: 7.0 },
        );
        let entity = world.spawn((Gauge(0.0), Animator::new(tween))).id();

        advance(&mut world, 0.01);
        assert_close(gauge(&world, entity), 7.0);
        assert!(world.get::<Animator<Gauge>>(entity).is_none());
    }

    #[test]
    fn quadratic_ease_is_symmetric() {
        assert_close(EaseFunction::QuadraticInOut.sample(0.0), 0.0);
        assert_close(EaseFunction::QuadraticInOut.sample(0.5), 0.5);
        assert_close(EaseFunction::QuadraticInOut.sample(1.0), 1.0);
    }
}
