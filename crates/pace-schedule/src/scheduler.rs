//! The `EventScheduler` and its per-frame advance loop.

use std::collections::BTreeMap;

use log::{debug, trace, warn};

use pace_core::{CategoryId, JitterRng};

use crate::{Plan, PlanConfig, ScheduleError, ScheduleResult, SchedulerConfig};

// ── EventScheduler ────────────────────────────────────────────────────────────

/// Paces categorized events over continuous time.
///
/// The scheduler keeps one global clock position `elapsed ∈ [0, 1)` inside a
/// repeating one-second window, and one [`Plan`] per category.  Each call to
/// [`advance`](Self::advance):
///
/// 1. **Lazy build**: on the first call (and the first call after
///    [`clear`](Self::clear)) every plan gets its initial schedule.
/// 2. **Clock**: `elapsed += delta`.  Crossing `1.0` is a rollover; the
///    clock wraps to `elapsed mod 1`.  Crossing `2.0` means whole windows
///    were skipped.  This is logged and the skipped windows are dropped, not
///    replayed.
/// 3. **Per plan**, in ascending `CategoryId` order: rebuild on rollover,
///    drain every time `≤ elapsed`, report non-zero counts via `on_due`.
///
/// A plan added after the lazy build has an empty schedule until the next
/// rollover.
///
/// Single-threaded and non-reentrant: `on_due` must not call back into the
/// scheduler (the `&mut self` borrow rules this out).
pub struct EventScheduler {
    plans:            BTreeMap<CategoryId, Plan>,
    rng:              JitterRng,
    elapsed:          f64,
    ready:            bool,
    default_capacity: usize,
    anomalies:        u64,
}

impl EventScheduler {
    /// Scheduler with the given jitter seed and default plan capacity.
    pub fn new(seed: u64) -> Self {
        Self::with_config(SchedulerConfig {
            seed,
            ..SchedulerConfig::default()
        })
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            plans:            BTreeMap::new(),
            rng:              JitterRng::new(config.seed),
            elapsed:          0.0,
            ready:            false,
            default_capacity: config.default_capacity,
            anomalies:        0,
        }
    }

    // ── Plan management ───────────────────────────────────────────────────

    /// Register a plan for `id`.
    ///
    /// Returns `false` without touching anything if `id` already has a plan.
    /// Buffer capacity is `max(1, capacity_hint or default)`.
    pub fn add_plan(
        &mut self,
        id:            CategoryId,
        rate:          f64,
        jitter:        f64,
        capacity_hint: Option<usize>,
    ) -> bool {
        if self.plans.contains_key(&id) {
            return false;
        }
        let capacity = capacity_hint.unwrap_or(self.default_capacity).max(1);
        self.plans.insert(id, Plan::new(id, rate, jitter, capacity));
        true
    }

    /// [`add_plan`](Self::add_plan) from an authored config.
    pub fn add_plan_config(&mut self, config: &PlanConfig) -> bool {
        self.add_plan(config.category_id, config.rate, config.jitter, config.capacity)
    }

    /// Add every config; returns how many were new.
    pub fn add_plans<'a, I>(&mut self, configs: I) -> usize
    where
        I: IntoIterator<Item = &'a PlanConfig>,
    {
        configs
            .into_iter()
            .filter(|c| self.add_plan_config(c))
            .count()
    }

    #[inline]
    pub fn has_plan(&self, id: CategoryId) -> bool {
        self.plans.contains_key(&id)
    }

    #[inline]
    pub fn remove_plan(&mut self, id: CategoryId) -> bool {
        self.plans.remove(&id).is_some()
    }

    /// Change the rate; takes effect at the next rebuild.
    pub fn set_rate(&mut self, id: CategoryId, rate: f64) -> bool {
        match self.plans.get_mut(&id) {
            Some(plan) => {
                plan.set_rate(rate);
                true
            }
            None => false,
        }
    }

    /// Change the jitter amplitude; takes effect at the next rebuild.
    pub fn set_jitter(&mut self, id: CategoryId, jitter: f64) -> bool {
        match self.plans.get_mut(&id) {
            Some(plan) => {
                plan.set_jitter(jitter);
                true
            }
            None => false,
        }
    }

    /// Drop every plan and reset the clock.  The next `advance` rebuilds
    /// from scratch.
    pub fn clear(&mut self) {
        self.plans.clear();
        self.elapsed = 0.0;
        self.ready = false;
    }

    /// Replace the contents of `out` with every registered id, in delivery
    /// order.
    pub fn list_plan_ids(&self, out: &mut Vec<CategoryId>) {
        out.clear();
        out.extend(self.plans.keys().copied());
    }

    // ── Inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn plan(&self, id: CategoryId) -> Option<&Plan> {
        self.plans.get(&id)
    }

    #[inline]
    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }

    /// Position within the current window, in `[0, 1)`.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether the initial schedules have been built.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of advances that skipped at least one whole window.
    #[inline]
    pub fn anomaly_count(&self) -> u64 {
        self.anomalies
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // ── Advance ───────────────────────────────────────────────────────────

    /// Move the clock forward by `delta` seconds and report due events.
    ///
    /// `on_due(id, count)` is called once per plan with `count > 0`, in
    /// ascending `CategoryId` order.  Returns the total across all plans.
    ///
    /// # Errors
    /// [`ScheduleError::NoPlans`] if nothing is registered and
    /// [`ScheduleError::InvalidDelta`] for negative or non-finite deltas.
    /// Both indicate driver wiring bugs; no state is modified.
    pub fn advance<F>(&mut self, delta: f64, mut on_due: F) -> ScheduleResult<u32>
    where
        F: FnMut(CategoryId, u32),
    {
        if self.plans.is_empty() {
            return Err(ScheduleError::NoPlans);
        }
        if !delta.is_finite() || delta < 0.0 {
            return Err(ScheduleError::InvalidDelta(delta));
        }

        self.ensure_built();

        self.elapsed += delta;
        let rolled_over = self.elapsed >= 1.0;
        if rolled_over {
            if self.elapsed >= 2.0 {
                self.anomalies += 1;
                warn!(
                    "event clock skipped {} whole window(s) (elapsed {:.3}s); \
                     events in skipped windows are dropped",
                    self.elapsed.floor() as u64 - 1,
                    self.elapsed,
                );
            }
            self.elapsed %= 1.0;
            debug!("window rollover, residual phase {:.4}", self.elapsed);
        }

        let elapsed = self.elapsed;
        let mut total = 0;
        for (&id, plan) in self.plans.iter_mut() {
            if rolled_over {
                let count = plan.rebuild(&mut self.rng);
                trace!("{id}: {count} event(s) scheduled for next window");
            }

            let due = plan.drain(elapsed);
            if due > 0 {
                on_due(id, due);
                total += due;
            }
        }

        Ok(total)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn ensure_built(&mut self) {
        if self.ready {
            return;
        }
        for plan in self.plans.values_mut() {
            plan.rebuild(&mut self.rng);
        }
        self.ready = true;
    }
}

impl std::fmt::Debug for EventScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventScheduler")
            .field("plans", &self.plans.len())
            .field("elapsed", &self.elapsed)
            .field("ready", &self.ready)
            .field("seed", &self.rng.seed())
            .finish()
    }
}
