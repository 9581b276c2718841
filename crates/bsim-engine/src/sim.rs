//! The `BoardingSim` struct and its tick loop.

use std::cmp::Reverse;

use bsim_cabin::CabinLayout;
use bsim_core::{BagConfig, PaxId, StepClock, Tick};
use bsim_pax::PaxStore;

use crate::aisle::{AisleGrid, BIN_FULL_PENALTY, BinState};
use crate::error::{EngineError, EngineResult};
use crate::observer::BoardObserver;
use crate::result::RunResult;
use crate::state::{BoardState, PaxPhase};

/// One boarding run over a generated population.
///
/// Borrows the layout and population immutably — all mutation happens in
/// run-local state, so the same population can back a strategy run and a
/// baseline run without regeneration.
pub struct BoardingSim<'a> {
    layout: &'a CabinLayout,
    pax: &'a PaxStore,

    clock: StepClock,
    grid: AisleGrid,
    bins: BinState,
    state: BoardState,

    // ── Precomputed per-passenger tick counts ─────────────────────────────
    walk_ticks: Vec<u64>,
    stow_ticks: Vec<u64>,
    stow_ticks_penalized: Vec<u64>,
    arrival_tick: Vec<u64>,

    /// Per-aisle gate queue, rank-ascending; passengers are removed on
    /// admission.  A late passenger whose offset has not elapsed is
    /// skipped by the admission scan, so punctual passengers overtake.
    gate: Vec<Vec<PaxId>>,

    /// Who occupies each seat, for the seat-shuffle lookup.
    seat_occupant: Vec<Option<PaxId>>,

    // ── Counters ──────────────────────────────────────────────────────────
    conflicts: u64,
    max_queue: u32,
    seated: usize,
    /// Seated ticks in chronological order (for percentile times).
    seated_ticks: Vec<Tick>,
}

impl<'a> BoardingSim<'a> {
    /// Prepare a run: convert sampled durations to whole ticks and build
    /// the gate queues.  The population must have been generated against
    /// `layout` (seat IDs index its seat table).
    pub fn new(layout: &'a CabinLayout, pax: &'a PaxStore, bags: &BagConfig, time_step: f64) -> Self {
        let clock = StepClock::new(time_step);
        let n = pax.count;

        let mut walk_ticks = Vec::with_capacity(n);
        let mut stow_ticks = Vec::with_capacity(n);
        let mut stow_ticks_penalized = Vec::with_capacity(n);
        let mut arrival_tick = Vec::with_capacity(n);
        for i in 0..n {
            walk_ticks.push(clock.duration_ticks(pax.walk_secs_per_row[i]));
            if pax.carry_on[i] {
                stow_ticks.push(clock.duration_ticks(pax.stow_secs[i]));
                stow_ticks_penalized
                    .push(clock.duration_ticks(pax.stow_secs[i] * BIN_FULL_PENALTY));
            } else {
                stow_ticks.push(0);
                stow_ticks_penalized.push(0);
            }
            arrival_tick.push(clock.offset_ticks(pax.arrival_offset_secs[i]));
        }

        let mut gate: Vec<Vec<PaxId>> = vec![Vec::new(); layout.num_aisles as usize];
        for p in pax.pax_ids() {
            let aisle = layout.seat(pax.seat[p.index()]).aisle;
            gate[aisle as usize].push(p);
        }
        for queue in &mut gate {
            queue.sort_by_key(|&p| pax.rank[p.index()]);
        }

        Self {
            layout,
            pax,
            clock,
            grid: AisleGrid::new(layout.num_aisles, layout.num_rows),
            bins: BinState::new(layout.num_rows, bags.bin_capacity_per_row),
            state: BoardState::new(n),
            walk_ticks,
            stow_ticks,
            stow_ticks_penalized,
            arrival_tick,
            gate,
            seat_occupant: vec![None; layout.seat_count()],
            conflicts: 0,
            max_queue: 0,
            seated: 0,
            seated_ticks: Vec::with_capacity(n),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger is `Seated`, or fail once `max_ticks`
    /// elapse (runaway guard for pathological configurations).
    ///
    /// Given the same population and time step, the result is bit-identical
    /// across calls: the loop performs no random draws and processes
    /// passengers in a fixed order.
    pub fn run<O: BoardObserver>(&mut self, max_ticks: u64, observer: &mut O) -> EngineResult<RunResult> {
        if self.pax.is_empty() {
            observer.on_board_end(Tick::ZERO);
            return Ok(RunResult::empty());
        }

        loop {
            let now = self.clock.current;
            if now.0 >= max_ticks {
                return Err(EngineError::TickBudgetExceeded {
                    max_ticks,
                    secs: self.clock.secs_at(now),
                });
            }

            self.progress_phase(now, observer);
            self.admission_phase(now);
            let queue_len = self.queue_stats(now);
            observer.on_tick_end(now, self.seated, queue_len);

            if self.seated == self.pax.count {
                observer.on_board_end(now);
                break;
            }
            self.clock.advance();
        }

        Ok(self.collect_result())
    }

    // ── Phase ①: progress in-aisle passengers ─────────────────────────────
    //
    // Front-to-back order (descending aisle row, pax id tiebreak): a
    // segment freed by the passenger ahead is usable by the one behind
    // within the same tick, and the iteration order is deterministic.
    fn progress_phase<O: BoardObserver>(&mut self, now: Tick, observer: &mut O) {
        let mut active: Vec<PaxId> = self
            .pax
            .pax_ids()
            .filter(|p| {
                matches!(
                    self.state.phase[p.index()],
                    PaxPhase::Walking | PaxPhase::Stowing | PaxPhase::Sliding
                )
            })
            .collect();
        active.sort_by_key(|&p| (Reverse(self.state.aisle_row[p.index()]), p.0));

        for p in active {
            self.step_pax(p, now, observer);
        }
    }

    fn step_pax<O: BoardObserver>(&mut self, p: PaxId, now: Tick, observer: &mut O) {
        let i = p.index();
        if now < self.state.next_tick[i] {
            return;
        }
        match self.state.phase[i] {
            PaxPhase::Stowing => self.begin_slide(p, now),

            PaxPhase::Sliding => {
                let seat = self.pax.seat[i];
                let s = self.layout.seat(seat);
                self.grid.release(s.aisle, self.state.aisle_row[i]);
                self.seat_occupant[seat.index()] = Some(p);
                self.state.phase[i] = PaxPhase::Seated;
                self.state.seated_tick[i] = now;
                self.seated_ticks.push(now);
                self.seated += 1;
                observer.on_pax_seated(p, now);
            }

            PaxPhase::Walking => {
                let seat = self.pax.seat[i];
                let s = *self.layout.seat(seat);
                let row = self.state.aisle_row[i];
                if row == s.row {
                    // Reached own row: stow first if carrying a bag.
                    if self.pax.carry_on[i] {
                        let has_space = self.bins.try_stow(s.row);
                        let ticks = if has_space {
                            self.stow_ticks[i]
                        } else {
                            self.stow_ticks_penalized[i]
                        };
                        self.state.phase[i] = PaxPhase::Stowing;
                        self.state.next_tick[i] = now + ticks;
                    } else {
                        self.begin_slide(p, now);
                    }
                } else {
                    let next_row = row + 1;
                    if self.grid.is_free(s.aisle, next_row) {
                        self.grid.release(s.aisle, row);
                        self.grid.occupy(s.aisle, next_row, p);
                        self.state.aisle_row[i] = next_row;
                        self.state.next_tick[i] = now + self.walk_ticks[i];
                    }
                    // else: stay put until the segment ahead clears.
                }
            }

            PaxPhase::Waiting | PaxPhase::Seated => {}
        }
    }

    /// Start the slide into the seat.  Seated passengers between the aisle
    /// and the target seat each add their own slide time (they stand up,
    /// let the arrival through, and sit back down).
    fn begin_slide(&mut self, p: PaxId, now: Tick) {
        let i = p.index();
        let seat = self.pax.seat[i];
        let shuffle: f64 = self
            .layout
            .seats_between_aisle(seat)
            .iter()
            .filter_map(|b| self.seat_occupant[b.index()])
            .map(|occ| self.pax.slide_secs[occ.index()])
            .sum();
        let secs = self.pax.slide_secs[i] + shuffle;
        self.state.phase[i] = PaxPhase::Sliding;
        self.state.next_tick[i] = now + self.clock.duration_ticks(secs);
    }

    // ── Phase ②: gate admissions ──────────────────────────────────────────
    //
    // Conflicts are counted here: each tick a passenger whose queue turn
    // has arrived finds the entrance segment occupied, that blocked
    // `Waiting → Walking` transition is one aisle conflict.
    fn admission_phase(&mut self, now: Tick) {
        for aisle in 0..self.gate.len() {
            // Lowest-ranked passenger already present at the gate.
            let candidate = self.gate[aisle]
                .iter()
                .copied()
                .find(|&p| self.arrival_tick[p.index()] <= now.0);
            let Some(p) = candidate else { continue };
            let i = p.index();

            if self.grid.is_free(aisle as u8, 0) {
                self.grid.occupy(aisle as u8, 0, p);
                self.state.phase[i] = PaxPhase::Walking;
                self.state.aisle_row[i] = 0;
                self.state.next_tick[i] = now + self.walk_ticks[i];
                self.gate[aisle].retain(|&q| q != p);
            } else {
                self.conflicts += 1;
            }
        }
    }

    // ── Phase ③: queue statistics ─────────────────────────────────────────
    //
    // The reported maximum is per aisle (each aisle has its own queue);
    // the observer gets the total across aisles.
    fn queue_stats(&mut self, now: Tick) -> usize {
        let mut total = 0;
        for queue in &self.gate {
            let len = queue
                .iter()
                .filter(|&&p| self.arrival_tick[p.index()] <= now.0)
                .count();
            self.max_queue = self.max_queue.max(len as u32);
            total += len;
        }
        total
    }

    // ── Result assembly ───────────────────────────────────────────────────
    fn collect_result(&self) -> RunResult {
        let n = self.pax.count;
        let total_tick = self.seated_ticks.last().copied().unwrap_or(Tick::ZERO);

        // `seated_ticks` is chronological, so percentile times are direct
        // index lookups: the tick at which the k-th passenger sat down.
        let tick_at_fraction = |frac: f64| -> Tick {
            let k = ((n as f64 * frac).ceil() as usize).clamp(1, n);
            self.seated_ticks[k - 1]
        };

        let wait_sum: f64 = (0..n)
            .map(|i| {
                self.clock.secs_at(self.state.seated_tick[i])
                    - self.clock.secs_at(Tick(self.arrival_tick[i]))
            })
            .sum();

        RunResult {
            pax_count: n,
            total_secs: self.clock.secs_at(total_tick),
            t50_secs: self.clock.secs_at(tick_at_fraction(0.5)),
            t90_secs: self.clock.secs_at(tick_at_fraction(0.9)),
            conflicts: self.conflicts,
            max_queue: self.max_queue,
            avg_wait_secs: wait_sum / n as f64,
        }
    }
}
