//! Time-staggered destination mutations for menu show/hide and bounce
//! restores.
//!
//! The sequencer decides *when* a motion starts; the interpolator decides how
//! it unfolds. Every scheduled item is a pure destination assignment
//! ([`Mutation`]), pending against a millisecond clock that only advances
//! inside the frame step, so everything fires on the frame thread between
//! ticks.

use crate::config;
use log::debug;

/// A destination assignment deferred until its offset elapses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mutation {
    /// Park an entry's x destination (edge tiles sliding on/off screen).
    EntryPosXDest { index: usize, x: f32 },
    /// Park an entry's y destination (tiles dropping off / returning).
    EntryPosYDest { index: usize, y: f32 },
    /// Add to an entry's x destination (bounce restore).
    EntryNudgeXDest { index: usize, dx: f32 },
    /// Expand or collapse an entry's sub-menu.
    EntrySelected { index: usize, selected: bool },
    SelectorPosYDest(f32),
    /// Retarget the selector's scale to an entry's current scale.
    SelectorScaleToEntry(usize),
    TintAlphaDest(f32),
    /// Latch menu visibility (the final step of the show choreography).
    MenuVisible(bool),
}

/// Cancellation key. A new show/hide request drops every pending
/// `Transition` mutation; bounce restores are independent and survive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    Transition,
    Bounce,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    due_ms: f64,
    seq: u64,
    group: Group,
    mutation: Mutation,
}

#[derive(Debug, Default)]
pub struct TransitionSequencer {
    clock_ms: f64,
    next_seq: u64,
    pending: Vec<Scheduled>,
}

impl TransitionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, group: Group, delay_ms: u64, mutation: Mutation) {
        self.pending.push(Scheduled {
            due_ms: self.clock_ms + delay_ms as f64,
            seq: self.next_seq,
            group,
            mutation,
        });
        self.next_seq += 1;
    }

    /// Drop every pending mutation in `group`. Safe when none are pending.
    pub fn cancel(&mut self, group: Group) {
        self.pending.retain(|s| s.group != group);
    }

    pub fn pending_count(&self, group: Group) -> usize {
        self.pending.iter().filter(|s| s.group == group).count()
    }

    /// Advance the clock and drain everything that has come due, in firing
    /// order.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<Mutation> {
        self.clock_ms += f64::from(dt_ms);
        let clock = self.clock_ms;

        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due_ms <= clock {
                due.push(*s);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| {
            a.due_ms
                .partial_cmp(&b.due_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.seq.cmp(&b.seq))
        });
        due.into_iter().map(|s| s.mutation).collect()
    }

    /// Queue the entrance choreography: tint up immediately, tiles return
    /// center-out in rings, edge tiles slide back to their slots, the
    /// selector follows, and only then does the focused entry re-expand:
    /// the sub-menu must not unfold under a tile that is still moving.
    pub fn show_menu(&mut self, entry_count: usize, focused: usize) {
        self.cancel(Group::Transition);
        debug!("scheduling show choreography for {entry_count} tiles");

        self.schedule(
            Group::Transition,
            0,
            Mutation::TintAlphaDest(config::TINT_SHOWN_ALPHA),
        );

        let mut max_ring = 0;
        for (index, ring) in interior_rings(entry_count) {
            max_ring = max_ring.max(ring);
            let delay = if ring == 0 {
                config::SHOW_CENTER_MS
            } else {
                ring * config::SHOW_RING_STAGGER_MS
            };
            self.schedule(
                Group::Transition,
                delay,
                Mutation::EntryPosYDest {
                    index,
                    y: config::ENTRY_ROW_Y,
                },
            );
        }

        let edge_ms = max_ring * config::SHOW_RING_STAGGER_MS + config::SHOW_EDGE_EXTRA_MS;
        for index in edge_indices(entry_count) {
            self.schedule(
                Group::Transition,
                edge_ms,
                Mutation::EntryPosXDest {
                    index,
                    x: config::slot_x(index),
                },
            );
        }

        let selector_ms = edge_ms + config::SHOW_SELECTOR_EXTRA_MS;
        self.schedule(
            Group::Transition,
            selector_ms,
            Mutation::SelectorPosYDest(config::ENTRY_ROW_Y),
        );
        self.schedule(
            Group::Transition,
            selector_ms,
            Mutation::SelectorScaleToEntry(focused),
        );

        let finalize_ms = selector_ms + config::SHOW_FINALIZE_EXTRA_MS;
        self.schedule(
            Group::Transition,
            finalize_ms,
            Mutation::EntrySelected {
                index: focused,
                selected: true,
            },
        );
        self.schedule(Group::Transition, finalize_ms, Mutation::MenuVisible(true));
    }

    /// Queue the exit choreography: sub-menu collapses at once, the selector
    /// retracts, tiles drop off center-out, edge tiles slide off sideways.
    pub fn hide_menu(&mut self, entry_count: usize, focused: usize) {
        self.cancel(Group::Transition);
        debug!("scheduling hide choreography for {entry_count} tiles");

        self.schedule(
            Group::Transition,
            0,
            Mutation::TintAlphaDest(config::TINT_HIDDEN_ALPHA),
        );
        self.schedule(
            Group::Transition,
            0,
            Mutation::EntrySelected {
                index: focused,
                selected: false,
            },
        );
        self.schedule(
            Group::Transition,
            config::HIDE_SELECTOR_MS,
            Mutation::SelectorPosYDest(config::SELECTOR_HIDDEN_Y),
        );

        let mut max_ring = 0;
        for (index, ring) in interior_rings(entry_count) {
            max_ring = max_ring.max(ring);
            self.schedule(
                Group::Transition,
                config::HIDE_BASE_MS + ring * config::HIDE_RING_STAGGER_MS,
                Mutation::EntryPosYDest {
                    index,
                    y: config::ENTRY_HIDDEN_Y,
                },
            );
        }

        let edge_ms = config::HIDE_BASE_MS + max_ring * config::HIDE_RING_STAGGER_MS;
        for index in edge_indices(entry_count) {
            let x = if index == 0 {
                -config::EDGE_HIDDEN_X
            } else {
                config::EDGE_HIDDEN_X
            };
            self.schedule(
                Group::Transition,
                edge_ms,
                Mutation::EntryPosXDest { index, x },
            );
        }
    }
}

/// Interior tile indices with their distance from the center tile. The two
/// outermost tiles travel horizontally instead and are handled as edges when
/// there are at least three tiles.
fn interior_rings(entry_count: usize) -> Vec<(usize, u64)> {
    let center = entry_count / 2;
    let range = if entry_count >= 3 {
        1..entry_count - 1
    } else {
        0..entry_count
    };
    range
        .map(|index| (index, center.abs_diff(index) as u64))
        .collect()
}

fn edge_indices(entry_count: usize) -> Vec<usize> {
    if entry_count >= 3 {
        vec![0, entry_count - 1]
    } else {
        Vec::new()
    }
}
