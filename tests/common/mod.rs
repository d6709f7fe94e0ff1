//! Shared fakes for host tests
//!
//! Every fake is a cheap handle over shared state so a test can keep a
//! clone for inspection after handing another to the engine.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use ranging_game::game::engine::RoundEngine;
use ranging_game::game::event::GameEvent;
use ranging_game::game::ports::{Dice, EventSink, Pacer, PresenceSensor, Rangefinder};
use ranging_game::game::profile::HardwareProfile;
use ranging_game::types::DistanceSample;

// ============================================================================
// Rangefinder
// ============================================================================

#[derive(Default)]
struct RangeState {
    pending: Option<DistanceSample>,
    echoes: VecDeque<Option<f32>>,
    triggers: u32,
}

/// Rangefinder whose echoes are scripted per trigger
#[derive(Clone, Default)]
pub struct ScriptedRange(Rc<RefCell<RangeState>>);

impl ScriptedRange {
    /// Queue the echo produced by the next trigger (None = no echo)
    pub fn queue_echo(&self, cm: Option<f32>) {
        self.0.borrow_mut().echoes.push_back(cm);
    }

    /// Publish a sample as if an echo just completed
    pub fn land(&self, cm: f32) {
        self.0.borrow_mut().pending = Some(DistanceSample::from_cm(cm));
    }

    /// Check for a pending sample
    pub fn has_pending(&self) -> bool {
        self.0.borrow().pending.is_some()
    }

    /// Number of trigger pulses issued
    pub fn triggers(&self) -> u32 {
        self.0.borrow().triggers
    }
}

impl Rangefinder for ScriptedRange {
    fn trigger(&mut self) {
        let mut state = self.0.borrow_mut();
        state.triggers += 1;
        state.pending = state
            .echoes
            .pop_front()
            .flatten()
            .map(DistanceSample::from_cm);
    }

    fn latest(&self) -> Option<DistanceSample> {
        self.0.borrow().pending
    }

    fn take(&mut self) -> Option<DistanceSample> {
        self.0.borrow_mut().pending.take()
    }
}

// ============================================================================
// Proximity
// ============================================================================

/// Proximity sensor with a settable level
#[derive(Clone, Default)]
pub struct FakeProximity {
    triggered: Rc<Cell<bool>>,
    reads: Rc<Cell<u32>>,
}

impl FakeProximity {
    /// Set the detected state
    pub fn set(&self, triggered: bool) {
        self.triggered.set(triggered);
    }

    /// Number of reads so far
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl PresenceSensor for FakeProximity {
    fn is_triggered(&mut self) -> bool {
        self.reads.set(self.reads.get() + 1);
        self.triggered.get()
    }
}

// ============================================================================
// Pacer
// ============================================================================

/// Pacer that records every pause instead of waiting
#[derive(Clone, Default)]
pub struct RecordingPacer(Rc<RefCell<Vec<u32>>>);

impl RecordingPacer {
    /// All pauses so far, in order
    pub fn pauses(&self) -> Vec<u32> {
        self.0.borrow().clone()
    }

    /// Sum of all pauses
    pub fn total_ms(&self) -> u64 {
        self.0.borrow().iter().map(|&ms| u64::from(ms)).sum()
    }

    /// Forget recorded pauses
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Pacer for RecordingPacer {
    fn pause_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(ms);
    }
}

// ============================================================================
// Dice
// ============================================================================

/// Dice returning scripted rolls; `bound - 1` once the script runs out
#[derive(Clone, Default)]
pub struct ScriptedDice(Rc<RefCell<VecDeque<u32>>>);

impl ScriptedDice {
    /// Queue a roll result
    pub fn push(&self, value: u32) {
        self.0.borrow_mut().push_back(value);
    }

    /// Queue a threshold roll for the given target in cm
    pub fn push_threshold(&self, cm: u32) {
        self.push(cm - 10);
    }

    /// Rolls still queued
    pub fn remaining(&self) -> usize {
        self.0.borrow().len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, bound: u32) -> u32 {
        let value = self
            .0
            .borrow_mut()
            .pop_front()
            .unwrap_or(bound.saturating_sub(1));
        value.min(bound.saturating_sub(1))
    }
}

// ============================================================================
// Event sink
// ============================================================================

/// Sink that keeps every event
#[derive(Default)]
pub struct EventLog(pub Vec<GameEvent>);

impl EventLog {
    /// Status discriminators in order
    pub fn statuses(&self) -> Vec<&'static str> {
        self.0.iter().map(GameEvent::status).collect()
    }

    /// Count of events with the given status
    pub fn count(&self, status: &str) -> usize {
        self.0.iter().filter(|e| e.status() == status).count()
    }

    /// Last event
    pub fn last(&self) -> Option<&GameEvent> {
        self.0.last()
    }

    /// Forget recorded events
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &GameEvent) {
        self.0.push(*event);
    }
}

// ============================================================================
// Engine rig
// ============================================================================

/// Engine wired to fakes
pub type TestEngine = RoundEngine<ScriptedRange, FakeProximity, RecordingPacer, ScriptedDice>;

/// Handles onto the fakes inside a [`TestEngine`]
#[derive(Clone, Default)]
pub struct Rig {
    pub range: ScriptedRange,
    pub proximity: FakeProximity,
    pub pacer: RecordingPacer,
    pub dice: ScriptedDice,
}

impl Rig {
    /// Build an engine sharing this rig's fakes
    pub fn engine(&self, profile: HardwareProfile) -> TestEngine {
        RoundEngine::new(
            profile,
            self.range.clone(),
            self.proximity.clone(),
            self.pacer.clone(),
            self.dice.clone(),
        )
    }
}
