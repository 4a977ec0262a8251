//! The card stack state machine.

use smallvec::SmallVec;
use swipedeck_core::{SwipeConfig, SwipeDecision, SwipeEngine};
use swipedeck_foundation::{DragGestureRecognizer, PointerEvent};

use crate::card::{CardId, CardTransform};

/// Emitted once per completed interaction with the top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub card: CardId,
    pub decision: SwipeDecision,
}

/// Operating on an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    Empty,
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackError::Empty => write!(f, "card stack is empty"),
        }
    }
}

impl std::error::Error for StackError {}

struct CardEntry<T> {
    id: CardId,
    payload: T,
}

/// Ordered stack of pending cards, generic over the card payload.
///
/// The top card owns the single live [`SwipeEngine`]; cards below it are
/// inert until they surface. Entries are stored bottom-to-top so a
/// committed decision pops the top without disturbing the rest of the
/// queue.
pub struct CardStack<T> {
    cards: SmallVec<[CardEntry<T>; 8]>,
    config: SwipeConfig,
    engine: Option<SwipeEngine>,
    recognizer: DragGestureRecognizer,
    next_id: u64,
}

impl<T> CardStack<T> {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            cards: SmallVec::new(),
            config,
            engine: None,
            recognizer: DragGestureRecognizer::new(),
            next_id: 0,
        }
    }

    /// Add a card at the bottom of the stack.
    pub fn push(&mut self, payload: T) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.cards.insert(0, CardEntry { id, payload });
        if self.engine.is_none() {
            self.arm_top();
        }
        id
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card currently accepting gestures.
    pub fn top(&self) -> Option<(CardId, &T)> {
        self.cards.last().map(|entry| (entry.id, &entry.payload))
    }

    /// Cards from the bottom of the pile to the top, with their stacking
    /// depth (top card is depth 0).
    pub fn iter_with_depth(&self) -> impl Iterator<Item = (CardId, &T, usize)> {
        let top_index = self.cards.len().saturating_sub(1);
        self.cards
            .iter()
            .enumerate()
            .map(move |(index, entry)| (entry.id, &entry.payload, top_index - index))
    }

    /// The top card's engine, for hosts that drive it directly.
    pub fn engine(&self) -> Option<&SwipeEngine> {
        self.engine.as_ref()
    }

    /// Visual values for painting the top card this frame.
    pub fn top_transform(&self) -> Option<CardTransform> {
        self.engine.as_ref().map(|engine| CardTransform {
            offset: engine.offset(),
            rotation_degrees: engine.rotation_degrees(),
            opacity: engine.opacity(),
        })
    }

    /// Route one pointer event to the top card.
    ///
    /// Returns `true` if the event belonged to a tracked gesture. Events
    /// against an empty stack are dropped.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        self.recognizer.handle(engine, event)
    }

    /// Advance the top card's settle / fly-out animation to `now_millis`
    /// and finish the interaction once the animation lands.
    ///
    /// A committed decision pops the top card; a cancelled one keeps the
    /// card and re-arms a fresh engine for it. Returns the outcome when an
    /// interaction completed this tick.
    pub fn tick(&mut self, now_millis: u64) -> Option<SwipeOutcome> {
        let engine = self.engine.as_mut()?;
        engine.tick(now_millis);
        if !engine.resolution_finished() {
            return None;
        }

        let decision = engine.complete_resolution()?;
        let Some(card) = self.cards.last().map(|entry| entry.id) else {
            log::warn!("resolution completed with no card on the stack");
            self.engine = None;
            return None;
        };
        log::debug!("card {:?} resolved as {:?}", card, decision);

        match decision {
            SwipeDecision::Like | SwipeDecision::Dislike => {
                self.cards.pop();
            }
            SwipeDecision::Cancelled => {}
        }
        self.arm_top();
        Some(SwipeOutcome { card, decision })
    }

    /// Programmatically accept the top card, as the action bar does.
    ///
    /// Removes the card immediately, without a fly-out animation.
    pub fn like_top(&mut self) -> Result<SwipeOutcome, StackError> {
        self.decide_top(SwipeDecision::Like)
    }

    /// Programmatically reject the top card, as the action bar does.
    pub fn dislike_top(&mut self) -> Result<SwipeOutcome, StackError> {
        self.decide_top(SwipeDecision::Dislike)
    }

    fn decide_top(&mut self, decision: SwipeDecision) -> Result<SwipeOutcome, StackError> {
        let entry = self.cards.pop().ok_or(StackError::Empty)?;
        self.arm_top();
        Ok(SwipeOutcome {
            card: entry.id,
            decision,
        })
    }

    /// Point the recognizer and a fresh engine at the current top card.
    fn arm_top(&mut self) {
        self.recognizer.reset();
        self.engine = if self.cards.is_empty() {
            None
        } else {
            Some(SwipeEngine::new(self.config))
        };
    }
}

#[cfg(test)]
#[path = "tests/stack_tests.rs"]
mod tests;
