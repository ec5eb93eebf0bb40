/*!
Scroll-stacked skill cards.

Cards sit in a column. Every card after the first waits slightly low, dimmed and shrunk. As
the page scrolls, each card's own trigger progress `p` (0 when its top is
[`CARD_TRIGGER_INSET_PX`] above the viewport bottom, 1 when its top reaches the viewport
center) lifts it into place and pushes the card before it up and back:

| card     | y            | opacity       | scale          |
|----------|--------------|---------------|----------------|
| incoming | `40 (1 - p)` | `0.6 + 0.4 p` | `0.95 + 0.05 p` |
| previous | `-60 p`      | `1 - 0.3 p`   | `1 - 0.05 p`    |
*/

use crate::{
    constants::{
        CARD_PUSH_FADE, CARD_PUSH_PX, CARD_PUSH_SHRINK, CARD_REST_OFFSET_PX, CARD_REST_OPACITY,
        CARD_REST_SCALE, CARD_TRIGGER_INSET_PX,
    },
    listener::{ListenerGuard, ListenerKind, ListenerRegistry},
    utils::lerp,
};

/// Offset from a card's layout position (px, +Y down), opacity and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl CardPose {
    pub const SETTLED: CardPose = CardPose {
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub const WAITING: CardPose = CardPose {
        y: CARD_REST_OFFSET_PX,
        opacity: CARD_REST_OPACITY,
        scale: CARD_REST_SCALE,
    };
}

/// Poses driven by one card's trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackStep {
    pub incoming: CardPose,
    pub previous: CardPose,
}

/// Poses for a card at trigger progress `progress` and for the card before it.
/// Progress is clamped to `[0, 1]`; NaN counts as 0.
pub fn card_stack(progress: f32) -> StackStep {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    StackStep {
        incoming: CardPose {
            y: lerp(CardPose::WAITING.y, 0.0, p),
            opacity: lerp(CardPose::WAITING.opacity, 1.0, p),
            scale: lerp(CardPose::WAITING.scale, 1.0, p),
        },
        previous: CardPose {
            y: -CARD_PUSH_PX * p,
            opacity: 1.0 - CARD_PUSH_FADE * p,
            scale: 1.0 - CARD_PUSH_SHRINK * p,
        },
    }
}

/// Trigger progress of a card whose top edge is at `card_top` (page px).
pub fn trigger_progress(card_top: f32, viewport_height: f32) -> f32 {
    let start = viewport_height - CARD_TRIGGER_INSET_PX;
    let end = viewport_height * 0.5;
    if card_top.is_nan() || start.is_nan() {
        return 0.0;
    }
    // Viewports too short for the inset: the trigger degenerates to a step at the center.
    if start <= end {
        return if card_top <= end { 1.0 } else { 0.0 };
    }
    ((start - card_top) / (start - end)).clamp(0.0, 1.0)
}

/// A scrollable column of `count` cards `spacing` px apart.
#[derive(Debug)]
pub struct CardStack {
    count: usize,
    spacing: f32,
    scroll: f32,
    _scroll_listener: ListenerGuard,
}

impl CardStack {
    pub fn new(count: usize, spacing: f32, registry: &ListenerRegistry) -> Self {
        Self {
            count,
            spacing: spacing.max(0.0),
            scroll: 0.0,
            _scroll_listener: registry.acquire(ListenerKind::Scroll),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Scrolling stops once the last card is where the first one started.
    pub fn max_scroll(&self) -> f32 {
        self.spacing * self.count.saturating_sub(1) as f32
    }

    pub fn scroll_by(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll());
    }

    /// Layout top of card `index` (before its pose offset) when the unscrolled first card
    /// sits at `first_top`.
    pub fn card_top(&self, index: usize, first_top: f32) -> f32 {
        first_top + index as f32 * self.spacing - self.scroll
    }

    /// Front-to-back stacking order: earlier cards draw above later ones.
    pub fn z_index(&self, index: usize) -> usize {
        self.count.saturating_sub(index)
    }

    /// Current pose of every card.
    ///
    /// A card whose trigger has not started leaves the card before it alone, so the first
    /// card keeps its settled pose until the second begins to arrive.
    pub fn poses(&self, first_top: f32, viewport_height: f32) -> Vec<CardPose> {
        let mut poses: Vec<CardPose> = (0..self.count)
            .map(|i| {
                if i == 0 {
                    CardPose::SETTLED
                } else {
                    CardPose::WAITING
                }
            })
            .collect();

        for index in 1..self.count {
            let p = trigger_progress(self.card_top(index, first_top), viewport_height);
            let step = card_stack(p);
            poses[index] = step.incoming;
            if p > 0.0 {
                poses[index - 1] = step.previous;
            }
        }
        poses
    }

    /// Fill fraction of the timeline running alongside the cards: 0 while the column top is
    /// below the viewport center, 1 once its bottom has passed it.
    pub fn timeline_progress(&self, first_top: f32, viewport_height: f32) -> f32 {
        let height = self.spacing * self.count as f32;
        if height <= 0.0 {
            return 0.0;
        }
        let top = first_top - self.scroll;
        let p = (viewport_height * 0.5 - top) / height;
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}
