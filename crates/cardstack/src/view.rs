//! Per-card transforms for the renderer.
//!
//! Nothing here mutates the deck. The renderer calls [`compose_visuals`]
//! after each tick and draws the result in `z_index` order.

use crate::coordinator::GestureCoordinator;
use crate::deck_state::DeckState;
use crate::item::CardItem;
use cardstack_core::Clock;
use cardstack_foundation::{classify_active, overlay_opacity, rotation_for, SwipeDirection};
use cardstack_graphics::{GraphicsLayer, Point};

/// Direction hint drawn over a card ("like", "nope", ...).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    pub direction: SwipeDirection,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardVisual {
    /// Position in the card collection.
    pub index: usize,
    pub layer: GraphicsLayer,
    pub overlay: Option<Overlay>,
    /// Higher draws on top. Lower indices are always above higher ones.
    pub z_index: usize,
    /// Only the settled top card receives drags.
    pub interactive: bool,
}

/// Visuals for every card in the renderable window, in window order.
///
/// Background cards sit `depth` steps behind the top card, shrinking and
/// shifting down per step. As the top card is dragged towards its commit
/// threshold they move forward by up to one step.
pub fn compose_visuals<T: CardItem, C: Clock>(
    deck: &DeckState<T, C>,
    gestures: &GestureCoordinator,
) -> Vec<CardVisual> {
    let config = deck.config();
    let container = deck.container_size();
    let threshold = config.swipe_threshold(container.width);
    let current = deck.current_index();

    let top_offset = match deck.transition(current) {
        Some(record) => record.translation(),
        None => gestures.drag_offset(),
    };
    let progress = overlay_opacity(top_offset, threshold);

    let indices = deck.renderable_indices();
    let count = indices.len();
    indices
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let z_index = count - position;
            if let Some(record) = deck.transition(index) {
                let translation = record.translation();
                let max_degrees = if record.is_programmatic() {
                    config.programmatic_rotation_degrees
                } else {
                    config.max_rotation_degrees
                };
                return CardVisual {
                    index,
                    layer: moved_layer(translation, container.width, max_degrees),
                    overlay: Some(Overlay {
                        direction: record.direction(),
                        opacity: overlay_opacity(translation, threshold),
                    }),
                    z_index,
                    interactive: false,
                };
            }

            if index == current {
                let offset = gestures.drag_offset();
                return CardVisual {
                    index,
                    layer: moved_layer(offset, container.width, config.max_rotation_degrees),
                    overlay: classify_active(offset).map(|direction| Overlay {
                        direction,
                        opacity: overlay_opacity(offset, threshold),
                    }),
                    z_index,
                    interactive: true,
                };
            }

            let depth = (index.saturating_sub(current) as f32 - progress).max(0.0);
            CardVisual {
                index,
                layer: GraphicsLayer {
                    alpha: (config.visible_count as f32 - depth).clamp(0.0, 1.0),
                    scale: 1.0 - depth * config.stack_scale_step,
                    translation_y: depth * config.stack_offset,
                    ..GraphicsLayer::default()
                },
                overlay: None,
                z_index,
                interactive: false,
            }
        })
        .collect()
}

fn moved_layer(offset: Point, width: f32, max_degrees: f32) -> GraphicsLayer {
    GraphicsLayer {
        translation_x: offset.x,
        translation_y: offset.y,
        rotation_z: rotation_for(offset.x, width, max_degrees),
        ..GraphicsLayer::default()
    }
}
