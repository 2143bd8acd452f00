use glam::Vec2;

use crate::components::entity::ComponentKind;
use crate::components::trace::Trace;
use crate::core::world::World;
use crate::renderer::draw::{DrawList, HighlightDraw, Outline, ShapeDraw, TraceDraw};

/// A trace step at least this long on either axis is a wrap-around jump, not a line.
pub const TRACE_BREAK: f32 = 100.0;
/// Gap between an entity and its selection outline, per side.
pub const HIGHLIGHT_MARGIN: f32 = 4.0;

/// Fill the traces, shapes and highlights of `list` from the live entities,
/// in world order. Camera and frame fields are left to the caller.
pub fn build_draw_list(world: &World, list: &mut DrawList) {
    list.clear();

    for entity in world.live() {
        if let Some(trace) = &entity.trace {
            let polylines = split_trace(trace);
            if !polylines.is_empty() {
                list.traces.push(TraceDraw {
                    color: trace.color,
                    width: trace.width,
                    polylines,
                });
            }
        }
    }

    for entity in world.live().filter(|e| e.has_all(&[ComponentKind::Transform, ComponentKind::Shape])) {
        let (Some(transform), Some(shape)) = (&entity.transform, &entity.shape) else {
            continue;
        };
        let outline = match (shape.outline_color, shape.outline_width) {
            (Some(color), Some(width)) if width > 0.0 => Some(Outline { color, width }),
            _ => None,
        };
        list.shapes.push(ShapeDraw {
            id: entity.id,
            kind: shape.kind,
            position: transform.position,
            scale: transform.scale,
            angle: transform.angle,
            color: shape.color,
            outline,
        });
    }

    for entity in world.live() {
        let (Some(transform), Some(selectable)) = (&entity.transform, &entity.selectable) else {
            continue;
        };
        if selectable.highlight {
            list.highlights.push(HighlightDraw {
                position: transform.position,
                size: transform.scale + Vec2::splat(HIGHLIGHT_MARGIN * 2.0),
                color: selectable.highlight_color,
            });
        }
    }
}

/// Cut a trace into connected runs, breaking wherever consecutive points
/// jump by `TRACE_BREAK` or more on an axis. Single-point runs are dropped.
pub fn split_trace(trace: &Trace) -> Vec<Vec<Vec2>> {
    let mut runs: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    for point in trace.points.iter().copied() {
        if let Some(last) = current.last() {
            let jump = (point - *last).abs();
            if jump.x >= TRACE_BREAK || jump.y >= TRACE_BREAK {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push(point);
    }
    runs.push(current);
    runs.retain(|run| run.len() > 1);
    runs
}
