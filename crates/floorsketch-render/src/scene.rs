//! Full-frame scene renderer.
//!
//! Every frame is painted from scratch: background, grid, committed
//! elements in stacking order, then the in-progress draft preview. Nothing
//! is retained between frames, so rendering the same state twice produces
//! the same command stream.

use std::f64::consts::FRAC_PI_2;

use floorsketch_core::{DraftState, Element, ElementStore, PencilPath, Room, Wall};
use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::surface::{PaintSurface, Stroke};
use crate::theme::Theme;

/// Span of a door opening, in model units.
pub const DOOR_SIZE: f64 = 40.0;
/// Span of a window, in model units.
pub const WINDOW_SIZE: f64 = 40.0;
/// Footprint of a camera marker, in model units.
pub const CAMERA_SIZE: f64 = 30.0;

const LABEL_SIZE: f64 = 12.0;
const SELECTION_DOT_RADIUS: f64 = 4.0;

/// Everything the renderer needs to paint one frame.
pub struct RenderContext<'a> {
    store: &'a ElementStore,
    draft: &'a DraftState,
    pan_offset: Vec2,
    grid_size: f64,
    theme: Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(store: &'a ElementStore, draft: &'a DraftState, pan_offset: Vec2) -> Self {
        Self {
            store,
            draft,
            pan_offset,
            grid_size: floorsketch_core::GRID_SIZE,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = grid_size;
        self
    }
}

/// Paint one complete frame onto `surface`.
pub fn render(surface: &mut dyn PaintSurface, ctx: &RenderContext<'_>) {
    surface.clear(ctx.theme.background);
    draw_grid(surface, ctx);
    for element in ctx.store.elements() {
        let selected = ctx.store.is_selected(element.id());
        match element {
            Element::Room(room) => draw_room(surface, ctx, room, selected),
            Element::Wall(wall) => draw_wall(surface, ctx, wall, selected),
            Element::Door(door) => {
                draw_door(surface, ctx, door.position, door.rotation, selected);
            }
            Element::Window(window) => {
                draw_window(surface, ctx, window.position, window.rotation, selected);
            }
            Element::Camera(camera) => {
                draw_camera(surface, ctx, camera.position, camera.rotation, selected);
            }
            Element::Pencil(path) => draw_pencil(surface, ctx, path, selected),
        }
    }
    draw_preview(surface, ctx);
}

/// Place a local offset relative to `origin`, rotated by `degrees`.
fn place(origin: Point, local: Vec2, degrees: f64) -> Point {
    let rad = degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    origin
        + Vec2::new(
            local.x * cos - local.y * sin,
            local.x * sin + local.y * cos,
        )
}

fn draw_grid(surface: &mut dyn PaintSurface, ctx: &RenderContext<'_>) {
    let size = surface.size();
    let stroke = Stroke::solid(ctx.theme.grid, 1.0);

    // Grid lines track the pan offset so the world appears to move
    // under a fixed viewport.
    let mut x = ctx.pan_offset.x.rem_euclid(ctx.grid_size);
    while x <= size.width {
        surface.line(Point::new(x, 0.0), Point::new(x, size.height), stroke);
        x += ctx.grid_size;
    }
    let mut y = ctx.pan_offset.y.rem_euclid(ctx.grid_size);
    while y <= size.height {
        surface.line(Point::new(0.0, y), Point::new(size.width, y), stroke);
        y += ctx.grid_size;
    }
}

fn selection_stroke(ctx: &RenderContext<'_>, normal: Color, selected: bool) -> Stroke {
    if selected {
        Stroke::solid(ctx.theme.highlight, 3.0)
    } else {
        Stroke::solid(normal, 2.0)
    }
}

fn draw_room(surface: &mut dyn PaintSurface, ctx: &RenderContext<'_>, room: &Room, selected: bool) {
    let rect = room.as_rect() + ctx.pan_offset;
    surface.fill_rect(rect, ctx.theme.room_fill);
    surface.stroke_rect(rect, selection_stroke(ctx, ctx.theme.room_stroke, selected));

    let cells_w = (room.width / ctx.grid_size).round() as i64;
    let cells_h = (room.height / ctx.grid_size).round() as i64;
    surface.text(
        &format!("{cells_w}x{cells_h}"),
        rect.center(),
        LABEL_SIZE,
        ctx.theme.room_label,
    );
}

fn draw_wall(surface: &mut dyn PaintSurface, ctx: &RenderContext<'_>, wall: &Wall, selected: bool) {
    let start = wall.start + ctx.pan_offset;
    let end = wall.end + ctx.pan_offset;
    if selected {
        surface.line(
            start,
            end,
            Stroke::solid(ctx.theme.highlight, wall.thickness + 1.0),
        );
    } else {
        surface.line(start, end, Stroke::solid(ctx.theme.wall_stroke, wall.thickness));
    }
}

fn draw_door(
    surface: &mut dyn PaintSurface,
    ctx: &RenderContext<'_>,
    position: Point,
    rotation: f64,
    selected: bool,
) {
    let center = position + ctx.pan_offset;
    let hinge = place(center, Vec2::new(-DOOR_SIZE / 2.0, 0.0), rotation);
    let latch = place(center, Vec2::new(DOOR_SIZE / 2.0, 0.0), rotation);

    let stroke = selection_stroke(ctx, ctx.theme.door_stroke, selected);
    surface.line(hinge, latch, stroke);

    // Swing arc sweeps a quarter turn from the hinge toward the latch.
    let rad = rotation.to_radians();
    surface.arc(
        hinge,
        DOOR_SIZE,
        rad,
        rad + FRAC_PI_2,
        Stroke::solid(ctx.theme.door_arc, 1.5),
    );

    if selected {
        surface.fill_circle(center, SELECTION_DOT_RADIUS, ctx.theme.highlight);
    }
}

fn draw_window(
    surface: &mut dyn PaintSurface,
    ctx: &RenderContext<'_>,
    position: Point,
    rotation: f64,
    selected: bool,
) {
    let center = position + ctx.pan_offset;
    let half_w = WINDOW_SIZE / 2.0;
    let half_h = 3.0;
    let corners = [
        place(center, Vec2::new(-half_w, -half_h), rotation),
        place(center, Vec2::new(half_w, -half_h), rotation),
        place(center, Vec2::new(half_w, half_h), rotation),
        place(center, Vec2::new(-half_w, half_h), rotation),
    ];
    let stroke = selection_stroke(ctx, ctx.theme.window_stroke, selected);
    surface.polygon(&corners, ctx.theme.window_fill, Some(stroke));

    // Mullion across the bar, splitting it into two panes.
    surface.line(
        place(center, Vec2::new(0.0, -half_h), rotation),
        place(center, Vec2::new(0.0, half_h), rotation),
        Stroke::solid(ctx.theme.window_stroke, 1.0),
    );

    if selected {
        surface.fill_circle(center, SELECTION_DOT_RADIUS, ctx.theme.highlight);
    }
}

fn draw_camera(
    surface: &mut dyn PaintSurface,
    ctx: &RenderContext<'_>,
    position: Point,
    rotation: f64,
    selected: bool,
) {
    let center = position + ctx.pan_offset;

    // Field-of-view cone fans out in the camera's facing direction.
    let cone = [
        center,
        place(center, Vec2::new(60.0, -40.0), rotation),
        place(center, Vec2::new(60.0, 40.0), rotation),
    ];
    surface.polygon(
        &cone,
        ctx.theme.cone_fill,
        Some(Stroke::solid(ctx.theme.cone_stroke, 1.0)),
    );

    let body_radius = CAMERA_SIZE / 3.0;
    let body = if selected {
        ctx.theme.highlight
    } else {
        ctx.theme.camera_body
    };
    surface.fill_circle(center, body_radius, body);
    surface.fill_circle(center, 5.0, ctx.theme.background);
}

fn draw_pencil(
    surface: &mut dyn PaintSurface,
    ctx: &RenderContext<'_>,
    path: &PencilPath,
    selected: bool,
) {
    let points: Vec<Point> = path.points.iter().map(|p| *p + ctx.pan_offset).collect();
    if selected {
        // Glow pass under the stroke itself.
        surface.polyline(
            &points,
            Stroke::solid(ctx.theme.highlight_soft, path.line_width + 4.0),
        );
    }
    surface.polyline(&points, Stroke::solid(path.color.into(), path.line_width));
}

fn draw_preview(surface: &mut dyn PaintSurface, ctx: &RenderContext<'_>) {
    let stroke = Stroke::dashed(ctx.theme.highlight, 2.0);
    match ctx.draft {
        DraftState::DrawingRoom { start, current } => {
            let rect = Rect::from_points(*start + ctx.pan_offset, *current + ctx.pan_offset);
            surface.fill_rect(rect, ctx.theme.preview_fill);
            surface.stroke_rect(rect, stroke);
        }
        DraftState::DrawingWall { start, current } => {
            surface.line(*start + ctx.pan_offset, *current + ctx.pan_offset, stroke);
        }
        DraftState::DrawingPencil { points } if points.len() >= 2 => {
            let shifted: Vec<Point> = points.iter().map(|p| *p + ctx.pan_offset).collect();
            surface.polyline(&shifted, stroke);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintCmd, RecordingSurface};
    use floorsketch_core::{Camera, Door, Editor, Modifiers, PointerButton};
    use kurbo::Size;

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Size::new(200.0, 120.0))
    }

    fn store_with(elements: Vec<Element>) -> ElementStore {
        let mut store = ElementStore::default();
        store.replace(elements).unwrap();
        store
    }

    #[test]
    fn test_frame_starts_with_background_clear() {
        let store = ElementStore::default();
        let ctx = RenderContext::new(&store, &DraftState::Idle, Vec2::ZERO);
        let mut surface = surface();
        render(&mut surface, &ctx);

        assert_eq!(
            surface.commands()[0],
            PaintCmd::Clear(Theme::default().background)
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let store = store_with(vec![
            Element::Room(Room::from_corners(
                Point::new(20.0, 20.0),
                Point::new(100.0, 80.0),
            )),
            Element::Camera(Camera::at(Point::new(140.0, 60.0))),
        ]);
        let ctx = RenderContext::new(&store, &DraftState::Idle, Vec2::new(7.0, -3.0));

        let mut surface = surface();
        render(&mut surface, &ctx);
        let first = surface.commands().to_vec();
        render(&mut surface, &ctx);

        assert_eq!(surface.commands(), first.as_slice());
    }

    #[test]
    fn test_grid_lines_track_pan_offset() {
        let store = ElementStore::default();
        let ctx = RenderContext::new(&store, &DraftState::Idle, Vec2::new(-5.0, 0.0));
        let mut surface = surface();
        render(&mut surface, &ctx);

        // -5 mod 20 = 15, so the first vertical line sits at x = 15.
        let first_vertical = surface
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                PaintCmd::Line { from, to, .. } if from.x == to.x => Some(from.x),
                _ => None,
            })
            .unwrap();
        assert_eq!(first_vertical, 15.0);
    }

    #[test]
    fn test_selected_room_gets_highlight_stroke() {
        let room = Room::from_corners(Point::new(0.0, 0.0), Point::new(40.0, 40.0));
        let id = room.id;
        let mut store = store_with(vec![Element::Room(room)]);
        store.set_selected(Some(id));

        let ctx = RenderContext::new(&store, &DraftState::Idle, Vec2::ZERO);
        let mut surface = surface();
        render(&mut surface, &ctx);

        let stroke = surface
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                PaintCmd::StrokeRect { stroke, .. } => Some(*stroke),
                _ => None,
            })
            .unwrap();
        assert_eq!(stroke.color, Theme::default().highlight);
        assert_eq!(stroke.width, 3.0);
    }

    #[test]
    fn test_dangling_selection_renders_without_highlight() {
        let mut store = store_with(vec![Element::Door(Door::at(Point::new(60.0, 60.0)))]);
        store.set_selected(Some(uuid::Uuid::new_v4()));

        let ctx = RenderContext::new(&store, &DraftState::Idle, Vec2::ZERO);
        let mut surface = surface();
        render(&mut surface, &ctx);

        let has_highlight = surface.commands().iter().any(|cmd| match cmd {
            PaintCmd::Line { stroke, .. } => stroke.color == Theme::default().highlight,
            PaintCmd::FillCircle { color, .. } => *color == Theme::default().highlight,
            _ => false,
        });
        assert!(!has_highlight);
    }

    #[test]
    fn test_room_label_counts_grid_cells() {
        let store = store_with(vec![Element::Room(Room::from_corners(
            Point::new(100.0, 100.0),
            Point::new(240.0, 180.0),
        ))]);
        let ctx = RenderContext::new(&store, &DraftState::Idle, Vec2::ZERO);
        let mut surface = surface();
        render(&mut surface, &ctx);

        let label = surface
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                PaintCmd::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(label, "7x4");
    }

    #[test]
    fn test_window_mullion_crosses_the_bar() {
        let store = store_with(vec![Element::Window(
            floorsketch_core::Window::at(Point::new(100.0, 100.0)),
        )]);
        let ctx = RenderContext::new(&store, &DraftState::Idle, Vec2::ZERO);
        let mut surface = surface();
        render(&mut surface, &ctx);

        // The divider is the width-1 window-stroke line: 6 units across the
        // short axis, not a span of the 40-unit bar.
        let (from, to) = surface
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                PaintCmd::Line { from, to, stroke }
                    if stroke.color == Theme::default().window_stroke
                        && stroke.width == 1.0 =>
                {
                    Some((*from, *to))
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(from, Point::new(100.0, 97.0));
        assert_eq!(to, Point::new(100.0, 103.0));
        assert!((from.distance(to) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_active_room_draft_paints_dashed_preview() {
        let mut editor = Editor::new();
        let mut store = ElementStore::default();
        editor.set_tool(floorsketch_core::ToolKind::Room);
        editor.pointer_down(
            &mut store,
            Point::new(40.0, 40.0),
            PointerButton::Left,
            Modifiers::default(),
        );
        editor.pointer_move(Point::new(120.0, 100.0));

        let ctx = RenderContext::new(&store, editor.draft(), editor.viewport().offset);
        let mut surface = surface();
        render(&mut surface, &ctx);

        let dashed = surface.commands().iter().any(|cmd| match cmd {
            PaintCmd::StrokeRect { stroke, .. } => stroke.dashed,
            _ => false,
        });
        assert!(dashed);
    }
}
