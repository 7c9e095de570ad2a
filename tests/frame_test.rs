use std::time::{Duration, Instant};

use wordcraft::core::{
    Block, DrawCommand, GridWorld, Player, RecordingSurface, RenderConfig, World, WorldRenderer,
    LABEL_POSITION,
};
use wordcraft::textures::{MemorySource, TextureCache, MISSING_BLOCK_CHAR, MISSING_ENTITY_CHAR};
use wordcraft::types::{BlockPos, Identifier, PointerState, Rgb, Vec2};

/// GridWorld that also records removal requests.
struct DigLog {
    inner: GridWorld,
    removed: Vec<BlockPos>,
}

impl World for DigLog {
    fn get_blocks(&self, x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Vec<Vec<Block>> {
        self.inner.get_blocks(x_min, x_max, y_min, y_max)
    }

    fn get_block(&self, x: i64, y: i64) -> Block {
        self.inner.get_block(x, y)
    }

    fn remove_block(&mut self, x: i64, y: i64) {
        self.removed.push(BlockPos::new(x, y));
        self.inner.remove_block(x, y);
    }

    fn last_tick(&self) -> Instant {
        self.inner.last_tick()
    }
}

fn source() -> MemorySource {
    MemorySource::new()
        .with_file("index.json", r#"["default"]"#)
        .with_file(
            "default/core/blocks/blocks.json",
            r##"{"air": [" ", [0, 0, 0]], "grass": ["\"", [40, 160, 40]],
                 "dirt": ["%", [120, 80, 40]], "stone": ["#", [128, 128, 128]]}"##,
        )
        .with_file(
            "default/core/entities/entities.json",
            r#"{"player": [["o", "|"], [200, 30, 30]]}"#,
        )
}

fn renderer() -> WorldRenderer {
    WorldRenderer::new(TextureCache::new(source()), &RenderConfig::default())
}

struct Scene {
    renderer: WorldRenderer,
    world: DigLog,
    player: Player,
    surface: RecordingSurface,
    now: Instant,
}

impl Scene {
    /// 1024x720 surface, camera resting on cell (0, 5).
    fn new() -> Self {
        let now = Instant::now();
        Self {
            renderer: renderer(),
            world: DigLog {
                inner: GridWorld::new(now),
                removed: Vec::new(),
            },
            player: Player::new(Vec2::new(0.0, 5.0)),
            surface: RecordingSurface::new(1024, 720),
            now,
        }
    }

    fn frame(&mut self, pointer: PointerState) -> Option<BlockPos> {
        self.surface.clear();
        self.renderer
            .frame(
                &mut self.world,
                &self.player,
                pointer,
                &mut self.surface,
                self.now,
            )
            .selected
    }
}

// Cell (2, 3) has its glyph box at x = 452 + 2 * 60, y = 465 + (5 - 3) * 60.
const CELL_X: f32 = 572.0;
const CELL_Y: f32 = 585.0;
const OFFSET: f32 = 15.0;

#[test]
fn picking_is_half_open_on_every_edge() {
    let mut scene = Scene::new();
    let target = Some(BlockPos::new(2, 3));

    // Top-left corner is inside.
    assert_eq!(scene.frame(PointerState::at(CELL_X, CELL_Y + OFFSET)), target);
    // Just inside the far edges.
    assert_eq!(
        scene.frame(PointerState::at(CELL_X + 59.5, CELL_Y + OFFSET + 59.5)),
        target
    );
    // Far edges belong to the neighbours.
    assert_eq!(
        scene.frame(PointerState::at(CELL_X + 60.0, CELL_Y + OFFSET)),
        Some(BlockPos::new(3, 3))
    );
    assert_eq!(
        scene.frame(PointerState::at(CELL_X, CELL_Y + OFFSET + 60.0)),
        Some(BlockPos::new(2, 2))
    );
    // Near edges, approached from outside.
    assert_eq!(
        scene.frame(PointerState::at(CELL_X - 0.5, CELL_Y + OFFSET)),
        Some(BlockPos::new(1, 3))
    );
    assert_eq!(
        scene.frame(PointerState::at(CELL_X, CELL_Y + OFFSET - 0.5)),
        Some(BlockPos::new(2, 4))
    );
}

#[test]
fn pointer_offset_shifts_picking_down() {
    let mut scene = Scene::new();
    // Without the 15 px correction this point would be inside (2, 3).
    assert_eq!(
        scene.frame(PointerState::at(CELL_X + 30.0, CELL_Y + 5.0)),
        Some(BlockPos::new(2, 4))
    );
}

#[test]
fn at_most_one_cell_is_selected() {
    let mut scene = Scene::new();
    for &(x, y) in &[(0.0, 0.0), (511.0, 359.0), (1023.0, 719.0), (300.5, 44.5)] {
        scene.frame(PointerState::at(x, y));
        assert_eq!(scene.surface.strokes().count(), 1, "pointer at {:?}", (x, y));
        assert_eq!(scene.surface.texts().count(), 1);
    }
}

#[test]
fn selection_outline_frames_the_glyph_ink() {
    let mut scene = Scene::new();
    scene.frame(PointerState::at(CELL_X + 30.0, CELL_Y + 30.0));

    let strokes: Vec<_> = scene.surface.strokes().collect();
    assert_eq!(strokes.len(), 1);
    let r = strokes[0];
    assert_eq!((r.x, r.y, r.w, r.h), (CELL_X, CELL_Y + OFFSET, 60.0, 60.0));
}

#[test]
fn held_button_removes_once_per_frame() {
    let mut scene = Scene::new();
    let pointer = PointerState::at(CELL_X + 10.0, CELL_Y + OFFSET + 10.0).pressed();

    for _ in 0..3 {
        scene.frame(pointer);
    }
    assert_eq!(scene.world.removed, vec![BlockPos::new(2, 3); 3]);
    assert_eq!(scene.world.get_block(2, 3).id, Identifier::core("air"));
}

#[test]
fn released_button_removes_nothing() {
    let mut scene = Scene::new();
    scene.frame(PointerState::at(CELL_X + 10.0, CELL_Y + OFFSET + 10.0));
    assert!(scene.world.removed.is_empty());
}

#[test]
fn label_shows_selected_coordinates_above_the_grid() {
    let mut scene = Scene::new();
    scene.frame(PointerState::at(CELL_X + 10.0, CELL_Y + OFFSET + 10.0));

    let commands = scene.surface.commands();
    let label = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { .. }))
        .unwrap();
    assert_eq!(
        commands[label],
        DrawCommand::Text {
            x: LABEL_POSITION.0,
            y: LABEL_POSITION.1,
            text: "(2, 3)".to_string(),
        }
    );
    // Only the camera entity is drawn after the label.
    assert!(commands[label + 1..]
        .iter()
        .all(|c| matches!(c, DrawCommand::Glyph { ch: 'o' | '|', .. })));
}

#[test]
fn camera_entity_is_drawn_at_anchor() {
    let mut scene = Scene::new();
    scene.frame(PointerState::default());

    let glyphs: Vec<_> = scene.surface.glyphs().collect();
    let n = glyphs.len();
    assert_eq!(glyphs[n - 2], (452.0, 465.0, 'o'));
    assert_eq!(glyphs[n - 1], (452.0, 525.0, '|'));
}

#[test]
fn camera_entity_stays_at_anchor_while_moving() {
    let mut scene = Scene::new();
    scene.player.velocity = Vec2::new(3.0, 1.0);
    scene.now += Duration::from_millis(120);
    scene.frame(PointerState::default());

    let glyphs: Vec<_> = scene.surface.glyphs().collect();
    assert_eq!(glyphs[glyphs.len() - 2], (452.0, 465.0, 'o'));
}

#[test]
fn missing_textures_fall_back_to_placeholders() {
    let now = Instant::now();
    let mut world = GridWorld::new(now);
    world.set_block(0, 5, Identifier::core("mystery"));
    let player = Player::new(Vec2::new(0.0, 5.0)).with_type(Identifier::core("ghost"));
    let mut surface = RecordingSurface::new(1024, 720);

    renderer().frame(&mut world, &player, PointerState::default(), &mut surface, now);

    let commands = surface.commands();
    assert!(commands.contains(&DrawCommand::Glyph {
        x: 452.0,
        y: 465.0,
        ch: MISSING_BLOCK_CHAR,
        color: Rgb::BLACK,
    }));
    assert_eq!(
        commands.last(),
        Some(&DrawCommand::Glyph {
            x: 452.0,
            y: 465.0,
            ch: MISSING_ENTITY_CHAR,
            color: Rgb::BLACK,
        })
    );
}
