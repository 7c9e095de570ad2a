//! World and camera collaborators.
//!
//! The renderer only needs a narrow view of the world: a rectangle of cells, a
//! single cell, block removal and the time of the last simulation tick. Block
//! storage, chunk loading and persistence live behind [`World`].
//!
//! [`GridWorld`] and [`Player`] are small in-memory implementations used by
//! the demo binary and the tests.

use std::collections::HashMap;
use std::time::Instant;

use wordcraft_types::{BlockPos, CameraAction, Identifier, Vec2, WALK_SPEED};

/// Contents of one world cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub id: Identifier,
}

impl Block {
    pub fn new(id: Identifier) -> Self {
        Self { id }
    }
}

pub trait World {
    /// Cells in the inclusive rectangle `[x_min, x_max] x [y_min, y_max]`.
    ///
    /// Rows are ordered by ascending `y` (southmost first); each row is ordered
    /// by ascending `x`.
    fn get_blocks(&self, x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Vec<Vec<Block>>;

    fn get_block(&self, x: i64, y: i64) -> Block;

    fn remove_block(&mut self, x: i64, y: i64);

    /// When the simulation last advanced.
    fn last_tick(&self) -> Instant;
}

/// The entity the camera follows.
pub trait CameraEntity {
    /// Position at the last simulation tick, in cells.
    fn position(&self) -> Vec2;

    /// Velocity in cells per second.
    fn velocity(&self) -> Vec2;

    fn entity_type(&self) -> &Identifier;
}

/// Names of the block kinds the demo terrain is made of.
#[derive(Debug, Clone)]
pub struct Palette {
    pub air: Identifier,
    pub grass: Identifier,
    pub dirt: Identifier,
    pub stone: Identifier,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            air: Identifier::core("air"),
            grass: Identifier::core("grass"),
            dirt: Identifier::core("dirt"),
            stone: Identifier::core("stone"),
        }
    }
}

/// Flat generated terrain plus a sparse map of edits.
#[derive(Debug, Clone)]
pub struct GridWorld {
    palette: Palette,
    /// Topmost solid row.
    ground_y: i64,
    edits: HashMap<BlockPos, Identifier>,
    last_tick: Instant,
}

const DIRT_DEPTH: i64 = 3;

impl GridWorld {
    pub fn new(now: Instant) -> Self {
        Self::with_ground(0, now)
    }

    pub fn with_ground(ground_y: i64, now: Instant) -> Self {
        Self {
            palette: Palette::default(),
            ground_y,
            edits: HashMap::new(),
            last_tick: now,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_block(&mut self, x: i64, y: i64, id: Identifier) {
        self.edits.insert(BlockPos::new(x, y), id);
    }

    /// Record that the simulation advanced at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;
    }

    fn generated(&self, y: i64) -> &Identifier {
        let p = &self.palette;
        if y > self.ground_y {
            &p.air
        } else if y == self.ground_y {
            &p.grass
        } else if y > self.ground_y - DIRT_DEPTH {
            &p.dirt
        } else {
            &p.stone
        }
    }

    fn id_at(&self, x: i64, y: i64) -> &Identifier {
        self.edits
            .get(&BlockPos::new(x, y))
            .unwrap_or_else(|| self.generated(y))
    }
}

impl World for GridWorld {
    fn get_blocks(&self, x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Vec<Vec<Block>> {
        (y_min..=y_max)
            .map(|y| {
                (x_min..=x_max)
                    .map(|x| Block::new(self.id_at(x, y).clone()))
                    .collect()
            })
            .collect()
    }

    fn get_block(&self, x: i64, y: i64) -> Block {
        Block::new(self.id_at(x, y).clone())
    }

    fn remove_block(&mut self, x: i64, y: i64) {
        let air = self.palette.air.clone();
        self.edits.insert(BlockPos::new(x, y), air);
    }

    fn last_tick(&self) -> Instant {
        self.last_tick
    }
}

/// Kinematic camera entity: moves at a constant velocity, no physics.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    entity_type: Identifier,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            entity_type: Identifier::core("player"),
        }
    }

    pub fn with_type(mut self, entity_type: Identifier) -> Self {
        self.entity_type = entity_type;
        self
    }

    /// Integrate the position over `seconds`.
    pub fn advance(&mut self, seconds: f64) {
        self.position = self.position.extrapolate(self.velocity, seconds);
    }

    pub fn apply_action(&mut self, action: CameraAction) {
        self.velocity = match action {
            CameraAction::MoveLeft => Vec2::new(-WALK_SPEED, 0.0),
            CameraAction::MoveRight => Vec2::new(WALK_SPEED, 0.0),
            CameraAction::MoveUp => Vec2::new(0.0, WALK_SPEED),
            CameraAction::MoveDown => Vec2::new(0.0, -WALK_SPEED),
            CameraAction::Stop => Vec2::ZERO,
        };
    }
}

impl CameraEntity for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn entity_type(&self) -> &Identifier {
        &self.entity_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_layers() {
        let world = GridWorld::new(Instant::now());
        let p = world.palette().clone();
        assert_eq!(world.get_block(0, 1).id, p.air);
        assert_eq!(world.get_block(0, 0).id, p.grass);
        assert_eq!(world.get_block(0, -2).id, p.dirt);
        assert_eq!(world.get_block(0, -3).id, p.stone);
    }

    #[test]
    fn get_blocks_rows_ascend_in_y() {
        let mut world = GridWorld::new(Instant::now());
        let marker: Identifier = "core:marker".parse().unwrap();
        world.set_block(2, 5, marker.clone());

        let grid = world.get_blocks(1, 3, 4, 6);
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == 3));
        // row 1 is y = 5, column 1 is x = 2
        assert_eq!(grid[1][1].id, marker);
    }

    #[test]
    fn removed_block_becomes_air() {
        let mut world = GridWorld::new(Instant::now());
        world.remove_block(4, -5);
        assert_eq!(world.get_block(4, -5).id, world.palette().air);
        assert_eq!(world.get_block(5, -5).id, world.palette().stone);
    }

    #[test]
    fn player_moves_with_velocity() {
        let mut player = Player::new(Vec2::new(0.0, 5.0));
        player.apply_action(CameraAction::MoveRight);
        player.advance(0.5);
        assert_eq!(player.position, Vec2::new(WALK_SPEED * 0.5, 5.0));

        player.apply_action(CameraAction::Stop);
        player.advance(10.0);
        assert_eq!(player.position, Vec2::new(WALK_SPEED * 0.5, 5.0));
    }
}
