//=========================================================================
// Object Manager
//=========================================================================
//
// Entity registry and collision engine.
//
// Owns every live entity collection (roads, enemies, bullets, player)
// and is the only code that mutates them. All methods are invoked from
// the logic thread's tick, in a fixed order:
//
//   poll_loads → update_all → recycle_roads → cull_enemies/bullets
//     → resolve_collisions
//
// Removal discipline: collision results are collected first, then
// applied as a batch in descending index order, so indices stay valid
// and no entity is ever removed twice. Every removal detaches the
// entity's visual handle exactly once.
//
// There are no error conditions here; operations on empty collections
// are no-ops.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec3;
use log::{debug, error, trace};
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::entity::{Bullet, Enemy, Player, Road, Visual};
use crate::core::render::{LoadStatus, ModelLoader, SceneGraph};

//=== World Constants =====================================================

/// y of every ground-level entity.
pub const SURFACE_Y: f32 = 0.5;

/// z the player sits at, just in front of the camera.
pub const PLAYER_Z: f32 = 6.0;

/// z enemies spawn at, beyond the fog line.
pub const ENEMY_SPAWN_Z: f32 = -55.0;

/// Enemies past this z have walked behind the camera and despawn.
const ENEMY_CULL_Z: f32 = 50.0;

/// Bullets past this z have crossed the far plane and despawn.
const BULLET_CULL_Z: f32 = -65.0;

/// Road segments whose origin scrolled past this z are recycled.
const ROAD_RETIRE_Z: f32 = 200.0;

/// Once the frontier segment's origin reaches this z, another segment
/// is needed behind it to keep the road unbroken.
const ROAD_EXTEND_Z: f32 = 20.0;

//=== ObjectManager =======================================================

/// Owner of all live entities and their spawn/update/removal lifecycle.
pub struct ObjectManager {
    scene: Box<dyn SceneGraph>,
    loader: Box<dyn ModelLoader>,
    lane_positions: Vec<f32>,
    road_speed: f32,
    roads: Vec<Road>,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    player: Option<Player>,
}

impl ObjectManager {
    //--- Construction -----------------------------------------------------

    pub fn new(
        scene: Box<dyn SceneGraph>,
        loader: Box<dyn ModelLoader>,
        lane_positions: Vec<f32>,
    ) -> Self {
        Self {
            scene,
            loader,
            lane_positions,
            road_speed: 0.0,
            roads: Vec::new(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            player: None,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lane_positions.len()
    }

    //--- Spawning ---------------------------------------------------------

    /// Creates the run's player in `target_lane`. Replaces (and
    /// releases) any previous player.
    pub fn init_player(&mut self, target_lane: usize) {
        if let Some(old) = self.player.take() {
            if let Some(handle) = old.visual.handle() {
                self.scene.detach(handle);
            }
        }

        let x = self.lane_positions.get(target_lane).copied().unwrap_or(0.0);
        let ticket = self.loader.begin_load(Player::MODEL_PATH);
        self.player = Some(Player::new(
            Vec3::new(x, SURFACE_Y, PLAYER_Z),
            target_lane,
            Visual::Pending(ticket),
        ));
    }

    /// Appends an enemy in a random lane at depth `z`.
    pub fn spawn_enemy<R: Rng>(&mut self, rng: &mut R, z: f32, health: u32, speed: f32) {
        let lane = rng.gen_range(0..self.lane_positions.len());
        let position = Vec3::new(self.lane_positions[lane], SURFACE_Y, z);
        let ticket = self.loader.begin_load(Enemy::MODEL_PATH);

        trace!(target: "objects", "enemy spawned in lane {} at z {:.1}", lane, z);
        self.enemies
            .push(Enemy::new(position, health, speed, Visual::Pending(ticket)));
    }

    /// Appends a bullet fired from `origin` (the player's position).
    pub fn spawn_bullet(&mut self, origin: Vec3, speed: f32) {
        let ticket = self.loader.begin_load(Bullet::MODEL_PATH);
        self.bullets
            .push(Bullet::new(origin, speed, Visual::Pending(ticket)));
    }

    //--- Load Polling -----------------------------------------------------

    /// Promotes pending visuals: resolved models are attached to the
    /// scene, failed loads are logged once and the entity stays inert.
    pub fn poll_loads(&mut self) {
        let scene = self.scene.as_mut();
        let loader = self.loader.as_mut();

        let mut visuals: Vec<(&mut Visual, &'static str)> = Vec::new();
        if let Some(player) = self.player.as_mut() {
            visuals.push((&mut player.visual, "player"));
        }
        visuals.extend(self.roads.iter_mut().map(|r| (&mut r.visual, "road")));
        visuals.extend(self.enemies.iter_mut().map(|e| (&mut e.visual, "enemy")));
        visuals.extend(self.bullets.iter_mut().map(|b| (&mut b.visual, "bullet")));

        for (visual, what) in visuals {
            let Visual::Pending(ticket) = *visual else {
                continue;
            };
            match loader.poll(ticket) {
                LoadStatus::Pending => {}
                LoadStatus::Ready(handle) => {
                    scene.attach(handle);
                    *visual = Visual::Ready(handle);
                }
                LoadStatus::Failed => {
                    error!(target: "objects", "{} model load failed; entity stays inert", what);
                    *visual = Visual::Failed;
                }
            }
        }
    }

    //--- Per-Tick Update --------------------------------------------------

    /// Advances every ready entity. Pure per-entity movement; no
    /// cross-entity effects.
    pub fn update_all(&mut self, dt: f32) {
        if let Some(player) = self.player.as_mut() {
            player.glide(&self.lane_positions);
        }
        for road in &mut self.roads {
            road.advance(dt);
        }
        for enemy in &mut self.enemies {
            enemy.advance(dt);
        }
        for bullet in &mut self.bullets {
            bullet.advance(dt);
        }
    }

    //--- Road Recycling ---------------------------------------------------

    /// Adopts the active level's scroll speed for current and future
    /// segments.
    pub fn set_road_speed(&mut self, speed: f32) {
        self.road_speed = speed;
        for road in &mut self.roads {
            road.set_speed(speed);
        }
    }

    /// Recycles segments that scrolled past the camera.
    ///
    /// A retired segment is repositioned immediately behind the
    /// frontier segment rather than destroyed, so the same visual
    /// handle circulates forever and the road never shows a seam.
    /// Afterwards coverage is topped up for the cold-start case.
    pub fn recycle_roads(&mut self) {
        let mut i = 0;
        while i < self.roads.len() {
            if self.roads[i].position.z < ROAD_RETIRE_Z {
                i += 1;
                continue;
            }

            let mut road = self.roads.remove(i);
            let anchor_z = self
                .roads
                .last()
                .map(|r| r.position.z)
                .unwrap_or(road.position.z);
            road.position.z = anchor_z - Road::LENGTH;
            self.roads.push(road);
        }

        self.ensure_road_coverage();
    }

    /// Appends fresh segments until the frontier origin sits below the
    /// extension threshold. Spawns the very first segment at the origin
    /// when the pool is empty.
    pub fn ensure_road_coverage(&mut self) {
        if self.roads.is_empty() {
            self.push_road(0.0);
        }

        while let Some(frontier_z) = self.roads.last().map(|r| r.position.z) {
            if frontier_z < ROAD_EXTEND_Z {
                break;
            }
            self.push_road(frontier_z - Road::LENGTH);
        }
    }

    fn push_road(&mut self, z: f32) {
        let ticket = self.loader.begin_load(Road::MODEL_PATH);
        debug!(target: "objects", "road segment spawned at z {:.1}", z);
        self.roads.push(Road::new(
            Vec3::new(0.0, 0.0, z),
            self.road_speed,
            Visual::Pending(ticket),
        ));
    }

    //--- Bounds Culling ---------------------------------------------------

    /// Despawns enemies that walked behind the camera. Independent of
    /// combat outcome.
    pub fn cull_enemies(&mut self) {
        let scene = &mut self.scene;
        self.enemies.retain_mut(|enemy| {
            if enemy.position.z > ENEMY_CULL_Z {
                if let Some(handle) = enemy.visual.handle() {
                    scene.detach(handle);
                }
                false
            } else {
                true
            }
        });
    }

    /// Despawns bullets that crossed the far plane.
    pub fn cull_bullets(&mut self) {
        let scene = &mut self.scene;
        self.bullets.retain_mut(|bullet| {
            if bullet.position.z < BULLET_CULL_Z {
                if let Some(handle) = bullet.visual.handle() {
                    scene.detach(handle);
                }
                false
            } else {
                true
            }
        });
    }

    //--- Collision Resolution ---------------------------------------------

    /// Pairwise bullet/enemy intersection pass.
    ///
    /// Every colliding bullet is marked spent at most once and deals
    /// exactly one point of damage per enemy it overlaps: an enemy hit
    /// by two bullets in the same frame loses two health. Removals are
    /// applied afterwards as a batch in descending index order.
    ///
    /// Returns the enemies defeated this frame.
    pub fn resolve_collisions(&mut self) -> Vec<Enemy> {
        let mut spent = vec![false; self.bullets.len()];

        for enemy in self.enemies.iter_mut() {
            let Some(enemy_box) = enemy.aabb() else {
                continue;
            };
            for (bi, bullet) in self.bullets.iter().enumerate() {
                let Some(bullet_box) = bullet.aabb() else {
                    continue;
                };
                if enemy_box.intersects(&bullet_box) {
                    spent[bi] = true;
                    enemy.hit();
                }
            }
        }

        for bi in (0..self.bullets.len()).rev() {
            if spent[bi] {
                let bullet = self.bullets.remove(bi);
                if let Some(handle) = bullet.visual.handle() {
                    self.scene.detach(handle);
                }
            }
        }

        let mut defeated = Vec::new();
        for ei in (0..self.enemies.len()).rev() {
            if self.enemies[ei].is_defeated() {
                let enemy = self.enemies.remove(ei);
                if let Some(handle) = enemy.visual.handle() {
                    self.scene.detach(handle);
                }
                defeated.push(enemy);
            }
        }
        defeated.reverse();
        defeated
    }

    //--- Level Transition Cleanup -----------------------------------------

    /// Releases and drops every enemy and bullet; roads and player
    /// survive level transitions.
    pub fn clear_enemies_and_bullets(&mut self) {
        for enemy in self.enemies.drain(..) {
            if let Some(handle) = enemy.visual.handle() {
                self.scene.detach(handle);
            }
        }
        for bullet in self.bullets.drain(..) {
            if let Some(handle) = bullet.visual.handle() {
                self.scene.detach(handle);
            }
        }
    }

    //--- Player Control ---------------------------------------------------

    /// Retargets the player's lane glide. No-op before `init_player`.
    pub fn set_player_target(&mut self, lane: usize) {
        if let Some(player) = self.player.as_mut() {
            player.set_target_lane(lane);
        }
    }

    /// The player's position, once its model has resolved. Shots cannot
    /// originate from an unready player.
    pub fn player_position(&self) -> Option<Vec3> {
        self.player
            .as_ref()
            .filter(|p| p.visual.is_ready())
            .map(|p| p.position)
    }

    //--- Queries ----------------------------------------------------------

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
