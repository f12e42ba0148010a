//! Laser/enemy overlap watcher
//!
//! Narrow scope on purpose: two pools of at most ten sprites each, so the
//! watcher is a plain pairwise AABB sweep. Each intersecting pair becomes
//! one `LaserHitEvent`; a laser reports at most one hit per frame.

use super::enemy::FallingObject;
use super::events::{EventQueue, LaserHitEvent};
use super::laser::{Laser, LASER_FRAME_H, LASER_FRAME_W};
use super::pool::Pool;

/// Center-based AABB intersection test.
fn aabb_overlap(a: macroquad::math::Vec2, aw: f32, ah: f32, b: macroquad::math::Vec2, bw: f32, bh: f32) -> bool {
    (a.x - b.x).abs() < (aw + bw) * 0.5 && (a.y - b.y).abs() < (ah + bh) * 0.5
}

/// Sweep all live lasers against all collidable enemies, sending one event
/// per hit into the queue.
pub fn detect_hits(
    lasers: &Pool<Laser>,
    enemies: &Pool<FallingObject>,
    hits: &mut EventQueue<LaserHitEvent>,
) {
    for (laser_slot, laser) in lasers.iter() {
        for (enemy_slot, enemy) in enemies.iter() {
            if !enemy.is_collidable() {
                continue;
            }
            if aabb_overlap(
                laser.pos,
                LASER_FRAME_W,
                LASER_FRAME_H,
                enemy.pos,
                enemy.size,
                enemy.size,
            ) {
                hits.send(LaserHitEvent {
                    laser: laser_slot,
                    enemy: enemy_slot,
                });
                break; // one hit per laser per frame
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;

    fn pools() -> (Pool<Laser>, Pool<FallingObject>) {
        (
            Pool::new(10, Laser::new),
            Pool::new(10, || FallingObject::new(32.0, 100.0)),
        )
    }

    fn fire_at(lasers: &mut Pool<Laser>, pos: Vec2) -> usize {
        let slot = lasers.acquire().unwrap();
        lasers.get_mut(slot).unwrap().fire(pos, 200.0);
        slot
    }

    fn drop_at(enemies: &mut Pool<FallingObject>, pos: Vec2) -> usize {
        let slot = enemies.acquire().unwrap();
        let enemy = enemies.get_mut(slot).unwrap();
        enemy.spawn(pos.x, 60.0, 0.06);
        enemy.pos = pos;
        slot
    }

    #[test]
    fn test_detects_intersecting_pair() {
        let (mut lasers, mut enemies) = pools();
        let l = fire_at(&mut lasers, Vec2::new(100.0, 100.0));
        let e = drop_at(&mut enemies, Vec2::new(110.0, 105.0));

        let mut hits = EventQueue::new();
        detect_hits(&lasers, &enemies, &mut hits);
        let collected: Vec<_> = hits.drain().collect();
        assert_eq!(collected, vec![LaserHitEvent { laser: l, enemy: e }]);
    }

    #[test]
    fn test_no_event_when_apart() {
        let (mut lasers, mut enemies) = pools();
        fire_at(&mut lasers, Vec2::new(50.0, 100.0));
        drop_at(&mut enemies, Vec2::new(300.0, 500.0));

        let mut hits = EventQueue::new();
        detect_hits(&lasers, &enemies, &mut hits);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_dying_enemy_is_not_collidable() {
        let (mut lasers, mut enemies) = pools();
        fire_at(&mut lasers, Vec2::new(100.0, 100.0));
        let e = drop_at(&mut enemies, Vec2::new(100.0, 100.0));
        enemies.get_mut(e).unwrap().hit(0.0, 200.0);

        let mut hits = EventQueue::new();
        detect_hits(&lasers, &enemies, &mut hits);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_one_hit_per_laser() {
        let (mut lasers, mut enemies) = pools();
        fire_at(&mut lasers, Vec2::new(100.0, 100.0));
        drop_at(&mut enemies, Vec2::new(100.0, 100.0));
        drop_at(&mut enemies, Vec2::new(105.0, 100.0));

        let mut hits = EventQueue::new();
        detect_hits(&lasers, &enemies, &mut hits);
        assert_eq!(hits.len(), 1);
    }
}
