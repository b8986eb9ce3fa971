use super::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[inline]
pub fn overlay_enabled(viewport_width: f64) -> bool {
    viewport_width >= OVERLAY_MIN_VIEWPORT_WIDTH
}

#[inline]
pub fn coords_label(pos: Vec2) -> String {
    format!("X: {} Y: {}", pos.x.round() as i32, pos.y.round() as i32)
}

#[inline]
pub fn target_label(tag_name: Option<&str>) -> String {
    format!("TARGET: {}", tag_name.unwrap_or("NONE"))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub life: f32,
}

impl Particle {
    fn random_at<R: Rng>(pos: Vec2, rng: &mut R) -> Self {
        let size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        let life = rng.gen_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX);
        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            size,
            life,
        }
    }

    /// Opacity tracks the remaining share of the maximum lifetime.
    #[inline]
    pub fn opacity(&self) -> f32 {
        (self.life / PARTICLE_LIFE_MAX).clamp(0.0, 1.0)
    }

    /// Advance one tick. Returns false once the particle has expired.
    fn tick(&mut self) -> bool {
        self.pos += self.vel;
        self.life -= 1.0;
        self.life > 0.0
    }
}

/// Fixed-capacity particle storage with slot reuse.
///
/// Slot indices are stable for a particle's whole life so the DOM side can
/// keep one node per slot.
pub struct ParticlePool {
    slots: Vec<Option<Particle>>,
    free: Vec<usize>,
    live: usize,
}

impl ParticlePool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            // popped from the back, so low slots are handed out first
            free: (0..capacity).rev().collect(),
            live: 0,
        }
    }

    /// Store a particle, or hand it back when every slot is taken.
    pub fn insert(&mut self, particle: Particle) -> Result<usize, Particle> {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(particle);
                self.live += 1;
                Ok(slot)
            }
            None => Err(particle),
        }
    }

    #[cfg(test)]
    pub fn get(&self, slot: usize) -> Option<&Particle> {
        self.slots.get(slot).and_then(|p| p.as_ref())
    }

    fn evict(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            if entry.take().is_some() {
                self.live -= 1;
                self.free.push(slot);
            }
        }
    }

    /// Number of particles currently alive.
    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    #[cfg(test)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spawned {
    pub slot: usize,
    pub particle: Particle,
}

/// Where each overlay element sits for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLayout {
    pub dot: Vec2,
    pub ring: Vec2,
    pub scan: Vec2,
    pub crosshair: Vec2,
    pub hud: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub slot: usize,
    pub pos: Vec2,
    pub opacity: f32,
    /// The slot was freed this frame; its node should be removed.
    pub expired: bool,
}

#[derive(Clone, Debug)]
pub struct FrameUpdate {
    pub layout: OverlayLayout,
    pub particles: SmallVec<[ParticleFrame; 32]>,
}

/// Pointer tracking, ring easing, scan sweep and particle simulation for the
/// targeting overlay. Advances in fixed ticks, one per animation frame.
pub struct CursorSim<R: Rng> {
    pointer: Vec2,
    ring: Vec2,
    scan_phase: u32,
    pool: ParticlePool,
    rng: R,
}

impl<R: Rng> CursorSim<R> {
    pub fn new(rng: R) -> Self {
        Self::with_pool_capacity(rng, PARTICLE_POOL_CAPACITY)
    }

    pub fn with_pool_capacity(rng: R, capacity: usize) -> Self {
        Self {
            pointer: Vec2::ZERO,
            ring: Vec2::ZERO,
            scan_phase: 0,
            pool: ParticlePool::with_capacity(capacity),
            rng,
        }
    }

    #[cfg(test)]
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[cfg(test)]
    #[inline]
    pub fn ring(&self) -> Vec2 {
        self.ring
    }

    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Record a pointer move and maybe spawn a particle at the new position.
    pub fn pointer_moved(&mut self, pos: Vec2) -> Option<Spawned> {
        self.pointer = pos;
        if !self.rng.gen_bool(PARTICLE_SPAWN_PROBABILITY) {
            return None;
        }
        let particle = Particle::random_at(pos, &mut self.rng);
        match self.pool.insert(particle) {
            Ok(slot) => Some(Spawned { slot, particle }),
            Err(_) => None,
        }
    }

    /// Scan sweep progress in [0, 1) after the latest step.
    #[inline]
    pub fn scan_progress(&self) -> f32 {
        self.scan_phase as f32 / SCAN_PERIOD_FRAMES as f32
    }

    pub fn step(&mut self) -> FrameUpdate {
        let pointer = self.pointer;
        self.ring += (pointer - self.ring) * RING_EASE;
        self.scan_phase = (self.scan_phase + 1) % SCAN_PERIOD_FRAMES;
        let scan_offset = (self.scan_progress() - 0.5) * SCAN_SWEEP_PX;

        let layout = OverlayLayout {
            dot: pointer,
            ring: self.ring,
            scan: pointer + Vec2::new(0.0, scan_offset),
            crosshair: pointer,
            hud: pointer + HUD_OFFSET,
        };

        let mut particles = SmallVec::new();
        for slot in 0..self.pool.slots.len() {
            let Some(p) = self.pool.slots[slot].as_mut() else {
                continue;
            };
            let alive = p.tick();
            particles.push(ParticleFrame {
                slot,
                pos: p.pos,
                opacity: p.opacity(),
                expired: !alive,
            });
            if !alive {
                self.pool.evict(slot);
            }
        }

        FrameUpdate { layout, particles }
    }
}
