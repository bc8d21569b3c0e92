//! Cursor trail particles kept in a fixed-slot arena.
//!
//! Dead particles free their slot for the next spawn; no list is spliced.

use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub life: u32,
}

impl TrailParticle {
    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        Self {
            x,
            y,
            size: TRAIL_SIZE_MIN + rng.gen::<f32>() * TRAIL_SIZE_SPAN,
            speed_x: (rng.gen::<f32>() * 2.0 - 1.0) * TRAIL_SPEED_MAX,
            speed_y: (rng.gen::<f32>() * 2.0 - 1.0) * TRAIL_SPEED_MAX,
            life: TRAIL_LIFE,
        }
    }

    pub fn update(&mut self) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        self.life = self.life.saturating_sub(1);
        if self.size > TRAIL_MIN_SIZE {
            self.size -= TRAIL_SHRINK;
        }
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.life as f32 / TRAIL_LIFE as f32
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.life == 0
    }
}

pub struct TrailArena {
    slots: Vec<TrailParticle>,
    alive: Vec<bool>,
    free: Vec<usize>,
    capacity: usize,
}

impl Default for TrailArena {
    fn default() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }
}

impl TrailArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(64)),
            alive: Vec::with_capacity(capacity.min(64)),
            free: Vec::new(),
            capacity,
        }
    }

    /// Add a particle at the pointer; `None` when every slot is live.
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) -> Option<usize> {
        let particle = TrailParticle::spawn(x, y, rng);
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = particle;
            self.alive[slot] = true;
            return Some(slot);
        }
        if self.slots.len() >= self.capacity {
            return None;
        }
        self.slots.push(particle);
        self.alive.push(true);
        Some(self.slots.len() - 1)
    }

    pub fn update(&mut self) {
        for (p, alive) in self.slots.iter_mut().zip(&self.alive) {
            if *alive {
                p.update();
            }
        }
    }

    /// Release every spent particle; returns how many were removed.
    pub fn sweep(&mut self) -> usize {
        let mut removed = 0;
        for (slot, (p, alive)) in self.slots.iter().zip(self.alive.iter_mut()).enumerate() {
            if *alive && p.is_spent() {
                *alive = false;
                self.free.push(slot);
                removed += 1;
            }
        }
        removed
    }

    /// Update, hand each live particle to `draw`, then sweep.
    pub fn step(&mut self, mut draw: impl FnMut(&TrailParticle)) -> usize {
        self.update();
        for p in self.iter() {
            draw(p);
        }
        self.sweep()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailParticle> {
        self.slots
            .iter()
            .zip(&self.alive)
            .filter_map(|(p, alive)| alive.then_some(p))
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&TrailParticle> {
        match self.alive.get(slot) {
            Some(true) => self.slots.get(slot),
            _ => None,
        }
    }

    #[inline]
    pub fn is_alive(&self, slot: usize) -> bool {
        self.alive.get(slot).copied().unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
