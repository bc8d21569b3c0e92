use crate::constants::*;
use crate::lattice::Lattice;

/// Convert wall milliseconds since start into animation time.
#[inline]
pub fn animation_time(elapsed_ms: f64) -> f32 {
    (elapsed_ms * TIME_SCALE_PER_MS) as f32
}

/// Vertical wave displacement for a point at `x`.
#[inline]
pub fn wave_offset(time: f32, x: f32, scroll: f32) -> f32 {
    (time * WAVE_TIME_RATE + x * WAVE_X_FREQ + scroll * WAVE_SCROLL_FREQ).sin() * WAVE_AMPLITUDE
}

#[inline]
pub fn point_height(original_y: f32, x: f32, time: f32, scroll: f32) -> f32 {
    original_y + wave_offset(time, x, scroll) - scroll * SCROLL_SINK
}

#[inline]
pub fn pulse_speed(segment_index: usize) -> f32 {
    PULSE_SPEED_BASE + (segment_index % PULSE_SPEED_BANDS) as f32 * PULSE_SPEED_STEP
}

/// Pulse in [0, 1], phase-offset by segment index.
#[inline]
pub fn pulse(time: f32, segment_index: usize, scroll: f32) -> f32 {
    let phase = time * pulse_speed(segment_index)
        + segment_index as f32
        + scroll * PULSE_SCROLL_FREQ;
    (phase.sin() * 0.5 + 0.5).clamp(0.0, 1.0)
}

#[inline]
pub fn pulsed_opacity(base_opacity: f32, pulse: f32) -> f32 {
    base_opacity * (PULSE_FLOOR + PULSE_SPAN * pulse)
}

/// Slow yaw applied to the whole lattice.
#[inline]
pub fn lattice_yaw(time: f32, scroll: f32) -> f32 {
    time * YAW_TIME_RATE + scroll * YAW_SCROLL_RATE
}

impl Lattice {
    /// Advance every point and segment to `(time, scroll)`.
    ///
    /// Writes into the existing draw buffers; nothing is allocated.
    pub fn animate(&mut self, time: f32, scroll: f32) {
        for (point, vertex) in self.points.iter_mut().zip(self.point_vertices.iter_mut()) {
            point.y = point_height(point.original_y, point.x, time, scroll);
            vertex.position[1] = point.y;
        }

        for (index, (segment, ends)) in self
            .segments
            .iter()
            .zip(self.line_vertices.chunks_exact_mut(2))
            .enumerate()
        {
            let alpha = pulsed_opacity(segment.base_opacity, pulse(time, index, scroll));
            let a = &self.points[segment.a as usize];
            let b = &self.points[segment.b as usize];
            ends[0].position = [a.x, a.y, a.z];
            ends[0].alpha = alpha;
            ends[1].position = [b.x, b.y, b.z];
            ends[1].alpha = alpha;
        }
    }
}
