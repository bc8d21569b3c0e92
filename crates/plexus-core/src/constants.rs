// Shared scene and widget tuning constants.

// Lattice layout
pub const GRID_SIZE: u32 = 10; // points along x and y
pub const GRID_DEPTH: u32 = 4; // layers along z
pub const SPACING: f32 = 120.0; // world units between neighbouring cells
pub const CONNECT_MULTIPLIER: f32 = 1.6; // segments join points closer than spacing * this
pub const JITTER: f32 = 20.0; // full width of the random offset per axis
pub const DEPTH_STRETCH: f32 = 2.0; // z layers sit further apart than x/y cells
pub const DEFAULT_SEED: u64 = 0x5EED_0F_1A77;

// Point appearance
pub const POINT_SIZE: f32 = 5.0;
pub const POINT_OPACITY: f32 = 0.9;
pub const POINT_BRIGHTNESS_MIN: f32 = 0.7;
pub const POINT_BRIGHTNESS_SPAN: f32 = 0.3;
pub const POINT_GREEN_BLUE: f32 = 0.1;

// Segment appearance
pub const SEGMENT_OPACITY_MIN: f32 = 0.15;
pub const SEGMENT_OPACITY_SPAN: f32 = 0.1;
pub const LINE_COLOR: [f32; 3] = [0.862_745, 0.149_020, 0.149_020]; // #dc2626

// Wave animation
pub const TIME_SCALE_PER_MS: f64 = 0.000_05; // wall ms -> animation time
pub const WAVE_TIME_RATE: f32 = 2.0;
pub const WAVE_X_FREQ: f32 = 0.02;
pub const WAVE_SCROLL_FREQ: f32 = 0.005;
pub const WAVE_AMPLITUDE: f32 = 15.0;
pub const SCROLL_SINK: f32 = 0.1; // lattice drops this much per scrolled pixel

// Segment pulse
pub const PULSE_SPEED_BASE: f32 = 0.5;
pub const PULSE_SPEED_STEP: f32 = 0.1;
pub const PULSE_SPEED_BANDS: usize = 5;
pub const PULSE_SCROLL_FREQ: f32 = 0.01;
pub const PULSE_FLOOR: f32 = 0.4; // opacity = base * (floor + span * pulse)
pub const PULSE_SPAN: f32 = 0.6;

// Lattice yaw
pub const YAW_TIME_RATE: f32 = 0.05;
pub const YAW_SCROLL_RATE: f32 = 0.0002;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 3000.0;
pub const CAMERA_Z: f32 = 600.0;
pub const CAMERA_BASE_Y: f32 = 100.0;
pub const CAMERA_SMOOTHING: f32 = 0.02; // fraction of the gap closed per tick
pub const POINTER_SCALE: f32 = 0.3; // client px from centre -> mouse units
pub const CAMERA_POINTER_GAIN: f32 = 0.3;
pub const CAMERA_SCROLL_GAIN: f32 = 0.3;

// Fog (exp2)
pub const FOG_COLOR: [f32; 3] = [0.058_824, 0.058_824, 0.058_824]; // #0f0f0f
pub const FOG_DENSITY: f32 = 0.0005;

// Widgets
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_TICK_MS: f64 = 16.0;
pub const HERO_PARALLAX_RATE: f64 = 0.5;
pub const HERO_FADE_DISTANCE_PX: f64 = 700.0;
pub const GLITCH_CHANCE_ABOVE: f64 = 0.98;

// Cursor trail
pub const TRAIL_LIFE: u32 = 50;
pub const TRAIL_SIZE_MIN: f32 = 1.0;
pub const TRAIL_SIZE_SPAN: f32 = 3.0;
pub const TRAIL_SPEED_MAX: f32 = 1.0;
pub const TRAIL_SHRINK: f32 = 0.05;
pub const TRAIL_MIN_SIZE: f32 = 0.1;
pub const TRAIL_CAPACITY: usize = 1024;
pub const TRAIL_RGB: [u8; 3] = [220, 38, 38];
