use crate::constants::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// Count-up animation from zero to `target` in fixed ticks.
#[derive(Clone, Debug)]
pub struct Counter {
    target: f64,
    increment: f64,
    total_ticks: u32,
    ticks: u32,
    current: f64,
    decimal: bool,
}

impl Counter {
    pub fn new(target: f64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: f64, duration_ms: f64) -> Self {
        let steps = (duration_ms / COUNTER_TICK_MS).max(1.0);
        Self {
            target,
            increment: target / steps,
            total_ticks: steps.ceil() as u32,
            ticks: 0,
            current: 0.0,
            decimal: target.fract() != 0.0,
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.current == self.target && self.ticks > 0
    }

    /// Advance one tick and return the text to display.
    pub fn tick(&mut self) -> String {
        if !self.is_done() {
            self.ticks += 1;
            self.current = self.increment * self.ticks as f64;
            if self.current >= self.target || self.ticks >= self.total_ticks {
                self.current = self.target;
            }
        }
        self.display()
    }

    pub fn display(&self) -> String {
        if self.decimal {
            format!("{:.1}", self.current)
        } else {
            format_grouped(self.current.floor() as i64)
        }
    }
}

/// Leading integer of a `data-target` attribute, read the way `parseInt` does:
/// `"150+"` is 150, `"4.9"` is 4 and text without leading digits is `None`.
pub fn parse_target(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].parse::<f64>().ok()?;
    Some(if negative { -value } else { value })
}

/// `1234567` -> `"1,234,567"`.
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
