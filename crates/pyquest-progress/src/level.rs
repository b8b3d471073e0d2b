//! Player levels by XP threshold.

/// `(name, minimum xp)`, ascending.
pub const LEVELS: [(&str, u32); 5] = [
    ("Python Explorer", 0),
    ("Logic Builder", 100),
    ("Code Adventurer", 300),
    ("Syntax Sorcerer", 600),
    ("Python Hero", 1000),
];

/// Index of the highest level whose threshold `xp` has reached.
pub fn level_for(xp: u32) -> usize {
    LEVELS
        .iter()
        .rposition(|&(_, min_xp)| xp >= min_xp)
        .unwrap_or(0)
}

pub fn level_name(level: usize) -> &'static str {
    LEVELS.get(level).map_or(LEVELS[0].0, |&(name, _)| name)
}

/// XP still needed for the next level; 0 at the top level.
pub fn xp_to_next_level(level: usize, xp: u32) -> u32 {
    LEVELS
        .get(level + 1)
        .map_or(0, |&(_, min_xp)| min_xp.saturating_sub(xp))
}

/// Progress through the current level as a percentage in `[0, 100]`.
///
/// At the top level the span is taken as 100 XP past the threshold.
pub fn level_progress(level: usize, xp: u32) -> f64 {
    let current = LEVELS.get(level).map_or(0, |&(_, min_xp)| min_xp);
    let next = LEVELS
        .get(level + 1)
        .map_or(current + 100, |&(_, min_xp)| min_xp);
    let progress = (f64::from(xp) - f64::from(current)) / f64::from(next - current) * 100.0;
    progress.clamp(0.0, 100.0)
}
