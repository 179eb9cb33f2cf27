// Model constants
pub const DEFAULT_RATING: f64 = 1500.0;
// Deviation of a player the system knows nothing about; also the ceiling
// inactivity decay can never push a deviation past.
pub const MAX_DEVIATION: f64 = 350.0;
pub const GLICKO_SCALE: f64 = 400.0;
pub const Q: f64 = std::f64::consts::LN_10 / GLICKO_SCALE;
