/// Alphabet size of an 8-bit intensity image.
pub const DEFAULT_LEVELS: usize = 256;

/// Smallest supported gray-level alphabet.
pub const MIN_LEVELS: usize = 2;

/// Fewest classes a threshold search can produce (one threshold).
pub const MIN_CLASSES: usize = 2;

/// Most classes a threshold search can produce (four thresholds).
/// The search is O(G^(L-1)), so this bound keeps the worst case tractable.
pub const MAX_CLASSES: usize = 5;

/// Threshold count used when the caller does not ask for one (classic Otsu).
pub const DEFAULT_THRESHOLD_COUNT: usize = 1;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum number of candidate tuples before `SearchMode::Auto` goes parallel.
pub const PARALLEL_SEARCH_THRESHOLD: u64 = 1_000_000;

/// Tolerance for a probability distribution summing to 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;
