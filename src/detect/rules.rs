//! Pattern names, thresholds and confidences.

/// A class owning more methods than this is a God Class.
pub const GOD_CLASS_MAX_METHODS: usize = 20;
/// A function spanning more lines than this is a Long Method.
pub const LONG_METHOD_MAX_LINES: usize = 50;

pub const SINGLETON: &str = "Singleton";
pub const FACTORY: &str = "Factory";
pub const OBSERVER: &str = "Observer";
pub const GOD_CLASS: &str = "God Class";
pub const LONG_METHOD: &str = "Long Method";
pub const DEAD_CODE: &str = "Dead Code";

pub mod confidence {
    pub const GOD_CLASS_TREE: f64 = 0.7;
    pub const GOD_CLASS_LINES: f64 = 0.8;
    pub const LONG_METHOD_TREE: f64 = 0.8;
    pub const LONG_METHOD_LINES: f64 = 0.7;
    pub const SINGLETON_TREE: f64 = 0.6;
    pub const SINGLETON_LINES: f64 = 0.7;
    pub const FACTORY: f64 = 0.6;
    pub const OBSERVER: f64 = 0.6;
    pub const DEAD_CODE: f64 = 0.6;
}
