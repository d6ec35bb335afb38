// Data shared by the circle-of-fifths front ends: the key/chord table and its models.
pub mod circle;
pub mod models;

pub use circle::{chords_for, entries, keys, CIRCLE_OF_FIFTHS};
pub use models::{ChordQuality, Degree, KeyEntry, CHORDS_PER_KEY};
