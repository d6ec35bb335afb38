// Static key/chord table, in circle-of-fifths order.
// F# and Gb are separate rows with their own spellings; keep both.
use crate::models::{KeyEntry, CHORDS_PER_KEY};

pub static CIRCLE_OF_FIFTHS: [KeyEntry; 13] = [
    KeyEntry { key: "C", chords: ["C", "Dm", "Em", "F", "G", "Am", "Bdim"] },
    KeyEntry { key: "G", chords: ["G", "Am", "Bm", "C", "D", "Em", "F#dim"] },
    KeyEntry { key: "D", chords: ["D", "Em", "F#m", "G", "A", "Bm", "C#dim"] },
    KeyEntry { key: "A", chords: ["A", "Bm", "C#m", "D", "E", "F#m", "G#dim"] },
    KeyEntry { key: "E", chords: ["E", "F#m", "G#m", "A", "B", "C#m", "D#dim"] },
    KeyEntry { key: "B", chords: ["B", "C#m", "D#m", "E", "F#", "G#m", "A#dim"] },
    KeyEntry { key: "F#", chords: ["F#", "G#m", "A#m", "B", "C#", "D#m", "E#dim"] },
    KeyEntry { key: "Gb", chords: ["Gb", "Abm", "Bbm", "Cb", "Db", "Ebm", "Fdim"] },
    KeyEntry { key: "Db", chords: ["Db", "Ebm", "Fm", "Gb", "Ab", "Bbm", "Cdim"] },
    KeyEntry { key: "Ab", chords: ["Ab", "Bbm", "Cm", "Db", "Eb", "Fm", "Gdim"] },
    KeyEntry { key: "Eb", chords: ["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "Ddim"] },
    KeyEntry { key: "Bb", chords: ["Bb", "Cm", "Dm", "Eb", "F", "Gm", "Adim"] },
    KeyEntry { key: "F", chords: ["F", "Gm", "Am", "Bb", "C", "Dm", "Edim"] },
];

/// All table rows, in circle order.
pub fn entries() -> &'static [KeyEntry] {
    &CIRCLE_OF_FIFTHS
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    CIRCLE_OF_FIFTHS.iter().map(|entry| entry.key)
}

pub fn find_entry(key: &str) -> Option<&'static KeyEntry> {
    CIRCLE_OF_FIFTHS.iter().find(|entry| entry.key == key)
}

/// Diatonic chords of `key`, or `None` when the label is not in the table.
/// Matching is exact and case-sensitive: `"f#"` and `"Gb"` never alias `"F#"`.
pub fn chords_for(key: &str) -> Option<&'static [&'static str; CHORDS_PER_KEY]> {
    find_entry(key).map(|entry| &entry.chords)
}
