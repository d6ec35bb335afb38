use serde::Serialize;

/// Number of diatonic chords in a major key.
pub const CHORDS_PER_KEY: usize = 7;

/// One row of the key/chord table: a major key and its diatonic chords,
/// ordered by scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    pub key: &'static str,
    pub chords: [&'static str; CHORDS_PER_KEY],
}

impl KeyEntry {
    /// Pairs every chord with the scale degree it sits on.
    pub fn degrees(&self) -> impl Iterator<Item = (Degree, &'static str)> + '_ {
        Degree::ALL.into_iter().zip(self.chords.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
        }
    }
}

/// Scale degrees of a major key, in chord-list order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Degree {
    Tonic,
    Supertonic,
    Mediant,
    Subdominant,
    Dominant,
    Submediant,
    LeadingTone,
}

impl Degree {
    pub const ALL: [Degree; CHORDS_PER_KEY] = [
        Degree::Tonic,
        Degree::Supertonic,
        Degree::Mediant,
        Degree::Subdominant,
        Degree::Dominant,
        Degree::Submediant,
        Degree::LeadingTone,
    ];

    pub fn numeral(self) -> &'static str {
        match self {
            Degree::Tonic => "I",
            Degree::Supertonic => "ii",
            Degree::Mediant => "iii",
            Degree::Subdominant => "IV",
            Degree::Dominant => "V",
            Degree::Submediant => "vi",
            Degree::LeadingTone => "vii°",
        }
    }

    pub fn quality(self) -> ChordQuality {
        match self {
            Degree::Tonic | Degree::Subdominant | Degree::Dominant => ChordQuality::Major,
            Degree::Supertonic | Degree::Mediant | Degree::Submediant => ChordQuality::Minor,
            Degree::LeadingTone => ChordQuality::Diminished,
        }
    }
}
