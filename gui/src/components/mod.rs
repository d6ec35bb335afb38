// GUI components module
pub mod chord_panel;
pub mod circle_of_fifths;
pub mod key_grid;

pub use chord_panel::ChordPanel;
pub use circle_of_fifths::CircleOfFifths;
pub use key_grid::KeyGrid;
