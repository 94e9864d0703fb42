pub mod dataframe;
pub mod input;
pub mod residue;
pub mod state;
pub mod style;
pub mod window;

pub use dataframe::*;
pub use input::*;
pub use residue::*;
pub use state::*;
pub use style::*;
pub use window::*;
