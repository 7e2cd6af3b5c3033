mod banner;
pub use banner::*;

mod calculator;
pub use calculator::*;

mod colour;
pub use colour::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod fitting;
pub use fitting::*;

mod font;
pub use font::*;

/// Geometric primitives: angles, points, offsets, lines, and rectangles
pub mod geometry;

mod measure;
pub use measure::*;

mod page_edge;
pub use page_edge::*;

mod pagesize;
pub use pagesize::*;

mod position;
pub use position::*;

mod sizing;
pub use sizing::*;

mod slot;
pub use slot::*;

mod token;
pub use token::*;

mod units;
pub use units::*;

mod watermark;
pub use watermark::*;
