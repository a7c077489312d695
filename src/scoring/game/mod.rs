pub use carnage::Carnage;
pub use cdiplo::CDiplo;
pub use draw_size::DrawSize;
pub use solo_or_bust::SoloOrBust;
pub use sum_of_squares::SumOfSquares;

mod carnage;
mod cdiplo;
mod draw_size;
mod solo_or_bust;
mod sum_of_squares;
