mod make_piece;
mod scatter;

pub use make_piece::MakePiece;
pub use scatter::Scatter;
