pub mod c;
pub mod d;
