pub mod scatter;
pub mod terrain;
pub mod track;
pub mod triangle_soup;
