pub mod extrema;
pub mod locate;
