mod arrange;

pub use arrange::Arrange;
