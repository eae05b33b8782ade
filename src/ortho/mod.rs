pub mod complexity;
pub mod options;
pub mod orthogonalize;
pub mod processor;
pub mod reduce;
pub mod simplify;
