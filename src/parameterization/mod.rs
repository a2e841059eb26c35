mod classifier;
mod query;
mod table;
mod tangent;

pub use classifier::{classify, DegenerateCurve, Nondegenerate};
pub use table::{num_approximation_segments, ArcLengthParameterization, ArcLengthParams, TableEntry};
