/// Accessor byte-range resolution command.
pub mod accessor;
/// Document entity summary command.
pub mod doc;
/// Container-level information command.
pub mod info;
/// Mesh primitive attribute table command.
pub mod mesh;
