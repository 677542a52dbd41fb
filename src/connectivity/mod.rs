//! Region connectivity beyond what the union-find forest can answer:
//! fragment counting for a hypothetical removal, and forest repair after a
//! real one.

pub mod lowlink;
pub mod rebuild;

pub use lowlink::LowLink;
pub use rebuild::rebuild_regions;
