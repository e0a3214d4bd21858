// Adapters layer: concrete ContentStore implementations. The engine only ever
// sees the port trait; database or CMS backed stores plug in the same way.

pub mod memory;
