// Domain layer: core models, ports and pure routing rules. No filesystem access.

pub mod model;
pub mod ports;
pub mod switcher;
