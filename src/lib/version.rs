pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nPine Barrens fire behavior engine (Byram / adapted Rothermel)"
);

pub const FULL_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
