pub mod calendar;
pub mod emitter;
pub mod generation;
pub mod locale;
pub mod nameday;
