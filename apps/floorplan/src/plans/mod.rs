// Plan generation: room gathering → placement → SVG, plus the HTTP handlers.

pub mod generator;
pub mod handlers;
