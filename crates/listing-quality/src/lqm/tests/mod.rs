mod common;
mod engine;
mod guest_opinion;
