mod client;

pub use client::{HomeworkSource, PracticumClient};
