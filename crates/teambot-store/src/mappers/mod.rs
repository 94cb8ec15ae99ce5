//! Entity ↔ document mappers

mod team;
