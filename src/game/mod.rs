// Game modules: the hero core and the test arena hosting it

pub mod arena;
pub mod hero;
