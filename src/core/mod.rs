// Core building blocks with no engine dependencies

pub mod fsm;
pub mod math;
