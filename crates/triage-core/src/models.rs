pub mod case;
pub mod intake;
pub mod risk;
pub mod staff;
pub mod timeline;
pub mod vitals;
