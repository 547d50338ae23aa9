pub mod chat;
pub mod pathway;
pub mod skill;
