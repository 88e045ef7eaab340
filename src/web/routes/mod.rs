pub mod coc;
pub mod contribute;
pub mod events;
pub mod faq;
pub mod health;
pub mod home;
