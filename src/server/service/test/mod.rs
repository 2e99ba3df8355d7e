mod admin;
mod alumni;
mod auth;
mod donation;
mod event;
mod job;
mod mentorship;
