mod event;
mod job;
mod mentorship;
mod user;
