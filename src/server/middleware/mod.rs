//! Request guards shared by the controllers.

pub mod auth;

#[cfg(test)]
mod test;
